use anyhow::{Result, bail};
use frontsplit_config::{Config, OutputFormat};
use frontsplit_syntax::{Item, ItemKind, Scanner, channel, io};
use std::io::{Write, stdin, stdout};
use std::path::PathBuf;
use std::{env, process};

#[derive(Debug, PartialEq, Eq)]
struct Args {
    file: PathBuf,
    annotate: bool,
    threaded: bool,
}

/// `--file -` reads the document from stdin.
const STDIN_PATH: &str = "-";

/// How a scan finished, as seen by the printer.
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Completed,
    Failed(String),
}

fn usage(program: &str) -> String {
    format!("Usage: {program} --file <path|-> [--annotate] [--threaded]")
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut file = None;
    let mut annotate = false;
    let mut threaded = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => match args.next() {
                Some(path) => file = Some(PathBuf::from(path)),
                None => bail!("--file needs a path"),
            },
            "--annotate" => annotate = true,
            "--threaded" => threaded = true,
            other => match other.strip_prefix("--file=") {
                Some(path) if !path.is_empty() => file = Some(PathBuf::from(path)),
                Some(_) => bail!("--file needs a path"),
                None => bail!("unknown argument: {other}"),
            },
        }
    }

    let Some(file) = file else {
        bail!("file not provided in flags");
    };
    Ok(Args {
        file,
        annotate,
        threaded,
    })
}

impl Args {
    fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_PATH
    }

    /// Name used for log lines and the worker thread.
    fn source_name(&self) -> String {
        if self.reads_stdin() {
            "stdin".to_string()
        } else {
            self.file.display().to_string()
        }
    }
}

/// Writes every payload-carrying item and stops at the first terminal item.
/// Plain values are written byte for byte.
fn print_items<'a, I, W>(items: I, format: OutputFormat, out: &mut W) -> Result<Outcome>
where
    I: IntoIterator<Item = Item<'a>>,
    W: Write,
{
    for item in items {
        match item.kind {
            ItemKind::Eof => return Ok(Outcome::Completed),
            ItemKind::Error => return Ok(Outcome::Failed(item.value.to_string())),
            kind => match format {
                OutputFormat::Plain => {
                    out.write_all(&item.value)?;
                    out.write_all(b"\n")?;
                }
                OutputFormat::Annotated => writeln!(out, "{kind}: {item}")?,
            },
        }
    }
    Ok(Outcome::Completed)
}

fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();
}

fn main() -> Result<()> {
    let mut raw_args = env::args();
    let program = raw_args.next().unwrap_or_else(|| "frontsplit".to_string());

    let args = match parse_args(raw_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("{}", usage(&program));
            process::exit(1);
        }
    };

    let config = match Config::load() {
        Ok(Some(config)) => config,
        Ok(None) => Config::default(),
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };
    init_logging(&config);
    log::debug!("Config path: {}", Config::config_path().display());

    let source = args.source_name();
    let read = if args.reads_stdin() {
        io::read_from(stdin().lock())
    } else {
        io::read_document(&args.file)
    };
    let input = match read {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error: cannot open file provided: {e}");
            process::exit(1);
        }
    };
    log::info!("Scanning {source} ({} bytes)", input.len());

    let format = if args.annotate {
        OutputFormat::Annotated
    } else {
        config.output
    };

    let mut out = stdout().lock();
    let outcome = if args.threaded || config.threaded {
        print_items(channel::spawn(&source, input)?, format, &mut out)?
    } else {
        print_items(Scanner::new(&input), format, &mut out)?
    };
    out.flush()?;

    if let Outcome::Failed(message) = outcome {
        eprintln!("Error: {message}");
        process::exit(1);
    }
    Ok(())
}
