//! One-call splitting for callers that want the whole result at once.

use std::borrow::Cow;

use bstr::{BStr, ByteSlice};

use crate::item::ItemKind;
use crate::scanner::Scanner;

/// A scan that ended in an error item.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ScanError {
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrontmatterFormat {
    Toml,
    Yaml,
    Json,
}

impl FrontmatterFormat {
    fn from_kind(kind: ItemKind) -> Option<Self> {
        match kind {
            ItemKind::Toml => Some(FrontmatterFormat::Toml),
            ItemKind::Yaml => Some(FrontmatterFormat::Yaml),
            ItemKind::Json => Some(FrontmatterFormat::Json),
            _ => None,
        }
    }
}

/// Raw frontmatter bytes and the format its fences declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    pub format: FrontmatterFormat,
    pub raw: Cow<'a, BStr>,
}

/// A document split into its frontmatter (if any) and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Split<'a> {
    pub frontmatter: Option<Frontmatter<'a>>,
    pub content: Cow<'a, BStr>,
}

/// Run a scanner over `input` to completion.
///
/// ```
/// use frontsplit_syntax::{split, FrontmatterFormat};
///
/// let doc = split("---\ntitle: Notes\n---\n# Notes\n").unwrap();
/// let fm = doc.frontmatter.unwrap();
/// assert_eq!(fm.format, FrontmatterFormat::Yaml);
/// assert_eq!(&*fm.raw, "title: Notes");
/// assert_eq!(&*doc.content, "# Notes\n");
/// ```
pub fn split(input: &(impl AsRef<[u8]> + ?Sized)) -> Result<Split<'_>, ScanError> {
    let mut frontmatter = None;
    let mut content = Cow::Borrowed(BStr::new(""));

    for item in Scanner::new(input) {
        match item.kind {
            ItemKind::Error => {
                return Err(ScanError {
                    message: item.value.to_str_lossy().into_owned(),
                });
            }
            ItemKind::Content => content = item.value,
            ItemKind::Eof => break,
            kind => {
                frontmatter = FrontmatterFormat::from_kind(kind).map(|format| Frontmatter {
                    format,
                    raw: item.value,
                });
            }
        }
    }

    Ok(Split {
        frontmatter,
        content,
    })
}
