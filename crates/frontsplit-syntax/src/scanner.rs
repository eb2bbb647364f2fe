//! # Scanner - Splitting Frontmatter From Content
//!
//! The scanner is a small state machine over a byte slice. It looks at the first
//! character of the document to decide which frontmatter format (if any) the
//! document opens with, finds where that block ends, and then hands back the
//! rest of the document as a single content item.
//!
//! ```text
//! Detect ─┬─ '+' ─→ Fenced(Toml) ─┐
//!         ├─ '-' ─→ Fenced(Yaml) ─┼─→ Content ─→ Done
//!         ├─ '{' ─→ Json ─────────┘
//!         └─ else ───────────────────→ Content
//! ```
//!
//! Any state may fail instead, which produces one error item and stops.
//!
//! Input is read one code point at a time. Bytes that are not valid UTF-8
//! decode as U+FFFD but stay in the spans untouched, so a Latin-1 body under
//! a valid header still comes back byte for byte.
//!
//! ## Cursor
//!
//! The scanner keeps two offsets: `start`, the beginning of the span not yet
//! emitted, and `pos`, the read cursor. Emitting an item hands out
//! `input[start..pos]` and moves `start` up to `pos`. Fences and the line
//! breaks around them are skipped with [`Scanner::ignore`], so they belong to
//! no item.
//!
//! ## Pulling items
//!
//! `Scanner` is an [`Iterator`]. Each call to `next` runs state transitions
//! until at least one item is ready, so nothing is scanned ahead of the
//! consumer by more than one transition.
//!
//! ```
//! use frontsplit_syntax::{ItemKind, Scanner};
//!
//! let kinds: Vec<ItemKind> = Scanner::new("+++\ntitle = 1\n+++\nbody")
//!     .map(|item| item.kind)
//!     .collect();
//! assert_eq!(kinds, [ItemKind::Toml, ItemKind::Content, ItemKind::Eof]);
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::ops::Range;

use bstr::ByteSlice;

use crate::item::{Item, ItemKind};

/// A line-delimited frontmatter fence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fence {
    Toml,
    Yaml,
}

impl Fence {
    pub const TOML: &'static str = "+++";
    pub const YAML: &'static str = "---";

    pub fn delimiter(self) -> &'static str {
        match self {
            Fence::Toml => Self::TOML,
            Fence::Yaml => Self::YAML,
        }
    }

    pub fn marker(self) -> char {
        match self {
            Fence::Toml => '+',
            Fence::Yaml => '-',
        }
    }

    pub fn kind(self) -> ItemKind {
        match self {
            Fence::Toml => ItemKind::Toml,
            Fence::Yaml => ItemKind::Yaml,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Fence::Toml => "TOML",
            Fence::Yaml => "YAML",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Detect,
    Fenced(Fence),
    Json,
    Content,
    Done,
}

/// Splits one document into frontmatter and content items.
pub struct Scanner<'a> {
    input: &'a [u8],
    /// Start of the pending span.
    start: usize,
    /// Read cursor.
    pos: usize,
    /// Byte width of the last char read by `next_char`.
    width: usize,
    /// `None` once the machine has halted.
    state: Option<State>,
    pending: VecDeque<(Item<'a>, Range<usize>)>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            input: input.as_ref(),
            start: 0,
            pos: 0,
            width: 0,
            state: Some(State::Detect),
            pending: VecDeque::new(),
        }
    }

    /// Returns the next item together with the byte range it covers.
    ///
    /// Error items cover an empty range at the point of failure; the EOF
    /// item covers `len..len`.
    pub fn next_spanned(&mut self) -> Option<(Item<'a>, Range<usize>)> {
        loop {
            if let Some(spanned) = self.pending.pop_front() {
                return Some(spanned);
            }
            let state = self.state.take()?;
            log::trace!("scanner: {state:?} at byte {}", self.pos);
            self.state = self.step(state);
        }
    }

    fn step(&mut self, state: State) -> Option<State> {
        match state {
            State::Detect => Some(self.detect()),
            State::Fenced(fence) => self.fenced(fence),
            State::Json => self.json(),
            State::Content => Some(self.content()),
            State::Done => {
                self.emit(ItemKind::Eof);
                None
            }
        }
    }

    fn detect(&mut self) -> State {
        match self.peek_char() {
            Some('+') => State::Fenced(Fence::Toml),
            Some('-') => State::Fenced(Fence::Yaml),
            Some('{') => State::Json,
            _ => State::Content,
        }
    }

    fn fenced(&mut self, fence: Fence) -> Option<State> {
        for _ in 0..fence.delimiter().len() {
            if self.next_char() != Some(fence.marker()) {
                return self.error(format!("invalid {} delimiter", fence.label()));
            }
        }
        let opened_line = self.consume_line_break();
        self.ignore();

        // A fence right after the opening line closes an empty block.
        if !(opened_line && self.has_prefix(fence.delimiter())) {
            while !self.closes_after_line_break(fence) {
                if self.next_char().is_none() {
                    return self.error(format!(
                        "EOF looking for end {} front matter delimiter",
                        fence.label()
                    ));
                }
            }
        }

        self.emit(fence.kind());
        log::debug!(
            "scanner: {} frontmatter ends at byte {}",
            fence.label(),
            self.pos
        );
        self.consume_line_break();
        self.advance_past(fence.delimiter());
        self.consume_line_break();
        self.ignore();
        Some(State::Content)
    }

    fn json(&mut self) -> Option<State> {
        let mut depth = 0usize;
        let mut in_quote = false;
        loop {
            match self.next_char() {
                None => return self.error("unexpected EOF parsing JSON front matter"),
                Some('\\') => {
                    self.next_char();
                }
                Some('"') => in_quote = !in_quote,
                Some('{') if !in_quote => depth += 1,
                Some('}') if !in_quote => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Some(_) => {}
            }
        }

        self.emit(ItemKind::Json);
        log::debug!("scanner: JSON frontmatter ends at byte {}", self.pos);
        self.consume_line_break();
        self.ignore();
        Some(State::Content)
    }

    fn content(&mut self) -> State {
        while self.next_char().is_some() {}
        self.emit(ItemKind::Content);
        State::Done
    }

    fn error(&mut self, message: impl Into<String>) -> Option<State> {
        let message = message.into();
        log::debug!("scanner: error at byte {}: {message}", self.pos);
        self.pending
            .push_back((Item::error(message), self.pos..self.pos));
        None
    }

    // === Cursor primitives ===

    /// Reads one code point, or `None` at end of input. An invalid
    /// sequence reads as U+FFFD and is stepped over whole.
    fn next_char(&mut self) -> Option<char> {
        let (c, width) = bstr::decode_utf8(&self.input[self.pos..]);
        self.width = width;
        if width == 0 {
            return None;
        }
        self.pos += width;
        Some(c.unwrap_or(char::REPLACEMENT_CHARACTER))
    }

    /// Steps back over the last char read. Only valid once per `next_char`.
    fn backup(&mut self) {
        self.pos -= self.width;
    }

    fn peek_char(&mut self) -> Option<char> {
        let c = self.next_char();
        self.backup();
        c
    }

    fn ignore(&mut self) {
        self.start = self.pos;
    }

    fn emit(&mut self, kind: ItemKind) {
        let input = self.input;
        let span = self.start..self.pos;
        self.pending
            .push_back((Item::new(kind, input[span.clone()].as_bstr()), span));
        self.start = self.pos;
    }

    fn has_prefix(&self, literal: &str) -> bool {
        self.input[self.pos..].starts_with(literal.as_bytes())
    }

    /// Moves past `literal`, which the caller has already matched.
    fn advance_past(&mut self, literal: &str) {
        self.pos += literal.len();
    }

    /// Consumes a CR, an LF, or a CR/LF pair in either order.
    fn consume_line_break(&mut self) -> bool {
        match self.next_char() {
            Some(first @ ('\r' | '\n')) => {
                let other = if first == '\r' { '\n' } else { '\r' };
                if self.next_char() != Some(other) {
                    self.backup();
                }
                true
            }
            _ => {
                self.backup();
                false
            }
        }
    }

    /// Length of the line break at the cursor, as `consume_line_break`
    /// would consume it.
    fn line_break_len(&self) -> usize {
        match &self.input[self.pos..] {
            [b'\r', b'\n', ..] | [b'\n', b'\r', ..] => 2,
            [b'\r' | b'\n', ..] => 1,
            _ => 0,
        }
    }

    fn closes_after_line_break(&self, fence: Fence) -> bool {
        let len = self.line_break_len();
        len > 0
            && self.input[self.pos + len..].starts_with(fence.delimiter().as_bytes())
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_spanned().map(|(item, _)| item)
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan the input into its full item sequence.
pub fn scan(input: &(impl AsRef<[u8]> + ?Sized)) -> Vec<Item<'_>> {
    Scanner::new(input).collect()
}

/// Scan and return items along with their byte spans.
pub fn scan_with_spans(
    input: &(impl AsRef<[u8]> + ?Sized),
) -> Vec<(Item<'_>, Range<usize>)> {
    let mut scanner = Scanner::new(input);
    std::iter::from_fn(|| scanner.next_spanned()).collect()
}
