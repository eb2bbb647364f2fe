//! Items produced by the [`Scanner`](crate::scanner::Scanner).
//!
//! An item is one classified, contiguous span of the input. The set of kinds
//! is closed: a document yields at most one frontmatter item, exactly one
//! content item, and then the end marker. A malformed document yields a
//! single error item instead.

use std::borrow::Cow;
use std::fmt;

use bstr::{BStr, BString, ByteSlice};

/// The kind of segment an [`Item`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Malformed input; the value is a diagnostic message.
    Error,
    /// Text between `+++` fences, fences stripped.
    Toml,
    /// Text between `---` fences, fences stripped.
    Yaml,
    /// A balanced `{...}` block, braces included.
    Json,
    /// Everything after the frontmatter.
    Content,
    /// End marker, always empty.
    Eof,
}

impl ItemKind {
    pub fn is_frontmatter(self) -> bool {
        matches!(self, ItemKind::Toml | ItemKind::Yaml | ItemKind::Json)
    }

    /// Error and EOF end the item sequence.
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemKind::Error | ItemKind::Eof)
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Error => "error",
            ItemKind::Toml => "toml",
            ItemKind::Yaml => "yaml",
            ItemKind::Json => "json",
            ItemKind::Content => "content",
            ItemKind::Eof => "eof",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned item: its kind and the bytes it covers.
///
/// Spans borrow from the scanned input and are not required to be valid
/// UTF-8. Error messages are owned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item<'a> {
    pub kind: ItemKind,
    pub value: Cow<'a, BStr>,
}

impl<'a> Item<'a> {
    pub fn new(kind: ItemKind, value: &'a (impl AsRef<[u8]> + ?Sized)) -> Self {
        Self {
            kind,
            value: Cow::Borrowed(value.as_ref().as_bstr()),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: ItemKind::Error,
            value: Cow::Owned(BString::from(message.into())),
        }
    }

    pub fn eof() -> Self {
        Self::new(ItemKind::Eof, "")
    }

    pub fn is_error(&self) -> bool {
        self.kind == ItemKind::Error
    }

    pub fn is_eof(&self) -> bool {
        self.kind == ItemKind::Eof
    }

    /// Detaches the item from the input it was scanned from.
    pub fn into_owned(self) -> Item<'static> {
        Item {
            kind: self.kind,
            value: Cow::Owned(self.value.into_owned()),
        }
    }
}

/// Short, human-readable form used in listings and logs.
///
/// Values longer than [`PREVIEW_CHARS`] characters are cut and suffixed
/// with `...`. Invalid UTF-8 shows as U+FFFD.
impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.value.to_str_lossy();
        match self.kind {
            ItemKind::Eof => f.write_str("EOF"),
            ItemKind::Error => f.write_str(&text),
            _ => match text.char_indices().nth(PREVIEW_CHARS) {
                Some((cut, _)) => write!(f, "{:?}...", &text[..cut]),
                None => write!(f, "{:?}", text),
            },
        }
    }
}

/// Number of characters of a value shown by `Display`.
pub const PREVIEW_CHARS: usize = 10;
