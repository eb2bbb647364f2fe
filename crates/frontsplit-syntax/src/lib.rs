//! # frontsplit-syntax
//!
//! Splits a document into its frontmatter header and its content.
//!
//! A document may open with a metadata header in one of three shapes:
//!
//! ```text
//! +++            ---            {
//! title = "x"    title: x         "title": "x"
//! +++            ---            }
//! body...        body...        body...
//! ```
//!
//! The scanner does not decode that header. TOML, YAML and JSON are all
//! treated as opaque text: the job here is only to find where the header
//! stops and the content starts.
//!
//! ## Items
//!
//! Scanning produces a short sequence of [`Item`]s:
//!
//! ```text
//! [frontmatter]? content eof      (well-formed)
//! error                           (malformed)
//! ```
//!
//! Frontmatter and content values are slices of the input, so nothing is
//! copied. The fences and the line breaks right after them are the only
//! bytes that appear in no item.
//!
//! Input is bytes. A document does not have to be valid UTF-8: stray bytes
//! are scanned as U+FFFD and come back unchanged in the item values.
//!
//! ## Quick Start
//!
//! ```
//! use frontsplit_syntax::{scan, ItemKind};
//!
//! let items = scan("---\ntitle: Hello\n---\n# Hello\n");
//!
//! assert_eq!(items[0].kind, ItemKind::Yaml);
//! assert_eq!(&*items[0].value, "title: Hello");
//! assert_eq!(items[1].kind, ItemKind::Content);
//! assert_eq!(&*items[1].value, "# Hello\n");
//! assert_eq!(items[2].kind, ItemKind::Eof);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! frontsplit-syntax/
//! ├── lib.rs      # This file - public API and listing snapshots
//! ├── item.rs     # Item and ItemKind
//! ├── scanner.rs  # The state machine and its cursor
//! ├── channel.rs  # Scanning on a worker thread
//! ├── split.rs    # split() into frontmatter + content
//! └── io.rs       # Reading documents into memory
//! ```
//!
//! ## Choosing a consumer
//!
//! - [`Scanner`] is a plain iterator and is enough for almost everything.
//! - [`channel::spawn`] runs the scanner on its own thread when scanning
//!   should overlap with slow consumption of earlier items.
//! - [`split`] collects everything into a [`Split`] or a [`ScanError`].

pub mod channel;
pub mod io;
pub mod item;
pub mod scanner;
pub mod split;

pub use item::{Item, ItemKind};
pub use scanner::{Fence, Scanner, scan, scan_with_spans};
pub use split::{Frontmatter, FrontmatterFormat, ScanError, Split, split};
