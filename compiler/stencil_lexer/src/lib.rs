//! Streaming lexer for stencil templates.
//!
//! Templates are plain text with `{{ ... }}` blocks; a block holds optional
//! blanks and signed integers. The scanner is hand-written as a set of
//! states, each of which consumes input, emits items, and names the state
//! to run next:
//!
//! - [`Cursor`]: `start`/`pos` boundaries with single-codepoint backup
//! - [`State`]: the state set and its transitions
//! - [`Scanner`]: pull-based engine that runs states on demand
//! - [`Item`]: a typed slice of input, or a terminal error
//! - [`SourceBuffer`]: owned input decoded from raw bytes
//!
//! ```
//! use stencil_lexer::{lex, ItemKind};
//!
//! let kinds: Vec<ItemKind> = lex("doc", "n = {{ -7 }}").iter().map(|i| i.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [
//!         ItemKind::Text,
//!         ItemKind::LeftDelimiter,
//!         ItemKind::Number,
//!         ItemKind::RightDelimiter,
//!         ItemKind::EndOfInput,
//!     ]
//! );
//! ```

mod cursor;
mod error;
mod item;
mod scanner;
mod source_buffer;
mod span;
mod state;

pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use item::{truncate_chars, Item, ItemDisplay, ItemKind, DEFAULT_DISPLAY_WIDTH};
pub use scanner::{lex, Scanner};
pub use source_buffer::{EncodingIssue, EncodingIssueKind, SourceBuffer};
pub use span::Span;
pub use state::{State, LEFT_DELIM, RIGHT_DELIM};
