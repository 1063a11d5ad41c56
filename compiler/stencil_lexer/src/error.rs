//! Scan errors.
//!
//! Errors are not returned as `Result::Err` from the scanner. A failing
//! state pushes an [`ItemKind::Error`](crate::ItemKind::Error) item that
//! carries a [`ScanError`] and halts the engine; the driver decides how to
//! surface it.

use std::fmt;

use crate::Span;

/// A scan error located in the input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// The offending codepoint, or an empty span at end of input.
    pub span: Span,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, span: Span) -> Self {
        ScanError { kind, span }
    }
}

/// What went wrong inside a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// End of input or a newline before the closing `}}`.
    #[error("unclosed block")]
    UnclosedBlock,
    /// A codepoint that is not whitespace, a sign, a digit, or the start of
    /// the closing delimiter.
    #[error("unexpected character in block: {}", Codepoint(.0))]
    UnexpectedCharacter(char),
}

/// Renders a codepoint as `U+0078 'x'`, or just `U+0007` when the
/// character is not printable.
struct Codepoint<'a>(&'a char);

impl fmt::Display for Codepoint<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = *self.0;
        write!(f, "U+{:04X}", u32::from(c))?;
        if c.is_control() {
            Ok(())
        } else {
            write!(f, " '{c}'")
        }
    }
}
