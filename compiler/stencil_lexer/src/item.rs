//! Items: the typed tokens a scanner produces.

use std::borrow::Cow;
use std::fmt;

use crate::{ScanError, Span};

/// Default number of characters shown by an item's `Display` output.
pub const DEFAULT_DISPLAY_WIDTH: usize = 10;

/// Kind of a scanned item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum ItemKind {
    /// A scan error; the item's value is the error message.
    Error,
    /// Input exhausted cleanly.
    EndOfInput,
    /// `{{`
    LeftDelimiter,
    /// `}}`
    RightDelimiter,
    /// Optionally signed run of ASCII digits inside a block.
    Number,
    /// Plain text outside any block.
    Text,
}

impl ItemKind {
    /// Returns `true` for the kinds that end a scan.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ItemKind::Error | ItemKind::EndOfInput)
    }

    pub fn name(self) -> &'static str {
        match self {
            ItemKind::Error => "Error",
            ItemKind::EndOfInput => "EndOfInput",
            ItemKind::LeftDelimiter => "LeftDelimiter",
            ItemKind::RightDelimiter => "RightDelimiter",
            ItemKind::Number => "Number",
            ItemKind::Text => "Text",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A classified slice of input.
///
/// For every kind except `Error` and `EndOfInput`, `value` borrows exactly
/// `input[span]`. An `Error` item owns its formatted message and carries the
/// structured error in `error`. An `EndOfInput` item has an empty value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item<'a> {
    pub kind: ItemKind,
    pub span: Span,
    pub value: Cow<'a, str>,
    pub error: Option<ScanError>,
}

impl<'a> Item<'a> {
    /// Create an item covering `text`, which sits at `span` in the input.
    pub fn new(kind: ItemKind, span: Span, text: &'a str) -> Self {
        debug_assert!(kind != ItemKind::Error, "error items carry a ScanError");
        Item {
            kind,
            span,
            value: Cow::Borrowed(text),
            error: None,
        }
    }

    /// Create an `Error` item whose value is the rendered message.
    pub fn error(error: ScanError) -> Self {
        Item {
            kind: ItemKind::Error,
            span: error.span,
            value: Cow::Owned(error.to_string()),
            error: Some(error),
        }
    }

    /// Create an `EndOfInput` item at byte `offset`.
    pub fn end_of_input(offset: usize) -> Self {
        Item {
            kind: ItemKind::EndOfInput,
            span: Span::point(offset),
            value: Cow::Borrowed(""),
            error: None,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.kind.is_terminal()
    }

    /// Display adapter that truncates the value to `width` characters.
    pub fn display_width(&self, width: usize) -> ItemDisplay<'_, 'a> {
        ItemDisplay { item: self, width }
    }
}

/// `Display` output for an [`Item`], truncated to a character width.
///
/// `EndOfInput` renders as `EOF` and `Error` as its message. Every other
/// kind renders as a quoted, escaped string; values longer than the width
/// are cut and followed by `...`.
pub struct ItemDisplay<'i, 'a> {
    item: &'i Item<'a>,
    width: usize,
}

impl fmt::Display for ItemDisplay<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item.kind {
            ItemKind::EndOfInput => f.write_str("EOF"),
            ItemKind::Error => f.write_str(&self.item.value),
            _ => {
                let value = self.item.value.as_ref();
                let shown = truncate_chars(value, self.width);
                if shown.len() < value.len() {
                    write!(f, "{shown:?}...")
                } else {
                    write!(f, "{shown:?}")
                }
            }
        }
    }
}

impl fmt::Display for Item<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.display_width(DEFAULT_DISPLAY_WIDTH).fmt(f)
    }
}

/// The prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}
