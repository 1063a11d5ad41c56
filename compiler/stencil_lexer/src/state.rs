//! Scanner states.
//!
//! Each state runs against the scanner until it reaches a boundary, emits
//! zero or more items, and names the state to run next. `None` means the
//! engine halts; only [`State::Text`] (at end of input) and a failure inside
//! a block ever return it.
//!
//! Every step makes progress: it either advances the cursor, emits an item,
//! or halts. [`State::Text`] and [`State::InsideBlock`] hand over to a
//! delimiter state only when the delimiter is at the cursor, and the
//! delimiter states always consume it.
//!
//! ```text
//! Text --"{{"--> LeftDelimiter --> InsideBlock --"}}"--> RightDelimiter --> Text
//!                                   |        ^
//!                            sign/digit      |
//!                                   v        |
//!                                   Number --+
//! ```

use tracing::trace;

use crate::{ItemKind, ScanError, ScanErrorKind, Scanner};

/// Opens a block.
pub const LEFT_DELIM: &str = "{{";
/// Closes a block.
pub const RIGHT_DELIM: &str = "}}";

/// The state the scanner runs next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Plain text up to the next `{{` or end of input. Initial state.
    Text,
    /// Consume `{{`.
    LeftDelimiter,
    /// Between the delimiters: skip blanks, dispatch numbers, find `}}`.
    InsideBlock,
    /// Consume `}}`.
    RightDelimiter,
    /// Optional sign followed by ASCII digits.
    Number,
}

impl State {
    /// Run this state once and return the next one.
    pub(crate) fn step(self, scanner: &mut Scanner<'_>) -> Option<State> {
        trace!(
            scanner = scanner.name(),
            state = ?self,
            pos = scanner.cursor().pos(),
            "step"
        );
        match self {
            State::Text => lex_text(scanner),
            State::LeftDelimiter => lex_left_delim(scanner),
            State::InsideBlock => lex_inside_block(scanner),
            State::RightDelimiter => lex_right_delim(scanner),
            State::Number => lex_number(scanner),
        }
    }
}

fn is_sign(c: char) -> bool {
    c == '+' || c == '-'
}

fn lex_text(scanner: &mut Scanner<'_>) -> Option<State> {
    let found = scanner.cursor_mut().skip_to(LEFT_DELIM);
    if scanner.cursor_mut().has_pending() {
        scanner.emit(ItemKind::Text);
    }
    if found {
        return Some(State::LeftDelimiter);
    }
    scanner.emit(ItemKind::EndOfInput);
    None
}

fn lex_left_delim(scanner: &mut Scanner<'_>) -> Option<State> {
    scanner.cursor_mut().advance(LEFT_DELIM.len());
    scanner.emit(ItemKind::LeftDelimiter);
    Some(State::InsideBlock)
}

fn lex_right_delim(scanner: &mut Scanner<'_>) -> Option<State> {
    scanner.cursor_mut().advance(RIGHT_DELIM.len());
    scanner.emit(ItemKind::RightDelimiter);
    Some(State::Text)
}

fn lex_inside_block(scanner: &mut Scanner<'_>) -> Option<State> {
    loop {
        let cursor = scanner.cursor_mut();
        if cursor.starts_with(RIGHT_DELIM) {
            // Pending text is not emitted here. Every read below either
            // discards, backs up, or fails, so nothing is ever pending.
            debug_assert!(!cursor.has_pending(), "pending text before {RIGHT_DELIM}");
            return Some(State::RightDelimiter);
        }
        match cursor.read_next() {
            None | Some('\n') => {
                let span = cursor.last_read_span();
                return scanner.fail(ScanError::new(ScanErrorKind::UnclosedBlock, span));
            }
            Some(' ' | '\t') => cursor.discard(),
            Some('+' | '-' | '0'..='9') => {
                cursor.backup();
                return Some(State::Number);
            }
            Some(c) => {
                let span = cursor.last_read_span();
                return scanner.fail(ScanError::new(
                    ScanErrorKind::UnexpectedCharacter(c),
                    span,
                ));
            }
        }
    }
}

/// A bare sign with no digits is still a Number.
fn lex_number(scanner: &mut Scanner<'_>) -> Option<State> {
    let cursor = scanner.cursor_mut();
    cursor.accept(is_sign);
    cursor.accept_run(|c| c.is_ascii_digit());
    scanner.emit(ItemKind::Number);
    Some(State::InsideBlock)
}
