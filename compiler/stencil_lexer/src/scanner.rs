//! Pull-based transition engine.
//!
//! Nothing is scanned until the caller asks for an item. Each call to
//! [`Scanner::next_item`] runs states until at least one item is queued,
//! then hands out the front of the queue. States push at most two items
//! per step (trailing Text plus EndOfInput), so the queue stays tiny.

use std::collections::VecDeque;
use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::{Cursor, Item, ItemKind, ScanError, State};

/// Streaming scanner over a borrowed input.
pub struct Scanner<'a> {
    /// Diagnostic label; only used in log fields.
    name: String,
    cursor: Cursor<'a>,
    /// Next state to run; `None` once the engine has halted.
    state: Option<State>,
    items: VecDeque<Item<'a>>,
    /// Set once the terminal item has been handed out.
    finished: bool,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `input`, in [`State::Text`].
    pub fn new(name: impl Into<String>, input: &'a str) -> Self {
        Self {
            name: name.into(),
            cursor: Cursor::new(input),
            state: Some(State::Text),
            items: VecDeque::with_capacity(2),
            finished: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn input(&self) -> &'a str {
        self.cursor.input()
    }

    /// Read-only view of the cursor.
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// The state that will run next, or `None` once halted.
    pub fn state(&self) -> Option<State> {
        self.state
    }

    /// Returns `true` once the terminal item has been returned.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Return the next item in input order.
    ///
    /// A clean scan ends with exactly one `EndOfInput` item; a failing scan
    /// ends with exactly one `Error` item. After the terminal item every
    /// further call returns an `EndOfInput` item at the end of the input.
    ///
    /// # Panics
    ///
    /// Panics if the engine halted without queueing a terminal item. States
    /// are written so that this cannot happen.
    pub fn next_item(&mut self) -> Item<'a> {
        loop {
            if let Some(item) = self.items.pop_front() {
                if item.is_terminal() {
                    self.finished = true;
                }
                return item;
            }
            if self.finished {
                return Item::end_of_input(self.input().len());
            }
            let Some(state) = self.state else {
                unreachable!(
                    "scanner {:?} halted at byte {} without a terminal item",
                    self.name,
                    self.cursor.pos()
                );
            };
            self.state = state.step(self);
            if self.state.is_none() {
                debug!(scanner = %self.name, pos = self.cursor.pos(), "halted");
            }
        }
    }

    pub(crate) fn cursor_mut(&mut self) -> &mut Cursor<'a> {
        &mut self.cursor
    }

    /// Queue an item covering the pending text.
    pub(crate) fn emit(&mut self, kind: ItemKind) {
        let (span, text) = self.cursor.take_pending();
        trace!(scanner = %self.name, %kind, %span, "emit");
        self.items.push_back(Item::new(kind, span, text));
    }

    /// Queue an error item and halt.
    pub(crate) fn fail(&mut self, error: ScanError) -> Option<State> {
        debug!(scanner = %self.name, %error, span = %error.span, "scan failed");
        self.items.push_back(Item::error(error));
        None
    }
}

/// Yields every item up to and including the terminal one.
impl<'a> Iterator for Scanner<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Item<'a>> {
        if self.finished {
            None
        } else {
            Some(self.next_item())
        }
    }
}

impl FusedIterator for Scanner<'_> {}

/// Scan `input` to completion, terminal item included.
pub fn lex<'a>(name: &str, input: &'a str) -> Vec<Item<'a>> {
    Scanner::new(name, input).collect()
}
