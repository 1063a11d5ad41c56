//! `stencil lex`: drain a scanner and print its items.

use std::io::{self, Write};

use stencil_lexer::{truncate_chars, Item, ItemKind, ScanError, SourceBuffer};

use crate::options::LexOptions;

/// Characters of input echoed in the `lexing ...` header.
const HEADER_WIDTH: usize = 100;

/// What a finished scan produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexOutcome {
    /// Items pulled from the scanner, terminal item included.
    pub items: usize,
    /// The error that stopped the scan, if it did not reach end of input.
    pub error: Option<ScanError>,
}

/// Scan `source` and write the header plus one line per item to `out`.
///
/// Stops at the first terminal item. `EndOfInput` is printed only with
/// `show_eof`; an `Error` item is always printed.
pub fn lex_source(
    source: &SourceBuffer,
    options: &LexOptions,
    out: &mut impl Write,
) -> io::Result<LexOutcome> {
    writeln!(
        out,
        "lexing {:?}...",
        truncate_chars(source.as_str(), HEADER_WIDTH)
    )?;

    let mut scanner = source.scanner();
    let mut items = 0;
    loop {
        let item = scanner.next_item();
        items += 1;
        match item.kind {
            ItemKind::EndOfInput => {
                if options.show_eof {
                    write_item(out, &item, options)?;
                }
                return Ok(LexOutcome { items, error: None });
            }
            ItemKind::Error => {
                write_item(out, &item, options)?;
                return Ok(LexOutcome {
                    items,
                    error: item.error,
                });
            }
            _ => write_item(out, &item, options)?,
        }
    }
}

fn write_item(out: &mut impl Write, item: &Item<'_>, options: &LexOptions) -> io::Result<()> {
    let value = item.display_width(options.width);
    if options.spans {
        writeln!(
            out,
            "{:>9}  {:<14} {value}",
            item.span.to_string(),
            item.kind
        )
    } else {
        writeln!(out, "{value}")
    }
}
