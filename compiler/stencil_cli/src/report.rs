//! Source reports for scan errors, rendered with `ariadne`.

use std::io::{self, Write};

use ariadne::{Config, IndexType, Label, Report, ReportKind, Source};
use stencil_lexer::{ScanError, ScanErrorKind, SourceBuffer};

/// Color output mode for reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when stderr is a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Parse the value of `--color=<mode>`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }

    /// Resolve to a boolean. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// Write a labelled report for `error`, pointing into `source`.
///
/// Spans are byte offsets into the decoded text.
pub fn write_report(
    source: &SourceBuffer,
    error: &ScanError,
    color: bool,
    out: &mut impl Write,
) -> io::Result<()> {
    let name = source.name();
    let range = error.span.to_range();
    Report::build(ReportKind::Error, name, range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(&error.kind)
        .with_label(Label::new((name, range)).with_message(label_text(error.kind)))
        .finish()
        .write((name, Source::from(source.as_str())), out)
}

fn label_text(kind: ScanErrorKind) -> &'static str {
    match kind {
        ScanErrorKind::UnclosedBlock => "expected `}}` before this point",
        ScanErrorKind::UnexpectedCharacter(_) => "expected a blank, a number, or `}}`",
    }
}
