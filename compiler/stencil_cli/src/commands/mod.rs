//! Driver commands.

mod lex;

use std::io::{self, IsTerminal, Read, Write};
use std::path::PathBuf;

use stencil_lexer::SourceBuffer;
use tracing::debug;

use crate::options::{parse_lex_options, InputSource, LexOptions};
use crate::{report, CliError};

pub use lex::{lex_source, LexOutcome};

/// Run `stencil lex` with the arguments that follow the subcommand.
///
/// Returns `Ok(true)` when the scan reached end of input and `Ok(false)`
/// when it stopped on an error item.
pub fn run_lex(args: &[String]) -> Result<bool, CliError> {
    let options = parse_lex_options(args)?;
    let source = load_source(&options)?;

    let stderr = io::stderr();
    write_encoding_warnings(&source, &mut stderr.lock())?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let outcome = lex_source(&source, &options, &mut out)?;
    out.flush()?;

    if let Some(error) = &outcome.error {
        if options.report {
            let color = options.color.should_use_colors(stderr.is_terminal());
            report::write_report(&source, error, color, &mut stderr.lock())?;
        }
    }
    Ok(outcome.error.is_none())
}

/// Build the source buffer for the configured input.
///
/// Files and stdin are read as raw bytes so that invalid UTF-8 turns into
/// encoding warnings instead of a hard failure.
pub fn load_source(options: &LexOptions) -> Result<SourceBuffer, CliError> {
    let source = match &options.input {
        None => return Err(CliError::MissingInput),
        Some(InputSource::Text(text)) => SourceBuffer::new(options.name.as_str(), text),
        Some(InputSource::File(path)) => {
            let bytes = std::fs::read(path).map_err(|source| CliError::Read {
                path: path.clone(),
                source,
            })?;
            SourceBuffer::from_bytes(options.name.as_str(), &bytes)
        }
        Some(InputSource::Stdin) => {
            let mut bytes = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut bytes)
                .map_err(|source| CliError::Read {
                    path: PathBuf::from("<stdin>"),
                    source,
                })?;
            SourceBuffer::from_bytes(options.name.as_str(), &bytes)
        }
    };
    debug!(
        name = source.name(),
        bytes = source.len(),
        encoding_issues = source.encoding_issues().len(),
        "loaded source"
    );
    Ok(source)
}

/// One `warning:` line per encoding issue, in input order.
pub(crate) fn write_encoding_warnings(
    source: &SourceBuffer,
    out: &mut impl Write,
) -> io::Result<()> {
    for issue in source.encoding_issues() {
        writeln!(
            out,
            "warning: {}: {} at byte {}",
            source.name(),
            issue.kind.description(),
            issue.pos
        )?;
    }
    Ok(())
}
