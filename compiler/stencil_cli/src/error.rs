//! Driver errors: bad invocations and unreadable inputs.
//!
//! Scan errors are not here. They arrive as `Error` items and decide the
//! exit status on their own.

use std::io;
use std::path::PathBuf;

/// A failure that stops the driver before or while lexing.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing input: pass template text or --file <path>")]
    MissingInput,

    #[error("unknown option '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' needs a value")]
    MissingValue(&'static str),

    #[error("invalid value '{value}' for {option}: expected {expected}")]
    InvalidValue {
        option: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("unexpected argument '{0}': only one input may be given")]
    UnexpectedArgument(String),

    #[error("{}", read_message(.path, .source))]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] io::Error),
}

impl CliError {
    /// Usage errors are the caller's fault; everything else is I/O.
    pub fn is_usage(&self) -> bool {
        !matches!(self, CliError::Read { .. } | CliError::Write(_))
    }
}

fn read_message(path: &std::path::Path, err: &io::Error) -> String {
    let path = path.display();
    match err.kind() {
        io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        _ => format!("error reading '{path}': {err}"),
    }
}
