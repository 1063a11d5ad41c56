//! Stencil CLI
//!
//! Command-line driver for [`stencil_lexer`]. It reads a template from an
//! argument, a file, or stdin, drains the scanner, and prints one line per
//! item.
//!
//! ```text
//! args ──► LexOptions ──► SourceBuffer ──► Scanner ──► stdout
//!                                             │
//!                                             └──► report (stderr, on error)
//! ```

use std::sync::Once;

pub mod commands;
pub mod error;
pub mod options;
pub mod report;

pub use commands::{lex_source, load_source, run_lex, LexOutcome};
pub use error::CliError;
pub use options::{parse_lex_options, InputSource, LexOptions};
pub use report::{write_report, ColorMode};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=stencil_lexer=trace` to follow every state step.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
