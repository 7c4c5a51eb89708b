//! Numbers-puzzle toolchain driver.
//!
//! Library half of the `numbers` binary: command handlers, their option
//! parsing, and logging setup. The binary only dispatches on the command
//! name.

pub mod commands;

use std::path::PathBuf;
use std::sync::Once;

use numbers_bytecode::{CompileError, DecodeError};
use numbers_solution::LineError;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=numbers_bytecode=debug` or `RUST_LOG=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}

/// Failure of a CLI command.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error("cannot read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Compile(#[from] CompileError),
    #[error("malformed program stream: {0}")]
    Decode(#[from] DecodeError),
    #[error("{input}: {source}")]
    Parse {
        input: String,
        #[source]
        source: LineError,
    },
    #[error("{input}: line {line}: `{solution}` does not evaluate to the target {target}")]
    OffTarget {
        input: String,
        line: usize,
        solution: String,
        target: i64,
    },
}
