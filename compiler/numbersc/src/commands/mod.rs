//! Command handlers for the `numbers` CLI.
//!
//! Each submodule owns one command: its options, their parsing, and a pure
//! report function the handler wraps with file I/O. Shared input helpers
//! live here in the module root.

use std::path::{Path, PathBuf};

use numbers_solution::ResultNode;

use crate::CliError;

mod canon;
mod compile;
mod diff;
mod disasm;

pub use canon::{canon_report, canon_solutions, parse_canon_options, CanonOptions};
pub use compile::{
    compile_programs, compile_usage, default_output_path, parse_compile_options, render_artifact,
    CompileOptions, EmitFormat,
};
pub use diff::{diff_report, diff_solutions, parse_diff_options, DiffOptions};
pub use disasm::{disasm_file, disasm_report, parse_disasm_options, DisasmOptions};

/// Read a text input, treating `None` or `-` as stdin.
pub(crate) fn read_text(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) if path != Path::new("-") => {
            std::fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
        _ => std::io::read_to_string(std::io::stdin()).map_err(|source| CliError::Read {
            path: PathBuf::from("<stdin>"),
            source,
        }),
    }
}

/// Display name for an input in error messages.
pub(crate) fn input_name(path: Option<&Path>) -> String {
    match path {
        Some(path) if path != Path::new("-") => path.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}

/// Parse solver output, keeping each solution's 1-based line number.
///
/// `input` names the source in the error for the first malformed line.
pub(crate) fn parse_numbered(text: &str, input: &str) -> Result<Vec<(usize, ResultNode)>, CliError> {
    numbers_solution::parse_numbered(text).map_err(|source| CliError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Parse a comma-separated list of card values, e.g. `25,50,75,100`.
pub(crate) fn parse_values(list: &str) -> Result<Vec<i64>, CliError> {
    list.split(',')
        .map(|item| {
            item.trim()
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid card value '{item}' in --values")))
        })
        .collect()
}
