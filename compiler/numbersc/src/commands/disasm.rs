//! `numbers disasm <file>`: list the programs in a packed stream.

use std::fmt::Write as _;
use std::path::PathBuf;

use numbers_bytecode::disassemble;

use super::parse_values;
use crate::CliError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisasmOptions {
    pub input: PathBuf,
    /// Card values to render each program as solver tokens (--values=)
    pub values: Option<Vec<i64>>,
}

/// Parse the arguments following `disasm`.
pub fn parse_disasm_options(args: &[String]) -> Result<DisasmOptions, CliError> {
    let mut input = None;
    let mut values = None;

    for arg in args {
        if let Some(list) = arg.strip_prefix("--values=") {
            values = Some(parse_values(list)?);
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if input.is_none() {
            input = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    let input = input.ok_or_else(|| CliError::Usage("missing program stream".to_string()))?;
    Ok(DisasmOptions { input, values })
}

/// One line per program: its index and opcodes, plus solver tokens when
/// card values are given.
pub fn disasm_report(bytes: &[u8], values: Option<&[i64]>) -> Result<String, CliError> {
    let programs = disassemble(bytes)?;
    let width = programs.len().saturating_sub(1).to_string().len();

    let mut out = String::new();
    for (index, program) in programs.iter().enumerate() {
        let _ = write!(out, "{index:>width$}: {program}");
        if let Some(values) = values {
            match program.to_solver_tokens(values) {
                Some(tokens) => {
                    let _ = write!(out, "\t{tokens}");
                }
                None => {
                    return Err(CliError::Usage(format!(
                        "program {index} reads card slot {} but only {} values were given",
                        program.max_slot().unwrap_or(0),
                        values.len()
                    )));
                }
            }
        }
        out.push('\n');
    }
    tracing::debug!(programs = programs.len(), bytes = bytes.len(), "disassembled stream");
    Ok(out)
}

/// Run `disasm` and print the listing.
pub fn disasm_file(options: &DisasmOptions) -> Result<(), CliError> {
    let bytes = std::fs::read(&options.input).map_err(|source| CliError::Read {
        path: options.input.clone(),
        source,
    })?;
    print!("{}", disasm_report(&bytes, options.values.as_deref())?);
    Ok(())
}
