//! `numbers compile <N>`: write the packed program stream for `N` cards.

use std::path::PathBuf;

use numbers_bytecode::{
    c_header, compile, hex_listing, CompiledPrograms, MAX_CARDS, PRACTICAL_MAX_CARDS,
};

use crate::CliError;

/// Artifact format for `--emit`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmitFormat {
    /// Raw packed bytes.
    #[default]
    Bin,
    /// `xxd -i` style C array.
    CHeader,
    /// Hex dump, 16 bytes per line.
    Hex,
}

impl EmitFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bin" => Some(Self::Bin),
            "c-header" | "header" => Some(Self::CHeader),
            "hex" => Some(Self::Hex),
            _ => None,
        }
    }

    pub const fn extension(self) -> &'static str {
        match self {
            Self::Bin => "bin",
            Self::CHeader => "h",
            Self::Hex => "hex",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CompileOptions {
    /// Number of cards (positional `<N>`)
    pub n_cards: usize,
    /// Output file path (-o, --output=)
    pub output: Option<PathBuf>,
    /// Artifact format (--emit=)
    pub emit: EmitFormat,
}

/// Help text for `numbers compile`.
pub fn compile_usage() -> String {
    format!(
        "Usage: numbers compile <N> [options]\n\
         \n\
         N is at most {MAX_CARDS}; above {PRACTICAL_MAX_CARDS} cards the shape enumeration\n\
         needs more memory than most machines have.\n\
         \n\
         Options:\n  \
         -o <path>        Output file (default: programs-<N>-cards.<ext>)\n  \
         --emit=<type>    Emit: bin, c-header, hex\n"
    )
}

/// Parse the arguments following `compile`.
pub fn parse_compile_options(args: &[String]) -> Result<CompileOptions, CliError> {
    let mut options = CompileOptions::default();
    let mut n_cards = None;
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];
        if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err(CliError::Usage("-o needs a path".to_string()));
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        }

        if let Some(path) = arg.strip_prefix("--output=") {
            options.output = Some(PathBuf::from(path));
        } else if let Some(emit) = arg.strip_prefix("--emit=") {
            options.emit = EmitFormat::from_str(emit).ok_or_else(|| {
                CliError::Usage(format!(
                    "unknown emit type '{emit}', options: bin, c-header, hex"
                ))
            })?;
        } else if arg.starts_with('-') {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if n_cards.is_none() {
            let n = arg
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid card count '{arg}'")))?;
            n_cards = Some(n);
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
        i += 1;
    }

    options.n_cards = n_cards.ok_or_else(|| CliError::Usage("missing card count".to_string()))?;
    Ok(options)
}

/// `programs-<N>-cards.<ext>` in the current directory.
pub fn default_output_path(n_cards: usize, emit: EmitFormat) -> PathBuf {
    PathBuf::from(format!("programs-{n_cards}-cards.{}", emit.extension()))
}

/// Artifact contents for a compiled stream.
pub fn render_artifact(compiled: &CompiledPrograms, emit: EmitFormat) -> Vec<u8> {
    match emit {
        EmitFormat::Bin => compiled.bytes().to_vec(),
        EmitFormat::CHeader => c_header(compiled.n_cards(), compiled.bytes()).into_bytes(),
        EmitFormat::Hex => hex_listing(compiled.bytes()).into_bytes(),
    }
}

/// Compile and write the artifact; returns the path written.
pub fn compile_programs(options: &CompileOptions) -> Result<PathBuf, CliError> {
    let compiled = compile(options.n_cards)?;
    let path = options
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(options.n_cards, options.emit));

    std::fs::write(&path, render_artifact(&compiled, options.emit)).map_err(|source| {
        CliError::Write {
            path: path.clone(),
            source,
        }
    })?;

    tracing::info!(
        n_cards = compiled.n_cards(),
        programs = compiled.n_programs(),
        bytes = compiled.bytes().len(),
        path = %path.display(),
        "wrote program stream"
    );
    Ok(path)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
