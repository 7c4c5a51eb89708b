//! `numbers canon [file]`: print solver output in canonical form.

use std::fmt::Write as _;
use std::path::PathBuf;

use numbers_solution::{ResultNode, SolutionSet};

use super::{input_name, parse_numbered, read_text};
use crate::CliError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CanonOptions {
    /// Solver output to read; stdin when absent or `-`
    pub input: Option<PathBuf>,
    /// Reject solutions that do not evaluate to this (--target=)
    pub target: Option<i64>,
    /// Print each solution's canonical key tuple (--keys)
    pub keys: bool,
    /// Print each distinct solution once, sorted by key (--unique)
    pub unique: bool,
}

/// Parse the arguments following `canon`.
pub fn parse_canon_options(args: &[String]) -> Result<CanonOptions, CliError> {
    let mut options = CanonOptions::default();

    for arg in args {
        if let Some(target) = arg.strip_prefix("--target=") {
            let target = target
                .parse()
                .map_err(|_| CliError::Usage(format!("invalid target '{target}'")))?;
            options.target = Some(target);
        } else if arg == "--keys" {
            options.keys = true;
        } else if arg == "--unique" || arg == "-u" {
            options.unique = true;
        } else if arg.starts_with('-') && arg != "-" {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        } else if options.input.is_none() {
            options.input = Some(PathBuf::from(arg));
        } else {
            return Err(CliError::Usage(format!("unexpected argument '{arg}'")));
        }
    }

    Ok(options)
}

/// Canonicalize every solution in `text`, one per output line.
///
/// `input` names the source in error messages.
pub fn canon_report(text: &str, input: &str, options: &CanonOptions) -> Result<String, CliError> {
    let solutions = parse_numbered(text, input)?;

    if let Some(target) = options.target {
        for (line, node) in &solutions {
            if node.evaluate() != Some(target) {
                tracing::debug!(line, value = ?node.evaluate(), target, "solution misses target");
                return Err(CliError::OffTarget {
                    input: input.to_string(),
                    line: *line,
                    solution: node.pretty(),
                    target,
                });
            }
        }
    }

    let mut out = String::new();
    if options.unique {
        let set = SolutionSet::from_nodes(solutions.iter().map(|(_, node)| node));
        for node in set.solutions() {
            write_solution(&mut out, node, options.keys);
        }
        tracing::debug!(total = set.total(), distinct = set.len(), "deduplicated solutions");
    } else {
        for (_, node) in &solutions {
            write_solution(&mut out, &node.canonical(), options.keys);
        }
    }
    Ok(out)
}

/// Run `canon` and print the report to stdout.
pub fn canon_solutions(options: &CanonOptions) -> Result<(), CliError> {
    let path = options.input.as_deref();
    let text = read_text(path)?;
    print!("{}", canon_report(&text, &input_name(path), options)?);
    Ok(())
}

fn write_solution(out: &mut String, canonical: &ResultNode, keys: bool) {
    if keys {
        let _ = writeln!(out, "{}\t{}", canonical.pretty(), canonical.key());
    } else {
        let _ = writeln!(out, "{}", canonical.pretty());
    }
}
