//! `numbers diff <left> <right>`: compare two solvers' solution sets.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use numbers_solution::{compare, SolutionSet};

use super::{input_name, parse_numbered, read_text};
use crate::CliError;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffOptions {
    pub left: PathBuf,
    pub right: PathBuf,
}

/// Parse the arguments following `diff`: exactly two inputs, either of which
/// may be `-` for stdin.
pub fn parse_diff_options(args: &[String]) -> Result<DiffOptions, CliError> {
    let mut paths = Vec::with_capacity(2);
    for arg in args {
        if arg.starts_with('-') && arg != "-" {
            return Err(CliError::Usage(format!("unknown option '{arg}'")));
        }
        paths.push(PathBuf::from(arg));
    }

    match <[PathBuf; 2]>::try_from(paths) {
        Ok([left, right]) => {
            if left == Path::new("-") && right == Path::new("-") {
                return Err(CliError::Usage("only one input can be stdin".to_string()));
            }
            Ok(DiffOptions { left, right })
        }
        Err(paths) => Err(CliError::Usage(format!(
            "diff takes two solver outputs, got {}",
            paths.len()
        ))),
    }
}

/// Compare two solver outputs by canonical form.
///
/// Lists solutions found by only one side, then solutions a side reported
/// more than once. Returns the report and whether both found the same
/// distinct solutions; duplicates alone do not make the sets differ.
pub fn diff_report(
    (left_name, left_text): (&str, &str),
    (right_name, right_text): (&str, &str),
) -> Result<(String, bool), CliError> {
    let left_solutions = parse_numbered(left_text, left_name)?;
    let right_solutions = parse_numbered(right_text, right_name)?;
    let left = SolutionSet::from_nodes(left_solutions.iter().map(|(_, node)| node));
    let right = SolutionSet::from_nodes(right_solutions.iter().map(|(_, node)| node));
    let comparison = compare(&left, &right);

    let mut out = String::new();
    for (name, set) in [(left_name, &left), (right_name, &right)] {
        let _ = writeln!(
            out,
            "{name}: {} solutions, {} distinct",
            set.total(),
            set.len()
        );
    }

    if comparison.is_match() {
        out.push_str("solution sets match\n");
    }
    for (name, only) in [
        (left_name, &comparison.left_only),
        (right_name, &comparison.right_only),
    ] {
        if only.is_empty() {
            continue;
        }
        let _ = writeln!(out, "only in {name}:");
        for node in only {
            let _ = writeln!(out, "  {}", node.pretty());
        }
    }

    for (name, set) in [(left_name, &left), (right_name, &right)] {
        let duplicates = set.duplicates();
        if duplicates.is_empty() {
            continue;
        }
        let _ = writeln!(out, "duplicates in {name}:");
        for (node, count) in duplicates {
            let _ = writeln!(out, "  {} ({count} times)", node.pretty());
        }
    }

    Ok((out, comparison.is_match()))
}

/// Run `diff`, printing the report; returns whether the sets match.
pub fn diff_solutions(options: &DiffOptions) -> Result<bool, CliError> {
    let left_name = input_name(Some(options.left.as_path()));
    let right_name = input_name(Some(options.right.as_path()));
    let left_text = read_text(Some(options.left.as_path()))?;
    let right_text = read_text(Some(options.right.as_path()))?;

    let (report, matched) = diff_report(
        (left_name.as_str(), left_text.as_str()),
        (right_name.as_str(), right_text.as_str()),
    )?;
    print!("{report}");
    Ok(matched)
}
