//! Command pipeline through the library API: compile to a file, disassemble
//! it into solver tokens, then canonicalize and diff that output.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use numbersc::commands::{
    canon_report, compile_programs, diff_report, disasm_report, parse_canon_options,
    parse_compile_options, parse_disasm_options,
};
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

/// Solver-token column of a `disasm --values` listing.
fn token_lines(listing: &str) -> String {
    listing
        .lines()
        .map(|line| line.split_once('\t').unwrap().1)
        .map(|tokens| format!("{tokens}\n"))
        .collect()
}

fn compiled_tokens(n_cards: usize, values: &str) -> String {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("programs.bin");
    let n = n_cards.to_string();
    let options = parse_compile_options(&args(&[n.as_str(), "-o", out.to_str().unwrap()])).unwrap();
    let path = compile_programs(&options).unwrap();

    let disasm = parse_disasm_options(&args(&[path.to_str().unwrap(), values])).unwrap();
    let bytes = std::fs::read(&disasm.input).unwrap();
    token_lines(&disasm_report(&bytes, disasm.values.as_deref()).unwrap())
}

#[test]
fn compiled_stream_canonicalizes_without_collisions() {
    let tokens = compiled_tokens(3, "--values=2,3,4");
    assert_eq!(tokens.lines().count(), 10);
    assert_eq!(tokens.lines().nth(6), Some("V(2) V(3) M(++) V(4) A(++) R"));

    let options = parse_canon_options(&args(&["--unique"])).unwrap();
    let report = canon_report(&tokens, "compiled", &options).unwrap();
    assert_eq!(
        report,
        "2\n3\n4\n\
         2 + 3\n2 + 3 + 4\n2 + 4\n2 + (3 × 4)\n\
         3 + 4\n3 + (2 × 4)\n\
         4 + (2 × 3)\n"
    );
}

#[test]
fn reordered_output_diffs_clean() {
    let tokens = compiled_tokens(4, "--values=25,50,75,100");
    let reversed: String = tokens.lines().rev().map(|line| format!("{line}\n")).collect();

    let (report, matched) = diff_report(("forward", tokens.as_str()), ("reversed", reversed.as_str())).unwrap();
    assert!(matched);
    assert!(report.ends_with("solution sets match\n"));
}

#[test]
fn target_filters_compiled_output() {
    let tokens = compiled_tokens(2, "--values=6,7");
    let options = parse_canon_options(&args(&["--target=13"])).unwrap();
    let err = canon_report(&tokens, "compiled", &options).unwrap_err();
    assert_eq!(
        err.to_string(),
        "compiled: line 1: `6` does not evaluate to the target 13"
    );

    let last_line = tokens.lines().last().unwrap();
    assert_eq!(canon_report(last_line, "compiled", &options).unwrap(), "6 + 7\n");
}
