use std::path::PathBuf;

use pretty_assertions::assert_eq;

use super::{
    compile_programs, compile_usage, default_output_path, parse_compile_options, render_artifact,
    CompileOptions, EmitFormat,
};
use crate::CliError;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

// === Option parsing ===

#[test]
fn card_count_only() {
    assert_eq!(
        parse_compile_options(&args(&["6"])).unwrap(),
        CompileOptions {
            n_cards: 6,
            output: None,
            emit: EmitFormat::Bin,
        }
    );
}

#[test]
fn output_and_emit() {
    let options = parse_compile_options(&args(&["4", "-o", "out.h", "--emit=c-header"])).unwrap();
    assert_eq!(options.n_cards, 4);
    assert_eq!(options.output, Some(PathBuf::from("out.h")));
    assert_eq!(options.emit, EmitFormat::CHeader);

    let options = parse_compile_options(&args(&["--emit=hex", "--output=x.hex", "2"])).unwrap();
    assert_eq!(options.n_cards, 2);
    assert_eq!(options.output, Some(PathBuf::from("x.hex")));
    assert_eq!(options.emit, EmitFormat::Hex);
}

#[test]
fn usage_errors() {
    assert!(matches!(parse_compile_options(&args(&[])), Err(CliError::Usage(_))));
    assert!(matches!(parse_compile_options(&args(&["six"])), Err(CliError::Usage(_))));
    assert!(matches!(parse_compile_options(&args(&["3", "4"])), Err(CliError::Usage(_))));
    assert!(matches!(parse_compile_options(&args(&["3", "-o"])), Err(CliError::Usage(_))));
    assert!(matches!(
        parse_compile_options(&args(&["3", "--emit=elf"])),
        Err(CliError::Usage(_))
    ));
    assert!(matches!(
        parse_compile_options(&args(&["3", "--fast"])),
        Err(CliError::Usage(_))
    ));
}

// === Artifacts ===

#[test]
fn default_paths_follow_format() {
    assert_eq!(
        default_output_path(6, EmitFormat::Bin),
        PathBuf::from("programs-6-cards.bin")
    );
    assert_eq!(
        default_output_path(6, EmitFormat::CHeader),
        PathBuf::from("programs-6-cards.h")
    );
    assert_eq!(
        default_output_path(2, EmitFormat::Hex),
        PathBuf::from("programs-2-cards.hex")
    );
}

#[test]
fn rendered_formats() {
    let compiled = numbers_bytecode::compile(2).unwrap();
    let bin = render_artifact(&compiled, EmitFormat::Bin);
    assert_eq!(bin, vec![0x00, 0x30, 0x01, 0x30, 0x00, 0x01, 0x22, 0x30, 0x30]);

    let hex = String::from_utf8(render_artifact(&compiled, EmitFormat::Hex)).unwrap();
    assert_eq!(hex, "00 30 01 30 00 01 22 30 30\n");

    let header = String::from_utf8(render_artifact(&compiled, EmitFormat::CHeader)).unwrap();
    assert!(header.starts_with("unsigned char programs_2_cards_bin[] = {\n"));
    assert!(header.ends_with("unsigned int programs_2_cards_bin_len = 9;\n"));
}

#[test]
fn writes_artifact_to_output_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("programs.bin");
    let options = CompileOptions {
        n_cards: 3,
        output: Some(path.clone()),
        emit: EmitFormat::Bin,
    };
    assert_eq!(compile_programs(&options).unwrap(), path);
    let written = std::fs::read(&path).unwrap();
    assert_eq!(written.len(), 42);
    assert_eq!(written.last(), Some(&0x30));
}

#[test]
fn too_many_cards_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let options = CompileOptions {
        n_cards: 16,
        output: Some(dir.path().join("never.bin")),
        emit: EmitFormat::Bin,
    };
    assert!(matches!(compile_programs(&options), Err(CliError::Compile(_))));
}

#[test]
fn usage_states_card_limits() {
    let usage = compile_usage();
    assert!(usage.starts_with("Usage: numbers compile <N> [options]\n\n"));
    assert!(usage.contains("N is at most 15; above 8 cards the shape enumeration\n"));
    assert!(usage.contains("\n  --emit=<type>    Emit: bin, c-header, hex\n"));
}
