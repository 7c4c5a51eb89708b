use pretty_assertions::assert_eq;

use super::{compile, expected_program_count, CompileError, MAX_CARDS};

/// Worked out by hand from the generation order of shapes and subsets.
#[rustfmt::skip]
const THREE_CARD_STREAM: [u8; 42] = [
    // One-card programs
    0x00, 0x30,
    0x01, 0x30,
    0x02, 0x30,
    // Two-card programs (add only)
    0x00, 0x01, 0x22, 0x30,
    0x00, 0x02, 0x22, 0x30,
    0x01, 0x02, 0x22, 0x30,
    // Three-card programs (add at the root)
    0x00, 0x01, 0x12, 0x02, 0x22, 0x30,
    0x00, 0x01, 0x02, 0x23, 0x30,
    0x00, 0x02, 0x12, 0x01, 0x22, 0x30,
    0x00, 0x01, 0x02, 0x12, 0x22, 0x30,
    // Sentinel
    0x30,
];

#[test]
fn three_card_stream_is_bit_exact() {
    let compiled = compile(3).unwrap();
    assert_eq!(compiled.bytes(), THREE_CARD_STREAM.as_slice());
    assert_eq!(compiled.n_cards(), 3);
    assert_eq!(compiled.n_programs(), 10);
}

#[test]
fn zero_cards_is_just_the_sentinel() {
    let compiled = compile(0).unwrap();
    assert_eq!(compiled.into_bytes(), vec![0x30]);
}

#[test]
fn program_count_matches_shapes_times_subsets() {
    for n_cards in 1..=5 {
        let compiled = compile(n_cards).unwrap();
        assert_eq!(compiled.n_programs(), expected_program_count(n_cards), "N = {n_cards}");
    }
}

#[test]
fn six_card_program_count() {
    // 6·1 + 15·1 + 20·4 + 15·26 + 6·236 + 1·2752
    assert_eq!(expected_program_count(6), 4659);
    assert_eq!(compile(6).unwrap().n_programs(), 4659);
}

#[test]
fn every_program_ends_in_return() {
    let compiled = compile(4).unwrap();
    let returns = compiled.bytes().iter().filter(|&&b| b == 0x30).count();
    assert_eq!(returns, compiled.n_programs() + 1);
    assert_eq!(compiled.bytes().last(), Some(&0x30));
}

#[test]
fn too_many_cards_is_rejected_up_front() {
    assert_eq!(compile(MAX_CARDS + 1), Err(CompileError::TooManyCards(16)));
    assert_eq!(
        CompileError::TooManyCards(16).to_string(),
        "cannot compile programs for 16 cards (at most 15 fit the 4-bit opcode fields)"
    );
}

#[test]
fn compilation_is_reproducible() {
    assert_eq!(compile(4).unwrap(), compile(4).unwrap());
}
