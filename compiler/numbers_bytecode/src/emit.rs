//! Artifact renderings of a compiled stream.

use std::fmt::Write as _;

const HEADER_BYTES_PER_LINE: usize = 12;
const HEX_BYTES_PER_LINE: usize = 16;

/// C identifier the solver engine uses for the `n_cards` stream,
/// e.g. `programs_6_cards_bin`.
pub fn artifact_symbol(n_cards: usize) -> String {
    format!("programs_{n_cards}_cards_bin")
}

/// An `xxd -i`-style C header embedding `bytes`:
///
/// ```text
/// unsigned char programs_3_cards_bin[] = {
///   0x00, 0x30, ...
/// };
/// unsigned int programs_3_cards_bin_len = 42;
/// ```
pub fn c_header(n_cards: usize, bytes: &[u8]) -> String {
    let symbol = artifact_symbol(n_cards);
    let mut out = String::new();
    let _ = writeln!(out, "unsigned char {symbol}[] = {{");
    let n_lines = bytes.len().div_ceil(HEADER_BYTES_PER_LINE);
    for (index, line) in bytes.chunks(HEADER_BYTES_PER_LINE).enumerate() {
        let items: Vec<String> = line.iter().map(|b| format!("0x{b:02x}")).collect();
        let separator = if index + 1 < n_lines { "," } else { "" };
        let _ = writeln!(out, "  {}{separator}", items.join(", "));
    }
    out.push_str("};\n");
    let _ = writeln!(out, "unsigned int {symbol}_len = {};", bytes.len());
    out
}

/// Plain hex listing, sixteen bytes per line.
pub fn hex_listing(bytes: &[u8]) -> String {
    let mut out = String::new();
    for line in bytes.chunks(HEX_BYTES_PER_LINE) {
        let items: Vec<String> = line.iter().map(|b| format!("{b:02x}")).collect();
        out.push_str(&items.join(" "));
        out.push('\n');
    }
    out
}
