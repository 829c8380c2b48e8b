//! Byte to text normalization
//!
//! RTF is a 7-bit format, only the ASCII content of a file is inspected.
//! Anything else is dropped from the text view and flagged.

/// ASCII text view of a raw document
#[derive(Debug, Clone)]
pub struct TextView {
    pub text: String,
    pub raw_len: usize,
    pub has_non_printable: bool,
}

/// Printable set: visible ASCII plus space, tab, newline, carriage return,
/// vertical tab and form feed.
pub fn is_printable(byte: u8) -> bool {
    matches!(byte, 0x20..=0x7e | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Decodes bytes as ASCII, silently discarding bytes above 0x7f
pub fn normalize(data: &[u8]) -> TextView {
    let has_non_printable = data.iter().any(|&b| !is_printable(b));
    let text: String = data
        .iter()
        .filter(|b| b.is_ascii())
        .map(|&b| b as char)
        .collect();

    TextView {
        text,
        raw_len: data.len(),
        has_non_printable,
    }
}
