// Hexadecimal text rendering of frame bytes

use std::fmt::Write;

/// Render bytes as upper-case, zero-padded two-digit hex, one space after
/// every byte including the last. Total over all byte values.
pub fn hex_line(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 3);
    for &byte in bytes {
        // Writing to a String cannot fail
        let _ = write!(out, "{:02X} ", byte);
    }
    out
}
