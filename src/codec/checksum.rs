// Negative-sum checksum: one byte that makes the checked span sum to zero

/// Unsigned 8-bit sum of `bytes`, two's-complement negated. Appending the
/// result to the input makes the total sum congruent to 0 modulo 256.
pub fn negative_sum(bytes: &[u8]) -> u8 {
    bytes
        .iter()
        .fold(0u8, |acc, &b| acc.wrapping_add(b))
        .wrapping_neg()
}

/// True when a span that already includes its checksum byte sums to zero.
pub fn verifies(bytes: &[u8]) -> bool {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b)) == 0
}
