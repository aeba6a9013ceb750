use super::Tag;

/// Computes `(h + s) mod 2^128` as a 16-byte little-endian tag.
///
/// # Parameters
///
/// - `accumulator`: canonical accumulator, 17 little-endian bytes
/// - `s`: second half of the one-time key
///
/// # Notes
///
/// - Bits 128 and 129 of the accumulator are dropped, along with the carry
///   out of the addition. No reduction modulo `2^130 - 5` happens here.
pub(crate) fn tag(accumulator: &[u8; 17], s: &[u8; 16]) -> Tag {
    let mut h = [0u8; 16];
    h.copy_from_slice(&accumulator[..16]);

    u128::from_le_bytes(h)
        .wrapping_add(u128::from_le_bytes(*s))
        .to_le_bytes()
}

/// Constant-time tag comparison.
///
/// Runs in time independent of the contents of either slice; only the
/// length of `expected` may leak.
pub(crate) fn tags_equal(tag: &Tag, expected: &[u8]) -> bool {
    if expected.len() != tag.len() {
        return false;
    }

    let mut diff = 0u8;
    for (a, b) in tag.iter().zip(expected) {
        diff |= a ^ b;
    }

    std::hint::black_box(diff) == 0
}
