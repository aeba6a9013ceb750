/// Clamped Poly1305 key material.
///
/// The one-time key is split as follows:
///
/// - `key[0..16]` → `r` (clamped, used for polynomial multiplication)
/// - `key[16..32]` → `s` (added at finalization)
///
/// Both halves are wiped when the value is dropped.
#[derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub(crate) struct ClampedKey {
    /// Clamped multiplier, little-endian.
    pub(crate) r: [u8; 16],

    /// Additive mask, little-endian, unmodified.
    pub(crate) s: [u8; 16],
}

/// Byte-wise clamp mask applied to `r`.
///
/// Bytes 3, 7, 11 and 15 keep their low nibble; bytes 4, 8 and 12 lose their
/// two low bits.
const CLAMP: [u8; 16] = [
    0xff, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f, 0xfc, 0xff, 0xff, 0x0f,
];

impl ClampedKey {
    /// Validates and clamps a raw one-time key.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if `key` is not exactly 32 bytes. No state is
    /// created in that case.
    pub(crate) fn new(key: &[u8]) -> crate::Result<Self> {
        let key: &[u8; 32] = key
            .try_into()
            .map_err(|_| crate::Poly1305Error::InvalidKey { len: key.len() })?;

        let mut r = [0u8; 16];
        for ((r_i, k_i), m_i) in r.iter_mut().zip(&key[..16]).zip(&CLAMP) {
            *r_i = k_i & m_i;
        }

        let mut s = [0u8; 16];
        s.copy_from_slice(&key[16..]);

        Ok(ClampedKey { r, s })
    }
}
