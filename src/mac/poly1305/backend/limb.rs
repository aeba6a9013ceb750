use super::{FieldBackend, FromClamped};

/// 2^26 - 1, the mask of one limb.
const MASK: u32 = 0x3ffffff;

/// Poly1305 field arithmetic on five 26-bit limbs.
///
/// Limb products are computed in `u64`, so no step can overflow:
/// clamping keeps every `r` limb (and `5 * r` limb) below 2^29 and the
/// accumulator limbs stay below 2^27 before multiplication.
///
/// # Security
///
/// - No secret-dependent branches or memory accesses.
/// - Limbs are wiped when the backend is dropped.
#[derive(zeroize::Zeroize, zeroize::ZeroizeOnDrop)]
pub struct LimbBackend {
    /// Clamped `r` value, split into five 26-bit limbs.
    r: [u32; 5],

    /// Accumulator `h`, represented as five 26-bit limbs.
    ///
    /// Canonical (`h < 2^130 - 5`, every limb below 2^26) between blocks.
    h: [u32; 5],
}

/// Splits a 16-byte little-endian value plus a high byte into 26-bit limbs.
///
/// `hibit` lands at bit 128, so only `0` or `1` is meaningful.
#[inline(always)]
fn to_limbs(bytes: &[u8; 16], hibit: u32) -> [u32; 5] {
    let t0 = u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    let t1 = u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]);
    let t2 = u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]);
    let t3 = u32::from_le_bytes([bytes[12], bytes[13], bytes[14], bytes[15]]);

    [
        t0 & MASK,
        ((t0 >> 26) | (t1 << 6)) & MASK,
        ((t1 >> 20) | (t2 << 12)) & MASK,
        ((t2 >> 14) | (t3 << 18)) & MASK,
        (t3 >> 8) | (hibit << 24),
    ]
}

/// One full carry pass, folding bits above 2^130 back in as `* 5`.
#[inline(always)]
fn carry(h: &mut [u32; 5]) {
    let mut c: u32;

    c = h[0] >> 26;
    h[0] &= MASK;
    h[1] += c;

    c = h[1] >> 26;
    h[1] &= MASK;
    h[2] += c;

    c = h[2] >> 26;
    h[2] &= MASK;
    h[3] += c;

    c = h[3] >> 26;
    h[3] &= MASK;
    h[4] += c;

    c = h[4] >> 26;
    h[4] &= MASK;
    h[0] += c * 5;

    c = h[0] >> 26;
    h[0] &= MASK;
    h[1] += c;
}

/// Brings `h` into `[0, 2^130 - 5)` with every limb below 2^26.
///
/// Two carry passes leave `h < 2^130` with clean limbs; a single
/// constant-time conditional subtraction of `p` finishes the job.
fn canonicalize(h: &mut [u32; 5]) {
    carry(h);
    carry(h);

    // g = h + 5 - 2^130, kept only if it did not borrow
    let mut g = [0u32; 5];
    let mut c = 5u32;
    for (h_i, g_i) in h.iter().zip(&mut g) {
        *g_i = h_i.wrapping_add(c);
        c = *g_i >> 26;
        *g_i &= MASK;
    }

    let mask = 0u32.wrapping_sub(c);
    for (h_i, g_i) in h.iter_mut().zip(&g) {
        *h_i = (*h_i & !mask) | (*g_i & mask);
    }
}

impl FromClamped for LimbBackend {
    fn from_clamped(r: &[u8; 16]) -> Self {
        LimbBackend {
            r: to_limbs(r, 0),
            h: [0; 5],
        }
    }
}

impl FieldBackend for LimbBackend {
    fn absorb_block(&mut self, block: &[u8]) {
        debug_assert!(!block.is_empty() && block.len() <= 16);

        let mut padded = [0u8; 16];
        let hibit = if block.len() == 16 {
            padded.copy_from_slice(block);
            1
        } else {
            padded[..block.len()].copy_from_slice(block);
            padded[block.len()] = 1;
            0
        };

        let m = to_limbs(&padded, hibit);
        for (h_i, m_i) in self.h.iter_mut().zip(&m) {
            *h_i += m_i;
        }

        let h0 = self.h[0] as u64;
        let h1 = self.h[1] as u64;
        let h2 = self.h[2] as u64;
        let h3 = self.h[3] as u64;
        let h4 = self.h[4] as u64;

        let r0 = self.r[0] as u64;
        let r1 = self.r[1] as u64;
        let r2 = self.r[2] as u64;
        let r3 = self.r[3] as u64;
        let r4 = self.r[4] as u64;

        let r1_5 = r1 * 5;
        let r2_5 = r2 * 5;
        let r3_5 = r3 * 5;
        let r4_5 = r4 * 5;

        let d0 = h0 * r0 + h1 * r4_5 + h2 * r3_5 + h3 * r2_5 + h4 * r1_5;
        let mut d1 = h0 * r1 + h1 * r0 + h2 * r4_5 + h3 * r3_5 + h4 * r2_5;
        let mut d2 = h0 * r2 + h1 * r1 + h2 * r0 + h3 * r4_5 + h4 * r3_5;
        let mut d3 = h0 * r3 + h1 * r2 + h2 * r1 + h3 * r0 + h4 * r4_5;
        let mut d4 = h0 * r4 + h1 * r3 + h2 * r2 + h3 * r1 + h4 * r0;

        d1 += d0 >> 26;
        d2 += d1 >> 26;
        d3 += d2 >> 26;
        d4 += d3 >> 26;

        let d0 = (d0 & MASK as u64) + (d4 >> 26) * 5;

        self.h = [
            (d0 & MASK as u64) as u32,
            ((d1 & MASK as u64) + (d0 >> 26)) as u32,
            (d2 & MASK as u64) as u32,
            (d3 & MASK as u64) as u32,
            (d4 & MASK as u64) as u32,
        ];

        canonicalize(&mut self.h);
    }

    fn accumulator(&self) -> [u8; 17] {
        let h = self.h.map(u128::from);
        let low = h[0] | (h[1] << 26) | (h[2] << 52) | (h[3] << 78) | (h[4] << 104);

        let mut out = [0u8; 17];
        out[..16].copy_from_slice(&low.to_le_bytes());
        out[16] = (self.h[4] >> 24) as u8;
        out
    }
}
