use std::sync::OnceLock;

use num_bigint::BigUint;
use num_traits::Zero;

use super::{FieldBackend, FromClamped};

/// The Poly1305 prime, `2^130 - 5`.
fn prime() -> &'static BigUint {
    static P: OnceLock<BigUint> = OnceLock::new();
    P.get_or_init(|| (BigUint::from(1u8) << 130u32) - BigUint::from(5u8))
}

/// Poly1305 field arithmetic on arbitrary-precision integers.
///
/// Each block is a plain `add`, `mul`, `rem` over [`BigUint`]. Slower than
/// [`LimbBackend`](super::LimbBackend) and not constant time, but trivially
/// auditable, which makes it the reference the limb backend is tested
/// against.
///
/// # Security
///
/// `r` and the accumulator are overwritten with zeros on drop. Digit buffers
/// that `BigUint` freed or reallocated during earlier arithmetic are not
/// wiped.
pub struct BigIntBackend {
    r: BigUint,
    h: BigUint,
}

impl FromClamped for BigIntBackend {
    fn from_clamped(r: &[u8; 16]) -> Self {
        BigIntBackend {
            r: BigUint::from_bytes_le(r),
            h: BigUint::zero(),
        }
    }
}

impl FieldBackend for BigIntBackend {
    fn absorb_block(&mut self, block: &[u8]) {
        let mut padded = [0u8; 17];
        padded[..block.len()].copy_from_slice(block);
        padded[block.len()] = 1;

        let m = BigUint::from_bytes_le(&padded[..=block.len()]);
        self.h = ((&self.h + m) * &self.r) % prime();
    }

    fn accumulator(&self) -> [u8; 17] {
        let mut out = [0u8; 17];
        let bytes = self.h.to_bytes_le();
        // h < 2^130 - 5, so at most 17 bytes
        out[..bytes.len()].copy_from_slice(&bytes);
        out
    }
}

/// Overwrites the digits of `v` with zeros in place.
///
/// `assign_from_slice` reuses the existing digit buffer, so the zeros land
/// on the old digits before the value is normalized.
fn wipe(v: &mut BigUint) {
    let digits = v.iter_u32_digits().len();
    v.assign_from_slice(&vec![0u32; digits]);
}

impl Drop for BigIntBackend {
    fn drop(&mut self) {
        wipe(&mut self.r);
        wipe(&mut self.h);
    }
}
