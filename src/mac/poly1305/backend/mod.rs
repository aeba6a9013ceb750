//! Field arithmetic backends over `2^130 - 5`.
//!
//! Every backend implements [`FieldBackend`]: absorb one padded block into
//! the accumulator and expose the canonical accumulator. Backends must agree
//! bit for bit after every block, so the context never needs to know which
//! one it drives.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::{Poly1305Error, Result};

#[cfg(feature = "bigint")]
mod bigint;
mod limb;

#[cfg(feature = "bigint")]
pub use bigint::BigIntBackend;
pub use limb::LimbBackend;

/// Polynomial evaluation capability shared by all backends.
pub trait FieldBackend {
    /// Absorbs one message block into the accumulator.
    ///
    /// `block` holds 1 to 16 payload bytes. The implicit `0x01` byte is
    /// appended directly after the last payload byte, then:
    ///
    /// ```text
    /// h = (h + block) * r mod (2^130 - 5)
    /// ```
    ///
    /// The accumulator is canonical (`h < 2^130 - 5`) when this returns.
    fn absorb_block(&mut self, block: &[u8]);

    /// Returns the canonical accumulator as 17 little-endian bytes.
    ///
    /// Only the low two bits of the last byte can be set.
    fn accumulator(&self) -> [u8; 17];
}

/// Construction of a backend from a clamped multiplier.
pub trait FromClamped: FieldBackend + Sized {
    /// Creates a backend with `h = 0` and the given clamped `r`.
    fn from_clamped(r: &[u8; 16]) -> Self;
}

impl<B: FieldBackend + ?Sized> FieldBackend for Box<B> {
    fn absorb_block(&mut self, block: &[u8]) {
        (**self).absorb_block(block)
    }

    fn accumulator(&self) -> [u8; 17] {
        (**self).accumulator()
    }
}

/// Runtime-selectable arithmetic backend.
///
/// Parses from `"limb"` or `"bigint"` (surrounding whitespace and case are
/// ignored) and displays as the same names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Five 26-bit limbs with explicit carry propagation.
    Limb,
    /// Arbitrary-precision integers (`num-bigint`).
    BigInt,
}

impl Backend {
    /// Every backend known to the crate, in preference order.
    pub const ALL: [Backend; 2] = [Backend::Limb, Backend::BigInt];

    /// Backend used when the caller expresses no preference.
    pub const fn preferred() -> Backend {
        Backend::Limb
    }

    /// Backends compiled into this build.
    ///
    /// Computed once per process and cached.
    pub fn available() -> &'static [Backend] {
        static AVAILABLE: OnceLock<Vec<Backend>> = OnceLock::new();

        AVAILABLE.get_or_init(|| {
            let available: Vec<Backend> = Backend::ALL
                .into_iter()
                .filter(|b| b.compiled_in())
                .collect();
            tracing::debug!(?available, "poly1305 backends detected");
            available
        })
    }

    /// Whether this backend can be instantiated.
    pub fn is_available(self) -> bool {
        Backend::available().contains(&self)
    }

    /// Lowercase name, as accepted by [`FromStr`].
    pub const fn name(self) -> &'static str {
        match self {
            Backend::Limb => "limb",
            Backend::BigInt => "bigint",
        }
    }

    const fn compiled_in(self) -> bool {
        match self {
            Backend::Limb => true,
            Backend::BigInt => cfg!(feature = "bigint"),
        }
    }

    /// Creates a boxed backend for the clamped multiplier `r`.
    pub(crate) fn instantiate(self, r: &[u8; 16]) -> Result<Box<dyn FieldBackend + Send + Sync>> {
        if !self.is_available() {
            return Err(Poly1305Error::UnavailableBackend { backend: self });
        }

        tracing::debug!(backend = self.name(), "poly1305 backend selected");

        match self {
            Backend::Limb => Ok(Box::new(LimbBackend::from_clamped(r))),
            #[cfg(feature = "bigint")]
            Backend::BigInt => Ok(Box::new(BigIntBackend::from_clamped(r))),
            #[cfg(not(feature = "bigint"))]
            Backend::BigInt => Err(Poly1305Error::UnavailableBackend { backend: self }),
        }
    }
}

impl Default for Backend {
    fn default() -> Self {
        Backend::preferred()
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Backend {
    type Err = Poly1305Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "limb" => Ok(Backend::Limb),
            "bigint" => Ok(Backend::BigInt),
            _ => Err(Poly1305Error::UnknownBackend { name: s.to_owned() }),
        }
    }
}
