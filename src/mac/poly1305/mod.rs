//! Poly1305 message authentication code (RFC 8439).
//!
//! Poly1305 evaluates the message, split into 16-byte blocks, as a polynomial
//! in a clamped secret `r` over the prime field `2^130 - 5`, then masks the
//! result with a second secret `s`. The key must never authenticate more than
//! one message.
//!
//! The implementation is split into layers:
//!
//! - `key`: key validation and clamping
//! - `backend`: field arithmetic, with a limb backend and an
//!   arbitrary-precision backend behind one trait
//! - `context`: the streaming state machine and block slicing
//! - `finalize`: tag computation and constant-time comparison
//!
//! # Example
//!
//! ```
//! use cryptal_poly1305::mac::poly1305::{Backend, DynContext};
//!
//! let key = [7u8; 32];
//! let mut ctx = DynContext::with_backend(Backend::Limb, &key)?;
//! ctx.update(b"hello ")?;
//! ctx.update(b"world")?;
//! let tag = ctx.finish()?;
//!
//! assert_eq!(tag, cryptal_poly1305::mac(&key, b"hello world")?);
//! # Ok::<(), cryptal_poly1305::Poly1305Error>(())
//! ```

mod backend;
mod context;
mod finalize;
mod key;

pub use backend::{Backend, FieldBackend, FromClamped, LimbBackend};
#[cfg(feature = "bigint")]
pub use backend::BigIntBackend;
pub use context::{Context, DynContext, State};

use crate::error::Result;

/// Size of a Poly1305 one-time key in bytes.
pub const KEY_SIZE: usize = 32;

/// Size of a Poly1305 message block in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Size of a Poly1305 tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Poly1305 authentication tag.
pub type Tag = [u8; TAG_SIZE];

/// Computes the tag of `msg` under `key` with the limb backend.
///
/// # Errors
///
/// Returns `InvalidKey` if `key` is not exactly 32 bytes.
pub fn mac(key: &[u8], msg: &[u8]) -> Result<Tag> {
    let mut ctx = Context::<LimbBackend>::init(key)?;
    ctx.update(msg)?;
    ctx.finish()
}

/// Computes the tag of `msg` under `key` with an explicitly chosen backend.
///
/// # Errors
///
/// - `InvalidKey` if `key` is not exactly 32 bytes
/// - `UnavailableBackend` if `backend` was not compiled in
pub fn mac_with(backend: Backend, key: &[u8], msg: &[u8]) -> Result<Tag> {
    let mut ctx = DynContext::with_backend(backend, key)?;
    ctx.update(msg)?;
    ctx.finish()
}

/// Recomputes the tag of `msg` and compares it with `expected`.
///
/// The comparison runs in constant time with respect to the tag contents.
/// An `expected` slice of the wrong length never matches.
///
/// # Errors
///
/// Returns `InvalidKey` if `key` is not exactly 32 bytes.
pub fn verify(key: &[u8], msg: &[u8], expected: &[u8]) -> Result<bool> {
    let tag = mac(key, msg)?;
    Ok(finalize::tags_equal(&tag, expected))
}
