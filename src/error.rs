//! Error type shared by every Poly1305 operation.

use crate::mac::poly1305::Backend;

/// Errors reported by the Poly1305 engine.
///
/// None of these are transient: the computation is deterministic, so a
/// failed call must not be retried with the same arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Poly1305Error {
    /// The one-time key is not exactly 32 bytes long.
    #[error("poly1305 key must be 32 bytes, got {len}")]
    InvalidKey { len: usize },
    /// The message argument of an update call was absent.
    #[error("poly1305 message input is absent")]
    InvalidInput,
    /// The context has already produced its tag.
    #[error("poly1305 context is already finalized")]
    InvalidState,
    /// The requested arithmetic backend was not compiled into this build.
    #[error("poly1305 backend `{backend}` is not available in this build")]
    UnavailableBackend { backend: Backend },
    /// A backend name could not be parsed.
    #[error("unknown poly1305 backend `{name}`")]
    UnknownBackend { name: String },
}

/// Result alias used across the crate.
pub type Result<T, E = Poly1305Error> = std::result::Result<T, E>;
