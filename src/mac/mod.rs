//! Message authentication codes.
//!
//! Currently includes Poly1305 (RFC 8439) as a streaming, one-time MAC.

pub mod poly1305;

/// Re-export of the Poly1305 convenience function.
pub use poly1305::mac as poly1305;
