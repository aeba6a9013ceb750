//! Poly1305 one-time message authentication
//!
//! This crate provides the Poly1305 MAC as a standalone, streaming primitive.
//! It is the authentication half of AEAD constructions such as
//! ChaCha20-Poly1305 and is kept separate from any cipher so that it can be
//! audited on its own.
//!
//! # Module overview
//!
//! - `mac`
//!   Message authentication codes. It currently contains Poly1305 with:
//!   - key clamping and validation
//!   - a streaming context (`init` / `update` / `finish`)
//!   - two interchangeable field arithmetic backends over `2^130 - 5`:
//!     a 26-bit limb backend and an arbitrary-precision backend
//!   - a one-shot `mac` helper and constant-time `verify`
//!
//! - `error`
//!   The error type shared by every operation.
//!
//! # Design goals
//!
//! - Bit-exact tags regardless of backend or input chunking
//! - Bounded memory: a 16-byte buffer and a fixed-size accumulator
//! - Explicit lifecycle: a context produces exactly one tag
//! - Key material wiped on drop
//!
//! Key management and encryption are out of scope. Callers supply a fresh
//! one-time key per message.

pub mod error;
pub mod mac;

pub use error::{Poly1305Error, Result};
pub use mac::poly1305::{Backend, Context, DynContext, State, Tag, mac, mac_with, verify};
