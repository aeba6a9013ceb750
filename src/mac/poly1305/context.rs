use std::fmt;

use zeroize::{Zeroize, Zeroizing};

use super::backend::{Backend, FieldBackend, FromClamped, LimbBackend};
use super::key::ClampedKey;
use super::{BLOCK_SIZE, Tag, finalize};
use crate::error::{Poly1305Error, Result};

/// Lifecycle of a [`Context`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Freshly created, nothing absorbed yet.
    Initialized,
    /// At least one `update` call has been made.
    Absorbing,
    /// The tag has been produced; the context accepts no further input.
    Finalized,
}

/// Streaming Poly1305 computation.
///
/// A context authenticates exactly one message under one key:
///
/// 1. [`init`](Context::init) validates and clamps the key
/// 2. [`update`](Context::update) absorbs message bytes, in chunks of any size
/// 3. [`finish`](Context::finish) pads the last partial block and returns the tag
///
/// Any `update` or `finish` after `finish` fails with `InvalidState`.
///
/// The arithmetic backend is chosen at construction, either statically
/// through `B` or at runtime through [`DynContext::with_backend`].
///
/// # Security
///
/// - The key must never be reused for another message.
/// - `s` and the block buffer are wiped on drop; the backend wipes `r` and
///   the accumulator (see `BigIntBackend` for the limits of that backend).
pub struct Context<B: FieldBackend = LimbBackend> {
    backend: B,
    s: Zeroizing<[u8; 16]>,

    /// Pending bytes that do not yet form a full block.
    buffer: [u8; BLOCK_SIZE],
    buffered: usize,

    state: State,
    absorbed: u64,
}

/// Context whose backend was selected at runtime.
pub type DynContext = Context<Box<dyn FieldBackend + Send + Sync>>;

impl<B: FromClamped> Context<B> {
    /// Creates a context for the one-time `key`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidKey` if `key` is not exactly 32 bytes.
    pub fn init(key: &[u8]) -> Result<Self> {
        let key = ClampedKey::new(key)?;
        Ok(Context::from_parts(B::from_clamped(&key.r), &key))
    }
}

impl DynContext {
    /// Creates a context for `key` driven by the given runtime backend.
    ///
    /// # Errors
    ///
    /// - `InvalidKey` if `key` is not exactly 32 bytes
    /// - `UnavailableBackend` if `backend` was not compiled in
    pub fn with_backend(backend: Backend, key: &[u8]) -> Result<Self> {
        let key = ClampedKey::new(key)?;
        let arith = backend.instantiate(&key.r)?;
        Ok(Context::from_parts(arith, &key))
    }
}

impl<B: FieldBackend> Context<B> {
    fn from_parts(backend: B, key: &ClampedKey) -> Self {
        tracing::trace!("poly1305 context initialized");

        Context {
            backend,
            s: Zeroizing::new(key.s),
            buffer: [0; BLOCK_SIZE],
            buffered: 0,
            state: State::Initialized,
            absorbed: 0,
        }
    }

    /// Absorbs `data` into the running MAC.
    ///
    /// Full blocks are absorbed immediately; fewer than 16 trailing bytes
    /// stay buffered until more input arrives or the context is finished.
    /// Empty input is accepted and only moves the context to `Absorbing`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the context is already finalized.
    pub fn update(&mut self, mut data: &[u8]) -> Result<()> {
        self.ensure_open("update")?;
        self.state = State::Absorbing;
        self.absorbed += data.len() as u64;

        if self.buffered > 0 {
            let take = (BLOCK_SIZE - self.buffered).min(data.len());
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];

            if self.buffered < BLOCK_SIZE {
                return Ok(());
            }

            self.backend.absorb_block(&self.buffer);
            self.buffered = 0;
        }

        let mut blocks = data.chunks_exact(BLOCK_SIZE);
        for block in &mut blocks {
            self.backend.absorb_block(block);
        }

        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffered = rest.len();

        Ok(())
    }

    /// Absorbs input that may be absent.
    ///
    /// This is the entry point for bindings where the message argument is
    /// nullable.
    ///
    /// # Errors
    ///
    /// - `InvalidState` if the context is already finalized, whether or not
    ///   `data` is present
    /// - `InvalidInput` if `data` is `None`; the context is left untouched
    pub fn update_opt(&mut self, data: Option<&[u8]>) -> Result<()> {
        self.ensure_open("update")?;

        match data {
            Some(data) => self.update(data),
            None => Err(Poly1305Error::InvalidInput),
        }
    }

    /// Flushes the pending partial block and returns the tag.
    ///
    /// The last partial block, if any, gets its `0x01` byte directly after
    /// the payload. A message whose length is a multiple of 16 absorbs no
    /// extra block.
    ///
    /// # Errors
    ///
    /// Returns `InvalidState` if the context is already finalized.
    pub fn finish(&mut self) -> Result<Tag> {
        self.ensure_open("finish")?;

        if self.buffered > 0 {
            self.backend.absorb_block(&self.buffer[..self.buffered]);
        }
        self.buffer.zeroize();
        self.buffered = 0;
        self.state = State::Finalized;

        tracing::trace!(bytes = self.absorbed, "poly1305 tag computed");

        Ok(finalize::tag(&self.backend.accumulator(), &self.s))
    }

    /// Current lifecycle state.
    pub fn state(&self) -> State {
        self.state
    }

    /// Canonical accumulator over every full block absorbed so far.
    ///
    /// Buffered bytes of an incomplete block are not included.
    pub fn accumulator(&self) -> [u8; 17] {
        self.backend.accumulator()
    }

    fn ensure_open(&self, op: &'static str) -> Result<()> {
        if self.state == State::Finalized {
            tracing::warn!(op, "poly1305 context used after finish");
            return Err(Poly1305Error::InvalidState);
        }
        Ok(())
    }
}

impl<B: FieldBackend> Drop for Context<B> {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}

impl<B: FieldBackend> fmt::Debug for Context<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Context")
            .field("state", &self.state)
            .field("buffered", &self.buffered)
            .field("absorbed", &self.absorbed)
            .finish_non_exhaustive()
    }
}
