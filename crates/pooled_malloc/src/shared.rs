//! # Shared Allocator
//!
//! The pooled allocator behind a single `parking_lot::Mutex`.
//!
//! Every operation takes the lock for its whole duration, so the bump offset
//! and the descriptor table are always updated together. Operations are short
//! and bounded by one scan of the 1000-slot table.

use parking_lot::{Mutex, MutexGuard};
use pooled_malloc_core::{AllocResult, AllocatorStats, BlockOffset, PooledAllocator};

use crate::config::{AllocatorConfig, ConfigError};

/// A thread-safe pooled allocator.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use pooled_malloc::SharedAllocator;
///
/// let pool = Arc::new(SharedAllocator::new(64 * 1024));
/// let worker = {
///     let pool = Arc::clone(&pool);
///     std::thread::spawn(move || pool.allocate_default(128).unwrap())
/// };
/// let mine = pool.allocate_default(128).unwrap();
/// assert_ne!(worker.join().unwrap(), mine);
/// ```
#[derive(Debug)]
pub struct SharedAllocator {
    /// The allocator state.
    inner: Mutex<PooledAllocator>,
    /// Configuration the allocator was built from.
    config: AllocatorConfig,
}

impl SharedAllocator {
    /// Creates an allocator with `capacity` bytes and 16-byte default alignment.
    ///
    /// A capacity of `0` selects the 20 MiB default.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self::build(AllocatorConfig::with_capacity(capacity))
    }

    /// Creates an allocator from a configuration.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidAlignment`] if the config does not validate.
    pub fn with_config(config: AllocatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    pub(crate) fn build(config: AllocatorConfig) -> Self {
        Self {
            inner: Mutex::new(PooledAllocator::new(config.effective_capacity())),
            config,
        }
    }

    /// Returns the configuration this allocator was built from.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Returns the arena capacity in bytes.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.config.effective_capacity()
    }

    /// Allocates `size` bytes. An `alignment` of `0` uses the configured default.
    ///
    /// # Errors
    ///
    /// See [`PooledAllocator::allocate`].
    pub fn allocate(&self, size: usize, alignment: usize) -> AllocResult<BlockOffset> {
        let alignment = self.resolve_alignment(alignment);
        self.inner.lock().allocate(size, alignment)
    }

    /// Allocates `size` bytes with the configured default alignment.
    ///
    /// # Errors
    ///
    /// See [`PooledAllocator::allocate`].
    pub fn allocate_default(&self, size: usize) -> AllocResult<BlockOffset> {
        self.allocate(size, 0)
    }

    /// Releases a block. `None` and unknown offsets are ignored.
    pub fn release(&self, offset: Option<BlockOffset>) {
        self.inner.lock().release(offset);
    }

    /// Resizes a block. An `alignment` of `0` uses the configured default.
    ///
    /// # Errors
    ///
    /// See [`PooledAllocator::reallocate`].
    pub fn reallocate(
        &self,
        offset: Option<BlockOffset>,
        new_size: usize,
        alignment: usize,
    ) -> AllocResult<BlockOffset> {
        let alignment = self.resolve_alignment(alignment);
        self.inner.lock().reallocate(offset, new_size, alignment)
    }

    /// Runs `f` over the bytes of an occupied block.
    pub fn with_block<R>(&self, offset: BlockOffset, f: impl FnOnce(&[u8]) -> R) -> Option<R> {
        self.inner.lock().block(offset).map(f)
    }

    /// Runs `f` over the mutable bytes of an occupied block.
    pub fn with_block_mut<R>(
        &self,
        offset: BlockOffset,
        f: impl FnOnce(&mut [u8]) -> R,
    ) -> Option<R> {
        self.inner.lock().block_mut(offset).map(f)
    }

    /// Returns a usage snapshot.
    #[must_use]
    pub fn stats(&self) -> AllocatorStats {
        self.inner.lock().stats()
    }

    /// Locks the allocator for a batch of operations.
    pub fn lock(&self) -> MutexGuard<'_, PooledAllocator> {
        self.inner.lock()
    }

    #[inline]
    const fn resolve_alignment(&self, alignment: usize) -> usize {
        if alignment == 0 {
            self.config.default_alignment
        } else {
            alignment
        }
    }
}
