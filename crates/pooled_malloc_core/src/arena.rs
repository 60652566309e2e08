//! # Arena
//!
//! The single fixed-size backing buffer every block is carved from.

/// Capacity used when the caller asks for zero bytes (20 MiB).
pub const DEFAULT_CAPACITY: usize = 20 * 1024 * 1024;

/// A fixed-capacity, bump-pointer byte arena.
///
/// The bump offset is the high-water mark: it only ever moves forward.
/// Space behind it is handed out again through the block table, never by
/// rewinding the offset.
///
/// # Thread Safety
///
/// Mutation requires `&mut self`. Share it through a lock.
///
/// # Example
///
/// ```rust,ignore
/// let mut arena = Arena::new(1024);
///
/// let offset = arena.try_bump(112).unwrap();
/// assert_eq!(arena.used(), 112);
/// ```
#[derive(Debug)]
pub struct Arena {
    /// The zeroed backing storage, never resized.
    storage: Box<[u8]>,
    /// Bytes consumed from the start.
    bump: usize,
}

impl Arena {
    /// Creates a zeroed arena. A capacity of `0` selects [`DEFAULT_CAPACITY`].
    ///
    /// # Arguments
    ///
    /// * `capacity` - Total size in bytes
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = if capacity == 0 { DEFAULT_CAPACITY } else { capacity };
        Self {
            storage: vec![0u8; capacity].into_boxed_slice(),
            bump: 0,
        }
    }

    /// Returns the total capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the bump offset (bytes consumed so far).
    #[inline]
    #[must_use]
    pub const fn used(&self) -> usize {
        self.bump
    }

    /// Returns the bytes left between the bump offset and the end.
    #[inline]
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.bump
    }

    /// Returns whether `size` more bytes fit behind the bump offset.
    #[inline]
    #[must_use]
    pub fn fits(&self, size: usize) -> bool {
        size <= self.remaining()
    }

    /// Claims `size` bytes from the bump region.
    ///
    /// Returns the offset of the claimed region and advances the bump offset,
    /// or `None` (with no side effects) when the region is too small.
    pub fn try_bump(&mut self, size: usize) -> Option<usize> {
        if !self.fits(size) {
            return None;
        }
        let offset = self.bump;
        self.bump += size;
        Some(offset)
    }

    /// Returns `len` bytes starting at `offset`, or `None` if out of bounds.
    #[inline]
    #[must_use]
    pub fn bytes(&self, offset: usize, len: usize) -> Option<&[u8]> {
        self.storage.get(offset..offset.checked_add(len)?)
    }

    /// Mutable counterpart of [`Arena::bytes`].
    #[inline]
    pub fn bytes_mut(&mut self, offset: usize, len: usize) -> Option<&mut [u8]> {
        self.storage.get_mut(offset..offset.checked_add(len)?)
    }

    /// Copies `len` bytes from `src` to `dst` inside the arena.
    ///
    /// The ranges may overlap. Returns `false` and copies nothing when either
    /// range leaves the arena.
    pub fn copy_within(&mut self, src: usize, dst: usize, len: usize) -> bool {
        let in_bounds = |start: usize| {
            start
                .checked_add(len)
                .is_some_and(|end| end <= self.capacity())
        };
        if !in_bounds(src) || !in_bounds(dst) {
            return false;
        }
        self.storage.copy_within(src..src + len, dst);
        true
    }
}
