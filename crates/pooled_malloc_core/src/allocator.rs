//! # Pooled Allocator
//!
//! The allocation policy: bump first, then first-fit reuse of freed blocks.
//!
//! ```text
//!   allocate(size, align)
//!          │
//!          ▼
//!   aligned = round_up(size, align)
//!          │
//!          ▼
//!   bump region fits? ──yes──▶ unused slot? ──yes──▶ claim slot, advance bump
//!          │ no                     │ no
//!          │                        ▼
//!          ▼                  TableExhausted
//!   first free slot with size >= aligned? ──yes──▶ reoccupy (whole slot)
//!          │ no
//!          ▼
//!   ArenaExhausted
//! ```
//!
//! Freed blocks are never split or merged, and the bump offset never moves
//! back, so a freed block only comes back into play once the bump region
//! can no longer serve a request on its own.

use tracing::{debug, trace, warn};

use crate::align::{aligned_size, effective_alignment};
use crate::arena::Arena;
use crate::block::{BlockDescriptor, BlockOffset, BlockStatus, BlockTable};
use crate::error::{AllocError, AllocResult};
use crate::stats::AllocatorStats;

/// A fixed-capacity allocator serving blocks from a single arena.
///
/// # Thread Safety
///
/// All mutation goes through `&mut self`. For shared use wrap it in a lock.
///
/// # Example
///
/// ```rust
/// use pooled_malloc_core::PooledAllocator;
///
/// let mut pool = PooledAllocator::new(1024);
///
/// let block = pool.allocate(100, 16).unwrap();
/// pool.block_mut(block).unwrap()[..5].copy_from_slice(b"hello");
///
/// let grown = pool.reallocate(Some(block), 300, 16).unwrap();
/// assert_ne!(grown, block);
/// assert_eq!(&pool.block(grown).unwrap()[..5], b"hello");
///
/// pool.release(Some(grown));
/// ```
#[derive(Debug)]
pub struct PooledAllocator {
    /// Backing bytes and the bump offset.
    arena: Arena,
    /// Descriptor slots.
    blocks: BlockTable,
}

impl PooledAllocator {
    /// Creates an allocator over a zeroed arena of `capacity` bytes.
    ///
    /// A capacity of `0` selects the 20 MiB default.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let arena = Arena::new(capacity);
        debug!(capacity = arena.capacity(), "pooled allocator created");
        Self {
            arena,
            blocks: BlockTable::new(),
        }
    }

    /// Returns the arena capacity in bytes.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.arena.capacity()
    }

    /// Allocates a block of at least `size` bytes.
    ///
    /// `size` is rounded up to a multiple of `alignment` (`0` means 16). A
    /// zero-byte request still reserves one alignment unit so the returned
    /// offset is unique.
    ///
    /// # Errors
    ///
    /// - [`AllocError::InvalidAlignment`] / [`AllocError::SizeOverflow`] for bad input.
    /// - [`AllocError::ArenaExhausted`] when neither the bump region nor a
    ///   freed block can hold the request.
    /// - [`AllocError::TableExhausted`] when the bump region has room but
    ///   every descriptor slot is taken. Freed blocks are not considered
    ///   while the bump region can still fit the request.
    pub fn allocate(&mut self, size: usize, alignment: usize) -> AllocResult<BlockOffset> {
        let alignment = effective_alignment(alignment)?;
        let aligned = aligned_size(size.max(1), alignment)?;

        let err = if self.arena.fits(aligned) {
            if let Some(offset) = self.bump_allocate(aligned) {
                trace!(%offset, size = aligned, "bump allocation");
                return Ok(offset);
            }
            // Freed blocks are only searched once the bump region is too small.
            AllocError::TableExhausted { requested: aligned }
        } else {
            if let Some(offset) = self.reuse_free(aligned) {
                debug!(%offset, size = aligned, "reused freed block");
                return Ok(offset);
            }
            AllocError::ArenaExhausted {
                requested: aligned,
                remaining: self.arena.remaining(),
            }
        };
        warn!(%err, "allocation failed");
        Err(err)
    }

    /// Releases the block at `offset` for later reuse.
    ///
    /// `None` and offsets that were never handed out are ignored.
    pub fn release(&mut self, offset: Option<BlockOffset>) {
        let Some(offset) = offset else {
            return;
        };
        match self.blocks.find_by_offset(offset) {
            Some(index) => {
                self.blocks.free(index);
                trace!(%offset, index, "block released");
            }
            None => trace!(%offset, "release of unknown block ignored"),
        }
    }

    /// Resizes the block at `offset`.
    ///
    /// - `None` behaves exactly like [`PooledAllocator::allocate`].
    /// - If the block already holds `new_size` (after alignment), the same
    ///   offset is returned and nothing changes.
    /// - Otherwise a new block is allocated, the old contents are copied over
    ///   and the old block is released.
    ///
    /// # Errors
    ///
    /// [`AllocError::UnknownBlock`] if `offset` is not an occupied block, or any
    /// [`PooledAllocator::allocate`] error. On error the original block is
    /// left untouched.
    ///
    /// A released block is rejected even when its slot would still be large
    /// enough. Its slot may already belong to another caller.
    pub fn reallocate(
        &mut self,
        offset: Option<BlockOffset>,
        new_size: usize,
        alignment: usize,
    ) -> AllocResult<BlockOffset> {
        let Some(offset) = offset else {
            return self.allocate(new_size, alignment);
        };
        let alignment = effective_alignment(alignment)?;
        let aligned = aligned_size(new_size.max(1), alignment)?;

        let old = self
            .occupied(offset)
            .ok_or(AllocError::UnknownBlock(offset))?;
        if old.size() >= aligned {
            trace!(%offset, size = old.size(), requested = aligned, "reallocation fits in place");
            return Ok(offset);
        }

        let new = self.allocate(aligned, alignment)?;
        let copied = self.arena.copy_within(offset.get(), new.get(), old.size());
        debug_assert!(copied, "claimed blocks lie inside the arena");

        if new != offset {
            self.release(Some(offset));
        }
        debug!(from = %offset, to = %new, size = aligned, "block moved");
        Ok(new)
    }

    /// Returns the bytes of an occupied block (its full reserved size).
    #[must_use]
    pub fn block(&self, offset: BlockOffset) -> Option<&[u8]> {
        let descriptor = self.occupied(offset)?;
        self.arena.bytes(offset.get(), descriptor.size())
    }

    /// Mutable counterpart of [`PooledAllocator::block`].
    pub fn block_mut(&mut self, offset: BlockOffset) -> Option<&mut [u8]> {
        let descriptor = self.occupied(offset)?;
        self.arena.bytes_mut(offset.get(), descriptor.size())
    }

    /// Returns the descriptor recorded at `offset`, free or occupied.
    #[must_use]
    pub fn descriptor(&self, offset: BlockOffset) -> Option<&BlockDescriptor> {
        self.blocks.get(self.blocks.find_by_offset(offset)?)
    }

    /// Returns the block table.
    #[inline]
    #[must_use]
    pub const fn blocks(&self) -> &BlockTable {
        &self.blocks
    }

    /// Computes a usage snapshot.
    #[must_use]
    pub fn stats(&self) -> AllocatorStats {
        let mut stats = AllocatorStats {
            capacity: self.arena.capacity(),
            bump_used: self.arena.used(),
            bump_remaining: self.arena.remaining(),
            ..AllocatorStats::default()
        };
        for slot in self.blocks.iter() {
            match slot.status() {
                BlockStatus::Unused => stats.unused_slots += 1,
                BlockStatus::Free => {
                    stats.free_blocks += 1;
                    stats.free_bytes += slot.size();
                }
                BlockStatus::Occupied => {
                    stats.occupied_blocks += 1;
                    stats.occupied_bytes += slot.size();
                    stats.internal_fragmentation += slot.size() - slot.requested();
                }
            }
        }
        stats
    }

    /// Claims fresh space behind the bump offset.
    ///
    /// The slot is found before the offset moves, so a full table never
    /// consumes arena bytes.
    fn bump_allocate(&mut self, aligned: usize) -> Option<BlockOffset> {
        let index = self.blocks.find_unused()?;
        let offset = self.arena.try_bump(aligned)?;
        self.blocks.occupy(index, offset, aligned);
        Some(BlockOffset::new(offset))
    }

    /// Hands out the first freed block that is large enough.
    fn reuse_free(&mut self, aligned: usize) -> Option<BlockOffset> {
        let index = self.blocks.find_reusable(aligned)?;
        Some(self.blocks.reoccupy(index, aligned))
    }

    /// Returns a copy of the descriptor at `offset` if it is occupied.
    fn occupied(&self, offset: BlockOffset) -> Option<BlockDescriptor> {
        self.descriptor(offset)
            .filter(|descriptor| descriptor.is_occupied())
            .copied()
    }
}
