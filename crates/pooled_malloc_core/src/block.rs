//! # Block Table
//!
//! Fixed-capacity descriptor table tracking which arena regions are handed out.
//!
//! Every lookup is a linear scan from index 0, so the cost is bounded by
//! [`BLOCK_COUNT`] and not by how many bytes are live.

use std::fmt;

/// Number of descriptor slots. Independent of the arena's byte capacity.
pub const BLOCK_COUNT: usize = 1000;

/// Handle to a block: its byte offset from the start of the arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlockOffset(usize);

impl BlockOffset {
    /// Wraps a raw arena offset.
    #[inline]
    #[must_use]
    pub const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Returns the raw arena offset.
    #[inline]
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for BlockOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Lifecycle state of a descriptor slot.
///
/// `Unused` is only ever the initial state. After the first claim a slot
/// cycles between `Occupied` and `Free` for the lifetime of the table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BlockStatus {
    /// Never claimed. The offset and size fields are meaningless.
    #[default]
    Unused,
    /// Released and available for first-fit reuse.
    Free,
    /// Handed out to a caller.
    Occupied,
}

/// One entry of the block table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BlockDescriptor {
    /// Arena offset of the block.
    offset: usize,
    /// Bytes reserved for this slot. Fixed once the slot is first claimed.
    size: usize,
    /// Aligned size the current (or last) owner asked for.
    requested: usize,
    /// Slot state.
    status: BlockStatus,
}

impl BlockDescriptor {
    /// Returns the block handle, or `None` for an unused slot.
    #[inline]
    #[must_use]
    pub const fn offset(&self) -> Option<BlockOffset> {
        match self.status {
            BlockStatus::Unused => None,
            _ => Some(BlockOffset(self.offset)),
        }
    }

    /// Returns the bytes reserved for this slot.
    #[inline]
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the aligned size of the most recent request served by this slot.
    #[inline]
    #[must_use]
    pub const fn requested(&self) -> usize {
        self.requested
    }

    /// Returns the slot state.
    #[inline]
    #[must_use]
    pub const fn status(&self) -> BlockStatus {
        self.status
    }

    /// Returns whether the slot is handed out.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.status == BlockStatus::Occupied
    }
}

/// The fixed array of [`BLOCK_COUNT`] descriptors.
#[derive(Debug)]
pub struct BlockTable {
    /// Descriptor storage, allocated once.
    slots: Box<[BlockDescriptor]>,
}

impl BlockTable {
    /// Creates a table with every slot `Unused`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: vec![BlockDescriptor::default(); BLOCK_COUNT].into_boxed_slice(),
        }
    }

    /// Returns the number of slots.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the descriptor at `index`.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&BlockDescriptor> {
        self.slots.get(index)
    }

    /// Returns the lowest-index `Unused` slot, or `None` when the table is full.
    #[must_use]
    pub fn find_unused(&self) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.status == BlockStatus::Unused)
    }

    /// Returns the lowest-index `Free` slot whose size is at least `required`.
    ///
    /// First-fit: a smaller adequate slot further down the table is not
    /// preferred.
    #[must_use]
    pub fn find_reusable(&self, required: usize) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.status == BlockStatus::Free && slot.size >= required)
    }

    /// Returns the claimed slot (free or occupied) recorded at `offset`.
    #[must_use]
    pub fn find_by_offset(&self, offset: BlockOffset) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.status != BlockStatus::Unused && slot.offset == offset.0)
    }

    /// Claims a slot for a freshly bumped region.
    pub(crate) fn occupy(&mut self, index: usize, offset: usize, size: usize) {
        self.slots[index] = BlockDescriptor {
            offset,
            size,
            requested: size,
            status: BlockStatus::Occupied,
        };
    }

    /// Hands a `Free` slot out again. Its recorded size is kept.
    pub(crate) fn reoccupy(&mut self, index: usize, requested: usize) -> BlockOffset {
        let slot = &mut self.slots[index];
        slot.status = BlockStatus::Occupied;
        slot.requested = requested;
        BlockOffset(slot.offset)
    }

    /// Marks a slot `Free`.
    pub(crate) fn free(&mut self, index: usize) {
        self.slots[index].status = BlockStatus::Free;
    }

    /// Iterates over all descriptors in index order.
    pub fn iter(&self) -> impl Iterator<Item = &BlockDescriptor> {
        self.slots.iter()
    }
}

impl Default for BlockTable {
    fn default() -> Self {
        Self::new()
    }
}
