//! # Allocator Statistics
//!
//! Point-in-time usage snapshot, computed by one scan of the block table.

use std::fmt;

/// Usage snapshot of a pooled allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AllocatorStats {
    /// Arena capacity in bytes.
    pub capacity: usize,
    /// Bump offset (high-water mark) in bytes.
    pub bump_used: usize,
    /// Bytes left behind the bump offset.
    pub bump_remaining: usize,
    /// Slots currently handed out.
    pub occupied_blocks: usize,
    /// Released slots waiting for reuse.
    pub free_blocks: usize,
    /// Slots never claimed.
    pub unused_slots: usize,
    /// Bytes reserved by occupied slots.
    pub occupied_bytes: usize,
    /// Bytes reserved by free slots.
    pub free_bytes: usize,
    /// Bytes reserved by occupied slots beyond what their owners asked for.
    pub internal_fragmentation: usize,
}

impl AllocatorStats {
    /// Fraction of the arena consumed by the bump offset, in `[0, 1]`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn bump_utilization(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.bump_used as f64 / self.capacity as f64
    }
}

impl fmt::Display for AllocatorStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} bytes bumped, {} occupied ({} B), {} free ({} B), {} unused slots, {} B fragmented",
            self.bump_used,
            self.capacity,
            self.occupied_blocks,
            self.occupied_bytes,
            self.free_blocks,
            self.free_bytes,
            self.unused_slots,
            self.internal_fragmentation,
        )
    }
}
