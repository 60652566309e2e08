//! # Allocator Error Types
//!
//! All failures the pooled allocator can report. Exhaustion is always a
//! returned error; whether it is fatal is the caller's decision.

use thiserror::Error;

use crate::block::BlockOffset;

/// Errors that can occur while servicing an allocation request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AllocError {
    /// The bump region cannot fit the request and no freed block is large enough.
    #[error("arena exhausted: requested {requested} bytes, {remaining} left in bump region")]
    ArenaExhausted {
        /// Aligned size of the request.
        requested: usize,
        /// Bytes left between the bump offset and the arena end.
        remaining: usize,
    },

    /// The bump region fits the request but every descriptor slot is in use.
    #[error("block table exhausted: no descriptor slot for {requested} bytes")]
    TableExhausted {
        /// Aligned size of the request.
        requested: usize,
    },

    /// The offset does not name an occupied block.
    #[error("unknown block at offset {0}")]
    UnknownBlock(BlockOffset),

    /// Alignment is not a power of two.
    #[error("invalid alignment {0}: must be a power of two")]
    InvalidAlignment(usize),

    /// Rounding the size up to the alignment overflowed.
    #[error("size {size} overflows when aligned to {alignment}")]
    SizeOverflow {
        /// Requested size.
        size: usize,
        /// Requested alignment.
        alignment: usize,
    },

    /// A process-wide allocator with a different configuration already exists.
    #[error(
        "allocator already initialized with {existing} bytes aligned to {existing_alignment}, \
         refusing {requested} bytes aligned to {requested_alignment}"
    )]
    AlreadyInitialized {
        /// Capacity of the live instance.
        existing: usize,
        /// Capacity the caller asked for.
        requested: usize,
        /// Default alignment of the live instance.
        existing_alignment: usize,
        /// Default alignment the caller asked for.
        requested_alignment: usize,
    },
}

/// Result type for allocator operations.
pub type AllocResult<T> = Result<T, AllocError>;
