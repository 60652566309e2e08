//! # Pooled Malloc Core
//!
//! A fixed-capacity pooled allocator: every block is carved from one
//! pre-sized, zeroed byte arena instead of the operating system heap.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │                      PooledAllocator                         │
//!   │                                                              │
//!   │   Arena (capacity bytes, zeroed)                             │
//!   │   ┌─────┬─────┬─────┬──────────────────────────────────────┐ │
//!   │   │ B0  │ B1  │ B2  │           bump region                │ │
//!   │   └─────┴─────┴─────┴──────────────────────────────────────┘ │
//!   │                     ▲                                        │
//!   │                 bump offset (never moves back)               │
//!   │                                                              │
//!   │   BlockTable (1000 slots)                                    │
//!   │   [0] Occupied @0   [1] Free @112   [2] Occupied @176  ...   │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! 1. **Bump first**: fresh space is claimed behind the bump offset while it lasts
//! 2. **First-fit reuse**: once the bump region is too small, the first freed
//!    block that is large enough is handed out whole
//! 3. **Offsets, not pointers**: blocks are named by arena-relative offsets
//!
//! ## Example
//!
//! ```rust
//! use pooled_malloc_core::{PooledAllocator, AllocError};
//!
//! let mut pool = PooledAllocator::new(1024);
//! let block = pool.allocate(100, 16)?;
//! assert_eq!(pool.stats().bump_used, 112);
//! pool.release(Some(block));
//! # Ok::<(), AllocError>(())
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod align;
pub mod allocator;
pub mod arena;
pub mod block;
pub mod error;
pub mod stats;

pub use align::{aligned_size, effective_alignment, DEFAULT_ALIGNMENT};
pub use allocator::PooledAllocator;
pub use arena::{Arena, DEFAULT_CAPACITY};
pub use block::{BlockDescriptor, BlockOffset, BlockStatus, BlockTable, BLOCK_COUNT};
pub use error::{AllocError, AllocResult};
pub use stats::AllocatorStats;
