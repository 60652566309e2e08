//! # Pooled Malloc
//!
//! Thread-safe, process-wide front end for [`pooled_malloc_core`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use pooled_malloc::{global, AllocatorConfig};
//!
//! // At startup, once
//! let config = AllocatorConfig::from_toml_file("config/allocator.toml")?;
//! let pool = global::initialize(config)?;
//!
//! // Anywhere afterwards
//! let block = pool.allocate_default(256)?;
//! let block = pool.reallocate(Some(block), 1024, 0)?;
//! pool.release(Some(block));
//! ```
//!
//! ## Concurrency
//!
//! [`SharedAllocator`] serializes every operation behind one
//! `parking_lot::Mutex`. The core allocator itself is single-owner and
//! takes `&mut self`.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod global;
pub mod shared;

pub use config::{AllocatorConfig, ConfigError};
pub use error::{PoolError, PoolResult};
pub use shared::SharedAllocator;

pub use pooled_malloc_core::{
    AllocError, AllocResult, AllocatorStats, BlockOffset, BlockStatus, BLOCK_COUNT,
    DEFAULT_ALIGNMENT, DEFAULT_CAPACITY,
};
