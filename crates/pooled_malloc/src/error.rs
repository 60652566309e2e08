//! # Error Types

use pooled_malloc_core::AllocError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the shared allocator and its global instance.
#[derive(Error, Debug)]
pub enum PoolError {
    /// An allocation request failed.
    #[error(transparent)]
    Alloc(#[from] AllocError),

    /// The configuration was rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for shared allocator operations.
pub type PoolResult<T> = Result<T, PoolError>;
