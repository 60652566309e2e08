//! # Process-Wide Instance
//!
//! One lazily constructed [`SharedAllocator`] per process.
//!
//! Two ways in:
//! - [`instance`]: whoever constructs first picks the capacity; later callers
//!   asking for a different capacity get the existing allocator unchanged.
//! - [`initialize`]: explicit construction from a config that fails loudly if
//!   an allocator with a different config is already live.
//!
//! Prefer passing an owned [`SharedAllocator`] to the components that need it.
//! The global exists for callers that can only reach a free function.

use std::sync::OnceLock;

use pooled_malloc_core::AllocError;
use tracing::{debug, info};

use crate::config::AllocatorConfig;
use crate::error::PoolResult;
use crate::shared::SharedAllocator;

static INSTANCE: OnceLock<SharedAllocator> = OnceLock::new();

/// Returns the process-wide allocator, creating it on first use.
///
/// `capacity_bytes` only matters for the call that constructs the allocator
/// (`0` selects 20 MiB). Afterwards it is ignored.
pub fn instance(capacity_bytes: usize) -> &'static SharedAllocator {
    let shared = INSTANCE.get_or_init(|| {
        let shared = SharedAllocator::new(capacity_bytes);
        info!(capacity = shared.capacity(), "global pooled allocator created");
        shared
    });
    if capacity_bytes != 0 && capacity_bytes != shared.capacity() {
        debug!(
            requested = capacity_bytes,
            existing = shared.capacity(),
            "global pooled allocator already exists, capacity ignored"
        );
    }
    shared
}

/// Creates the process-wide allocator from `config`.
///
/// Calling it again with an equal config returns the same allocator.
///
/// # Errors
///
/// - [`crate::ConfigError`] if the config does not validate.
/// - [`AllocError::AlreadyInitialized`] if the allocator already exists with
///   a different config.
pub fn initialize(config: AllocatorConfig) -> PoolResult<&'static SharedAllocator> {
    config.validate()?;
    let requested = config.effective_capacity();

    let mut created = false;
    let shared = INSTANCE.get_or_init(|| {
        created = true;
        SharedAllocator::build(config.clone())
    });

    if created {
        info!(capacity = requested, "global pooled allocator initialized");
        return Ok(shared);
    }
    if shared.config().effective_capacity() == requested
        && shared.config().default_alignment == config.default_alignment
    {
        return Ok(shared);
    }
    Err(AllocError::AlreadyInitialized {
        existing: shared.capacity(),
        requested,
        existing_alignment: shared.config().default_alignment,
        requested_alignment: config.default_alignment,
    }
    .into())
}

/// Returns the process-wide allocator if it has been created.
#[must_use]
pub fn get() -> Option<&'static SharedAllocator> {
    INSTANCE.get()
}
