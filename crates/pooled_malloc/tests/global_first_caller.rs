//! # First Caller Wins
//!
//! Runs in its own process: the lenient accessor constructs the instance.

use pooled_malloc::{global, AllocError, PoolError, DEFAULT_ALIGNMENT};

#[test]
fn first_caller_picks_capacity() {
    let first = global::instance(2048);
    assert_eq!(first.capacity(), 2048);
    assert_eq!(first.config().default_alignment, DEFAULT_ALIGNMENT);

    let second = global::instance(1 << 20);
    assert!(std::ptr::eq(first, second));
    assert_eq!(second.capacity(), 2048);

    // Zero means "whatever exists".
    assert_eq!(global::instance(0).capacity(), 2048);

    // The arena really is 2048 bytes.
    assert!(first.allocate(2048, 16).is_ok());
    assert!(matches!(
        first.allocate(16, 16),
        Err(AllocError::ArenaExhausted { remaining: 0, .. })
    ));

    assert!(matches!(
        global::initialize(pooled_malloc::AllocatorConfig::with_capacity(4096)),
        Err(PoolError::Alloc(AllocError::AlreadyInitialized { existing: 2048, .. }))
    ));
}
