//! # Alignment Arithmetic
//!
//! Power-of-two rounding used to size every block.

use crate::error::{AllocError, AllocResult};

/// Alignment used when the caller passes `0`.
pub const DEFAULT_ALIGNMENT: usize = 16;

/// Resolves the effective alignment: `0` selects [`DEFAULT_ALIGNMENT`].
///
/// # Errors
///
/// [`AllocError::InvalidAlignment`] if the alignment is not a power of two.
#[inline]
pub const fn effective_alignment(alignment: usize) -> AllocResult<usize> {
    let alignment = if alignment == 0 { DEFAULT_ALIGNMENT } else { alignment };
    if alignment.is_power_of_two() {
        Ok(alignment)
    } else {
        Err(AllocError::InvalidAlignment(alignment))
    }
}

/// Returns the smallest multiple of `alignment` that is `>= size`.
///
/// Computed as `(size + alignment - 1) & !(alignment - 1)`. A zero alignment
/// means [`DEFAULT_ALIGNMENT`].
///
/// ```rust
/// use pooled_malloc_core::aligned_size;
///
/// assert_eq!(aligned_size(100, 16), Ok(112));
/// assert_eq!(aligned_size(64, 64), Ok(64));
/// assert!(aligned_size(10, 12).is_err());
/// ```
///
/// # Errors
///
/// [`AllocError::InvalidAlignment`] for non-power-of-two alignments and
/// [`AllocError::SizeOverflow`] when the rounded size does not fit `usize`.
#[inline]
pub const fn aligned_size(size: usize, alignment: usize) -> AllocResult<usize> {
    let alignment = match effective_alignment(alignment) {
        Ok(alignment) => alignment,
        Err(err) => return Err(err),
    };
    let mask = alignment - 1;
    match size.checked_add(mask) {
        Some(padded) => Ok(padded & !mask),
        None => Err(AllocError::SizeOverflow { size, alignment }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aligned_size_is_smallest_multiple() {
        for shift in 0..10 {
            let alignment = 1usize << shift;
            for size in 0..(alignment * 4 + 3) {
                let aligned = aligned_size(size, alignment).unwrap();
                assert_eq!(aligned % alignment, 0);
                assert!(aligned >= size);
                assert!(aligned < size + alignment);
            }
        }
    }

    #[test]
    fn test_zero_alignment_uses_default() {
        assert_eq!(aligned_size(1, 0), Ok(DEFAULT_ALIGNMENT));
        assert_eq!(effective_alignment(0), Ok(16));
    }

    #[test]
    fn test_rejects_non_power_of_two() {
        assert_eq!(aligned_size(8, 3), Err(AllocError::InvalidAlignment(3)));
        assert_eq!(aligned_size(8, 24), Err(AllocError::InvalidAlignment(24)));
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            aligned_size(usize::MAX, 16),
            Err(AllocError::SizeOverflow { size: usize::MAX, alignment: 16 })
        );
    }
}
