//! Scratch Buffer Acquisition
//!
//! Every temporary buffer the sorters and the validator use is reserved here,
//! through `try_reserve_exact`, so that running out of memory comes back as
//! [`SortError::AllocationFailure`] instead of aborting the process.

use crate::error::SortError;

/// Reserve an empty buffer with room for exactly `len` elements.
pub fn acquire(len: usize) -> Result<Vec<i32>, SortError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| SortError::AllocationFailure { requested: len })?;
    Ok(buf)
}

/// Make a private, independently owned copy of `seq`.
pub fn copy_of(seq: &[i32]) -> Result<Vec<i32>, SortError> {
    let mut buf = acquire(seq.len())?;
    buf.extend_from_slice(seq);
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_reserves_capacity() {
        let buf = acquire(16).unwrap();
        assert!(buf.is_empty());
        assert!(buf.capacity() >= 16);
    }

    #[test]
    fn test_acquire_zero() {
        let buf = acquire(0).unwrap();
        assert!(buf.is_empty());
    }

    #[test]
    fn test_acquire_overflow_is_allocation_failure() {
        let err = acquire(usize::MAX).unwrap_err();
        assert_eq!(
            err,
            SortError::AllocationFailure {
                requested: usize::MAX
            }
        );
    }

    #[test]
    fn test_copy_is_independent() {
        let original = vec![3, 1, 2];
        let mut copy = copy_of(&original).unwrap();
        copy[0] = 99;
        assert_eq!(original, vec![3, 1, 2]);
        assert_eq!(copy, vec![99, 1, 2]);
    }
}
