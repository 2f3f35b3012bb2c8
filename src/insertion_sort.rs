//! Insertion Sort Implementation
//!
//! Builds a sorted copy of the input by inserting each value, in input order,
//! into a separate output buffer that is kept ascending at all times.
//!
//! Each insertion scans the output from its start for the first value strictly
//! greater than the incoming one, so equal values keep their input order.
//! There is no early exit for already sorted input.
//!
//! Complexity: O(n²) comparisons and moves, O(n) auxiliary storage.

use crate::error::SortError;
use crate::scratch;

/// Return an ascending copy of `data`.
///
/// The input is left untouched. The scratch buffer is reserved up front; if
/// that fails the error is returned and nothing is sorted.
///
/// # Arguments
/// * `data` - The sequence to sort
pub fn insertion_sort(data: &[i32]) -> Result<Vec<i32>, SortError> {
    let mut sorted = scratch::acquire(data.len())?;
    for &item in data {
        insert_ordered(&mut sorted, item);
    }
    Ok(sorted)
}

/// Sort `data` in place by sorting into a scratch buffer and copying back.
pub fn insertion_sort_in_place(data: &mut [i32]) -> Result<(), SortError> {
    let sorted = insertion_sort(data)?;
    data.copy_from_slice(&sorted);
    Ok(())
}

/// Insert `item` into the ascending buffer `sorted`, keeping it ascending.
///
/// `item` lands in front of the first stored value strictly greater than it,
/// or at the end if there is none. Capacity must already be reserved by the
/// caller; this never grows past what [`insertion_sort`] acquired.
pub fn insert_ordered(sorted: &mut Vec<i32>, item: i32) {
    let pos = sorted
        .iter()
        .position(|&stored| item < stored)
        .unwrap_or(sorted.len());

    // Append, then rotate the tail right by one to open the slot at `pos`.
    sorted.push(item);
    sorted[pos..].rotate_right(1);
}

/// Check if a slice is sorted in ascending order.
#[inline]
pub fn is_sorted(data: &[i32]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}
