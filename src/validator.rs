//! Differential Validator
//!
//! Runs [`insertion_sort`] and [`bubble_sort`] on two private copies of the
//! same input and checks that their outputs agree element by element. The
//! caller's sequence is only borrowed immutably.
//!
//! A disagreement is returned as [`SortError::InvariantViolation`] carrying
//! the first differing index and both values. It is expected, and
//! reproducible, for any input that needs more than one bubble pass.

use log::trace;

use crate::bubble_sort::bubble_sort;
use crate::error::{Mismatch, SortError};
use crate::insertion_sort::insertion_sort;
use crate::scratch;

/// Validate that both sorters agree on `data`.
///
/// On success returns the agreed ascending sequence. The insertion sort runs
/// first, then the bubble sort; the comparison stops at the first mismatch.
pub fn validate(data: &[i32]) -> Result<Vec<i32>, SortError> {
    let copy_a = scratch::copy_of(data)?;
    let mut copy_b = scratch::copy_of(data)?;

    let sorted_a = insertion_sort(&copy_a)?;
    bubble_sort(&mut copy_b);

    if let Some(mismatch) = first_mismatch(&sorted_a, &copy_b) {
        trace!("validation failed for {:?}: {}", data, mismatch);
        return Err(SortError::InvariantViolation(mismatch));
    }

    Ok(sorted_a)
}

/// Find the first index where `insertion` and `bubble` differ.
///
/// Both slices come from the same input, so their lengths are equal.
fn first_mismatch(insertion: &[i32], bubble: &[i32]) -> Option<Mismatch> {
    debug_assert_eq!(insertion.len(), bubble.len());
    insertion
        .iter()
        .zip(bubble)
        .position(|(a, b)| a != b)
        .map(|index| Mismatch {
            index,
            insertion: insertion[index],
            bubble: bubble[index],
        })
}

/// Pass/fail view of a validation, for callers that report rather than
/// propagate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Pass { sorted: Vec<i32> },
    Fail(Mismatch),
}

impl ValidationOutcome {
    /// Split a [`validate`] result into an outcome, passing allocation
    /// failures through as errors.
    pub fn from_result(result: Result<Vec<i32>, SortError>) -> Result<Self, SortError> {
        match result {
            Ok(sorted) => Ok(ValidationOutcome::Pass { sorted }),
            Err(SortError::InvariantViolation(m)) => Ok(ValidationOutcome::Fail(m)),
            Err(e) => Err(e),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ValidationOutcome::Pass { .. })
    }
}
