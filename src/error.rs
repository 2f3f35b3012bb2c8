//! Error Taxonomy
//!
//! Both sorters are total over well-formed sequences. The only ways an
//! operation in this crate can fail are running out of memory while acquiring
//! a scratch buffer, or the validator observing that the two sorters disagree.

use std::fmt;

use thiserror::Error;

/// Errors surfaced by the sorters and the differential validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// A scratch buffer of `requested` elements could not be reserved.
    #[error("allocation failure: could not reserve scratch space for {requested} elements")]
    AllocationFailure { requested: usize },

    /// Insertion sort and bubble sort produced different outputs.
    #[error("invariant violation: {0}")]
    InvariantViolation(Mismatch),
}

impl SortError {
    /// True for the validator's disagreement outcome.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, SortError::InvariantViolation(_))
    }

    /// The mismatch details, if this is an invariant violation.
    pub fn mismatch(&self) -> Option<&Mismatch> {
        match self {
            SortError::InvariantViolation(m) => Some(m),
            SortError::AllocationFailure { .. } => None,
        }
    }
}

/// The first index at which the two sorted copies differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mismatch {
    pub index: usize,
    /// Value at `index` in the insertion-sorted copy.
    pub insertion: i32,
    /// Value at `index` in the bubble-sorted copy.
    pub bubble: i32,
}

impl Mismatch {
    /// Whether `input` needs more than one bubble pass to become ascending.
    ///
    /// When this holds, the mismatch is the known single-pass limitation of
    /// [`bubble_sort`](crate::bubble_sort::bubble_sort). When it does not, the
    /// disagreement points at a real regression in one of the sorters.
    pub fn is_single_pass_limitation(&self, input: &[i32]) -> bool {
        crate::bubble_sort::passes_required(input) > 1
    }
}

impl fmt::Display for Mismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "outputs differ at index {} (insertion sort: {}, bubble sort: {})",
            self.index, self.insertion, self.bubble
        )
    }
}
