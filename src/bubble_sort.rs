//! Single-Pass Bubble Sort
//!
//! [`bubble_sort`] performs exactly one left-to-right scan over adjacent
//! pairs, swapping any pair whose right element is strictly smaller. It does
//! not repeat the scan, even when swaps happened, so it only yields an
//! ascending sequence for inputs that one pass can fix. The differential
//! validator compares against this literal behaviour.
//!
//! Whether the single pass is intended (a fixture for tracing tools that
//! exercise the validator's failure path) or a defect is unresolved, so it is
//! kept as is. [`bubble_sort_to_fixpoint`] is the repeated-pass variant, used
//! only to measure how many passes an input needs.

/// What one pass over the sequence did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PassSummary {
    /// Number of adjacent swaps performed.
    pub swaps: usize,
    /// True if the pass made no swap, i.e. the input was already ascending.
    pub done: bool,
}

/// Sort `data` in place with a single bubble pass.
///
/// No allocation, no failure. Lengths 0 and 1 are a no-op.
pub fn bubble_sort(data: &mut [i32]) {
    bubble_pass(data);
}

/// Run one left-to-right pass of adjacent compare-and-swap over `data`.
pub fn bubble_pass(data: &mut [i32]) -> PassSummary {
    let mut summary = PassSummary {
        swaps: 0,
        done: true,
    };

    for i in 1..data.len() {
        if data[i] < data[i - 1] {
            data.swap(i - 1, i);
            summary.swaps += 1;
            summary.done = false;
        }
    }

    summary
}

/// Repeat [`bubble_pass`] until a pass makes no swap.
///
/// Returns the number of passes that performed at least one swap.
pub fn bubble_sort_to_fixpoint(data: &mut [i32]) -> usize {
    let mut passes = 0;
    while !bubble_pass(data).done {
        passes += 1;
    }
    passes
}

/// How many swapping passes `data` needs before it is ascending.
///
/// Zero for ascending input; at most one means [`bubble_sort`] fully sorts it.
pub fn passes_required(data: &[i32]) -> usize {
    let mut work = data.to_vec();
    bubble_sort_to_fixpoint(&mut work)
}
