//! Differential Sort Checking
//!
//! Two independent sorters over `i32` sequences and a validator that checks
//! they agree:
//! - **Insertion sort**: builds an ascending copy by ordered insertion, O(n²)
//! - **Bubble sort**: a single in-place pass of adjacent compare-and-swap
//! - **Validator**: sorts two private copies, one with each, and compares them
//!
//! The bubble sort deliberately stops after one pass, so the validator
//! reports a mismatch for every input that needs more than one pass. The
//! [`campaign`] and [`corpus`] modules drive the validator over generated or
//! recorded inputs, and [`report`] writes the results.

pub mod bubble_sort;
pub mod campaign;
pub mod corpus;
pub mod error;
pub mod insertion_sort;
pub mod report;
pub mod scratch;
pub mod validator;

pub use bubble_sort::bubble_sort;
pub use error::{Mismatch, SortError};
pub use insertion_sort::insertion_sort;
pub use validator::{validate, ValidationOutcome};
