//! Differential Fuzz Campaign
//!
//! Generates many small random sequences and runs the validator over each of
//! them. Cases are validated in parallel with rayon; every single validation
//! is still the self-contained, single-threaded call from [`crate::validator`].
//!
//! Failures are split into two buckets:
//! - **limitation**: the input needs more than one bubble pass, so the
//!   disagreement is the known single-pass behaviour
//! - **regression**: the input needs at most one pass yet the sorters still
//!   disagree, which should never happen

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::error::{Mismatch, SortError};
use crate::validator::validate;

/// Maximum number of failing cases kept in a [`CampaignSummary`].
pub const MAX_RETAINED_FAILURES: usize = 16;

/// Parameters of a generated campaign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CampaignConfig {
    /// Number of sequences to generate
    pub cases: usize,
    /// Longest generated sequence; lengths are uniform in `0..=max_len`
    pub max_len: usize,
    /// Smallest generated value (inclusive)
    pub min_value: i32,
    /// Largest generated value (inclusive)
    pub max_value: i32,
    /// RNG seed; equal seeds produce equal cases
    pub seed: u64,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            cases: 1000,
            max_len: 8,
            min_value: -100,
            max_value: 100,
            seed: 0,
        }
    }
}

/// A case the sorters disagreed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseFailure {
    pub input: Vec<i32>,
    pub mismatch: Mismatch,
    /// True if the input needs more than one bubble pass
    pub limitation: bool,
}

/// Aggregated result of a campaign.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignSummary {
    pub total: usize,
    pub passed: usize,
    pub limitation_failures: usize,
    pub regressions: usize,
    pub allocation_failures: usize,
    /// First failing cases in input order, at most [`MAX_RETAINED_FAILURES`]
    pub failures: Vec<CaseFailure>,
}

impl CampaignSummary {
    pub fn failed(&self) -> usize {
        self.limitation_failures + self.regressions + self.allocation_failures
    }

    /// Fraction of cases on which the sorters agreed.
    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

/// Per-case result, before aggregation.
enum CaseResult {
    Pass,
    Fail(CaseFailure),
    OutOfMemory,
}

/// Generate the input sequences for `config`, deterministically from its seed.
pub fn generate_cases(config: &CampaignConfig) -> Vec<Vec<i32>> {
    let (lo, hi) = if config.min_value <= config.max_value {
        (config.min_value, config.max_value)
    } else {
        (config.max_value, config.min_value)
    };

    let mut rng = StdRng::seed_from_u64(config.seed);
    (0..config.cases)
        .map(|_| {
            let len = rng.gen_range(0..=config.max_len);
            (0..len).map(|_| rng.gen_range(lo..=hi)).collect()
        })
        .collect()
}

fn run_case(input: &[i32]) -> CaseResult {
    match validate(input) {
        Ok(_) => CaseResult::Pass,
        Err(SortError::InvariantViolation(mismatch)) => CaseResult::Fail(CaseFailure {
            input: input.to_vec(),
            limitation: mismatch.is_single_pass_limitation(input),
            mismatch,
        }),
        Err(SortError::AllocationFailure { requested }) => {
            warn!("allocation failure for case of {} elements", requested);
            CaseResult::OutOfMemory
        }
    }
}

/// Validate every case and aggregate the outcomes.
pub fn run_campaign(cases: &[Vec<i32>]) -> CampaignSummary {
    let results: Vec<CaseResult> = cases.par_iter().map(|c| run_case(c)).collect();

    let mut summary = CampaignSummary {
        total: cases.len(),
        ..Default::default()
    };

    for result in results {
        match result {
            CaseResult::Pass => summary.passed += 1,
            CaseResult::OutOfMemory => summary.allocation_failures += 1,
            CaseResult::Fail(failure) => {
                if failure.limitation {
                    summary.limitation_failures += 1;
                    debug!("single-pass limitation on {:?}: {}", failure.input, failure.mismatch);
                } else {
                    summary.regressions += 1;
                    warn!("regression on {:?}: {}", failure.input, failure.mismatch);
                }
                if summary.failures.len() < MAX_RETAINED_FAILURES {
                    summary.failures.push(failure);
                }
            }
        }
    }

    info!(
        "campaign finished: {}/{} passed, {} limitation, {} regressions, {} allocation failures",
        summary.passed,
        summary.total,
        summary.limitation_failures,
        summary.regressions,
        summary.allocation_failures
    );

    summary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let config = CampaignConfig {
            cases: 50,
            seed: 42,
            ..Default::default()
        };
        assert_eq!(generate_cases(&config), generate_cases(&config));
    }

    #[test]
    fn test_generate_respects_bounds() {
        let config = CampaignConfig {
            cases: 200,
            max_len: 5,
            min_value: -3,
            max_value: 3,
            seed: 7,
        };
        let cases = generate_cases(&config);
        assert_eq!(cases.len(), 200);
        for case in &cases {
            assert!(case.len() <= 5);
            assert!(case.iter().all(|&v| (-3..=3).contains(&v)));
        }
    }

    #[test]
    fn test_generate_swapped_bounds() {
        let config = CampaignConfig {
            cases: 20,
            min_value: 10,
            max_value: -10,
            ..Default::default()
        };
        let cases = generate_cases(&config);
        assert!(cases.iter().flatten().all(|&v| (-10..=10).contains(&v)));
    }

    #[test]
    fn test_run_known_cases() {
        let cases = vec![vec![4, 3, 2, 1], vec![], vec![1, 2, 3], vec![2, 1, 3]];
        let summary = run_campaign(&cases);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.passed, 3);
        assert_eq!(summary.limitation_failures, 1);
        assert_eq!(summary.regressions, 0);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.failures[0].input, vec![4, 3, 2, 1]);
        assert_eq!(summary.failures[0].mismatch.index, 0);
        assert!(summary.failures[0].limitation);
    }

    #[test]
    fn test_random_campaign_has_no_regressions() {
        let config = CampaignConfig {
            cases: 2000,
            seed: 1234,
            ..Default::default()
        };
        let summary = run_campaign(&generate_cases(&config));
        assert_eq!(summary.total, 2000);
        assert_eq!(summary.regressions, 0);
        assert_eq!(summary.allocation_failures, 0);
        assert_eq!(summary.passed + summary.limitation_failures, 2000);
        assert!(summary.failures.len() <= MAX_RETAINED_FAILURES);
    }

    #[test]
    fn test_failures_are_capped_and_ordered() {
        let cases: Vec<Vec<i32>> = (0..40).map(|i| vec![i + 3, i + 2, i + 1]).collect();
        let summary = run_campaign(&cases);
        assert_eq!(summary.limitation_failures, 40);
        assert_eq!(summary.failures.len(), MAX_RETAINED_FAILURES);
        assert_eq!(summary.failures[0].input, vec![3, 2, 1]);
        assert_eq!(summary.failures[1].input, vec![4, 3, 2]);
    }

    #[test]
    fn test_pass_rate() {
        assert_eq!(CampaignSummary::default().pass_rate(), 1.0);
        let summary = run_campaign(&[vec![1], vec![3, 2, 1]]);
        assert_eq!(summary.pass_rate(), 0.5);
    }
}
