//! Fixed input scenarios for the sorters and the validator.

use diffsort::campaign::{generate_cases, run_campaign, CampaignConfig};
use diffsort::corpus::parse_corpus;
use diffsort::report::{parse_lino_report, CampaignReport};
use diffsort::{bubble_sort, insertion_sort, validate, Mismatch, SortError, ValidationOutcome};

#[test]
fn test_descending_four() {
    let input = [4, 3, 2, 1];
    assert_eq!(insertion_sort(&input).unwrap(), vec![1, 2, 3, 4]);

    let mut bubbled = input.to_vec();
    bubble_sort(&mut bubbled);
    assert_eq!(bubbled, vec![3, 2, 1, 4]);

    assert_eq!(
        validate(&input),
        Err(SortError::InvariantViolation(Mismatch {
            index: 0,
            insertion: 1,
            bubble: 3,
        }))
    );
}

#[test]
fn test_empty() {
    assert!(insertion_sort(&[]).unwrap().is_empty());
    let mut bubbled: Vec<i32> = vec![];
    bubble_sort(&mut bubbled);
    assert!(bubbled.is_empty());
    assert_eq!(validate(&[]), Ok(vec![]));
}

#[test]
fn test_already_ascending() {
    let input = [1, 2, 3];
    assert_eq!(insertion_sort(&input).unwrap(), vec![1, 2, 3]);
    let mut bubbled = input.to_vec();
    bubble_sort(&mut bubbled);
    assert_eq!(bubbled, vec![1, 2, 3]);
    assert_eq!(validate(&input), Ok(vec![1, 2, 3]));
}

#[test]
fn test_single_adjacent_inversion() {
    let input = [2, 1, 3];
    assert_eq!(insertion_sort(&input).unwrap(), vec![1, 2, 3]);
    let mut bubbled = input.to_vec();
    bubble_sort(&mut bubbled);
    assert_eq!(bubbled, vec![1, 2, 3]);
    assert_eq!(validate(&input), Ok(vec![1, 2, 3]));
}

#[test]
fn test_outcome_lets_caller_continue() {
    let inputs: [&[i32]; 3] = [&[4, 3, 2, 1], &[2, 1, 3], &[5, 4, 3]];
    let passed = inputs
        .iter()
        .map(|i| ValidationOutcome::from_result(validate(i)).unwrap())
        .filter(ValidationOutcome::is_pass)
        .count();
    assert_eq!(passed, 1);
}

#[test]
fn test_replay_corpus() {
    let corpus = "# symbolic cases\n4 3 2 1\n\n1 2 3\n2 1 3\n";
    let cases = parse_corpus(corpus).unwrap();
    let summary = run_campaign(&cases);
    assert_eq!(summary.total, 3);
    assert_eq!(summary.passed, 2);
    assert_eq!(summary.limitation_failures, 1);
    assert_eq!(summary.regressions, 0);
}

#[test]
fn test_campaign_report_roundtrip() {
    let config = CampaignConfig {
        cases: 300,
        max_len: 6,
        min_value: -9,
        max_value: 9,
        seed: 2024,
    };
    let summary = run_campaign(&generate_cases(&config));
    assert_eq!(summary.regressions, 0);

    let report = CampaignReport::new("integration", config.clone(), summary.clone());
    let parsed = parse_lino_report(&report.to_lino()).unwrap();
    assert_eq!(parsed.config, config);
    assert_eq!(parsed.summary, summary);
}
