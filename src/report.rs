//! Campaign Report Generator
//!
//! Writes campaign results in Links Notation (Lino), a small indentation-based
//! format of named links, and converts them to Markdown.
//!
//! ```text
//! campaign_report:
//!   timestamp '2026-01-01T00:00:00Z'
//!   description 'nightly'
//!
//! summary:
//!   total 1000
//!   passed 874
//! ```

use std::fmt::Write;
use std::fs;
use std::io;
use std::path::Path;

use crate::campaign::{CampaignConfig, CampaignSummary, CaseFailure};
use crate::error::Mismatch;

/// A campaign together with the parameters it ran with.
#[derive(Debug, Clone)]
pub struct CampaignReport {
    /// When the report was created (ISO 8601, UTC)
    pub timestamp: String,
    pub description: String,
    pub config: CampaignConfig,
    pub summary: CampaignSummary,
}

impl CampaignReport {
    pub fn new(description: &str, config: CampaignConfig, summary: CampaignSummary) -> Self {
        CampaignReport {
            timestamp: utc_timestamp(),
            description: description.to_string(),
            config,
            summary,
        }
    }

    /// Render the report in Links Notation.
    pub fn to_lino(&self) -> String {
        let mut out = String::new();
        let c = &self.config;
        let s = &self.summary;

        // Writing into a String cannot fail.
        let _ = writeln!(out, "campaign_report:");
        let _ = writeln!(out, "  timestamp '{}'", self.timestamp);
        let _ = writeln!(out, "  description '{}'", escape_lino_string(&self.description));

        let _ = writeln!(out);
        let _ = writeln!(out, "config:");
        let _ = writeln!(out, "  cases {}", c.cases);
        let _ = writeln!(out, "  max_len {}", c.max_len);
        let _ = writeln!(out, "  min_value {}", c.min_value);
        let _ = writeln!(out, "  max_value {}", c.max_value);
        let _ = writeln!(out, "  seed {}", c.seed);

        let _ = writeln!(out);
        let _ = writeln!(out, "summary:");
        let _ = writeln!(out, "  total {}", s.total);
        let _ = writeln!(out, "  passed {}", s.passed);
        let _ = writeln!(out, "  limitation_failures {}", s.limitation_failures);
        let _ = writeln!(out, "  regressions {}", s.regressions);
        let _ = writeln!(out, "  allocation_failures {}", s.allocation_failures);

        if !s.failures.is_empty() {
            let _ = writeln!(out);
            let _ = writeln!(out, "failures:");
            for (i, f) in s.failures.iter().enumerate() {
                let _ = writeln!(out, "  failure_{}:", i);
                let _ = writeln!(out, "    input '{}'", join_values(&f.input));
                let _ = writeln!(out, "    index {}", f.mismatch.index);
                let _ = writeln!(out, "    insertion {}", f.mismatch.insertion);
                let _ = writeln!(out, "    bubble {}", f.mismatch.bubble);
                let _ = writeln!(out, "    limitation {}", f.limitation);
            }
        }

        out
    }

    /// Save the report to a file in Links Notation format
    pub fn save_lino(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_lino())
    }

    /// Render the report as Markdown.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        let c = &self.config;
        let s = &self.summary;

        let _ = writeln!(out, "# Differential Sort Campaign Report");
        let _ = writeln!(out);
        let _ = writeln!(out, "**Timestamp:** {}", self.timestamp);
        let _ = writeln!(out, "**Description:** {}", self.description);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Configuration");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Parameter | Value |");
        let _ = writeln!(out, "|-----------|-------|");
        let _ = writeln!(out, "| Cases | {} |", c.cases);
        let _ = writeln!(out, "| Max length | {} |", c.max_len);
        let _ = writeln!(out, "| Value range | {}..={} |", c.min_value, c.max_value);
        let _ = writeln!(out, "| Seed | {} |", c.seed);
        let _ = writeln!(out);

        let _ = writeln!(out, "## Summary");
        let _ = writeln!(out);
        let _ = writeln!(out, "| Outcome | Count |");
        let _ = writeln!(out, "|---------|-------|");
        let _ = writeln!(out, "| Total | {} |", s.total);
        let _ = writeln!(out, "| Passed | {} ({:.1}%) |", s.passed, s.pass_rate() * 100.0);
        let _ = writeln!(out, "| Single-pass limitation | {} |", s.limitation_failures);
        let _ = writeln!(out, "| Regressions | {} |", s.regressions);
        let _ = writeln!(out, "| Allocation failures | {} |", s.allocation_failures);
        let _ = writeln!(out);

        if !s.failures.is_empty() {
            let _ = writeln!(out, "## Failing Cases");
            let _ = writeln!(out);
            let _ = writeln!(out, "| Input | Index | Insertion | Bubble | Kind |");
            let _ = writeln!(out, "|-------|-------|-----------|--------|------|");
            for f in &s.failures {
                let kind = if f.limitation { "limitation" } else { "regression" };
                let _ = writeln!(
                    out,
                    "| [{}] | {} | {} | {} | {} |",
                    f.input
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join(", "),
                    f.mismatch.index,
                    f.mismatch.insertion,
                    f.mismatch.bubble,
                    kind
                );
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "---");
        let _ = writeln!(out, "*Report generated by diffsort*");

        out
    }

    /// Save the report as a markdown file
    pub fn save_markdown(&self, path: &Path) -> io::Result<()> {
        fs::write(path, self.to_markdown())
    }
}

/// Escape a string for use in Links Notation (handle single quotes)
fn escape_lino_string(s: &str) -> String {
    s.replace('\'', "\\'")
}

fn join_values(values: &[i32]) -> String {
    values
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Current UTC time as `YYYY-MM-DDTHH:MM:SSZ`.
fn utc_timestamp() -> String {
    use std::time::{SystemTime, UNIX_EPOCH};

    let secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let (year, month, day) = civil_from_days((secs / 86_400) as i64);
    let tod = secs % 86_400;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
        year,
        month,
        day,
        tod / 3600,
        (tod % 3600) / 60,
        tod % 60
    )
}

/// Gregorian date for a count of days since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u32;
    let year = yoe + era * 400 + i64::from(month <= 2);
    (year, month, day)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Header,
    Config,
    Summary,
    Failures,
}

/// Parse a report written by [`CampaignReport::to_lino`].
///
/// Returns `None` if the text has no `summary:` section.
pub fn parse_lino_report(content: &str) -> Option<CampaignReport> {
    let mut report = CampaignReport {
        timestamp: String::new(),
        description: String::new(),
        config: CampaignConfig::default(),
        summary: CampaignSummary::default(),
    };
    let mut section = Section::None;
    let mut saw_summary = false;
    let mut current: Option<CaseFailure> = None;

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if !line.starts_with(' ') {
            section = match trimmed {
                "campaign_report:" => Section::Header,
                "config:" => Section::Config,
                "summary:" => {
                    saw_summary = true;
                    Section::Summary
                }
                "failures:" => Section::Failures,
                _ => Section::None,
            };
            continue;
        }

        let (key, value) = match trimmed.split_once(' ') {
            Some((k, v)) => (k, v.trim()),
            None => (trimmed, ""),
        };

        match section {
            Section::Header => match key {
                "timestamp" => report.timestamp = unquote(value)?,
                "description" => report.description = unquote(value)?,
                _ => {}
            },
            Section::Config => {
                let c = &mut report.config;
                match key {
                    "cases" => c.cases = value.parse().ok()?,
                    "max_len" => c.max_len = value.parse().ok()?,
                    "min_value" => c.min_value = value.parse().ok()?,
                    "max_value" => c.max_value = value.parse().ok()?,
                    "seed" => c.seed = value.parse().ok()?,
                    _ => {}
                }
            }
            Section::Summary => {
                let s = &mut report.summary;
                match key {
                    "total" => s.total = value.parse().ok()?,
                    "passed" => s.passed = value.parse().ok()?,
                    "limitation_failures" => s.limitation_failures = value.parse().ok()?,
                    "regressions" => s.regressions = value.parse().ok()?,
                    "allocation_failures" => s.allocation_failures = value.parse().ok()?,
                    _ => {}
                }
            }
            Section::Failures => {
                if key.starts_with("failure_") && key.ends_with(':') {
                    if let Some(f) = current.take() {
                        report.summary.failures.push(f);
                    }
                    current = Some(CaseFailure {
                        input: Vec::new(),
                        mismatch: Mismatch {
                            index: 0,
                            insertion: 0,
                            bubble: 0,
                        },
                        limitation: false,
                    });
                    continue;
                }
                let f = current.as_mut()?;
                match key {
                    "input" => {
                        f.input = unquote(value)?
                            .split_whitespace()
                            .map(|t| t.parse().ok())
                            .collect::<Option<Vec<i32>>>()?;
                    }
                    "index" => f.mismatch.index = value.parse().ok()?,
                    "insertion" => f.mismatch.insertion = value.parse().ok()?,
                    "bubble" => f.mismatch.bubble = value.parse().ok()?,
                    "limitation" => f.limitation = value == "true",
                    _ => {}
                }
            }
            Section::None => {}
        }
    }

    if let Some(f) = current {
        report.summary.failures.push(f);
    }

    saw_summary.then_some(report)
}

fn unquote(value: &str) -> Option<String> {
    let inner = value.strip_prefix('\'')?.strip_suffix('\'')?;
    Some(inner.replace("\\'", "'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::run_campaign;

    fn sample_report() -> CampaignReport {
        let summary = run_campaign(&[vec![4, 3, 2, 1], vec![2, 1, 3], vec![]]);
        let config = CampaignConfig {
            cases: 3,
            max_len: 4,
            min_value: -5,
            max_value: 5,
            seed: 9,
        };
        CampaignReport::new("it's a test", config, summary)
    }

    #[test]
    fn test_report_to_lino() {
        let lino = sample_report().to_lino();
        assert!(lino.contains("campaign_report:"));
        assert!(lino.contains("description 'it\\'s a test'"));
        assert!(lino.contains("  passed 2"));
        assert!(lino.contains("  limitation_failures 1"));
        assert!(lino.contains("    input '4 3 2 1'"));
        assert!(lino.contains("    bubble 3"));
    }

    #[test]
    fn test_report_to_markdown() {
        let md = sample_report().to_markdown();
        assert!(md.contains("# Differential Sort Campaign Report"));
        assert!(md.contains("| Passed | 2 (66.7%) |"));
        assert!(md.contains("| [4, 3, 2, 1] | 0 | 1 | 3 | limitation |"));
    }

    #[test]
    fn test_parse_lino_roundtrip() {
        let report = sample_report();
        let parsed = parse_lino_report(&report.to_lino()).unwrap();

        assert_eq!(parsed.timestamp, report.timestamp);
        assert_eq!(parsed.description, "it's a test");
        assert_eq!(parsed.config, report.config);
        assert_eq!(parsed.summary, report.summary);
    }

    #[test]
    fn test_parse_rejects_unrelated_text() {
        assert!(parse_lino_report("hello\nworld\n").is_none());
    }

    #[test]
    fn test_escape_lino_string() {
        assert_eq!(escape_lino_string("hello"), "hello");
        assert_eq!(escape_lino_string("it's"), "it\\'s");
    }

    #[test]
    fn test_civil_from_days() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        assert_eq!(civil_from_days(19_723), (2024, 1, 1));
    }

    #[test]
    fn test_timestamp_shape() {
        let ts = utc_timestamp();
        assert_eq!(ts.len(), 20);
        assert!(ts.ends_with('Z'));
        assert_eq!(&ts[4..5], "-");
        assert_eq!(&ts[10..11], "T");
    }
}
