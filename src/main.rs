//! diffsort CLI
//!
//! Runs the differential validator on a single case, on a recorded corpus,
//! or on a generated campaign.
//!
//! Exit codes: 0 when everything agreed (or only the known single-pass
//! limitation was hit during `fuzz`), 1 on a mismatch, 2 on allocation failure.

use std::error::Error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use log::{error, info};

use diffsort::campaign::{self, CampaignConfig};
use diffsort::corpus;
use diffsort::report::CampaignReport;
use diffsort::{bubble_sort, insertion_sort, validate, ValidationOutcome};

#[derive(Parser)]
#[command(name = "diffsort", about = "Differential check of insertion sort against single-pass bubble sort")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate one sequence given on the command line
    Check {
        /// Values to sort (whitespace or comma separated)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },
    /// Validate every case of a corpus file (one case per line)
    Replay {
        path: PathBuf,
    },
    /// Generate random cases and validate them
    Fuzz {
        #[arg(long, default_value_t = CampaignConfig::default().cases)]
        cases: usize,
        #[arg(long, default_value_t = CampaignConfig::default().max_len)]
        max_len: usize,
        #[arg(long = "min", default_value_t = CampaignConfig::default().min_value, allow_negative_numbers = true)]
        min_value: i32,
        #[arg(long = "max", default_value_t = CampaignConfig::default().max_value, allow_negative_numbers = true)]
        max_value: i32,
        #[arg(long, default_value_t = CampaignConfig::default().seed)]
        seed: u64,
        /// Write a Links Notation report here
        #[arg(long)]
        lino: Option<PathBuf>,
        /// Write a Markdown report here
        #[arg(long)]
        markdown: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Check { values } => run_check(&values),
        Command::Replay { path } => run_replay(&path),
        Command::Fuzz {
            cases,
            max_len,
            min_value,
            max_value,
            seed,
            lino,
            markdown,
        } => {
            let config = CampaignConfig {
                cases,
                max_len,
                min_value,
                max_value,
                seed,
            };
            run_fuzz(config, lino, markdown)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            ExitCode::from(2)
        }
    }
}

fn run_check(values: &[String]) -> Result<ExitCode, Box<dyn Error>> {
    let input = corpus::parse_case(&values.join(" "), 1)?;

    let insertion = insertion_sort(&input)?;
    let mut bubble = input.clone();
    bubble_sort(&mut bubble);

    println!("input:          {:?}", input);
    println!("insertion_sort: {:?}", insertion);
    println!("bubble_sort:    {:?}", bubble);

    match ValidationOutcome::from_result(validate(&input)) {
        Ok(ValidationOutcome::Pass { .. }) => {
            println!("validation: OK");
            Ok(ExitCode::SUCCESS)
        }
        Ok(ValidationOutcome::Fail(m)) => {
            let kind = if m.is_single_pass_limitation(&input) {
                "single-pass limitation"
            } else {
                "regression"
            };
            println!("validation: FAILED ({}): {}", kind, m);
            Ok(ExitCode::from(1))
        }
        Err(e) => Err(e.into()),
    }
}

fn run_replay(path: &Path) -> Result<ExitCode, Box<dyn Error>> {
    let cases = corpus::load_corpus(path)?;
    info!("loaded {} cases from {}", cases.len(), path.display());

    let summary = campaign::run_campaign(&cases);
    for f in &summary.failures {
        println!("FAILED {:?}: {}", f.input, f.mismatch);
    }
    println!(
        "{} cases: {} passed, {} failed",
        summary.total,
        summary.passed,
        summary.failed()
    );

    Ok(if summary.allocation_failures > 0 {
        ExitCode::from(2)
    } else if summary.failed() > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}

fn run_fuzz(
    config: CampaignConfig,
    lino: Option<PathBuf>,
    markdown: Option<PathBuf>,
) -> Result<ExitCode, Box<dyn Error>> {
    info!(
        "generating {} cases (max_len {}, values {}..={}, seed {})",
        config.cases, config.max_len, config.min_value, config.max_value, config.seed
    );
    let cases = campaign::generate_cases(&config);

    let start = Instant::now();
    let summary = campaign::run_campaign(&cases);
    let elapsed = start.elapsed();

    println!("Campaign results");
    println!("================");
    println!("Cases:                  {}", summary.total);
    println!("Passed:                 {} ({:.1}%)", summary.passed, summary.pass_rate() * 100.0);
    println!("Single-pass limitation: {}", summary.limitation_failures);
    println!("Regressions:            {}", summary.regressions);
    println!("Allocation failures:    {}", summary.allocation_failures);
    println!("Time:                   {:.3} ms", elapsed.as_secs_f64() * 1000.0);

    let regressions = summary.regressions;
    let oom = summary.allocation_failures;
    let report = CampaignReport::new("differential fuzz campaign", config, summary);
    if let Some(path) = lino {
        report.save_lino(&path)?;
        println!("Lino report written to: {}", path.display());
    }
    if let Some(path) = markdown {
        report.save_markdown(&path)?;
        println!("Markdown report written to: {}", path.display());
    }

    Ok(if oom > 0 {
        ExitCode::from(2)
    } else if regressions > 0 {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    })
}
