//! Lino to Markdown Converter
//!
//! Converts a campaign report saved by `diffsort fuzz --lino` to Markdown.
//!
//! Usage:
//!   lino2md input.lino [output.md]
//!
//! If output is not specified, prints to stdout.

use std::env;
use std::fs;
use std::path::Path;
use std::process;

use log::error;

use diffsort::report::parse_lino_report;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <input.lino> [output.md]", args[0]);
        eprintln!();
        eprintln!("Converts a Links Notation campaign report to Markdown format.");
        process::exit(1);
    }

    let input_path = Path::new(&args[1]);

    let content = match fs::read_to_string(input_path) {
        Ok(c) => c,
        Err(e) => {
            error!("reading {}: {}", input_path.display(), e);
            process::exit(1);
        }
    };

    let report = match parse_lino_report(&content) {
        Some(r) => r,
        None => {
            error!("{} is not a campaign report", input_path.display());
            process::exit(1);
        }
    };

    let markdown = report.to_markdown();

    if let Some(output) = args.get(2) {
        let output_path = Path::new(output);
        if let Err(e) = fs::write(output_path, &markdown) {
            error!("writing {}: {}", output_path.display(), e);
            process::exit(1);
        }
        println!("Markdown report written to: {}", output_path.display());
    } else {
        print!("{}", markdown);
    }
}
