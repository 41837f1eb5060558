//! datasum - Descriptive summary for CSV files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use datasum::config::Config;
use datasum::output::{render_to_stdout, write_summary_csv};
use datasum::parser;
use datasum::prompt::prompt_for_csv_path;
use datasum::summary::summarize;

/// Summarize a CSV file (per-column stats + null/empty counts)
#[derive(Parser, Debug)]
#[command(name = "datasum")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the input CSV file; prompts interactively when omitted
    csv: Option<PathBuf>,

    /// Save the per-column summary as CSV at this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Only read this many data rows (for large files)
    #[arg(long)]
    nrows: Option<usize>,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let csv_path = match cli.csv {
        Some(path) => path,
        None => match prompt_for_csv_path()? {
            Some(path) => path,
            None => {
                println!("No file provided. Exiting.");
                return Ok(());
            }
        },
    };

    let mut config = Config::new();
    if let Some(nrows) = cli.nrows {
        config = config.with_nrows(nrows);
    }
    if let Some(output) = cli.output {
        config = config.with_output(output);
    }

    let table = parser::parse(&csv_path, &config)
        .with_context(|| format!("Failed to load CSV file: {}", csv_path.display()))?;

    let report = summarize(&table);
    render_to_stdout(&report, &csv_path)?;

    if let Some(ref output) = config.output {
        write_summary_csv(output, &report.columns)
            .with_context(|| format!("Failed to save summary to: {}", output.display()))?;
        println!();
        println!("Per-column summary saved to: {}", output.display());
    }

    Ok(())
}
