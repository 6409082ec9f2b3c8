mod analysis;
mod config;
mod display;
mod error;
mod labels;
mod response;

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use analysis::classifier;
use config::{Config, Locale};
use display::output::{display_error, display_info, display_lines, render};
use error::AppError;
use labels::LabelTable;
use response::models::TeamStadiumOpponentListResponse;

#[derive(Parser, Debug)]
#[command(name = "Stadium Scout")]
#[command(about = "Summarize team stadium opponent responses", long_about = None)]
struct Args {
    /// Response dump files (JSON). Reads stdin when omitted.
    inputs: Vec<PathBuf>,

    /// Label language: en or ja (overrides SCOUT_LANG)
    #[arg(short, long)]
    lang: Option<String>,

    /// Show the per-character aptitude table for post-selection responses
    #[arg(long)]
    detail: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(lang) = &args.lang {
        config.locale = Locale::parse(lang)?;
    }
    let labels = config.locale.labels();

    if args.inputs.is_empty() {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .map_err(|e| AppError::IoError(e.to_string()))?;
        analyze_one(&raw, labels, args.detail)?;
        return Ok(());
    }

    let announce = args.inputs.len() > 1;
    for path in &args.inputs {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if announce {
            display_info(&path.display().to_string());
        }
        // Each response is classified and rendered fully before the next.
        analyze_one(&raw, labels, args.detail)?;
    }

    Ok(())
}

fn analyze_one(raw: &str, labels: &dyn LabelTable, detail: bool) -> Result<(), AppError> {
    let response: TeamStadiumOpponentListResponse =
        serde_json::from_str(raw).map_err(|e| AppError::JsonError(e.to_string()))?;

    let shape = classifier::classify(&response);
    let lines = render(&shape, labels, detail)?;
    display_lines(&lines);

    Ok(())
}
