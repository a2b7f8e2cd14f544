//! Salary Predictor CLI - headless predictions
//!
//! Predicts one profile given on the command line, or every row of a CSV file
//! whose headers are the form's column names
//! (`Age,Gender,Education Level,Job Title,Years of Experience`).
//! Results are printed to stdout as JSON lines; logs go to stderr.
//!
//! # Usage
//! ```sh
//! cargo run --bin predict -- --age 30 --gender Male --education "Bachelor's" \
//!     --job-title "Data Analyst" --experience 5
//! cargo run --bin predict -- --batch employees.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use salary_predictor::application::bootstrap::ServicesBootstrap;
use salary_predictor::application::salary_service::SalaryService;
use salary_predictor::config::Config;
use salary_predictor::domain::employee::{
    DEFAULT_AGE, DEFAULT_EXPERIENCE, EducationLevel, EmployeeProfile, Gender, JobTitle,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::{Level, info, warn};
use tracing_subscriber::prelude::*;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file with one employee per row; overrides the single-profile flags
    #[arg(long)]
    batch: Option<PathBuf>,

    /// Age in years (18-70)
    #[arg(long, default_value_t = DEFAULT_AGE)]
    age: u32,

    #[arg(long, default_value = "Female")]
    gender: Gender,

    /// Bachelor's, Master's or PhD
    #[arg(long, default_value = "Bachelor's")]
    education: EducationLevel,

    #[arg(long, default_value = "Data Analyst")]
    job_title: JobTitle,

    /// Years of experience (0-50, step 0.5)
    #[arg(long, default_value_t = DEFAULT_EXPERIENCE)]
    experience: f64,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stderr_layer)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    let service = ServicesBootstrap::init(&config)?;

    let failures = match &args.batch {
        Some(path) => run_batch(&service, path).await?,
        None => {
            let profile = EmployeeProfile {
                age: args.age,
                gender: args.gender,
                education: args.education,
                job_title: args.job_title,
                experience: args.experience,
            };
            usize::from(!run_one(&service, None, &profile).await)
        }
    };

    if failures > 0 {
        anyhow::bail!("{} prediction(s) failed", failures);
    }
    Ok(())
}

/// Prints one JSON line; returns whether the profile produced an estimate.
async fn run_one(service: &SalaryService, row: Option<usize>, profile: &EmployeeProfile) -> bool {
    if let Err(e) = profile.validate() {
        println!("{}", json!({ "row": row, "error": e.to_string() }));
        return false;
    }

    match service.estimate(profile).await {
        Ok(estimate) => {
            println!("{}", json!({ "row": row, "estimate": estimate }));
            true
        }
        Err(e) => {
            println!("{}", json!({ "row": row, "error": e.to_string() }));
            false
        }
    }
}

async fn run_batch(service: &SalaryService, path: &PathBuf) -> Result<usize> {
    let mut reader =
        csv::Reader::from_path(path).with_context(|| format!("Failed to open {:?}", path))?;

    let mut total = 0;
    let mut failures = 0;
    for (i, record) in reader.deserialize::<EmployeeProfile>().enumerate() {
        let row = i + 1;
        total += 1;
        match record {
            Ok(profile) => {
                if !run_one(service, Some(row), &profile).await {
                    failures += 1;
                }
            }
            Err(e) => {
                warn!("Row {} of {:?} is malformed: {}", row, path, e);
                println!("{}", json!({ "row": row, "error": e.to_string() }));
                failures += 1;
            }
        }
    }

    info!("Batch {:?}: {} rows, {} failed", path, total, failures);
    Ok(failures)
}
