use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use roster::activity::{process_data, ReportOutcome};
use roster::app::{handle_fatal_error, init_logging, AppConfig};
use roster::config::Settings;
use roster::salary::{department_averages, load_departments, rank_departments};

/// Salary rankings and user activity reports
#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Rank departments by salary and report user activity", long_about = None)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a settings file (default: ./roster.toml when present)
    #[arg(short = 'c', long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the three lowest- and highest-paid departments
    Rank {
        /// JSON file mapping departments to {employee: salary} objects
        departments: PathBuf,

        /// Only count salaries at or above this value
        #[arg(long)]
        min_salary: Option<f64>,

        /// Print the ranking as JSON
        #[arg(long)]
        json: bool,

        /// Also print every department's average
        #[arg(long)]
        averages: bool,
    },
    /// Write email host and login recency percentages for a users file
    Report {
        /// JSON file mapping user ids to {email, last_login} objects
        input: PathBuf,

        /// Where to write the report (parent directories are created)
        output: PathBuf,

        /// Measure login recency against this date (YYYY-MM-DD) instead of today
        #[arg(long)]
        reference_date: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::new(cli.verbose) {
        Ok(config) => config.with_config_path(cli.config.clone()),
        Err(e) => handle_fatal_error(e, cli.verbose),
    };
    init_logging(&config);

    if let Err(e) = run(cli.command, &config) {
        handle_fatal_error(e, config.verbose);
    }
}

fn load_settings(config: &AppConfig) -> anyhow::Result<Settings> {
    let mut settings = Settings::load(config.config_path(), &config.working_dir)
        .context("Failed to load settings")?;
    settings
        .merge_env_vars()
        .context("Invalid environment override")?;
    debug!("Effective settings: {:?}", settings);
    Ok(settings)
}

fn run(command: Commands, config: &AppConfig) -> anyhow::Result<()> {
    let settings = load_settings(config)?;

    match command {
        Commands::Rank {
            departments,
            min_salary,
            json,
            averages,
        } => run_rank(
            departments,
            min_salary.or(settings.salary.min_salary),
            json,
            averages,
        ),
        Commands::Report {
            input,
            output,
            reference_date,
        } => run_report(
            input,
            output,
            reference_date.or(settings.report.reference_date),
        ),
    }
}

fn run_rank(
    path: PathBuf,
    min_salary: Option<f64>,
    json: bool,
    show_averages: bool,
) -> anyhow::Result<()> {
    let departments = load_departments(&path)?;
    let pairs: Vec<(String, Vec<(String, f64)>)> =
        departments.into_iter().map(Into::into).collect();

    let averages = show_averages.then(|| department_averages(pairs.clone(), min_salary));
    let ranking = rank_departments(pairs, min_salary);

    if json {
        let mut value = serde_json::to_value(&ranking)?;
        if let Some(averages) = &averages {
            value["averages"] = serde_json::to_value(averages)?;
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Lowest:  {}", ranking.lowest.join(", "));
    println!("Highest: {}", ranking.highest.join(", "));
    if let Some(averages) = averages {
        println!("Averages:");
        for entry in averages {
            println!("  {}: {}", entry.department, entry.average);
        }
    }

    Ok(())
}

fn run_report(
    input: PathBuf,
    output: PathBuf,
    reference_date: Option<String>,
) -> anyhow::Result<()> {
    let outcome = process_data(&input, &output, reference_date.as_deref()).with_context(|| {
        format!(
            "Failed to write activity report to {}",
            output.display()
        )
    })?;

    match outcome {
        ReportOutcome::Written(report) => {
            println!(
                "Wrote {} entries to {}",
                report.len(),
                output.display()
            );
        }
        ReportOutcome::Failed(err) => {
            eprintln!(
                "⚠️  Report not generated ({}); error written to {}",
                err,
                output.display()
            );
        }
    }

    Ok(())
}
