//! Fitness Tracker CLI
//!
//! Batch driver for the athlete roster: add athletes, record quarterly
//! assessment results and review tiers and progress.
//!
//! # Usage
//! ```sh
//! fitness-tracker add-athlete --name "Jane Doe" --bodyweight 150 --sex female
//! fitness-tracker record --athlete <ID> --metric dead-hang --value 50
//! fitness-tracker report --athlete <ID>
//! ```
//!
//! # Environment Variables
//! - `FITNESS_DATA_FILE` - roster file (default: ~/.fitness_tracker/athletes.json)
//! - `FITNESS_LOG_LEVEL` - default log level (default: info)

use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};
use fitness_tracker::application::demo_data::create_test_athlete;
use fitness_tracker::application::{AthleteService, ProgressReport};
use fitness_tracker::config::Config;
use fitness_tracker::domain::errors::AthleteError;
use fitness_tracker::domain::fitness::{
    Athlete, AthleteProfile, FitnessGroup, FitnessMetricType, tier_thresholds,
};
use fitness_tracker::infrastructure::JsonRosterRepository;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::prelude::*;
use uuid::Uuid;

#[derive(Parser)]
#[command(author, version, about = "Quarterly fitness assessment tracker", long_about = None)]
struct Cli {
    /// Roster file, overrides FITNESS_DATA_FILE
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Sex {
    Male,
    Female,
}

#[derive(clap::Args)]
struct ProfileArgs {
    /// Athlete name
    #[arg(long)]
    name: String,

    /// Date of birth (YYYY-MM-DD)
    #[arg(long)]
    dob: Option<NaiveDate>,

    /// Bodyweight in pounds
    #[arg(long)]
    bodyweight: Option<f64>,

    /// Height in inches
    #[arg(long)]
    height: Option<f64>,

    /// Selects sex-specific thresholds
    #[arg(long, value_enum)]
    sex: Option<Sex>,
}

impl ProfileArgs {
    fn profile(&self) -> AthleteProfile {
        AthleteProfile {
            date_of_birth: self.dob,
            bodyweight_lbs: self.bodyweight,
            height_inches: self.height,
            is_male: self.sex.map(|s| matches!(s, Sex::Male)),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Add an athlete to the roster
    AddAthlete {
        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Replace an athlete's name and profile (omitted fields are cleared)
    UpdateAthlete {
        #[arg(long)]
        id: Uuid,

        #[command(flatten)]
        profile: ProfileArgs,
    },
    /// Remove an athlete and their history
    RemoveAthlete {
        #[arg(long)]
        id: Uuid,
    },
    /// List the roster
    List,
    /// Record one metric result
    Record {
        #[arg(long)]
        athlete: Uuid,

        /// Metric name, e.g. resting-heart-rate, deadlift-5rm, dead-hang
        #[arg(long)]
        metric: String,

        #[arg(long)]
        value: f64,

        /// Assessment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        #[arg(long)]
        notes: Option<String>,
    },
    /// Change the value and date of an existing record
    EditRecord {
        #[arg(long)]
        athlete: Uuid,

        #[arg(long)]
        record: Uuid,

        #[arg(long)]
        value: f64,

        /// Assessment date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,

        /// Replaces the note; the existing note is kept when omitted
        #[arg(long)]
        notes: Option<String>,
    },
    /// Delete a record
    RemoveRecord {
        #[arg(long)]
        athlete: Uuid,

        #[arg(long)]
        record: Uuid,
    },
    /// Show one metric's history with tiers
    History {
        #[arg(long)]
        athlete: Uuid,

        #[arg(long)]
        metric: String,
    },
    /// Latest tier and change per metric
    Report {
        #[arg(long)]
        athlete: Uuid,
    },
    /// Describe the tier breakpoints of a metric
    Thresholds {
        #[arg(long)]
        metric: String,

        #[arg(long, value_enum, default_value = "male")]
        sex: Sex,
    },
    /// Add a sample athlete with a year of results
    SeedDemo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env_with_data_file(cli.data_file)?;

    // Logs go to stderr so command output stays clean
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.logging.level.into()),
        )
        .with(stderr_layer)
        .init();

    let data_file = config.storage.data_file;
    info!("Using roster file {:?}", data_file);

    let store = Arc::new(JsonRosterRepository::new(data_file));
    let mut service = AthleteService::new(store);
    service.load().await?;

    run(cli.command, &mut service).await
}

async fn run(command: Commands, service: &mut AthleteService) -> Result<()> {
    let today = Local::now().date_naive();

    match command {
        Commands::AddAthlete { profile } => {
            let athlete = service.add_athlete(&profile.name, profile.profile())?;
            println!("Added {} ({})", athlete.name(), athlete.id());
            service.save().await?;
        }
        Commands::UpdateAthlete { id, profile } => {
            if !service.update_athlete(id, &profile.name, profile.profile())? {
                return Err(AthleteError::AthleteNotFound { id }.into());
            }
            println!("Updated {}", id);
            service.save().await?;
        }
        Commands::RemoveAthlete { id } => {
            if !service.remove_athlete(id) {
                return Err(AthleteError::AthleteNotFound { id }.into());
            }
            println!("Removed {}", id);
            service.save().await?;
        }
        Commands::List => {
            if service.athletes().is_empty() {
                println!("No athletes recorded.");
            }
            for athlete in service.athletes() {
                print_athlete(athlete);
            }
        }
        Commands::Record {
            athlete,
            metric,
            value,
            date,
            notes,
        } => {
            let metric = FitnessMetricType::from_str(&metric)?;
            metric.validate_value(value)?;

            let record = service.record_metric(
                athlete,
                metric.group(),
                metric,
                value,
                date.unwrap_or(today),
                notes,
            )?;
            let tier = require_athlete(service, athlete)?.evaluate(&record);
            println!(
                "Recorded {} = {} {} for {} ({}), tier {}",
                metric.display_name(),
                record.value(),
                metric.unit(),
                record.quarter_label(),
                record.id(),
                tier
            );
            service.save().await?;
        }
        Commands::EditRecord {
            athlete,
            record,
            value,
            date,
            notes,
        } => {
            let existing = require_athlete(service, athlete)?
                .find_record(record)
                .map(|r| r.metric_type());
            if let Some(metric) = existing {
                metric.validate_value(value)?;
            }

            match service.update_metric_record(athlete, record, value, date.unwrap_or(today), notes)
            {
                Some(updated) => {
                    println!(
                        "Updated {} to {} ({})",
                        updated.metric_type().display_name(),
                        updated.value(),
                        updated.quarter_label()
                    );
                    service.save().await?;
                }
                None => anyhow::bail!("Record not found: {}", record),
            }
        }
        Commands::RemoveRecord { athlete, record } => {
            if !service.remove_metric_record(athlete, record) {
                anyhow::bail!("Record not found: {}", record);
            }
            println!("Removed record {}", record);
            service.save().await?;
        }
        Commands::History { athlete, metric } => {
            let metric = FitnessMetricType::from_str(&metric)?;
            let athlete = require_athlete(service, athlete)?;

            println!("{} - {} ({})", athlete.name(), metric.display_name(), metric.unit());
            for record in athlete.records_for_metric(metric) {
                println!(
                    "  {:<8} {:>10} {:>10.2}  {:<13} {}",
                    record.quarter_label(),
                    record.recorded_date(),
                    record.value(),
                    athlete.evaluate(record).to_string(),
                    record.notes().unwrap_or("")
                );
            }
        }
        Commands::Report { athlete } => {
            let athlete = require_athlete(service, athlete)?;
            print_report(&ProgressReport::build(athlete));
        }
        Commands::Thresholds { metric, sex } => {
            let metric = FitnessMetricType::from_str(&metric)?;
            let labels = tier_thresholds(metric, matches!(sex, Sex::Male));
            println!("{} ({})", metric.display_name(), metric.group().display_name());
            println!("  Average: {}", labels.average);
            println!("  Good:    {}", labels.good);
            println!("  Peak:    {}", labels.peak);
        }
        Commands::SeedDemo => {
            let id = create_test_athlete(service, today)?;
            println!("Added demo athlete {}", id);
            service.save().await?;
        }
    }

    Ok(())
}

fn require_athlete(service: &AthleteService, id: Uuid) -> Result<&Athlete, AthleteError> {
    service
        .athlete(id)
        .ok_or(AthleteError::AthleteNotFound { id })
}

fn print_athlete(athlete: &Athlete) {
    let profile = athlete.profile();
    let sex = match profile.is_male {
        Some(true) => "male",
        Some(false) => "female",
        None => "-",
    };
    println!(
        "{}  {:<24} bw={:<6} sex={:<6} records={}",
        athlete.id(),
        athlete.name(),
        profile
            .bodyweight_lbs
            .map(|bw| bw.to_string())
            .unwrap_or_else(|| "-".to_string()),
        sex,
        athlete.records().len()
    );
}

fn print_report(report: &ProgressReport) {
    println!("Progress report: {}", report.athlete_name);

    for group in FitnessGroup::ALL {
        let entries: Vec<_> = report
            .entries
            .iter()
            .filter(|e| e.metric.group() == group)
            .collect();
        if entries.is_empty() {
            continue;
        }

        println!("{}", group.display_name());
        for entry in entries {
            let change = entry
                .improvement_pct
                .map(|pct| format!("{:+.1}%", pct))
                .unwrap_or_else(|| "n/a".to_string());
            println!(
                "  {:<22} {:>10.2} {:<9} {:<13} {:>8}  {}",
                entry.metric.display_name(),
                entry.latest.value(),
                entry.metric.unit(),
                entry.tier.to_string(),
                change,
                entry.latest.quarter_label()
            );
        }
    }

    let counts = report.tier_counts();
    let summary: Vec<String> = counts
        .iter()
        .rev()
        .map(|(tier, count)| format!("{}: {}", tier, count))
        .collect();
    if !summary.is_empty() {
        println!("Tiers - {}", summary.join(", "));
    }
}
