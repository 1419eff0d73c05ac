//! Jobboard CLI - Command-line interface over the job listing store
//!
//! Connects to MongoDB at startup (fatal on failure), runs one operation and exits.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use jobboard_core::application::JobBoardService;
use jobboard_core::domain::{CreateJobListingInput, JobListing, UpdateJobListingInput};
use jobboard_infra_mongo::{connect, MongoSettings};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_DATABASE: &str = "jobboard";

#[derive(Parser)]
#[command(name = "jobboard")]
#[command(about = "Jobboard job listing store CLI", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Logical database holding the jobs collection
    #[arg(long, env = "JOBBOARD_DATABASE", default_value = DEFAULT_DATABASE)]
    database: String,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every job listing
    List,

    /// Show one job listing
    Get {
        /// Job ID
        id: String,
    },

    /// Create a job listing
    Create {
        #[arg(long)]
        title: String,

        #[arg(long)]
        description: String,

        #[arg(long)]
        company: String,

        #[arg(long)]
        url: String,
    },

    /// Update the given fields of a job listing
    Update {
        /// Job ID
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        company: Option<String>,

        #[arg(long)]
        url: Option<String>,
    },

    /// Delete a job listing
    Delete {
        /// Job ID
        id: String,
    },
}

#[derive(Tabled)]
struct JobRow {
    id: String,
    title: String,
    company: String,
    url: String,
    description: String,
}

impl From<JobListing> for JobRow {
    fn from(job: JobListing) -> Self {
        Self {
            id: job.id,
            title: job.title,
            company: job.company,
            url: job.url,
            description: job.description,
        }
    }
}

fn init_logging() -> Result<()> {
    let log_format = std::env::var("JOBBOARD_LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("jobboard=info"))
        .context("Failed to create env filter")?;

    match log_format.as_str() {
        "json" => {
            // Production: JSON structured logging
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .init();
        }
        _ => {
            // Development: Pretty formatting with colors
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().pretty().with_writer(std::io::stderr))
                .init();
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_jobs(jobs: Vec<JobListing>) {
    if jobs.is_empty() {
        println!("{}", "No job listings".yellow());
        return;
    }
    let rows: Vec<JobRow> = jobs.into_iter().map(JobRow::from).collect();
    println!("{}", Table::new(rows));
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; variables may come from the environment
    let _ = dotenvy::dotenv();

    init_logging()?;

    let cli = Cli::parse();

    info!("Jobboard v{} starting...", VERSION);

    // Startup: any settings or connection failure ends the process here
    let settings = MongoSettings::from_env().context("Failed to load MongoDB settings")?;
    let store = connect(&settings, &cli.database)
        .await
        .context("Failed to connect to MongoDB")?;
    let service = JobBoardService::new(Arc::new(store));

    match cli.command {
        Commands::List => {
            let jobs = service.jobs().await?;
            if cli.json {
                print_json(&jobs)?;
            } else {
                print_jobs(jobs);
            }
        }

        Commands::Get { id } => {
            let job = service.job(&id).await?;
            if cli.json {
                print_json(&job)?;
            } else {
                print_jobs(vec![job]);
            }
        }

        Commands::Create {
            title,
            description,
            company,
            url,
        } => {
            let input = CreateJobListingInput::new(title, description, company, url);
            let job = service.create_job_listing(input).await?;

            if cli.json {
                print_json(&job)?;
            } else {
                println!("{}", "✓ Job listing created".green().bold());
                println!();
                print_jobs(vec![job]);
            }
        }

        Commands::Update {
            id,
            title,
            description,
            company,
            url,
        } => {
            let input = UpdateJobListingInput {
                id: id.clone(),
                title,
                description,
                company,
                url,
            };
            let job = service.update_job_listing(&id, input).await?;

            if cli.json {
                print_json(&job)?;
            } else {
                println!("{}", format!("✓ Job {} updated", id).green().bold());
                println!();
                print_jobs(vec![job]);
            }
        }

        Commands::Delete { id } => {
            let response = service.delete_job_listing(&id).await?;

            if cli.json {
                print_json(&response)?;
            } else {
                println!(
                    "{}",
                    format!("✓ Job {} deleted", response.delete_job_id).green().bold()
                );
            }
        }
    }

    Ok(())
}
