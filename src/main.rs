//! Juhyo preview tool
//!
//! Renders the generated parts of the page without a browser.
//!
//! ## Usage
//!
//! ```bash
//! # Calendar fragment for the current month
//! juhyo calendar
//!
//! # Calendar for a given date, with labels and events from a config file
//! juhyo calendar --date 2025-02-15 --config page-config.json
//!
//! # Reproducible snow stylesheet
//! juhyo snow --seed 7 --count 40
//!
//! # Validate a configuration file
//! juhyo check-config page-config.json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use juhyo_core::{CalendarConfig, CalendarMonth, PageConfig, SnowField};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Juhyo - resort page behavior preview
#[derive(Parser)]
#[command(name = "juhyo")]
#[command(version = "0.1.0")]
#[command(about = "Preview the generated parts of the resort page")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the calendar fragment for a month
    Calendar {
        /// Any day of the month to render, YYYY-MM-DD (default: today)
        #[arg(short, long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// Page configuration supplying events and labels
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a generated snow stylesheet
    Snow {
        /// Random seed (default: derived from the clock)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of particles
        #[arg(short = 'n', long, default_value_t = 100)]
        count: usize,
    },

    /// Validate a page configuration file
    CheckConfig {
        /// Path to the JSON configuration
        file: PathBuf,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("expected YYYY-MM-DD: {}", e))
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load_config(path: &PathBuf) -> Result<PageConfig> {
    PageConfig::load(path).with_context(|| format!("failed to load {}", path.display()))
}

fn clock_seed() -> u64 {
    let now = chrono::Utc::now();
    (now.timestamp() as u64).rotate_left(32) ^ u64::from(now.timestamp_subsec_nanos())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Calendar { date, config } => {
            let calendar = match config {
                Some(path) => load_config(&path)?.calendar,
                None => CalendarConfig::default(),
            };
            let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());
            tracing::info!(%date, "rendering calendar");

            let month = CalendarMonth::for_date(date, &calendar.events);
            println!("{}", month.render(&calendar.labels));
        }

        Commands::Snow { seed, count } => {
            let seed = seed.unwrap_or_else(clock_seed);
            tracing::info!(seed, count, "generating snow");

            let field = SnowField::generate(count, &mut StdRng::seed_from_u64(seed));
            print!("{}", field.stylesheet());
        }

        Commands::CheckConfig { file } => {
            let config = load_config(&file)?;

            println!("Configuration OK: {}", file.display());
            println!();
            println!("Video:");
            println!("  URL: {}", config.video.embed_url());
            println!("  Height: {}", config.video.height);
            println!("  Autoplay: {}", config.video.autoplay);
            println!();
            println!("Header threshold: {}px", config.header_threshold);
            println!("Parallax factor: {}", config.parallax_factor);
            println!("Snowflakes: {}", config.snowflake_count);
            println!(
                "Counters: {}ms, start at {}% visible",
                config.counter_duration_ms,
                config.counter_threshold * 100.0
            );
            println!("Images: {}", config.images.len());
            println!("Calendar events: {}", config.calendar.events.len());
            for (day, label) in &config.calendar.events {
                println!("  {:>2}: {}", day, label);
            }
        }
    }

    Ok(())
}
