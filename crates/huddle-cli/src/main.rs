//! `huddle` CLI - compute meeting suggestions and consolidate busy blocks.
//!
//! ## Usage
//!
//! ```sh
//! # Suggest free times (request JSON on stdin, response JSON on stdout)
//! echo '{"existingTimes":[...],"setEventInterval":{...}}' | huddle suggest
//!
//! # Read the request from a file, keep a 5-minute guard band, drop slots under 30 minutes
//! huddle suggest -i request.json --guard-band-secs 300 --min-duration-mins 30
//!
//! # Load settings from a TOML file
//! huddle suggest -i request.json --config huddle.toml
//!
//! # Merge busy blocks exported from an external calendar
//! huddle merge-busy -i busy.json -o merged.json
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for more detail.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use huddle_engine::SuggestionConfig;
use std::io::{self, IsTerminal, Read};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "huddle",
    version,
    about = "Meeting-time availability engine CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest times when every participant is free
    Suggest {
        /// Request JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// TOML file with guard_band_secs / min_duration_secs
        #[arg(long)]
        config: Option<String>,
        /// Seconds kept free on either side of each busy interval
        #[arg(long)]
        guard_band_secs: Option<i64>,
        /// Drop suggestions shorter than this many minutes
        #[arg(long)]
        min_duration_mins: Option<i64>,
        /// Pretty-print the response
        #[arg(long)]
        pretty: bool,
    },
    /// Merge overlapping or touching busy blocks into a disjoint list
    MergeBusy {
        /// JSON array of {start, end} objects (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Pretty-print the result
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command {
        Commands::Suggest {
            input,
            output,
            config,
            guard_band_secs,
            min_duration_mins,
            pretty,
        } => {
            let config = load_config(config.as_deref(), guard_band_secs, min_duration_mins)?;
            debug!(?config, "resolved suggestion config");

            let request = read_input(input.as_deref())?;
            let response = huddle_engine::wire::suggest_json(&request, &config)
                .context("Failed to compute suggestions")?;
            info!("suggestions computed");

            write_output(output.as_deref(), &render(&response, pretty)?)?;
        }
        Commands::MergeBusy {
            input,
            output,
            pretty,
        } => {
            let blocks = read_input(input.as_deref())?;
            let merged = huddle_engine::wire::merge_busy_json(&blocks)
                .context("Failed to merge busy blocks")?;
            info!("busy blocks merged");

            write_output(output.as_deref(), &render(&merged, pretty)?)?;
        }
    }

    Ok(())
}

/// Install a compact fmt subscriber on stderr so stdout carries only JSON.
fn init_logger(verbose: bool) {
    let default = if verbose {
        "huddle=debug,huddle_engine=debug"
    } else {
        "huddle=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_ansi(io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .init();
}

/// Build the suggestion config: defaults, then the TOML file, then flags.
fn load_config(
    path: Option<&str>,
    guard_band_secs: Option<i64>,
    min_duration_mins: Option<i64>,
) -> Result<SuggestionConfig> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path))?;
            toml::from_str(&text).with_context(|| format!("Invalid config file: {}", path))?
        }
        None => SuggestionConfig::default(),
    };

    if let Some(secs) = guard_band_secs {
        let guard_band = chrono::Duration::try_seconds(secs)
            .with_context(|| format!("--guard-band-secs out of range: {}", secs))?;
        config = config.with_guard_band(guard_band);
    }
    if let Some(mins) = min_duration_mins {
        let min_duration = chrono::Duration::try_minutes(mins)
            .with_context(|| format!("--min-duration-mins out of range: {}", mins))?;
        config = config.with_min_duration(min_duration);
    }

    config.validate()?;
    Ok(config)
}

fn render(json: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(json.to_string());
    }
    let value: serde_json::Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
