use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;

use fittrack::error::ErrorSeverity;
use fittrack::export::{self, ExportFormat};
use fittrack::logging::{init_logging, LogFormat, LogLevel};
use fittrack::{process_batch, AppConfig, SensorPackage, WorkoutSummary};

/// fittrack - Workout statistics from sensor packages
///
/// Decodes sensor packages for running, sports walking and swimming and
/// prints distance, mean speed and calories for each workout.
#[derive(Parser)]
#[command(name = "fittrack")]
#[command(version)]
#[command(about = "Workout statistics from sensor packages", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity of log output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT", global = true)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Process the configured batch of packages
    Run {
        /// Output format (text, json, csv, table)
        #[arg(short = 'f', long)]
        format: Option<ExportFormat>,

        /// Write output to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Process a single package given on the command line
    Calc {
        /// Workout code (RUN, WLK, SWM)
        workout_type: String,

        /// Sensor values in package order
        #[arg(required = true, allow_negative_numbers = true)]
        data: Vec<f64>,

        /// Output format (text, json, csv, table)
        #[arg(short = 'f', long, default_value = "text")]
        format: ExportFormat,
    },

    /// Show or initialize the configuration file
    Config {
        /// Print the effective configuration
        #[arg(short, long)]
        show: bool,

        /// Write a default configuration file
        #[arg(short, long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone();
    // `config --init` writes the file; nothing to load yet
    let creating_config = matches!(cli.command, Some(Commands::Config { init: true, .. }));
    let mut config = match &config_path {
        _ if creating_config => AppConfig::default(),
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default()?,
    };

    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
    }
    if let Some(log_format) = cli.log_format {
        config.logging.format = log_format;
    }
    init_logging(&config.logging)?;

    match cli.command {
        None => {
            let packages = config.effective_packages();
            run_batch(&packages, config.output.format, config.output.path.as_ref())
        }

        Some(Commands::Run { format, output }) => {
            let packages = config.effective_packages();
            let format = format.unwrap_or(config.output.format);
            let output = output.or_else(|| config.output.path.clone());
            run_batch(&packages, format, output.as_ref())
        }

        Some(Commands::Calc {
            workout_type,
            data,
            format,
        }) => {
            let packages = vec![SensorPackage::new(workout_type, data)];
            run_batch(&packages, format, None)
        }

        Some(Commands::Config { show, init }) => {
            if init {
                let path = config_path.unwrap_or_else(AppConfig::default_config_path);
                if path.exists() {
                    bail!("Config file already exists: {}", path.display());
                }
                config = AppConfig::with_default_packages();
                config.save_to_file(&path)?;
                eprintln!("{} {}", "✓ Config written to".green(), path.display());
            }
            if show || !init {
                print!("{}", config.to_toml()?);
            }
            Ok(())
        }
    }
}

fn run_batch(
    packages: &[SensorPackage],
    format: ExportFormat,
    output: Option<&PathBuf>,
) -> Result<()> {
    let mut summaries: Vec<WorkoutSummary> = Vec::with_capacity(packages.len());
    let mut failures = 0usize;

    for (package, result) in packages.iter().zip(process_batch(packages)) {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => {
                failures += 1;
                let message = match e.severity() {
                    ErrorSeverity::Warning => e.user_message().yellow(),
                    ErrorSeverity::Error | ErrorSeverity::Critical => e.user_message().red(),
                };
                eprintln!(
                    "{} {} {:?}: {}",
                    "✗".red().bold(),
                    package.workout_type,
                    package.data,
                    message
                );
            }
        }
    }

    match output {
        Some(path) => {
            export::write_to(path, &summaries, format)
                .with_context(|| format!("Failed to write summaries to {}", path.display()))?;
            eprintln!("{} {}", "✓ Summaries written to".green(), path.display());
        }
        None => print!("{}", export::render(&summaries, format)?),
    }

    if failures > 0 {
        bail!("{} of {} packages could not be processed", failures, packages.len());
    }
    Ok(())
}
