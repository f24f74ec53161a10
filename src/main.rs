// Module-specific lints configuration
#![allow(clippy::uninlined_format_args)]

use anyhow::{anyhow, Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use log::{warn, Level, LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::fs::File;
use std::io::BufReader;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use app_controller::Controller;

mod app_config;
mod app_controller;
mod errors;
mod file_utils;
mod language_utils;
mod pad_parser;
mod report;
mod schedule;

/// CLI Wrapper for LogLevel to implement ValueEnum
#[derive(Debug, Clone, ValueEnum)]
enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<CliLogLevel> for app_config::LogLevel {
    fn from(cli_level: CliLogLevel) -> Self {
        match cli_level {
            CliLogLevel::Error => app_config::LogLevel::Error,
            CliLogLevel::Warn => app_config::LogLevel::Warn,
            CliLogLevel::Info => app_config::LogLevel::Info,
            CliLogLevel::Debug => app_config::LogLevel::Debug,
            CliLogLevel::Trace => app_config::LogLevel::Trace,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Summarize translator workloads from pad exports (default command)
    Report(ReportArgs),

    /// Generate shell completions for padshift
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Parser, Debug)]
struct ReportArgs {
    /// Pad export file(s) or directories to parse. Choose Etherpad's plain text export.
    #[arg(value_name = "INPUT_PATHS", required = true)]
    input_paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print flat shift records as JSON instead of the workload report
    #[arg(short, long)]
    json: bool,

    /// Write the JSON export to this file instead of stdout
    #[arg(short, long, requires = "json")]
    output: Option<PathBuf>,

    /// Override the long-workload threshold in hours
    #[arg(short = 't', long)]
    long_shift_hours: Option<i64>,
}

/// Padshift - Talk Pad Workload Summarizer
///
/// Parses conference interpreters' talk pads (Etherpad plain-text exports)
/// and summarizes who committed to translate what, and for how long.
#[derive(Parser, Debug)]
#[command(name = "padshift")]
#[command(author = "Padshift Team")]
#[command(version = "0.1.0")]
#[command(about = "Summarize translator workloads from talk pad exports")]
#[command(long_about = "Padshift parses talk pads (Etherpad plain-text exports) and summarizes
translator workloads per person and language.

EXAMPLES:
    padshift congress.txt                     # Report from one pad export
    padshift day1.txt day2.txt                # Several exports, in order
    padshift exports/                         # All .txt exports in a directory
    padshift -j -o shifts.json congress.txt   # Dump flat shift records as JSON
    padshift -t 8 congress.txt                # Count workloads above 8 hours
    padshift --log-level debug congress.txt   # Verbose parsing logs
    padshift completions bash > padshift.bash # Generate bash completions

CONFIGURATION:
    Configuration is stored in conf.json by default. You can specify a different
    config file with --config. If the config file doesn't exist, a default one
    will be created automatically. The roster of already-credited translators
    lives there under report.roster.")]
struct CommandLineOptions {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Pad export file(s) or directories to parse. Choose Etherpad's plain text export.
    #[arg(value_name = "INPUT_PATHS")]
    input_paths: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short, long, default_value = "conf.json")]
    config_path: String,

    /// Set logging level
    #[arg(short, long, value_enum)]
    log_level: Option<CliLogLevel>,

    /// Print flat shift records as JSON instead of the workload report
    #[arg(short, long)]
    json: bool,

    /// Write the JSON export to this file instead of stdout
    #[arg(short, long, requires = "json")]
    output: Option<PathBuf>,

    /// Override the long-workload threshold in hours
    #[arg(short = 't', long)]
    long_shift_hours: Option<i64>,
}

// @struct: Custom logger implementation
struct CustomLogger {
    level: LevelFilter,
}

impl CustomLogger {
    // @creates: New logger with specified level
    fn new(level: LevelFilter) -> Self {
        CustomLogger { level }
    }

    // @initializes: Global logger
    fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
        let logger = Box::new(CustomLogger::new(level));
        log::set_boxed_logger(logger)?;
        log::set_max_level(level);
        Ok(())
    }

    // @returns: ANSI color for log level
    fn color_for_level(level: Level) -> &'static str {
        match level {
            Level::Error => "\x1B[1;31m",
            Level::Warn => "\x1B[1;33m",
            Level::Info => "\x1B[1;32m",
            Level::Debug => "\x1B[1;36m",
            Level::Trace => "\x1B[1;35m",
        }
    }
}

impl Log for CustomLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let now = chrono::Local::now().format("%H:%M:%S.%3f");
            let color = Self::color_for_level(record.level());

            let mut stderr = std::io::stderr();
            let _ = writeln!(
                stderr,
                "{}{} {:5} {}\x1B[0m",
                color,
                now,
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

fn main() -> Result<()> {
    // Initialize the logger once with info level by default
    // We'll update the level after loading the config if needed
    CustomLogger::init(LevelFilter::Info)?;

    // Parse command line arguments using clap
    let cli = CommandLineOptions::parse();

    // Handle subcommands
    match cli.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = CommandLineOptions::command();
            generate(shell, &mut cmd, "padshift", &mut std::io::stdout());
            Ok(())
        }
        Some(Commands::Report(args)) => run_report(args),
        None => {
            // Default behavior - use top-level args for backwards compatibility
            if cli.input_paths.is_empty() {
                return Err(anyhow!(
                    "INPUT_PATHS is required when no subcommand is specified"
                ));
            }

            let report_args = ReportArgs {
                input_paths: cli.input_paths,
                config_path: cli.config_path,
                log_level: cli.log_level,
                json: cli.json,
                output: cli.output,
                long_shift_hours: cli.long_shift_hours,
            };
            run_report(report_args)
        }
    }
}

fn run_report(options: ReportArgs) -> Result<()> {
    // If log level is set via command line, apply it immediately
    if let Some(cmd_log_level) = &options.log_level {
        let config_log_level: app_config::LogLevel = cmd_log_level.clone().into();
        log::set_max_level(config_log_level.to_level_filter());
    }

    // Load or create configuration
    let config_path = &options.config_path;
    let mut config = if Path::new(config_path).exists() {
        // Load existing configuration
        let file = File::open(config_path)
            .context(format!("Failed to open config file: {}", config_path))?;

        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .context(format!("Failed to parse config file: {}", config_path))?;

        config
    } else {
        // Create default configuration if not exists
        warn!(
            "Config file not found at '{}', creating default config.",
            config_path
        );

        let config = Config::default();

        // Save default config
        let config_json = serde_json::to_string_pretty(&config)
            .context("Failed to serialize default config to JSON")?;

        std::fs::write(config_path, config_json)
            .context(format!("Failed to write default config to file: {}", config_path))?;

        config
    };

    // Override config with CLI options if provided
    if let Some(hours) = options.long_shift_hours {
        config.report.long_shift_hours = hours;
    }

    if let Some(log_level) = &options.log_level {
        config.log_level = log_level.clone().into();
    }

    // Validate the configuration after loading and overriding
    config
        .validate()
        .context("Configuration validation failed")?;

    // If log level was not set via command line, update it from config now
    if options.log_level.is_none() {
        // Just update the max level without reinitializing the logger
        log::set_max_level(config.log_level.to_level_filter());
    }

    // Create controller and run the workflow
    let controller = Controller::with_config(config)?;
    controller.run(&options.input_paths, options.json, options.output.as_deref())
}
