use anyhow::{anyhow, Context, Result};
use chrono::Duration;
use log::{debug, info, warn};
use std::path::{Path, PathBuf};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::pad_parser;
use crate::report::WorkloadReport;
use crate::schedule::{flatten_shifts, format_clock, Talk};

// @module: Application controller for workload reporting

/// Main application controller: collects pad exports, parses them and
/// renders the workload report or the JSON export.
pub struct Controller {
    // @field: App configuration
    config: Config,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        Ok(Self { config })
    }

    /// Expand one input path into the pad export files it denotes: a file
    /// stands for itself, a directory for the `.txt` exports inside it,
    /// in sorted order.
    fn collect_input_files(path: &Path) -> Result<Vec<PathBuf>> {
        if FileManager::file_exists(path) {
            return Ok(vec![path.to_path_buf()]);
        }

        if FileManager::dir_exists(path) {
            let mut files = FileManager::find_files(path, "txt")?;
            files.sort();
            if files.is_empty() {
                warn!("No .txt pad exports found in directory: {:?}", path);
            }
            return Ok(files);
        }

        Err(anyhow!("Input path does not exist: {:?}", path))
    }

    /// Read and parse every input, concatenating talks in argument order.
    pub fn parse_inputs(&self, inputs: &[PathBuf]) -> Result<Vec<Talk>> {
        let mut talks = Vec::new();

        for input in inputs {
            for file in Self::collect_input_files(input)? {
                debug!("Parsing pad export: {:?}", file);
                let content = FileManager::read_to_string(&file)?;
                let parsed = pad_parser::parse_str(&content)
                    .with_context(|| format!("Failed to parse pad export: {:?}", file))?;
                info!("Parsed {} talk(s) from {:?}", parsed.len(), file);
                talks.extend(parsed);
            }
        }

        Ok(talks)
    }

    /// Run the main workflow: parse the inputs, then report or export.
    pub fn run(&self, inputs: &[PathBuf], json: bool, output: Option<&Path>) -> Result<()> {
        let talks = self.parse_inputs(inputs)?;
        let shift_count: usize = talks.iter().map(|talk| talk.translation_shifts.len()).sum();
        info!("Found {} talk(s) carrying {} shift(s)", talks.len(), shift_count);

        if json {
            self.export_json(&talks, output)
        } else {
            self.print_report(&talks)
        }
    }

    /// Dump the flat shift records as JSON, to stdout or a file.
    fn export_json(&self, talks: &[Talk], output: Option<&Path>) -> Result<()> {
        let records = flatten_shifts(talks);
        let json = serde_json::to_string_pretty(&records)
            .context("Failed to serialize shift records")?;

        match output {
            Some(path) => {
                FileManager::write_to_file(path, &json)?;
                info!("Wrote {} shift record(s) to {:?}", records.len(), path);
            }
            None => println!("{}", json),
        }

        Ok(())
    }

    /// Render the workload report to stdout.
    fn print_report(&self, talks: &[Talk]) -> Result<()> {
        let report = WorkloadReport::from_talks(talks);
        print!("{}", report);
        println!();

        match report.median_total() {
            Some(median) => println!("Median: {}", format_clock(median)),
            None => println!("Median: n/a"),
        }

        let hours = self.config.report.long_shift_hours;
        println!(
            "Translators with more than {} hours: {}",
            hours,
            report.over_threshold(Duration::hours(hours))
        );
        println!("All translators: {}", report.translator_count());

        if !self.config.report.roster.is_empty() {
            let credits = report.off_roster_credit(&self.config.report.roster);
            if !credits.is_empty() {
                println!();
                println!("Manual credit for translators off the roster (1.5x, next quarter hour):");
                for (name, credited) in credits {
                    println!("  {:<24} {:>7}", name, format_clock(credited));
                }
            }
        }

        Ok(())
    }
}
