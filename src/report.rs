use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::Duration;
use serde::Serialize;

use crate::language_utils;
use crate::schedule::{duration_minutes, format_clock, Talk};

// @module: Workload aggregation over parsed shifts

/// Total committed time for one translator, collected case-insensitively
/// across spellings of the handle
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TranslatorWorkload {
    // @field: Lower-cased translator handle used as the grouping key
    pub name: String,

    // @field: Sum of all credited shift durations
    #[serde(with = "duration_minutes")]
    pub total: Duration,

    // @field: Number of shifts behind the total
    pub shifts: usize,
}

/// Aggregated view over every shift in a set of talks
#[derive(Debug, Clone, Serialize)]
pub struct WorkloadReport {
    /// Per-translator totals, busiest first
    pub workloads: Vec<TranslatorWorkload>,

    /// Shift counts per destination language, alphabetical
    pub shifts_by_language: Vec<(String, usize)>,
}

impl WorkloadReport {
    /// Aggregate all shifts of the given talks.
    pub fn from_talks(talks: &[Talk]) -> Self {
        let mut totals: HashMap<String, TranslatorWorkload> = HashMap::new();
        let mut by_language: HashMap<String, usize> = HashMap::new();

        for talk in talks {
            for shift in &talk.translation_shifts {
                let key = shift.name.to_lowercase();
                let entry = totals.entry(key.clone()).or_insert(TranslatorWorkload {
                    name: key,
                    total: Duration::zero(),
                    shifts: 0,
                });
                entry.total = entry.total + shift.duration;
                entry.shifts += 1;

                *by_language.entry(shift.language.clone()).or_insert(0) += 1;
            }
        }

        let mut workloads: Vec<TranslatorWorkload> = totals.into_values().collect();
        // Busiest first; ties resolved by name so the order is stable
        workloads.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.name.cmp(&b.name)));

        let mut shifts_by_language: Vec<(String, usize)> = by_language.into_iter().collect();
        shifts_by_language.sort();

        WorkloadReport {
            workloads,
            shifts_by_language,
        }
    }

    /// Median of the per-translator totals; the mean of the middle pair
    /// when the count is even. `None` without any workload.
    pub fn median_total(&self) -> Option<Duration> {
        if self.workloads.is_empty() {
            return None;
        }

        let n = self.workloads.len();
        let mid = n / 2;
        if n % 2 == 1 {
            Some(self.workloads[mid].total)
        } else {
            Some((self.workloads[mid - 1].total + self.workloads[mid].total) / 2)
        }
    }

    /// Number of translators whose total is strictly above the threshold.
    pub fn over_threshold(&self, threshold: Duration) -> usize {
        self.workloads
            .iter()
            .filter(|workload| workload.total > threshold)
            .count()
    }

    /// Number of distinct translators seen.
    pub fn translator_count(&self) -> usize {
        self.workloads.len()
    }

    /// Manual time credit for translators missing from the roster:
    /// 1.5 times their total, rounded up to the next quarter hour.
    /// Roster membership is case-insensitive; order follows the report.
    pub fn off_roster_credit(&self, roster: &[String]) -> Vec<(String, Duration)> {
        let roster: HashSet<String> = roster.iter().map(|name| name.to_lowercase()).collect();

        self.workloads
            .iter()
            .filter(|workload| !roster.contains(&workload.name))
            .map(|workload| {
                let credited = quarter_hour_ceil(workload.total * 3 / 2);
                (workload.name.clone(), credited)
            })
            .collect()
    }
}

/// Round a span up to the next full quarter hour (toward positive infinity).
fn quarter_hour_ceil(duration: Duration) -> Duration {
    let minutes = duration.num_minutes();
    Duration::minutes(15 * (minutes + 14).div_euclid(15))
}

impl fmt::Display for WorkloadReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for workload in &self.workloads {
            writeln!(
                f,
                "{:<24} {:>7}  ({} shift{})",
                workload.name,
                format_clock(workload.total),
                workload.shifts,
                if workload.shifts == 1 { "" } else { "s" }
            )?;
        }

        if !self.shifts_by_language.is_empty() {
            writeln!(f)?;
            writeln!(f, "Shifts by language:")?;
            for (language, count) in &self.shifts_by_language {
                writeln!(
                    f,
                    "  {:<20} {}",
                    language_utils::display_language(language),
                    count
                )?;
            }
        }

        Ok(())
    }
}
