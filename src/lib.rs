/*!
 * # Padshift - Talk Pad Workload Summarizer
 *
 * A Rust library for parsing conference interpreters' talk pads and
 * summarizing translator workloads.
 *
 * ## Features
 *
 * - Parse Etherpad plain-text exports of translation assignment pads
 * - Tolerate pad noise: parenthetical notes, dash-introduced asides,
 *   trailing commas, stray blank lines
 * - Derive per-translator shift durations, including partial-shift windows
 * - Aggregate workloads: totals, median, long-workload counts, roster credit
 * - Export flat shift records as JSON
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `pad_parser`: Pad export parsing:
 *   - `pad_parser::lines`: Line classification
 *   - `pad_parser::cleanup`: Translator list cleanup
 *   - `pad_parser::block`: Per-block state machine
 * - `schedule`: Talk and shift data model
 * - `report`: Workload aggregation
 * - `file_utils`: File system operations
 * - `app_controller`: Main application controller
 * - `language_utils`: Language code display helpers
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod app_controller;
pub mod errors;
pub mod file_utils;
pub mod language_utils;
pub mod pad_parser;
pub mod report;
pub mod schedule;

// Re-export main types for easier usage
pub use app_config::Config;
pub use app_controller::Controller;
pub use errors::{AppError, ParseError};
pub use pad_parser::{parse_all, parse_str};
pub use report::{TranslatorWorkload, WorkloadReport};
pub use schedule::{flatten_shifts, PartialRange, ShiftRecord, Talk, TranslationShift};
