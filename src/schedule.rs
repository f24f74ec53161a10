use std::fmt;
use chrono::Duration;
use serde::Serialize;

use crate::errors::ParseError;

// @module: Talk and translation shift data model

/// Serde helper serializing a `chrono::Duration` as whole minutes.
/// Pad clocks never carry seconds, so minutes are lossless here.
pub mod duration_minutes {
    use chrono::Duration;
    use serde::Serializer;

    pub fn serialize<S>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.num_minutes())
    }
}

/// Parse a `HH:MM` clock string into a span of that many hours and minutes.
///
/// Components are not range-checked: `99:99` is accepted as-is and yields a
/// nonsensical but well-defined span. Non-numeric components fail.
pub fn parse_clock(text: &str) -> Result<Duration, ParseError> {
    let (hours, minutes) = text
        .split_once(':')
        .ok_or_else(|| ParseError::InvalidClock(text.to_string()))?;
    let hours: i64 = hours
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidClock(text.to_string()))?;
    let minutes: i64 = minutes
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidClock(text.to_string()))?;
    Ok(Duration::minutes(hours * 60 + minutes))
}

/// Format a span as `H:MM` clock text for report output.
pub fn format_clock(duration: Duration) -> String {
    let total = duration.num_minutes();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!("{}{}:{:02}", sign, total / 60, total % 60)
}

/// Explicit `start-end` window covering only part of a talk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartialRange {
    /// Start of the window, as an offset from midnight
    #[serde(with = "duration_minutes")]
    pub start: Duration,

    /// End of the window, as an offset from midnight
    #[serde(with = "duration_minutes")]
    pub end: Duration,
}

impl PartialRange {
    /// Parse a raw `HH:MM-HH:MM` window token.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let (start, end) = token
            .split_once('-')
            .ok_or_else(|| ParseError::InvalidWindow(token.to_string()))?;
        let start = parse_clock(start).map_err(|_| ParseError::InvalidWindow(token.to_string()))?;
        let end = parse_clock(end).map_err(|_| ParseError::InvalidWindow(token.to_string()))?;
        Ok(PartialRange { start, end })
    }

    /// Length of the window. Negative when the end precedes the start;
    /// wrap-around past midnight is not interpreted.
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

impl fmt::Display for PartialRange {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", format_clock(self.start), format_clock(self.end))
    }
}

/// One translator's committed coverage of one talk into one language
#[derive(Debug, Clone, Serialize)]
pub struct TranslationShift {
    // @field: Translator handle exactly as written on the pad
    pub name: String,

    // @field: Destination language code
    pub language: String,

    // @field: Explicit window when the translator covers only part of the talk
    pub partial: Option<PartialRange>,

    // @field: Time credited for the shift - the window's length when one is
    // given, the full talk duration otherwise
    #[serde(with = "duration_minutes")]
    pub duration: Duration,
}

/// Shifts compare by who translates into what; the credited time and the
/// window are derived data and excluded. Talk identity is compared at the
/// `ShiftRecord` level, where the owning talk is joined back in.
impl PartialEq for TranslationShift {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.language == other.language
    }
}

/// A single scheduled talk with the translation shifts committed to it
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Talk {
    /// Spoken language of the talk itself
    pub language: String,

    /// Room or stage the talk runs in
    pub room: String,

    /// Scheduled length of the talk
    #[serde(with = "duration_minutes")]
    pub duration: Duration,

    /// Single-line talk title
    pub title: String,

    /// Speakers in the order the pad lists them
    pub speakers: Vec<String>,

    /// Link into the conference schedule, when the pad carries one
    pub fahrplan: Option<String>,

    /// Shifts in the order they were parsed
    pub translation_shifts: Vec<TranslationShift>,
}

impl Default for Talk {
    fn default() -> Self {
        Talk {
            language: String::new(),
            room: String::new(),
            duration: Duration::zero(),
            title: String::new(),
            speakers: Vec::new(),
            fahrplan: None,
            translation_shifts: Vec::new(),
        }
    }
}

impl Talk {
    /// Flat view of this talk's shifts, each joined back to the talk.
    pub fn shift_records(&self) -> impl Iterator<Item = ShiftRecord<'_>> {
        self.translation_shifts.iter().map(move |shift| ShiftRecord {
            name: &shift.name,
            language: &shift.language,
            duration: shift.duration,
            talk: Some(self),
        })
    }
}

impl fmt::Display for Talk {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} [{}] in {}, {}, {} shift(s)",
            self.title,
            self.language,
            self.room,
            format_clock(self.duration),
            self.translation_shifts.len()
        )
    }
}

/// Flat, serializable view of one shift joined with its owning talk,
/// ready for aggregation or JSON export
#[derive(Debug, Clone, Serialize)]
pub struct ShiftRecord<'a> {
    // @field: Translator handle, raw-cased
    pub name: &'a str,

    // @field: Destination language code
    pub language: &'a str,

    // @field: Credited time for this shift
    #[serde(with = "duration_minutes")]
    pub duration: Duration,

    // @field: The owning talk, absent for free-standing records
    pub talk: Option<&'a Talk>,
}

/// Records are equal iff name, language and the referenced talk are equal;
/// the credited time is derived and ignored.
impl PartialEq for ShiftRecord<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.language == other.language && self.talk == other.talk
    }
}

/// Flatten every shift of every talk into records, preserving talk order
/// and per-talk shift order.
pub fn flatten_shifts(talks: &[Talk]) -> Vec<ShiftRecord<'_>> {
    talks.iter().flat_map(Talk::shift_records).collect()
}
