use chrono::Duration;
use log::debug;

use super::cleanup::clean_translator_names;
use super::lines::{classify, LineKind};
use crate::errors::ParseError;
use crate::schedule::{parse_clock, PartialRange, Talk, TranslationShift};

// @module: Single-block state machine

/// Sub-state for the two positional lines that follow a talk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    /// Base state: classify the line and dispatch on its kind
    Nothing,
    /// Header just seen; the next line is the title, whatever it holds
    Title,
    /// Title just seen; the next line is the comma-separated speaker list
    Speakers,
}

/// A shift queued from an assignment line. Its credited time is only
/// derived once the whole block has parsed and the talk duration is final.
#[derive(Debug)]
struct PendingShift {
    name: String,
    language: String,
    partial: Option<PartialRange>,
}

/// Accumulates one talk while its block is consumed.
///
/// Lines that never matched leave their field at the zero value; the
/// grammar does not retroactively validate completeness.
#[derive(Debug, Default)]
struct TalkBuilder {
    language: Option<String>,
    room: Option<String>,
    duration: Option<Duration>,
    title: Option<String>,
    speakers: Vec<String>,
    fahrplan: Option<String>,
    shifts: Vec<PendingShift>,
}

impl TalkBuilder {
    fn finish(self) -> Talk {
        let duration = self.duration.unwrap_or_else(Duration::zero);
        let translation_shifts = self
            .shifts
            .into_iter()
            .map(|shift| {
                let credited = shift.partial.as_ref().map_or(duration, PartialRange::duration);
                TranslationShift {
                    name: shift.name,
                    language: shift.language,
                    partial: shift.partial,
                    duration: credited,
                }
            })
            .collect();

        Talk {
            language: self.language.unwrap_or_default(),
            room: self.room.unwrap_or_default(),
            duration,
            title: self.title.unwrap_or_default(),
            speakers: self.speakers,
            fahrplan: self.fahrplan,
            translation_shifts,
        }
    }
}

/// Parse one talk block into a `Talk`.
///
/// The caller has already checked the `#` marker on the first line; that
/// line matches no shape and falls through as plain text. The first
/// arrow-prefixed line matching no grammar aborts the block.
pub(crate) fn parse_block(block: &str) -> Result<Talk, ParseError> {
    let mut state = Expect::Nothing;
    let mut builder = TalkBuilder::default();

    for line in block.lines() {
        match state {
            Expect::Title => {
                builder.title = Some(line.to_string());
                state = Expect::Speakers;
                continue;
            }
            Expect::Speakers => {
                builder.speakers = line.split(", ").map(str::to_string).collect();
                state = Expect::Nothing;
                continue;
            }
            Expect::Nothing => {}
        }

        match classify(line) {
            LineKind::Header {
                language,
                duration,
                room,
            } => {
                builder.language = Some(language.to_string());
                builder.room = Some(room.to_string());
                builder.duration = Some(parse_clock(duration)?);
                state = Expect::Title;
            }
            LineKind::Reference { url } => {
                builder.fahrplan = Some(url.to_string());
            }
            LineKind::Assignment {
                language,
                partial,
                translators,
            } => {
                let window = partial.map(PartialRange::parse).transpose()?;
                for name in clean_translator_names(translators) {
                    builder.shifts.push(PendingShift {
                        name,
                        language: language.to_string(),
                        partial: window,
                    });
                }
            }
            LineKind::BareArrow | LineKind::Plain => {}
            LineKind::Broken => {
                return Err(ParseError::MalformedLine(line.to_string()));
            }
        }
    }

    let talk = builder.finish();
    debug!("Parsed block: {}", talk);
    Ok(talk)
}
