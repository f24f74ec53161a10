use once_cell::sync::Lazy;
use regex::Regex;

// @module: Pad line classification

/// Arrow glyph opening a translator-assignment line.
pub const ARROW: char = '→';

// @const: Language/time/room header regex, e.g. "[de] 11:00 +00:30, Adams"
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[(?P<language>[a-z_-]{2,5})\] (?P<time>\d\d:\d\d) \+(?P<duration>\d\d:\d\d), (?P<room>.*)$")
        .unwrap()
});

// @const: Schedule reference regex, e.g. "Fahrplan: https://..."
static REFERENCE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Fahrplan: (?P<url>http.*)$").unwrap());

// @const: Assignment regex, e.g. "→ en: waffle, simplysaym" with an
// optional "[11:00-11:30]" window before the names
static ASSIGNMENT_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^→\s*(?P<language>[a-z_-]{2,5})\s*:?\s*(\[(?P<partial>.*-.*)\])?\s*(?P<translators>.*)$")
        .unwrap()
});

/// One classified pad line.
///
/// Classification only runs while the block parser sits in its base state;
/// a pending title or speakers line swallows any content before it gets here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `[<lang>] <HH:MM> +<HH:MM>, <room>` — opens a talk's metadata.
    /// The start time is captured by the pattern but carries no meaning
    /// beyond marking the header as seen.
    Header {
        language: &'a str,
        duration: &'a str,
        room: &'a str,
    },

    /// `Fahrplan: <url>` schedule reference.
    Reference { url: &'a str },

    /// `→ <lang>: <names>` with an optional `[start-end]` window token.
    Assignment {
        language: &'a str,
        partial: Option<&'a str>,
        translators: &'a str,
    },

    /// A line holding nothing but the arrow glyph.
    BareArrow,

    /// Arrow-prefixed line fitting no assignment shape; structurally invalid.
    Broken,

    /// Anything else. Ignored in the base state, consumed verbatim as the
    /// title or the speakers list when one of those is pending.
    Plain,
}

/// Classify one line against the recognized shapes, in fixed priority order.
pub fn classify(line: &str) -> LineKind<'_> {
    if let Some(caps) = HEADER_REGEX.captures(line) {
        return LineKind::Header {
            language: caps.name("language").unwrap().as_str(),
            duration: caps.name("duration").unwrap().as_str(),
            room: caps.name("room").unwrap().as_str(),
        };
    }

    if let Some(caps) = REFERENCE_REGEX.captures(line) {
        return LineKind::Reference {
            url: caps.name("url").unwrap().as_str(),
        };
    }

    if let Some(caps) = ASSIGNMENT_REGEX.captures(line) {
        return LineKind::Assignment {
            language: caps.name("language").unwrap().as_str(),
            partial: caps.name("partial").map(|m| m.as_str()),
            translators: caps.name("translators").unwrap().as_str(),
        };
    }

    // A lone arrow is a placeholder volunteers leave for later; ignore it
    if line.trim() == "→" {
        return LineKind::BareArrow;
    }

    // Anything else opening with the arrow is a syntax error on the pad
    if line.starts_with(ARROW) {
        return LineKind::Broken;
    }

    LineKind::Plain
}
