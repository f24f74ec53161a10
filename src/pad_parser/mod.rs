/*!
 * Parsing of talks pad exports.
 *
 * A pad export is plain UTF-8 text holding one block per talk, blocks
 * separated by blank lines. A block opens with a `#` marker line, then a
 * `[lang] HH:MM +HH:MM, room` header, the title line, the speaker list,
 * optionally a `Fahrplan:` reference, and `→` assignment lines naming the
 * translators per destination language:
 *
 * ```text
 * #1
 * [de] 11:00 +00:30, Adams
 * Opening Event
 * rufus, rixx
 * Fahrplan: https://fahrplan.events.ccc.de/congress/2018/Fahrplan/events/9985.html
 * → en: waffle, simplysaym, sirenensang
 * → fr: [11:00-11:15] informancer
 * ```
 *
 * Blocks not opening with the marker are dropped silently; a malformed
 * arrow line fails the whole file's parse.
 */

mod block;
mod cleanup;
mod lines;

pub use cleanup::clean_translator_names;
pub use lines::{classify, LineKind, ARROW};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ParseError;
use crate::schedule::Talk;

/// Marker distinguishing talk blocks from incidental pad content.
pub const TALK_MARKER: char = '#';

// @const: Blocks are separated by runs of two or more line breaks
static BLOCK_SPLIT_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Parse a whole pad export into talks, in pad order.
///
/// Chunks not opening with the talk marker produce no talk and no error.
/// The first structural error aborts the parse; no partial results are
/// returned for a failing export.
pub fn parse_str(content: &str) -> Result<Vec<Talk>, ParseError> {
    BLOCK_SPLIT_REGEX
        .split(content.trim())
        .filter_map(|chunk| {
            let chunk = chunk.trim();
            chunk
                .starts_with(TALK_MARKER)
                .then(|| block::parse_block(chunk))
        })
        .collect()
}

/// Parse several already-read pad exports, concatenating their talks in
/// input order. Reading the files is the caller's concern.
pub fn parse_all<'a, I>(contents: I) -> Result<Vec<Talk>, ParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut talks = Vec::new();
    for content in contents {
        talks.extend(parse_str(content)?);
    }
    Ok(talks)
}
