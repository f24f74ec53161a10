use once_cell::sync::Lazy;
use regex::Regex;

// @module: Translator list cleanup

// @const: Parenthetical asides and dash-introduced trailing notes inside a
// raw translator list, e.g. "tr1 (maybe), tr2 – will confirm"
static NOISE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*\(.*?\)\s*|\s[-–].*").unwrap());

/// Strip annotations from the raw comma-separated remainder of an
/// assignment line and split it into clean translator names.
///
/// Parenthetical groups go first, then any ` -`/` –` tail. Doubled or
/// trailing commas yield no empty names; duplicates are kept as written.
/// Applying this twice changes nothing.
pub fn clean_translator_names(raw: &str) -> Vec<String> {
    let stripped = NOISE_REGEX.replace_all(raw, "");
    stripped
        .trim()
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}
