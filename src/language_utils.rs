use isolang::Language;

/// Language utilities for the loose language codes found on talk pads
///
/// Pad codes are 2-5 lowercase letters and may carry a `-`/`_` regional
/// suffix (`de-ch`, `pt_br`). Lookups go through the base code; unknown
/// codes are simply passed through, never rejected — the pad grammar is
/// the only authority on what counts as a language here.
/// Resolve a pad language code to its English name, e.g. `de` → `German`.
pub fn language_name(code: &str) -> Option<String> {
    let normalized = code.trim().to_lowercase();
    let base = normalized.split(['-', '_']).next().unwrap_or(&normalized);

    let language = match base.len() {
        2 => Language::from_639_1(base),
        3 => Language::from_639_3(base),
        _ => None,
    }?;

    Some(language.to_name().to_string())
}

/// Code with its resolved name for display, falling back to the bare code:
/// `de` → `de (German)`, `xx` → `xx`.
pub fn display_language(code: &str) -> String {
    match language_name(code) {
        Some(name) => format!("{} ({})", code, name),
        None => code.to_string(),
    }
}
