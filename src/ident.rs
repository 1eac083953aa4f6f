use once_cell::sync::Lazy;
use regex::Regex;

static NON_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9\s]").unwrap());

/// Derive a record identifier from a source name: drop every character
/// outside `[a-zA-Z0-9\s]`, lowercase, then turn each whitespace character
/// into a hyphen. The replacement is per character, so consecutive spaces
/// come out as consecutive hyphens.
pub fn derive_id(name: &str) -> String {
    let cleaned = NON_ALNUM.replace_all(name, "");
    cleaned
        .to_lowercase()
        .chars()
        .map(|c| if c.is_whitespace() { '-' } else { c })
        .collect()
}
