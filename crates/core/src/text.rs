use once_cell::sync::Lazy;
use regex::Regex;

static REPEATED_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());
static ANY_SPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapses runs of two or more whitespace characters into one space.
pub fn collapse_spaces(text: &str) -> String {
    REPEATED_SPACE_RE.replace_all(text, " ").into_owned()
}

/// Lookup key for brand names: trimmed, lowercased, `-` and `&` turned into
/// spaces, whitespace collapsed.
pub fn normalize_key(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase().replace(['-', '&'], " ");
    ANY_SPACE_RE.replace_all(&lowered, " ").trim().to_string()
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Trims `text` and cuts it to at most `limit` characters without breaking a
/// word. A single word longer than `limit` is hard-cut.
pub fn cut_at_word_boundary(text: &str, limit: usize) -> String {
    let text = text.trim();
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut = text
        .char_indices()
        .nth(limit)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let (head, rest) = text.split_at(cut);
    if rest.starts_with(char::is_whitespace) {
        return head.trim().to_string();
    }
    match head.rsplit_once(' ') {
        Some((kept, _)) => kept.trim().to_string(),
        None => head.trim().to_string(),
    }
}
