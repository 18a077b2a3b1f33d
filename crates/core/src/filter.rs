//! Content filters for marketplace moderation: safe mode swaps risk words
//! for softer phrasing, strict mode strips absolute claims.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::pools::{SAFE_REPLACE, STRICT_DROP};
use crate::text::collapse_spaces;

static SAFE_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    SAFE_REPLACE
        .iter()
        .map(|(word, replacement)| (whole_word(word), *replacement))
        .collect()
});

static STRICT_RULES: Lazy<Vec<Regex>> =
    Lazy::new(|| STRICT_DROP.iter().map(|word| whole_word(word)).collect());

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

// A boundary is only meaningful next to a word character; `100%` must still
// match when followed by a space.
fn whole_word(term: &str) -> Regex {
    let mut pattern = String::from("(?i)");
    if term.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(term));
    if term.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    Regex::new(&pattern).unwrap()
}

/// Replaces risk words with their safer counterparts.
pub fn apply_safe(text: &str) -> String {
    SAFE_RULES
        .iter()
        .fold(text.to_string(), |acc, (re, replacement)| {
            re.replace_all(&acc, regex::NoExpand(*replacement))
                .into_owned()
        })
}

/// Removes absolute and promissory claims, then tidies whitespace.
pub fn apply_strict(text: &str) -> String {
    let stripped = STRICT_RULES
        .iter()
        .fold(text.to_string(), |acc, re| re.replace_all(&acc, "").into_owned());
    collapse_spaces(&stripped).trim().to_string()
}

/// Which filters a run applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSet {
    pub safe: bool,
    pub strict: bool,
}

impl FilterSet {
    pub fn new(safe: bool, strict: bool) -> Self {
        Self { safe, strict }
    }

    /// Safe replacement first, then strict removal.
    pub fn apply(&self, text: &str) -> String {
        let mut out = text.to_string();
        if self.safe {
            out = apply_safe(&out);
        }
        if self.strict {
            out = apply_strict(&out);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn safe_replaces_standalone_word() {
        let out = apply_safe("Это реплика известной модели.");
        assert_eq!(out, "Это стиль в духе бренда известной модели.");
    }

    #[test]
    fn safe_is_case_insensitive() {
        let out = apply_safe("РЕПЛИКА и Копия, а также ЛЮКС");
        assert!(out.contains("стиль в духе бренда"));
        assert!(out.contains("вдохновлённый дизайн"));
        assert!(out.contains("премиальный стиль"));
        assert!(!out.to_lowercase().contains("реплика"));
    }

    #[test]
    fn safe_leaves_inflected_forms_alone() {
        let text = "Сравнение с репликами и копиями.";
        assert_eq!(apply_safe(text), text);
    }

    #[test]
    fn strict_removes_word_without_double_spaces() {
        let out = apply_strict("Стильные лучшие очки");
        assert_eq!(out, "Стильные очки");
        assert!(!out.contains("  "));
    }

    // `100%` is removed before a space or at the end: it ends in a non-word
    // character, so no trailing `\b` is emitted.
    #[test]
    fn strict_drops_percent_claim() {
        let out = apply_strict("Защита 100% от солнца, гарантия качества");
        assert_eq!(out, "Защита от солнца, качества");
    }

    #[test]
    fn strict_keeps_longer_words() {
        let out = apply_strict("Лечебные свойства не заявлены");
        assert_eq!(out, "Лечебные свойства не заявлены");
    }

    #[test]
    fn strict_trims_edges() {
        assert_eq!(apply_strict("Всегда в тренде"), "в тренде");
        assert_eq!(apply_strict("в тренде всегда"), "в тренде");
    }

    #[test]
    fn filter_set_runs_safe_before_strict() {
        let filters = FilterSet::new(true, true);
        let out = filters.apply("Лучшие реплика очки");
        assert_eq!(out, "стиль в духе бренда очки");
    }

    #[test]
    fn disabled_filters_pass_text_through() {
        let filters = FilterSet::default();
        let text = "лучшие  реплика";
        assert_eq!(filters.apply(text), text);
    }
}
