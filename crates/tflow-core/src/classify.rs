//! Line classification (code vs prose)

use std::sync::LazyLock;

use regex::Regex;

use crate::patterns::CODE_SIGNALS;

static SIGNALS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    CODE_SIGNALS
        .iter()
        .filter_map(|(name, pattern)| Regex::new(pattern).ok().map(|re| (*name, re)))
        .collect()
});

/// True if any code signal fires on the line. Blank lines are never code.
pub fn is_likely_code(line: &str) -> bool {
    code_signal(line).is_some()
}

/// Name of the first code signal that fires, if any
pub fn code_signal(line: &str) -> Option<&'static str> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    SIGNALS
        .iter()
        .find(|(_, re)| re.is_match(line))
        .map(|(name, _)| *name)
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Maximal runs of word characters
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|w| !w.is_empty())
}

pub fn count_words(text: &str) -> usize {
    words(text).count()
}

/// Lines and sentences of two to five words bypass compression
pub fn should_preserve(text: &str) -> bool {
    (2..=5).contains(&count_words(text.trim()))
}
