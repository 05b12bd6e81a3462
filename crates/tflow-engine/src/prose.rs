//! Prose compression for lines that are not code
//!
//! Passes, in order:
//! 1. Redundant phrase collapse
//! 2. Sentence split, with 2-5 word sentences kept verbatim
//! 3. Word filtering (fillers, pronouns, articles, weak verbs)
//! 4. Action verb fronting
//! 5. Duplicate word collapse
//! 6. Punctuation and capitalization cleanup

use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use tflow_core::patterns::{
    REDUNDANT_PHRASES, is_action_verb, is_elidable, is_filler, is_personal_pronoun,
    is_preposition, strong_verb,
};
use tflow_core::{is_word_char, should_preserve};

const MIN_RESULT_CHARS: usize = 3;
const MIN_RESULT_WORDS: usize = 2;
const MIN_SENTENCE_CHARS: usize = 3;

static PHRASES: LazyLock<Vec<(Regex, &'static str)>> = LazyLock::new(|| {
    REDUNDANT_PHRASES
        .iter()
        .filter_map(|(verbose, concise)| {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(verbose));
            Regex::new(&pattern).ok().map(|re| (re, *concise))
        })
        .collect()
});

enum Sentence {
    Preserved(String),
    Compressed(String),
}

/// Compress one prose line. Falls back to the trimmed input when the result would be
/// shorter than three characters or two words.
pub fn compress_prose(line: &str) -> String {
    let trimmed = line.trim();
    let text = remove_redundant_phrases(trimmed);

    let mut sentences = Vec::new();
    for segment in text.split(['.', '!', '?']) {
        let sentence = segment.trim();
        if sentence.is_empty() {
            continue;
        }

        if should_preserve(sentence) {
            sentences.push(Sentence::Preserved(sentence.to_string()));
            continue;
        }

        let tokens = filter_words(sentence);
        if !tokens.is_empty() {
            sentences.push(Sentence::Compressed(front_action_verb(tokens)));
        }
    }

    let result = cleanup(&collapse_redundancy(sentences).join(". "));

    if result.chars().count() < MIN_RESULT_CHARS || result.split(' ').count() < MIN_RESULT_WORDS {
        trimmed.to_string()
    } else {
        result
    }
}

/// Replace verbose phrases with their concise form, then normalize whitespace
pub fn remove_redundant_phrases(text: &str) -> String {
    let mut result = text.to_string();
    for (re, concise) in PHRASES.iter() {
        result = re.replace_all(&result, NoExpand(*concise)).into_owned();
    }
    collapse_whitespace(&result)
}

/// Drop fillers, pronouns and articles; swap weak verbs. Kept words keep their casing.
fn filter_words(sentence: &str) -> Vec<String> {
    let words: Vec<&str> = prose_words(sentence).collect();
    let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
    let mut tokens = Vec::new();

    for (i, (word, lower)) in words.iter().zip(&lowered).enumerate() {
        let next = lowered.get(i + 1).map(String::as_str);
        let next_is_action = next.is_some_and(is_action_verb);

        if is_filler(lower) || is_personal_pronoun(lower) {
            // subject of an action verb survives
            if is_personal_pronoun(lower) && next_is_action {
                tokens.push(word.to_string());
            }
            continue;
        }

        if is_elidable(lower) {
            if next_is_action {
                continue;
            }
            if is_preposition(lower) && next.is_some() {
                tokens.push(word.to_string());
            }
            continue;
        }

        match strong_verb(lower) {
            Some(strong) => tokens.push(strong.to_string()),
            None => tokens.push(word.to_string()),
        }
    }

    tokens
}

/// Words with inner apostrophes (`don't`), outer apostrophes stripped
fn prose_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c) && c != '\'')
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
}

/// Move the first action verb to the front, keeping the order of the rest
fn front_action_verb(mut tokens: Vec<String>) -> String {
    let position = tokens
        .iter()
        .position(|token| is_action_verb(&token.to_lowercase()));

    if let Some(index) = position.filter(|&index| index > 0) {
        let verb = tokens.remove(index);
        tokens.insert(0, verb);
    }

    tokens.join(" ")
}

/// Drop tiny sentences and immediately repeated words (action verbs may repeat)
fn collapse_redundancy(sentences: Vec<Sentence>) -> Vec<String> {
    sentences
        .into_iter()
        .filter_map(|sentence| match sentence {
            Sentence::Preserved(text) => Some(text),
            Sentence::Compressed(text) if text.chars().count() < MIN_SENTENCE_CHARS => None,
            Sentence::Compressed(text) => {
                let mut unique: Vec<&str> = Vec::new();
                let mut prev = None;

                for word in text.split(' ') {
                    if prev != Some(word) || is_action_verb(&word.to_lowercase()) {
                        unique.push(word);
                    }
                    prev = Some(word);
                }

                let collapsed = unique.join(" ");
                (!collapsed.is_empty()).then_some(collapsed)
            }
        })
        .collect()
}

/// Collapse whitespace, tighten punctuation, capitalize `i` and sentence starts
fn cleanup(text: &str) -> String {
    let mut result = collapse_whitespace(text);
    for punct in ['.', ',', '!', '?', ';', ':'] {
        result = result.replace(&format!(" {punct}"), &punct.to_string());
    }

    let chars: Vec<char> = result.chars().collect();
    let mut out = String::with_capacity(result.len());

    for (i, &c) in chars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(i + 1).copied();

        let standalone_i = c == 'i'
            && !prev.is_some_and(is_word_char)
            && !next.is_some_and(is_word_char);
        let sentence_start = c.is_ascii_lowercase()
            && (i == 0 || (i >= 2 && chars[i - 1] == ' ' && chars[i - 2] == '.'));

        if standalone_i || sentence_start {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
