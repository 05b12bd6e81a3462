//! Deterministic token counting methods

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use tflow_core::{Result, TokenAnalysis, TokenizationMethod, words};

const APPROX_CHUNK: usize = 4;
const SUBWORD_WHOLE_MAX: usize = 4;
const SUBWORD_WINDOW: usize = 3;

static SCRIPT_LIKE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [r"(?i)javascript:", r"(?i)on\w+\s*="]
        .iter()
        .filter_map(|pattern| Regex::new(pattern).ok())
        .collect()
});

/// Strip angle brackets and script-like substrings
pub fn sanitize(text: &str) -> String {
    let mut cleaned: String = text.chars().filter(|c| !matches!(c, '<' | '>')).collect();
    for re in SCRIPT_LIKE.iter() {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    cleaned.trim().to_string()
}

/// Tokenize sanitized `text` with `method`
pub fn tokenize(text: &str, method: TokenizationMethod) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let text = sanitize(text);
    match method {
        TokenizationMethod::Word => word_tokens(&text),
        TokenizationMethod::Approximate => approximate_tokens(&text),
        TokenizationMethod::Character => text.chars().map(String::from).collect(),
        TokenizationMethod::Sentence => sentence_tokens(&text),
        TokenizationMethod::Subword => subword_tokens(&text),
    }
}

/// Tokenize with a method given by name. Unknown names are an error.
pub fn tokenize_named(text: &str, method: &str) -> Result<Vec<String>> {
    let method: TokenizationMethod = method.parse()?;
    Ok(tokenize(text, method))
}

/// Counts and token sequences for every method
pub fn analyze(original: &str, optimized: &str) -> BTreeMap<TokenizationMethod, TokenAnalysis> {
    TokenizationMethod::ALL
        .into_iter()
        .map(|method| {
            let analysis = TokenAnalysis::new(tokenize(original, method), tokenize(optimized, method));
            (method, analysis)
        })
        .collect()
}

fn word_tokens(text: &str) -> Vec<String> {
    words(text).map(String::from).collect()
}

fn approximate_tokens(text: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut len = 0;

    for c in text.chars() {
        current.push(c);
        len += 1;

        if c.is_whitespace() || matches!(c, '.' | ',' | '!' | '?' | ';' | ':') || len >= APPROX_CHUNK {
            push_trimmed(&mut chunks, &current);
            current.clear();
            len = 0;
        }
    }
    push_trimmed(&mut chunks, &current);

    chunks
}

fn push_trimmed(chunks: &mut Vec<String>, chunk: &str) {
    let trimmed = chunk.trim();
    if !trimmed.is_empty() {
        chunks.push(trimmed.to_string());
    }
}

fn sentence_tokens(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .filter(|segment| !segment.trim().is_empty())
        .map(String::from)
        .collect()
}

fn subword_tokens(text: &str) -> Vec<String> {
    let mut pieces = Vec::new();

    for word in words(text) {
        let chars: Vec<char> = word.chars().collect();
        if chars.len() <= SUBWORD_WHOLE_MAX {
            pieces.push(word.to_string());
        } else {
            pieces.extend(chars.chunks(SUBWORD_WINDOW).map(|window| window.iter().collect()));
        }
    }

    pieces
}
