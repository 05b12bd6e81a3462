//! Result records produced by the optimizer

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Risk tier of a masked span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        };
        f.write_str(label)
    }
}

/// One masked span of suspected sensitive data.
///
/// `pattern` is a redacted preview and never carries more than a short prefix of the
/// real value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(rename = "type")]
    pub kind: String,
    pub pattern: String,
    pub line: usize,
    pub masked: String,
    pub severity: Severity,
}

/// Counting strategies used for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizationMethod {
    /// Maximal runs of word characters
    Word,
    /// Chunks of at most four characters, closed early at whitespace or punctuation
    Approximate,
    /// One token per character
    Character,
    /// Segments between terminal punctuation
    Sentence,
    /// Short words whole, longer words in windows of three
    Subword,
}

impl TokenizationMethod {
    pub const ALL: [TokenizationMethod; 5] = [
        TokenizationMethod::Word,
        TokenizationMethod::Approximate,
        TokenizationMethod::Character,
        TokenizationMethod::Sentence,
        TokenizationMethod::Subword,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TokenizationMethod::Word => "word",
            TokenizationMethod::Approximate => "approximate",
            TokenizationMethod::Character => "character",
            TokenizationMethod::Sentence => "sentence",
            TokenizationMethod::Subword => "subword",
        }
    }
}

impl fmt::Display for TokenizationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TokenizationMethod {
    type Err = Error;

    /// Accepts the snake_case names plus the legacy upper-case identifiers
    /// (`WORD`, `GPT_APPROX`, `CHARACTER`, `SENTENCE`, `SUBWORD`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "word" => Ok(TokenizationMethod::Word),
            "approximate" | "approx" | "gpt_approx" => Ok(TokenizationMethod::Approximate),
            "character" | "char" => Ok(TokenizationMethod::Character),
            "sentence" => Ok(TokenizationMethod::Sentence),
            "subword" => Ok(TokenizationMethod::Subword),
            _ => Err(Error::UnknownMethod(s.to_string())),
        }
    }
}

/// Same names as [`FromStr`], so config files and the command line agree
impl<'de> Deserialize<'de> for TokenizationMethod {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSequences {
    pub original: Vec<String>,
    pub optimized: Vec<String>,
}

/// Per-method token counts for the original and optimized text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenAnalysis {
    pub original: usize,
    pub optimized: usize,
    pub reduction: i64,
    pub tokens: TokenSequences,
}

impl TokenAnalysis {
    pub fn new(original: Vec<String>, optimized: Vec<String>) -> Self {
        Self {
            original: original.len(),
            optimized: optimized.len(),
            reduction: reduction_percent(original.len(), optimized.len()),
            tokens: TokenSequences {
                original,
                optimized,
            },
        }
    }
}

/// Aggregate statistics for one optimizer call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationStats {
    pub original_words: usize,
    pub optimized_words: usize,
    pub reduction: i64,
    pub efficiency: i64,
    pub total_lines: usize,
    pub lines_processed: usize,
    pub code_lines: usize,
    pub preserved_lines: usize,
    pub secrets_masked: usize,
    pub original_chars: usize,
    pub optimized_chars: usize,
    pub char_reduction: i64,
    pub tokens: BTreeMap<TokenizationMethod, TokenAnalysis>,
}

impl OptimizationStats {
    /// Zero-valued stats with 100% efficiency
    pub fn empty() -> Self {
        Self {
            original_words: 0,
            optimized_words: 0,
            reduction: 0,
            efficiency: 100,
            total_lines: 0,
            lines_processed: 0,
            code_lines: 0,
            preserved_lines: 0,
            secrets_masked: 0,
            original_chars: 0,
            optimized_chars: 0,
            char_reduction: 0,
            tokens: BTreeMap::new(),
        }
    }

    /// Lines that were neither code, prose nor preserved
    pub fn blank_lines(&self) -> usize {
        self.total_lines
            .saturating_sub(self.code_lines + self.lines_processed + self.preserved_lines)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub optimized: String,
    pub stats: OptimizationStats,
    pub detections: Vec<Detection>,
}

impl OptimizationResult {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// `round(100 * (original - optimized) / original)`, 0 when `original` is 0
pub fn reduction_percent(original: usize, optimized: usize) -> i64 {
    if original == 0 {
        return 0;
    }
    let delta = original as f64 - optimized as f64;
    round_half_up(delta / original as f64 * 100.0)
}

/// `round(100 * optimized / original)`, 100 when `original` is 0
pub fn efficiency_percent(original: usize, optimized: usize) -> i64 {
    if original == 0 {
        return 100;
    }
    round_half_up(optimized as f64 / original as f64 * 100.0)
}

/// Rounds .5 toward positive infinity
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}
