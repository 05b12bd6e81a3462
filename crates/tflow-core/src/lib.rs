//! Core domain models and static data for tflow
//!
//! This crate contains:
//! - Domain models (Detection, TokenAnalysis, OptimizationStats, OptimizationResult)
//! - Pattern library (fillers, phrase rewrites, verbs, secret rules)
//! - Line classifier (code vs prose)

pub mod classify;
pub mod error;
pub mod model;
pub mod patterns;

pub use classify::{count_words, is_blank, is_likely_code, is_word_char, should_preserve, words};
pub use error::{Error, Result};
pub use model::{
    Detection, OptimizationResult, OptimizationStats, Severity, TokenAnalysis, TokenSequences,
    TokenizationMethod,
};
