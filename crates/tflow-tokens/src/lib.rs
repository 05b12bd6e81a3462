//! Token counting and statistics
//!
//! Five stateless counting methods over sanitized text, plus an optional
//! tiktoken estimate for reporting.

pub mod estimator;
pub mod methods;

pub use estimator::TokenEstimator;
pub use methods::{analyze, sanitize, tokenize, tokenize_named};
