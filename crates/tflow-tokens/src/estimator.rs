//! BPE token estimation using tiktoken

use std::sync::Arc;
use tiktoken_rs::CoreBPE;

/// Token estimator using tiktoken (cl100k_base encoding)
///
/// Reported next to the counting methods, never in place of one.
#[derive(Clone)]
pub struct TokenEstimator {
    bpe: Arc<CoreBPE>,
}

impl TokenEstimator {
    /// Create new estimator with cl100k_base encoding (GPT-4, GPT-3.5-turbo)
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            bpe: Arc::new(tiktoken_rs::cl100k_base()?),
        })
    }

    /// Estimate token count for a single string
    pub fn estimate(&self, text: &str) -> usize {
        self.bpe.encode_ordinary(text).len()
    }

    /// Token counts for an original/optimized pair
    pub fn estimate_pair(&self, original: &str, optimized: &str) -> (usize, usize) {
        (self.estimate(original), self.estimate(optimized))
    }
}
