use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown tokenization method: {0}")]
    UnknownMethod(String),

    #[error("Mask rule '{rule}' failed: {reason}")]
    MaskRule { rule: String, reason: String },

    #[error("Invalid pattern for rule '{rule}': {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
