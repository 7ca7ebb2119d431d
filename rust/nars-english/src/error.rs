//! Error types for the translator.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("rewrite pattern '{pattern}' does not compile: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to read operator input: {0}")]
    Operator(#[from] std::io::Error),

    #[error("translator configuration is invalid: {0}")]
    Config(#[from] serde_json::Error),
}
