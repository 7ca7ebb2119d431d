//! Error types for collaborator calls.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("reasoning engine failed: {0}")]
    Engine(String),

    #[error("language model failed: {0}")]
    LanguageModel(String),

    #[error("malformed {what}: {detail}")]
    Malformed { what: &'static str, detail: String },
}
