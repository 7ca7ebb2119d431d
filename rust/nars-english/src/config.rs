//! Translator configuration.
//!
//! Every field has a default, so a configuration file only needs the
//! settings it changes:
//!
//! ```json
//! { "output_truth": true, "tense_from_sentence": false }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// Append the accumulated `{frequency confidence}` to each statement.
    pub output_truth: bool,

    /// Whether statements start out eternal, i.e. without an event tag.
    /// Commands and, when [`tense_from_sentence`](Self::tense_from_sentence)
    /// is set, marker words change this per line.
    pub eternal: bool,

    /// Derive eternal/event output from tense marker words, and strip them.
    pub tense_from_sentence: bool,

    /// Emit `//` diagnostic lines alongside the statements.
    pub verbose: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        TranslatorConfig {
            output_truth: false,
            eternal: true,
            tense_from_sentence: true,
            verbose: false,
        }
    }
}

impl TranslatorConfig {
    pub fn new() -> Self {
        TranslatorConfig::default()
    }

    /// Parse a JSON configuration; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, TranslateError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_output_truth(mut self, output_truth: bool) -> Self {
        self.output_truth = output_truth;
        self
    }

    pub fn with_eternal(mut self, eternal: bool) -> Self {
        self.eternal = eternal;
        self
    }

    pub fn with_tense_from_sentence(mut self, tense_from_sentence: bool) -> Self {
        self.tense_from_sentence = tense_from_sentence;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() -> anyhow::Result<()> {
        let config = TranslatorConfig::from_json(r#"{ "output_truth": true }"#)?;
        assert_eq!(config, TranslatorConfig::new().with_output_truth(true));
        assert!(config.eternal);
        assert!(config.tense_from_sentence);
        Ok(())
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = TranslatorConfig::from_json("{ output_truth }");
        assert!(matches!(err, Err(TranslateError::Config(_))));
    }
}
