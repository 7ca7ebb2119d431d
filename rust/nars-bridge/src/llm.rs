//! Language model seams and the cleanup applied to their completions.
//!
//! Reasoning models prefix their completion with a `<think>…</think>`
//! block. Only the text after the closing tag is kept, both for extracted
//! facts and for answers.

use async_trait::async_trait;

use crate::BridgeError;

const THINK_OPEN: &str = "<think>";
const THINK_CLOSE: &str = "</think>";

/// Shortest fact worth translating: a subject and a verb.
pub const MIN_FACT_WORDS: usize = 2;

/// Breaks free text into short, simple statements.
#[async_trait]
pub trait FactExtractor: Send {
    /// Candidate facts for `text`. Items may hold several facts, one per
    /// line; [`clean_facts`] splits and filters them.
    async fn extract_facts(&mut self, text: &str) -> Result<Vec<String>, BridgeError>;
}

/// Answers a question in natural language from a knowledge context.
#[async_trait]
pub trait AnswerGenerator: Send {
    /// `history` holds the earlier `(input, answer)` exchanges of the
    /// session, oldest first.
    async fn generate_answer(
        &mut self,
        question: &str,
        context: &str,
        history: &[(String, String)],
    ) -> Result<String, BridgeError>;
}

/// The completion without its reasoning preamble.
pub fn strip_thinking(completion: &str) -> &str {
    if !completion.contains(THINK_OPEN) {
        return completion;
    }
    match completion.split_once(THINK_CLOSE) {
        Some((_, rest)) => rest.trim(),
        None => completion,
    }
}

/// One fact per line, trimmed, dropping lines too short to be a statement.
pub fn clean_facts<I, S>(completions: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut facts = Vec::new();
    for completion in completions {
        for line in strip_thinking(completion.as_ref()).lines() {
            let fact = line.trim();
            if fact.is_empty() {
                continue;
            }
            if fact.split_whitespace().count() < MIN_FACT_WORDS {
                tracing::debug!(fact, "skipping fact without a verb");
                continue;
            }
            facts.push(fact.to_string());
        }
    }
    facts
}
