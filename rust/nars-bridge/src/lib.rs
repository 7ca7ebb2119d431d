//! # nars-bridge
//!
//! Wires the English translator between a language model and a NARS
//! reasoner. The engine and the model are reached only through the
//! [`ReasoningEngine`], [`FactExtractor`] and [`AnswerGenerator`] traits;
//! this crate holds no transport of its own.
//!
//! A [`Pipeline`] turns a user's message into an answer:
//!
//! 1. the fact extractor breaks the message into simple sentences,
//! 2. each sentence is translated and submitted, followed by a burst of
//!    inference cycles,
//! 3. a question is additionally submitted as a query,
//! 4. the engine's concepts are rendered as English and handed to the
//!    answer generator as context.

mod error;
pub use error::BridgeError;

pub mod engine;
pub mod knowledge;
pub mod llm;
pub mod pipeline;

pub use engine::ReasoningEngine;
pub use llm::{AnswerGenerator, FactExtractor};
pub use pipeline::{Pipeline, PipelineConfig};
