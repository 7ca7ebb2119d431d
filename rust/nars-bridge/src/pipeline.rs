//! The question-answering pipeline.
//!
//! ```text
//! free text → fact extractor → simple sentences → translator → engine
//!                                                               │
//! answer ← answer generator ← English knowledge ← *concepts ────┘
//! ```
//!
//! Failures of any collaborator are logged and turned into an empty result
//! or an error-labelled string, so one bad input never ends a session.

use nars_english::describe::render_output;
use nars_english::grammar::Silent;
use nars_english::{Palette, Translator, TranslatorConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::engine::ReasoningEngine;
use crate::knowledge;
use crate::llm::{AnswerGenerator, FactExtractor, clean_facts, strip_thinking};
use crate::BridgeError;

pub const DEFAULT_THINK_CYCLES: u32 = 300;

/// Engine setting sent on every initialization.
pub const VOLUME: &str = "*volume=100";

/// Engine command listing every concept it holds.
pub const CONCEPTS: &str = "*concepts";

/// Answer used when the engine's knowledge cannot be read.
pub const NO_KNOWLEDGE: &str = "No knowledge available";

const SEED_STATEMENTS: [&str; 4] = [
    "<bird --> animal>. {0.9 0.9}",
    "<penguin --> bird>. {0.9 0.8}",
    "<swan --> bird>. {1.0 0.9}",
    "<tweety --> penguin>. {0.0 0.9}",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Inference steps run after each submitted statement.
    pub think_cycles: u32,
    /// Whether [`Pipeline::initialize`] seeds the engine.
    pub seed: bool,
    pub seed_statements: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            think_cycles: DEFAULT_THINK_CYCLES,
            seed: true,
            seed_statements: SEED_STATEMENTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl PipelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_think_cycles(mut self, think_cycles: u32) -> Self {
        self.think_cycles = think_cycles;
        self
    }

    pub fn with_seed(mut self, seed: bool) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_seed_statements<I, S>(mut self, statements: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.seed_statements = statements.into_iter().map(Into::into).collect();
        self
    }
}

/// Translator settings for text headed to the engine: truth values on,
/// events unless the sentence says otherwise.
pub fn engine_translator() -> Translator {
    Translator::new(
        TranslatorConfig::new()
            .with_output_truth(true)
            .with_eternal(false),
    )
}

pub struct Pipeline<E, X, A> {
    config: PipelineConfig,
    engine: E,
    extractor: X,
    answers: A,
    translator: Translator,
    history: Vec<(String, String)>,
}

impl<E, X, A> Pipeline<E, X, A>
where
    E: ReasoningEngine,
    X: FactExtractor,
    A: AnswerGenerator,
{
    pub fn new(config: PipelineConfig, engine: E, extractor: X, answers: A) -> Self {
        Pipeline {
            config,
            engine,
            extractor,
            answers,
            translator: engine_translator(),
            history: Vec::new(),
        }
    }

    /// Use `translator`, with whatever grammar it has learned, for facts.
    pub fn with_translator(mut self, translator: Translator) -> Self {
        self.translator = translator;
        self
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    /// Answered `(input, answer)` exchanges, oldest first.
    pub fn history(&self) -> &[(String, String)] {
        &self.history
    }

    /// Reset the engine, set its volume and, if configured, seed it.
    pub async fn initialize(&mut self) -> Result<(), BridgeError> {
        self.engine.reset().await?;
        self.engine.submit(VOLUME, None).await?;
        if self.config.seed {
            for statement in &self.config.seed_statements {
                self.engine.submit(statement, None).await?;
            }
            info!(statements = self.config.seed_statements.len(), "engine seeded");
        }
        Ok(())
    }

    /// Submit one line and return the engine's output.
    ///
    /// Blank lines and bare compound terms (lines opening with `(` or `[`)
    /// are not sent. An engine failure comes back as an error-labelled
    /// string.
    pub async fn submit(&mut self, statement: &str, cycles: Option<u32>) -> String {
        let statement = statement.trim();
        if statement.is_empty() || statement.starts_with('(') || statement.starts_with('[') {
            debug!(statement, "not submitted");
            return String::new();
        }
        match self.engine.submit(statement, cycles).await {
            Ok(output) => output,
            Err(error) => {
                warn!(%error, statement, "engine rejected input");
                format!("Error adding to NARS: {error}")
            }
        }
    }

    /// Logic-language lines for one English sentence, or `None` when the
    /// translator has nothing for it.
    pub fn translate(&mut self, text: &str) -> Option<String> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match self.translator.process_line(text, &mut Silent) {
            Ok(narsese) if narsese.is_empty() => {
                debug!(text, "no statements for sentence");
                None
            }
            Ok(narsese) => Some(narsese),
            Err(error) => {
                warn!(%error, text, "translation failed");
                None
            }
        }
    }

    /// Translate `text` and feed every resulting line to the engine,
    /// thinking after each one. Returns whether anything was sent.
    async fn tell(&mut self, text: &str) -> bool {
        let Some(narsese) = self.translate(text) else {
            return false;
        };
        debug!(text, %narsese, "translated");
        let cycles = Some(self.config.think_cycles);
        for line in narsese.lines() {
            self.submit(line, cycles).await;
        }
        true
    }

    /// The engine's concepts rendered as plain English.
    pub async fn knowledge(&mut self) -> String {
        match self.engine.submit(CONCEPTS, None).await {
            Ok(output) => render_output(&output, &Palette::plain()),
            Err(error) => {
                warn!(%error, "could not read engine knowledge");
                NO_KNOWLEDGE.to_string()
            }
        }
    }

    /// Answer `input`: extract its facts, teach them to the engine, pose it
    /// as a question if it is one, and let the answer generator respond
    /// from what the engine now believes and the exchanges so far. Failed
    /// answers are not remembered.
    pub async fn process_input(&mut self, input: &str) -> String {
        let facts = match self.extractor.extract_facts(input).await {
            Ok(completions) => clean_facts(completions),
            Err(error) => {
                warn!(%error, "fact extraction failed");
                Vec::new()
            }
        };
        info!(facts = facts.len(), "facts extracted");

        for fact in &facts {
            if !self.tell(fact).await {
                debug!(fact, "fact not converted");
            }
        }

        if input.contains('?') {
            self.tell(input).await;
        }

        let context = self.knowledge().await;
        match self
            .answers
            .generate_answer(input, &context, &self.history)
            .await
        {
            Ok(answer) => {
                let answer = strip_thinking(&answer).to_string();
                self.history.push((input.to_string(), answer.clone()));
                answer
            }
            Err(error) => {
                warn!(%error, "answer generation failed");
                format!("Error generating response: {error}")
            }
        }
    }

    /// Feed stored knowledge to the engine. Returns how many lines the
    /// engine took without reporting an error.
    pub async fn load_knowledge<I, S>(&mut self, lines: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut loaded = 0;
        for line in knowledge::normalize(lines) {
            let output = self.submit(&line, None).await;
            if !output.to_lowercase().contains("error") {
                loaded += 1;
            }
        }
        info!(loaded, "knowledge loaded");
        loaded
    }
}
