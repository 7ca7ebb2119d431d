//! The line translator: English lines in, logic-language lines out.
//!
//! A [`Translator`] is one conversation with the reasoning engine. It owns
//! the logical clock, the eternal/event output mode, the pending
//! motivation and think-cycle directives, and the grammar it has learned.
//! Separate translators share nothing.
//!
//! The operator that answers grammar lessons is passed to every call
//! rather than owned, so the caller decides where decompositions come
//! from (a terminal, a script, nobody).

use tracing::{debug, info, warn};

use crate::canonical::canonicalize;
use crate::cascade::{Depth, reduce};
use crate::config::TranslatorConfig;
use crate::error::TranslateError;
use crate::grammar::{Grammar, Lesson, Operator, Outcome, is_valid};
use crate::line::{self, Command, Mood, Tense};
use crate::tagger::{LexiconTagger, Tagger};

/// Placeholder words and the variables they become, applied in order.
const VARIABLES: [(&str, &str); 7] = [
    (" {What} ", " ?1 "),
    ("=/>", "==>"),
    (" {Who} ", " ?1 "),
    (" {It} ", " $1 "),
    (" what ", " ?1 "),
    (" who ", " ?1 "),
    (" it ", " $1 "),
];

pub struct Translator {
    config: TranslatorConfig,
    tagger: Box<dyn Tagger>,
    grammar: Grammar,
    time: u64,
    eternal: bool,
    motivation: Option<String>,
    think_cycles: Option<String>,
    last: Option<Lesson>,
}

impl Default for Translator {
    fn default() -> Self {
        Translator::new(TranslatorConfig::default())
    }
}

impl Translator {
    pub fn new(config: TranslatorConfig) -> Self {
        Translator {
            eternal: config.eternal,
            config,
            tagger: Box::new(LexiconTagger::new()),
            grammar: Grammar::new(),
            time: 0,
            motivation: None,
            think_cycles: None,
            last: None,
        }
    }

    /// Replace the default lexicon tagger.
    pub fn with_tagger(mut self, tagger: impl Tagger + 'static) -> Self {
        self.tagger = Box::new(tagger);
        self
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }

    /// Rules learned so far, in the order they are tried.
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Logical time; advances with every non-empty line and induced rule.
    pub fn time(&self) -> u64 {
        self.time
    }

    pub fn is_eternal(&self) -> bool {
        self.eternal
    }

    /// Translate every line of `text`, skipping lines that produce nothing.
    pub fn process_text(
        &mut self,
        text: &str,
        operator: &mut dyn Operator,
    ) -> Result<String, TranslateError> {
        let mut results = Vec::new();
        for line in text.trim().split('\n') {
            let result = self.process_line(line, operator)?;
            if !result.is_empty() {
                results.push(result);
            }
        }
        Ok(results.join("\n"))
    }

    /// Translate one line.
    ///
    /// Returns the statements for the line joined by newlines, which is
    /// empty when the line was a session command or needed a lesson.
    pub fn process_line(
        &mut self,
        line: &str,
        operator: &mut dyn Operator,
    ) -> Result<String, TranslateError> {
        if line.is_empty() {
            return Ok(String::new());
        }
        self.time += 1;

        if let Some(command) = line::command(line) {
            return self.run_command(command, line, operator);
        }

        let mood = Mood::of(line);
        let negated = line::is_negated(line);
        let (tense, mut text) = Tense::detect(line);
        if self.config.tense_from_sentence {
            self.eternal = !tense.event;
            text = line::strip_markers(line, &text);
        }

        let canonical = canonicalize(&line::sentence_text(&text), self.tagger.as_ref());
        let words = canonical.word_map();
        let types = canonical.types();
        let learned = self.grammar.rules();
        let reduced = reduce(&types, Depth::Syntax, learned, &words).text;
        let skeleton = reduce(&types, Depth::Statements, learned, &words).text;
        let concrete = reduce(&types, Depth::Terms, learned, &words);
        debug!(%types, %reduced, %skeleton, concrete = %concrete.text, "reduced sentence");

        let mut results = Vec::new();
        if self.config.verbose {
            results.push(format!("//Lemmatized sentence: {}", canonical.sentence()));
            results.push(format!("//Typetext: {types}"));
            results.push(format!("//Typetext reduced:{reduced}"));
            results.push(format!("//Typetext Narsese:{skeleton}"));
        }

        let fragments: Vec<&str> = concrete
            .text
            .split(" , ")
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .collect();

        let lesson = Lesson {
            sentence: canonical.sentence(),
            reduced,
            words,
        };

        if fragments.iter().any(|fragment| !is_valid(fragment)) {
            self.teach(&lesson, operator, &mut results)?;
        } else {
            for fragment in &fragments {
                let statement = if negated {
                    format!("(! {fragment})")
                } else {
                    format!(" {fragment} ")
                };
                let mut statement = VARIABLES
                    .iter()
                    .fold(statement, |s, (from, to)| s.replace(from, to))
                    .trim()
                    .to_string();
                statement.push(mood.punctuation());
                if !self.eternal {
                    statement.push(' ');
                    statement.push_str(tense.tag());
                }
                if self.config.output_truth {
                    statement.push(' ');
                    statement.push_str(&concrete.truth.to_string());
                }
                results.push(statement);
            }
            if !fragments.is_empty() {
                if let Some(cycles) = &self.think_cycles {
                    results.push(cycles.clone());
                }
            }
        }
        self.last = Some(lesson);

        if let Some(motivation) = &self.motivation {
            if !line.trim().is_empty() {
                results.push(motivation.clone());
                if let Some(cycles) = &self.think_cycles {
                    results.push(cycles.clone());
                }
            }
        }

        Ok(results.join("\n"))
    }

    fn run_command(
        &mut self,
        command: Command,
        line: &str,
        operator: &mut dyn Operator,
    ) -> Result<String, TranslateError> {
        match command {
            Command::Eternal(eternal) => {
                info!(eternal, "output mode changed");
                self.eternal = eternal;
            }
            Command::Motivation(motivation) => {
                info!(%motivation, "motivation set");
                self.motivation = Some(motivation);
            }
            Command::ThinkCycles(cycles) => {
                info!(%cycles, "think cycles set");
                self.think_cycles = Some(cycles);
            }
            Command::Teach => match self.last.clone() {
                Some(lesson) => {
                    let mut results = Vec::new();
                    self.teach(&lesson, operator, &mut results)?;
                    return Ok(results.join("\n"));
                }
                None => warn!("nothing to teach yet"),
            },
            Command::PassThrough => return Ok(line.to_string()),
        }
        Ok(String::new())
    }

    fn teach(
        &mut self,
        lesson: &Lesson,
        operator: &mut dyn Operator,
        results: &mut Vec<String>,
    ) -> Result<(), TranslateError> {
        match self
            .grammar
            .learn(lesson, operator, self.tagger.as_ref(), &mut self.time)
        {
            Ok(Outcome::Induced {
                pattern,
                replacement,
                truth,
            }) => {
                if self.config.verbose {
                    results.push(format!(
                        "//Induced grammar relation: ({pattern:?}, {replacement:?}, {truth})"
                    ));
                }
                Ok(())
            }
            Ok(Outcome::Empty | Outcome::Aborted) => Ok(()),
            Err(TranslateError::Operator(error)) => {
                warn!(%error, "operator unavailable, lesson aborted");
                Ok(())
            }
            Err(error) => Err(error),
        }
    }
}
