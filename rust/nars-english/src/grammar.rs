//! Grammar learning.
//!
//! When the cascade cannot turn a sentence into well-formed statements,
//! the operator is asked to restate it as a few simple sentences. Each
//! simple sentence is mapped back onto the type symbols of the original
//! sentence and reduced by the syntax pass, and the pair
//!
//! ```text
//!  ADJ_NOUN_1 BE_2 ADJ_NOUN_2 ADV_VERB_3
//!      ⇒  ADJ_NOUN_1 BE_2 ADJ_NOUN_2 , ADJ_NOUN_1 BE_2 ADJ_2 , ADJ_NOUN_1 ADV_VERB_3
//! ```
//!
//! is generalized over its group indices into a new statement rule. A rule
//! that is learned again is revised instead of duplicated. Learned rules
//! are kept ordered by descending expectation, most recent first on ties,
//! and are tried before the built-in clause rules.

use std::collections::VecDeque;
use std::io;

use indexmap::IndexMap;
use tracing::{info, warn};

use crate::canonical::{WordMap, canonicalize};
use crate::cascade::reduce_syntax;
use crate::error::TranslateError;
use crate::rule::StatementRule;
use crate::tagger::Tagger;
use crate::truth::Truth;

/// Where decompositions come from.
///
/// This is the translator's only suspension point. An operator that returns
/// `Ok(None)` aborts the lesson in progress.
pub trait Operator {
    /// Announce the sentence that needs a decomposition.
    fn prompt(&mut self, message: &str) -> io::Result<()>;

    /// The next simple sentence. An empty line ends the decomposition.
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// An operator that answers from a fixed script, for tests and batch runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedOperator {
    lines: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedOperator {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedOperator {
            lines: lines.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Queue more lines behind the ones not read yet.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
    }

    /// Every prompt shown so far.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Operator for ScriptedOperator {
    fn prompt(&mut self, message: &str) -> io::Result<()> {
        self.prompts.push(message.to_string());
        Ok(())
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.lines.pop_front())
    }
}

/// An operator that never answers; every lesson aborts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Operator for Silent {
    fn prompt(&mut self, _message: &str) -> io::Result<()> {
        Ok(())
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        Ok(None)
    }
}

/// Whether a fragment is a complete statement.
///
/// It must be bracketed by `<` and `>`, and only an implication may nest
/// further statements.
pub fn is_valid(fragment: &str) -> bool {
    fragment.starts_with('<')
        && fragment.ends_with('>')
        && (fragment.matches('<').count() <= 1 || fragment.contains("=/>"))
}

/// The sentence a lesson is about.
#[derive(Debug, Clone)]
pub struct Lesson {
    /// Lemmatized sentence, shown to the operator.
    pub sentence: String,
    /// Type string after the syntax pass; the source of the new pattern.
    pub reduced: String,
    pub words: WordMap,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A rule was induced or revised.
    Induced {
        pattern: String,
        replacement: String,
        truth: Truth,
    },
    /// The operator ended the decomposition without usable sentences.
    Empty,
    /// The operator went away.
    Aborted,
}

/// The learned statement rules of one translator.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: Vec<StatementRule>,
}

impl Grammar {
    pub fn new() -> Self {
        Grammar::default()
    }

    /// Learned rules in the order the cascade tries them.
    pub fn rules(&self) -> &[StatementRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Ask `operator` to decompose the lesson's sentence and learn from
    /// the answer. `clock` advances when a rule is induced.
    pub fn learn(
        &mut self,
        lesson: &Lesson,
        operator: &mut dyn Operator,
        tagger: &dyn Tagger,
        clock: &mut u64,
    ) -> Result<Outcome, TranslateError> {
        operator.prompt(&format!(
            "//What? Tell \"{}\" in simple sentences: (newline-separated)",
            lesson.sentence.trim()
        ))?;

        let mut parts = Vec::new();
        loop {
            let Some(line) = operator.next_line()? else {
                warn!(sentence = lesson.sentence.trim(), "lesson aborted");
                return Ok(Outcome::Aborted);
            };
            if line.trim().is_empty() {
                break;
            }
            let simple = canonicalize(&format!(" {} ", line.trim_end()), tagger);
            let symbols: Vec<&str> = simple
                .words
                .iter()
                .filter_map(|w| lesson.words.symbol(&w.word))
                .collect();
            if !symbols.is_empty() {
                parts.push(reduce_syntax(&format!(" {} ", symbols.join(" "))));
            }
        }

        if parts.is_empty() {
            return Ok(Outcome::Empty);
        }

        let decomposition = parts.join(",");
        let (pattern, replacement) = generalize(&reduce_syntax(&lesson.reduced), &decomposition);
        *clock += 1;
        let truth = self.induce(&pattern, &replacement, *clock)?;
        info!(%pattern, %replacement, %truth, "induced grammar relation");

        Ok(Outcome::Induced {
            pattern,
            replacement,
            truth,
        })
    }

    /// Add a rule, or revise the identical rule learned before.
    pub fn induce(
        &mut self,
        pattern: &str,
        replacement: &str,
        recency: u64,
    ) -> Result<Truth, TranslateError> {
        let existing = self
            .rules
            .iter_mut()
            .find(|rule| rule.pattern.as_str() == pattern && rule.replacement == replacement);

        let truth = match existing {
            Some(rule) => {
                rule.truth = Truth::induced().revise(rule.truth);
                rule.recency = recency;
                rule.truth
            }
            None => {
                let rule = StatementRule::new(pattern, replacement, Truth::induced(), recency)?;
                self.rules.push(rule);
                Truth::induced()
            }
        };

        self.rules.sort_by(|a, b| {
            b.truth
                .expectation()
                .total_cmp(&a.truth.expectation())
                .then(b.recency.cmp(&a.recency))
        });
        Ok(truth)
    }
}

/// Replace the group indices of `source` with capture groups and those of
/// `replacement` with references to them.
///
/// Capture groups are numbered by first occurrence; a symbol that occurs
/// again only has to match some index. Symbols of `replacement` that are
/// absent from `source` but share a group index with one of its symbols
/// refer to that symbol's group.
pub fn generalize(source: &str, replacement: &str) -> (String, String) {
    let mut groups: IndexMap<&str, usize> = IndexMap::new();
    let mut by_index: IndexMap<&str, usize> = IndexMap::new();

    let pattern = source
        .split(' ')
        .map(|symbol| match split_symbol(symbol) {
            Some((tag, index)) => {
                if groups.contains_key(symbol) {
                    format!("{}_(?:[0-9]*)", regex::escape(tag))
                } else {
                    let group = groups.len() + 1;
                    groups.insert(symbol, group);
                    by_index.entry(index).or_insert(group);
                    format!("{}_([0-9]*)", regex::escape(tag))
                }
            }
            None => regex::escape(symbol),
        })
        .collect::<Vec<_>>()
        .join(" ");

    let replacement = replacement
        .split(' ')
        .map(|symbol| {
            let group = groups.get(symbol).copied().or_else(|| {
                split_symbol(symbol).and_then(|(_, index)| by_index.get(index).copied())
            });
            match (split_symbol(symbol), group) {
                (Some((tag, _)), Some(group)) => format!("{tag}_${{{group}}}"),
                _ => symbol.replace('$', "$$"),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    (pattern, replacement)
}

/// `ADJ_NOUN_12` → `("ADJ_NOUN", "12")`.
fn split_symbol(symbol: &str) -> Option<(&str, &str)> {
    let (tag, index) = symbol.rsplit_once('_')?;
    (!tag.is_empty() && !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()))
        .then_some((tag, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canonical::canonicalize;
    use crate::tagger::LexiconTagger;
    use pretty_assertions::assert_eq;

    fn lesson(sentence: &str) -> Lesson {
        let canonical = canonicalize(sentence, &LexiconTagger::new());
        Lesson {
            sentence: canonical.sentence(),
            reduced: reduce_syntax(&canonical.types()),
            words: canonical.word_map(),
        }
    }

    #[test]
    fn validity() {
        assert!(is_valid("< {Tweety} --> bird >"));
        assert!(is_valid("< < a --> b >  =/>  < c --> d > >"));
        assert!(!is_valid("< {Tweety} --> bird > sing"));
        assert!(!is_valid("< a --> b > < c --> d >"));
        assert!(!is_valid(""));
    }

    #[test]
    fn generalizes_by_first_occurrence() {
        let (pattern, replacement) = generalize(
            " ADJ_NOUN_1 BE_2 ADJ_NOUN_2 ADV_VERB_3 ",
            " ADJ_NOUN_1 BE_2 ADJ_NOUN_2 , ADJ_NOUN_1 BE_2 ADJ_2 , ADJ_NOUN_1 ADV_VERB_3 ",
        );
        assert_eq!(
            pattern,
            " ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) "
        );
        assert_eq!(
            replacement,
            " ADJ_NOUN_${1} BE_${2} ADJ_NOUN_${3} , ADJ_NOUN_${1} BE_${2} ADJ_${2} , ADJ_NOUN_${1} ADV_VERB_${4} "
        );
    }

    #[test]
    fn repeated_symbols_share_a_group() {
        let (pattern, replacement) = generalize(" ADJ_NOUN_1 ADP_2 ADJ_NOUN_1 ", " ADJ_NOUN_1 ");
        assert_eq!(pattern, " ADJ_NOUN_([0-9]*) ADP_([0-9]*) ADJ_NOUN_(?:[0-9]*) ");
        assert_eq!(replacement, " ADJ_NOUN_${1} ");
    }

    #[test]
    fn learns_from_a_decomposition() -> anyhow::Result<()> {
        let lesson = lesson(" Tweety is a yellow bird that sings ");
        let mut operator =
            ScriptedOperator::new(["Tweety is a bird", "Tweety is yellow", "Tweety sings", ""]);
        let mut grammar = Grammar::new();
        let mut clock = 7;

        let outcome = grammar.learn(&lesson, &mut operator, &LexiconTagger::new(), &mut clock)?;

        assert_eq!(
            operator.prompts(),
            ["//What? Tell \"{Tweety} be a yellow bird that sing\" in simple sentences: (newline-separated)"]
        );
        assert_eq!(
            outcome,
            Outcome::Induced {
                pattern: " ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) "
                    .to_string(),
                replacement: " ADJ_NOUN_${1} BE_${2} ADJ_NOUN_${3} , ADJ_NOUN_${1} BE_${2} ADJ_${2} , ADJ_NOUN_${1} ADV_VERB_${4} "
                    .to_string(),
                truth: Truth::induced(),
            }
        );
        assert_eq!(clock, 8);
        assert_eq!(grammar.rules()[0].recency, 8);
        Ok(())
    }

    #[test]
    fn relearning_revises_instead_of_duplicating() -> anyhow::Result<()> {
        let lesson = lesson(" Tweety is a yellow bird that sings ");
        let answer = ["Tweety is a bird", "Tweety sings", ""];
        let mut operator = ScriptedOperator::new(answer);
        operator.extend(answer);
        let mut grammar = Grammar::new();
        let mut clock = 0;
        let tagger = LexiconTagger::new();

        grammar.learn(&lesson, &mut operator, &tagger, &mut clock)?;
        grammar.learn(&lesson, &mut operator, &tagger, &mut clock)?;

        assert_eq!(grammar.len(), 1);
        let rule = &grammar.rules()[0];
        assert_eq!(rule.truth, Truth::induced().revise(Truth::induced()));
        assert!((rule.truth.confidence - 0.6206896551724138).abs() < 1e-12);
        assert_eq!(rule.recency, 2);
        Ok(())
    }

    #[test]
    fn stronger_rules_sort_first() -> anyhow::Result<()> {
        let mut grammar = Grammar::new();
        grammar.induce(" A_([0-9]*) ", " B_${1} ", 1)?;
        grammar.induce(" C_([0-9]*) ", " D_${1} ", 2)?;
        assert_eq!(grammar.rules()[0].pattern.as_str(), " C_([0-9]*) ");

        grammar.induce(" A_([0-9]*) ", " B_${1} ", 3)?;
        assert_eq!(grammar.rules()[0].pattern.as_str(), " A_([0-9]*) ");
        Ok(())
    }

    #[test]
    fn aborted_and_empty_lessons_learn_nothing() -> anyhow::Result<()> {
        let lesson = lesson(" Tweety is a yellow bird that sings ");
        let tagger = LexiconTagger::new();
        let mut grammar = Grammar::new();
        let mut clock = 0;

        let outcome = grammar.learn(&lesson, &mut Silent, &tagger, &mut clock)?;
        assert_eq!(outcome, Outcome::Aborted);

        let mut operator = ScriptedOperator::new(["the moon glows", ""]);
        let outcome = grammar.learn(&lesson, &mut operator, &tagger, &mut clock)?;
        assert_eq!(outcome, Outcome::Empty);

        assert!(grammar.is_empty());
        assert_eq!(clock, 0);
        Ok(())
    }
}
