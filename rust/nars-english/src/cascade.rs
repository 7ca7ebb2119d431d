//! The rewrite cascade: indexed type string in, logic-language skeleton out.
//!
//! Three passes run in a fixed order over the space-padded type string:
//!
//! 1. **Syntax.** The structural rules in [`SYNTACTIC_RULES`] are applied
//!    once each, for as many rounds as there are rules. This reaches a fixed
//!    point for any realistically short sentence.
//! 2. **Statements.** Every learned rule, then every built-in clause rule,
//!    is tried once in that order against the progressively rewritten
//!    string. Each rule that changes the string folds its truth into the
//!    running truth by deduction.
//! 3. **Terms.** Each space-separated symbol is resolved to a word or a
//!    compound term through the sentence's [`WordMap`]. Relation names
//!    joined by `+` are resolved side by side.
//!
//! The running truth always starts from [`Truth::input`].

use tracing::debug;

use crate::canonical::WordMap;
use crate::rule::{STATEMENT_RULES, SYNTACTIC_RULES, StatementRule, TERM_RULES, TermRule};
use crate::truth::Truth;

/// How far [`reduce`] should go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Depth {
    Syntax,
    Statements,
    Terms,
}

/// The result of reducing a type string.
#[derive(Debug, Clone, PartialEq)]
pub struct Reduction {
    pub text: String,
    pub truth: Truth,
}

/// Run the cascade down to `depth`.
///
/// `learned` rules take priority over the built-in clause rules. `words`
/// is only consulted for [`Depth::Terms`].
pub fn reduce(types: &str, depth: Depth, learned: &[StatementRule], words: &WordMap) -> Reduction {
    let mut truth = Truth::input();
    let mut text = reduce_syntax(types);

    if depth >= Depth::Statements {
        text = apply_statements(&text, learned, &mut truth);
    }
    if depth >= Depth::Terms {
        text = resolve_terms(&text, words, &mut truth);
    }

    Reduction { text, truth }
}

/// Pass 1 only.
pub fn reduce_syntax(types: &str) -> String {
    let mut text = types.to_string();
    for _ in 0..SYNTACTIC_RULES.len() {
        for rule in SYNTACTIC_RULES.iter() {
            text = rule.pattern.replace_all(&text, rule.replacement).into_owned();
        }
    }
    text
}

fn apply_statements(text: &str, learned: &[StatementRule], truth: &mut Truth) -> String {
    let mut text = text.to_string();
    for rule in learned.iter().chain(STATEMENT_RULES.iter()) {
        let rewritten = rule
            .pattern
            .replace_all(&text, rule.replacement.as_str())
            .into_owned();
        if rewritten != text {
            debug!(pattern = rule.pattern.as_str(), result = %rewritten, "statement rule fired");
            *truth = truth.deduce(rule.truth);
            text = rewritten;
        }
    }
    text
}

fn resolve_terms(text: &str, words: &WordMap, truth: &mut Truth) -> String {
    text.split(' ')
        .map(|symbol| match symbol.split_once('+') {
            Some((left, right)) => format!(
                "{}+{}",
                resolve_symbol(left, words, truth),
                resolve_symbol(right, words, truth)
            ),
            None => resolve_symbol(symbol, words, truth),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `ADJ_NOUN_n` becomes `( [ adj ] & noun )`, or just the noun when the
/// group has no adjective; plain symbols become their word; anything else
/// is already logic-language and stays.
fn resolve_symbol(symbol: &str, words: &WordMap, truth: &mut Truth) -> String {
    let mut term = symbol.to_string();

    for rule in TERM_RULES.iter() {
        let Some(index) = rule
            .pattern
            .captures(&term)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().to_string())
        else {
            continue;
        };
        *truth = truth.deduce(rule.truth);

        let mut parts = term.split('_');
        let modifier = format!("{}_{index}", parts.next().unwrap_or_default());
        let head = format!("{}_{index}", parts.next().unwrap_or_default());

        term = match words.word(&modifier) {
            Some(modifier) => {
                let head = words.word(&head).unwrap_or(&head);
                TermRule::compound(modifier, head)
            }
            None => head,
        };
        break;
    }

    match words.word(&term) {
        Some(word) => word.to_string(),
        None => term,
    }
}
