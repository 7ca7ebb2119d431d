//! The built-in rewrite tables.
//!
//! Patterns are regular expressions over a space-padded indexed type
//! string; `([0-9]*)` captures a group index and `${n}` in a replacement
//! refers back to it.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::TranslateError;
use crate::truth::Truth;

/// A pure structural rewrite, no truth effect.
#[derive(Debug, Clone)]
pub struct SyntacticRule {
    pub pattern: Regex,
    pub replacement: &'static str,
}

/// A clause-shape rewrite that emits a statement skeleton.
#[derive(Debug, Clone)]
pub struct StatementRule {
    pub pattern: Regex,
    pub replacement: String,
    /// Discount folded into the sentence truth when the rule fires.
    pub truth: Truth,
    /// Logical time the rule was last learned or revised; 0 for built-ins.
    pub recency: u64,
}

impl StatementRule {
    pub fn new(
        pattern: &str,
        replacement: impl Into<String>,
        truth: Truth,
        recency: u64,
    ) -> Result<Self, TranslateError> {
        Ok(StatementRule {
            pattern: compile(pattern)?,
            replacement: replacement.into(),
            truth,
            recency,
        })
    }
}

/// Turns a single `MOD_HEAD_n` symbol into a compound term.
#[derive(Debug, Clone)]
pub struct TermRule {
    pub pattern: Regex,
    pub truth: Truth,
}

impl TermRule {
    /// Render `( [ modifier ] & head )`.
    pub fn compound(modifier: &str, head: &str) -> String {
        format!("( [ {modifier} ] & {head} )")
    }
}

pub fn compile(pattern: &str) -> Result<Regex, TranslateError> {
    Regex::new(pattern).map_err(|source| TranslateError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Compile a pattern from one of the literal tables below.
fn builtin(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(error) => panic!("built-in rewrite pattern {pattern:?} is invalid: {error}"),
    }
}

const RULE_TRUTH: Truth = Truth::new(1.0, 0.99);
const RESIDUAL_TRUTH: Truth = Truth::new(1.0, 0.90);

const SYNTACTIC: [(&str, &str); 8] = [
    // two verbs in a row are far more often a verb and a participle adjective
    (r" VERB_([0-9]*) VERB_([0-9]*) ", " VERB_${1} ADJ_${2} "),
    (r" BE_([0-9]*) ADP_([0-9]*) ", " ADP_${2} "),
    (r" BE_([0-9]*) ADV_VERB_([0-9]*) ", " ADV_VERB_${2} "),
    (r" DET_([0-9]*) ", " "),
    (r" ADJ_([0-9]*) NOUN_([0-9]*) ", " ADJ_NOUN_${2} "),
    (r" NOUN_([0-9]*) ", " ADJ_NOUN_${1} "),
    (r" ADV_([0-9]*) VERB_([0-9]*) ", " ADV_VERB_${2} "),
    (r" VERB_([0-9]*) ", " ADV_VERB_${1} "),
];

const STATEMENTS: [(&str, &str, Truth); 12] = [
    // conditional
    (
        r"\A(.*) IF_([0-9]*) (.*)\z",
        " < ${3} =/> ${1} > ",
        RULE_TRUTH,
    ),
    // relation through a verb and a preposition, "lies in", "sits on"
    (
        r" ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " < ( ADJ_NOUN_${1} * ADJ_NOUN_${4} ) --> ADV_VERB_${2}+ADP_${3} > ",
        RULE_TRUTH,
    ),
    (
        r" ADJ_NOUN_([0-9]*) BE_([0-9]*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " < ( ADJ_NOUN_${1} * ADJ_NOUN_${4} ) --> BE_${2}+ADP_${3} > ",
        RULE_TRUTH,
    ),
    // "is the owner of"
    (
        r" ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_NOUN_([0-9]*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " < ( ADJ_NOUN_${1} * ADJ_NOUN_${5} ) --> ADJ_NOUN_${3}+ADP_${4} > ",
        RULE_TRUTH,
    ),
    // "is larger than"
    (
        r" ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_([0-9]*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " < ( ADJ_NOUN_${1} * ADJ_NOUN_${5} ) --> ADJ_${3}+ADP_${4} > ",
        RULE_TRUTH,
    ),
    // subject verb object object
    (
        r" ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) ADJ_NOUN_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " <(( ADJ_NOUN_${1} * ADJ_NOUN_${3} ) * ADJ_NOUN_${4} ) --> ADV_VERB_${2} > ",
        RULE_TRUTH,
    ),
    // subject copula complement
    (
        r" ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " < ADJ_NOUN_${1} --> ADJ_NOUN_${3} > ",
        RULE_TRUTH,
    ),
    // subject verb object
    (
        r" ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " <( ADJ_NOUN_${1} * ADJ_NOUN_${3} ) --> ADV_VERB_${2} > ",
        RULE_TRUTH,
    ),
    (
        r" ADJ_NOUN_([0-9]*) BE_([0-9]*) ADJ_([0-9]*) ",
        " < ADJ_NOUN_${1} --> [ ADJ_${3} ]> ",
        RULE_TRUTH,
    ),
    (
        r" ADJ_NOUN_([0-9]*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " <( ADJ_NOUN_${1} * ADJ_NOUN_${3} ) --> ADP_${2} > ",
        RULE_TRUTH,
    ),
    // attachment with leftovers in between, split into two statements
    (
        r" ADJ_NOUN_([0-9]*) (.*) ADP_([0-9]*) ADJ_NOUN_([0-9]*) ",
        " ADJ_NOUN_${1} ${2} , < ( ADJ_NOUN_${1} * ADJ_NOUN_${4} ) --> ADP_${3} > ",
        RESIDUAL_TRUTH,
    ),
    // intransitive
    (
        r" ADJ_NOUN_([0-9]*) ADV_VERB_([0-9]*) ",
        " < ADJ_NOUN_${1} --> [ ADV_VERB_${2} ] > ",
        RULE_TRUTH,
    ),
];

const TERMS: [&str; 2] = [r"^ADJ_NOUN_([0-9]*)", r"^ADV_VERB_([0-9]*)"];

/// Structural simplifications, in application order.
pub static SYNTACTIC_RULES: LazyLock<Vec<SyntacticRule>> = LazyLock::new(|| {
    SYNTACTIC
        .iter()
        .map(|(pattern, replacement)| SyntacticRule {
            pattern: builtin(pattern),
            replacement,
        })
        .collect()
});

/// Clause shapes, in priority order.
pub static STATEMENT_RULES: LazyLock<Vec<StatementRule>> = LazyLock::new(|| {
    STATEMENTS
        .iter()
        .map(|(pattern, replacement, truth)| StatementRule {
            pattern: builtin(pattern),
            replacement: replacement.to_string(),
            truth: *truth,
            recency: 0,
        })
        .collect()
});

/// Modifier + head spans.
pub static TERM_RULES: LazyLock<Vec<TermRule>> = LazyLock::new(|| {
    TERMS
        .iter()
        .map(|pattern| TermRule {
            pattern: builtin(pattern),
            truth: RULE_TRUTH,
        })
        .collect()
});
