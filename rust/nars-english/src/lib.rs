//! # nars-english
//!
//! An English input channel for a NARS reasoner: a shallow parser that
//! turns simple English sentences into Narsese statements, learns new
//! sentence shapes from the operator, and renders Narsese output back as
//! English with a belief-strength description.
//!
//! ## Pipeline
//!
//! ```text
//! line → classify (command? mood, negation, tense)
//!      → canonicalize (tokens, tags, lemmas, indexed type string)
//!      → cascade (syntax → statements → terms, truth by deduction)
//!      → valid? emit statements : ask the operator and learn a rule
//! ```
//!
//! Every rewrite that fires discounts the sentence's truth value, and a
//! rule learned twice has its truth revised rather than being stored
//! twice. Learned rules are tried before the built-in ones.
//!
//! ## Example
//!
//! ```
//! use nars_english::{Translator, grammar::Silent, reverse::{Palette, to_english}};
//!
//! let mut translator = Translator::default();
//! let narsese = translator.process_line("Tweety is a bird.", &mut Silent).unwrap();
//! assert_eq!(narsese, "< {Tweety} --> bird >.");
//!
//! assert_eq!(to_english(&narsese, &Palette::plain()), " Tweety is bird .");
//! ```

pub mod canonical;
pub mod cascade;
pub mod config;
pub mod describe;
pub mod error;
pub mod grammar;
pub mod lemma;
pub mod lexicon;
pub mod line;
pub mod reverse;
pub mod rule;
pub mod tagger;
pub mod token;
pub mod translator;
pub mod truth;

pub use config::TranslatorConfig;
pub use error::TranslateError;
pub use grammar::{Operator, ScriptedOperator};
pub use reverse::Palette;
pub use translator::Translator;
pub use truth::Truth;
