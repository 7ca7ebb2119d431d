//! Canonicalization: from a raw sentence to its lemmatized form and its
//! indexed type string.
//!
//! Every token becomes a symbol `CATEGORY_index`. The index groups a
//! governing noun with the modifiers in front of it: a new group starts at
//! the first token, after every noun, and at every adposition or
//! conditional marker.
//!
//! ```text
//! Tweety  is    a      yellow  bird    that   sings
//! NOUN_1  BE_2  DET_2  ADJ_2   NOUN_2  DET_3  VERB_3
//! ```
//!
//! The lemmatized sentence and the type string are token-aligned, so each
//! can be translated into the other through a [`WordMap`].
//!
//! Capitalized nouns the lexicon does not know are taken for proper names
//! and wrapped as instances, keeping their case (`Tweety` → `{Tweety}`).
//! A capitalized common noun is only lemmatized, so "Birds sing" speaks
//! about `bird`, not `{Birds}`.

use std::fmt;

use indexmap::IndexMap;

use crate::lexicon;
use crate::tagger::{Tag, Tagger};
use crate::token::tokenize;

/// The categories the rewrite rules are written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Adj,
    Adp,
    Adv,
    /// The copula, any form of "be".
    Be,
    Conj,
    Det,
    /// The conditional marker "if".
    If,
    Noun,
    Verb,
    Punct,
    Other,
}

impl Category {
    /// Fold a tagger tag and its lemma into a category.
    pub fn from_tag(tag: Tag, lemma: &str) -> Self {
        match (lemma, tag) {
            ("be", _) => Category::Be,
            ("if", _) => Category::If,
            (_, Tag::Pron | Tag::Num | Tag::Noun) => Category::Noun,
            (_, Tag::Prt | Tag::Adp) => Category::Adp,
            (_, Tag::Adj) => Category::Adj,
            (_, Tag::Adv) => Category::Adv,
            (_, Tag::Conj) => Category::Conj,
            (_, Tag::Det) => Category::Det,
            (_, Tag::Verb) => Category::Verb,
            (_, Tag::Punct) => Category::Punct,
            (_, Tag::Other) => Category::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Adj => "ADJ",
            Category::Adp => "ADP",
            Category::Adv => "ADV",
            Category::Be => "BE",
            Category::Conj => "CONJ",
            Category::Det => "DET",
            Category::If => "IF",
            Category::Noun => "NOUN",
            Category::Verb => "VERB",
            Category::Punct => "PUNCT",
            Category::Other => "X",
        }
    }

    fn opens_group(&self) -> bool {
        matches!(self, Category::Adp | Category::If)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One canonicalized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedWord {
    /// Lemma, or `{Original}` for a named instance.
    pub word: String,
    pub category: Category,
    /// Index of the group this token belongs to, starting at 1.
    pub index: usize,
}

impl TaggedWord {
    /// The `CATEGORY_index` symbol of this token.
    pub fn symbol(&self) -> String {
        format!("{}_{}", self.category, self.index)
    }
}

/// A canonicalized sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canonical {
    pub words: Vec<TaggedWord>,
}

impl Canonical {
    /// Lemmatized sentence, space separated and space padded.
    pub fn sentence(&self) -> String {
        pad(self.words.iter().map(|w| w.word.as_str()))
    }

    /// Indexed type string, space separated and space padded.
    pub fn types(&self) -> String {
        let symbols: Vec<String> = self.words.iter().map(TaggedWord::symbol).collect();
        pad(symbols.iter().map(String::as_str))
    }

    /// Both directions of the word/symbol correspondence.
    pub fn word_map(&self) -> WordMap {
        let mut by_symbol = IndexMap::new();
        let mut by_word = IndexMap::new();
        for word in &self.words {
            let symbol = word.symbol();
            by_symbol.insert(symbol.clone(), word.word.clone());
            by_word.insert(word.word.clone(), symbol);
        }
        WordMap { by_symbol, by_word }
    }
}

/// `" a b c "`, or `" "` for nothing.
fn pad<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = items.collect();
    format!(" {} ", joined.join(" "))
}

/// Maps between type symbols and words of a single sentence.
///
/// When a symbol or word occurs more than once, the later occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordMap {
    by_symbol: IndexMap<String, String>,
    by_word: IndexMap<String, String>,
}

impl WordMap {
    /// The word a type symbol stands for.
    pub fn word(&self, symbol: &str) -> Option<&str> {
        self.by_symbol.get(symbol).map(String::as_str)
    }

    /// The type symbol a word was given.
    pub fn symbol(&self, word: &str) -> Option<&str> {
        self.by_word.get(word).map(String::as_str)
    }
}

/// Tokenize, tag, lemmatize and index a sentence.
pub fn canonicalize(text: &str, tagger: &dyn Tagger) -> Canonical {
    let tokens = tokenize(text);
    let tags = tagger.tag(&tokens);

    let mut words: Vec<TaggedWord> = Vec::with_capacity(tokens.len());
    let mut index = 0;

    for (token, tag) in tokens.iter().zip(tags) {
        let lemma = tagger.lemmatize(&token.value, tag);
        let category = Category::from_tag(tag, &lemma);

        let opens = match words.last() {
            None => true,
            Some(previous) => previous.category == Category::Noun || category.opens_group(),
        };
        if opens {
            index += 1;
        }

        let word = if token.is_capitalized()
            && category == Category::Noun
            && !lexicon::is_noun(&lemma)
        {
            format!("{{{}}}", token.original)
        } else {
            lemma
        };

        words.push(TaggedWord {
            word,
            category,
            index,
        });
    }

    Canonical { words }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::LexiconTagger;
    use pretty_assertions::assert_eq;

    fn canonical(text: &str) -> Canonical {
        canonicalize(text, &LexiconTagger::new())
    }

    #[test]
    fn indexes_noun_groups() {
        let c = canonical(" Tweety is a yellow bird that sings ");
        assert_eq!(c.sentence(), " {Tweety} be a yellow bird that sing ");
        assert_eq!(c.types(), " NOUN_1 BE_2 DET_2 ADJ_2 NOUN_2 DET_3 VERB_3 ");
    }

    #[test]
    fn adpositions_and_conditionals_open_groups() {
        let c = canonical("the cat sits on the mat");
        assert_eq!(c.types(), " DET_1 NOUN_1 VERB_2 ADP_3 DET_3 NOUN_3 ");

        let c = canonical("birds sing if it rains");
        assert_eq!(c.sentence(), " bird sing if it rain ");
        assert_eq!(c.types(), " NOUN_1 VERB_2 IF_3 NOUN_3 VERB_4 ");
    }

    #[test]
    fn particles_fold_into_adpositions() {
        let c = canonical("i want to walk");
        assert_eq!(c.types(), " NOUN_1 VERB_2 ADP_3 VERB_3 ");
    }

    #[test]
    fn only_unknown_capitalized_nouns_are_instances() {
        let c = canonical("Birds like What");
        assert_eq!(c.sentence(), " bird like {What} ");

        let c = canonical("The dog");
        assert_eq!(c.sentence(), " the dog ");
    }

    #[test]
    fn word_map_translates_both_ways() {
        let c = canonical("Tweety is a bird");
        let map = c.word_map();
        assert_eq!(map.word("NOUN_1"), Some("{Tweety}"));
        assert_eq!(map.word("NOUN_2"), Some("bird"));
        assert_eq!(map.symbol("be"), Some("BE_2"));
        assert_eq!(map.symbol("fish"), None);
        assert_eq!(map.word("ADJ_2"), None);
    }

    #[test]
    fn empty_input() {
        let c = canonical("   ");
        assert!(c.words.is_empty());
        assert_eq!(c.types(), "  ");
    }
}
