//! Part-of-speech tagging.
//!
//! The translator only needs coarse, universal-style tags. Anything that
//! can assign them implements [`Tagger`]; [`LexiconTagger`] is the default,
//! a deterministic tagger built from the closed-class word lists in
//! [`crate::lexicon`] and suffix heuristics for open-class words.

use crate::lemma::{PartOfSpeech, lemmatize};
use crate::lexicon;
use crate::token::{Token, TokenKind};

/// Coarse part-of-speech tag, before the translator folds it into a
/// [`Category`](crate::canonical::Category).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Adj,
    Adp,
    Adv,
    Conj,
    Det,
    Noun,
    Num,
    Prt,
    Pron,
    Verb,
    Punct,
    Other,
}

impl Tag {
    /// Part of speech the lemmatizer should assume for this tag, if any.
    pub fn part_of_speech(self) -> Option<PartOfSpeech> {
        match self {
            Tag::Noun => Some(PartOfSpeech::Noun),
            Tag::Verb => Some(PartOfSpeech::Verb),
            Tag::Adj => Some(PartOfSpeech::Adjective),
            Tag::Adv => Some(PartOfSpeech::Adverb),
            _ => None,
        }
    }
}

/// Assigns tags and lemmas to a tokenized sentence.
pub trait Tagger {
    /// One tag per token, in order.
    fn tag(&self, tokens: &[Token]) -> Vec<Tag>;

    /// The dictionary form of `word` (lowercase) read as `tag`.
    fn lemmatize(&self, word: &str, tag: Tag) -> String {
        match tag.part_of_speech() {
            Some(pos) => lemmatize(word, pos),
            None => word.to_string(),
        }
    }
}

/// Possessive determiners, after which a noun/verb-ambiguous word is a noun.
const POSSESSIVES: &[&str] = &["my", "your", "his", "her", "its", "our", "their", "'s"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "ive", "able", "ible", "al", "ic", "less", "ish", "ary",
];

/// Lexicon lookup first, then suffix heuristics, then noun.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        LexiconTagger
    }

    fn tag_word(&self, token: &Token, previous: Option<(&Token, Tag)>) -> Tag {
        let word = token.value.as_str();

        if let Some(tag) = lexicon::closed_class(word) {
            return tag;
        }

        let as_noun = lemmatize(word, PartOfSpeech::Noun);
        let as_verb = lemmatize(word, PartOfSpeech::Verb);

        if lexicon::is_noun_verb(&as_noun) || lexicon::is_noun_verb(&as_verb) {
            return match previous {
                None => Tag::Noun,
                Some((prev, _)) if prev.value == "to" => Tag::Verb,
                Some((prev, _)) if POSSESSIVES.contains(&prev.value.as_str()) => Tag::Noun,
                Some((_, Tag::Det | Tag::Adj | Tag::Adp | Tag::Num)) => Tag::Noun,
                Some(_) => Tag::Verb,
            };
        }

        if lexicon::irregular(lexicon::IRREGULAR_VERBS, word).is_some() {
            return Tag::Verb;
        }
        if lexicon::is_adjective(&lemmatize(word, PartOfSpeech::Adjective)) {
            return Tag::Adj;
        }
        if lexicon::is_noun(&as_noun) {
            return Tag::Noun;
        }
        if lexicon::is_verb(&as_verb) {
            return Tag::Verb;
        }
        if token.is_capitalized() {
            return Tag::Noun;
        }

        suffix_tag(word)
    }
}

fn suffix_tag(word: &str) -> Tag {
    if word.len() > 4 && word.ends_with("ly") {
        Tag::Adv
    } else if word.len() > 4 && (word.ends_with("ing") || word.ends_with("ed")) {
        Tag::Verb
    } else if word.len() > 4 && ADJECTIVE_SUFFIXES.iter().any(|s| word.ends_with(s)) {
        Tag::Adj
    } else {
        Tag::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, tokens: &[Token]) -> Vec<Tag> {
        let mut tags: Vec<Tag> = Vec::with_capacity(tokens.len());
        for (i, token) in tokens.iter().enumerate() {
            let tag = match token.kind {
                TokenKind::Punctuation => Tag::Punct,
                TokenKind::Number => Tag::Num,
                TokenKind::Word => {
                    let previous = i.checked_sub(1).map(|p| (&tokens[p], tags[p]));
                    self.tag_word(token, previous)
                }
            };
            tags.push(tag);
        }
        tags
    }

    fn lemmatize(&self, word: &str, tag: Tag) -> String {
        match tag {
            // pronouns and numerals keep their surface form
            Tag::Pron | Tag::Num => word.to_string(),
            _ => match tag.part_of_speech() {
                Some(pos) => lemmatize(word, pos),
                None => word.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::tokenize;

    fn tags(text: &str) -> Vec<Tag> {
        LexiconTagger::new().tag(&tokenize(text))
    }

    #[test]
    fn tags_simple_copula_sentence() {
        assert_eq!(
            tags("Tweety is a yellow bird that sings"),
            vec![
                Tag::Noun,
                Tag::Verb,
                Tag::Det,
                Tag::Adj,
                Tag::Noun,
                Tag::Det,
                Tag::Verb
            ]
        );
    }

    #[test]
    fn resolves_noun_verb_ambiguity_from_context() {
        assert_eq!(tags("birds fly"), vec![Tag::Noun, Tag::Verb]);
        assert_eq!(tags("the fly"), vec![Tag::Det, Tag::Noun]);
        assert_eq!(tags("i want to walk"), vec![Tag::Pron, Tag::Verb, Tag::Prt, Tag::Verb]);
        assert_eq!(tags("his love"), vec![Tag::Pron, Tag::Noun]);
    }

    #[test]
    fn falls_back_to_suffixes() {
        assert_eq!(tags("quickly"), vec![Tag::Adv]);
        assert_eq!(tags("the glorious blorping"), vec![Tag::Det, Tag::Adj, Tag::Verb]);
        assert_eq!(tags("the zorb"), vec![Tag::Det, Tag::Noun]);
    }

    #[test]
    fn unknown_capitalized_words_are_nouns() {
        assert_eq!(tags("Fluffly"), vec![Tag::Noun]);
    }

    #[test]
    fn numbers_and_punctuation() {
        assert_eq!(tags("3 cats ;"), vec![Tag::Num, Tag::Noun, Tag::Punct]);
    }

    #[test]
    fn lemmatizes_by_tag() {
        let tagger = LexiconTagger::new();
        assert_eq!(tagger.lemmatize("sings", Tag::Verb), "sing");
        assert_eq!(tagger.lemmatize("birds", Tag::Noun), "bird");
        assert_eq!(tagger.lemmatize("its", Tag::Pron), "its");
        assert_eq!(tagger.lemmatize("the", Tag::Det), "the");
    }
}
