//! Rule-based lemmatization with a part-of-speech hint.
//!
//! Irregular forms come from [`crate::lexicon`]; regular inflections are
//! stripped by suffix rules. When a suffix rule has several candidate
//! stems (`making` → `mak` / `make`), the one the lexicon knows wins.

use crate::lexicon::{
    self, IRREGULAR_ADJECTIVES, IRREGULAR_NOUNS, IRREGULAR_VERBS, irregular,
};

/// The word class used to pick inflection rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
}

/// Reduce a lowercase word to its dictionary form.
pub fn lemmatize(word: &str, pos: PartOfSpeech) -> String {
    match pos {
        PartOfSpeech::Noun => noun_lemma(word),
        PartOfSpeech::Verb => verb_lemma(word),
        PartOfSpeech::Adjective => adjective_lemma(word),
        PartOfSpeech::Adverb => word.to_string(),
    }
}

fn noun_lemma(word: &str) -> String {
    if let Some(lemma) = irregular(IRREGULAR_NOUNS, word) {
        return lemma.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|s| s.len() > 1) {
        return format!("{stem}y");
    }
    for suffix in ["sses", "ches", "shes", "xes", "zes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    if ["ss", "us", "is"].iter().any(|s| word.ends_with(s)) {
        return word.to_string();
    }
    match word.strip_suffix('s') {
        Some(stem) if stem.len() > 2 => stem.to_string(),
        _ => word.to_string(),
    }
}

fn verb_lemma(word: &str) -> String {
    if let Some(lemma) = irregular(IRREGULAR_VERBS, word) {
        return lemma.to_string();
    }
    if lexicon::is_verb(word) {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies").filter(|s| s.len() > 1) {
        return format!("{stem}y");
    }
    for suffix in ["ing", "ed"] {
        if let Some(stem) = word.strip_suffix(suffix).filter(|s| s.len() > 1) {
            return known_stem(stem, lexicon::is_verb);
        }
    }
    if let Some(stem) = word.strip_suffix("es") {
        if ["sh", "ch", "x", "z", "ss", "o"].iter().any(|s| stem.ends_with(s)) {
            return stem.to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) if stem.len() > 1 && !stem.ends_with('s') => stem.to_string(),
        _ => word.to_string(),
    }
}

fn adjective_lemma(word: &str) -> String {
    if let Some(lemma) = irregular(IRREGULAR_ADJECTIVES, word) {
        return lemma.to_string();
    }
    if lexicon::is_adjective(word) {
        return word.to_string();
    }
    for suffix in ["est", "er"] {
        if let Some(stem) = word.strip_suffix(suffix).filter(|s| s.len() > 1) {
            let candidates = stem_candidates(stem);
            if let Some(known) = candidates.into_iter().find(|c| lexicon::is_adjective(c)) {
                return known;
            }
        }
    }
    word.to_string()
}

/// Pick the stem the lexicon knows, else undo consonant doubling, else the bare stem.
fn known_stem(stem: &str, known: fn(&str) -> bool) -> String {
    let candidates = stem_candidates(stem);
    if let Some(found) = candidates.iter().find(|c| known(c)) {
        return found.clone();
    }
    candidates
        .get(2)
        .cloned()
        .unwrap_or_else(|| stem.to_string())
}

/// `[stem, stem + "e", stem with a doubled final consonant undone]`
fn stem_candidates(stem: &str) -> Vec<String> {
    let mut candidates = vec![stem.to_string(), format!("{stem}e")];
    let mut rest = stem.chars();
    if let (Some(last), Some(before)) = (rest.next_back(), rest.next_back()) {
        if last == before && last.is_ascii_alphabetic() && !"aeioulsz".contains(last) {
            candidates.push(format!("{}{last}", rest.as_str()));
        }
    }
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nouns() {
        assert_eq!(lemmatize("birds", PartOfSpeech::Noun), "bird");
        assert_eq!(lemmatize("flies", PartOfSpeech::Noun), "fly");
        assert_eq!(lemmatize("boxes", PartOfSpeech::Noun), "box");
        assert_eq!(lemmatize("houses", PartOfSpeech::Noun), "house");
        assert_eq!(lemmatize("glass", PartOfSpeech::Noun), "glass");
        assert_eq!(lemmatize("mice", PartOfSpeech::Noun), "mouse");
        assert_eq!(lemmatize("bus", PartOfSpeech::Noun), "bus");
        assert_eq!(lemmatize("it", PartOfSpeech::Noun), "it");
    }

    #[test]
    fn verbs() {
        assert_eq!(lemmatize("is", PartOfSpeech::Verb), "be");
        assert_eq!(lemmatize("sings", PartOfSpeech::Verb), "sing");
        assert_eq!(lemmatize("singing", PartOfSpeech::Verb), "sing");
        assert_eq!(lemmatize("making", PartOfSpeech::Verb), "make");
        assert_eq!(lemmatize("running", PartOfSpeech::Verb), "run");
        assert_eq!(lemmatize("chased", PartOfSpeech::Verb), "chase");
        assert_eq!(lemmatize("watches", PartOfSpeech::Verb), "watch");
        assert_eq!(lemmatize("carries", PartOfSpeech::Verb), "carry");
        assert_eq!(lemmatize("sang", PartOfSpeech::Verb), "sing");
        assert_eq!(lemmatize("has", PartOfSpeech::Verb), "have");
    }

    #[test]
    fn adjectives() {
        assert_eq!(lemmatize("bigger", PartOfSpeech::Adjective), "big");
        assert_eq!(lemmatize("larger", PartOfSpeech::Adjective), "large");
        assert_eq!(lemmatize("smallest", PartOfSpeech::Adjective), "small");
        assert_eq!(lemmatize("better", PartOfSpeech::Adjective), "good");
        assert_eq!(lemmatize("yellow", PartOfSpeech::Adjective), "yellow");
        assert_eq!(lemmatize("curious", PartOfSpeech::Adjective), "curious");
    }

    #[test]
    fn multibyte_stems_are_not_split() {
        assert_eq!(lemmatize("丸ed", PartOfSpeech::Verb), "丸");
        assert_eq!(lemmatize("😘ed", PartOfSpeech::Verb), "😘");
        assert_eq!(lemmatize("h₂₂ing", PartOfSpeech::Verb), "h₂₂");
        assert_eq!(lemmatize("丸丸er", PartOfSpeech::Adjective), "丸丸er");
        assert_eq!(
            stem_candidates("₂₂"),
            vec!["₂₂".to_string(), "₂₂e".to_string()]
        );
        assert_eq!(
            stem_candidates("runn"),
            vec!["runn".to_string(), "runne".to_string(), "run".to_string()]
        );
    }

    #[test]
    fn adverbs_are_unchanged() {
        assert_eq!(lemmatize("quickly", PartOfSpeech::Adverb), "quickly");
    }
}
