//! Word lists backing the default tagger and lemmatizer.
//!
//! Closed word classes (determiners, pronouns, prepositions, conjunctions,
//! auxiliaries) are listed exhaustively enough for everyday sentences.
//! Open classes only list base forms that suffix heuristics would get
//! wrong; anything unknown falls through to the heuristics in
//! [`crate::tagger`].

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::tagger::Tag;

pub const DETERMINERS: &[&str] = &[
    "a", "an", "the", "this", "that", "these", "those", "every", "each", "some", "any", "all",
    "no", "another", "which", "either", "neither", "both", "such",
];

pub const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "who", "whom",
    "what", "someone", "something", "somebody", "everyone", "everything", "everybody",
    "anyone", "anything", "nobody", "nothing",
];

pub const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "of", "from", "with", "by", "for", "about", "above", "below", "under",
    "over", "into", "onto", "near", "behind", "between", "through", "after", "during",
    "without", "than", "inside", "outside", "across", "along", "around", "beside",
    "beyond", "toward", "towards", "upon", "within", "against", "among", "beneath", "if",
    "because", "while", "until", "since", "unless", "whether",
];

pub const PARTICLES: &[&str] = &["to", "'s", "up", "off", "out", "down", "away"];

pub const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];

pub const ADVERBS: &[&str] = &[
    "not", "n't", "very", "too", "also", "often", "always", "never", "sometimes", "usually",
    "now", "then", "here", "there", "currently", "previously", "later", "afterwards",
    "before", "again", "already", "still", "just", "soon", "well", "much", "quite",
    "rather", "almost", "even", "only", "together", "how", "when", "where", "why",
];

pub const NUMERALS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "hundred", "thousand", "million",
];

pub const VERBS: &[&str] = &[
    "be", "have", "do", "will", "would", "can", "could", "should", "may", "might", "must",
    "shall", "sing", "fly", "eat", "like", "love", "see", "run", "walk", "swim", "live", "lie",
    "sit", "stand", "give", "take", "make", "know", "want", "need", "go", "come", "get",
    "chase", "bite", "play", "read", "write", "smoke", "open", "close", "contain", "own",
    "hold", "sleep", "drink", "hear", "tell", "show", "teach", "help", "build", "carry",
    "throw", "catch", "kill", "hate", "fear", "hunt", "grow", "speak", "talk", "meet",
    "find", "use", "cause", "say", "think", "feel", "keep", "fall", "lose", "buy", "sell",
    "bring", "leave", "win", "wear", "lead", "feed", "fight", "hide", "ride", "drive",
    "jump", "climb", "push", "pull", "cook", "bark", "meow", "watch", "look", "seem",
    "become", "remain", "follow", "touch", "pick", "drop", "move", "work", "rain", "shine",
    "produce", "prefer", "enjoy", "visit", "call", "ask", "answer", "befriend",
];

pub const ADJECTIVES: &[&str] = &[
    "big", "small", "large", "little", "yellow", "red", "green", "blue", "black", "white",
    "brown", "grey", "gray", "orange", "purple", "pink", "happy", "sad", "old", "young",
    "new", "good", "bad", "hot", "cold", "warm", "tall", "short", "long", "fast", "slow",
    "heavy", "strong", "weak", "dangerous", "beautiful", "wet", "dry", "hungry", "smart",
    "clever", "stupid", "rich", "poor", "high", "low", "full", "empty", "round", "square",
    "soft", "hard", "loud", "quiet", "bright", "dark", "clean", "dirty", "sick", "healthy",
    "alive", "dead", "free", "safe", "true", "false", "friendly", "angry", "afraid", "able",
    "wild", "tame", "sweet", "sour", "bitter", "cute", "ugly", "nice", "great", "tiny",
    "huge", "unlocked", "locked", "closed", "filled", "stressed",
];

pub const NOUNS: &[&str] = &[
    "bird", "animal", "cat", "dog", "fish", "mouse", "man", "woman", "child", "person",
    "people", "garden", "house", "tree", "water", "food", "table", "door", "car", "ball",
    "apple", "room", "city", "friend", "asthma", "penguin", "swan", "robin", "fly", "smoke",
    "drink", "walk", "play", "love", "fear", "cause", "work", "rain", "show", "call",
    "answer", "use",
];

static CLOSED_CLASSES: LazyLock<HashMap<&'static str, Tag>> = LazyLock::new(|| {
    let mut classes = HashMap::new();
    let groups: [(&[&str], Tag); 7] = [
        (ADVERBS, Tag::Adv),
        (NUMERALS, Tag::Num),
        (CONJUNCTIONS, Tag::Conj),
        (PARTICLES, Tag::Prt),
        (ADPOSITIONS, Tag::Adp),
        (PRONOUNS, Tag::Pron),
        (DETERMINERS, Tag::Det),
    ];
    // later groups win for words listed twice ("that", "no")
    for (words, tag) in groups {
        for word in words {
            classes.insert(*word, tag);
        }
    }
    classes
});

/// Tag of a closed-class word, if `word` (lowercase) is one.
pub fn closed_class(word: &str) -> Option<Tag> {
    CLOSED_CLASSES.get(word).copied()
}

pub fn is_verb(lemma: &str) -> bool {
    VERBS.contains(&lemma)
}

pub fn is_adjective(lemma: &str) -> bool {
    ADJECTIVES.contains(&lemma)
}

pub fn is_noun(lemma: &str) -> bool {
    NOUNS.contains(&lemma)
}

/// Known words that are both common nouns and common verbs.
pub fn is_noun_verb(lemma: &str) -> bool {
    is_noun(lemma) && is_verb(lemma)
}

/// Irregular inflections, `(form, lemma)`.
pub const IRREGULAR_VERBS: &[(&str, &str)] = &[
    ("is", "be"), ("are", "be"), ("was", "be"), ("were", "be"), ("am", "be"), ("been", "be"),
    ("being", "be"), ("has", "have"), ("had", "have"), ("does", "do"),
    ("did", "do"), ("done", "do"), ("went", "go"), ("gone", "go"), ("ate", "eat"),
    ("eaten", "eat"), ("saw", "see"), ("seen", "see"), ("sang", "sing"), ("sung", "sing"),
    ("flew", "fly"), ("flown", "fly"), ("flies", "fly"), ("ran", "run"), ("swam", "swim"),
    ("made", "make"), ("took", "take"), ("taken", "take"), ("gave", "give"),
    ("given", "give"), ("knew", "know"), ("known", "know"), ("came", "come"), ("got", "get"),
    ("lay", "lie"), ("lain", "lie"), ("lies", "lie"), ("lying", "lie"), ("sat", "sit"),
    ("stood", "stand"), ("held", "hold"), ("slept", "sleep"), ("drank", "drink"),
    ("heard", "hear"), ("told", "tell"), ("taught", "teach"), ("built", "build"),
    ("caught", "catch"), ("bought", "buy"), ("brought", "bring"), ("thought", "think"),
    ("found", "find"), ("left", "leave"), ("met", "meet"), ("spoke", "speak"),
    ("wrote", "write"), ("written", "write"), ("bit", "bite"), ("bitten", "bite"),
    ("grew", "grow"), ("grown", "grow"), ("threw", "throw"), ("felt", "feel"),
    ("kept", "keep"), ("fell", "fall"), ("lost", "lose"), ("said", "say"), ("sold", "sell"),
    ("won", "win"), ("wore", "wear"), ("led", "lead"), ("fed", "feed"), ("fought", "fight"),
    ("hid", "hide"), ("rode", "ride"), ("drove", "drive"), ("became", "become"),
];

pub const IRREGULAR_NOUNS: &[(&str, &str)] = &[
    ("children", "child"), ("mice", "mouse"), ("men", "man"), ("women", "woman"),
    ("geese", "goose"), ("feet", "foot"), ("teeth", "tooth"), ("people", "people"),
    ("oxen", "ox"), ("wolves", "wolf"), ("knives", "knife"), ("leaves", "leaf"),
    ("lives", "life"), ("wives", "wife"), ("halves", "half"), ("fish", "fish"),
    ("sheep", "sheep"), ("deer", "deer"),
];

pub const IRREGULAR_ADJECTIVES: &[(&str, &str)] = &[
    ("better", "good"), ("best", "good"), ("worse", "bad"), ("worst", "bad"),
    ("more", "much"), ("most", "much"), ("less", "little"), ("least", "little"),
];

pub fn irregular(table: &[(&'static str, &'static str)], form: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(inflected, _)| *inflected == form)
        .map(|(_, lemma)| *lemma)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_class_lookup() {
        assert_eq!(closed_class("the"), Some(Tag::Det));
        assert_eq!(closed_class("that"), Some(Tag::Det));
        assert_eq!(closed_class("in"), Some(Tag::Adp));
        assert_eq!(closed_class("to"), Some(Tag::Prt));
        assert_eq!(closed_class("what"), Some(Tag::Pron));
        assert_eq!(closed_class("and"), Some(Tag::Conj));
        assert_eq!(closed_class("bird"), None);
    }

    #[test]
    fn irregular_forms() {
        assert_eq!(irregular(IRREGULAR_VERBS, "is"), Some("be"));
        assert_eq!(irregular(IRREGULAR_NOUNS, "mice"), Some("mouse"));
        assert_eq!(irregular(IRREGULAR_ADJECTIVES, "better"), Some("good"));
        assert_eq!(irregular(IRREGULAR_VERBS, "sings"), None);
    }

    #[test]
    fn noun_verb_ambiguity() {
        assert!(is_noun_verb("smoke"));
        assert!(!is_noun_verb("bird"));
        assert!(!is_noun_verb("sing"));
    }
}
