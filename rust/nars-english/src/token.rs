//! Tokenization: splitting a sentence into word tokens.
//!
//! Sentences arrive with their terminal punctuation already removed, so
//! tokenization is mostly whitespace splitting. Two English clitics are
//! split off their host word the way treebank tokenizers do (`bird's` →
//! `bird` `'s`, `doesn't` → `does` `n't`), and punctuation glued to a
//! word becomes its own token.

/// A single token extracted from input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The token's text value, lowercased for lexicon lookup.
    pub value: String,
    /// The original text before normalization.
    pub original: String,
    /// Zero-based position in the token sequence.
    pub position: usize,
    /// What kind of token this is.
    pub kind: TokenKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// A word token (alphabetic, possibly with inner apostrophes or hyphens).
    Word,
    /// A numeric token.
    Number,
    /// Punctuation.
    Punctuation,
}

impl Token {
    /// Whether the original form starts with an uppercase letter.
    pub fn is_capitalized(&self) -> bool {
        self.original.chars().next().is_some_and(char::is_uppercase)
    }
}

const CLITICS: [&str; 2] = ["n't", "'s"];

/// Tokenize input text into a sequence of tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut pieces: Vec<String> = Vec::new();

    for word in text.split_whitespace() {
        let leading = word.len() - word.trim_start_matches(is_separable).len();
        let trimmed = word.trim_matches(is_separable);
        let trailing = word.len() - leading - trimmed.len();

        pieces.extend(word[..leading].chars().map(String::from));
        if !trimmed.is_empty() {
            split_clitic(trimmed, &mut pieces);
        }
        pieces.extend(word[word.len() - trailing..].chars().map(String::from));
    }

    pieces
        .into_iter()
        .enumerate()
        .map(|(position, original)| Token {
            value: original.to_lowercase(),
            kind: classify(&original),
            original,
            position,
        })
        .collect()
}

fn is_separable(c: char) -> bool {
    c.is_ascii_punctuation() && c != '\'' && c != '-' && c != '{' && c != '}'
}

fn split_clitic(word: &str, pieces: &mut Vec<String>) {
    for clitic in CLITICS {
        let Some(split) = word.len().checked_sub(clitic.len()).filter(|&split| split > 0) else {
            continue;
        };
        if let (Some(head), Some(tail)) = (word.get(..split), word.get(split..)) {
            if tail.eq_ignore_ascii_case(clitic) {
                pieces.push(head.to_string());
                pieces.push(tail.to_string());
                return;
            }
        }
    }
    pieces.push(word.to_string());
}

fn classify(piece: &str) -> TokenKind {
    if piece.chars().all(|c| c.is_ascii_digit() || c == '.') && piece.chars().any(|c| c.is_ascii_digit()) {
        TokenKind::Number
    } else if piece.chars().all(|c| c.is_ascii_punctuation()) {
        TokenKind::Punctuation
    } else {
        TokenKind::Word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn originals(text: &str) -> Vec<String> {
        tokenize(text).into_iter().map(|t| t.original).collect()
    }

    #[test]
    fn tokenize_simple_sentence() {
        let tokens = tokenize("Tweety is a yellow bird");
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].value, "tweety");
        assert_eq!(tokens[0].original, "Tweety");
        assert!(tokens[0].is_capitalized());
        assert_eq!(tokens[4].position, 4);
        assert!(tokens.iter().all(|t| t.kind == TokenKind::Word));
    }

    #[test]
    fn tokenize_splits_clitics() {
        assert_eq!(originals("the bird's nest"), vec!["the", "bird", "'s", "nest"]);
        assert_eq!(originals("it doesn't fly"), vec!["it", "does", "n't", "fly"]);
    }

    #[test]
    fn clitics_after_multibyte_words() {
        assert_eq!(originals("Straße's end"), vec!["Straße", "'s", "end"]);
        assert_eq!(originals("İt'S"), vec!["İt", "'S"]);
        assert_eq!(originals("丸n't"), vec!["丸", "n't"]);
        assert_eq!(originals("'s"), vec!["'s"]);
    }

    #[test]
    fn tokenize_separates_punctuation() {
        let tokens = tokenize("cats, dogs");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].original, ",");
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
    }

    #[test]
    fn tokenize_numbers() {
        let tokens = tokenize("John has 3 cats");
        assert_eq!(tokens[2].kind, TokenKind::Number);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("   ").is_empty());
    }
}
