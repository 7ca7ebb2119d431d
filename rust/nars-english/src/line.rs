//! Per-line classification: commands, sentence mood, negation and tense.

/// Words that mark a sentence as an event in the past.
pub const PAST_MARKERS: [&str; 2] = ["previously", "before"];
/// Words that mark a sentence as a present event.
pub const PRESENT_MARKERS: [&str; 3] = ["now", "currently", "afterwards"];
/// Words that mark a sentence as a future event. "afterwards" is also a
/// present marker; the future tag takes precedence.
pub const FUTURE_MARKERS: [&str; 2] = ["afterwards", "later"];

/// What may follow a marker word for it to count.
const MARKER_ENDINGS: [&str; 3] = [" ", "!", "?"];

/// Event tags the engine understands.
pub const PAST_TAG: &str = ":\\:";
pub const PRESENT_TAG: &str = ":|:";
pub const FUTURE_TAG: &str = ":/:";

/// A line that bypasses translation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `*eternal=true` / `*eternal=false`
    Eternal(bool),
    /// `*motivation=…`, appended after every later sentence.
    Motivation(String),
    /// `*thinkcycles=…`, appended after every later statement batch.
    ThinkCycles(String),
    /// `*teach`, re-teach the previous sentence.
    Teach,
    /// Anything else is forwarded unchanged.
    PassThrough,
}

/// Whether the line is logic-language or a directive rather than English.
pub fn is_command(line: &str) -> bool {
    line.starts_with('*')
        || line.starts_with("//")
        || line.starts_with('(')
        || line.starts_with('<')
        || line.ends_with(PRESENT_TAG)
        || (!line.is_empty() && line.chars().all(|c| c.is_ascii_digit()))
}

/// Interpret a command line, `None` for English.
pub fn command(line: &str) -> Option<Command> {
    if !is_command(line) {
        return None;
    }
    let command = if line.starts_with("*eternal=false") {
        Command::Eternal(false)
    } else if line.starts_with("*eternal=true") {
        Command::Eternal(true)
    } else if let Some(value) = line.strip_prefix("*motivation=") {
        Command::Motivation(value.to_string())
    } else if let Some(value) = line.strip_prefix("*thinkcycles=") {
        Command::ThinkCycles(value.to_string())
    } else if line.starts_with("*teach") {
        Command::Teach
    } else {
        Command::PassThrough
    };
    Some(command)
}

/// Sentence mood, from the final character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Judgment,
    Question,
    Goal,
}

impl Mood {
    pub fn of(line: &str) -> Self {
        if line.ends_with('?') {
            Mood::Question
        } else if line.ends_with('!') {
            Mood::Goal
        } else {
            Mood::Judgment
        }
    }

    pub fn punctuation(&self) -> char {
        match self {
            Mood::Judgment => '.',
            Mood::Question => '?',
            Mood::Goal => '!',
        }
    }
}

/// `" a b "`, lowercased.
pub fn spaced(line: &str) -> String {
    format!(" {} ", line.to_lowercase())
}

/// "not" or "no" as a whole word.
pub fn is_negated(line: &str) -> bool {
    let spaced = spaced(line);
    spaced.contains(" not ") || spaced.contains(" no ")
}

/// Tense read off marker words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tense {
    pub past: bool,
    pub future: bool,
    /// Any marker was present; the sentence describes an event.
    pub event: bool,
}

impl Tense {
    /// Detect the tense of `line`, and rewrite "will be" as "is".
    pub fn detect(line: &str) -> (Tense, String) {
        let spaced = spaced(line);
        let mut tense = Tense {
            past: has_marker(&spaced, &PAST_MARKERS),
            future: has_marker(&spaced, &FUTURE_MARKERS),
            event: has_marker(&spaced, &PAST_MARKERS)
                || has_marker(&spaced, &PRESENT_MARKERS)
                || has_marker(&spaced, &FUTURE_MARKERS),
        };

        let mut line = line.to_string();
        if line.contains(" will be ") {
            line = line.replace(" will be ", " is ");
            tense.future = true;
            tense.event = true;
        }
        (tense, line)
    }

    /// The event tag; future wins over past, present is the fallback.
    pub fn tag(&self) -> &'static str {
        if self.future {
            FUTURE_TAG
        } else if self.past {
            PAST_TAG
        } else {
            PRESENT_TAG
        }
    }
}

fn has_marker(spaced: &str, markers: &[&str]) -> bool {
    markers.iter().any(|word| {
        MARKER_ENDINGS
            .iter()
            .any(|ending| spaced.contains(&format!(" {word}{ending}")))
    })
}

/// Remove every marker word that `original` contains from `line`.
pub fn strip_markers(original: &str, line: &str) -> String {
    let spaced = spaced(original);
    let mut line = line.to_string();
    for ending in MARKER_ENDINGS {
        for word in PAST_MARKERS
            .iter()
            .chain(PRESENT_MARKERS.iter())
            .chain(FUTURE_MARKERS.iter())
        {
            let marker = format!(" {word}{ending}");
            if spaced.contains(&marker) {
                line = format!("{line} ").replace(&marker, "").trim().to_string();
            }
        }
    }
    line
}

/// The text handed to the canonicalizer: punctuation and "not" removed,
/// space padded.
pub fn sentence_text(line: &str) -> String {
    let bare: String = line
        .chars()
        .filter(|c| !matches!(c, '!' | '?' | '.' | ','))
        .collect();
    format!(" {} ", bare.replace(" not ", " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn commands() {
        assert_eq!(command("*eternal=false"), Some(Command::Eternal(false)));
        assert_eq!(command("*eternal=true"), Some(Command::Eternal(true)));
        assert_eq!(
            command("*motivation=<goal --> reached>! :|:"),
            Some(Command::Motivation("<goal --> reached>! :|:".into()))
        );
        assert_eq!(command("*thinkcycles=10"), Some(Command::ThinkCycles("10".into())));
        assert_eq!(command("*teach"), Some(Command::Teach));
        assert_eq!(command("*volume=100"), Some(Command::PassThrough));
        assert_eq!(command("<bird --> animal>. {0.9 0.9}"), Some(Command::PassThrough));
        assert_eq!(command("(a &/ b)."), Some(Command::PassThrough));
        assert_eq!(command("// a comment"), Some(Command::PassThrough));
        assert_eq!(command("300"), Some(Command::PassThrough));
        assert_eq!(command("light on :|:"), Some(Command::PassThrough));
        assert_eq!(command("Tweety is a bird."), None);
    }

    #[test]
    fn moods() {
        assert_eq!(Mood::of("is it a bird?"), Mood::Question);
        assert_eq!(Mood::of("go home!"), Mood::Goal);
        assert_eq!(Mood::of("it is a bird."), Mood::Judgment);
        assert_eq!(Mood::Question.punctuation(), '?');
    }

    #[test]
    fn negation_is_whole_word() {
        assert!(is_negated("Tweety can not fly"));
        assert!(is_negated("No bird is a fish"));
        assert!(!is_negated("the note is nothing"));
    }

    #[test]
    fn tense_markers() {
        let (tense, _) = Tense::detect("the cat ate previously");
        assert!(tense.past && tense.event && !tense.future);
        assert_eq!(tense.tag(), PAST_TAG);

        let (tense, _) = Tense::detect("the door is open now");
        assert!(tense.event && !tense.past && !tense.future);
        assert_eq!(tense.tag(), PRESENT_TAG);

        let (tense, _) = Tense::detect("the bird sings afterwards");
        assert_eq!(tense.tag(), FUTURE_TAG);

        let (tense, line) = Tense::detect("the door will be open");
        assert!(tense.future && tense.event);
        assert_eq!(line, "the door is open");

        let (tense, _) = Tense::detect("the sky is blue");
        assert_eq!(tense, Tense::default());
    }

    #[test]
    fn marker_words_are_stripped() {
        assert_eq!(strip_markers("I sing now", "I sing now"), "I sing");
        assert_eq!(strip_markers("did it rain later?", "did it rain later?"), "did it rain");
        assert_eq!(strip_markers("the sky is blue", "the sky is blue"), "the sky is blue");
    }

    #[test]
    fn sentence_text_drops_punctuation_and_not() {
        assert_eq!(sentence_text("Tweety is not a fish."), " Tweety is a fish ");
        assert_eq!(sentence_text("cats, dogs and birds!"), " cats dogs and birds ");
    }
}
