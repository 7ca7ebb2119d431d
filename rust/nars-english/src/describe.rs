//! Belief-strength descriptions for engine output.
//!
//! Engine answers carry a truth value in one of three shapes:
//!
//! ```text
//! Answer: <tweety --> bird>. Truth: frequency=0.900000, confidence=0.810000
//! <tweety --> bird>. {0.9 0.81}
//! <swan --> penguin>. 1.000000 0.393204
//! ```
//!
//! [`describe_line`] renders the statement with [`to_english`] and puts a
//! `(FREQUENCY | CONFIDENCE)` descriptor in front of it.

use std::sync::LazyLock;

use regex::Regex;

use crate::reverse::{Palette, to_english};
use crate::truth::Truth;

fn pattern(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(regex) => regex,
        Err(error) => panic!("truth pattern {source:?} is invalid: {error}"),
    }
}

static LABELLED: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"Truth: frequency=([0-9.]+), confidence=([0-9.]+)"));
static BRACED: LazyLock<Regex> = LazyLock::new(|| pattern(r"\{([0-9.]+) ([0-9.]+)\}"));
static TRAILING: LazyLock<Regex> = LazyLock::new(|| pattern(r"([0-9.]+) ([0-9.]+)$"));

static TRAILING_PAIR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\s+[0-9]+\.[0-9]+\s+[0-9]+\.[0-9]+\s*$"));
static TRAILING_NUMBER: LazyLock<Regex> = LazyLock::new(|| pattern(r"\s+[0-9]+\.[0-9]+\s*$"));

pub fn frequency_descriptor(frequency: f64) -> &'static str {
    if frequency < 0.01 {
        "DEFINITELY FALSE"
    } else if frequency < 0.2 {
        "VERY UNLIKELY"
    } else if frequency < 0.4 {
        "SOMEWHAT UNLIKELY"
    } else if frequency < 0.45 {
        "SLIGHTLY UNLIKELY"
    } else if frequency > 0.55 && frequency < 0.6 {
        "SLIGHTLY LIKELY"
    } else if frequency <= 0.55 {
        "UNCERTAIN"
    } else if frequency < 0.8 {
        "SOMEWHAT LIKELY"
    } else if frequency < 0.99 {
        "VERY LIKELY"
    } else {
        "DEFINITELY TRUE"
    }
}

pub fn confidence_descriptor(confidence: f64) -> &'static str {
    if confidence < 0.05 {
        "EXTREMELY UNCERTAIN"
    } else if confidence < 0.2 {
        "VERY UNCERTAIN"
    } else if confidence < 0.4 {
        "SOMEWHAT UNCERTAIN"
    } else if confidence < 0.6 {
        "MODERATELY CONFIDENT"
    } else if confidence < 0.8 {
        "CONFIDENT"
    } else if confidence < 0.95 {
        "VERY CONFIDENT"
    } else {
        "EXTREMELY CONFIDENT"
    }
}

/// `(VERY LIKELY | CONFIDENT)`, coloured by how good the news is.
pub fn describe_truth(truth: Truth, p: &Palette) -> String {
    let frequency = frequency_descriptor(truth.frequency);
    let confidence = confidence_descriptor(truth.confidence);

    let frequency_color = if frequency.contains("UNLIKELY") || frequency.contains("FALSE") {
        p.red
    } else if frequency.contains("LIKELY") || frequency.contains("TRUE") {
        p.green
    } else {
        p.yellow
    };
    let confidence_color = if confidence.contains("UNCERTAIN") {
        p.blue
    } else {
        p.green
    };

    format!(
        "({frequency_color}{frequency}{reset} | {confidence_color}{confidence}{reset})",
        reset = p.reset
    )
}

/// The truth value an engine output line carries, if any.
pub fn parse_truth(line: &str) -> Option<Truth> {
    [&*LABELLED, &*BRACED, &*TRAILING]
        .into_iter()
        .find_map(|regex| regex.captures(line))
        .and_then(|captures| {
            let frequency = captures.get(1)?.as_str().parse().ok()?;
            let confidence = captures.get(2)?.as_str().parse().ok()?;
            Some(Truth::new(frequency, confidence))
        })
}

/// English for one engine output line with its belief strength in front,
/// or `None` for comments and lines with no rendering.
pub fn describe_line(line: &str, p: &Palette) -> Option<String> {
    if line.trim().starts_with("//") {
        return None;
    }
    let translation = to_english(line, p);
    if translation.is_empty() {
        return None;
    }

    match parse_truth(line) {
        Some(truth) => {
            let translation = TRAILING_PAIR.replace(&translation, "");
            let translation = TRAILING_NUMBER.replace(&translation, "");
            Some(format!("{} {}", describe_truth(truth, p), capitalize(&translation)))
        }
        None => Some(capitalize(&translation)),
    }
}

/// Describe every non-blank line of an engine response.
pub fn render_output(output: &str, p: &Palette) -> String {
    output
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| describe_line(line, p))
        .collect::<Vec<_>>()
        .join("\n")
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
