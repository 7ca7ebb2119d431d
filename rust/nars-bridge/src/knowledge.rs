//! Stored knowledge lines.
//!
//! Saved knowledge writes truth values as `%frequency;confidence%`, the
//! engine reads them as `{frequency confidence}`:
//!
//! ```text
//! <bird --> animal>. %0.9;0.9%    →    <bird --> animal>. {0.9 0.9}
//! ```

use std::sync::LazyLock;

use regex::Regex;

static STORED_TRUTH: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"^(.*?)\s+%([0-9.]+);([0-9.]+)%") {
        Ok(regex) => regex,
        Err(error) => panic!("stored truth pattern is invalid: {error}"),
    }
});

/// The engine form of one stored line, or `None` for blanks and comments.
///
/// Lines whose truth value does not parse are passed through unchanged.
pub fn normalize_line(line: &str) -> Option<String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with("//") {
        return None;
    }
    if !line.contains('%') {
        return Some(line.to_string());
    }
    match STORED_TRUTH.captures(line) {
        Some(captures) => Some(format!(
            "{} {{{} {}}}",
            &captures[1], &captures[2], &captures[3]
        )),
        None => {
            tracing::debug!(line, "stored truth value does not parse, passing through");
            Some(line.to_string())
        }
    }
}

pub fn normalize<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .filter_map(|line| normalize_line(line.as_ref()))
        .collect()
}
