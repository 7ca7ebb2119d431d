//! Reverse translation: logic-language lines back to English-like text.
//!
//! A fixed sequence of substitutions recognizes, in order: negation,
//! extensional and intensional sets, images, implications, conjunctions,
//! inheritance, similarity and the remaining products and intersections.
//! What is left of the bracket syntax is then dropped.
//!
//! ```text
//! < {Tweety} --> bird >.        Tweety is bird .
//! <( cat * fish ) --> eat >.    cat fish  is eat .
//! ```
//!
//! Lines using set differences, disjunctions, or the `\1`/`\2` image
//! placeholders have no rendering and translate to the empty string.

use std::sync::LazyLock;

use regex::Regex;

/// ANSI colours for terminal output, or nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub green: &'static str,
    pub yellow: &'static str,
    pub cyan: &'static str,
    pub magenta: &'static str,
    pub red: &'static str,
    pub blue: &'static str,
    pub bold: &'static str,
    pub reset: &'static str,
}

impl Palette {
    pub const fn plain() -> Self {
        Palette {
            green: "",
            yellow: "",
            cyan: "",
            magenta: "",
            red: "",
            blue: "",
            bold: "",
            reset: "",
        }
    }

    pub const fn ansi() -> Self {
        Palette {
            green: "\x1B[32m",
            yellow: "\x1B[33m",
            cyan: "\x1B[36m",
            magenta: "\x1B[35m",
            red: "\x1B[31m",
            blue: "\x1B[34m",
            bold: "\x1B[1m",
            reset: "\x1B[0m",
        }
    }

    pub const fn colored(enabled: bool) -> Self {
        if enabled { Palette::ansi() } else { Palette::plain() }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette::plain()
    }
}

fn pattern(source: &str) -> Regex {
    match Regex::new(source) {
        Ok(regex) => regex,
        Err(error) => panic!("reverse translation pattern {source:?} is invalid: {error}"),
    }
}

static EXTENSIONAL_SET: LazyLock<Regex> = LazyLock::new(|| pattern(r"\{([^><:\(\)\*]*)\}"));
static INTENSIONAL_SET: LazyLock<Regex> = LazyLock::new(|| pattern(r"\[([^><:\(\)\*]*)\]"));
static IMAGE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\(([^><:]*)\s(/1|\\1|/2|\\2)\s([^><:]*)\)"));
static IMPLICATION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"<([^:]*)\s=(/|=|\|)>\s([^:]*)>"));
static CONJUNCTION: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"\(([^:]*)\s&(/|&|\|)\s([^:]*)\)"));
static INHERITANCE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"<([^><:]*)\s(-->)\s([^><:]*)>"));
static SIMILARITY: LazyLock<Regex> = LazyLock::new(|| pattern(r"<([^><:]*)\s(<->)\s([^><:]*)>"));
static COMPOUND: LazyLock<Regex> = LazyLock::new(|| pattern(r"\(([^><:]*)\s(\*|&)\s([^><:]*)\)"));

/// Separators with no English rendering.
const UNTRANSLATABLE: [&str; 5] = [" | ", " \\1 ", " \\2 ", " - ", " ~ "];

/// The colour of a whole engine output line, from its prefix.
fn line_color(line: &str, p: &Palette) -> String {
    if line.starts_with("performing ") || line.starts_with("done with") {
        p.cyan.to_string()
    } else if line.starts_with("Comment: expected:") {
        format!("{}{}", p.bold, p.magenta)
    } else if line.starts_with("Comment:") || line.starts_with("//") {
        p.magenta.to_string()
    } else if line.starts_with("Derived:") || line.starts_with("Revised:") {
        p.yellow.to_string()
    } else if line.starts_with("Answer:")
        || line.starts_with('^')
        || line.contains("decision expectation")
    {
        format!("{}{}", p.bold, p.red)
    } else {
        p.green.to_string()
    }
}

/// Render one logic-language line as English, or `""` when the line uses
/// syntax with no rendering.
pub fn to_english(line: &str, p: &Palette) -> String {
    let base = p.green;
    let line = line
        .trim_end()
        .replace("(! ", &format!("{}not {base}", p.cyan))
        .replace("#1", "it")
        .replace("$1", "it")
        .replace("#2", "thing")
        .replace("$2", "thing");
    let color = line_color(&line, p);

    if UNTRANSLATABLE.iter().any(|separator| line.contains(separator)) {
        return String::new();
    }

    let (g, y, c, m, r) = (p.green, p.yellow, p.cyan, p.magenta, p.red);
    let set = format!("{m}{g}${{1}}{m}{color}");
    let text = EXTENSIONAL_SET.replace_all(&line, set.as_str());
    let text = INTENSIONAL_SET.replace_all(&text, set.as_str());
    let text = IMAGE.replace_all(&text, format!("{y}{g}${{1}}{y} ${{2}} {g}${{3}}{y}{color}").as_str());
    let text = IMPLICATION.replace_all(&text, format!("{c}{g}${{1}}{c} leads to {g}${{3}}{c}{color}").as_str());
    let text = CONJUNCTION.replace_all(&text, format!("{m}{g}${{1}}{m} and {g}${{3}}{m}{color}").as_str());
    let text = INHERITANCE.replace_all(&text, format!("{r}{g}${{1}}{r} is {g}${{3}}{r}{color}").as_str());
    let text = SIMILARITY.replace_all(&text, format!("{r}{g}${{1}}{r} resembles {g}${{3}}{r}{color}").as_str());
    let text = COMPOUND.replace_all(&text, format!("{y}{g}${{1}}{y} {g}${{3}}{y}{color}").as_str());

    let text = text
        .replace(')', "")
        .replace('(', "")
        .replace("||", &format!("{m}or{color}"))
        .replace("==>", &format!("{c}implies{color}"))
        .replace("<=>", &format!("{c}equals{color}"))
        .replace('>', "")
        .replace('<', "")
        .replace("&/", "and")
        .replace(" * ", " ")
        .replace(" & ", " ")
        .replace(" /1", "")
        .replace("/2", "by");

    format!("{color}{text}{}", p.reset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain(line: &str) -> String {
        to_english(line, &Palette::plain())
    }

    #[test]
    fn inheritance_reads_as_is() {
        assert_eq!(plain("< {Tweety} --> bird >."), " Tweety is bird .");
        assert_eq!(plain("<tweety --> bird>. {0.9 0.81}"), "tweety is bird. 0.9 0.81");
    }

    #[test]
    fn properties_and_products() {
        assert_eq!(plain("< {Tweety} --> [ yellow ]>."), " Tweety is  yellow .");
        assert_eq!(plain("<( cat * fish ) --> eat >."), " cat fish  is eat .");
    }

    #[test]
    fn implication_negation_and_variables() {
        assert_eq!(plain("<<$1 --> bird> ==> <$1 --> animal>>."), "it is bird leads to it is animal.");
        assert_eq!(plain("(! < {Tweety} --> fish >)."), "not  Tweety is fish .");
        assert_eq!(plain("<a <-> b>."), "a resembles b.");
    }

    #[test]
    fn unsupported_separators_are_skipped() {
        assert_eq!(plain("<(a | b) --> c>."), "");
        assert_eq!(plain("<(a - b) --> c>."), "");
        assert_eq!(plain("<(a ~ b) --> c>."), "");
    }

    #[test]
    fn colours_follow_line_kind() {
        let p = Palette::ansi();
        let answer = to_english("Answer: <a --> b>.", &p);
        assert!(answer.starts_with("\x1B[1m\x1B[31m"));
        assert!(answer.ends_with("\x1B[0m"));

        let derived = to_english("Derived: <a --> b>.", &p);
        assert!(derived.starts_with("\x1B[33m"));

        let input = to_english("<a --> b>.", &p);
        assert!(input.starts_with("\x1B[32m"));
    }
}
