//! Line-at-a-time translation over a reader and a writer.
//!
//! `encode` reads English sentences and grammar lessons from the same
//! input, so a user teaching a new sentence shape simply keeps typing.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use nars_english::describe::describe_line;
use nars_english::{Operator, Palette, Translator};

/// A terminal-like operator: prompts go to the output, answers come from
/// the input.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Console { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    fn emit(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }
}

impl<R: BufRead, W: Write> Operator for Console<R, W> {
    fn prompt(&mut self, prompt: &str) -> io::Result<()> {
        self.emit(prompt)
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Translate every English line until the input ends. Returns the number
/// of lines read.
pub fn encode<R: BufRead, W: Write>(
    translator: &mut Translator,
    console: &mut Console<R, W>,
) -> Result<usize> {
    let mut lines = 0;
    while let Some(line) = console.next_line()? {
        lines += 1;
        let narsese = translator.process_line(&line, console)?;
        if !narsese.is_empty() {
            console.emit(&narsese)?;
        }
    }
    tracing::debug!(lines, rules = translator.grammar().len(), "input finished");
    Ok(lines)
}

/// Render engine output as English with belief strengths.
pub fn decode<R: BufRead, W: Write>(input: R, mut output: W, palette: &Palette) -> Result<usize> {
    let mut rendered = 0;
    for line in input.lines() {
        let line = line?;
        if let Some(english) = describe_line(&line, palette) {
            writeln!(output, "{english}")?;
            rendered += 1;
        }
    }
    output.flush()?;
    Ok(rendered)
}
