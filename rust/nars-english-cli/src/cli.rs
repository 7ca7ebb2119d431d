use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use nars_english::TranslatorConfig;

#[derive(Debug, Parser)]
#[command(name = "nars-english")]
#[command(bin_name = "nars-english")]
#[command(about = "Translate between English and Narsese", long_about = None)]
pub struct NarsEnglishCli {
    /// Log cascade diagnostics to stderr and emit `//` diagnostics inline
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// English lines on stdin to Narsese on stdout
    Encode {
        /// JSON translator configuration
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Append `{frequency confidence}` to every statement
        #[arg(short, long)]
        truth: bool,

        /// Never tag statements as events
        #[arg(short, long)]
        eternal: bool,
    },
    /// Engine output lines on stdin to English on stdout
    Decode {
        #[arg(long)]
        no_color: bool,
    },
}

impl NarsEnglishCli {
    /// The translator configuration for `encode`: the JSON file if one was
    /// given, then the flags on top.
    pub fn translator_config(&self) -> Result<TranslatorConfig> {
        let Command::Encode {
            config,
            truth,
            eternal,
        } = &self.command
        else {
            return Ok(TranslatorConfig::default().with_verbose(self.verbose));
        };

        let mut translator = match config {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                TranslatorConfig::from_json(&json)
                    .with_context(|| format!("parsing {}", path.display()))?
            }
            None => TranslatorConfig::default(),
        };
        if *truth {
            translator = translator.with_output_truth(true);
        }
        if *eternal {
            translator = translator.with_eternal(true).with_tense_from_sentence(false);
        }
        if self.verbose {
            translator = translator.with_verbose(true);
        }
        Ok(translator)
    }
}
