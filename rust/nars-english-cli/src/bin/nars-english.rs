use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::Parser;
use nars_english::{Palette, Translator};
use nars_english_cli::cli::{Command, NarsEnglishCli};
use nars_english_cli::session::{self, Console};

fn init_tracing(verbose: bool) {
    use tracing_subscriber::filter::EnvFilter;
    use tracing_subscriber::{fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("nars_english=debug,nars_english_cli=debug,info")
        } else {
            EnvFilter::new("warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr))
        .init();
}

pub fn main() -> Result<()> {
    let cli = NarsEnglishCli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Command::Encode { .. } => {
            let mut translator = Translator::new(cli.translator_config()?);
            let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
            session::encode(&mut translator, &mut console)?;
        }
        Command::Decode { no_color } => {
            let palette = Palette::colored(!no_color && io::stdout().is_terminal());
            session::decode(io::stdin().lock(), io::stdout().lock(), &palette)?;
        }
    }
    Ok(())
}
