use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Context;
use clap::Parser;

use diceware::{settings, Diceware, Error};

#[derive(Parser)]
#[command(name = "diceware")]
#[command(about = "Generate diceware passphrases from a wordlist of CODE<TAB>WORD lines")]
struct Cli {
    #[arg(
        short = 'c',
        value_name = "count",
        help = "Number of passphrases to print",
        default_value_t = 1,
        value_parser = clap::value_parser!(u32).range(1..=65536)
    )]
    count: u32,
    #[arg(long, value_name = "path", help = "Settings file to use instead of the default one")]
    config: Option<PathBuf>,
    #[arg(value_name = "file", help = "Wordlist file")]
    file: PathBuf,
    #[arg(
        value_name = "words",
        help = "Number of words in each passphrase",
        value_parser = clap::value_parser!(u32).range(1..=32)
    )]
    words: u32,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let settings = settings::read_config(cli.config.as_deref()).context("failed to read settings")?;
    let mut diceware = Diceware::new(&settings);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for _ in 0..cli.count {
        if let Err(err) = diceware.generate(&cli.file, cli.words as usize, &mut out) {
            return Err(match err {
                Error::Output(_) => anyhow::Error::new(err),
                _ => anyhow::Error::new(err).context(cli.file.display().to_string()),
            });
        }
    }
    out.flush().context("failed to write passphrase")?;

    Ok(())
}
