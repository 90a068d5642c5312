//! Entry point: CLI parsing, logging setup, config loading and frontend
//! dispatch.

mod calculator;
mod config;
mod input;
mod ui;

use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use calculator::{Engine, Token};

/// A keyboard and mouse driven terminal calculator with pt-BR display
/// formatting.
#[derive(Debug, Parser)]
#[command(name = "calculadora", version, about)]
struct Args {
    /// Tokens to feed the calculator instead of starting the interface,
    /// e.g. `calculadora 5 + 3 =`. Multi-character numbers are split
    /// into digit tokens.
    tokens: Vec<String>,

    /// Alternate configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Append log output to this file. Without it the interactive mode
    /// logs nowhere, since the terminal belongs to the interface.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Disable the decorative emoji burst on button clicks.
    #[arg(long)]
    no_effects: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let mut config = config::load(args.config.as_deref())?;
    if args.no_effects {
        config.effects = false;
    }

    if !args.tokens.is_empty() {
        println!("{}", run_tokens(&args.tokens));
        return Ok(());
    }

    info!(?config, "starting interactive calculator");
    ui::App::new(&config).run()
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("calculadora=info"));

    match &args.log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None if !args.tokens.is_empty() => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        None => {}
    }

    Ok(())
}

/// Feed a token sequence to a fresh engine and return the final display
/// text. Arguments that are not a single token are split per character,
/// so both `1 2 + 3 =` and `12 + 3 =` work.
fn run_tokens(raw: &[String]) -> String {
    let mut engine = Engine::new();
    let mut display = "0".to_string();

    for arg in raw {
        let tokens: Vec<Token> = match Token::classify(arg) {
            Some(token) => vec![token],
            None => arg.chars().filter_map(Token::classify_char).collect(),
        };
        for token in tokens {
            if let Some(update) = engine.process(token) {
                display = update.text();
            }
        }
    }

    display
}
