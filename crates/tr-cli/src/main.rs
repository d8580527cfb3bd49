//! CLI frontend for the Trivia Run game engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

use commands::GameOptions;

#[derive(Parser)]
#[command(
    name = "trivia",
    about = "Trivia Run: timed multiple-choice trivia with lifelines",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game in the terminal
    Play {
        /// Question pool (JSON array of question records)
        pool: PathBuf,

        #[command(flatten)]
        options: GameOptions,
    },

    /// Validate a question pool and show how it splits across tiers
    Check {
        /// Question pool (JSON array of question records)
        pool: PathBuf,
    },

    /// Deal one run and print it in blocks of ten
    Deal {
        /// Question pool (JSON array of question records)
        pool: PathBuf,

        /// Number of questions to deal (default: the whole pool)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// RNG seed for a reproducible run
        #[arg(short, long)]
        seed: Option<u64>,

        /// Print the run as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the rules of a theme
    Rules {
        #[command(flatten)]
        options: GameOptions,
    },
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Play { pool, options } => commands::play::run(&pool, &options),
        Commands::Check { pool } => commands::check::run(&pool),
        Commands::Deal {
            pool,
            count,
            seed,
            json,
        } => commands::deal::run(&pool, count, seed, json),
        Commands::Rules { options } => commands::rules::run(&options),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
