//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: build sub-words from a random root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use word_scramble::{
    commands::{CheckConfig, analyze_root, check_word, run_simple},
    config::GameConfig,
    game::Session,
    output::{print_analysis_result, print_check_result},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list: newline-separated file (default: embedded list)
    #[arg(short = 's', long, global = true)]
    start_words: Option<PathBuf>,

    /// Dictionary: newline-separated file (default: embedded English list)
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// Dictionary language code
    #[arg(short, long, global = true)]
    language: Option<String>,

    /// Seed for root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Check a single candidate against a root word
    Check {
        /// The root word
        root: String,

        /// The candidate word
        candidate: String,

        /// Words already accepted this round, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// List every word that can be made from a root word
    Analyze {
        /// The root word
        root: String,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = GameConfig::new(cli.start_words, cli.dictionary, cli.language, cli.seed);

    let dictionary = config
        .load_dictionary()
        .context("couldn't load the dictionary")?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&config, &dictionary),
        Commands::Simple => run_simple_command(&config, &dictionary),
        Commands::Check {
            root,
            candidate,
            used,
        } => {
            let check = CheckConfig::new(&root, &candidate).with_used_words(used);
            let result = check_word(check, &dictionary, &config.language);
            print_check_result(&result);
            Ok(())
        }
        Commands::Analyze { root } => {
            let analysis = analyze_root(&root, &dictionary);
            print_analysis_result(&analysis);
            Ok(())
        }
    }
}

fn start_session(config: &GameConfig) -> Result<Session<rand::rngs::StdRng>> {
    let start_words = config
        .load_start_words()
        .context("couldn't load the start word list")?;
    Ok(Session::new(start_words, config.rng()))
}

fn run_simple_command(
    config: &GameConfig,
    dictionary: &word_scramble::dictionary::WordListDictionary,
) -> Result<()> {
    let mut session = start_session(config)?;
    run_simple(&mut session, dictionary, &config.language)
}

fn run_play_command(
    config: &GameConfig,
    dictionary: &word_scramble::dictionary::WordListDictionary,
) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = start_session(config)?;
    let app = App::new(session, dictionary);
    run_tui(app)
}
