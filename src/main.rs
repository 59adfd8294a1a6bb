use cipherbreak::consts::{COMMON_WORDS, ENGLISH_FREQS};
use cipherbreak::scorer::{loader, Scorer};
use clap::{Parser, Subcommand};
use std::process;
use tracing::{error, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Optional letter,frequency CSV overriding the built-in English table.
    #[arg(global = true, long)]
    freq_table: Option<String>,

    /// Optional common-word CSV overriding the built-in word list.
    #[arg(global = true, long)]
    word_list: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Encrypt(cmd::cipher::CipherArgs),
    Decrypt(cmd::cipher::CipherArgs),
    Crack(cmd::crack::CrackArgs),
}

fn build_scorer(cli: &Cli) -> Scorer {
    let freqs = match &cli.freq_table {
        Some(path) => match loader::load_frequency_table(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Failed to load frequency table: {}. Using built-in.", e);
                ENGLISH_FREQS
            }
        },
        None => ENGLISH_FREQS,
    };
    let words = match &cli.word_list {
        Some(path) => match loader::load_common_words(path) {
            Ok(w) => w,
            Err(e) => {
                warn!("Failed to load word list: {}. Using built-in.", e);
                COMMON_WORDS.iter().map(|w| w.to_string()).collect()
            }
        },
        None => COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
    };
    Scorer::new(freqs, words)
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let scorer = build_scorer(&cli);

    let result = match &cli.command {
        Commands::Encrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Encrypt),
        Commands::Decrypt(args) => cmd::cipher::run(args, cmd::cipher::Direction::Decrypt),
        Commands::Crack(args) => cmd::crack::run(args, &scorer),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
