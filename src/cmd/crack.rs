use crate::reports;
use cipherbreak::config::Config;
use cipherbreak::error::CbResult;
use cipherbreak::optimizer::runner::{
    brute_force_monoalphabetic, brute_force_polyalphabetic, SolverOptions,
};
use cipherbreak::scorer::Scorer;
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::info;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum CipherFamily {
    /// Monoalphabetic substitution (one fixed alphabet).
    Mono,
    /// Repeating-key polyalphabetic substitution (Vigenere-style).
    Vigenere,
}

#[derive(Args, Debug, Clone)]
pub struct CrackArgs {
    /// Ciphertext to analyze; falls back to --input, then stdin.
    pub text: Option<String>,

    #[arg(short, long, value_enum, default_value_t = CipherFamily::Mono)]
    pub family: CipherFamily,

    #[command(flatten)]
    pub config: Config,

    /// Fix the random stream for reproducible searches.
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    /// Emit the ranked candidates as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Save the best plaintext (with its key) to a file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &CrackArgs, scorer: &Scorer) -> CbResult<()> {
    let text = super::read_text(&args.text, &args.input)?;

    let mut opts = SolverOptions::from(&args.config);
    opts.seed = args.seed;

    let (title, results) = match args.family {
        CipherFamily::Mono => (
            "MONOALPHABETIC CANDIDATES",
            brute_force_monoalphabetic(&text, scorer, &opts),
        ),
        CipherFamily::Vigenere => (
            "VIGENERE CANDIDATES",
            brute_force_polyalphabetic(&text, scorer, &opts),
        ),
    };

    if results.is_empty() {
        info!("No candidates: ciphertext has no letters to analyze.");
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        reports::print_candidates(title, &results);
        println!("\nBest guess:\n{}", results[0].plaintext);
    }

    if let Some(path) = &args.output {
        super::write_output(path, "Plaintext", &results[0].key, &results[0].plaintext)?;
        info!("Saved best candidate to {:?}", path);
    }
    Ok(())
}
