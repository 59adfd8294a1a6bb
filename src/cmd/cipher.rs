use cipherbreak::cipher::{decrypt, encrypt, SubstitutionKey};
use cipherbreak::error::CbResult;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone)]
pub struct CipherArgs {
    /// Text to process; falls back to --input, then stdin.
    pub text: Option<String>,

    /// 26-letter substitution alphabet, e.g. QWERTYUIOPASDFGHJKLZXCVBNM.
    #[arg(short, long)]
    pub key: String,

    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Write the result (with a `Key:` header) instead of printing it.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub enum Direction {
    Encrypt,
    Decrypt,
}

pub fn run(args: &CipherArgs, direction: Direction) -> CbResult<()> {
    let key = SubstitutionKey::parse(&args.key)?;
    let text = super::read_text(&args.text, &args.input)?;

    let (result, label) = match direction {
        Direction::Encrypt => (encrypt(&text, &key), "Ciphertext"),
        Direction::Decrypt => (decrypt(&text, &key), "Plaintext"),
    };

    match &args.output {
        Some(path) => super::write_output(path, label, &key.to_string(), &result)?,
        None => println!("{}", result),
    }
    Ok(())
}
