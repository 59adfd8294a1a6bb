pub mod cipher;
pub mod crack;

use cipherbreak::error::CbResult;
use std::io::Read;
use std::path::PathBuf;

/// Removes the single-line `... | Key: ...` header written by `--output`
/// so a saved file can be fed straight back in.
fn strip_saved_header(text: &str) -> String {
    let mut lines = text.lines();
    match lines.next() {
        Some(first) if first.to_lowercase().contains("key:") => {
            let rest: Vec<&str> = lines.skip_while(|l| l.trim().is_empty()).collect();
            rest.join("\n")
        }
        _ => text.to_string(),
    }
}

/// Input priority: inline argument, then `--input` file, then stdin.
pub fn read_text(inline: &Option<String>, input: &Option<PathBuf>) -> CbResult<String> {
    if let Some(text) = inline {
        return Ok(text.clone());
    }
    if let Some(path) = input {
        let raw = std::fs::read_to_string(path)?;
        return Ok(strip_saved_header(raw.trim_end_matches('\n')));
    }
    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw)?;
    Ok(strip_saved_header(raw.trim_end_matches('\n')))
}

/// Writes a result file with the key recorded in a header line.
pub fn write_output(path: &PathBuf, label: &str, key: &str, text: &str) -> CbResult<()> {
    let content = format!("{} | Key: {}\n\n{}\n", label, key, text);
    std::fs::write(path, content)?;
    Ok(())
}
