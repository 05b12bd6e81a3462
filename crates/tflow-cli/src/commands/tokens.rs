use anyhow::Result;
use std::path::Path;

use super::read_input;

/// Print one token per line; an unknown method name fails before any output
pub fn handle(file: Option<&Path>, method: &str) -> Result<()> {
    let input = read_input(file)?;
    let tokens = tflow_tokens::tokenize_named(&input, method)?;

    for token in &tokens {
        println!("{}", token);
    }
    eprintln!("{} tokens ({})", tokens.len(), method.to_lowercase());

    Ok(())
}
