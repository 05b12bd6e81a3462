pub mod completions;
pub mod mask;
pub mod optimize;
pub mod savings;
pub mod tokens;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read the whole input from a file, or from stdin when no file is given
pub fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}
