pub mod batch;
pub mod classify;
pub mod describe;
pub mod eval;
pub mod explain;
pub mod normalize;
pub mod prompt;
pub mod select;

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;

/// Read a whole file, or stdin when no path is given.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
