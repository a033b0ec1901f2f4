use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_score::Normalizer;

pub fn run(cli: &Cli, text: &str) -> Result<()> {
    let normalized = Normalizer::normalize(text);
    match cli.effective_format() {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let value = serde_json::json!({ "input": text, "normalized": normalized });
            println!("{value}");
        }
        _ => println!("{normalized}"),
    }
    Ok(())
}
