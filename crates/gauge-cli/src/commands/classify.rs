use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_core::CommitType;

pub fn run(cli: &Cli, message: &str) -> Result<()> {
    let kind = CommitType::classify(message);
    tracing::debug!(%kind, "classified");
    match cli.effective_format() {
        OutputFormat::Json | OutputFormat::Jsonl => {
            println!("{}", serde_json::json!({ "commitType": kind.as_str() }));
        }
        _ => println!("{kind}"),
    }
    Ok(())
}
