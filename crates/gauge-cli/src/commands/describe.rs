use crate::Cli;
use anyhow::Result;
use gauge_core::selection::{MAX_MESSAGE_CHARS, SUBJECT_LIMIT};
use gauge_render::FORMAT_VERSION;
use gauge_score::{Evaluator, MAX_PRECISION};

pub fn run(cli: &Cli) -> Result<()> {
    let evaluator = Evaluator::new();
    let description = serde_json::json!({
        "name": "gauge",
        "version": env!("CARGO_PKG_VERSION"),
        "formatVersion": FORMAT_VERSION,
        "metrics": evaluator.metric_names(),
        "precision": cli.precision()?,
        "maxPrecision": MAX_PRECISION,
        "wireFields": {
            "request": ["original_message", "ai_message"],
            "response": ["bleuScore", "rougeLScore", "meteorScore"],
        },
        "selection": {
            "maxMessageChars": MAX_MESSAGE_CHARS,
            "subjectLimit": SUBJECT_LIMIT,
        },
        "commands": ["eval", "batch", "explain", "normalize", "classify", "select", "prompt", "describe"],
        "formats": ["auto", "json", "jsonl", "human"],
    });
    println!("{}", serde_json::to_string_pretty(&description)?);
    Ok(())
}
