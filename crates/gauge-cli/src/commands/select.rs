use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_core::selection::{self, INVALID_MESSAGE, SUBJECT_LIMIT};

pub fn run(cli: &Cli, first: Option<&str>, second: Option<&str>) -> Result<()> {
    let chosen = match (first, second) {
        (Some(_), Some(_)) => selection::choose_response(first, second),
        _ => selection::validate(first.or(second)),
    };
    let subject_len = chosen.lines().next().map_or(0, |l| l.chars().count());
    if chosen != INVALID_MESSAGE && subject_len > SUBJECT_LIMIT {
        tracing::warn!(
            subject_len,
            limit = SUBJECT_LIMIT,
            "subject line exceeds recommended length"
        );
    }

    match cli.effective_format() {
        OutputFormat::Json | OutputFormat::Jsonl => {
            let value = serde_json::json!({
                "message": chosen,
                "valid": chosen != INVALID_MESSAGE,
            });
            println!("{value}");
        }
        _ => println!("{chosen}"),
    }
    Ok(())
}
