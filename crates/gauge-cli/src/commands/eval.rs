use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_render::{HumanWriter, JsonlWriter};
use gauge_score::Evaluator;

pub fn run(cli: &Cli, original: Option<&str>, candidate: Option<&str>) -> Result<()> {
    let precision = cli.precision()?;
    let evaluator = Evaluator::new().precision(precision);

    if original.is_none() || candidate.is_none() {
        tracing::warn!("missing message treated as empty text");
    }
    let scores = evaluator.evaluate(original.unwrap_or(""), candidate.unwrap_or(""));

    match cli.effective_format() {
        OutputFormat::Json | OutputFormat::Auto => {
            println!("{}", serde_json::to_string_pretty(&scores)?);
        }
        OutputFormat::Jsonl => {
            let writer = JsonlWriter::new(&evaluator.metric_names()).precision(precision);
            print!("{}", writer.render(std::slice::from_ref(&scores))?);
        }
        OutputFormat::Human => {
            print!("{}", HumanWriter::new().precision(precision).scores(&scores));
        }
    }

    Ok(())
}
