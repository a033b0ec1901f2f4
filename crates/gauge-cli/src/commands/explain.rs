use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_render::HumanWriter;
use gauge_score::Evaluator;

pub fn run(cli: &Cli, original: Option<&str>, candidate: Option<&str>) -> Result<()> {
    let precision = cli.precision()?;
    let explanation = Evaluator::new()
        .precision(precision)
        .explain(original.unwrap_or(""), candidate.unwrap_or(""));

    match cli.effective_format() {
        OutputFormat::Human => {
            print!(
                "{}",
                HumanWriter::new().precision(precision).explanation(&explanation)
            );
        }
        OutputFormat::Jsonl => {
            println!("{}", serde_json::to_string(&explanation)?);
        }
        OutputFormat::Json | OutputFormat::Auto => {
            println!("{}", serde_json::to_string_pretty(&explanation)?);
        }
    }

    Ok(())
}
