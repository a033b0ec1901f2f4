use crate::{Cli, OutputFormat};
use anyhow::Result;
use gauge_core::ScoreBundle;
use gauge_render::{HumanWriter, JsonlWriter, read_requests};
use gauge_score::Evaluator;
use rayon::prelude::*;
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

pub fn run(cli: &Cli, file: Option<&Path>) -> Result<()> {
    let precision = cli.precision()?;
    let input = super::read_input(file)?;
    let requests = read_requests(Cursor::new(input))?;

    let evaluator = Evaluator::new().precision(precision);
    let start = Instant::now();
    // par_iter keeps input order in the collected results.
    let results: Vec<ScoreBundle> = requests
        .par_iter()
        .map(|request| evaluator.evaluate_request(request))
        .collect();

    tracing::info!(
        pairs = results.len(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "batch scored"
    );

    match cli.effective_format() {
        OutputFormat::Jsonl | OutputFormat::Auto => {
            let writer = JsonlWriter::new(&evaluator.metric_names()).precision(precision);
            let stdout = std::io::stdout();
            writer.write_to(&mut stdout.lock(), &results)?;
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Human => {
            print!("{}", HumanWriter::new().precision(precision).batch(&results));
        }
    }

    Ok(())
}
