use gauge_core::{EvalRequest, GaugeError, ScoreBundle};
use gauge_score::round_to;
use serde::Serialize;
use std::io::{BufRead, Write};

/// Version tag written in every JSONL header.
pub const FORMAT_VERSION: &str = "1";

/// Writes batch evaluation results as JSONL: a header line, one line per
/// scored pair, and a footer with averages.
pub struct JsonlWriter {
    metrics: Vec<String>,
    precision: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Header<'a> {
    version: &'a str,
    metrics: &'a [String],
    precision: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Entry<'a> {
    index: usize,
    scores: &'a ScoreBundle,
}

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Footer {
    total_pairs: usize,
    mean_bleu_score: f64,
    mean_rouge_l_score: f64,
    mean_meteor_score: f64,
}

impl JsonlWriter {
    pub fn new(metrics: &[&str]) -> Self {
        Self {
            metrics: metrics.iter().map(|m| m.to_string()).collect(),
            precision: gauge_score::DEFAULT_PRECISION,
        }
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Render results as a JSONL string.
    pub fn render(&self, results: &[ScoreBundle]) -> anyhow::Result<String> {
        let mut buf = Vec::new();
        self.write_to(&mut buf, results)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write JSONL output to a writer.
    pub fn write_to(&self, writer: &mut dyn Write, results: &[ScoreBundle]) -> anyhow::Result<()> {
        let header = Header {
            version: FORMAT_VERSION,
            metrics: &self.metrics,
            precision: self.precision,
        };
        serde_json::to_writer(&mut *writer, &header)?;
        writeln!(writer)?;

        let mut sums = ScoreBundle::default();
        for (index, scores) in results.iter().enumerate() {
            serde_json::to_writer(&mut *writer, &Entry { index, scores })?;
            writeln!(writer)?;
            sums.bleu_score += scores.bleu_score;
            sums.rouge_l_score += scores.rouge_l_score;
            sums.meteor_score += scores.meteor_score;
        }

        let mean = |sum: f64| {
            if results.is_empty() {
                0.0
            } else {
                round_to(sum / results.len() as f64, self.precision)
            }
        };
        let footer = Footer {
            total_pairs: results.len(),
            mean_bleu_score: mean(sums.bleu_score),
            mean_rouge_l_score: mean(sums.rouge_l_score),
            mean_meteor_score: mean(sums.meteor_score),
        };
        serde_json::to_writer(&mut *writer, &footer)?;
        writeln!(writer)?;

        Ok(())
    }
}

/// Read evaluation requests, one JSON object per line. Blank lines are skipped.
///
/// Errors carry the 1-based line number of the offending input.
pub fn read_requests(reader: impl BufRead) -> Result<Vec<EvalRequest>, GaugeError> {
    let mut requests = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let request = serde_json::from_str(&line).map_err(|e| GaugeError::Parse {
            line: i + 1,
            reason: e.to_string(),
        })?;
        requests.push(request);
    }
    Ok(requests)
}
