//! Benchmark harness: measures read → score → render pipeline performance.
//!
//! Run with: cargo bench -p gauge-cli

use std::fs;
use std::io::BufReader;
use std::time::Instant;

use gauge_core::{EvalRequest, ScoreBundle};
use gauge_render::{JsonlWriter, read_requests};
use gauge_score::Evaluator;
use rayon::prelude::*;

const VERBS: [&str; 5] = ["fix", "add", "refactor", "update", "remove"];
const NOUNS: [&str; 6] = ["parser", "uploadClient", "retryLogic", "readme", "cacheLayer", "nullCheck"];

fn create_synthetic_batch(pair_count: usize) -> tempfile::NamedTempFile {
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut lines = String::new();
    for i in 0..pair_count {
        let verb = VERBS[i % VERBS.len()];
        let noun = NOUNS[i % NOUNS.len()];
        let other = NOUNS[(i / 3) % NOUNS.len()];
        let request = EvalRequest::new(
            &format!("{verb}{}", capitalize(noun)),
            &format!("{verb} the {noun} and {other} handling in module {i}"),
        );
        lines.push_str(&serde_json::to_string(&request).unwrap());
        lines.push('\n');
    }
    fs::write(file.path(), lines).unwrap();
    file
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn bench_read(path: &std::path::Path) -> Vec<EvalRequest> {
    read_requests(BufReader::new(fs::File::open(path).unwrap())).unwrap()
}

fn bench_score(evaluator: &Evaluator, requests: &[EvalRequest]) -> Vec<ScoreBundle> {
    requests.iter().map(|r| evaluator.evaluate_request(r)).collect()
}

fn bench_score_parallel(evaluator: &Evaluator, requests: &[EvalRequest]) -> Vec<ScoreBundle> {
    requests
        .par_iter()
        .map(|r| evaluator.evaluate_request(r))
        .collect()
}

fn bench_render(evaluator: &Evaluator, results: &[ScoreBundle]) -> String {
    JsonlWriter::new(&evaluator.metric_names())
        .render(results)
        .unwrap()
}

fn run_benchmark(label: &str, pair_count: usize) {
    let file = create_synthetic_batch(pair_count);
    let evaluator = Evaluator::new();
    let iterations = 5;

    // Warmup
    let requests = bench_read(file.path());
    let _ = bench_score(&evaluator, &requests);

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_read(file.path());
    }
    let read_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_score(&evaluator, &requests);
    }
    let score_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_score_parallel(&evaluator, &requests);
    }
    let par_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    let results = bench_score(&evaluator, &requests);
    let start = Instant::now();
    for _ in 0..iterations {
        let _ = bench_render(&evaluator, &results);
    }
    let render_ms = start.elapsed().as_millis() as f64 / iterations as f64;

    println!("{label}:");
    println!("  Pairs:          {pair_count}");
    println!("  Read:           {read_ms:.1}ms");
    println!("  Score:          {score_ms:.1}ms");
    println!("  Score (rayon):  {par_ms:.1}ms");
    println!("  Render:         {render_ms:.1}ms");
    println!("  Total:          {:.1}ms", read_ms + score_ms + render_ms);
    println!();
}

fn main() {
    println!("Gauge Pipeline Benchmarks");
    println!("=========================\n");

    run_benchmark("Small batch (100 pairs)", 100);
    run_benchmark("Medium batch (1000 pairs)", 1_000);
    run_benchmark("Large batch (10000 pairs)", 10_000);

    println!("Done.");
}
