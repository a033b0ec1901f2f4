use crate::bleu::{Bleu, BleuBreakdown};
use crate::metric::{Metric, default_metrics};
use crate::rouge::{RougeBreakdown, RougeL};
use crate::tokenizer::Normalizer;
use crate::vector::{VectorBreakdown, VectorSimilarity};
use gauge_core::{EvalRequest, MetricScore, ScoreBundle};
use serde::Serialize;
use std::time::Instant;

/// Default number of decimal places scores are rounded to.
pub const DEFAULT_PRECISION: u32 = 4;
/// Largest accepted rounding precision.
pub const MAX_PRECISION: u32 = 10;

/// Scoring orchestrator: normalizes both texts once, runs each metric on the
/// normalized pair, and rounds the results.
///
/// An `Evaluator` holds no mutable state and is `Send + Sync`, so one value
/// can serve any number of threads.
pub struct Evaluator {
    metrics: Vec<Box<dyn Metric>>,
    precision: u32,
}

/// Everything that went into one evaluation, for display.
#[derive(Debug, Clone, Serialize)]
pub struct Explanation {
    pub normalized_original: String,
    pub normalized_candidate: String,
    pub bleu: BleuBreakdown,
    pub rouge_l: RougeBreakdown,
    pub vector: VectorBreakdown,
    pub scores: Vec<MetricScore>,
}

impl Evaluator {
    /// Evaluator with the default BLEU, ROUGE-L and vector metrics.
    pub fn new() -> Self {
        Self {
            metrics: default_metrics(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Evaluator with no metrics; add them with [`Evaluator::with_metric`].
    pub fn empty() -> Self {
        Self {
            metrics: Vec::new(),
            precision: DEFAULT_PRECISION,
        }
    }

    pub fn with_metric(mut self, metric: impl Metric + 'static) -> Self {
        self.metrics.push(Box::new(metric));
        self
    }

    /// Set the number of decimal places. Capped at [`MAX_PRECISION`].
    pub fn precision(mut self, places: u32) -> Self {
        self.precision = places.min(MAX_PRECISION);
        self
    }

    pub fn metric_names(&self) -> Vec<&'static str> {
        self.metrics.iter().map(|m| m.name()).collect()
    }

    /// Score a pair with every configured metric, in registration order.
    pub fn score(&self, original: &str, candidate: &str) -> Vec<MetricScore> {
        let reference = Normalizer::normalize(original);
        let candidate = Normalizer::normalize(candidate);
        tracing::trace!(%reference, %candidate, "normalized");

        self.score_normalized(&reference, &candidate)
    }

    fn score_normalized(&self, reference: &str, candidate: &str) -> Vec<MetricScore> {
        self.metrics
            .iter()
            .map(|metric| {
                let start = Instant::now();
                let raw = metric.score(reference, candidate);
                let value = round_to(raw, self.precision);
                tracing::debug!(
                    metric = metric.name(),
                    raw,
                    value,
                    elapsed_us = start.elapsed().as_micros() as u64,
                    "scored"
                );
                MetricScore::new(metric.name(), value)
            })
            .collect()
    }

    /// Score a pair into the standard three-metric bundle.
    pub fn evaluate(&self, original: &str, candidate: &str) -> ScoreBundle {
        ScoreBundle::from_scores(&self.score(original, candidate))
    }

    /// Score a wire request; absent fields count as empty text.
    pub fn evaluate_request(&self, request: &EvalRequest) -> ScoreBundle {
        self.evaluate(request.original(), request.candidate())
    }

    /// Evaluate with full per-metric detail.
    pub fn explain(&self, original: &str, candidate: &str) -> Explanation {
        let normalized_original = Normalizer::normalize(original);
        let normalized_candidate = Normalizer::normalize(candidate);
        let scores = self.score_normalized(&normalized_original, &normalized_candidate);

        Explanation {
            bleu: Bleu::breakdown(&normalized_original, &normalized_candidate),
            rouge_l: RougeL::breakdown(&normalized_original, &normalized_candidate),
            vector: VectorSimilarity::breakdown(&normalized_original, &normalized_candidate),
            normalized_original,
            normalized_candidate,
            scores,
        }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Score a pair with the default evaluator.
pub fn evaluate(original: &str, candidate: &str) -> ScoreBundle {
    Evaluator::new().evaluate(original, candidate)
}

/// Round to `places` decimals.
///
/// The decision is made on the exact binary value, so `2.675` (stored as
/// 2.67499...) rounds down. Exact ties go to the even digit.
pub fn round_to(value: f64, places: u32) -> f64 {
    format!("{:.*}", places as usize, value)
        .parse()
        .unwrap_or(value)
}
