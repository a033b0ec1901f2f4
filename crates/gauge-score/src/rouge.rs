use crate::metric::Metric;
use crate::tokenizer::word_tokens;
use serde::Serialize;

/// ROUGE-L: F-measure over the longest common subsequence of word tokens.
///
/// recall = LCS / |reference|, precision = LCS / |candidate|,
/// F = (1 + β²)·P·R / (R + β²·P) with β = 1.
pub struct RougeL;

/// Recall weight relative to precision. 1.0 gives the harmonic mean.
const BETA: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RougeBreakdown {
    pub lcs: usize,
    pub precision: f64,
    pub recall: f64,
    pub f_measure: f64,
}

impl RougeL {
    pub fn breakdown(reference: &str, candidate: &str) -> RougeBreakdown {
        let ref_tokens = word_tokens(reference);
        let cand_tokens = word_tokens(candidate);

        let lcs = lcs_len(&ref_tokens, &cand_tokens);
        let recall = ratio(lcs, ref_tokens.len());
        let precision = ratio(lcs, cand_tokens.len());

        let beta2 = BETA * BETA;
        let denom = recall + beta2 * precision;
        let f_measure = if precision + recall == 0.0 || denom == 0.0 {
            0.0
        } else {
            (1.0 + beta2) * precision * recall / denom
        };

        RougeBreakdown {
            lcs,
            precision,
            recall,
            f_measure,
        }
    }
}

impl Metric for RougeL {
    fn name(&self) -> &'static str {
        gauge_core::ROUGE_L
    }

    fn score(&self, reference: &str, candidate: &str) -> f64 {
        Self::breakdown(reference, candidate).f_measure
    }
}

fn ratio(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// Length of the longest common subsequence, keeping one DP row per side.
pub fn lcs_len<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    // Iterate over the longer side so the row is sized by the shorter one.
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    if short.is_empty() {
        return 0;
    }

    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for x in long {
        for (j, y) in short.iter().enumerate() {
            curr[j + 1] = if x == y {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
