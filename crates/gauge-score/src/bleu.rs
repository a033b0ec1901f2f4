use crate::metric::Metric;
use crate::tokenizer::word_tokens;
use serde::Serialize;
use std::collections::HashMap;

/// Highest n-gram order scored.
const MAX_ORDER: usize = 4;

/// Sentence-level BLEU against a single reference.
///
/// Uniform weights over orders 1..=4, clipped n-gram precision and the usual
/// brevity penalty. Orders longer than the candidate are left out and the
/// remaining weights renormalized, so any non-empty text scores 1.0 against
/// itself. An order with no matches is smoothed exponentially: the k-th such
/// order counts as `1 / (2^k * total)` instead of zero.
pub struct Bleu;

/// Intermediate BLEU values, exposed for `explain` output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BleuBreakdown {
    /// Smoothed precision per n-gram order, starting at unigrams.
    pub precisions: Vec<f64>,
    pub brevity_penalty: f64,
    pub reference_len: usize,
    pub candidate_len: usize,
    pub score: f64,
}

impl Bleu {
    pub fn breakdown(reference: &str, candidate: &str) -> BleuBreakdown {
        let ref_tokens = word_tokens(reference);
        let cand_tokens = word_tokens(candidate);
        let r = ref_tokens.len();
        let c = cand_tokens.len();

        let mut out = BleuBreakdown {
            reference_len: r,
            candidate_len: c,
            ..Default::default()
        };
        if r == 0 || c == 0 {
            return out;
        }

        let mut smoothing = 1.0;
        for n in 1..=MAX_ORDER.min(c) {
            let (matches, total) = clipped_matches(&ref_tokens, &cand_tokens, n);
            if matches == 0 && n == 1 {
                // No word in common: no amount of smoothing makes this a match
                out.precisions.push(0.0);
                return out;
            }
            let precision = if matches == 0 {
                smoothing *= 2.0;
                1.0 / (smoothing * total as f64)
            } else {
                matches as f64 / total as f64
            };
            out.precisions.push(precision);
        }

        let log_mean = out.precisions.iter().map(|p| p.ln()).sum::<f64>()
            / out.precisions.len() as f64;

        out.brevity_penalty = if c > r {
            1.0
        } else {
            (1.0 - r as f64 / c as f64).exp()
        };
        out.score = out.brevity_penalty * log_mean.exp();
        out
    }
}

impl Metric for Bleu {
    fn name(&self) -> &'static str {
        gauge_core::BLEU
    }

    fn score(&self, reference: &str, candidate: &str) -> f64 {
        Self::breakdown(reference, candidate).score
    }
}

/// Count candidate n-grams found in the reference, each clipped to its
/// reference count. Returns (clipped matches, total candidate n-grams).
fn clipped_matches<'a>(reference: &[&'a str], candidate: &[&'a str], n: usize) -> (usize, usize) {
    let ref_counts = ngram_counts(reference, n);
    let cand_counts = ngram_counts(candidate, n);

    let total: usize = cand_counts.values().sum();
    let matches = cand_counts
        .iter()
        .map(|(gram, &count)| count.min(ref_counts.get(gram).copied().unwrap_or(0)))
        .sum();

    (matches, total)
}

fn ngram_counts<'t, 'a>(tokens: &'t [&'a str], n: usize) -> HashMap<&'t [&'a str], usize> {
    let mut counts = HashMap::new();
    if tokens.len() >= n {
        for window in tokens.windows(n) {
            *counts.entry(window).or_insert(0) += 1;
        }
    }
    counts
}
