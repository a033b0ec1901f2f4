use crate::metric::Metric;
use crate::tokenizer::terms;
use serde::Serialize;
use std::collections::BTreeMap;

/// Cosine similarity of term-count vectors, scaled by the harmonic mean of
/// the two texts' character lengths:
///
/// `score = 2 · sim · len(a) · len(b) / (len(a) + len(b))`
///
/// This is reported under the METEOR label but it is not METEOR (no
/// alignment, stemming, synonymy or fragmentation penalty). The score grows
/// with text length and is not bounded by 1.
pub struct VectorSimilarity;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VectorBreakdown {
    pub cosine: f64,
    pub vocabulary: usize,
    pub reference_chars: usize,
    pub candidate_chars: usize,
    pub score: f64,
}

impl VectorSimilarity {
    pub fn breakdown(reference: &str, candidate: &str) -> VectorBreakdown {
        let space = TermSpace::build(reference, candidate);
        let cosine = space.cosine();

        let a = reference.chars().count();
        let b = candidate.chars().count();
        let score = if a + b == 0 {
            0.0
        } else {
            2.0 * cosine * a as f64 * b as f64 / (a + b) as f64
        };

        VectorBreakdown {
            cosine,
            vocabulary: space.counts.len(),
            reference_chars: a,
            candidate_chars: b,
            score,
        }
    }
}

impl Metric for VectorSimilarity {
    fn name(&self) -> &'static str {
        gauge_core::METEOR
    }

    fn score(&self, reference: &str, candidate: &str) -> f64 {
        Self::breakdown(reference, candidate).score
    }
}

/// Shared vocabulary of two texts with per-text term counts.
///
/// Built fresh for every comparison; nothing is cached between calls.
struct TermSpace {
    counts: BTreeMap<String, (u32, u32)>,
}

impl TermSpace {
    fn build(left: &str, right: &str) -> Self {
        let mut counts: BTreeMap<String, (u32, u32)> = BTreeMap::new();
        for term in terms(left) {
            counts.entry(term).or_default().0 += 1;
        }
        for term in terms(right) {
            counts.entry(term).or_default().1 += 1;
        }
        Self { counts }
    }

    /// Cosine of the angle between the two count vectors; 0 if either is empty.
    fn cosine(&self) -> f64 {
        let (mut dot, mut norm_l, mut norm_r) = (0.0f64, 0.0f64, 0.0f64);
        for &(l, r) in self.counts.values() {
            let (l, r) = (l as f64, r as f64);
            dot += l * r;
            norm_l += l * l;
            norm_r += r * r;
        }
        if norm_l == 0.0 || norm_r == 0.0 {
            return 0.0;
        }
        (dot / (norm_l.sqrt() * norm_r.sqrt())).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_texts_full_cosine() {
        let v = VectorSimilarity::breakdown("fix null pointer bug", "fix null pointer bug");
        assert!((v.cosine - 1.0).abs() < 1e-12);
        // 2 * 1 * 20 * 20 / 40 = 20
        assert!((v.score - 20.0).abs() < 1e-9);
        assert_eq!(v.vocabulary, 4);
    }

    #[test]
    fn partial_overlap() {
        let v = VectorSimilarity::breakdown("fix null pointer bug", "fix null pointer exception");
        // 3 shared terms out of 4 on each side
        assert!((v.cosine - 0.75).abs() < 1e-12);
        assert_eq!(v.reference_chars, 20);
        assert_eq!(v.candidate_chars, 26);
        let expected = 2.0 * 0.75 * 20.0 * 26.0 / 46.0;
        assert!((v.score - expected).abs() < 1e-9);
    }

    #[test]
    fn counts_not_presence() {
        // left = (2, 0), right = (1, 1): cos = 2 / (2 * sqrt 2)
        let space = TermSpace::build("fix fix", "fix bug");
        assert!((space.cosine() - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn both_empty_is_zero() {
        let v = VectorSimilarity::breakdown("", "");
        assert_eq!(v.score, 0.0);
        assert_eq!(v.cosine, 0.0);
    }

    #[test]
    fn one_side_empty_is_zero() {
        assert_eq!(VectorSimilarity.score("", "fix bug"), 0.0);
        assert_eq!(VectorSimilarity.score("fix bug", ""), 0.0);
    }

    #[test]
    fn combining_marks_do_not_form_terms() {
        // किताब पढ़ो vs किताब: only "पढ" survives on the left, nothing on the right
        let left = "\u{915}\u{93F}\u{924}\u{93E}\u{92C} \u{92A}\u{922}\u{93C}\u{94B}";
        let right = "\u{915}\u{93F}\u{924}\u{93E}\u{92C}";
        assert_eq!(VectorSimilarity.score(left, right), 0.0);
    }

    #[test]
    fn no_terms_but_nonzero_length() {
        // Single-character words never become terms
        assert_eq!(VectorSimilarity.score("a b", "a b"), 0.0);
    }

    #[test]
    fn length_counts_characters() {
        let v = VectorSimilarity::breakdown("héllo wörld", "héllo");
        assert_eq!(v.reference_chars, 11);
        assert_eq!(v.candidate_chars, 5);
    }

    #[test]
    fn disjoint_is_zero() {
        assert_eq!(VectorSimilarity.score("fix bug", "update docs"), 0.0);
    }
}
