use gauge_core::ScoreBundle;
use gauge_score::Explanation;
use std::fmt::Write;

/// Plain-text output for terminals.
pub struct HumanWriter {
    precision: usize,
}

impl HumanWriter {
    pub fn new() -> Self {
        Self {
            precision: gauge_score::DEFAULT_PRECISION as usize,
        }
    }

    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = precision as usize;
        self
    }

    /// One metric per line.
    pub fn scores(&self, scores: &ScoreBundle) -> String {
        let p = self.precision;
        let mut out = String::new();
        let _ = writeln!(out, "BLEU     {:>12.p$}", scores.bleu_score);
        let _ = writeln!(out, "ROUGE-L  {:>12.p$}", scores.rouge_l_score);
        let _ = writeln!(out, "METEOR   {:>12.p$}", scores.meteor_score);
        out
    }

    /// A table row per pair, followed by the mean of each column.
    pub fn batch(&self, results: &[ScoreBundle]) -> String {
        let p = self.precision;
        let mut out = String::new();
        let _ = writeln!(out, "{:>6}  {:>12}  {:>12}  {:>12}", "#", "BLEU", "ROUGE-L", "METEOR");
        for (i, s) in results.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>6}  {:>12.p$}  {:>12.p$}  {:>12.p$}",
                i + 1,
                s.bleu_score,
                s.rouge_l_score,
                s.meteor_score
            );
        }
        if !results.is_empty() {
            let n = results.len() as f64;
            let mean = |f: fn(&ScoreBundle) -> f64| results.iter().map(f).sum::<f64>() / n;
            let _ = writeln!(
                out,
                "{:>6}  {:>12.p$}  {:>12.p$}  {:>12.p$}",
                "mean",
                mean(|s| s.bleu_score),
                mean(|s| s.rouge_l_score),
                mean(|s| s.meteor_score)
            );
        }
        out
    }

    /// Normalized inputs and the intermediate values behind each score.
    pub fn explanation(&self, ex: &Explanation) -> String {
        let p = self.precision;
        let mut out = String::new();

        let _ = writeln!(out, "Original:  {}", ex.normalized_original);
        let _ = writeln!(out, "Candidate: {}", ex.normalized_candidate);
        let _ = writeln!(out);

        let b = &ex.bleu;
        let _ = writeln!(
            out,
            "BLEU ({} reference / {} candidate tokens)",
            b.reference_len, b.candidate_len
        );
        for (i, precision) in b.precisions.iter().enumerate() {
            let _ = writeln!(out, "  p{}               {:.p$}", i + 1, precision);
        }
        let _ = writeln!(out, "  brevity penalty  {:.p$}", b.brevity_penalty);
        let _ = writeln!(out, "  score            {:.p$}", b.score);
        let _ = writeln!(out);

        let r = &ex.rouge_l;
        let _ = writeln!(out, "ROUGE-L (LCS {})", r.lcs);
        let _ = writeln!(out, "  precision        {:.p$}", r.precision);
        let _ = writeln!(out, "  recall           {:.p$}", r.recall);
        let _ = writeln!(out, "  f-measure        {:.p$}", r.f_measure);
        let _ = writeln!(out);

        let v = &ex.vector;
        let _ = writeln!(
            out,
            "METEOR-like ({} terms, {} / {} chars)",
            v.vocabulary, v.reference_chars, v.candidate_chars
        );
        let _ = writeln!(out, "  cosine           {:.p$}", v.cosine);
        let _ = writeln!(out, "  score            {:.p$}", v.score);

        out
    }
}

impl Default for HumanWriter {
    fn default() -> Self {
        Self::new()
    }
}
