use crate::bleu::Bleu;
use crate::rouge::RougeL;
use crate::vector::VectorSimilarity;

/// A text-similarity metric over two normalized strings.
///
/// Implementations must be pure: the same inputs always give the same score,
/// and no state is shared between calls.
pub trait Metric: Send + Sync {
    /// Stable identifier used to label the score.
    fn name(&self) -> &'static str;

    /// Score `candidate` against `reference`. Empty input on either side
    /// must produce a finite value (normally 0), never a panic.
    fn score(&self, reference: &str, candidate: &str) -> f64;
}

/// The metrics reported for every evaluation: BLEU, ROUGE-L and the
/// cosine-similarity heuristic.
pub fn default_metrics() -> Vec<Box<dyn Metric>> {
    vec![Box::new(Bleu), Box::new(RougeL), Box::new(VectorSimilarity)]
}
