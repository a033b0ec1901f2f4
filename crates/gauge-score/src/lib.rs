//! Text normalization and similarity scoring for commit messages.

pub mod bleu;
pub mod evaluator;
pub mod metric;
pub mod rouge;
pub mod tokenizer;
pub mod vector;

pub use bleu::{Bleu, BleuBreakdown};
pub use evaluator::{DEFAULT_PRECISION, Evaluator, Explanation, MAX_PRECISION, evaluate, round_to};
pub use metric::{Metric, default_metrics};
pub use rouge::{RougeBreakdown, RougeL};
pub use tokenizer::Normalizer;
pub use vector::{VectorBreakdown, VectorSimilarity};
