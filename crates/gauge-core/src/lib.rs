//! Gauge core domain types, prompt templates, and errors.

mod error;
pub mod selection;
pub mod template;
mod types;

pub use error::GaugeError;
pub use template::PromptTemplate;
pub use types::{
    BLEU, CommitContext, CommitType, EvalRequest, FileDiff, METEOR, MetricScore, ROUGE_L,
    ScoreBundle,
};
