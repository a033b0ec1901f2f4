use serde::{Deserialize, Serialize};
use std::fmt;

/// Metric name used by the lexical overlap (BLEU) scorer.
pub const BLEU: &str = "bleu";
/// Metric name used by the longest-common-subsequence (ROUGE-L) scorer.
pub const ROUGE_L: &str = "rouge_l";
/// Metric name used by the cosine-similarity ("METEOR-like") scorer.
pub const METEOR: &str = "meteor";

/// One evaluation request as it arrives on the wire.
///
/// Either field may be absent; absent text is scored as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvalRequest {
    #[serde(default)]
    pub original_message: Option<String>,
    #[serde(default, alias = "candidate_message")]
    pub ai_message: Option<String>,
}

impl EvalRequest {
    pub fn new(original: &str, candidate: &str) -> Self {
        Self {
            original_message: Some(original.to_string()),
            ai_message: Some(candidate.to_string()),
        }
    }

    pub fn original(&self) -> &str {
        self.original_message.as_deref().unwrap_or("")
    }

    pub fn candidate(&self) -> &str {
        self.ai_message.as_deref().unwrap_or("")
    }
}

/// A single named metric result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricScore {
    pub name: String,
    pub value: f64,
}

impl MetricScore {
    pub fn new(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value,
        }
    }
}

/// The three similarity scores reported for a generated commit message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBundle {
    pub bleu_score: f64,
    pub rouge_l_score: f64,
    pub meteor_score: f64,
}

impl ScoreBundle {
    /// Assemble a bundle from named metric results. Missing metrics score 0.
    pub fn from_scores(scores: &[MetricScore]) -> Self {
        let lookup = |name: &str| {
            scores
                .iter()
                .find(|s| s.name == name)
                .map(|s| s.value)
                .unwrap_or(0.0)
        };
        Self {
            bleu_score: lookup(BLEU),
            rouge_l_score: lookup(ROUGE_L),
            meteor_score: lookup(METEOR),
        }
    }
}

impl fmt::Display for ScoreBundle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BLEU {:.4}  ROUGE-L {:.4}  METEOR {:.4}",
            self.bleu_score, self.rouge_l_score, self.meteor_score
        )
    }
}

/// Coarse category of a commit, inferred from its message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommitType {
    BugFix,
    FeatureAddition,
    Refactor,
    StyleChange,
    General,
}

impl CommitType {
    /// Classify a commit message by keyword. First matching rule wins.
    pub fn classify(message: &str) -> Self {
        let lower = message.to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(*n));

        if has(&["fix", "bug"]) {
            Self::BugFix
        } else if has(&["add", "feature"]) {
            Self::FeatureAddition
        } else if has(&["refactor"]) {
            Self::Refactor
        } else if has(&["style", "format"]) {
            Self::StyleChange
        } else {
            Self::General
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BugFix => "Bug Fix",
            Self::FeatureAddition => "Feature Addition",
            Self::Refactor => "Refactor",
            Self::StyleChange => "Style Change",
            Self::General => "General Change",
        }
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A changed file as shown to the message generator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileDiff {
    pub filename: String,
    pub status: String,
    #[serde(default)]
    pub patch: Option<String>,
}

impl FileDiff {
    /// Render this file as a prompt section.
    pub fn render(&self) -> String {
        let mut out = format!(
            "File: {}\nStatus: {}\n",
            self.filename,
            self.status.to_uppercase()
        );
        if let Some(patch) = &self.patch {
            out.push_str("\nDiff:\n");
            out.push_str(patch);
        }
        out
    }
}

/// Everything a prompt template can refer to about one commit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitContext {
    #[serde(default)]
    pub files: Vec<FileDiff>,
    #[serde(default)]
    pub pull_request_title: Option<String>,
    #[serde(default)]
    pub issue_report_title: Option<String>,
    #[serde(default)]
    pub commit_type: Option<String>,
}

impl CommitContext {
    /// All file diffs, separated by a blank line.
    pub fn render_diffs(&self) -> String {
        self.files
            .iter()
            .map(FileDiff::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
