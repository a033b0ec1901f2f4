use crate::error::GaugeError;
use crate::types::CommitContext;

/// Placeholder replaced by the rendered file diffs.
pub const DIFF: &str = "[DIFF]";
/// Placeholder replaced by the pull request title.
pub const PULL_REQUEST: &str = "[PR]";
/// Placeholder replaced by the issue report title.
pub const ISSUE_REPORT: &str = "[IR]";
/// Placeholder replaced by the commit type.
pub const COMMIT_TYPE: &str = "[CT]";
/// Placeholder in a refinement prompt replaced by the first-pass response.
pub const MESSAGE: &str = "[MESSAGE]";

/// A generation prompt with `[DIFF]`, `[PR]`, `[IR]` and `[CT]` placeholders.
///
/// Only the first occurrence of each placeholder is substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptTemplate {
    text: String,
}

impl PromptTemplate {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }

    /// Like [`PromptTemplate::new`], but rejects templates with no `[DIFF]`
    /// slot, since such a prompt never shows the change being described.
    pub fn parse(text: &str) -> Result<Self, GaugeError> {
        if !text.contains(DIFF) {
            return Err(GaugeError::Template(format!(
                "template has no {DIFF} placeholder"
            )));
        }
        Ok(Self::new(text))
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Fill in the placeholders from a commit's context.
    pub fn render(&self, ctx: &CommitContext) -> String {
        let diffs = ctx.render_diffs();
        let pr = or_default(&ctx.pull_request_title, "None");
        let ir = or_default(&ctx.issue_report_title, "None");
        let ct = or_default(&ctx.commit_type, "Unknown");

        self.text
            .replacen(DIFF, &diffs, 1)
            .replacen(PULL_REQUEST, pr, 1)
            .replacen(ISSUE_REPORT, ir, 1)
            .replacen(COMMIT_TYPE, ct, 1)
    }
}

/// Empty values fall back to the default too.
fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().filter(|v| !v.is_empty()).unwrap_or(default)
}

/// Fill a refinement prompt with the message produced by the first pass.
pub fn render_refinement(template: &str, response: &str) -> String {
    template.replacen(MESSAGE, response, 1)
}
