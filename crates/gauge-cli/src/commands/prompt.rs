use crate::Cli;
use anyhow::{Context, Result};
use gauge_core::{CommitContext, PromptTemplate, template};
use std::path::Path;

pub fn run(
    _cli: &Cli,
    template_path: &Path,
    context: Option<&Path>,
    response: Option<&str>,
) -> Result<()> {
    let text = std::fs::read_to_string(template_path)
        .with_context(|| format!("failed to read {}", template_path.display()))?;

    // Refinement prompts only carry the first-pass message.
    if let Some(response) = response {
        print!("{}", template::render_refinement(&text, response));
        return Ok(());
    }

    let template = PromptTemplate::parse(&text)?;
    let raw = super::read_input(context)?;
    let ctx: CommitContext =
        serde_json::from_str(&raw).context("failed to parse commit context")?;
    tracing::debug!(files = ctx.files.len(), "rendering prompt");

    print!("{}", template.render(&ctx));
    Ok(())
}
