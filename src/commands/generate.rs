use crate::domain::models::{DocumentData, ProjectInfo};
use crate::services::detect::{detect, DetectContext};
use crate::services::files::FileSource;
use crate::services::prompt::Prompter;
use crate::services::questionnaire::{build_questions, DEFAULT_OUTPUT_FILE, OUTPUT_FILE};
use crate::services::render::render;
use anyhow::Context;
use std::io::{BufRead, Write};
use tracing::info;

/// Detect, ask, render and write the README.
pub fn handle_generate<R: BufRead, W: Write>(
    ctx: &DetectContext,
    files: &dyn FileSource,
    input: R,
    mut output: W,
) -> anyhow::Result<()> {
    let detected = detect(ctx, files);

    writeln!(output, "\nREADME Generator\n")?;
    let summary = detected_summary(&detected);
    if !summary.is_empty() {
        writeln!(output, "Auto-detected from your project:")?;
        for line in &summary {
            writeln!(output, "{}", line)?;
        }
        writeln!(output)?;
    }

    let questions = build_questions(&detected);
    let mut prompter = Prompter::new(input, &mut output);
    let answers = prompter.ask_all(&questions)?;

    let file_name = answers
        .get(OUTPUT_FILE)
        .map(|f| f.trim())
        .filter(|f| !f.is_empty())
        .unwrap_or(DEFAULT_OUTPUT_FILE)
        .to_string();
    let target = ctx.cwd.join(&file_name);
    let data = DocumentData::merge(&detected, &answers);

    if target.exists() {
        let overwrite =
            prompter.confirm(&format!("{} already exists. Overwrite?", file_name), false)?;
        if !overwrite {
            writeln!(output, "Aborted.")?;
            return Ok(());
        }
    }

    let markdown = render(&data);
    std::fs::write(&target, markdown)
        .with_context(|| format!("failed to write {}", target.display()))?;
    info!(path = %target.display(), "readme written");
    writeln!(output, "\n{} created successfully!", file_name)?;
    Ok(())
}

fn detected_summary(d: &ProjectInfo) -> Vec<String> {
    [
        ("Project", &d.title),
        ("GitHub", &d.github),
        ("Email", &d.email),
        ("Install", &d.installation),
        ("Tests", &d.tests),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("  {:<9} {}", format!("{}:", label), value))
    .collect()
}
