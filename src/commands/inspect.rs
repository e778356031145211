use crate::domain::models::{ProjectInfo, Question};
use crate::services::detect::{detect, DetectContext};
use crate::services::files::FileSource;
use crate::services::output::print_one;
use crate::services::questionnaire::build_questions;
use std::io::Write;

pub fn handle_detect(
    ctx: &DetectContext,
    files: &dyn FileSource,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let info = detect(ctx, files);
    print_one(out, json, info, info_rows)
}

pub fn handle_questions(
    ctx: &DetectContext,
    files: &dyn FileSource,
    json: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let questions = build_questions(&detect(ctx, files));
    print_one(out, json, questions, |qs| qs.iter().map(question_row).collect())
}

fn info_rows(i: &ProjectInfo) -> Vec<String> {
    [
        ("title", &i.title),
        ("description", &i.description),
        ("license", &i.license),
        ("installation", &i.installation),
        ("tests", &i.tests),
        ("github", &i.github),
        ("email", &i.email),
        ("author", &i.author),
    ]
    .into_iter()
    .map(|(k, v)| format!("{}: {}", k, v))
    .collect()
}

fn question_row(q: &Question) -> String {
    let kind = format!("{:?}", q.kind).to_lowercase();
    let mut row = format!("{}\t{}\t{}", q.name, kind, q.message);
    if let Some(d) = &q.default {
        row.push_str(&format!("\t[{}]", d));
    }
    if !q.choices.is_empty() {
        row.push_str(&format!("\t{}", q.choices.join("|")));
    }
    row
}
