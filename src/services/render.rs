//! Markdown README rendering.
//!
//! A document is a fixed sequence of sections. Each entry in [`SECTIONS`]
//! pairs an inclusion predicate with a builder, so what gets emitted and in
//! which order can be read off one table.

use crate::domain::licenses::{badge_slug, UNLICENSED};
use crate::domain::models::DocumentData;

type Include = fn(&DocumentData) -> bool;
type Build = fn(&DocumentData) -> String;

const SECTIONS: &[(Include, Build)] = &[
    (always, heading),
    (has_badge, badge),
    (always, description),
    (always, table_of_contents),
    (always, installation),
    (always, usage),
    (always, license),
    (always, contributing),
    (has_tests, test_commands),
    (always, questions),
];

const TOC_ENTRIES: &[&str] = &["Installation", "Usage", "License", "Contributing"];

/// Render the README. Never fails; unknown licenses simply get no badge.
pub fn render(data: &DocumentData) -> String {
    SECTIONS
        .iter()
        .filter(|(include, _)| include(data))
        .map(|(_, build)| build(data))
        .collect::<Vec<_>>()
        .join("\n")
}

fn always(_: &DocumentData) -> bool {
    true
}

fn has_badge(d: &DocumentData) -> bool {
    badge_slug(&d.license).is_some()
}

fn has_tests(d: &DocumentData) -> bool {
    !d.tests.is_empty()
}

fn shell_block(body: &str) -> String {
    format!("```bash\n{}\n```\n", body)
}

fn heading(d: &DocumentData) -> String {
    format!("# {}\n", d.title)
}

fn badge(d: &DocumentData) -> String {
    badge_slug(&d.license)
        .map(|slug| format!("![License](https://img.shields.io/badge/License-{}.svg)\n", slug))
        .unwrap_or_default()
}

fn description(d: &DocumentData) -> String {
    format!("## Description\n{}\n", d.description)
}

fn table_of_contents(d: &DocumentData) -> String {
    let mut entries = TOC_ENTRIES.to_vec();
    if has_tests(d) {
        entries.push("Tests");
    }
    entries.push("Questions");

    let links: Vec<String> = entries
        .iter()
        .map(|e| format!("- [{}](#{})", e, e.to_lowercase()))
        .collect();
    format!("## Table of Contents\n{}\n", links.join("\n"))
}

fn installation(d: &DocumentData) -> String {
    format!("## Installation\n{}", shell_block(&d.installation))
}

fn usage(d: &DocumentData) -> String {
    format!("## Usage\n{}\n", d.usage)
}

fn license(d: &DocumentData) -> String {
    if d.license == UNLICENSED {
        "## License\nThis project is not currently licensed.\n".to_string()
    } else {
        format!(
            "## License\nThis project is licensed under the **{}** license.\n",
            d.license
        )
    }
}

fn contributing(d: &DocumentData) -> String {
    format!("## Contributing\n{}\n", d.contributing)
}

fn test_commands(d: &DocumentData) -> String {
    format!("## Tests\n{}", shell_block(&d.tests))
}

fn questions(d: &DocumentData) -> String {
    format!(
        "## Questions\nFor questions or issues, open an issue or contact me at **{}**.\nFind more of my work on [GitHub](https://github.com/{}).\n",
        d.email, d.github
    )
}
