use crate::domain::licenses::{is_known_license, license_ids, DEFAULT_LICENSE};
use crate::domain::models::{ProjectInfo, Question, Validator};
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_CONTRIBUTING: &str =
    "Fork the repo, create a feature branch, and submit a pull request.";
pub const DEFAULT_OUTPUT_FILE: &str = "README.md";
pub const OUTPUT_FILE: &str = "outputFile";

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

impl Validator {
    pub fn check(&self, value: &str) -> Result<(), String> {
        let ok = match self {
            Validator::Required(_) => !value.trim().is_empty(),
            Validator::Email => email_pattern().is_match(value),
            Validator::MarkdownFile => value.trim().ends_with(".md"),
        };
        if ok {
            Ok(())
        } else {
            Err(self.rejection().to_string())
        }
    }

    fn rejection(&self) -> &'static str {
        match self {
            Validator::Required(message) => *message,
            Validator::Email => "Please enter a valid email.",
            Validator::MarkdownFile => "Filename must end with .md",
        }
    }
}

/// Prompts still needed after detection, in the order they are asked.
pub fn build_questions(detected: &ProjectInfo) -> Vec<Question> {
    let mut questions = Vec::new();

    if detected.title.is_empty() {
        questions.push(
            Question::input("title", "Project name:")
                .validated(Validator::Required("Project name is required.")),
        );
    }

    let mut description = Question::input("description", "Short description:")
        .validated(Validator::Required("Description is required."));
    if !detected.description.is_empty() {
        description = description.with_default(detected.description.clone());
    }
    questions.push(description);

    if detected.github.is_empty() {
        questions.push(
            Question::input("github", "GitHub username:")
                .validated(Validator::Required("GitHub username is required.")),
        );
    }

    if detected.email.is_empty() {
        questions.push(Question::input("email", "Email address:").validated(Validator::Email));
    }

    let license_default = if is_known_license(&detected.license) {
        detected.license.as_str()
    } else {
        DEFAULT_LICENSE
    };
    questions.push(
        Question::list("license", "License:", license_ids()).with_default(license_default),
    );

    questions.push(
        Question::input("usage", "Usage information:")
            .validated(Validator::Required("Usage information is required.")),
    );

    questions.push(
        Question::input("contributing", "Contribution guidelines:")
            .with_default(DEFAULT_CONTRIBUTING),
    );

    questions.push(
        Question::input(OUTPUT_FILE, "Output filename:")
            .with_default(DEFAULT_OUTPUT_FILE)
            .validated(Validator::MarkdownFile),
    );

    questions
}
