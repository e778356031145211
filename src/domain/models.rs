use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Metadata detected from `package.json` and git config.
///
/// Every field is always a string. A field that could not be detected is
/// empty, never missing.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct ProjectInfo {
    pub title: String,
    pub description: String,
    pub license: String,
    pub installation: String,
    pub tests: String,
    pub github: String,
    pub email: String,
    pub author: String,
}

/// Everything the renderer needs: detected metadata plus the narrative
/// fields only the user can supply.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct DocumentData {
    pub title: String,
    pub description: String,
    pub license: String,
    pub installation: String,
    pub usage: String,
    pub contributing: String,
    pub tests: String,
    pub email: String,
    pub github: String,
    pub author: String,
}

/// Accepted prompt values keyed by question name.
pub type Answers = BTreeMap<String, String>;

impl DocumentData {
    /// Detected values overridden by whatever the user answered.
    ///
    /// Answer keys that are not document fields (`outputFile`) are ignored.
    pub fn merge(detected: &ProjectInfo, answers: &Answers) -> Self {
        let pick = |name: &str, fallback: &str| -> String {
            answers
                .get(name)
                .cloned()
                .unwrap_or_else(|| fallback.to_string())
        };
        DocumentData {
            title: pick("title", &detected.title),
            description: pick("description", &detected.description),
            license: pick("license", &detected.license),
            installation: pick("installation", &detected.installation),
            usage: pick("usage", ""),
            contributing: pick("contributing", ""),
            tests: pick("tests", &detected.tests),
            email: pick("email", &detected.email),
            github: pick("github", &detected.github),
            author: pick("author", &detected.author),
        }
    }
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QuestionKind {
    /// Free text.
    Input,
    /// Single choice from `choices`.
    List,
    /// Yes/no.
    Confirm,
}

/// Validation rules a prompt answer can be held to.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(tag = "rule", content = "message", rename_all = "snake_case")]
pub enum Validator {
    /// Non-blank after trimming; rejects with the carried message.
    Required(&'static str),
    Email,
    MarkdownFile,
}

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Question {
    pub kind: QuestionKind,
    pub name: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub choices: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validator: Option<Validator>,
}

impl Question {
    pub fn input(name: &str, message: &str) -> Self {
        Question {
            kind: QuestionKind::Input,
            name: name.to_string(),
            message: message.to_string(),
            default: None,
            choices: vec![],
            validator: None,
        }
    }

    pub fn list(name: &str, message: &str, choices: Vec<String>) -> Self {
        Question {
            kind: QuestionKind::List,
            choices,
            ..Question::input(name, message)
        }
    }

    pub fn confirm(name: &str, message: &str, default: bool) -> Self {
        Question {
            kind: QuestionKind::Confirm,
            default: Some(if default { "yes" } else { "no" }.to_string()),
            ..Question::input(name, message)
        }
    }

    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn validated(mut self, validator: Validator) -> Self {
        self.validator = Some(validator);
        self
    }

    /// Runs the attached validator, if any.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self.validator {
            Some(v) => v.check(value),
            None => Ok(()),
        }
    }
}
