use crate::domain::licenses::DEFAULT_LICENSE;
use crate::domain::models::ProjectInfo;
use crate::services::files::FileSource;
use crate::services::git_config::ConfigStore;
use regex::Regex;
use serde_json::Value;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

const INSTALL_COMMAND: &str = "npm install";
const NO_TEST_MARKER: &str = "no test specified";

static AUTHOR_PATTERN: OnceLock<Regex> = OnceLock::new();

fn author_pattern() -> &'static Regex {
    AUTHOR_PATTERN.get_or_init(|| Regex::new(r"^([^<]*)<([^>]+)>").unwrap())
}

/// Where detection looks.
#[derive(Debug, Clone)]
pub struct DetectContext {
    pub cwd: PathBuf,
    pub home: Option<PathBuf>,
    pub xdg_config_home: Option<PathBuf>,
}

impl DetectContext {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            home: None,
            xdg_config_home: None,
        }
    }

    /// `cwd` plus the home and XDG config directories of the current user.
    pub fn from_env(cwd: impl Into<PathBuf>) -> Self {
        Self {
            home: dirs::home_dir(),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME")
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
            ..Self::new(cwd)
        }
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.cwd.join("package.json")
    }
}

/// The `author` field of `package.json`, which may be either
/// `"Name <email>"` or `{ "name": ..., "email": ... }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Author {
    Text(String),
    Record { name: String, email: String },
}

impl Author {
    pub fn from_value(v: &Value) -> Option<Self> {
        match v {
            Value::String(s) if !s.is_empty() => Some(Author::Text(s.clone())),
            Value::Object(_) => Some(Author::Record {
                name: str_field(v, "name"),
                email: str_field(v, "email"),
            }),
            _ => None,
        }
    }

    /// `(name, email)`; either may be empty.
    pub fn split(&self) -> (String, String) {
        match self {
            Author::Text(s) => match author_pattern().captures(s) {
                Some(caps) => (caps[1].trim().to_string(), caps[2].trim().to_string()),
                None => (s.clone(), String::new()),
            },
            Author::Record { name, email } => (name.clone(), email.clone()),
        }
    }
}

fn str_field(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn non_empty_object(v: &Value, key: &str) -> bool {
    v.get(key)
        .and_then(Value::as_object)
        .map(|m| !m.is_empty())
        .unwrap_or(false)
}

fn or_else(value: String, fallback: impl FnOnce() -> String) -> String {
    if value.is_empty() {
        fallback()
    } else {
        value
    }
}

fn dir_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}

/// Detect project metadata from `package.json` and git config.
pub fn detect(ctx: &DetectContext, files: &dyn FileSource) -> ProjectInfo {
    let manifest = match files.read_json(&ctx.manifest_path()) {
        Some(v) if v.is_object() => v,
        Some(_) => {
            debug!("package.json is not an object, ignoring");
            Value::Null
        }
        None => Value::Null,
    };
    let git = ConfigStore::load(
        files,
        &ctx.cwd,
        ctx.home.as_deref(),
        ctx.xdg_config_home.as_deref(),
    );
    detect_from(ctx, &manifest, &git)
}

/// Detection over an already-loaded manifest and config store.
pub fn detect_from(ctx: &DetectContext, manifest: &Value, git: &ConfigStore) -> ProjectInfo {
    let (author_name, author_email) = manifest
        .get("author")
        .and_then(Author::from_value)
        .map(|a| a.split())
        .unwrap_or_default();

    let installation =
        if non_empty_object(manifest, "dependencies") || non_empty_object(manifest, "devDependencies") {
            INSTALL_COMMAND.to_string()
        } else {
            String::new()
        };

    let test_script = manifest
        .get("scripts")
        .map(|s| str_field(s, "test"))
        .unwrap_or_default();
    let tests = if test_script.contains(NO_TEST_MARKER) {
        String::new()
    } else {
        test_script
    };

    ProjectInfo {
        title: or_else(str_field(manifest, "name"), || dir_name(&ctx.cwd)),
        description: str_field(manifest, "description"),
        license: or_else(str_field(manifest, "license"), || DEFAULT_LICENSE.to_string()),
        installation,
        tests,
        github: git.github_user(),
        email: or_else(author_email, || git.resolve("user.email")),
        author: or_else(author_name, || git.resolve("user.name")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::files::memory::MemoryFiles;
    use crate::services::git_config::parse;
    use serde_json::json;

    fn ctx() -> DetectContext {
        DetectContext {
            cwd: PathBuf::from("/work/my-app"),
            home: Some(PathBuf::from("/home/me")),
            xdg_config_home: None,
        }
    }

    fn info_for(manifest: Value) -> ProjectInfo {
        detect_from(&ctx(), &manifest, &ConfigStore::default())
    }

    #[test]
    fn nothing_present_gives_dir_name_and_mit() {
        let info = detect(&ctx(), &MemoryFiles::default());
        assert_eq!(
            info,
            ProjectInfo {
                title: "my-app".to_string(),
                license: "MIT".to_string(),
                ..ProjectInfo::default()
            }
        );
    }

    #[test]
    fn malformed_manifest_behaves_like_missing() {
        let files = MemoryFiles::default().with("/work/my-app/package.json", "{ nope");
        let info = detect(&ctx(), &files);
        assert_eq!(info.title, "my-app");
        assert_eq!(info.license, "MIT");
        assert_eq!(info.description, "");
    }

    #[test]
    fn manifest_fields_are_picked_up() {
        let info = info_for(json!({
            "name": "demo",
            "description": "A demo",
            "license": "Apache-2.0",
            "dependencies": {"left-pad": "^1.0.0"},
            "scripts": {"test": "jest"}
        }));
        assert_eq!(info.title, "demo");
        assert_eq!(info.description, "A demo");
        assert_eq!(info.license, "Apache-2.0");
        assert_eq!(info.installation, "npm install");
        assert_eq!(info.tests, "jest");
    }

    #[test]
    fn dev_dependencies_alone_trigger_install() {
        let info = info_for(json!({"devDependencies": {"eslint": "9"}}));
        assert_eq!(info.installation, "npm install");
    }

    #[test]
    fn empty_dependency_maps_do_not_trigger_install() {
        let info = info_for(json!({"dependencies": {}, "devDependencies": {}}));
        assert_eq!(info.installation, "");
    }

    #[test]
    fn npm_init_placeholder_test_script_is_dropped() {
        let info = info_for(json!({
            "scripts": {"test": "echo \"Error: no test specified\" && exit 1"}
        }));
        assert_eq!(info.tests, "");
    }

    #[test]
    fn author_string_with_email() {
        let info = info_for(json!({"author": "Jane Doe <jane@x.com>"}));
        assert_eq!(info.author, "Jane Doe");
        assert_eq!(info.email, "jane@x.com");
    }

    #[test]
    fn author_string_without_email() {
        let info = info_for(json!({"author": "Jane Doe"}));
        assert_eq!(info.author, "Jane Doe");
        assert_eq!(info.email, "");
    }

    #[test]
    fn author_record() {
        let info = info_for(json!({"author": {"name": "Jane", "email": "j@x.com", "url": "x"}}));
        assert_eq!(info.author, "Jane");
        assert_eq!(info.email, "j@x.com");
    }

    #[test]
    fn author_text_with_trailing_url_still_splits() {
        let a = Author::Text("Jane Doe <jane@x.com> (https://jane.dev)".to_string());
        assert_eq!(a.split(), ("Jane Doe".to_string(), "jane@x.com".to_string()));
    }

    #[test]
    fn git_config_fills_missing_author_and_email() {
        let git = ConfigStore::new(
            parse("[remote \"origin\"]\nurl = git@github.com:jane/demo.git\n"),
            parse("[user]\nname = Jane Git\nemail = jane@git.dev\n"),
        );
        let info = detect_from(&ctx(), &json!({"author": {"name": "Jane"}}), &git);
        assert_eq!(info.author, "Jane");
        assert_eq!(info.email, "jane@git.dev");
        assert_eq!(info.github, "jane");
    }

    #[test]
    fn wrong_field_types_degrade_to_defaults() {
        let info = info_for(json!({
            "name": 42,
            "license": {"type": "MIT"},
            "author": ["nope"],
            "scripts": "test",
            "dependencies": ["a"]
        }));
        assert_eq!(info.title, "my-app");
        assert_eq!(info.license, "MIT");
        assert_eq!(info.author, "");
        assert_eq!(info.tests, "");
        assert_eq!(info.installation, "");
    }

    #[test]
    fn detect_reads_manifest_and_git_files() {
        let files = MemoryFiles::default()
            .with(
                "/work/my-app/package.json",
                r#"{"name":"web","author":"Ann <ann@x.io>","scripts":{"test":"vitest"}}"#,
            )
            .with(
                "/work/my-app/.git/config",
                "[remote \"origin\"]\n\turl = https://github.com/ann/web.git\n",
            );
        let info = detect(&ctx(), &files);
        assert_eq!(info.title, "web");
        assert_eq!(info.github, "ann");
        assert_eq!(info.email, "ann@x.io");
        assert_eq!(info.tests, "vitest");
    }
}
