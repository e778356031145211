//! Git configuration lookup without shelling out to `git`.
//!
//! Only the subset of the format detection needs is understood: section
//! headers, subsection headers and `key = value` lines. Section and key
//! names are case-insensitive; subsection names are not.

use crate::services::files::FileSource;
use regex::Regex;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::debug;

/// Flat `section[.subsection].key -> value` table.
pub type ConfigTable = HashMap<String, String>;

static SECTION_PATTERN: OnceLock<Regex> = OnceLock::new();
static ENTRY_PATTERN: OnceLock<Regex> = OnceLock::new();
static GITHUB_REMOTE_PATTERN: OnceLock<Regex> = OnceLock::new();

fn section_pattern() -> &'static Regex {
    SECTION_PATTERN
        .get_or_init(|| Regex::new(r#"^\s*\[([^\s\["\]]+)(?:\s+"([^"]*)")?\s*\]\s*$"#).unwrap())
}

fn entry_pattern() -> &'static Regex {
    ENTRY_PATTERN.get_or_init(|| Regex::new(r"^\s*([A-Za-z0-9][\w.-]*)\s*=\s*(.*?)\s*$").unwrap())
}

fn github_remote_pattern() -> &'static Regex {
    GITHUB_REMOTE_PATTERN.get_or_init(|| Regex::new(r"github\.com[:/]([^/]+)/").unwrap())
}

/// Parse git config text into a flat table.
///
/// Entries before the first section header are dropped, as is every line
/// that is neither a header nor `key = value`. Later duplicates win.
pub fn parse(raw: &str) -> ConfigTable {
    let mut table = ConfigTable::new();
    let mut section = String::new();

    for line in raw.lines() {
        if let Some(caps) = section_pattern().captures(line) {
            let name = caps[1].to_ascii_lowercase();
            section = match caps.get(2) {
                Some(sub) => format!("{}.{}", name, sub.as_str()),
                None => name,
            };
            continue;
        }
        if section.is_empty() {
            continue;
        }
        if let Some(caps) = entry_pattern().captures(line) {
            let key = format!("{}.{}", section, caps[1].to_ascii_lowercase());
            table.insert(key, unquote(&caps[2]).to_string());
        }
    }

    table
}

/// Strip one pair of surrounding double quotes.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

/// GitHub account name from a remote URL, or empty when the remote is not
/// on github.com.
pub fn github_user_from_url(url: &str) -> String {
    github_remote_pattern()
        .captures(url)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Repository-local settings layered over user-global ones.
#[derive(Debug, Default, Clone)]
pub struct ConfigStore {
    local: ConfigTable,
    global: ConfigTable,
}

impl ConfigStore {
    pub fn new(local: ConfigTable, global: ConfigTable) -> Self {
        Self { local, global }
    }

    /// Load the repository config of the nearest `.git` at or above `cwd`,
    /// and the user-global config from `xdg_config_home/git/config`
    /// overlaid by `home/.gitconfig`.
    pub fn load(
        files: &dyn FileSource,
        cwd: &Path,
        home: Option<&Path>,
        xdg_config_home: Option<&Path>,
    ) -> Self {
        let local = cwd
            .ancestors()
            .find(|dir| files.exists(&dir.join(".git")))
            .map(|work_tree| repository_config(files, work_tree))
            .unwrap_or_default();

        let mut global = ConfigTable::new();
        for path in global_config_paths(home, xdg_config_home) {
            global.extend(parse(&files.read_text(&path)));
        }

        Self::new(local, global)
    }

    /// Value for `key`, local first, then global, else empty.
    pub fn resolve(&self, key: &str) -> String {
        [&self.local, &self.global]
            .into_iter()
            .filter_map(|table| table.get(key))
            .find(|v| !v.is_empty())
            .cloned()
            .unwrap_or_default()
    }

    /// GitHub account owning `remote.origin.url`, or empty.
    pub fn github_user(&self) -> String {
        let url = self.resolve("remote.origin.url");
        if url.is_empty() {
            return String::new();
        }
        github_user_from_url(&url)
    }
}

/// Config of the repository whose work tree is `work_tree`.
///
/// `.git` is either the git directory itself or, for submodules and linked
/// worktrees, a file holding `gitdir: <path>`. A linked worktree's git
/// directory names the shared one in its `commondir` file.
fn repository_config(files: &dyn FileSource, work_tree: &Path) -> ConfigTable {
    let dot_git = work_tree.join(".git");
    let git_dir = match files.read_text(&dot_git).trim().strip_prefix("gitdir:") {
        Some(target) => work_tree.join(target.trim()),
        None => dot_git,
    };

    let mut config_path = git_dir.join("config");
    let mut raw = files.read_text(&config_path);
    if raw.is_empty() {
        let common = files.read_text(&git_dir.join("commondir"));
        let common = common.trim();
        if !common.is_empty() {
            config_path = git_dir.join(common).join("config");
            raw = files.read_text(&config_path);
        }
    }

    debug!(path = %config_path.display(), "using repository git config");
    parse(&raw)
}

/// Lowest precedence first.
fn global_config_paths(home: Option<&Path>, xdg_config_home: Option<&Path>) -> Vec<PathBuf> {
    let mut paths = Vec::new();
    match (xdg_config_home, home) {
        (Some(xdg), _) => paths.push(xdg.join("git").join("config")),
        (None, Some(home)) => paths.push(home.join(".config").join("git").join("config")),
        (None, None) => {}
    }
    if let Some(home) = home {
        paths.push(home.join(".gitconfig"));
    }
    paths
}
