use std::path::Path;
use tracing::debug;

/// Read-only view of the files detection looks at.
///
/// Reads never fail: anything that cannot be read comes back empty.
pub trait FileSource {
    /// File contents, or an empty string when the file cannot be read.
    fn read_text(&self, path: &Path) -> String;

    /// Whether anything (file or directory) is at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Parsed JSON, or `None` when the file is missing or malformed.
    fn read_json(&self, path: &Path) -> Option<serde_json::Value> {
        let raw = self.read_text(path);
        if raw.is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(v) => Some(v),
            Err(e) => {
                debug!(path = %path.display(), error = %e, "ignoring malformed json");
                None
            }
        }
    }
}

/// The real file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiskFiles;

impl FileSource for DiskFiles {
    fn read_text(&self, path: &Path) -> String {
        match std::fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "file not readable");
                String::new()
            }
        }
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}
