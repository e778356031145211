//! Service layer containing detection, rendering and prompt logic.
//!
//! ## Service map
//! - `files.rs` — absence-on-failure file reads (`FileSource`).
//! - `git_config.rs` — git config parsing and local/global lookup.
//! - `detect.rs` — `package.json` + git config → `ProjectInfo`.
//! - `questionnaire.rs` — which prompts to ask, and their validation.
//! - `render.rs` — `DocumentData` → README Markdown.
//! - `prompt.rs` — terminal prompts over `BufRead`/`Write`.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Detection, questionnaire and rendering are pure over their inputs.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod detect;
pub mod files;
pub mod git_config;
pub mod output;
pub mod prompt;
pub mod questionnaire;
pub mod render;
