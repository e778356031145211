//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `generate.rs` — the interactive detect/ask/render/write flow.
//! - `inspect.rs` — `detect` and `questions` read-only reports.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod generate;
pub mod inspect;

pub use generate::handle_generate;
pub use inspect::{handle_detect, handle_questions};
