//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — detected metadata, render input, prompt descriptors.
//! - `licenses.rs` — the closed license table (choices + badges).
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! `ProjectInfo` and `Question` are printed by `detect --json` and
//! `questions --json`; field renames change that output.

pub mod licenses;
pub mod models;
