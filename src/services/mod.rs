//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `config.rs` — dump-tool location from the user config file.
//! - `dumper.rs` — external iccdump invocation, profile staging, report capture.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod config;
pub mod dumper;
pub mod output;
