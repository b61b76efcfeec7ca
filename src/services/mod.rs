//! Service layer: the three tools and their side-effect helpers.
//!
//! ## Service map
//! - `signatures.rs` — ordered literal passes over one file (signatures, call sites).
//! - `literals.rs` — per-entry escaped-regex replacement with sentinel check.
//! - `walk.rs` — pruned, sorted directory walk and tree rendering.
//! - `dump.rs` — project content dump writer.
//! - `tables.rs` — TOML table/config loading over the built-in defaults.
//! - `files.rs` — whole-file read/write and latin-1 decoding.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Services return reports or `RefitError`; they never print.
//! - Keep command handlers thin; delegate to services.

pub mod dump;
pub mod files;
pub mod literals;
pub mod output;
pub mod signatures;
pub mod tables;
pub mod walk;
