//! Shared data model layer (structs/constants only).
//!
//! ## Files
//! - `models.rs` — tables, dump config, report/output structs.
//! - `constants.rs` — built-in replacement tables and dump defaults.
//! - `errors.rs` — `RefitError`, the error type services return.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem side effects.
//!
//! ## Compatibility note
//! Report structs are the `--json` output schema. Keep field changes explicit.

pub mod constants;
pub mod errors;
pub mod models;
