//! Command handler layer.
//!
//! ## Files
//! - `rewrite.rs` — `signatures` and `literals`.
//! - `dump.rs` — `dump`.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate work to `services/*`.
//! - Every reported outcome exits 0; keep the status lines stable.

pub mod dump;
pub mod rewrite;

pub use dump::handle_dump_commands;
pub use rewrite::handle_rewrite_commands;
