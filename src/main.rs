use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::constants::*;
pub use domain::models::*;
pub use services::dump::{resolve_root, write_dump};
pub use services::literals::{missing_sentinels, rewrite_literal, rewrite_literals};
pub use services::output::{print_failure, print_one};
pub use services::signatures::rewrite_signatures;
pub use services::tables::{load_dump_config, load_literal_table, load_signature_table};

/// Logs go to stderr; stdout carries the status lines.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("refit=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();
    tracing::debug!(dir = %cli.dir.display(), command = ?cli.command, "starting");

    let handlers: [fn(&Cli) -> anyhow::Result<bool>; 2] =
        [handle_rewrite_commands, handle_dump_commands];
    for handler in handlers {
        if handler(&cli)? {
            break;
        }
    }
    Ok(())
}
