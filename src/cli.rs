use crate::domain::constants::DEFAULT_SIGNATURE_TARGET;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "refit",
    version,
    about = "Source rewrites and project dumps for the drawing app"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        short = 'C',
        long = "dir",
        global = true,
        default_value = ".",
        help = "Directory the tools resolve target files against"
    )]
    pub dir: PathBuf,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Thread `colors` through renderer function signatures and call sites
    Signatures {
        #[arg(long, default_value = DEFAULT_SIGNATURE_TARGET)]
        file: String,
        #[arg(long, help = "TOML table with [[signature]] and [[call_site]] entries")]
        table: Option<PathBuf>,
    },
    /// Replace hardcoded literals with named constants
    Literals {
        #[arg(long, help = "TOML table with [[replacement]] entries")]
        table: Option<PathBuf>,
    },
    /// Write the project tree and file contents into one text file
    Dump {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        output: Option<String>,
        #[arg(long, help = "TOML file overriding dump filters")]
        config: Option<PathBuf>,
    },
}
