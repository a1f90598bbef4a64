//! CLI argument parsing via `clap`.

use std::path::PathBuf;
use clap::Parser;
use crate::commands::RunOptions;

#[derive(Parser, Debug)]
#[command(
    name = "asset-optimizer",
    version,
    about = "Resize and recompress the site's public images in place",
    long_about = "Backs up the public directory once, then re-encodes the fixed list of hero, card and png assets in place.\n\nNo arguments are required; the defaults match the site layout.",
    after_help = "Examples:\n  asset-optimizer\n  asset-optimizer --public-dir site/public --backup-dir site/public-backup\n  RUST_LOG=debug asset-optimizer --json"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(long, default_value = "public", help = "Directory holding the image assets")]
    pub public_dir: PathBuf,
    #[arg(long, default_value = "public-backup", help = "Backup mirror, created once if absent")]
    pub backup_dir: PathBuf,
    #[arg(long, action = clap::ArgAction::SetTrue, help = "Print the summary as JSON instead of text")]
    pub json: bool,
}

impl Cli {
    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            public_dir: self.public_dir.clone(),
            backup_dir: self.backup_dir.clone(),
        }
    }
}
