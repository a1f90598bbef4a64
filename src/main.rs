// This is the entry point for the asset optimizer binary.
// The lib.rs file serves as the public API; everything here is wiring.

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use asset_optimizer_lib::cli::Cli;
use asset_optimizer_lib::{Manifest, optimize_assets};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_target(false)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    info!("=== Asset optimization starting ===");

    let options = cli.run_options();
    let output = optimize_assets(&options, &Manifest::default())
        .await
        .with_context(|| format!("optimizing assets in {}", options.public_dir.display()))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&output).context("serializing report")?);
    } else {
        print!("{}", output.report);
    }

    Ok(())
}
