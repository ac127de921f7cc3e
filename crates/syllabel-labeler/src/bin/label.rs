use anyhow::{Context, Result};
use clap::Parser;
use syllabel_labeler::{run_labeling, LabelerConfig};
use tracing::info;

/// CLI arguments
#[derive(Parser)]
#[command(name = "syllabel-label")]
#[command(about = "Label syllable boundaries for a random batch of words")]
#[command(version)]
struct Cli {
    /// Number of words to label in this session
    #[arg(default_value_t = 25)]
    batch_size: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = LabelerConfig::from_env()
        .context("Invalid SYLLABEL_* environment")?
        .with_batch_size(cli.batch_size);

    info!(
        batch_size = config.batch_size,
        dataset = %config.dataset_path.display(),
        save_labels = config.save_labels,
        "starting labeling session"
    );

    let summary = run_labeling(&config).context("Labeling session failed")?;
    println!(
        "labeled {} words ({} skipped, {} without phonemes)",
        summary.accepted, summary.skipped, summary.unavailable
    );

    Ok(())
}
