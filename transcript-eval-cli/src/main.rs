use anyhow::{Context, Result};
use clap::Parser;
use indicatif::ProgressBar;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use transcript_eval_cli::{loader, output, Evaluator};

/// Evaluate OCR/handwriting transcription quality against reference texts
#[derive(Debug, Parser)]
#[command(name = "transcript-eval", version, about)]
struct Cli {
    /// Directory containing prediction text files
    #[arg(long = "predictions_dir")]
    predictions_dir: PathBuf,

    /// Directory containing reference text files
    #[arg(long = "references_dir")]
    references_dir: PathBuf,

    /// Report destination; results are printed to the console only if omitted
    #[arg(long = "output_file")]
    output_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so stdout stays a clean report stream.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transcript_eval_cli=info,transcript_eval_metrics=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let corpus = loader::load_and_pair(&cli.predictions_dir, &cli.references_dir)
        .context("failed to load prediction/reference pairs")?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_message("computing metrics");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let evaluator = Evaluator::new();
    let report = evaluator.compute_metrics(&corpus).await?;

    spinner.finish_and_clear();

    output::render_output(&report, cli.output_file.as_deref())?;

    Ok(())
}
