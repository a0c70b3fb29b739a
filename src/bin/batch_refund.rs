use anyhow::Context;
use clap::Parser;
use membership_refund::core::batch::run_batch;
use membership_refund::utils::{logger, validation::Validate};
use membership_refund::CalculatorConfig;
use std::fs::File;
use std::io::{self, BufReader, Read};

#[derive(Parser)]
#[command(name = "batch-refund")]
#[command(about = "Calculate refunds for every cancellation request in a CSV file")]
struct Args {
    /// Input CSV file; reads stdin when omitted
    #[arg(short, long)]
    input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    log_json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting batch refund calculation");

    let config = match &args.config {
        Some(path) => CalculatorConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path))?,
        None => CalculatorConfig::default(),
    };
    config.validate().context("Configuration validation failed")?;

    let reader: Box<dyn Read> = match &args.input {
        Some(path) => {
            tracing::info!("📁 Reading requests from: {}", path);
            let file = File::open(path).with_context(|| format!("Failed to open '{}'", path))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let summary = run_batch(reader, io::stdout().lock(), config.currency_symbol())
        .context("Batch calculation failed")?;

    tracing::info!(
        "✅ Processed {} rows ({} failed)",
        summary.processed,
        summary.failed
    );
    Ok(())
}
