mod cli;

use crate::cli::{LogFormatArg, CLI};
use clap::Parser;
use std::io::BufWriter;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = CLI::parse();
    init_tracing(config.log_format);

    info!(
        config_path = %config.config.display(),
        log_format = %config.log_format,
        "starting coupon generation"
    );

    let stdout = std::io::stdout();
    coupon_cli::run(&config.config, BufWriter::new(stdout.lock()))?;

    Ok(())
}

// Logs go to stderr; stdout only carries the generated codes.
fn init_tracing(format: LogFormatArg) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormatArg::Text => subscriber.init(),
        LogFormatArg::Json => subscriber.json().init(),
    }
}
