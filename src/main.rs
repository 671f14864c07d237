mod stat;
mod tui;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // stderr keeps log lines out of the alternate screen; silent unless
    // RUST_LOG is set
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    tui::run_tui(stat::sample_expenses())
}
