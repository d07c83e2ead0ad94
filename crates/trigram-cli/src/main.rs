use std::io::{self, BufWriter, Write};

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use trigram_cli::{Config, run};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    init_tracing();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    run(&config, &mut out)?;
    out.flush()?;
    Ok(())
}

// Logs go to stderr; stdout carries only the report.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let max_level = env_filter
        .max_level_hint()
        .and_then(|hint| hint.into_level())
        .unwrap_or(Level::WARN);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_max_level(max_level)
        .init();
}
