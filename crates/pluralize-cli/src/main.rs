use std::io;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use pluralize_cli::{Cli, rules_path, run};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let rules = rules_path(&cli);
    let stdout = io::stdout();
    run(&cli, rules, &mut stdout.lock())
}

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
