mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{analytics, path, validate};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match &cli.command {
        Commands::Validate(args) => validate::run(&cli, args),
        Commands::Analytics(args) => analytics::run(&cli, args),
        Commands::Path(args) => path::run(&cli, args),
    }
}

/// Log to stderr so stdout stays pure JSON.
fn init_tracing(verbose: u8) {
    use tracing::Level;

    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> { run() }
