use clap::{Parser, Subcommand};
use std::process;
use tracing::error;
use tracing_subscriber::EnvFilter;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read the season table from a saved HTML file instead of fetching it
    #[arg(global = true, short, long)]
    input: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find paradox pairs and print or export them
    Scan(cmd::scan::ScanArgs),
    /// Render the qualified scorers and pairs as an SVG scatter chart
    Chart(cmd::chart::ChartArgs),
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Scan(args) => cmd::scan::run(args, cli.input.as_deref()),
        Commands::Chart(args) => cmd::chart::run(args, cli.input.as_deref()),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
