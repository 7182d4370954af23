use crate::reports::chart;
use clap::Args;
use hooplens::config::AnalysisConfig;
use hooplens::dataset;
use hooplens::error::HlResult;
use hooplens::paradox;
use std::fs;
use std::io::Write;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ChartArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    pub out: Option<String>,
}

pub fn run(args: ChartArgs, input: Option<&str>) -> HlResult<()> {
    let table = super::acquire(&args.config, input)?;
    let players = dataset::prepare(&table, &args.config)?;
    let pairs = paradox::find_pairs(&players);
    info!(
        "Charting {} scorers, {} paradox pairs",
        players.len(),
        pairs.len()
    );

    let svg = chart::render_scatter(&players, &pairs, args.config.year);
    match args.out {
        Some(path) => {
            fs::write(&path, svg)?;
            info!("Wrote chart to {}", path);
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes())?;
        }
    }
    Ok(())
}
