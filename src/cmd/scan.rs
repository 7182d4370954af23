use crate::reports;
use clap::Args;
use hooplens::config::AnalysisConfig;
use hooplens::dataset;
use hooplens::error::HlResult;
use hooplens::paradox;
use std::str::FromStr;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Output format
    #[arg(long, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Unknown format: {}. Use table, json, or csv.", s)),
        }
    }
}

pub fn run(args: ScanArgs, input: Option<&str>) -> HlResult<()> {
    let table = super::acquire(&args.config, input)?;
    let players = dataset::prepare(&table, &args.config)?;
    info!("{} qualified scorers", players.len());

    let pairs = paradox::find_pairs(&players);
    info!("{} paradox pairs", pairs.len());

    let stdout = std::io::stdout();
    match args.format {
        OutputFormat::Table => {
            reports::print_qualified(&players);
            reports::print_pair_summary(&pairs);
            reports::print_pair_details(&pairs);
        }
        OutputFormat::Json => reports::write_json(stdout.lock(), &pairs)?,
        OutputFormat::Csv => reports::write_csv(stdout.lock(), &pairs)?,
    }
    Ok(())
}
