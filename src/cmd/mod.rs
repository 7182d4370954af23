pub mod chart;
pub mod scan;

use hooplens::config::AnalysisConfig;
use hooplens::error::HlResult;
use hooplens::source::{self, SeasonTable};

/// Shared acquisition step: a saved page when `--input` is given, one
/// network fetch otherwise.
pub fn acquire(config: &AnalysisConfig, input: Option<&str>) -> HlResult<SeasonTable> {
    match input {
        Some(path) => source::read_totals_file(path),
        None => source::fetch_totals(config.year),
    }
}
