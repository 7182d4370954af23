pub mod html;

use crate::error::{HlResult, HoopLensError};
use std::fs;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// A season stats table straight off the page: column names in document
/// order plus rows of raw string cells. Nothing downstream touches a
/// positional index; lookups go through [`SeasonTable::column`].
#[derive(Debug, Clone)]
pub struct SeasonTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl SeasonTable {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { columns, rows }
    }

    pub fn column(&self, name: &str) -> HlResult<usize> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| HoopLensError::MissingColumn(name.to_string()))
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

pub fn totals_url(year: i32) -> String {
    format!("https://www.basketball-reference.com/leagues/NBA_{year}_totals.html")
}

/// One blocking GET of the season totals page, no retries. Transport and
/// non-2xx failures both surface as source-unavailable errors.
pub fn fetch_totals(year: i32) -> HlResult<SeasonTable> {
    let url = totals_url(year);
    info!("Fetching season table: {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("hooplens/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(30))
        .build()?;

    let response = client.get(&url).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(HoopLensError::SourceStatus {
            status: status.as_u16(),
            url,
        });
    }

    let body = response.text()?;
    debug!("Fetched {} bytes", body.len());
    html::parse_totals(&body)
}

/// Offline path: parse a previously saved copy of the totals page.
pub fn read_totals_file<P: AsRef<Path>>(path: P) -> HlResult<SeasonTable> {
    info!("Reading season table from {}", path.as_ref().display());
    let body = fs::read_to_string(path)?;
    html::parse_totals(&body)
}
