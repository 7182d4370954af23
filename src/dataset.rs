use crate::config::AnalysisConfig;
use crate::error::{HlResult, HoopLensError};
use crate::source::SeasonTable;
use serde::Serialize;
use tracing::debug;

/// One qualified player's shooting line for a season.
///
/// Percentages are makes/attempts in [0,1]; a category with zero attempts
/// reports 0.0 rather than an absent value, matching the source table's
/// blank-cell convention.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerRecord {
    /// May carry a trailing `*` hall-of-fame marker; cosmetic only.
    pub name: String,
    pub games: u32,
    pub fg_pct: f64,
    pub two_pct: f64,
    pub three_pct: f64,
    pub two_makes: u32,
    pub two_attempts: u32,
    pub three_makes: u32,
    pub three_attempts: u32,
    pub points: f64,
    pub points_per_game: f64,
    /// Squared 2-point share of attempts, scaled for marker sizing.
    /// Display only; never consulted by the paradox predicate.
    pub shot_mix_weight: f64,
}

/// Coercion rule for raw cells: an empty (or whitespace-only) cell is the
/// table's placeholder for a zero-attempt category and coerces to 0.0; any
/// other cell must parse as a number, bare-decimal forms like `.557`
/// included. A non-empty unparseable cell aborts the run.
fn parse_stat(raw: &str, column: &str) -> HlResult<f64> {
    if raw.is_empty() {
        return Ok(0.0);
    }
    raw.parse::<f64>().map_err(|_| HoopLensError::BadNumber {
        column: column.to_string(),
        value: raw.to_string(),
    })
}

fn parse_pct(raw: &str, column: &str) -> HlResult<f64> {
    let v = parse_stat(raw, column)?;
    if !v.is_finite() || !(0.0..=1.0).contains(&v) {
        return Err(HoopLensError::BadNumber {
            column: column.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(v)
}

fn parse_count(raw: &str, column: &str) -> HlResult<u32> {
    let v = parse_stat(raw, column)?;
    if !v.is_finite() || v < 0.0 {
        return Err(HoopLensError::BadNumber {
            column: column.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(v as u32)
}

fn cell<'a>(row: &'a [String], idx: usize) -> &'a str {
    row.get(idx).map(String::as_str).unwrap_or("").trim()
}

/// Build the qualified subset: coerce the relevant columns, derive
/// points-per-game and the shot-mix weight, sort by total points
/// descending (stable, so table order breaks ties), filter by the
/// minimum-games threshold, and keep the first `top_n` records.
pub fn prepare(table: &SeasonTable, config: &AnalysisConfig) -> HlResult<Vec<PlayerRecord>> {
    let col_player = table.column("Player")?;
    let col_games = table.column("G")?;
    let col_fg_pct = table.column("FG%")?;
    let col_two_pct = table.column("2P%")?;
    let col_three_pct = table.column("3P%")?;
    let col_three_m = table.column("3P")?;
    let col_three_a = table.column("3PA")?;
    let col_two_m = table.column("2P")?;
    let col_two_a = table.column("2PA")?;
    let col_pts = table.column("PTS")?;

    let mut records = Vec::new();
    for row in table.rows() {
        let name = cell(row, col_player);
        // The source repeats its header mid-table; those rows carry the
        // literal column name.
        if name.is_empty() || name == "Player" {
            continue;
        }

        let games = parse_count(cell(row, col_games), "G")?;
        if games == 0 {
            // Points per game is undefined without appearances.
            continue;
        }

        let two_attempts = parse_count(cell(row, col_two_a), "2PA")?;
        let three_attempts = parse_count(cell(row, col_three_a), "3PA")?;
        let total_attempts = two_attempts + three_attempts;
        let shot_mix_weight = if total_attempts > 0 {
            (50.0 * f64::from(two_attempts) / f64::from(total_attempts)).powi(2)
        } else {
            0.0
        };

        let points = parse_stat(cell(row, col_pts), "PTS")?;
        records.push(PlayerRecord {
            name: name.to_string(),
            games,
            fg_pct: parse_pct(cell(row, col_fg_pct), "FG%")?,
            two_pct: parse_pct(cell(row, col_two_pct), "2P%")?,
            three_pct: parse_pct(cell(row, col_three_pct), "3P%")?,
            two_makes: parse_count(cell(row, col_two_m), "2P")?,
            two_attempts,
            three_makes: parse_count(cell(row, col_three_m), "3P")?,
            three_attempts,
            points,
            points_per_game: points / f64::from(games),
            shot_mix_weight,
        });
    }

    records.sort_by(|a, b| b.points.total_cmp(&a.points));
    records.retain(|r| r.games >= config.min_games);
    records.truncate(config.top_n);

    debug!(
        "Prepared {} qualified records (min_games={}, top_n={})",
        records.len(),
        config.min_games,
        config.top_n
    );
    Ok(records)
}
