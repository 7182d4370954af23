use crate::dataset::PlayerRecord;
use serde::Serialize;

/// One side of a paradox pair: the fields needed for display, lifted out
/// of the matching [`PlayerRecord`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairSide {
    pub name: String,
    pub fg_pct: f64,
    pub two_pct: f64,
    pub three_pct: f64,
    pub two_attempts: u32,
    pub three_attempts: u32,
}

impl PairSide {
    fn from_record(r: &PlayerRecord) -> Self {
        Self {
            name: r.name.clone(),
            fg_pct: r.fg_pct,
            two_pct: r.two_pct,
            three_pct: r.three_pct,
            two_attempts: r.two_attempts,
            three_attempts: r.three_attempts,
        }
    }
}

/// An instance of Simpson's paradox: `overall_leader` shoots a strictly
/// better overall FG% while `split_leader` shoots strictly better at both
/// distances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParadoxPair {
    pub overall_leader: PairSide,
    pub split_leader: PairSide,
}

impl ParadoxPair {
    fn new(overall: &PlayerRecord, split: &PlayerRecord) -> Self {
        Self {
            overall_leader: PairSide::from_record(overall),
            split_leader: PairSide::from_record(split),
        }
    }
}

/// True when `a` leads overall while trailing both per-distance
/// percentages. All three comparisons are strict; a tie on any field
/// disqualifies the pair.
fn is_reversal(a: &PlayerRecord, b: &PlayerRecord) -> bool {
    a.fg_pct > b.fg_pct && a.two_pct < b.two_pct && a.three_pct < b.three_pct
}

/// Scan every unordered pair of the qualified subset for the reversal
/// pattern, checking both orientations.
///
/// Brute force over i < j is intentional: the input is at most 25 records,
/// and the double loop keeps the predicate legible. Output order is pair
/// generation order, so results are deterministic for a given input.
/// Fewer than two records yields an empty result.
pub fn find_pairs(players: &[PlayerRecord]) -> Vec<ParadoxPair> {
    let mut pairs = Vec::new();
    for i in 0..players.len() {
        for j in (i + 1)..players.len() {
            let (p, q) = (&players[i], &players[j]);
            if is_reversal(p, q) {
                pairs.push(ParadoxPair::new(p, q));
            } else if is_reversal(q, p) {
                pairs.push(ParadoxPair::new(q, p));
            }
        }
    }
    pairs
}
