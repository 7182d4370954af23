pub mod chart;

use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hooplens::dataset::PlayerRecord;
use hooplens::error::HlResult;
use hooplens::paradox::ParadoxPair;
use std::io::Write;

fn pct(v: f64) -> String {
    format!("{:.3}", v)
}

pub fn print_qualified(players: &[PlayerRecord]) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("G"),
        Cell::new("FG%").fg(Color::Cyan),
        Cell::new("2P%"),
        Cell::new("3P%"),
        Cell::new("2PA"),
        Cell::new("3PA"),
        Cell::new("PTS"),
        Cell::new("PPG"),
    ]);

    for i in 1..=8 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for p in players {
        table.add_row(vec![
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            Cell::new(p.games),
            Cell::new(pct(p.fg_pct)).fg(Color::Cyan),
            Cell::new(pct(p.two_pct)),
            Cell::new(pct(p.three_pct)),
            Cell::new(p.two_attempts),
            Cell::new(p.three_attempts),
            Cell::new(format!("{:.0}", p.points)),
            Cell::new(format!("{:.1}", p.points_per_game)),
        ]);
    }
    println!("\n{}", table);
}

pub fn print_pair_summary(pairs: &[ParadoxPair]) {
    if pairs.is_empty() {
        println!("\nNo Simpson's paradox pairs among the qualified scorers.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Higher Overall FG%").add_attribute(Attribute::Bold),
        Cell::new("Higher 2P% and 3P%").add_attribute(Attribute::Bold),
    ]);

    for p in pairs {
        table.add_row(vec![
            Cell::new(&p.overall_leader.name),
            Cell::new(&p.split_leader.name),
        ]);
    }
    println!("\n{}", table);
}

/// Two rows per pair: the overall leader first, then the player who beats
/// them at both distances. Winning cells are highlighted.
pub fn print_pair_details(pairs: &[ParadoxPair]) {
    if pairs.is_empty() {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Players").add_attribute(Attribute::Bold),
        Cell::new("FG%"),
        Cell::new("2P%"),
        Cell::new("3P%"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for p in pairs {
        let a = &p.overall_leader;
        let b = &p.split_leader;
        table.add_row(vec![
            Cell::new(&a.name).add_attribute(Attribute::Bold),
            Cell::new(pct(a.fg_pct)).fg(Color::Green),
            Cell::new(pct(a.two_pct)),
            Cell::new(pct(a.three_pct)),
        ]);
        table.add_row(vec![
            Cell::new(&b.name),
            Cell::new(pct(b.fg_pct)),
            Cell::new(pct(b.two_pct)).fg(Color::Green),
            Cell::new(pct(b.three_pct)).fg(Color::Green),
        ]);
    }
    println!("\n{}", table);
}

pub fn write_json<W: Write>(mut w: W, pairs: &[ParadoxPair]) -> HlResult<()> {
    serde_json::to_writer_pretty(&mut w, pairs)?;
    writeln!(w)?;
    Ok(())
}

pub fn write_csv<W: Write>(w: W, pairs: &[ParadoxPair]) -> HlResult<()> {
    let mut wtr = csv::Writer::from_writer(w);
    wtr.write_record([
        "overall_leader",
        "overall_fg_pct",
        "overall_two_pct",
        "overall_three_pct",
        "overall_two_attempts",
        "overall_three_attempts",
        "split_leader",
        "split_fg_pct",
        "split_two_pct",
        "split_three_pct",
        "split_two_attempts",
        "split_three_attempts",
    ])?;

    for p in pairs {
        let a = &p.overall_leader;
        let b = &p.split_leader;
        wtr.write_record([
            a.name.clone(),
            pct(a.fg_pct),
            pct(a.two_pct),
            pct(a.three_pct),
            a.two_attempts.to_string(),
            a.three_attempts.to_string(),
            b.name.clone(),
            pct(b.fg_pct),
            pct(b.two_pct),
            pct(b.three_pct),
            b.two_attempts.to_string(),
            b.three_attempts.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
