use crate::error::{HlResult, HoopLensError};
use crate::source::SeasonTable;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector")
}

fn cell_text(el: ElementRef) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Extract the first stats table on the page into a [`SeasonTable`].
///
/// Header names come from the last `thead` row (Basketball-Reference
/// stacks an over-header on some tables). Row cells are `th`/`td` in
/// document order; short rows are padded with empty cells, which the
/// dataset preparer coerces under its placeholder rule. Repeated header
/// rows embedded in `tbody` are kept here and dropped by the preparer.
pub fn parse_totals(html: &str) -> HlResult<SeasonTable> {
    let document = Html::parse_document(html);
    let table_sel = selector("table");
    let head_row_sel = selector("thead tr");
    let body_row_sel = selector("tbody tr");
    let cell_sel = selector("th, td");

    let table = document
        .select(&table_sel)
        .next()
        .ok_or(HoopLensError::NoTable)?;

    let header_row = table
        .select(&head_row_sel)
        .last()
        .ok_or(HoopLensError::NoTable)?;
    let columns: Vec<String> = header_row.select(&cell_sel).map(cell_text).collect();
    if columns.is_empty() {
        return Err(HoopLensError::NoTable);
    }

    let mut rows = Vec::new();
    for tr in table.select(&body_row_sel) {
        let mut cells: Vec<String> = tr.select(&cell_sel).map(cell_text).collect();
        if cells.is_empty() {
            continue;
        }
        cells.resize(columns.len(), String::new());
        rows.push(cells);
    }

    debug!("Parsed table: {} columns, {} rows", columns.len(), rows.len());
    Ok(SeasonTable::new(columns, rows))
}
