//! Decoding of the sheet's CSV export.
//!
//! The export wraps every row in quotes and separates cells with `","`. Rows are
//! split on that delimiter literally, cells are positional.

use tracing::{debug, warn};

use crate::errors::InventoryError;
use crate::types::{generate_id, TileRecord};

/// Number of positional columns the export carries.
pub const COLUMN_COUNT: usize = 9;

const CELL_DELIMITER: &str = "\",\"";

/// Parse a raw response body into records.
pub fn parse_body(body: &[u8]) -> Result<Vec<TileRecord>, InventoryError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| InventoryError::Parse(format!("sheet body is not UTF-8: {}", e)))?;
    parse_sheet(text)
}

/// Parse the CSV text. The first line is a header and is discarded; rows
/// without a brand or entry date are dropped.
pub fn parse_sheet(text: &str) -> Result<Vec<TileRecord>, InventoryError> {
    let text = text.trim();

    if text.starts_with('<') {
        return Err(InventoryError::Parse(
            "expected CSV but received an HTML page (is the sheet shared?)".to_string(),
        ));
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for line in text.lines().skip(1) {
        let record = parse_row(line);
        if record.is_valid() {
            records.push(record);
        } else {
            dropped += 1;
        }
    }

    if dropped > 0 {
        warn!("Dropped {} sheet rows without brand or entry date", dropped);
    }
    debug!("Parsed {} records from sheet", records.len());

    Ok(records)
}

fn parse_row(line: &str) -> TileRecord {
    let unwrapped = if line.len() >= 2 && line.starts_with('"') && line.ends_with('"') {
        &line[1..line.len() - 1]
    } else {
        line
    };

    let mut cells = unwrapped.split(CELL_DELIMITER).take(COLUMN_COUNT);
    let mut next = || cells.next().unwrap_or_default().to_string();

    TileRecord {
        entry_date: next(),
        brand: next(),
        manufacturer: next(),
        grade: next(),
        working_size: next(),
        finish: next(),
        tile_type: next(),
        location: next(),
        status: next(),
        id: generate_id(),
    }
}
