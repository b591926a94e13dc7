use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};
use core_types::OrderRow;

use crate::error::ImportError;
use crate::normalizer;

/// Loads and normalizes the first worksheet of a marketplace order export.
///
/// This is the only I/O in the importer; everything after the sheet read is
/// the pure `normalizer::normalize` transform.
pub fn load_orders(path: &Path) -> Result<Vec<OrderRow>, ImportError> {
    let mut workbook = open_workbook_auto(path)?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or(ImportError::EmptySheet)??;

    let rows: Vec<Vec<Data>> = range.rows().map(|row| row.to_vec()).collect();

    normalizer::normalize(&rows)
}
