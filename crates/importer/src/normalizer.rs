use calamine::Data;
use chrono::{NaiveDate, NaiveDateTime};
use core_types::{OrderRow, OrderStatus};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;

use crate::error::ImportError;
use crate::schema;

/// Resolved positions of the required columns within the export's header row.
#[derive(Debug, Clone, Copy)]
pub struct ColumnMap {
    order_date: usize,
    product_name: usize,
    article: usize,
    amount: usize,
    status: usize,
    quantity: usize,
    shipping_cost: usize,
    warehouse: usize,
}

impl ColumnMap {
    /// Locates every required column in the header row.
    ///
    /// Fails with `ImportError::MissingColumn` naming the first absent header;
    /// extra columns in the export are simply never looked at.
    pub fn resolve(header: &[Data]) -> Result<Self, ImportError> {
        let find = |name: &str| -> Result<usize, ImportError> {
            header
                .iter()
                .position(|cell| cell_to_string(cell).trim() == name)
                .ok_or_else(|| ImportError::MissingColumn(name.to_string()))
        };

        Ok(Self {
            order_date: find(schema::COL_ORDER_DATE)?,
            product_name: find(schema::COL_PRODUCT_NAME)?,
            article: find(schema::COL_ARTICLE)?,
            amount: find(schema::COL_AMOUNT)?,
            status: find(schema::COL_STATUS)?,
            quantity: find(schema::COL_QUANTITY)?,
            shipping_cost: find(schema::COL_SHIPPING_COST)?,
            warehouse: find(schema::COL_WAREHOUSE)?,
        })
    }
}

/// Normalizes the raw worksheet rows (header first) into canonical order rows.
///
/// The transform is pure and order-preserving: one `OrderRow` per data row,
/// in the order they appear in the sheet. Unparsable dates become `None`
/// rather than an error.
pub fn normalize(rows: &[Vec<Data>]) -> Result<Vec<OrderRow>, ImportError> {
    let header = rows.first().ok_or(ImportError::EmptySheet)?;
    let columns = ColumnMap::resolve(header)?;

    let orders = rows[1..]
        .iter()
        .map(|row| normalize_row(&columns, row))
        .collect();

    Ok(orders)
}

fn normalize_row(columns: &ColumnMap, row: &[Data]) -> OrderRow {
    let cell = |idx: usize| row.get(idx).unwrap_or(&Data::Empty);

    let raw_warehouse = cell_to_string(cell(columns.warehouse));
    OrderRow {
        order_date: parse_order_date(cell(columns.order_date)),
        product_name: cell_to_string(cell(columns.product_name)),
        article: cell_to_string(cell(columns.article)),
        amount: cell_to_decimal(cell(columns.amount)),
        status: OrderStatus::from_raw(&cell_to_string(cell(columns.status))),
        quantity: cell_to_quantity(cell(columns.quantity)),
        shipping_cost: cell_to_decimal(cell(columns.shipping_cost)),
        warehouse: schema::warehouse_display_name(raw_warehouse.trim()).to_string(),
    }
}

/// Coerces any cell to its text content; empty and error cells become "".
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            // Excel stores integer-looking codes as floats; drop the ".0".
            if f.fract() == 0.0 {
                format!("{}", *f as i64)
            } else {
                f.to_string()
            }
        }
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(|d| d.to_string())
            .unwrap_or_default(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Empty | Data::Error(_) => String::new(),
    }
}

/// Lenient currency coercion: numeric cells convert directly, text cells
/// accept a comma decimal separator, everything else is zero.
fn cell_to_decimal(cell: &Data) -> Decimal {
    match cell {
        Data::Float(f) => Decimal::from_f64(*f).unwrap_or(Decimal::ZERO),
        Data::Int(i) => Decimal::from(*i),
        Data::String(s) => {
            let cleaned = s.trim().replace(',', ".").replace(' ', "");
            cleaned.parse::<Decimal>().unwrap_or(Decimal::ZERO)
        }
        _ => Decimal::ZERO,
    }
}

fn cell_to_quantity(cell: &Data) -> u32 {
    match cell {
        Data::Float(f) if *f >= 0.0 => *f as u32,
        Data::Int(i) if *i >= 0 => *i as u32,
        Data::String(s) => s.trim().parse::<u32>().unwrap_or(0),
        _ => 0,
    }
}

/// Parses the order date cell, day-first for textual dates.
///
/// Returns `None` for anything unparsable; a bad date excludes the row from
/// date-bounded views but never aborts the import.
fn parse_order_date(cell: &Data) -> Option<NaiveDateTime> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime(),
        Data::String(s) => parse_date_text(s.trim()),
        Data::DateTimeIso(s) => parse_date_text(s.trim()),
        _ => None,
    }
}

fn parse_date_text(text: &str) -> Option<NaiveDateTime> {
    const DATETIME_FORMATS: [&str; 4] = [
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(text, format) {
            return Some(dt);
        }
    }

    const DATE_FORMATS: [&str; 3] = ["%d.%m.%Y", "%d/%m/%Y", "%Y-%m-%d"];
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date.and_hms_opt(0, 0, 0)?);
        }
    }

    None
}
