use std::path::Path;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_xlsxwriter::{Format, Workbook, Worksheet};

use crate::assembler::ReportBundle;
use crate::error::ReportError;

/// Column headers of the summary sheet, matching the original report.
const SUMMARY_HEADERS: [&str; 7] = [
    "Артикул",
    "Название товара",
    "Склад",
    "Кол_заказов",
    "Сумма_продаж",
    "Средняя_себестоимость",
    "Общая_маржа",
];

/// Column headers of the detail sheet, matching the original report.
const DETAIL_HEADERS: [&str; 10] = [
    "Дата заказа",
    "Название товара",
    "Артикул",
    "Сумма",
    "Статус",
    "Количество",
    "Доставка",
    "Склад",
    "Себестоимость",
    "Чистая маржа",
];

/// Writes the bundle as a two-sheet workbook: "Сводка" (one row per group)
/// and "Детали" (one row per working-set order line).
pub fn write_xlsx(bundle: &ReportBundle, path: &Path) -> Result<(), ReportError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let summary_sheet = workbook.add_worksheet().set_name("Сводка")?;
    write_summary_sheet(summary_sheet, bundle, &bold)?;

    let detail_sheet = workbook.add_worksheet().set_name("Детали")?;
    write_detail_sheet(detail_sheet, bundle, &bold)?;

    workbook.save(path)?;
    tracing::info!(path = %path.display(), "Report workbook written.");

    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    bundle: &ReportBundle,
    bold: &Format,
) -> Result<(), ReportError> {
    for (col, header) in SUMMARY_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }

    for (idx, row) in bundle.summary.iter().enumerate() {
        let r = (idx + 1) as u32;
        sheet.write_string(r, 0, &row.article)?;
        sheet.write_string(r, 1, &row.product_name)?;
        sheet.write_string(r, 2, &row.warehouse)?;
        sheet.write_number(r, 3, row.total_orders as f64)?;
        sheet.write_number(r, 4, decimal_cell(row.total_sales))?;
        sheet.write_number(r, 5, decimal_cell(row.avg_cost))?;
        sheet.write_number(r, 6, decimal_cell(row.total_margin))?;
    }

    Ok(())
}

fn write_detail_sheet(
    sheet: &mut Worksheet,
    bundle: &ReportBundle,
    bold: &Format,
) -> Result<(), ReportError> {
    for (col, header) in DETAIL_HEADERS.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, bold)?;
    }

    for (idx, derived) in bundle.detail.iter().enumerate() {
        let r = (idx + 1) as u32;
        let row = &derived.row;

        let date_text = row
            .order_date
            .map(|dt| dt.format("%d.%m.%Y %H:%M").to_string())
            .unwrap_or_default();

        sheet.write_string(r, 0, &date_text)?;
        sheet.write_string(r, 1, &row.product_name)?;
        sheet.write_string(r, 2, &row.article)?;
        sheet.write_number(r, 3, decimal_cell(row.amount))?;
        sheet.write_string(r, 4, row.status.as_str())?;
        sheet.write_number(r, 5, f64::from(row.quantity))?;
        sheet.write_number(r, 6, decimal_cell(row.shipping_cost))?;
        sheet.write_string(r, 7, &row.warehouse)?;
        sheet.write_number(r, 8, decimal_cell(derived.unit_cost))?;
        sheet.write_number(r, 9, decimal_cell(derived.margin))?;
    }

    Ok(())
}

fn decimal_cell(value: Decimal) -> f64 {
    value.to_f64().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core_types::{DerivedRow, OrderRow, OrderStatus, SalesStats, SummaryRow};
    use rust_decimal_macros::dec;

    fn sample_bundle() -> ReportBundle {
        let row = OrderRow {
            order_date: NaiveDate::from_ymd_opt(2024, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0),
            product_name: "Widget".to_string(),
            article: "A1".to_string(),
            amount: dec!(1000),
            status: OrderStatus::Issued,
            quantity: 2,
            shipping_cost: dec!(50),
            warehouse: "Алматы".to_string(),
        };
        ReportBundle {
            summary: vec![SummaryRow {
                article: "A1".to_string(),
                product_name: "Widget".to_string(),
                warehouse: "Алматы".to_string(),
                total_orders: 2,
                total_sales: dec!(1000),
                avg_cost: dec!(200),
                total_margin: dec!(330),
            }],
            detail: vec![DerivedRow {
                row,
                unit_cost: dec!(200),
                margin: dec!(330),
            }],
            stats: SalesStats::new(),
            period: (
                NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            ),
        }
    }

    #[test]
    fn writes_a_two_sheet_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("otchet.xlsx");

        write_xlsx(&sample_bundle(), &path).unwrap();

        let written = std::fs::metadata(&path).unwrap();
        assert!(written.len() > 0);
    }
}
