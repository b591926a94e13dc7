//! The marketplace export schema: raw column headers and the warehouse
//! rename table.

/// Raw header of the order date column.
pub const COL_ORDER_DATE: &str = "Дата поступления заказа";
/// Raw header of the seller-system product name column.
pub const COL_PRODUCT_NAME: &str = "Название в системе продавца";
/// Raw header of the article code column.
pub const COL_ARTICLE: &str = "Артикул";
/// Raw header of the gross sale amount column.
pub const COL_AMOUNT: &str = "Сумма";
/// Raw header of the order status column.
pub const COL_STATUS: &str = "Статус";
/// Raw header of the quantity column.
pub const COL_QUANTITY: &str = "Количество";
/// Raw header of the seller-paid delivery cost column.
pub const COL_SHIPPING_COST: &str = "Стоимость доставки для продавца";
/// Raw header of the warehouse transfer code column.
pub const COL_WAREHOUSE: &str = "Склад передачи КД";

/// Every column the importer requires; any additional columns in the export
/// are ignored.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    COL_ORDER_DATE,
    COL_PRODUCT_NAME,
    COL_ARTICLE,
    COL_AMOUNT,
    COL_STATUS,
    COL_QUANTITY,
    COL_SHIPPING_COST,
    COL_WAREHOUSE,
];

/// Maps a raw warehouse transfer code to its display name.
///
/// The table is fixed; codes it does not know are passed through verbatim so
/// that a new warehouse shows up in reports under its raw code instead of
/// disappearing.
pub fn warehouse_display_name(raw: &str) -> &str {
    match raw {
        "2667005_PP1" => "Петропавловск",
        "2667005_PP24" => "Алматы",
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_are_renamed() {
        assert_eq!(warehouse_display_name("2667005_PP1"), "Петропавловск");
        assert_eq!(warehouse_display_name("2667005_PP24"), "Алматы");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(warehouse_display_name("XYZ"), "XYZ");
        assert_eq!(warehouse_display_name(""), "");
    }
}
