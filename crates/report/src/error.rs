use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write the report workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
