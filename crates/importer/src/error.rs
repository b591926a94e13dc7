use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read the order export file: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("The order export contains no readable worksheet")]
    EmptySheet,

    #[error("Required column '{0}' is missing from the order export")]
    MissingColumn(String),
}
