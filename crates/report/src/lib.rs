//! # Report Assembler
//!
//! Packages one pipeline run into an exportable snapshot and writes the
//! two-sheet ("Сводка" / "Детали") report workbook.

pub mod assembler;
pub mod error;
pub mod export;

// Re-export the key components to create a clean, public-facing API.
pub use assembler::{ReportAssembler, ReportBundle};
pub use error::ReportError;
pub use export::write_xlsx;
