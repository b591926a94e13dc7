use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: Analysis,
    #[serde(default)]
    pub export: Export,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            analysis: Analysis::default(),
            export: Export::default(),
        }
    }
}

/// Parameters of the margin computation.
#[derive(Debug, Clone, Deserialize)]
pub struct Analysis {
    /// The fraction of the gross sale amount the seller retains after the
    /// marketplace commission. 0.83 corresponds to a 17% commission and is
    /// the marketplace's standard rate; category-specific rates can be set
    /// here without touching the engine.
    #[serde(default = "default_commission_rate")]
    pub commission_rate: Decimal,
}

impl Default for Analysis {
    fn default() -> Self {
        Self {
            commission_rate: default_commission_rate(),
        }
    }
}

fn default_commission_rate() -> Decimal {
    dec!(0.83)
}

/// Parameters of the report export.
#[derive(Debug, Clone, Deserialize)]
pub struct Export {
    /// Default path of the exported two-sheet workbook.
    #[serde(default = "default_report_path")]
    pub report_path: String,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
        }
    }
}

fn default_report_path() -> String {
    "kaspi_otchet.xlsx".to_string()
}
