use std::collections::HashMap;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::ConfigError;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{Analysis, Config, Export};

/// Loads the application configuration from the `config.toml` file.
///
/// The file is optional: every setting has a default (notably the
/// marketplace commission rate of 0.83), so a missing file yields the
/// default configuration rather than an error.
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        // Tells the builder to look for a file named `config.toml`.
        .add_source(config::File::with_name("config").required(false))
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct.
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    Ok(config)
}

/// Loads an operator-supplied costs file: a TOML table of `article = cost`
/// pairs. Negative costs are caught later by the ledger's own validation;
/// this function only handles file-shape problems.
///
/// Parsed with plain TOML rather than the `config` builder: articles are
/// case-sensitive join keys, and the `config` crate lowercases table keys.
pub fn load_costs(path: &Path) -> Result<HashMap<String, Decimal>, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    let costs = toml::from_str::<HashMap<String, Decimal>>(&text)?;

    Ok(costs)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    let rate = config.analysis.commission_rate;
    if rate <= Decimal::ZERO || rate > Decimal::ONE {
        return Err(ConfigError::ValidationError(format!(
            "commission_rate must be in (0, 1], got {rate}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn default_config_passes_validation() {
        let config = Config::default();
        assert_eq!(config.analysis.commission_rate, dec!(0.83));
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn costs_file_preserves_article_case() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.toml");
        std::fs::write(&path, "A1 = 200.0\nb2 = 75\n\"КР-01\" = 150.5\n").unwrap();

        let costs = load_costs(&path).unwrap();

        assert_eq!(costs.get("A1"), Some(&dec!(200)));
        assert_eq!(costs.get("b2"), Some(&dec!(75)));
        assert_eq!(costs.get("КР-01"), Some(&dec!(150.5)));
        // The article key must not be case-folded on the way in.
        assert_eq!(costs.get("a1"), None);
    }

    #[test]
    fn malformed_costs_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("costs.toml");
        std::fs::write(&path, "A1 = \"дорого\"\n").unwrap();

        assert!(matches!(load_costs(&path), Err(ConfigError::CostsParse(_))));
    }

    #[test]
    fn out_of_range_commission_rate_is_rejected() {
        let mut config = Config::default();
        config.analysis.commission_rate = dec!(1.5);
        assert!(validate(&config).is_err());

        config.analysis.commission_rate = Decimal::ZERO;
        assert!(validate(&config).is_err());
    }
}
