use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration from file: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Configuration validation error: {0}")]
    ValidationError(String),

    #[error("Failed to read the costs file: {0}")]
    CostsIo(#[from] std::io::Error),

    #[error("Failed to parse the costs file: {0}")]
    CostsParse(#[from] toml::de::Error),
}
