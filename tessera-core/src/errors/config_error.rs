/// Configuration loading and validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("invalid weight {name}: {value}")]
    InvalidWeight { name: String, value: f64 },

    #[error("invalid limit {name}: {value} (must be non-zero)")]
    InvalidLimit { name: String, value: usize },
}
