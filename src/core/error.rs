use thiserror::Error;

/// Errors raised while setting up a simulation.
///
/// Turn processing itself never fails; anomalies there degrade to no-ops
/// with a diagnostic.
#[derive(Error, Debug)]
pub enum SimError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SimError>;
