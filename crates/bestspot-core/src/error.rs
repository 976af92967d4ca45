// crates/bestspot-core/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sensor CSV parse failed: {0}")]
    Parser(#[from] bestspot_parser::ParserError),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
