use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading plugin options
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML options: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON options: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid `inject` value '{0}': expected true, false, \"inputs\" or \"outputs\"")]
    InvalidInject(String),

    #[error("Unsupported options file format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
}
