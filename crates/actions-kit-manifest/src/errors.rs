use crate::types::FieldKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while locating, reading or validating an action manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("action.yml or action.yaml is required in {}", .0.display())]
    NotFound(PathBuf),

    #[error("Action manifest not found: {}", .0.display())]
    ConfiguredNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse action manifest: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Action manifest is empty")]
    Empty,

    #[error("Action manifest must be a mapping at the top level, found {0}")]
    NotAMapping(&'static str),

    #[error("Invalid `{field}` in action manifest: {reason}")]
    InvalidField { field: FieldKind, reason: String },
}
