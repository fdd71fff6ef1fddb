//! Manifest loading

use crate::errors::ManifestError;
use crate::types::Manifest;
use crate::validate::validate;
use std::fs;
use std::path::Path;
use tracing::debug;

impl Manifest {
    /// Parse and validate manifest YAML
    pub fn from_yaml_str(content: &str) -> Result<Self, ManifestError> {
        if content.trim().is_empty() {
            return Err(ManifestError::Empty);
        }

        let raw: serde_yaml::Value = serde_yaml::from_str(content)?;
        validate(&raw)
    }

    /// Read, parse and validate the manifest at `path`
    pub fn load_from_path(path: &Path) -> Result<Self, ManifestError> {
        debug!("Reading action manifest from {:?}", path);

        let content = fs::read_to_string(path)?;
        let manifest = Self::from_yaml_str(&content)?;

        debug!(
            "Action manifest has {} inputs and {} outputs",
            manifest.inputs.as_ref().map_or(0, |f| f.len()),
            manifest.outputs.as_ref().map_or(0, |f| f.len())
        );
        Ok(manifest)
    }
}
