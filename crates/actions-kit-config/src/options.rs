use crate::errors::ConfigError;
use crate::inject::InjectMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Options accepted by the actions-kit plugin.
///
/// Every field is optional. Relative paths are resolved against the plugin's
/// working directory, not the options file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ActionsKitOptions {
    /// Path to `action.yml`/`action.yaml`. When unset, both names are probed
    /// in the working directory.
    #[serde(alias = "actionPath", skip_serializing_if = "Option::is_none")]
    pub manifest_path: Option<PathBuf>,

    /// Inject `inputs` and/or `outputs` into the global scope.
    pub inject: InjectMode,

    /// Directory for the generated `actions-kit.d.ts`. Defaults to the
    /// directory containing the manifest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,

    /// Console verbosity: 0 = warnings only, 1 = debug, 2 = trace
    pub verbose: u8,

    /// Log file written during the build, truncated at build start
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl ActionsKitOptions {
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn with_inject(mut self, inject: InjectMode) -> Self {
        self.inject = inject;
        self
    }

    pub fn with_output_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = Some(path.into());
        self
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    /// Whether the host asked for any logging beyond warnings on the console
    pub fn wants_logging(&self) -> bool {
        self.verbose > 0 || self.log_file.is_some()
    }

    /// Parse options from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Parse options from a JSON document
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }

    /// Load options from a `.toml` or `.json` file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        debug!("Loading plugin options from {:?}", path);

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let content = fs::read_to_string(path)?;

        match format.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    /// Configured manifest path, resolved against `root` when relative
    pub fn manifest_path_in(&self, root: &Path) -> Option<PathBuf> {
        self.manifest_path.as_deref().map(|p| resolve_in(root, p))
    }

    /// Configured output directory, resolved against `root` when relative
    pub fn output_path_in(&self, root: &Path) -> Option<PathBuf> {
        self.output_path.as_deref().map(|p| resolve_in(root, p))
    }

    pub fn log_file_in(&self, root: &Path) -> Option<PathBuf> {
        self.log_file.as_deref().map(|p| resolve_in(root, p))
    }
}

fn resolve_in(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}
