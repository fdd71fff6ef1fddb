//! Errors surfaced to the host bundler
//!
//! Every hook returns [`PluginError`]; hosts report it through their own error
//! channel. Nothing is retried.

use actions_kit_config::ConfigError;
use actions_kit_dts::DtsError;
use actions_kit_manifest::ManifestError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error("Entry module was never resolved; the host must report entry resolution before transforming modules")]
    EntryNotResolved,

    #[error("Build start has not completed for this plugin instance")]
    BuildNotStarted,

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Manifest(#[from] ManifestError),

    #[error("{0}")]
    Declarations(#[from] DtsError),

    #[error("Failed to create output directory {path}: {source}")]
    CreateOutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    WriteDeclarations {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to initialize logging: {0}")]
    Logger(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;
    use actions_kit_manifest::FieldKind;

    #[test]
    fn test_declaration_error_is_forwarded_verbatim() {
        let err = PluginError::from(DtsError::MissingMapping(FieldKind::Inputs));
        assert_eq!(err.to_string(), "inputs is not defined in the action manifest");
    }

    #[test]
    fn test_write_error_names_path() {
        let err = PluginError::WriteDeclarations {
            path: PathBuf::from("types/actions-kit.d.ts"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "Failed to write types/actions-kit.d.ts: denied");
    }

    #[test]
    fn test_manifest_error_is_forwarded_verbatim() {
        let err = PluginError::from(ManifestError::Empty);
        assert_eq!(err.to_string(), "Action manifest is empty");
    }
}
