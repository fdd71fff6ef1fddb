use crate::errors::ManifestError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names probed, in order, when no manifest path is configured
pub const DEFAULT_MANIFEST_NAMES: [&str; 2] = ["action.yml", "action.yaml"];

/// Resolve the manifest to read for this build.
///
/// A configured path is used as-is and must exist. Otherwise `action.yml` and
/// then `action.yaml` are probed in `root`.
pub fn resolve_manifest_path(
    configured: Option<&Path>,
    root: &Path,
) -> Result<PathBuf, ManifestError> {
    if let Some(path) = configured {
        if path.is_file() {
            return Ok(path.to_path_buf());
        }
        return Err(ManifestError::ConfiguredNotFound(path.to_path_buf()));
    }

    for name in DEFAULT_MANIFEST_NAMES {
        let candidate = root.join(name);
        debug!("Probing for action manifest at {:?}", candidate);
        if candidate.is_file() {
            return Ok(candidate);
        }
    }

    Err(ManifestError::NotFound(root.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use crate::discovery::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prefers_action_yml() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        assert!(fs::write(temp_dir.path().join("action.yml"), "inputs: {}\n").is_ok());
        assert!(fs::write(temp_dir.path().join("action.yaml"), "inputs: {}\n").is_ok());

        let resolved = resolve_manifest_path(None, temp_dir.path());
        assert!(resolved.is_ok_and(|p| p.ends_with("action.yml")));
    }

    #[test]
    fn test_falls_back_to_action_yaml() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        assert!(fs::write(temp_dir.path().join("action.yaml"), "inputs: {}\n").is_ok());

        let resolved = resolve_manifest_path(None, temp_dir.path());
        assert!(resolved.is_ok_and(|p| p.ends_with("action.yaml")));
    }

    #[test]
    fn test_missing_defaults() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        let resolved = resolve_manifest_path(None, temp_dir.path());
        assert!(matches!(resolved, Err(ManifestError::NotFound(_))));
    }

    #[test]
    fn test_configured_path_must_exist() {
        let Ok(temp_dir) = TempDir::new() else {
            return;
        };
        // A default-named file does not rescue a wrong configured path.
        assert!(fs::write(temp_dir.path().join("action.yml"), "inputs: {}\n").is_ok());
        let configured = temp_dir.path().join("ci").join("action.yml");

        let resolved = resolve_manifest_path(Some(&configured), temp_dir.path());
        assert!(matches!(resolved, Err(ManifestError::ConfiguredNotFound(p)) if p == configured));
    }
}
