use crate::entry::EntryModule;
use actions_kit_dts::InjectedGlobal;
use actions_kit_manifest::Manifest;
use std::path::PathBuf;

/// Where a plugin instance is in its build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildPhase {
    /// Nothing observed yet
    Idle,
    /// Entry module recorded, build start not completed
    Resolved,
    /// Build start completed and the declaration file is written
    Generated,
}

/// Per-build state shared between build start and transform
#[derive(Debug, Default)]
pub struct GenerationState {
    pub entry: Option<EntryModule>,
    pub build: Option<GeneratedBuild>,
}

/// Result of a completed build start
#[derive(Debug, Clone)]
pub struct GeneratedBuild {
    pub manifest_path: PathBuf,
    pub manifest: Manifest,
    /// Globals injected into the entry module, already checked against the manifest
    pub globals: Vec<InjectedGlobal>,
    pub declaration_path: PathBuf,
}

impl GenerationState {
    pub fn phase(&self) -> BuildPhase {
        if self.build.is_some() {
            BuildPhase::Generated
        } else if self.entry.is_some() {
            BuildPhase::Resolved
        } else {
            BuildPhase::Idle
        }
    }
}
