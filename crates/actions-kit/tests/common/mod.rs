//! Shared helpers for the build simulations

use actions_kit::hosts::rollup::{ResolveIdOptions, RollupPlugin};
use actions_kit::{ActionsKitOptions, ActionsKitPlugin, PluginError};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const ENTRY: &str = "index.ts";

/// Copy `tests/fixtures/<name>` into a fresh temporary directory
pub fn fixture(name: &str) -> io::Result<TempDir> {
    let source = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let dir = TempDir::new()?;
    for entry in fs::read_dir(&source)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::copy(entry.path(), dir.path().join(entry.file_name()))?;
        }
    }
    Ok(dir)
}

pub fn entry_path(dir: &Path) -> PathBuf {
    dir.join(ENTRY)
}

pub fn entry_source(dir: &Path) -> String {
    fs::read_to_string(entry_path(dir)).unwrap_or_default()
}

pub fn declarations(dir: &Path) -> String {
    fs::read_to_string(dir.join("actions-kit.d.ts")).unwrap_or_default()
}

/// Bundled entry after a Rollup-style build over `dir`
pub struct BuildOutput {
    pub entry_code: String,
    pub plugin: ActionsKitPlugin,
}

/// Drive one Rollup build: build start, entry resolution, then transforms of the
/// entry and of a non-entry module (which must come back untouched).
pub fn rollup_build(dir: &Path, options: ActionsKitOptions) -> Result<BuildOutput, PluginError> {
    let mut plugin = RollupPlugin::new(ActionsKitPlugin::with_root(options, dir));
    plugin.build_start()?;

    let entry = entry_path(dir);
    let resolved = plugin.resolve_id(
        &entry.to_string_lossy(),
        None,
        &ResolveIdOptions { is_entry: true },
    )?;
    assert_eq!(resolved, None);
    plugin.resolve_id("@actions/core", Some(ENTRY), &ResolveIdOptions::default())?;

    let source = entry_source(dir);
    let entry_code = plugin
        .transform(&source, &entry.to_string_lossy())?
        .map_or(source, |output| output.code);

    let dependency = plugin.transform("export const x = 1;", "./utils.ts")?;
    assert_eq!(dependency, None);

    Ok(BuildOutput {
        entry_code,
        plugin: plugin.into_inner(),
    })
}
