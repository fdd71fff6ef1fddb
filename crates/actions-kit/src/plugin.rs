//! The actions-kit plugin core
//!
//! One [`ActionsKitPlugin`] value serves one build. Build start reads the
//! manifest, writes `actions-kit.d.ts` and caches what the entry transform
//! needs; nothing is shared between instances.

use crate::entry::EntryModule;
use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::state::{BuildPhase, GeneratedBuild, GenerationState};
use actions_kit_config::ActionsKitOptions;
use actions_kit_dts::{generate, render_declaration_file, render_preamble, DECLARATION_FILE_NAME};
use actions_kit_logger as logger;
use actions_kit_manifest::{resolve_manifest_path, Manifest};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub struct ActionsKitPlugin {
    options: ActionsKitOptions,
    root: Option<PathBuf>,
    state: GenerationState,
}

impl ActionsKitPlugin {
    pub const NAME: &'static str = "actions-kit";

    /// Plugin working in the process's current directory
    pub fn new(options: ActionsKitOptions) -> Self {
        Self {
            options,
            root: None,
            state: GenerationState::default(),
        }
    }

    /// Plugin working in `root` instead of the current directory
    pub fn with_root(options: ActionsKitOptions, root: impl Into<PathBuf>) -> Self {
        Self {
            options,
            root: Some(root.into()),
            state: GenerationState::default(),
        }
    }

    pub fn options(&self) -> &ActionsKitOptions {
        &self.options
    }

    pub fn phase(&self) -> BuildPhase {
        self.state.phase()
    }

    pub fn entry(&self) -> Option<&EntryModule> {
        self.state.entry.as_ref()
    }

    /// Manifest read by the last completed build start
    pub fn manifest(&self) -> Option<&Manifest> {
        self.state.build.as_ref().map(|build| &build.manifest)
    }

    pub fn manifest_path(&self) -> Option<&Path> {
        self.state
            .build
            .as_ref()
            .map(|build| build.manifest_path.as_path())
    }

    /// Path of the declaration file written by the last completed build start
    pub fn declaration_path(&self) -> Option<&Path> {
        self.state
            .build
            .as_ref()
            .map(|build| build.declaration_path.as_path())
    }

    fn root(&self) -> Result<PathBuf, PluginError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }

    fn write_declarations(&self, root: &Path) -> Result<GeneratedBuild, PluginError> {
        let configured = self.options.manifest_path_in(root);
        let manifest_path = resolve_manifest_path(configured.as_deref(), root)?;
        logger::step(&format!("Reading action manifest {}", manifest_path.display()));

        let manifest = Manifest::load_from_path(&manifest_path)?;
        if manifest.inputs.is_none() && manifest.outputs.is_none() {
            logger::warn(&format!(
                "{} declares no inputs or outputs",
                manifest_path.display()
            ));
        }

        // Nothing touches the filesystem until generation has succeeded.
        let declarations = generate(&manifest, self.options.inject)?;

        let output_dir = self
            .options
            .output_path_in(root)
            .unwrap_or_else(|| manifest_dir(&manifest_path, root));
        if !output_dir.exists() {
            logger::debug(&format!("Creating output directory {}", output_dir.display()));
            fs::create_dir_all(&output_dir).map_err(|source| PluginError::CreateOutputDir {
                path: output_dir.clone(),
                source,
            })?;
        }

        let declaration_path = output_dir.join(DECLARATION_FILE_NAME);
        fs::write(&declaration_path, render_declaration_file(&declarations)).map_err(|source| {
            PluginError::WriteDeclarations {
                path: declaration_path.clone(),
                source,
            }
        })?;
        info!(path = %declaration_path.display(), inject = %self.options.inject, "wrote declarations");
        logger::success(&format!("Generated {}", declaration_path.display()));

        Ok(GeneratedBuild {
            manifest_path,
            manifest,
            globals: declarations.globals,
            declaration_path,
        })
    }
}

impl BuildHooks for ActionsKitPlugin {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn resolve_id(&mut self, id: &str, is_entry: bool) -> Result<(), PluginError> {
        if !is_entry {
            return Ok(());
        }

        let entry = EntryModule::resolve(id, &self.root()?);
        logger::debug(&format!("Entry module: {}", entry.path().display()));
        self.state.entry = Some(entry);
        Ok(())
    }

    fn build_start(&mut self) -> Result<(), PluginError> {
        let root = self.root()?;
        self.state.build = None;

        if self.options.wants_logging() {
            let log_file = self.options.log_file_in(&root);
            logger::init_with_verbosity(self.options.verbose, log_file.as_deref(), false)
                .map_err(PluginError::Logger)?;
        }

        self.state.build = Some(self.write_declarations(&root)?);
        Ok(())
    }

    fn transform(&self, code: &str, id: &str) -> Result<Option<String>, PluginError> {
        let entry = self
            .state
            .entry
            .as_ref()
            .ok_or(PluginError::EntryNotResolved)?;

        if !entry.matches(id, &self.root()?) {
            return Ok(None);
        }

        if !self.options.inject.is_enabled() {
            return Ok(Some(code.to_string()));
        }

        let build = self
            .state
            .build
            .as_ref()
            .ok_or(PluginError::BuildNotStarted)?;

        logger::debug(&format!(
            "Injecting {} into {}",
            self.options.inject,
            entry.path().display()
        ));
        Ok(Some(format!("{}{}", render_preamble(&build.globals), code)))
    }
}

fn manifest_dir(manifest_path: &Path, root: &Path) -> PathBuf {
    match manifest_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => root.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use crate::plugin::*;
    use actions_kit_config::InjectMode;
    use tempfile::TempDir;

    fn workspace(manifest: &str) -> Option<TempDir> {
        let temp_dir = TempDir::new().ok()?;
        fs::write(temp_dir.path().join("action.yml"), manifest).ok()?;
        Some(temp_dir)
    }

    #[test]
    fn test_phases() {
        let Some(dir) = workspace("inputs:\n  a: 1\n") else {
            return;
        };
        let mut plugin = ActionsKitPlugin::with_root(ActionsKitOptions::default(), dir.path());
        assert_eq!(plugin.phase(), BuildPhase::Idle);

        assert!(plugin.resolve_id("dependency.ts", false).is_ok());
        assert_eq!(plugin.phase(), BuildPhase::Idle);

        assert!(plugin.resolve_id("index.ts", true).is_ok());
        assert_eq!(plugin.phase(), BuildPhase::Resolved);

        assert!(plugin.build_start().is_ok());
        assert_eq!(plugin.phase(), BuildPhase::Generated);
        assert_eq!(
            plugin.declaration_path(),
            Some(dir.path().join(DECLARATION_FILE_NAME).as_path())
        );
    }

    #[test]
    fn test_transform_requires_entry() {
        let plugin = ActionsKitPlugin::with_root(ActionsKitOptions::default(), "/");
        assert!(matches!(
            plugin.transform("code", "index.ts"),
            Err(PluginError::EntryNotResolved)
        ));
    }

    #[test]
    fn test_transform_requires_build_start_when_injecting() {
        let Some(dir) = workspace("inputs:\n  a: 1\n") else {
            return;
        };
        let options = ActionsKitOptions::default().with_inject(InjectMode::InputsOnly);
        let mut plugin = ActionsKitPlugin::with_root(options, dir.path());
        assert!(plugin.resolve_id("index.ts", true).is_ok());

        assert!(matches!(
            plugin.transform("code", "index.ts"),
            Err(PluginError::BuildNotStarted)
        ));
    }

    #[test]
    fn test_failed_build_start_clears_previous_build() {
        let Some(dir) = workspace("inputs:\n  a: 1\n") else {
            return;
        };
        let options = ActionsKitOptions::default().with_inject(InjectMode::InputsOnly);
        let mut plugin = ActionsKitPlugin::with_root(options, dir.path());
        assert!(plugin.build_start().is_ok());
        assert!(plugin.manifest().is_some());

        assert!(fs::write(dir.path().join("action.yml"), "outputs:\n  b: 1\n").is_ok());
        assert!(plugin.build_start().is_err());
        assert!(plugin.manifest().is_none());
        assert_eq!(plugin.phase(), BuildPhase::Idle);
    }

    #[test]
    fn test_relative_manifest_path_uses_root() {
        let Ok(dir) = TempDir::new() else {
            return;
        };
        assert!(fs::create_dir_all(dir.path().join("ci")).is_ok());
        assert!(fs::write(dir.path().join("ci").join("action.yaml"), "outputs: {}\n").is_ok());

        let options = ActionsKitOptions::default().with_manifest_path("ci/action.yaml");
        let mut plugin = ActionsKitPlugin::with_root(options, dir.path());
        assert!(plugin.build_start().is_ok());
        assert!(dir.path().join("ci").join(DECLARATION_FILE_NAME).is_file());
    }

    #[test]
    fn test_written_file_and_cached_globals_come_from_generator() {
        let Some(dir) = workspace("inputs:\n  a: 1\noutputs:\n  b: 2\n") else {
            return;
        };
        let options = ActionsKitOptions::default().with_inject(InjectMode::Both);
        let mut plugin = ActionsKitPlugin::with_root(options, dir.path());
        assert!(plugin.build_start().is_ok());

        let Some(manifest) = plugin.manifest() else {
            panic!("build start should cache the manifest");
        };
        let Ok(expected) = generate(manifest, InjectMode::Both) else {
            panic!("both mappings are present");
        };
        let written = fs::read_to_string(dir.path().join(DECLARATION_FILE_NAME)).unwrap_or_default();
        assert_eq!(written, render_declaration_file(&expected));

        assert!(plugin.resolve_id("index.ts", true).is_ok());
        let rewritten = plugin.transform("run();\n", "index.ts");
        assert!(rewritten.is_ok_and(|code| {
            code == Some(format!("{}run();\n", render_preamble(&expected.globals)))
        }));
    }

    #[test]
    fn test_manifest_dir_falls_back_to_root() {
        let root = Path::new("work");
        assert_eq!(manifest_dir(Path::new("action.yml"), root), root.to_path_buf());
        assert_eq!(
            manifest_dir(&root.join("ci").join("action.yml"), root),
            root.join("ci")
        );
    }
}
