use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::plugin::ActionsKitPlugin;
use std::path::{Path, PathBuf};

/// Why esbuild is resolving a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveKind {
    EntryPoint,
    ImportStatement,
    RequireCall,
    DynamicImport,
}

/// Arguments of esbuild's `onResolve` callback
#[derive(Debug, Clone)]
pub struct OnResolveArgs {
    pub path: String,
    pub resolve_dir: PathBuf,
    pub kind: ResolveKind,
}

/// Arguments of esbuild's `onLoad` callback
#[derive(Debug, Clone)]
pub struct OnLoadArgs {
    pub path: PathBuf,
}

/// Result of esbuild's `onLoad` callback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnLoadResult {
    pub contents: String,
}

/// esbuild plugin binding
pub struct EsbuildPlugin<H = ActionsKitPlugin> {
    hooks: H,
}

impl<H: BuildHooks> EsbuildPlugin<H> {
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    pub fn name(&self) -> &'static str {
        self.hooks.name()
    }

    pub fn on_start(&mut self) -> Result<(), PluginError> {
        self.hooks.build_start()
    }

    /// Records entry points; resolution is always left to esbuild
    pub fn on_resolve(&mut self, args: &OnResolveArgs) -> Result<Option<PathBuf>, PluginError> {
        if args.kind == ResolveKind::EntryPoint {
            let path = resolve_in(&args.resolve_dir, &args.path);
            self.hooks.resolve_id(&path.to_string_lossy(), true)?;
        }
        Ok(None)
    }

    /// `Ok(None)` lets esbuild load the file itself
    pub fn on_load(
        &self,
        args: &OnLoadArgs,
        contents: &str,
    ) -> Result<Option<OnLoadResult>, PluginError> {
        let rewritten = self.hooks.transform(contents, &args.path.to_string_lossy())?;
        Ok(rewritten.map(|contents| OnLoadResult { contents }))
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}

fn resolve_in(dir: &Path, path: &str) -> PathBuf {
    let path = Path::new(path);
    if path.is_absolute() || dir.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        dir.join(path)
    }
}
