use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::plugin::ActionsKitPlugin;
use std::path::PathBuf;

/// The parts of an Rspack compiler the binding reads
#[derive(Debug, Clone, Default)]
pub struct CompilerContext {
    /// Base directory entries are relative to
    pub context: PathBuf,
    /// Configured entry requests
    pub entries: Vec<String>,
}

/// Rspack plugin binding.
///
/// Rspack knows its entries up front, so `apply` marks them before running
/// build start; module sources pass through `load`.
pub struct RspackPlugin<H = ActionsKitPlugin> {
    hooks: H,
}

impl<H: BuildHooks> RspackPlugin<H> {
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    pub fn name(&self) -> &'static str {
        self.hooks.name()
    }

    pub fn apply(&mut self, compiler: &CompilerContext) -> Result<(), PluginError> {
        for entry in &compiler.entries {
            let request = entry.strip_prefix("./").unwrap_or(entry);
            let path = compiler.context.join(request);
            self.hooks.resolve_id(&path.to_string_lossy(), true)?;
        }
        self.hooks.build_start()
    }

    /// Loader step for `resource`; returns the source to hand to the next loader
    pub fn load(&self, resource: &str, source: &str) -> Result<String, PluginError> {
        Ok(self
            .hooks
            .transform(source, resource)?
            .unwrap_or_else(|| source.to_string()))
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}
