use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::hosts::TransformOutput;
use crate::plugin::ActionsKitPlugin;

/// Options Rollup passes to `resolveId`
#[derive(Debug, Clone, Default)]
pub struct ResolveIdOptions {
    pub is_entry: bool,
}

/// Rollup plugin binding
pub struct RollupPlugin<H = ActionsKitPlugin> {
    hooks: H,
}

impl<H: BuildHooks> RollupPlugin<H> {
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    pub fn name(&self) -> &'static str {
        self.hooks.name()
    }

    /// Always defers resolution to other plugins
    pub fn resolve_id(
        &mut self,
        source: &str,
        _importer: Option<&str>,
        options: &ResolveIdOptions,
    ) -> Result<Option<String>, PluginError> {
        self.hooks.resolve_id(source, options.is_entry)?;
        Ok(None)
    }

    pub fn build_start(&mut self) -> Result<(), PluginError> {
        self.hooks.build_start()
    }

    pub fn transform(&self, code: &str, id: &str) -> Result<Option<TransformOutput>, PluginError> {
        Ok(TransformOutput::from_code(self.hooks.transform(code, id)?))
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn into_inner(self) -> H {
        self.hooks
    }
}
