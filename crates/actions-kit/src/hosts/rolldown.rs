use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::hosts::TransformOutput;
use crate::plugin::ActionsKitPlugin;

/// Arguments of Rolldown's `resolve_id` hook
#[derive(Debug, Clone)]
pub struct HookResolveIdArgs<'a> {
    pub specifier: &'a str,
    pub is_entry: bool,
}

/// Arguments of Rolldown's `transform` hook
#[derive(Debug, Clone)]
pub struct HookTransformArgs<'a> {
    pub id: &'a str,
    pub code: &'a str,
}

/// Rolldown plugin binding
pub struct RolldownPlugin<H = ActionsKitPlugin> {
    hooks: H,
}

impl<H: BuildHooks> RolldownPlugin<H> {
    pub fn new(hooks: H) -> Self {
        Self { hooks }
    }

    pub fn name(&self) -> &'static str {
        self.hooks.name()
    }

    pub fn resolve_id(&mut self, args: &HookResolveIdArgs<'_>) -> Result<Option<String>, PluginError> {
        self.hooks.resolve_id(args.specifier, args.is_entry)?;
        Ok(None)
    }

    pub fn build_start(&mut self) -> Result<(), PluginError> {
        self.hooks.build_start()
    }

    pub fn transform(
        &self,
        args: &HookTransformArgs<'_>,
    ) -> Result<Option<TransformOutput>, PluginError> {
        Ok(TransformOutput::from_code(
            self.hooks.transform(args.code, args.id)?,
        ))
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }
}
