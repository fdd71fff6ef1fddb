use crate::errors::PluginError;
use crate::hooks::BuildHooks;
use crate::hosts::rollup::{ResolveIdOptions, RollupPlugin};
use crate::hosts::TransformOutput;
use crate::plugin::ActionsKitPlugin;

/// Vite's plugin ordering hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enforce {
    Pre,
    Post,
}

/// Vite plugin binding: the Rollup hooks, ordered before core plugins so the
/// entry module is seen untransformed
pub struct VitePlugin<H = ActionsKitPlugin> {
    inner: RollupPlugin<H>,
}

impl<H: BuildHooks> VitePlugin<H> {
    pub fn new(hooks: H) -> Self {
        Self {
            inner: RollupPlugin::new(hooks),
        }
    }

    pub fn name(&self) -> &'static str {
        self.inner.name()
    }

    pub fn enforce(&self) -> Enforce {
        Enforce::Pre
    }

    pub fn resolve_id(
        &mut self,
        source: &str,
        importer: Option<&str>,
        options: &ResolveIdOptions,
    ) -> Result<Option<String>, PluginError> {
        self.inner.resolve_id(source, importer, options)
    }

    pub fn build_start(&mut self) -> Result<(), PluginError> {
        self.inner.build_start()
    }

    pub fn transform(&self, code: &str, id: &str) -> Result<Option<TransformOutput>, PluginError> {
        self.inner.transform(code, id)
    }

    pub fn hooks(&self) -> &H {
        self.inner.hooks()
    }
}
