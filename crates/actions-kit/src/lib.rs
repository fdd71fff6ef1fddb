//! actions-kit build plugin
//!
//! Generates `actions-kit.d.ts` from an action's `action.yml`, narrowing the
//! `@actions/core` accessors to the declared input and output names, and can
//! inject `ACTION_INPUTS`/`ACTION_OUTPUTS` into the entry module at build time.
//!
//! The plugin core implements [`BuildHooks`]; the bindings under [`hosts`] adapt
//! it to Rollup, Rolldown, Vite, Rspack and esbuild.

pub mod entry;
pub mod errors;
pub mod hooks;
pub mod hosts;
pub mod plugin;
pub mod state;

pub use actions_kit_config::{ActionsKitOptions, InjectMode};
pub use errors::PluginError;
pub use hooks::BuildHooks;
pub use plugin::ActionsKitPlugin;
pub use state::BuildPhase;

use hosts::esbuild::EsbuildPlugin;
use hosts::rolldown::RolldownPlugin;
use hosts::rollup::RollupPlugin;
use hosts::rspack::RspackPlugin;
use hosts::vite::VitePlugin;

/// Rollup plugin
pub fn rollup(options: ActionsKitOptions) -> RollupPlugin {
    RollupPlugin::new(ActionsKitPlugin::new(options))
}

/// Rolldown plugin
pub fn rolldown(options: ActionsKitOptions) -> RolldownPlugin {
    RolldownPlugin::new(ActionsKitPlugin::new(options))
}

/// Vite plugin
pub fn vite(options: ActionsKitOptions) -> VitePlugin {
    VitePlugin::new(ActionsKitPlugin::new(options))
}

/// Rspack plugin
pub fn rspack(options: ActionsKitOptions) -> RspackPlugin {
    RspackPlugin::new(ActionsKitPlugin::new(options))
}

/// esbuild plugin
pub fn esbuild(options: ActionsKitOptions) -> EsbuildPlugin {
    EsbuildPlugin::new(ActionsKitPlugin::new(options))
}
