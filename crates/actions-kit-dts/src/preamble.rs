use crate::globals::InjectedGlobal;

/// Render the runtime assignments prepended to the entry module.
///
/// The literals match the constants declared in `actions-kit.d.ts`.
pub fn render_preamble(globals: &[InjectedGlobal]) -> String {
    globals
        .iter()
        .map(|global| format!("globalThis.{} = {};\n", global.name(), global.json_literal()))
        .collect()
}
