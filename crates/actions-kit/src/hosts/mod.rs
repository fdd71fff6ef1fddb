//! Host bundler bindings
//!
//! Each binding translates one bundler's native hook signatures onto
//! [`BuildHooks`](crate::hooks::BuildHooks). None of them carries build logic.

pub mod esbuild;
pub mod rolldown;
pub mod rollup;
pub mod rspack;
pub mod vite;

/// Output of a Rollup-style `transform` hook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformOutput {
    pub code: String,
    /// Source map for the rewritten code; the prepended preamble is not mapped
    pub map: Option<String>,
}

impl TransformOutput {
    pub(crate) fn from_code(code: Option<String>) -> Option<Self> {
        code.map(|code| TransformOutput { code, map: None })
    }
}
