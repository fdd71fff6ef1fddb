use crate::errors::PluginError;

/// The hook capability set every host binding drives.
///
/// Hosts call these in build order: `resolve_id` for modules they resolve
/// (flagging the entry), `build_start` once per build, then `transform` for
/// each module. `resolve_id` and `build_start` may arrive in either order;
/// both must complete before the entry module is transformed.
pub trait BuildHooks {
    /// Plugin name reported to the host
    fn name(&self) -> &'static str;

    /// Observe module resolution. Never claims or rewrites the resolution.
    fn resolve_id(&mut self, id: &str, is_entry: bool) -> Result<(), PluginError>;

    /// Read the manifest and write the declaration file
    fn build_start(&mut self) -> Result<(), PluginError>;

    /// Rewrite module source. `Ok(None)` leaves the module untouched.
    fn transform(&self, code: &str, id: &str) -> Result<Option<String>, PluginError>;
}
