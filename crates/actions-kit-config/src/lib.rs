//! actions-kit plugin options
//!
//! Options are supplied by the host build configuration. They can be built in
//! code or loaded from a TOML or JSON document. The legacy `inject` surface
//! (`false | "inputs" | "outputs" | true`) is mapped onto [`InjectMode`] here and
//! nowhere else.

pub mod errors;
pub mod inject;
pub mod options;

pub use errors::ConfigError;
pub use inject::InjectMode;
pub use options::ActionsKitOptions;
