//! Action manifest handling
//!
//! Locates `action.yml`/`action.yaml`, parses it as YAML and validates the
//! shape actions-kit relies on: an optional `inputs` mapping and an optional
//! `outputs` mapping, each keyed by name. Every other top-level key is ignored.

pub mod discovery;
pub mod errors;
pub mod manifest;
pub mod types;
pub mod validate;

pub use discovery::{resolve_manifest_path, DEFAULT_MANIFEST_NAMES};
pub use errors::ManifestError;
pub use types::{ActionField, ActionFields, FieldKind, Manifest};
pub use validate::validate;
