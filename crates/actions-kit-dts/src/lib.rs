//! Declaration generation for action manifests
//!
//! Everything in this crate is a pure function of a validated [`Manifest`] and
//! an [`InjectMode`]: the same inputs always render byte-identical text.
//!
//! [`Manifest`]: actions_kit_manifest::Manifest
//! [`InjectMode`]: actions_kit_config::InjectMode

pub mod errors;
pub mod file;
pub mod generator;
pub mod globals;
pub mod preamble;

pub use errors::DtsError;
pub use file::{render_declaration_file, CORE_MODULE, DECLARATION_FILE_NAME};
pub use generator::{generate, render_augmentation, render_injection, Declarations};
pub use globals::{select_globals, InjectedGlobal};
pub use preamble::render_preamble;
