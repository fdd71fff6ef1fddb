//! Validated manifest types
//!
//! Field names are interned as `Arc<str>` and kept in document order; the
//! metadata attached to each name is carried along untouched.

use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// The validated `inputs`/`outputs` view of an action manifest.
///
/// `None` means the key was absent; an empty [`ActionFields`] means it was
/// present with no entries. The two cases generate different declarations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Manifest {
    pub inputs: Option<ActionFields>,
    pub outputs: Option<ActionFields>,
}

impl Manifest {
    /// Mapping for the given kind, if the manifest declares it
    pub fn fields(&self, kind: FieldKind) -> Option<&ActionFields> {
        match kind {
            FieldKind::Inputs => self.inputs.as_ref(),
            FieldKind::Outputs => self.outputs.as_ref(),
        }
    }
}

/// Ordered name → metadata entries of one manifest mapping
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionFields {
    entries: SmallVec<[ActionField; 4]>,
}

impl ActionFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: &str, metadata: serde_yaml::Value) {
        self.entries.push(ActionField {
            name: Arc::from(name),
            metadata,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ActionField> {
        self.entries.iter()
    }

    /// Field names in document order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|field| field.name.as_ref())
    }

    pub fn get(&self, name: &str) -> Option<&ActionField> {
        self.entries.iter().find(|field| field.name.as_ref() == name)
    }
}

impl<'a> FromIterator<(&'a str, serde_yaml::Value)> for ActionFields {
    fn from_iter<T: IntoIterator<Item = (&'a str, serde_yaml::Value)>>(iter: T) -> Self {
        let mut fields = ActionFields::new();
        for (name, metadata) in iter {
            fields.push(name, metadata);
        }
        fields
    }
}

/// One declared input or output
#[derive(Debug, Clone, PartialEq)]
pub struct ActionField {
    pub name: Arc<str>,
    /// Whatever the manifest attached to the name (description, default, ...)
    pub metadata: serde_yaml::Value,
}

/// Which of the two manifest mappings is meant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Inputs,
    Outputs,
}

impl FieldKind {
    /// Manifest key
    pub fn key(self) -> &'static str {
        match self {
            FieldKind::Inputs => "inputs",
            FieldKind::Outputs => "outputs",
        }
    }

    /// Name of the injected global constant
    pub fn global_name(self) -> &'static str {
        match self {
            FieldKind::Inputs => "ACTION_INPUTS",
            FieldKind::Outputs => "ACTION_OUTPUTS",
        }
    }

    /// Name of the generated union-of-names type
    pub fn type_name(self) -> &'static str {
        match self {
            FieldKind::Inputs => "ActionInputName",
            FieldKind::Outputs => "ActionOutputName",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
