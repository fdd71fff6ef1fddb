use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which manifest mappings are injected into the entry module's global scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "LegacyInject", into = "LegacyInject")]
pub enum InjectMode {
    /// No runtime injection
    #[default]
    None,
    /// Only `ACTION_INPUTS`
    InputsOnly,
    /// Only `ACTION_OUTPUTS`
    OutputsOnly,
    /// `ACTION_INPUTS` and `ACTION_OUTPUTS`
    Both,
}

impl InjectMode {
    pub fn is_enabled(self) -> bool {
        self != InjectMode::None
    }
}

impl fmt::Display for InjectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            InjectMode::None => "none",
            InjectMode::InputsOnly => "inputs",
            InjectMode::OutputsOnly => "outputs",
            InjectMode::Both => "both",
        };
        f.write_str(label)
    }
}

/// The `boolean | "inputs" | "outputs"` form hosts write in their build config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum LegacyInject {
    Flag(bool),
    Target(String),
}

impl TryFrom<LegacyInject> for InjectMode {
    type Error = ConfigError;

    fn try_from(value: LegacyInject) -> Result<Self, Self::Error> {
        match value {
            LegacyInject::Flag(false) => Ok(InjectMode::None),
            LegacyInject::Flag(true) => Ok(InjectMode::Both),
            LegacyInject::Target(target) => match target.as_str() {
                "inputs" => Ok(InjectMode::InputsOnly),
                "outputs" => Ok(InjectMode::OutputsOnly),
                _ => Err(ConfigError::InvalidInject(target)),
            },
        }
    }
}

impl From<InjectMode> for LegacyInject {
    fn from(mode: InjectMode) -> Self {
        match mode {
            InjectMode::None => LegacyInject::Flag(false),
            InjectMode::Both => LegacyInject::Flag(true),
            InjectMode::InputsOnly => LegacyInject::Target("inputs".to_string()),
            InjectMode::OutputsOnly => LegacyInject::Target("outputs".to_string()),
        }
    }
}
