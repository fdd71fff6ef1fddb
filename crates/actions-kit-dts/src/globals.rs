use crate::errors::DtsError;
use actions_kit_config::InjectMode;
use actions_kit_manifest::{FieldKind, Manifest};
use std::sync::Arc;

/// A global constant that is both declared in the `.d.ts` and assigned at runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedGlobal {
    pub kind: FieldKind,
    pub names: Vec<Arc<str>>,
}

impl InjectedGlobal {
    /// `ACTION_INPUTS` or `ACTION_OUTPUTS`
    pub fn name(&self) -> &'static str {
        self.kind.global_name()
    }

    /// The identity map as a compact JSON object, e.g. `{"a":"a"}`
    pub fn json_literal(&self) -> String {
        let map: serde_json::Map<String, serde_json::Value> = self
            .names
            .iter()
            .map(|name| (name.to_string(), serde_json::Value::from(name.as_ref())))
            .collect();
        serde_json::Value::Object(map).to_string()
    }
}

/// Resolve which globals an inject mode produces for this manifest.
///
/// Fails when the mode selects a mapping the manifest does not declare;
/// `Both` checks `inputs` before `outputs`.
pub fn select_globals(
    manifest: &Manifest,
    inject: InjectMode,
) -> Result<Vec<InjectedGlobal>, DtsError> {
    let kinds: &[FieldKind] = match inject {
        InjectMode::None => &[],
        InjectMode::InputsOnly => &[FieldKind::Inputs],
        InjectMode::OutputsOnly => &[FieldKind::Outputs],
        InjectMode::Both => &[FieldKind::Inputs, FieldKind::Outputs],
    };

    kinds
        .iter()
        .map(|&kind| {
            manifest
                .fields(kind)
                .ok_or(DtsError::MissingMapping(kind))
                .map(|fields| InjectedGlobal {
                    kind,
                    names: fields.iter().map(|field| field.name.clone()).collect(),
                })
        })
        .collect()
}
