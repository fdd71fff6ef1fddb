use crate::errors::ManifestError;
use crate::types::{ActionFields, FieldKind, Manifest};
use serde_yaml::Value;

/// Validate a parsed YAML document as an action manifest.
///
/// The root must be a mapping. `inputs` and `outputs` are optional, but when
/// present each must be a mapping with string keys. Values are not inspected.
pub fn validate(raw: &Value) -> Result<Manifest, ManifestError> {
    let root = match raw {
        Value::Null => return Err(ManifestError::Empty),
        Value::Mapping(root) => root,
        other => return Err(ManifestError::NotAMapping(kind_name(other))),
    };

    let mut manifest = Manifest::default();
    for kind in [FieldKind::Inputs, FieldKind::Outputs] {
        let Some(value) = root.get(kind.key()) else {
            continue;
        };
        let fields = validate_fields(kind, value)?;
        match kind {
            FieldKind::Inputs => manifest.inputs = Some(fields),
            FieldKind::Outputs => manifest.outputs = Some(fields),
        }
    }

    Ok(manifest)
}

fn validate_fields(kind: FieldKind, value: &Value) -> Result<ActionFields, ManifestError> {
    let Value::Mapping(mapping) = value else {
        return Err(ManifestError::InvalidField {
            field: kind,
            reason: format!("expected a mapping, found {}", kind_name(value)),
        });
    };

    let mut fields = ActionFields::new();
    for (key, metadata) in mapping {
        let Value::String(name) = key else {
            return Err(ManifestError::InvalidField {
                field: kind,
                reason: format!("names must be strings, found {}", kind_name(key)),
            });
        };
        fields.push(name, metadata.clone());
    }

    Ok(fields)
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use crate::validate::*;

    fn parse(yaml: &str) -> Value {
        serde_yaml::from_str(yaml).unwrap_or(Value::Null)
    }

    #[test]
    fn test_accepts_inputs_and_outputs() {
        let raw = parse(
            r#"
name: greet
description: Says hello
inputs:
  who-to-greet:
    description: Who to greet
    default: World
  type:
    required: false
outputs:
  message:
    description: The greeting
"#,
        );
        let Ok(manifest) = validate(&raw) else {
            panic!("manifest should validate");
        };

        let inputs = manifest.inputs.unwrap_or_default();
        assert_eq!(inputs.names().collect::<Vec<_>>(), vec!["who-to-greet", "type"]);
        assert!(inputs
            .get("who-to-greet")
            .is_some_and(|f| f.metadata.get("default") == Some(&Value::from("World"))));
        assert_eq!(manifest.outputs.map(|o| o.len()), Some(1));
    }

    #[test]
    fn test_absent_and_empty_mappings_differ() {
        let Ok(manifest) = validate(&parse("inputs: {}\n")) else {
            panic!("manifest should validate");
        };
        assert!(manifest.inputs.is_some_and(|i| i.is_empty()));
        assert!(manifest.outputs.is_none());
    }

    #[test]
    fn test_ignores_unrelated_keys() {
        let manifest = validate(&parse("name: x\nruns:\n  using: node20\n"));
        assert!(manifest.is_ok_and(|m| m == Manifest::default()));
    }

    #[test]
    fn test_rejects_null_document() {
        assert!(matches!(validate(&Value::Null), Err(ManifestError::Empty)));
    }

    #[test]
    fn test_rejects_non_mapping_root() {
        let result = validate(&parse("- inputs\n- outputs\n"));
        assert!(matches!(result, Err(ManifestError::NotAMapping("a sequence"))));
    }

    #[test]
    fn test_rejects_non_mapping_field() {
        let result = validate(&parse("outputs:\n  - message\n"));
        assert!(matches!(
            result,
            Err(ManifestError::InvalidField {
                field: FieldKind::Outputs,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_null_field() {
        let result = validate(&parse("inputs:\n"));
        assert!(matches!(
            result,
            Err(ManifestError::InvalidField {
                field: FieldKind::Inputs,
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_non_string_names() {
        let result = validate(&parse("inputs:\n  1: {}\n"));
        let message = result.err().map(|e| e.to_string()).unwrap_or_default();
        assert_eq!(
            message,
            "Invalid `inputs` in action manifest: names must be strings, found a number"
        );
    }
}
