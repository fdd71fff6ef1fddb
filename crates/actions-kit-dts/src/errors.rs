use actions_kit_manifest::FieldKind;
use thiserror::Error;

/// Errors raised while generating declarations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DtsError {
    #[error("{0} is not defined in the action manifest")]
    MissingMapping(FieldKind),
}

#[cfg(test)]
mod tests {
    use crate::errors::*;

    #[test]
    fn test_missing_mapping_display() {
        assert_eq!(
            DtsError::MissingMapping(FieldKind::Outputs).to_string(),
            "outputs is not defined in the action manifest"
        );
    }
}
