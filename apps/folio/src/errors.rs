use thiserror::Error;

/// Recoverable wizard-level error.
///
/// Every variant is an expected user-input failure: it blocks the one
/// operation that raised it and leaves the controller and profile untouched.
/// Unknown step indices are a caller contract violation and panic instead of
/// surfacing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WizardError {
    #[error("missing required fields on step {step}: {}", .fields.join(", "))]
    MissingFields { step: u8, fields: Vec<&'static str> },

    #[error("invalid {field}: {value:?}")]
    InvalidFormat { field: &'static str, value: String },

    #[error("duplicate {kind}: {key:?}")]
    Duplicate { kind: &'static str, key: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_all_fields() {
        let err = WizardError::MissingFields {
            step: 1,
            fields: vec!["full-name", "email"],
        };
        let msg = err.to_string();
        assert!(msg.contains("step 1"));
        assert!(msg.contains("full-name"));
        assert!(msg.contains("email"));
    }

    #[test]
    fn test_duplicate_message_names_kind_and_key() {
        let err = WizardError::Duplicate {
            kind: "skill",
            key: "Rust".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate skill: \"Rust\"");
    }
}
