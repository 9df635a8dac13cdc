//! Static step schema: the data contract of each wizard step.
//!
//! One table entry per step declares which profile fields the step owns,
//! which are required, and any format validators. The controller validates
//! and commits against this table instead of ad hoc per-step logic, so the
//! contract itself is testable.

use std::collections::HashMap;

pub const FIRST_STEP: u8 = 1;
pub const LAST_STEP: u8 = 6;

/// Profile subpath a committed field value is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTarget {
    FullName,
    Title,
    Email,
    Phone,
    Location,
    ProfileImage,
    About,
    SocialGithub,
    SocialLinkedin,
    SocialTwitter,
    SocialWebsite,
    SocialResume,
}

/// One named input field owned by a step.
pub struct FieldSpec {
    pub id: &'static str,
    pub target: FieldTarget,
    pub required: bool,
    pub validator: Option<fn(&str) -> bool>,
}

/// One wizard step and the scalar fields it commits.
///
/// Steps 2-4 own collections (skills/education/projects) that are edited
/// through dedicated add/remove operations, so their scalar field list is
/// empty. Step 6 commits through `select_variant`.
pub struct StepSpec {
    pub step: u8,
    pub name: &'static str,
    pub fields: &'static [FieldSpec],
}

const PERSONAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "full-name",
        target: FieldTarget::FullName,
        required: true,
        validator: None,
    },
    FieldSpec {
        id: "title",
        target: FieldTarget::Title,
        required: true,
        validator: None,
    },
    FieldSpec {
        id: "email",
        target: FieldTarget::Email,
        required: true,
        validator: Some(is_valid_email),
    },
    FieldSpec {
        id: "phone",
        target: FieldTarget::Phone,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "location",
        target: FieldTarget::Location,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "profile-image",
        target: FieldTarget::ProfileImage,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "about",
        target: FieldTarget::About,
        required: true,
        validator: None,
    },
];

const SOCIAL_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        id: "social-github",
        target: FieldTarget::SocialGithub,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "social-linkedin",
        target: FieldTarget::SocialLinkedin,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "social-twitter",
        target: FieldTarget::SocialTwitter,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "social-website",
        target: FieldTarget::SocialWebsite,
        required: false,
        validator: None,
    },
    FieldSpec {
        id: "social-resume",
        target: FieldTarget::SocialResume,
        required: false,
        validator: None,
    },
];

const STEPS: &[StepSpec] = &[
    StepSpec {
        step: 1,
        name: "personal",
        fields: PERSONAL_FIELDS,
    },
    StepSpec {
        step: 2,
        name: "skills",
        fields: &[],
    },
    StepSpec {
        step: 3,
        name: "education",
        fields: &[],
    },
    StepSpec {
        step: 4,
        name: "projects",
        fields: &[],
    },
    StepSpec {
        step: 5,
        name: "social",
        fields: SOCIAL_FIELDS,
    },
    StepSpec {
        step: 6,
        name: "template",
        fields: &[],
    },
];

/// Looks up the schema entry for a step. Panics on an out-of-range index:
/// the controller asserts step bounds before any lookup, so reaching here
/// with a bad index is a contract violation.
pub fn step_spec(step: u8) -> &'static StepSpec {
    assert!(
        (FIRST_STEP..=LAST_STEP).contains(&step),
        "step {step} is outside the wizard range {FIRST_STEP}..={LAST_STEP}"
    );
    &STEPS[(step - 1) as usize]
}

/// Field values supplied by the input surface before a forward navigation,
/// keyed by field id.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    values: HashMap<String, String>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: &str, value: &str) -> &mut Self {
        self.values.insert(id.to_string(), value.to_string());
        self
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }
}

/// Email shape check equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`:
/// exactly one `@`, a non-empty local part, and a domain with at least one
/// dot separating non-empty segments, with no whitespace anywhere.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.split('@');
    let (local, domain) = match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_covers_all_six_steps_in_order() {
        for step in FIRST_STEP..=LAST_STEP {
            assert_eq!(step_spec(step).step, step);
        }
    }

    #[test]
    fn test_only_step_one_has_required_fields() {
        for step in FIRST_STEP..=LAST_STEP {
            let required: Vec<&str> = step_spec(step)
                .fields
                .iter()
                .filter(|f| f.required)
                .map(|f| f.id)
                .collect();
            if step == 1 {
                assert_eq!(required, vec!["full-name", "title", "email", "about"]);
            } else {
                assert!(required.is_empty(), "step {step} must not block navigation");
            }
        }
    }

    #[test]
    fn test_only_email_carries_a_validator() {
        let with_validator: Vec<&str> = STEPS
            .iter()
            .flat_map(|s| s.fields)
            .filter(|f| f.validator.is_some())
            .map(|f| f.id)
            .collect();
        assert_eq!(with_validator, vec!["email"]);
    }

    #[test]
    #[should_panic(expected = "outside the wizard range")]
    fn test_step_spec_panics_on_unknown_step() {
        step_spec(7);
    }

    #[test]
    fn test_email_accepts_basic_shapes() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("first.last@sub.domain.io"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_email_rejects_malformed_shapes() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("missing@tld"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("two@@example.com"));
        assert!(!is_valid_email("spaced name@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_field_values_overwrite_on_repeat_set() {
        let mut values = FieldValues::new();
        values.set("full-name", "Ada");
        values.set("full-name", "Ada Lovelace");
        assert_eq!(values.get("full-name"), Some("Ada Lovelace"));
        assert_eq!(values.get("missing"), None);
    }
}
