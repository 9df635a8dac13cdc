//! Step state machine for the guided profile wizard.
//!
//! Forward navigation validates the CURRENT step against the schema table
//! and commits its field values into the owned profile before moving.
//! Backward navigation is unconditional and commits nothing; that asymmetry
//! is intentional and user-visible. Collection steps (skills, education,
//! projects) are edited through dedicated add/remove operations that enforce
//! their own required-field and uniqueness invariants.

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::errors::WizardError;
use crate::models::profile::{Education, Profile, Proficiency, Project, Skill};
use crate::models::variant::Variant;
use crate::templates::{self, Bundle};
use crate::wizard::schema::{step_spec, FieldTarget, FieldValues, FIRST_STEP, LAST_STEP};

/// Owns the session profile and the step pointer. All mutation of the
/// profile goes through this controller; compilation borrows it read-only.
#[derive(Debug, Clone)]
pub struct StepController {
    session_id: Uuid,
    current_step: u8,
    profile: Profile,
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepController {
    pub fn new() -> Self {
        let session_id = Uuid::new_v4();
        info!("Wizard session {session_id} started at step {FIRST_STEP}");
        StepController {
            session_id,
            current_step: FIRST_STEP,
            profile: Profile::default(),
        }
    }

    pub fn session_id(&self) -> Uuid {
        self.session_id
    }

    pub fn current_step(&self) -> u8 {
        self.current_step
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Forward navigation. Validates the current step's schema entry against
    /// `values`, commits every present field into the profile, then moves to
    /// `target`. On error the profile and step pointer are untouched.
    ///
    /// Panics if `target` is outside 1..=6: an unknown step index is a bug
    /// in the presentation layer, not a recoverable user error.
    pub fn next_step(&mut self, target: u8, values: &FieldValues) -> Result<u8, WizardError> {
        assert_step_in_range(target);

        if let Err(err) = self.validate_current_step(values) {
            warn!(
                "Session {}: step {} blocked: {err}",
                self.session_id, self.current_step
            );
            return Err(err);
        }

        self.commit(values);
        info!(
            "Session {}: step {} -> {}",
            self.session_id, self.current_step, target
        );
        self.current_step = target;
        Ok(self.current_step)
    }

    /// Backward navigation: always succeeds, never validates, never commits.
    ///
    /// Panics if `target` is outside 1..=6.
    pub fn previous_step(&mut self, target: u8) -> u8 {
        assert_step_in_range(target);
        info!(
            "Session {}: step {} -> {} (back, no commit)",
            self.session_id, self.current_step, target
        );
        self.current_step = target;
        self.current_step
    }

    fn validate_current_step(&self, values: &FieldValues) -> Result<(), WizardError> {
        let spec = step_spec(self.current_step);

        let missing: Vec<&'static str> = spec
            .fields
            .iter()
            .filter(|f| f.required)
            .filter(|f| values.get(f.id).map_or(true, |v| v.trim().is_empty()))
            .map(|f| f.id)
            .collect();
        if !missing.is_empty() {
            return Err(WizardError::MissingFields {
                step: spec.step,
                fields: missing,
            });
        }

        for field in spec.fields {
            if let (Some(validate), Some(value)) = (field.validator, values.get(field.id)) {
                let value = value.trim();
                if !value.is_empty() && !validate(value) {
                    return Err(WizardError::InvalidFormat {
                        field: field.id,
                        value: value.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Writes every present field value to its profile subpath. Idempotent:
    /// committing identical values leaves the profile value-equal.
    fn commit(&mut self, values: &FieldValues) {
        let spec = step_spec(self.current_step);
        for field in spec.fields {
            if let Some(value) = values.get(field.id) {
                let value = value.trim().to_string();
                debug!(
                    "Session {}: commit {} ({} chars)",
                    self.session_id,
                    field.id,
                    value.len()
                );
                let p = &mut self.profile;
                match field.target {
                    FieldTarget::FullName => p.personal.full_name = value,
                    FieldTarget::Title => p.personal.title = value,
                    FieldTarget::Email => p.personal.email = value,
                    FieldTarget::Phone => p.personal.phone = value,
                    FieldTarget::Location => p.personal.location = value,
                    FieldTarget::ProfileImage => p.personal.profile_image = value,
                    FieldTarget::About => p.personal.about = value,
                    FieldTarget::SocialGithub => p.social.github = value,
                    FieldTarget::SocialLinkedin => p.social.linkedin = value,
                    FieldTarget::SocialTwitter => p.social.twitter = value,
                    FieldTarget::SocialWebsite => p.social.website = value,
                    FieldTarget::SocialResume => p.social.resume = value,
                }
            }
        }
    }

    // ────────────────────────────────────────────────────────────────────
    // Collection operations (independent of step navigation)
    // ────────────────────────────────────────────────────────────────────

    /// Adds a skill. Name is required; blank category defaults to "Other";
    /// proficiency parses totally. Names are unique case-insensitively.
    pub fn add_skill(
        &mut self,
        name: &str,
        category: &str,
        proficiency: &str,
    ) -> Result<(), WizardError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WizardError::MissingFields {
                step: 2,
                fields: vec!["skill-name"],
            });
        }
        let key = name.to_lowercase();
        if self
            .profile
            .skills
            .iter()
            .any(|s| s.name.to_lowercase() == key)
        {
            return Err(WizardError::Duplicate {
                kind: "skill",
                key: name.to_string(),
            });
        }
        let category = category.trim();
        self.profile.skills.push(Skill {
            name: name.to_string(),
            category: if category.is_empty() {
                "Other".to_string()
            } else {
                category.to_string()
            },
            proficiency: Proficiency::parse(proficiency),
        });
        debug!("Session {}: added skill {name:?}", self.session_id);
        Ok(())
    }

    /// Removes a skill by its case-insensitive name key. No-op when absent.
    pub fn remove_skill(&mut self, name: &str) {
        let key = name.trim().to_lowercase();
        self.profile.skills.retain(|s| s.name.to_lowercase() != key);
    }

    /// Adds an education entry. Institution, degree and year are required;
    /// the (institution, degree) pair must be unique.
    pub fn add_education(
        &mut self,
        institution: &str,
        degree: &str,
        year: &str,
        description: &str,
    ) -> Result<(), WizardError> {
        let institution = institution.trim();
        let degree = degree.trim();
        let year = year.trim();

        let mut missing = Vec::new();
        if institution.is_empty() {
            missing.push("institution");
        }
        if degree.is_empty() {
            missing.push("degree");
        }
        if year.is_empty() {
            missing.push("year");
        }
        if !missing.is_empty() {
            return Err(WizardError::MissingFields {
                step: 3,
                fields: missing,
            });
        }
        if self
            .profile
            .education
            .iter()
            .any(|e| e.institution == institution && e.degree == degree)
        {
            return Err(WizardError::Duplicate {
                kind: "education",
                key: format!("{institution} / {degree}"),
            });
        }
        self.profile.education.push(Education {
            institution: institution.to_string(),
            degree: degree.to_string(),
            year: year.to_string(),
            description: description.trim().to_string(),
        });
        debug!(
            "Session {}: added education {institution:?} / {degree:?}",
            self.session_id
        );
        Ok(())
    }

    /// Removes the education entry matching the (institution, degree) pair.
    /// No-op when absent.
    pub fn remove_education(&mut self, institution: &str, degree: &str) {
        let institution = institution.trim();
        let degree = degree.trim();
        self.profile
            .education
            .retain(|e| !(e.institution == institution && e.degree == degree));
    }

    /// Adds a project. Title, description and technologies are required;
    /// titles must be unique.
    #[allow(clippy::too_many_arguments)]
    pub fn add_project(
        &mut self,
        title: &str,
        description: &str,
        technologies: &str,
        github: &str,
        demo: &str,
        image: &str,
    ) -> Result<(), WizardError> {
        let title = title.trim();
        let description = description.trim();
        let technologies = technologies.trim();

        let mut missing = Vec::new();
        if title.is_empty() {
            missing.push("project-title");
        }
        if description.is_empty() {
            missing.push("project-description");
        }
        if technologies.is_empty() {
            missing.push("project-technologies");
        }
        if !missing.is_empty() {
            return Err(WizardError::MissingFields {
                step: 4,
                fields: missing,
            });
        }
        if self.profile.projects.iter().any(|p| p.title == title) {
            return Err(WizardError::Duplicate {
                kind: "project",
                key: title.to_string(),
            });
        }
        self.profile.projects.push(Project {
            title: title.to_string(),
            description: description.to_string(),
            technologies: technologies.to_string(),
            github: github.trim().to_string(),
            demo: demo.trim().to_string(),
            image: image.trim().to_string(),
        });
        debug!("Session {}: added project {title:?}", self.session_id);
        Ok(())
    }

    /// Removes a project by exact title. No-op when absent.
    pub fn remove_project(&mut self, title: &str) {
        let title = title.trim();
        self.profile.projects.retain(|p| p.title != title);
    }

    // ────────────────────────────────────────────────────────────────────
    // Terminal transition
    // ────────────────────────────────────────────────────────────────────

    /// Stores the selected variant. Total: an unrecognized identifier falls
    /// back to `Modern` with a warning, per the documented default.
    pub fn select_variant(&mut self, id: &str) -> Variant {
        let variant = match Variant::try_from_id(id) {
            Some(variant) => variant,
            None => {
                warn!(
                    "Session {}: unknown variant {id:?}, falling back to modern",
                    self.session_id
                );
                Variant::Modern
            }
        };
        self.profile.selected_variant = Some(variant);
        info!("Session {}: selected variant {}", self.session_id, variant.id());
        variant
    }

    /// Compiles the collected profile with the selected variant (or the
    /// `Modern` default when none was selected). Pure with respect to the
    /// controller: the profile is borrowed, never mutated.
    pub fn compile(&self) -> Bundle {
        let variant = self.profile.selected_variant.unwrap_or_default();
        templates::compile(&self.profile, variant)
    }

    /// Clears the profile and returns to step 1 with no durable trace.
    pub fn start_over(&mut self) {
        info!("Session {}: start over", self.session_id);
        self.profile.reset();
        self.current_step = FIRST_STEP;
    }
}

fn assert_step_in_range(step: u8) {
    assert!(
        (FIRST_STEP..=LAST_STEP).contains(&step),
        "step {step} is outside the wizard range {FIRST_STEP}..={LAST_STEP}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_one_values() -> FieldValues {
        let mut values = FieldValues::new();
        values.set("full-name", "Ada Lovelace");
        values.set("title", "Systems Engineer");
        values.set("email", "ada@example.com");
        values.set("about", "I write engines for analytical machines.");
        values
    }

    #[test]
    fn test_next_step_commits_and_advances() {
        let mut wizard = StepController::new();
        let step = wizard.next_step(2, &step_one_values()).unwrap();
        assert_eq!(step, 2);
        assert_eq!(wizard.current_step(), 2);
        assert_eq!(wizard.profile().personal.full_name, "Ada Lovelace");
        assert_eq!(wizard.profile().personal.email, "ada@example.com");
    }

    #[test]
    fn test_next_step_rejects_missing_required_fields() {
        let mut wizard = StepController::new();
        let mut values = step_one_values();
        values.set("email", "");
        values.set("about", "   ");
        let err = wizard.next_step(2, &values).unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingFields {
                step: 1,
                fields: vec!["email", "about"],
            }
        );
        // State untouched on failure.
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.profile(), &Profile::default());
    }

    #[test]
    fn test_next_step_rejects_malformed_email() {
        let mut wizard = StepController::new();
        let mut values = step_one_values();
        values.set("email", "not-an-email");
        let err = wizard.next_step(2, &values).unwrap_err();
        assert_eq!(
            err,
            WizardError::InvalidFormat {
                field: "email",
                value: "not-an-email".to_string(),
            }
        );
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.profile().personal, Default::default());
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut wizard = StepController::new();
        let values = step_one_values();
        wizard.next_step(2, &values).unwrap();
        let after_first = wizard.profile().clone();
        wizard.previous_step(1);
        wizard.next_step(2, &values).unwrap();
        assert_eq!(wizard.profile(), &after_first);
    }

    #[test]
    fn test_previous_step_never_validates_or_commits() {
        let mut wizard = StepController::new();
        wizard.next_step(3, &step_one_values()).unwrap();
        // Step 3 has in-progress data the user never committed; going back
        // must succeed and save nothing.
        assert_eq!(wizard.previous_step(1), 1);
        assert_eq!(wizard.current_step(), 1);
        assert!(wizard.profile().education.is_empty());
    }

    #[test]
    #[should_panic(expected = "outside the wizard range")]
    fn test_next_step_panics_on_unknown_target() {
        let mut wizard = StepController::new();
        let _ = wizard.next_step(9, &step_one_values());
    }

    #[test]
    #[should_panic(expected = "outside the wizard range")]
    fn test_previous_step_panics_on_step_zero() {
        StepController::new().previous_step(0);
    }

    #[test]
    fn test_add_skill_defaults_and_uniqueness() {
        let mut wizard = StepController::new();
        wizard.add_skill("go", "", "unheard-of").unwrap();
        assert_eq!(wizard.profile().skills[0].category, "Other");
        assert_eq!(
            wizard.profile().skills[0].proficiency,
            Proficiency::Intermediate
        );

        // Case-insensitive duplicate is rejected without mutation.
        let before = wizard.profile().clone();
        let err = wizard.add_skill("Go", "Systems", "expert").unwrap_err();
        assert_eq!(
            err,
            WizardError::Duplicate {
                kind: "skill",
                key: "Go".to_string(),
            }
        );
        assert_eq!(wizard.profile(), &before);
    }

    #[test]
    fn test_add_skill_requires_name() {
        let mut wizard = StepController::new();
        let err = wizard.add_skill("  ", "Systems", "expert").unwrap_err();
        assert!(matches!(err, WizardError::MissingFields { step: 2, .. }));
        assert!(wizard.profile().skills.is_empty());
    }

    #[test]
    fn test_remove_skill_is_no_op_safe() {
        let mut wizard = StepController::new();
        wizard.add_skill("Rust", "Systems", "expert").unwrap();
        wizard.remove_skill("nonexistent");
        assert_eq!(wizard.profile().skills.len(), 1);
        wizard.remove_skill("RUST");
        assert!(wizard.profile().skills.is_empty());
    }

    #[test]
    fn test_add_education_rejects_duplicate_pair() {
        let mut wizard = StepController::new();
        wizard
            .add_education("MIT", "BSc", "2019", "")
            .unwrap();
        // Same institution, different degree is fine.
        wizard
            .add_education("MIT", "MSc", "2021", "Distributed systems")
            .unwrap();
        let err = wizard.add_education("MIT", "BSc", "2020", "").unwrap_err();
        assert_eq!(
            err,
            WizardError::Duplicate {
                kind: "education",
                key: "MIT / BSc".to_string(),
            }
        );
        assert_eq!(wizard.profile().education.len(), 2);
    }

    #[test]
    fn test_add_education_collects_all_missing_fields() {
        let mut wizard = StepController::new();
        let err = wizard.add_education("", "BSc", "", "").unwrap_err();
        assert_eq!(
            err,
            WizardError::MissingFields {
                step: 3,
                fields: vec!["institution", "year"],
            }
        );
    }

    #[test]
    fn test_add_project_requires_core_fields_and_unique_title() {
        let mut wizard = StepController::new();
        let err = wizard.add_project("App", "", "", "", "", "").unwrap_err();
        assert!(matches!(err, WizardError::MissingFields { step: 4, .. }));

        wizard
            .add_project("App", "A tool", "Rust, WASM", "", "https://app.dev", "")
            .unwrap();
        let err = wizard
            .add_project("App", "Another", "Go", "", "", "")
            .unwrap_err();
        assert!(matches!(err, WizardError::Duplicate { kind: "project", .. }));
        assert_eq!(wizard.profile().projects.len(), 1);
    }

    #[test]
    fn test_remove_project_and_education_are_no_op_safe() {
        let mut wizard = StepController::new();
        wizard.remove_project("missing");
        wizard.remove_education("missing", "missing");
        assert_eq!(wizard.profile(), &Profile::default());
    }

    #[test]
    fn test_select_variant_falls_back_to_modern() {
        let mut wizard = StepController::new();
        assert_eq!(wizard.select_variant("dark-neon"), Variant::DarkNeon);
        assert_eq!(wizard.select_variant("holographic"), Variant::Modern);
        assert_eq!(wizard.profile().selected_variant, Some(Variant::Modern));
    }

    #[test]
    fn test_start_over_resets_step_and_profile() {
        let mut wizard = StepController::new();
        wizard.next_step(2, &step_one_values()).unwrap();
        wizard.add_skill("Rust", "Systems", "expert").unwrap();
        wizard.select_variant("cyberpunk");
        wizard.start_over();
        assert_eq!(wizard.current_step(), 1);
        assert_eq!(wizard.profile(), &Profile::default());
    }

    #[test]
    fn test_compile_does_not_mutate_controller_state() {
        let mut wizard = StepController::new();
        wizard.next_step(2, &step_one_values()).unwrap();
        let before = wizard.profile().clone();
        let _ = wizard.compile();
        let _ = wizard.compile();
        assert_eq!(wizard.profile(), &before);
        assert_eq!(wizard.current_step(), 2);
    }
}
