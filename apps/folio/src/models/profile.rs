//! Profile data model: the single in-memory aggregate a wizard session
//! collects, plus the proficiency scale used by the skill bars.
//!
//! Every free-text field is a plain `String` where the empty string means
//! "not provided" - the input surface is a set of text fields, and commit
//! semantics are a straight overwrite of whatever the user typed.

use serde::{Deserialize, Serialize};

use crate::models::variant::Variant;

/// Skill rating scale. Parsing is total: anything unrecognized collapses to
/// `Intermediate`, matching the 50% fallback the templates render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Expert,
}

impl Proficiency {
    /// Display percentage rendered into the `data-progress` attribute and
    /// animated by the generated script. Fixed and variant-independent.
    pub fn percent(self) -> u8 {
        match self {
            Proficiency::Beginner => 25,
            Proficiency::Intermediate => 50,
            Proficiency::Advanced => 75,
            Proficiency::Expert => 90,
        }
    }

    /// Total parse from user input. Unknown values map to `Intermediate`.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "beginner" => Proficiency::Beginner,
            "intermediate" => Proficiency::Intermediate,
            "advanced" => Proficiency::Advanced,
            "expert" => Proficiency::Expert,
            _ => Proficiency::Intermediate,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Proficiency::Beginner => "Beginner",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Advanced => "Advanced",
            Proficiency::Expert => "Expert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub profile_image: String,
    pub about: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skill {
    pub name: String,
    /// Free-form grouping label. Defaults to "Other" when left blank.
    pub category: String,
    pub proficiency: Proficiency,
}

impl Default for Skill {
    fn default() -> Self {
        Skill {
            name: String::new(),
            category: "Other".to_string(),
            proficiency: Proficiency::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub institution: String,
    pub degree: String,
    pub year: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Comma-separated free text, split into chips by the templates.
    pub technologies: String,
    pub github: String,
    pub demo: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: String,
    pub linkedin: String,
    pub twitter: String,
    pub website: String,
    pub resume: String,
}

impl SocialLinks {
    /// True when no link at all has been provided. The social block of every
    /// template is gated on this.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// (label, url) pairs for every non-empty link, in fixed display order.
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut out = Vec::new();
        for (label, url) in [
            ("GitHub", self.github.as_str()),
            ("LinkedIn", self.linkedin.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Website", self.website.as_str()),
            ("Resume", self.resume.as_str()),
        ] {
            if !url.trim().is_empty() {
                out.push((label, url));
            }
        }
        out
    }
}

/// The full aggregate collected across the six wizard steps.
///
/// Owned by the `StepController` for the lifetime of a session; compilation
/// receives it by reference and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: PersonalInfo,
    pub skills: Vec<Skill>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
    pub social: SocialLinks,
    pub selected_variant: Option<Variant>,
}

impl Profile {
    /// Clears every collected field back to the freshly-constructed state.
    pub fn reset(&mut self) {
        *self = Profile::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_proficiency_percent_mapping() {
        assert_eq!(Proficiency::Beginner.percent(), 25);
        assert_eq!(Proficiency::Intermediate.percent(), 50);
        assert_eq!(Proficiency::Advanced.percent(), 75);
        assert_eq!(Proficiency::Expert.percent(), 90);
    }

    #[test]
    fn test_proficiency_parse_is_total() {
        assert_eq!(Proficiency::parse("expert"), Proficiency::Expert);
        assert_eq!(Proficiency::parse("  Advanced "), Proficiency::Advanced);
        assert_eq!(Proficiency::parse("wizard"), Proficiency::Intermediate);
        assert_eq!(Proficiency::parse(""), Proficiency::Intermediate);
    }

    #[test]
    fn test_social_links_empty_detection() {
        let mut social = SocialLinks::default();
        assert!(social.is_empty());
        social.twitter = "https://twitter.com/dev".to_string();
        assert!(!social.is_empty());
        assert_eq!(social.entries(), vec![("Twitter", "https://twitter.com/dev")]);
    }

    #[test]
    fn test_profile_reset_restores_default() {
        let mut profile = Profile::default();
        profile.personal.full_name = "Ada Lovelace".to_string();
        profile.skills.push(Skill {
            name: "Rust".to_string(),
            ..Skill::default()
        });
        profile.reset();
        assert_eq!(profile, Profile::default());
    }

    #[test]
    fn test_profile_json_round_trip() {
        let mut profile = Profile::default();
        profile.personal.full_name = "Ada Lovelace".to_string();
        profile.skills.push(Skill {
            name: "Rust".to_string(),
            category: "Systems".to_string(),
            proficiency: Proficiency::Expert,
        });
        let json = serde_json::to_string(&profile).unwrap();
        let recovered: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(recovered, profile);
    }

    #[test]
    fn test_profile_deserializes_from_partial_json() {
        // The binary accepts hand-written profile files; omitted fields
        // must fall back to defaults.
        let profile: Profile =
            serde_json::from_str(r#"{"personal": {"full_name": "Ada"}}"#).unwrap();
        assert_eq!(profile.personal.full_name, "Ada");
        assert!(profile.skills.is_empty());
        assert!(profile.selected_variant.is_none());
    }
}
