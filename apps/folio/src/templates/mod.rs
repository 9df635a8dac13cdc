//! Template compilation: profile -> three-document site bundle.
//!
//! One `TemplateCompiler` contract, eight conforming implementations, one
//! total registry mapping. `compile` is a pure function of its arguments:
//! it never touches controller state, so repeated or concurrent calls with
//! value-equal input produce byte-identical output.

pub mod shared;

mod creative;
mod cyberpunk;
mod dark_neon;
mod glassmorphism;
mod gradient_paradise;
mod minimal;
mod modern;
mod particle_nexus;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::profile::Profile;
use crate::models::variant::Variant;

pub use creative::CreativeTemplate;
pub use cyberpunk::CyberpunkTemplate;
pub use dark_neon::DarkNeonTemplate;
pub use glassmorphism::GlassmorphismTemplate;
pub use gradient_paradise::GradientParadiseTemplate;
pub use minimal::MinimalTemplate;
pub use modern::ModernTemplate;
pub use particle_nexus::ParticleNexusTemplate;

/// The three correlated output documents. `markup` references its two
/// siblings by the fixed relative names `style.css` and `script.js`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub markup: String,
    pub style: String,
    pub script: String,
}

/// Shared contract of the eight variant compilers.
pub trait TemplateCompiler: Send + Sync {
    fn compile(&self, profile: &Profile) -> Bundle;
}

static MODERN: ModernTemplate = ModernTemplate;
static CREATIVE: CreativeTemplate = CreativeTemplate;
static MINIMAL: MinimalTemplate = MinimalTemplate;
static DARK_NEON: DarkNeonTemplate = DarkNeonTemplate;
static GLASSMORPHISM: GlassmorphismTemplate = GlassmorphismTemplate;
static CYBERPUNK: CyberpunkTemplate = CyberpunkTemplate;
static GRADIENT_PARADISE: GradientParadiseTemplate = GradientParadiseTemplate;
static PARTICLE_NEXUS: ParticleNexusTemplate = ParticleNexusTemplate;

/// Total mapping from the closed variant set to its compiler.
pub fn compiler_for(variant: Variant) -> &'static dyn TemplateCompiler {
    match variant {
        Variant::Modern => &MODERN,
        Variant::Creative => &CREATIVE,
        Variant::Minimal => &MINIMAL,
        Variant::DarkNeon => &DARK_NEON,
        Variant::Glassmorphism => &GLASSMORPHISM,
        Variant::Cyberpunk => &CYBERPUNK,
        Variant::GradientParadise => &GRADIENT_PARADISE,
        Variant::ParticleNexus => &PARTICLE_NEXUS,
    }
}

/// Compiles `profile` with the given variant's template.
pub fn compile(profile: &Profile, variant: Variant) -> Bundle {
    debug!(
        "Compiling variant {} ({} skills, {} education, {} projects)",
        variant.id(),
        profile.skills.len(),
        profile.education.len(),
        profile.projects.len()
    );
    compiler_for(variant).compile(profile)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::{Education, Project, Skill};
    use super::shared::{SCRIPT_SRC_TAG, STYLE_LINK_TAG};

    pub(crate) fn sample_profile() -> Profile {
        let mut profile = Profile::default();
        profile.personal.full_name = "Ada Lovelace".to_string();
        profile.personal.title = "Systems Engineer".to_string();
        profile.personal.email = "ada@example.com".to_string();
        profile.personal.location = "London".to_string();
        profile.personal.about = "I build analytical engines & compilers.".to_string();
        profile.skills.push(Skill {
            name: "Rust".to_string(),
            category: "Systems".to_string(),
            proficiency: crate::models::profile::Proficiency::Expert,
        });
        profile.skills.push(Skill {
            name: "SQL".to_string(),
            category: "Data".to_string(),
            proficiency: crate::models::profile::Proficiency::Beginner,
        });
        profile.education.push(Education {
            institution: "University of London".to_string(),
            degree: "BSc Mathematics".to_string(),
            year: "1840".to_string(),
            description: "Focus on symbolic computation.".to_string(),
        });
        profile.projects.push(Project {
            title: "Engine Notes".to_string(),
            description: "Annotated translation with <original> algorithms.".to_string(),
            technologies: "Rust, WASM, SQLite".to_string(),
            github: "https://github.com/ada/engine-notes".to_string(),
            demo: String::new(),
            image: String::new(),
        });
        profile.social.github = "https://github.com/ada".to_string();
        profile
    }

    #[test]
    fn test_compile_is_deterministic_for_every_variant() {
        let profile = sample_profile();
        for variant in Variant::ALL {
            let first = compile(&profile, variant);
            let second = compile(&profile.clone(), variant);
            assert_eq!(first, second, "variant {} must be deterministic", variant.id());
        }
    }

    #[test]
    fn test_every_variant_emits_standalone_documents() {
        let profile = sample_profile();
        for variant in Variant::ALL {
            let bundle = compile(&profile, variant);
            assert!(
                bundle.markup.starts_with("<!DOCTYPE html>"),
                "variant {} markup must be a standalone document",
                variant.id()
            );
            assert!(bundle.markup.contains(STYLE_LINK_TAG));
            assert!(bundle.markup.contains(SCRIPT_SRC_TAG));
            assert!(!bundle.style.is_empty());
            assert!(!bundle.script.is_empty());
        }
    }

    #[test]
    fn test_every_variant_gates_sections_on_empty_collections() {
        let mut profile = sample_profile();
        profile.skills.clear();
        profile.education.clear();
        profile.projects.clear();
        profile.social = Default::default();
        for variant in Variant::ALL {
            let bundle = compile(&profile, variant);
            for (doc, name) in [
                (&bundle.markup, "markup"),
                (&bundle.style, "style"),
                (&bundle.script, "script"),
            ] {
                assert!(
                    !doc.contains("data-progress"),
                    "variant {} {name} must not reference skill bars",
                    variant.id()
                );
            }
            // Nothing about the hero is gated.
            assert!(bundle.markup.contains("Ada Lovelace"));
        }
    }

    #[test]
    fn test_every_variant_drops_section_selectors_with_their_sections() {
        // Education and social class vocabularies differ per variant.
        // Cyberpunk's contact list in the hero reuses its social list
        // styling, so it has no social-only selector to check.
        let markers: [(Variant, &str, Option<&str>); 8] = [
            (Variant::Modern, ".timeline", Some(".social-link")),
            (Variant::Creative, ".chapter", Some(".hello-link")),
            (Variant::Minimal, ".entry", Some(".elsewhere-links")),
            (Variant::DarkNeon, ".log-entry", Some(".pulse-link")),
            (Variant::Glassmorphism, ".pane-block", Some(".orb")),
            (Variant::Cyberpunk, ".record", None),
            (Variant::GradientParadise, ".milestone", Some(".wave")),
            (Variant::ParticleNexus, ".origin", Some(".beacon")),
        ];

        let mut profile = sample_profile();
        profile.education.clear();
        profile.projects.clear();
        profile.social = Default::default();
        for (variant, education_selector, social_selector) in markers {
            let bundle = compile(&profile, variant);
            assert!(
                !bundle.markup.contains("id=\"education\""),
                "variant {} markup must drop the education section",
                variant.id()
            );
            assert!(
                !bundle.style.contains(education_selector),
                "variant {} style must drop {education_selector}",
                variant.id()
            );
            if let Some(selector) = social_selector {
                assert!(
                    !bundle.style.contains(selector),
                    "variant {} style must drop {selector}",
                    variant.id()
                );
            }
        }

        // A populated profile keeps every one of those selectors.
        let profile = sample_profile();
        for (variant, education_selector, social_selector) in markers {
            let bundle = compile(&profile, variant);
            assert!(bundle.style.contains(education_selector));
            if let Some(selector) = social_selector {
                assert!(bundle.style.contains(selector));
            }
        }
    }

    #[test]
    fn test_every_variant_escapes_user_markup() {
        let mut profile = sample_profile();
        profile.personal.full_name = "Ada <script>alert(1)</script>".to_string();
        for variant in Variant::ALL {
            let bundle = compile(&profile, variant);
            assert!(
                !bundle.markup.contains("<script>alert(1)</script>"),
                "variant {} must escape user text",
                variant.id()
            );
            assert!(bundle.markup.contains("&lt;script&gt;"));
        }
    }

    #[test]
    fn test_expert_skill_renders_ninety_percent_everywhere() {
        let profile = sample_profile();
        for variant in Variant::ALL {
            let bundle = compile(&profile, variant);
            assert!(
                bundle.markup.contains("data-progress=\"90\""),
                "variant {} must derive 90% for expert",
                variant.id()
            );
            assert!(
                bundle.markup.contains("data-progress=\"25\""),
                "variant {} must derive 25% for beginner",
                variant.id()
            );
        }
    }
}
