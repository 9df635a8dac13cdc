//! The closed set of template variants.
//!
//! Selection is always total: an unrecognized identifier falls back to
//! `Modern` (the documented default), never an error.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    #[default]
    Modern,
    Creative,
    Minimal,
    DarkNeon,
    Glassmorphism,
    Cyberpunk,
    GradientParadise,
    ParticleNexus,
}

impl Variant {
    pub const ALL: [Variant; 8] = [
        Variant::Modern,
        Variant::Creative,
        Variant::Minimal,
        Variant::DarkNeon,
        Variant::Glassmorphism,
        Variant::Cyberpunk,
        Variant::GradientParadise,
        Variant::ParticleNexus,
    ];

    /// Kebab-case identifier used by the input surface and in exported files.
    pub fn id(self) -> &'static str {
        match self {
            Variant::Modern => "modern",
            Variant::Creative => "creative",
            Variant::Minimal => "minimal",
            Variant::DarkNeon => "dark-neon",
            Variant::Glassmorphism => "glassmorphism",
            Variant::Cyberpunk => "cyberpunk",
            Variant::GradientParadise => "gradient-paradise",
            Variant::ParticleNexus => "particle-nexus",
        }
    }

    /// Human-readable name used in the exported README.
    pub fn label(self) -> &'static str {
        match self {
            Variant::Modern => "Modern",
            Variant::Creative => "Creative",
            Variant::Minimal => "Minimal",
            Variant::DarkNeon => "Dark Neon",
            Variant::Glassmorphism => "Glassmorphism",
            Variant::Cyberpunk => "Cyberpunk",
            Variant::GradientParadise => "Gradient Paradise",
            Variant::ParticleNexus => "Particle Nexus",
        }
    }

    /// Exact identifier lookup. `None` for anything outside the closed set.
    pub fn try_from_id(id: &str) -> Option<Variant> {
        Variant::ALL.into_iter().find(|v| v.id() == id)
    }

    /// Total identifier lookup with the documented `Modern` fallback.
    pub fn from_id(id: &str) -> Variant {
        Variant::try_from_id(id).unwrap_or(Variant::Modern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_round_trips_through_its_id() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_id(variant.id()), variant);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_modern() {
        assert_eq!(Variant::from_id("vaporwave"), Variant::Modern);
        assert_eq!(Variant::from_id(""), Variant::Modern);
        assert!(Variant::try_from_id("vaporwave").is_none());
    }

    #[test]
    fn test_serde_uses_kebab_case_ids() {
        let json = serde_json::to_string(&Variant::GradientParadise).unwrap();
        assert_eq!(json, "\"gradient-paradise\"");
        let back: Variant = serde_json::from_str("\"dark-neon\"").unwrap();
        assert_eq!(back, Variant::DarkNeon);
    }

    #[test]
    fn test_ids_are_unique() {
        for (i, a) in Variant::ALL.iter().enumerate() {
            for b in &Variant::ALL[i + 1..] {
                assert_ne!(a.id(), b.id());
            }
        }
    }
}
