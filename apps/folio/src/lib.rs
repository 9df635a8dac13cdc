pub mod config;
pub mod errors;
pub mod export;
pub mod models;
pub mod templates;
pub mod wizard;

// Re-export commonly used types for convenience.
pub use errors::WizardError;
pub use models::profile::{Education, PersonalInfo, Proficiency, Profile, Project, Skill, SocialLinks};
pub use models::variant::Variant;
pub use templates::{compile, Bundle, TemplateCompiler};
pub use wizard::{FieldValues, StepController};
