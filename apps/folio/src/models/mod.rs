pub mod profile;
pub mod variant;
