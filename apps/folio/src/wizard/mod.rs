pub mod controller;
pub mod schema;

pub use controller::StepController;
pub use schema::{FieldValues, FIRST_STEP, LAST_STEP};
