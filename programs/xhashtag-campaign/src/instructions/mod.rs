//! Instruction handlers for the campaign program

pub mod add_submission;
pub mod create_campaign;
pub mod initialize;
pub mod set_activation_campaign;

pub use add_submission::*;
pub use create_campaign::*;
pub use initialize::*;
pub use set_activation_campaign::*;
