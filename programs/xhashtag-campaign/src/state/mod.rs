//! State account definitions for the campaign program

pub mod campaign;
pub mod pool;

pub use campaign::Campaign;
pub use pool::Pool;
