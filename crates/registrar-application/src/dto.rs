//! Data Transfer Objects (DTOs) for layer boundary crossing
//!
//! DTOs prevent domain model leakage to the presentation layer.
//! Password hashes never leave the application layer.

pub mod account;
pub mod catalog;
pub mod enrollment;

// Re-export commonly used DTOs
pub use account::*;
pub use catalog::*;
pub use enrollment::*;
