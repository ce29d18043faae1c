//! Shared data model for the Leaf Love Advisor.
//!
//! Holds the plant catalog types and the visitor preference record used by
//! both the recommendation engine and the HTTP layer.

pub mod catalog;
pub mod types;

pub use catalog::catalog;
pub use types::{CareInstructions, Plant, PlantPreferences};
