//! Projection and comparison.

pub mod comparison;
pub mod confidence;
pub mod engine;
pub mod insights;

pub use comparison::compare;
pub use engine::{project_signals, ProjectionEngine};
pub use insights::insights;
