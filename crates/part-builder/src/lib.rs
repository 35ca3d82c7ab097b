//! Turns sampled specs into solids through the kernel boundary.

pub mod builder;
pub mod errors;

pub use builder::{apply_features, build_primitive};
pub use errors::BuildError;
