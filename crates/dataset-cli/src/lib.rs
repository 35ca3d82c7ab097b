//! Batch driver for the dataset generator binary.

pub mod batch;
pub mod prompt;

pub use batch::{run_basic, run_random, run_single, BatchConfig};
