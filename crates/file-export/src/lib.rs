//! Geometry and label file writers.
//!
//! Geometry goes out as STEP and binary STL; ground-truth labels as a json,
//! xml or xlsx sidecar next to the geometry files.

pub mod errors;
pub mod label;
pub mod step;
pub mod stl;

pub use errors::{ExportError, LabelError};
pub use label::{write_feature_label, write_shape_label};
pub use step::write_step;
pub use stl::{binary_stl, write_stl};
