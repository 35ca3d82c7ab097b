//! Random sampling of shapes and features.
//!
//! Every bound lives here, next to the sampler that uses it. All samplers
//! take `&mut impl Rng` so batch runs stay reproducible from a single seed.

pub mod dims;
pub mod features;

pub use dims::{sample_box_dims, sample_shape_spec, BASIC_DIM_RANGE, FEATURE_BOX_RANGE};
pub use features::{sample_feature, sample_feature_set};
