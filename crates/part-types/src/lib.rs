pub mod feature;
pub mod label;
pub mod record;
pub mod shape;

pub use feature::{FeatureKind, FeatureSpec, PocketProfile, PocketSpec};
pub use label::LabelFormat;
pub use record::{FeatureRecord, ParamValue};
pub use shape::{BoxDims, ShapeKind, ShapeSpec};
