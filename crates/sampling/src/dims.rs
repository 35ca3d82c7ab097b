//! Dimension sampling for base primitives.

use std::ops::RangeInclusive;

use part_types::{BoxDims, ShapeKind, ShapeSpec};
use rand::Rng;

/// Dimension range for small standalone primitives.
pub const BASIC_DIM_RANGE: RangeInclusive<f64> = 1.0..=10.0;

/// Dimension range for boxes that receive machining features. Kept well
/// above the feature bounds so every feature has room to fit.
pub const FEATURE_BOX_RANGE: RangeInclusive<f64> = 20.0..=100.0;

const BASIC_RADIUS_RANGE: RangeInclusive<f64> = 1.0..=5.0;

/// Sample the base box for the feature variants.
pub fn sample_box_dims(rng: &mut impl Rng, range: RangeInclusive<f64>) -> BoxDims {
    BoxDims::new(
        rng.gen_range(range.clone()),
        rng.gen_range(range.clone()),
        rng.gen_range(range),
    )
}

/// Pick a random primitive kind.
pub fn random_shape_kind(rng: &mut impl Rng) -> ShapeKind {
    ShapeKind::ALL[rng.gen_range(0..ShapeKind::ALL.len())]
}

/// Sample a standalone primitive with named dimensions in sampling order.
pub fn sample_shape_spec(rng: &mut impl Rng, kind: ShapeKind) -> ShapeSpec {
    match kind {
        ShapeKind::Box => ShapeSpec::new(
            kind,
            &[
                ("length", rng.gen_range(BASIC_DIM_RANGE)),
                ("width", rng.gen_range(BASIC_DIM_RANGE)),
                ("height", rng.gen_range(BASIC_DIM_RANGE)),
            ],
        ),
        ShapeKind::Cylinder | ShapeKind::Hexagon => ShapeSpec::new(
            kind,
            &[
                ("radius", rng.gen_range(BASIC_RADIUS_RANGE)),
                ("height", rng.gen_range(BASIC_DIM_RANGE)),
            ],
        ),
        ShapeKind::Sphere => {
            ShapeSpec::new(kind, &[("radius", rng.gen_range(BASIC_RADIUS_RANGE))])
        }
    }
}
