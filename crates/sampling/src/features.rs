//! Feature parameter sampling.
//!
//! Bounds follow the base box: through cuts stay under half the footprint,
//! depth-like parameters under half the relevant dimension. Fillet and
//! chamfer sizes are sampled from fixed ranges and may turn out infeasible
//! for a given box; the builder treats those as recoverable failures.

use part_types::{BoxDims, FeatureKind, FeatureSpec, PocketProfile, PocketSpec};
use rand::seq::SliceRandom;
use rand::Rng;

/// Sample a random subset of 1 to 3 distinct features and their parameters.
pub fn sample_feature_set(rng: &mut impl Rng, dims: &BoxDims) -> Vec<FeatureSpec> {
    let count = rng.gen_range(1..=3);
    let kinds: Vec<FeatureKind> = FeatureKind::CATALOG
        .choose_multiple(rng, count)
        .copied()
        .collect();
    kinds
        .iter()
        .map(|kind| sample_feature(rng, *kind, dims))
        .collect()
}

/// Sample parameters for one feature kind against the given base box.
pub fn sample_feature(rng: &mut impl Rng, kind: FeatureKind, dims: &BoxDims) -> FeatureSpec {
    let min_dim = dims.min_dim();
    match kind {
        FeatureKind::Hole => FeatureSpec::Hole {
            diameter: rng.gen_range(5.0..=min_dim / 2.0),
        },
        FeatureKind::Fillet => FeatureSpec::Fillet {
            radius: rng.gen_range(1.0..=10.0),
        },
        FeatureKind::Chamfer => FeatureSpec::Chamfer {
            size: rng.gen_range(1.0..=5.0),
        },
        FeatureKind::Cutout => FeatureSpec::Cutout {
            length: rng.gen_range(5.0..=dims.length / 2.0),
            width: rng.gen_range(5.0..=dims.width / 2.0),
        },
        FeatureKind::Revolved => FeatureSpec::Revolved {
            profile_width: rng.gen_range(5.0..=10.0),
            profile_height: rng.gen_range(5.0..=dims.height / 2.0),
        },
        FeatureKind::Slot => FeatureSpec::Slot {
            length: rng.gen_range(5.0..=dims.length / 2.0),
            width: rng.gen_range(1.0..=3.0),
        },
        FeatureKind::Extruded => FeatureSpec::Extruded {
            length: rng.gen_range(5.0..=dims.length / 2.0),
            width: rng.gen_range(5.0..=dims.width / 2.0),
            height: rng.gen_range(1.0..=5.0),
        },
        FeatureKind::Pocket => {
            let depth = rng.gen_range(5.0..=min_dim / 2.0);
            let profile = if rng.gen_bool(0.5) {
                PocketProfile::Circle {
                    diameter: rng.gen_range(5.0..=min_dim / 2.0),
                }
            } else {
                PocketProfile::Rectangle {
                    length: rng.gen_range(5.0..=dims.length / 2.0),
                    width: rng.gen_range(5.0..=dims.width / 2.0),
                }
            };
            FeatureSpec::Pocket(PocketSpec { profile, depth })
        }
    }
}
