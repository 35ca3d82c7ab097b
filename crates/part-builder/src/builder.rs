//! Geometry build driver.
//!
//! Feature application distinguishes two failure classes. Fillet, chamfer
//! and revolve are allowed to fail for a given parameter draw: the failure
//! is logged, the feature is skipped and left out of the label, and the part
//! keeps its previous geometry. Every other kernel failure aborts the part.

use kernel_bridge::{Kernel, KernelError, SolidHandle};
use part_types::{BoxDims, FeatureRecord, FeatureSpec, ShapeKind, ShapeSpec};

use crate::errors::BuildError;

fn dim(spec: &ShapeSpec, name: &'static str) -> Result<f64, BuildError> {
    spec.dimension(name).ok_or(BuildError::MissingDimension {
        shape: spec.kind,
        name,
    })
}

/// Build a standalone primitive from a sampled shape spec.
pub fn build_primitive(
    kernel: &mut dyn Kernel,
    spec: &ShapeSpec,
) -> Result<SolidHandle, BuildError> {
    let handle = match spec.kind {
        ShapeKind::Box => {
            let dims = BoxDims::new(
                dim(spec, "length")?,
                dim(spec, "width")?,
                dim(spec, "height")?,
            );
            kernel.make_box(&dims)?
        }
        ShapeKind::Cylinder => kernel.make_cylinder(dim(spec, "radius")?, dim(spec, "height")?)?,
        ShapeKind::Hexagon => {
            kernel.make_hexagon_prism(dim(spec, "radius")?, dim(spec, "height")?)?
        }
        ShapeKind::Sphere => kernel.make_sphere(dim(spec, "radius")?)?,
    };
    Ok(handle)
}

/// Apply a sampled feature list to a base box, recording each feature that
/// actually lands in `record`.
pub fn apply_features(
    kernel: &mut dyn Kernel,
    solid: SolidHandle,
    dims: &BoxDims,
    features: &[FeatureSpec],
    record: &mut FeatureRecord,
) -> Result<SolidHandle, BuildError> {
    let mut current = solid;
    for feature in features {
        match apply_one(kernel, &current, dims, feature) {
            Ok(next) => {
                record.push(feature.kind().name(), feature.params());
                current = next;
            }
            Err(e) if is_recoverable(feature, &e) => {
                match feature {
                    FeatureSpec::Fillet { radius } => {
                        log::warn!("failed to apply fillet with radius {}: {}", radius, e);
                    }
                    FeatureSpec::Chamfer { size } => {
                        log::warn!("failed to apply chamfer with size {}: {}", size, e);
                    }
                    _ => {
                        log::warn!("failed to apply revolve feature: {}", e);
                    }
                }
            }
            Err(e) => return Err(e.into()),
        }
    }
    Ok(current)
}

fn apply_one(
    kernel: &mut dyn Kernel,
    solid: &SolidHandle,
    dims: &BoxDims,
    feature: &FeatureSpec,
) -> Result<SolidHandle, KernelError> {
    match feature {
        FeatureSpec::Hole { diameter } => kernel.drill_hole(solid, dims, *diameter),
        FeatureSpec::Fillet { radius } => kernel.fillet_box_edges(solid, dims, *radius),
        FeatureSpec::Chamfer { size } => kernel.chamfer_box_edges(solid, dims, *size),
        FeatureSpec::Cutout { length, width } => {
            kernel.cut_rect_through(solid, dims, *length, *width)
        }
        FeatureSpec::Revolved {
            profile_width,
            profile_height,
        } => kernel.add_revolved_boss(solid, dims, *profile_width, *profile_height),
        FeatureSpec::Slot { length, width } => {
            kernel.cut_slot_through(solid, dims, *length, *width)
        }
        FeatureSpec::Extruded {
            length,
            width,
            height,
        } => kernel.add_extruded_boss(solid, dims, *length, *width, *height),
        FeatureSpec::Pocket(pocket) => kernel.cut_pocket(solid, dims, pocket),
    }
}

/// Fillet, chamfer and revolve failures are survivable parameter-draw
/// problems; any other kernel error aborts the part.
fn is_recoverable(feature: &FeatureSpec, _error: &KernelError) -> bool {
    matches!(
        feature,
        FeatureSpec::Fillet { .. } | FeatureSpec::Chamfer { .. } | FeatureSpec::Revolved { .. }
    )
}
