//! STEP AP203 text rendering via truck-stepio.

use truck_modeling::topology::Solid;
use truck_stepio::out;

/// Render a solid as a complete STEP file body.
///
/// `file_name` lands in the FILE_NAME header record, so the exported file
/// carries its own name like files written by interactive CAD packages.
pub fn solid_to_step_string(solid: &Solid, file_name: &str) -> String {
    let compressed = solid.compress();
    let step_model = out::StepModel::from(&compressed);
    out::CompleteStepDisplay::new(
        step_model,
        out::StepHeaderDescriptor {
            file_name: file_name.to_string(),
            organization_system: "dataset-forge".to_string(),
            ..Default::default()
        },
    )
    .to_string()
}
