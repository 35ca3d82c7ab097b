//! STEP file output.

use std::fs;
use std::path::Path;

use kernel_bridge::{Kernel, SolidHandle};

use crate::errors::ExportError;

/// Render a solid as STEP and write it to `path`. Parent directories are
/// created on demand.
pub fn write_step(
    kernel: &dyn Kernel,
    solid: &SolidHandle,
    path: &Path,
) -> Result<(), ExportError> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let text = kernel.export_step(solid, &file_name)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, text)?;
    Ok(())
}
