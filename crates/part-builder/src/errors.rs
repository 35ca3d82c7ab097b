use kernel_bridge::KernelError;
use part_types::ShapeKind;

/// Errors that abort building one part.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("kernel operation failed: {0}")]
    Kernel(#[from] KernelError),

    #[error("shape {shape} is missing dimension '{name}'")]
    MissingDimension { shape: ShapeKind, name: &'static str },
}
