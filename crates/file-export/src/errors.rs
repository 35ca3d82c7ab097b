use kernel_bridge::KernelError;

/// Errors while writing geometry files.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("kernel operation failed: {0}")]
    Kernel(#[from] KernelError),

    #[error("STL export failed: {reason}")]
    Stl { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Errors while writing label sidecars.
#[derive(Debug, thiserror::Error)]
pub enum LabelError {
    #[error("json serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("xml serialization failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("spreadsheet output failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
