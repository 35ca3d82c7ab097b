use serde::{Deserialize, Serialize};

/// Output format for the sidecar label file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    Json,
    Xml,
    Excel,
}

impl LabelFormat {
    /// Case-insensitive lookup. Unknown strings return `None` so callers can
    /// warn and skip label output without stopping the batch.
    pub fn parse(s: &str) -> Option<LabelFormat> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LabelFormat::Json),
            "xml" => Some(LabelFormat::Xml),
            "excel" => Some(LabelFormat::Excel),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            LabelFormat::Json => "json",
            LabelFormat::Xml => "xml",
            LabelFormat::Excel => "xlsx",
        }
    }
}

impl std::fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LabelFormat::Json => f.write_str("json"),
            LabelFormat::Xml => f.write_str("xml"),
            LabelFormat::Excel => f.write_str("excel"),
        }
    }
}
