use serde::{Deserialize, Serialize};

/// A single label value: numeric parameters and the pocket shape tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Number(f64),
    Text(String),
}

impl std::fmt::Display for ParamValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamValue::Number(n) => write!(f, "{}", n),
            ParamValue::Text(s) => f.write_str(s),
        }
    }
}

/// Ground-truth label for one part: feature name to parameter mapping,
/// in application order. Features whose kernel operation failed are absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    entries: Vec<(String, Vec<(String, ParamValue)>)>,
}

impl FeatureRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record with a leading `dimensions` entry holding the base box size.
    pub fn with_dimensions(length: f64, width: f64, height: f64) -> Self {
        let mut record = Self::new();
        record.push(
            "dimensions",
            vec![
                ("length".to_string(), ParamValue::Number(length)),
                ("width".to_string(), ParamValue::Number(width)),
                ("height".to_string(), ParamValue::Number(height)),
            ],
        );
        record
    }

    pub fn push(&mut self, name: &str, params: Vec<(String, ParamValue)>) {
        self.entries.push((name.to_string(), params));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[(String, ParamValue)])> {
        self.entries
            .iter()
            .map(|(name, params)| (name.as_str(), params.as_slice()))
    }

    pub fn get(&self, name: &str) -> Option<&[(String, ParamValue)]> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, params)| params.as_slice())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
