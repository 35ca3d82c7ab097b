use serde::{Deserialize, Serialize};

use crate::record::ParamValue;

/// Base primitive kind, before any machining feature is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Box,
    Cylinder,
    Hexagon,
    Sphere,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 4] = [
        ShapeKind::Box,
        ShapeKind::Cylinder,
        ShapeKind::Hexagon,
        ShapeKind::Sphere,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Box => "box",
            ShapeKind::Cylinder => "cylinder",
            ShapeKind::Hexagon => "hexagon",
            ShapeKind::Sphere => "sphere",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A fully-sampled primitive: kind plus named dimensions in sampling order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub dimensions: Vec<(String, f64)>,
}

impl ShapeSpec {
    pub fn new(kind: ShapeKind, dimensions: &[(&str, f64)]) -> Self {
        Self {
            kind,
            dimensions: dimensions
                .iter()
                .map(|(name, value)| (name.to_string(), *value))
                .collect(),
        }
    }

    pub fn dimension(&self, name: &str) -> Option<f64> {
        self.dimensions
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| *v)
    }

    /// Flat label fields in the order they were sampled: `Shape` first,
    /// then one field per dimension.
    pub fn label_fields(&self) -> Vec<(String, ParamValue)> {
        let mut fields = vec![(
            "Shape".to_string(),
            ParamValue::Text(self.kind.name().to_string()),
        )];
        for (name, value) in &self.dimensions {
            fields.push((name.clone(), ParamValue::Number(*value)));
        }
        fields
    }
}

/// Dimensions of the base box that machining features are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxDims {
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxDims {
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            length,
            width,
            height,
        }
    }

    /// Smallest of the three dimensions; bounds hole diameters and cut depths.
    pub fn min_dim(&self) -> f64 {
        self.length.min(self.width).min(self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_spec_lookup_and_fields() {
        let spec = ShapeSpec::new(ShapeKind::Cylinder, &[("radius", 2.5), ("height", 7.0)]);
        assert_eq!(spec.dimension("radius"), Some(2.5));
        assert_eq!(spec.dimension("diameter"), None);

        let fields = spec.label_fields();
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].0, "Shape");
        assert_eq!(fields[1].0, "radius");
    }

    #[test]
    fn test_min_dim() {
        let dims = BoxDims::new(40.0, 25.0, 60.0);
        assert_eq!(dims.min_dim(), 25.0);
    }
}
