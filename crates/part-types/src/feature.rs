use serde::{Deserialize, Serialize};

use crate::record::ParamValue;

/// Catalog of machining-style features that can be applied to a box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Hole,
    Fillet,
    Chamfer,
    Cutout,
    Revolved,
    Slot,
    Extruded,
    Pocket,
}

impl FeatureKind {
    pub const CATALOG: [FeatureKind; 8] = [
        FeatureKind::Hole,
        FeatureKind::Fillet,
        FeatureKind::Chamfer,
        FeatureKind::Cutout,
        FeatureKind::Revolved,
        FeatureKind::Slot,
        FeatureKind::Extruded,
        FeatureKind::Pocket,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::Hole => "hole",
            FeatureKind::Fillet => "fillet",
            FeatureKind::Chamfer => "chamfer",
            FeatureKind::Cutout => "cutout",
            FeatureKind::Revolved => "revolved",
            FeatureKind::Slot => "slot",
            FeatureKind::Extruded => "extruded",
            FeatureKind::Pocket => "pocket",
        }
    }

    /// Case-insensitive lookup by catalog name.
    pub fn parse(s: &str) -> Option<FeatureKind> {
        let lower = s.trim().to_ascii_lowercase();
        Self::CATALOG.into_iter().find(|k| k.name() == lower)
    }
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Cross-section of a pocket cut.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PocketProfile {
    Circle { diameter: f64 },
    Rectangle { length: f64, width: f64 },
}

impl PocketProfile {
    pub fn shape_name(&self) -> &'static str {
        match self {
            PocketProfile::Circle { .. } => "circle",
            PocketProfile::Rectangle { .. } => "rectangle",
        }
    }
}

/// A blind cut of circular or rectangular cross-section from the top face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PocketSpec {
    pub profile: PocketProfile,
    pub depth: f64,
}

/// One fully-sampled feature, ready to be applied by the geometry builder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureSpec {
    Hole {
        diameter: f64,
    },
    Fillet {
        radius: f64,
    },
    Chamfer {
        size: f64,
    },
    Cutout {
        length: f64,
        width: f64,
    },
    Revolved {
        profile_width: f64,
        profile_height: f64,
    },
    Slot {
        length: f64,
        width: f64,
    },
    Extruded {
        length: f64,
        width: f64,
        height: f64,
    },
    Pocket(PocketSpec),
}

impl FeatureSpec {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureSpec::Hole { .. } => FeatureKind::Hole,
            FeatureSpec::Fillet { .. } => FeatureKind::Fillet,
            FeatureSpec::Chamfer { .. } => FeatureKind::Chamfer,
            FeatureSpec::Cutout { .. } => FeatureKind::Cutout,
            FeatureSpec::Revolved { .. } => FeatureKind::Revolved,
            FeatureSpec::Slot { .. } => FeatureKind::Slot,
            FeatureSpec::Extruded { .. } => FeatureKind::Extruded,
            FeatureSpec::Pocket(_) => FeatureKind::Pocket,
        }
    }

    /// Label parameters in sampling order.
    pub fn params(&self) -> Vec<(String, ParamValue)> {
        fn num(name: &str, value: f64) -> (String, ParamValue) {
            (name.to_string(), ParamValue::Number(value))
        }

        match self {
            FeatureSpec::Hole { diameter } => vec![num("diameter", *diameter)],
            FeatureSpec::Fillet { radius } => vec![num("radius", *radius)],
            FeatureSpec::Chamfer { size } => vec![num("size", *size)],
            FeatureSpec::Cutout { length, width } => {
                vec![num("length", *length), num("width", *width)]
            }
            FeatureSpec::Revolved {
                profile_width,
                profile_height,
            } => vec![
                num("profile_width", *profile_width),
                num("profile_height", *profile_height),
            ],
            FeatureSpec::Slot { length, width } => {
                vec![num("length", *length), num("width", *width)]
            }
            FeatureSpec::Extruded {
                length,
                width,
                height,
            } => vec![
                num("length", *length),
                num("width", *width),
                num("height", *height),
            ],
            FeatureSpec::Pocket(pocket) => {
                let mut params = vec![
                    (
                        "shape".to_string(),
                        ParamValue::Text(pocket.profile.shape_name().to_string()),
                    ),
                    num("depth", pocket.depth),
                ];
                match pocket.profile {
                    PocketProfile::Circle { diameter } => params.push(num("diameter", diameter)),
                    PocketProfile::Rectangle { length, width } => {
                        params.push(num("length", length));
                        params.push(num("width", width));
                    }
                }
                params
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(FeatureKind::parse("Hole"), Some(FeatureKind::Hole));
        assert_eq!(FeatureKind::parse("  POCKET "), Some(FeatureKind::Pocket));
        assert_eq!(FeatureKind::parse("groove"), None);
    }

    #[test]
    fn test_pocket_params_order() {
        let spec = FeatureSpec::Pocket(PocketSpec {
            profile: PocketProfile::Rectangle {
                length: 12.0,
                width: 8.0,
            },
            depth: 6.0,
        });
        let params = spec.params();
        let names: Vec<&str> = params.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["shape", "depth", "length", "width"]);
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in FeatureKind::CATALOG {
            assert_eq!(FeatureKind::parse(kind.name()), Some(kind));
        }
    }
}
