//! MockKernel, a deterministic test double implementing Kernel.
//!
//! Records the operation trail behind every handle so tests can assert which
//! modeling steps actually ran, and exposes failure switches for exercising
//! the recoverable-feature paths without real booleans.

use std::collections::HashMap;

use part_types::{BoxDims, PocketProfile, PocketSpec};

use crate::traits::Kernel;
use crate::types::{KernelError, RenderMesh, SolidHandle};

#[derive(Debug, Clone)]
struct MockSolid {
    ops: Vec<String>,
}

/// Deterministic test double for the geometry kernel.
#[derive(Default)]
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    /// When set, the matching operation fails with its domain error.
    pub fail_fillet: bool,
    pub fail_chamfer: bool,
    pub fail_revolve: bool,
    pub fail_booleans: bool,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            ..Self::default()
        }
    }

    /// Operation trail behind a handle, primitive first.
    pub fn ops(&self, solid: &SolidHandle) -> Vec<String> {
        self.solids
            .get(&solid.id())
            .map(|s| s.ops.clone())
            .unwrap_or_default()
    }

    fn store(&mut self, ops: Vec<String>) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), MockSolid { ops });
        handle
    }

    fn derive(&mut self, solid: &SolidHandle, op: String) -> Result<SolidHandle, KernelError> {
        let mut ops = self
            .solids
            .get(&solid.id())
            .ok_or(KernelError::SolidNotFound {
                handle: solid.id(),
            })?
            .ops
            .clone();
        ops.push(op);
        Ok(self.store(ops))
    }
}

impl Kernel for MockKernel {
    fn make_box(&mut self, dims: &BoxDims) -> Result<SolidHandle, KernelError> {
        Ok(self.store(vec![format!(
            "box({},{},{})",
            dims.length, dims.width, dims.height
        )]))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        Ok(self.store(vec![format!("cylinder({},{})", radius, height)]))
    }

    fn make_hexagon_prism(
        &mut self,
        radius: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        Ok(self.store(vec![format!("hexagon({},{})", radius, height)]))
    }

    fn make_sphere(&mut self, radius: f64) -> Result<SolidHandle, KernelError> {
        Ok(self.store(vec![format!("sphere({})", radius)]))
    }

    fn drill_hole(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        diameter: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: "forced boolean failure".to_string(),
            });
        }
        self.derive(solid, format!("hole({})", diameter))
    }

    fn cut_rect_through(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: "forced boolean failure".to_string(),
            });
        }
        self.derive(solid, format!("cutout({},{})", length, width))
    }

    fn cut_slot_through(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: "forced boolean failure".to_string(),
            });
        }
        self.derive(solid, format!("slot({},{})", length, width))
    }

    fn cut_pocket(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        pocket: &PocketSpec,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: "forced boolean failure".to_string(),
            });
        }
        let op = match pocket.profile {
            PocketProfile::Circle { diameter } => {
                format!("pocket(circle,{},{})", diameter, pocket.depth)
            }
            PocketProfile::Rectangle { length, width } => {
                format!("pocket(rectangle,{},{},{})", length, width, pocket.depth)
            }
        };
        self.derive(solid, op)
    }

    fn add_extruded_boss(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_booleans {
            return Err(KernelError::BooleanFailed {
                reason: "forced boolean failure".to_string(),
            });
        }
        self.derive(solid, format!("extruded({},{},{})", length, width, height))
    }

    fn add_revolved_boss(
        &mut self,
        solid: &SolidHandle,
        _dims: &BoxDims,
        profile_width: f64,
        profile_height: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_revolve {
            return Err(KernelError::RevolveFailed {
                reason: "forced revolve failure".to_string(),
            });
        }
        self.derive(
            solid,
            format!("revolved({},{})", profile_width, profile_height),
        )
    }

    fn fillet_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        radius: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_fillet || radius <= 0.0 || 2.0 * radius >= dims.min_dim() {
            return Err(KernelError::FilletFailed {
                reason: format!("radius {} rejected", radius),
            });
        }
        self.derive(solid, format!("fillet({})", radius))
    }

    fn chamfer_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        size: f64,
    ) -> Result<SolidHandle, KernelError> {
        if self.fail_chamfer || size <= 0.0 || 2.0 * size >= dims.min_dim() {
            return Err(KernelError::ChamferFailed {
                reason: format!("size {} rejected", size),
            });
        }
        self.derive(solid, format!("chamfer({})", size))
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        _tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        if !self.solids.contains_key(&solid.id()) {
            return Err(KernelError::SolidNotFound {
                handle: solid.id(),
            });
        }
        // Fixed unit quad in the XY plane: two triangles.
        Ok(RenderMesh {
            vertices: vec![
                0.0, 0.0, 0.0, //
                1.0, 0.0, 0.0, //
                1.0, 1.0, 0.0, //
                0.0, 1.0, 0.0,
            ],
            normals: vec![
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0, //
                0.0, 0.0, 1.0,
            ],
            indices: vec![0, 1, 2, 0, 2, 3],
        })
    }

    fn export_step(&self, solid: &SolidHandle, file_name: &str) -> Result<String, KernelError> {
        let s = self
            .solids
            .get(&solid.id())
            .ok_or(KernelError::SolidNotFound {
                handle: solid.id(),
            })?;
        Ok(format!(
            "ISO-10303-21;\nHEADER;\nFILE_NAME('{}');\nENDSEC;\nDATA;\n/* {} */\nENDSEC;\nEND-ISO-10303-21;\n",
            file_name,
            s.ops.join(" ; ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_op_trail_accumulates() {
        let mut kernel = MockKernel::new();
        let dims = BoxDims::new(40.0, 50.0, 60.0);
        let base = kernel.make_box(&dims).unwrap();
        let drilled = kernel.drill_hole(&base, &dims, 12.0).unwrap();
        let slotted = kernel.cut_slot_through(&drilled, &dims, 15.0, 2.0).unwrap();

        let ops = kernel.ops(&slotted);
        assert_eq!(ops.len(), 3);
        assert!(ops[0].starts_with("box("));
        assert!(ops[1].starts_with("hole("));
        assert!(ops[2].starts_with("slot("));

        // Input handles keep their shorter trails.
        assert_eq!(kernel.ops(&base).len(), 1);
        assert_eq!(kernel.ops(&drilled).len(), 2);
    }

    #[test]
    fn test_fillet_failure_switch() {
        let mut kernel = MockKernel::new();
        kernel.fail_fillet = true;
        let dims = BoxDims::new(40.0, 50.0, 60.0);
        let base = kernel.make_box(&dims).unwrap();

        let result = kernel.fillet_box_edges(&base, &dims, 2.0);
        assert!(matches!(result, Err(KernelError::FilletFailed { .. })));
    }

    #[test]
    fn test_oversized_chamfer_is_rejected() {
        let mut kernel = MockKernel::new();
        let dims = BoxDims::new(40.0, 50.0, 6.0);
        let base = kernel.make_box(&dims).unwrap();

        let result = kernel.chamfer_box_edges(&base, &dims, 3.0);
        assert!(matches!(result, Err(KernelError::ChamferFailed { .. })));
    }

    #[test]
    fn test_mesh_and_step_are_deterministic() {
        let mut kernel = MockKernel::new();
        let dims = BoxDims::new(40.0, 50.0, 60.0);
        let base = kernel.make_box(&dims).unwrap();

        let mesh = kernel.tessellate(&base, 0.01).unwrap();
        assert_eq!(mesh.triangle_count(), 2);

        let text = kernel.export_step(&base, "part.step").unwrap();
        assert!(text.starts_with("ISO-10303-21;"));
        assert!(text.contains("part.step"));
        assert!(text.contains("box(40,50,60)"));
    }
}
