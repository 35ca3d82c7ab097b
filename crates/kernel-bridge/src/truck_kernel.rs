//! Kernel implementation backed by the truck B-rep stack.
//!
//! Solids live in a handle-indexed store; every modifying operation clones
//! the input, runs the boolean, and stores the result under a new handle.

use std::collections::HashMap;

use part_types::{BoxDims, PocketProfile, PocketSpec};
use truck_modeling::topology::Solid;

use crate::cutters;
use crate::primitives;
use crate::step;
use crate::tessellation;
use crate::traits::Kernel;
use crate::types::{KernelError, RenderMesh, SolidHandle};

/// Tolerance for truck-shapeops booleans. Matches the scale of the sampled
/// parts (tens of millimeters).
const SHAPEOPS_TOLERANCE: f64 = 0.05;

pub struct TruckKernel {
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl TruckKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn store(&mut self, solid: Solid) -> SolidHandle {
        let handle = SolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &SolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound {
                handle: handle.id(),
            })
    }

    /// base \ tool, as intersection with the complement.
    fn subtract(base: &Solid, tool: &Solid) -> Result<Solid, KernelError> {
        let mut complement = tool.clone();
        complement.not();
        truck_shapeops::and(base, &complement, SHAPEOPS_TOLERANCE).ok_or_else(|| {
            KernelError::BooleanFailed {
                reason: "subtraction produced no solid".to_string(),
            }
        })
    }

    fn unite(a: &Solid, b: &Solid) -> Result<Solid, KernelError> {
        truck_shapeops::or(a, b, SHAPEOPS_TOLERANCE).ok_or_else(|| KernelError::BooleanFailed {
            reason: "union produced no solid".to_string(),
        })
    }

    /// Subtract a batch of tools one by one.
    fn subtract_all(base: &Solid, tools: &[Solid]) -> Result<Solid, KernelError> {
        let mut current = base.clone();
        for tool in tools {
            current = Self::subtract(&current, tool)?;
        }
        Ok(current)
    }
}

impl Default for TruckKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for TruckKernel {
    fn make_box(&mut self, dims: &BoxDims) -> Result<SolidHandle, KernelError> {
        let solid = primitives::make_box(dims.length, dims.width, dims.height);
        Ok(self.store(solid))
    }

    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError> {
        Ok(self.store(primitives::make_cylinder(radius, height)))
    }

    fn make_hexagon_prism(
        &mut self,
        radius: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        Ok(self.store(primitives::make_hexagon_prism(radius, height)))
    }

    fn make_sphere(&mut self, radius: f64) -> Result<SolidHandle, KernelError> {
        Ok(self.store(primitives::make_sphere(radius)))
    }

    fn drill_hole(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        diameter: f64,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = cutters::through_cylinder(dims, diameter);
        let result = Self::subtract(&base, &tool)?;
        Ok(self.store(result))
    }

    fn cut_rect_through(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = cutters::through_rect(dims, length, width);
        let result = Self::subtract(&base, &tool)?;
        Ok(self.store(result))
    }

    fn cut_slot_through(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = cutters::slot_prism(dims, length, width);
        let result = Self::subtract(&base, &tool)?;
        Ok(self.store(result))
    }

    fn cut_pocket(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        pocket: &PocketSpec,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = match pocket.profile {
            PocketProfile::Circle { diameter } => {
                cutters::pocket_cylinder(dims, diameter, pocket.depth)
            }
            PocketProfile::Rectangle { length, width } => {
                cutters::pocket_rect(dims, length, width, pocket.depth)
            }
        };
        let result = Self::subtract(&base, &tool)?;
        Ok(self.store(result))
    }

    fn add_extruded_boss(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = cutters::boss_rect(dims, length, width, height);
        let result = Self::unite(&base, &tool)?;
        Ok(self.store(result))
    }

    fn add_revolved_boss(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        profile_width: f64,
        profile_height: f64,
    ) -> Result<SolidHandle, KernelError> {
        let base = self.get(solid)?.clone();
        let tool = cutters::lying_cylinder(dims, profile_width, profile_height);
        let result = Self::unite(&base, &tool).map_err(|e| KernelError::RevolveFailed {
            reason: e.to_string(),
        })?;
        Ok(self.store(result))
    }

    fn fillet_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        radius: f64,
    ) -> Result<SolidHandle, KernelError> {
        if radius <= 0.0 {
            return Err(KernelError::FilletFailed {
                reason: "radius must be positive".to_string(),
            });
        }
        // Opposite rounds would overlap once the radius reaches half the
        // smallest box dimension.
        if 2.0 * radius >= dims.min_dim() {
            return Err(KernelError::FilletFailed {
                reason: format!(
                    "radius {} too large for box {}x{}x{}",
                    radius, dims.length, dims.width, dims.height
                ),
            });
        }
        let base = self.get(solid)?.clone();
        let tools = cutters::fillet_cutters(dims, radius);
        let result =
            Self::subtract_all(&base, &tools).map_err(|e| KernelError::FilletFailed {
                reason: e.to_string(),
            })?;
        Ok(self.store(result))
    }

    fn chamfer_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        size: f64,
    ) -> Result<SolidHandle, KernelError> {
        if size <= 0.0 {
            return Err(KernelError::ChamferFailed {
                reason: "size must be positive".to_string(),
            });
        }
        if 2.0 * size >= dims.min_dim() {
            return Err(KernelError::ChamferFailed {
                reason: format!(
                    "size {} too large for box {}x{}x{}",
                    size, dims.length, dims.width, dims.height
                ),
            });
        }
        let base = self.get(solid)?.clone();
        let tools = cutters::chamfer_cutters(dims, size);
        let result =
            Self::subtract_all(&base, &tools).map_err(|e| KernelError::ChamferFailed {
                reason: e.to_string(),
            })?;
        Ok(self.store(result))
    }

    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError> {
        let s = self.get(solid)?;
        tessellation::tessellate_solid(s, tolerance)
    }

    fn export_step(&self, solid: &SolidHandle, file_name: &str) -> Result<String, KernelError> {
        let s = self.get(solid)?;
        Ok(step::solid_to_step_string(s, file_name))
    }
}
