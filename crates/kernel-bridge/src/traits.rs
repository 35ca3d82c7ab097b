use part_types::{BoxDims, PocketSpec};

use crate::types::{KernelError, RenderMesh, SolidHandle};

/// Geometry kernel boundary. Every operation the dataset generator needs,
/// expressed over opaque solid handles.
///
/// Implemented by `TruckKernel` (real B-rep modeling) and `MockKernel`
/// (deterministic test double). Each modifying operation returns a handle to
/// a new solid; inputs stay valid.
pub trait Kernel {
    /// Box from the origin to (length, width, height).
    fn make_box(&mut self, dims: &BoxDims) -> Result<SolidHandle, KernelError>;

    /// Upright cylinder, base circle centered at the origin.
    fn make_cylinder(&mut self, radius: f64, height: f64) -> Result<SolidHandle, KernelError>;

    /// Upright hexagonal prism with the given circumradius.
    fn make_hexagon_prism(&mut self, radius: f64, height: f64)
        -> Result<SolidHandle, KernelError>;

    /// Sphere centered at the origin.
    fn make_sphere(&mut self, radius: f64) -> Result<SolidHandle, KernelError>;

    /// Through hole on the top face, centered on the box.
    fn drill_hole(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        diameter: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Centered rectangular cut through all.
    fn cut_rect_through(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Centered obround slot cut through all.
    fn cut_slot_through(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Blind pocket cut down from the top face.
    fn cut_pocket(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        pocket: &PocketSpec,
    ) -> Result<SolidHandle, KernelError>;

    /// Rectangular boss extruded up from the top face.
    fn add_extruded_boss(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        length: f64,
        width: f64,
        height: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Boss of revolution lying in the top-face plane: a cylinder of radius
    /// `profile_width / 2` and length `profile_height`, axis along Y.
    fn add_revolved_boss(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        profile_width: f64,
        profile_height: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Round all twelve outer edges of the base box.
    fn fillet_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        radius: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Bevel all twelve outer edges of the base box.
    fn chamfer_box_edges(
        &mut self,
        solid: &SolidHandle,
        dims: &BoxDims,
        size: f64,
    ) -> Result<SolidHandle, KernelError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(
        &mut self,
        solid: &SolidHandle,
        tolerance: f64,
    ) -> Result<RenderMesh, KernelError>;

    /// Render a solid as STEP AP203 text.
    fn export_step(&self, solid: &SolidHandle, file_name: &str) -> Result<String, KernelError>;
}
