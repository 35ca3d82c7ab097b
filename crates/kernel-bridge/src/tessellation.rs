//! Tessellation wrapper over truck-meshalgo.
//!
//! Produces a merged RenderMesh suitable for binary STL output.

use truck_meshalgo::prelude::*;
use truck_meshalgo::tessellation::{MeshableShape, MeshedShape};

use crate::types::{KernelError, RenderMesh};

type TruckSolid = truck_modeling::Solid;

/// Tessellate a truck Solid into a single merged RenderMesh.
pub fn tessellate_solid(
    solid: &TruckSolid,
    tolerance: f64,
) -> std::result::Result<RenderMesh, KernelError> {
    let meshed = solid.triangulation(tolerance);
    let mesh = meshed.to_polygon();

    let positions = mesh.positions();
    let normals = mesh.normals();
    let tri_faces = mesh.tri_faces();

    let mut vertices = Vec::with_capacity(positions.len() * 3);
    let mut norms = Vec::with_capacity(positions.len() * 3);
    let mut indices = Vec::with_capacity(tri_faces.len() * 3);

    for pos in positions {
        vertices.push(pos[0] as f32);
        vertices.push(pos[1] as f32);
        vertices.push(pos[2] as f32);
    }

    if normals.is_empty() {
        for _ in 0..positions.len() {
            norms.push(0.0);
            norms.push(0.0);
            norms.push(1.0);
        }
    } else {
        for norm in normals {
            norms.push(norm[0] as f32);
            norms.push(norm[1] as f32);
            norms.push(norm[2] as f32);
        }
    }

    for tri in tri_faces {
        for v in tri.iter() {
            indices.push(v.pos as u32);
        }
    }

    if indices.is_empty() {
        return Err(KernelError::TessellationFailed {
            reason: "triangulation produced no triangles".to_string(),
        });
    }

    Ok(RenderMesh {
        vertices,
        normals: norms,
        indices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{make_box, make_cylinder};

    #[test]
    fn test_tessellate_box() {
        let solid = make_box(10.0, 20.0, 30.0);
        let mesh = tessellate_solid(&solid, 0.01).unwrap();

        assert!(mesh.triangle_count() >= 12, "Box needs at least 12 triangles");
        assert_eq!(mesh.vertices.len(), mesh.normals.len());
        assert_eq!(mesh.indices.len() % 3, 0);

        // Every index must reference a vertex.
        let vertex_count = (mesh.vertices.len() / 3) as u32;
        for &i in &mesh.indices {
            assert!(i < vertex_count, "Index {} out of range", i);
        }
    }

    #[test]
    fn test_tessellate_cylinder_bounds() {
        let solid = make_cylinder(5.0, 12.0);
        let mesh = tessellate_solid(&solid, 0.01).unwrap();

        let mut max_r = 0.0f32;
        let mut min_z = f32::MAX;
        let mut max_z = f32::MIN;
        for chunk in mesh.vertices.chunks(3) {
            let r = (chunk[0] * chunk[0] + chunk[1] * chunk[1]).sqrt();
            max_r = max_r.max(r);
            min_z = min_z.min(chunk[2]);
            max_z = max_z.max(chunk[2]);
        }
        assert!((max_r - 5.0).abs() < 0.1, "Radius should be about 5");
        assert!(min_z >= -0.01 && max_z <= 12.01, "Height span should be 0..12");
    }
}
