//! Binary STL output from a RenderMesh.
//!
//! Binary STL layout:
//! - 80-byte header (arbitrary text)
//! - u32 triangle count (little-endian)
//! - per triangle: 3xf32 normal + 3x(3xf32 vertex) + u16 attribute = 50 bytes

use std::fs;
use std::path::Path;

use kernel_bridge::RenderMesh;

use crate::errors::ExportError;

/// Encode a RenderMesh as binary STL bytes. Face normals are recomputed from
/// the triangle winding rather than taken from the mesh.
pub fn binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, ExportError> {
    let tri_count = mesh.indices.len() / 3;
    if tri_count == 0 {
        return Err(ExportError::Stl {
            reason: "mesh has no triangles".to_string(),
        });
    }

    let vertex_count = mesh.vertices.len() / 3;
    for &idx in &mesh.indices {
        if idx as usize >= vertex_count {
            return Err(ExportError::Stl {
                reason: format!(
                    "index {} out of range (vertex count = {})",
                    idx, vertex_count
                ),
            });
        }
    }

    let file_size = 80 + 4 + tri_count * 50;
    let mut buf = Vec::with_capacity(file_size);

    let header = format!("binary STL: {}", name);
    let header_bytes = header.as_bytes();
    buf.extend_from_slice(&header_bytes[..header_bytes.len().min(80)]);
    buf.resize(80, 0u8);

    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    for tri in mesh.indices.chunks(3) {
        let i0 = tri[0] as usize * 3;
        let i1 = tri[1] as usize * 3;
        let i2 = tri[2] as usize * 3;

        let (ax, ay, az) = (
            mesh.vertices[i1] - mesh.vertices[i0],
            mesh.vertices[i1 + 1] - mesh.vertices[i0 + 1],
            mesh.vertices[i1 + 2] - mesh.vertices[i0 + 2],
        );
        let (bx, by, bz) = (
            mesh.vertices[i2] - mesh.vertices[i0],
            mesh.vertices[i2 + 1] - mesh.vertices[i0 + 1],
            mesh.vertices[i2 + 2] - mesh.vertices[i0 + 2],
        );
        let nx = ay * bz - az * by;
        let ny = az * bx - ax * bz;
        let nz = ax * by - ay * bx;
        let len = (nx * nx + ny * ny + nz * nz).sqrt();
        let (nx, ny, nz) = if len > 1e-12 {
            (nx / len, ny / len, nz / len)
        } else {
            (0.0f32, 0.0, 1.0)
        };

        buf.extend_from_slice(&nx.to_le_bytes());
        buf.extend_from_slice(&ny.to_le_bytes());
        buf.extend_from_slice(&nz.to_le_bytes());

        for &idx in tri {
            let vi = idx as usize * 3;
            buf.extend_from_slice(&mesh.vertices[vi].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 1].to_le_bytes());
            buf.extend_from_slice(&mesh.vertices[vi + 2].to_le_bytes());
        }

        // Attribute byte count (unused)
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    Ok(buf)
}

/// Encode and write a mesh as binary STL.
pub fn write_stl(mesh: &RenderMesh, path: &Path) -> Result<(), ExportError> {
    let name = path
        .file_stem()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = binary_stl(mesh, &name)?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, bytes)?;
    Ok(())
}
