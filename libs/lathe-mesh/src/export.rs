//! Mesh buffer export for GPU rendering.
//!
//! Flattens the half-edge mesh into `f32` attribute streams and `u32`
//! triangle indices, grouped by surface so each surface can be drawn with
//! its own material.

use crate::error::TopologyResult;
use crate::mesh::Mesh;
use std::collections::HashMap;

/// Index range of one surface inside [`MeshBuffers::indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceGroup {
    /// Name of the owning submesh.
    pub submesh: String,
    /// Name of the surface.
    pub surface: String,
    /// First index of the group.
    pub start: usize,
    /// Number of indices in the group.
    pub count: usize,
}

/// Mesh buffers suitable for GPU rendering.
///
/// Corners whose attributes are bitwise identical after conversion to
/// `f32` share one vertex; corners that differ only in normal or texture
/// coordinate stay separate.
///
/// # Examples
/// ```
/// use lathe_mesh::primitives::cylinder::{cylinder, CylinderParams};
/// use lathe_mesh::{Mesh, MeshBuffers};
///
/// let mut mesh = Mesh::new();
/// let params = CylinderParams { divisions: 8, ..CylinderParams::default() };
/// cylinder(&mut mesh, &params).unwrap();
/// let buffers = MeshBuffers::from_mesh(&mesh).unwrap();
///
/// assert_eq!(buffers.triangle_count(), mesh.face_count());
/// assert_eq!(buffers.groups.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MeshBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub positions: Vec<f32>,
    /// Vertex normals as flat array [x, y, z, ...].
    pub normals: Vec<f32>,
    /// Texture coordinates as flat array [u, v, u, v, ...].
    pub texcoords: Vec<f32>,
    /// Triangle indices as flat array [i0, i1, i2, ...].
    pub indices: Vec<u32>,
    /// One index range per surface, in surface order.
    pub groups: Vec<SurfaceGroup>,
}

impl MeshBuffers {
    /// Creates empty mesh buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens every surface of `mesh`.
    ///
    /// Faces with more than three corners are fanned from their first
    /// corner.
    pub fn from_mesh(mesh: &Mesh) -> TopologyResult<Self> {
        let mut buffers = Self::new();
        let mut welded: HashMap<[u32; 8], u32> = HashMap::new();

        for (_, surface) in mesh.surfaces() {
            let start = buffers.indices.len();
            for &face in &surface.faces {
                let mut corner_ids = Vec::new();
                for corner in mesh.face_corners(face)? {
                    let p = corner.position.as_vec3();
                    let n = corner.normal.as_vec3();
                    let t = corner.texcoord.as_vec2();
                    let key = [p.x, p.y, p.z, n.x, n.y, n.z, t.x, t.y].map(f32::to_bits);
                    let id = *welded.entry(key).or_insert_with(|| {
                        let id = (buffers.positions.len() / 3) as u32;
                        buffers.positions.extend_from_slice(&[p.x, p.y, p.z]);
                        buffers.normals.extend_from_slice(&[n.x, n.y, n.z]);
                        buffers.texcoords.extend_from_slice(&[t.x, t.y]);
                        id
                    });
                    corner_ids.push(id);
                }
                for k in 1..corner_ids.len().saturating_sub(1) {
                    buffers
                        .indices
                        .extend_from_slice(&[corner_ids[0], corner_ids[k], corner_ids[k + 1]]);
                }
            }
            buffers.groups.push(SurfaceGroup {
                submesh: mesh.submesh(surface.submesh)?.name.clone(),
                surface: surface.name.clone(),
                start,
                count: buffers.indices.len() - start,
            });
        }
        Ok(buffers)
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Mesh {
    /// Exports the mesh to GPU-friendly buffers.
    ///
    /// Shorthand for [`MeshBuffers::from_mesh`].
    pub fn to_mesh_buffers(&self) -> TopologyResult<MeshBuffers> {
        MeshBuffers::from_mesh(self)
    }
}
