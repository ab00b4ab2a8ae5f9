//! # Half-Edge Mesh Store
//!
//! Index-based half-edge mesh with per-corner attributes.
//!
//! ## Records
//!
//! - **Halfedge**: partner, next, prev, origin corner-vertex and owning face
//! - **Corner-vertex**: one attribute bundle used by exactly one halfedge
//! - **Face**: ring of at least three halfedges, face normal, owning surface
//! - **Surface**: named group of faces sharing one normal attribute
//! - **Submesh**: named group of surfaces (one per primitive)
//!
//! Records are only ever appended while a mesh is built, so ids handed out
//! earlier stay valid. Positions are never deduplicated: two faces meeting
//! at a point each own a corner-vertex there, and adjacency is recorded
//! through explicit partner links only.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::{Attributes, Mesh, Vec2, Vec3};
//!
//! let mut mesh = Mesh::new();
//! let submesh = mesh.create_submesh("quad");
//! let surface = mesh.create_surface(submesh, "body").unwrap();
//! let corners = [
//!     Vec3::new(0.0, 0.0, 0.0),
//!     Vec3::new(1.0, 0.0, 0.0),
//!     Vec3::new(1.0, 1.0, 0.0),
//!     Vec3::new(0.0, 1.0, 0.0),
//! ]
//! .map(|p| Attributes::new(p, Vec3::Z, Vec2::ZERO));
//! let face = mesh.add_polygon(surface, &corners, Vec3::Z).unwrap();
//! assert_eq!(mesh.face_halfedges(face).unwrap().len(), 4);
//! assert_eq!(mesh.open_halfedges().len(), 4);
//! ```

mod check;
mod normals;
mod triangulate;

use crate::core::{Attributes, FaceId, HalfedgeId, SubmeshId, SurfaceId, Vec3, VertexId};
use crate::error::{MeshError, MeshResult, TopologyError, TopologyResult};

// =============================================================================
// RECORDS
// =============================================================================

/// Directed edge of one face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Halfedge {
    /// Own id.
    pub id: HalfedgeId,
    /// Opposite halfedge of the adjacent face, or `NONE` when open.
    pub partner: HalfedgeId,
    /// Next halfedge counter-clockwise around the face.
    pub next: HalfedgeId,
    /// Previous halfedge around the face.
    pub prev: HalfedgeId,
    /// Corner-vertex at the start of this halfedge.
    pub origin: VertexId,
    /// Face bordered by this halfedge.
    pub face: FaceId,
}

/// One use of a position by one face corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Corner attributes.
    pub attributes: Attributes,
    /// The halfedge originating at this corner.
    pub halfedge: HalfedgeId,
}

/// Polygon bounded by a ring of halfedges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Any halfedge of the ring.
    pub halfedge: HalfedgeId,
    /// Unit face normal.
    pub normal: Vec3,
    /// Owning surface.
    pub surface: SurfaceId,
}

/// Named group of faces sharing one normal attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    /// Surface name (for example `body` or `end0`).
    pub name: String,
    /// Owning submesh.
    pub submesh: SubmeshId,
    /// Shared normal attribute.
    pub normal: Vec3,
    /// Faces in creation order.
    pub faces: Vec<FaceId>,
}

/// Named group of surfaces.
#[derive(Debug, Clone, PartialEq)]
pub struct Submesh {
    /// Submesh name (the primitive that produced it).
    pub name: String,
    /// Surfaces in creation order.
    pub surfaces: Vec<SurfaceId>,
}

// =============================================================================
// MESH
// =============================================================================

/// Half-edge mesh arena.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    halfedges: Vec<Halfedge>,
    vertices: Vec<Vertex>,
    faces: Vec<Face>,
    surfaces: Vec<Surface>,
    submeshes: Vec<Submesh>,
}

impl Mesh {
    /// Creates a new empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    // -------------------------------------------------------------------------
    // Creation
    // -------------------------------------------------------------------------

    /// Appends an empty submesh.
    pub fn create_submesh(&mut self, name: impl Into<String>) -> SubmeshId {
        let id = SubmeshId::from_index(self.submeshes.len());
        self.submeshes.push(Submesh {
            name: name.into(),
            surfaces: Vec::new(),
        });
        id
    }

    /// Appends an empty surface to `submesh`.
    pub fn create_surface(
        &mut self,
        submesh: SubmeshId,
        name: impl Into<String>,
    ) -> TopologyResult<SurfaceId> {
        let id = SurfaceId::from_index(self.surfaces.len());
        self.submesh_mut(submesh)?.surfaces.push(id);
        self.surfaces.push(Surface {
            name: name.into(),
            submesh,
            normal: Vec3::ZERO,
            faces: Vec::new(),
        });
        Ok(id)
    }

    /// Appends a face without halfedges to `surface`.
    pub fn create_face(&mut self, surface: SurfaceId, normal: Vec3) -> TopologyResult<FaceId> {
        let id = FaceId::from_index(self.faces.len());
        self.surface_mut(surface)?.faces.push(id);
        self.faces.push(Face {
            halfedge: HalfedgeId::NONE,
            normal,
            surface,
        });
        Ok(id)
    }

    /// Appends a corner-vertex not yet used by any halfedge.
    pub fn create_vertex(&mut self, attributes: Attributes) -> VertexId {
        let id = VertexId::from_index(self.vertices.len());
        self.vertices.push(Vertex {
            attributes,
            halfedge: HalfedgeId::NONE,
        });
        id
    }

    /// Appends an unlinked halfedge of `face` starting at `origin`.
    ///
    /// Claims `origin` for the new halfedge and makes it the face's entry
    /// halfedge if the face has none yet.
    pub fn create_halfedge(&mut self, face: FaceId, origin: VertexId) -> TopologyResult<HalfedgeId> {
        let id = HalfedgeId::from_index(self.halfedges.len());
        self.face(face)?;
        let vertex = self.vertex_mut(origin)?;
        if vertex.halfedge.is_some() {
            return Err(TopologyError::CornerMismatch {
                vertex: origin,
                halfedge: vertex.halfedge,
            });
        }
        vertex.halfedge = id;
        let face_record = self.face_mut(face)?;
        if face_record.halfedge.is_none() {
            face_record.halfedge = id;
        }
        self.halfedges.push(Halfedge {
            id,
            partner: HalfedgeId::NONE,
            next: HalfedgeId::NONE,
            prev: HalfedgeId::NONE,
            origin,
            face,
        });
        Ok(id)
    }

    /// Makes `b` follow `a` around their face.
    pub fn link(&mut self, a: HalfedgeId, b: HalfedgeId) -> TopologyResult<()> {
        self.halfedge(b)?;
        self.halfedge_mut(a)?.next = b;
        self.halfedge_mut(b)?.prev = a;
        Ok(())
    }

    /// Records `a` and `b` as partners.
    ///
    /// Fails if either already has a different partner; re-partnering the
    /// same pair is a no-op.
    pub fn set_partners(&mut self, a: HalfedgeId, b: HalfedgeId) -> TopologyResult<()> {
        for (h, other) in [(a, b), (b, a)] {
            let existing = self.halfedge(h)?.partner;
            if existing.is_some() && existing != other {
                return Err(TopologyError::AlreadyPartnered {
                    halfedge: h,
                    existing,
                });
            }
        }
        self.halfedge_mut(a)?.partner = b;
        self.halfedge_mut(b)?.partner = a;
        Ok(())
    }

    /// Adds a polygon to `surface` with one corner-vertex per corner.
    ///
    /// The halfedges are allocated contiguously: halfedge `k` runs from
    /// corner `k` to corner `k + 1`. Corners must be given counter-clockwise
    /// seen from outside.
    pub fn add_polygon(
        &mut self,
        surface: SurfaceId,
        corners: &[Attributes],
        normal: Vec3,
    ) -> MeshResult<FaceId> {
        if corners.len() < 3 {
            return Err(MeshError::invalid(format!(
                "a polygon needs at least 3 corners, got {}",
                corners.len()
            )));
        }
        let face = self.create_face(surface, normal)?;
        let first = HalfedgeId::from_index(self.halfedges.len());
        for corner in corners {
            let vertex = self.create_vertex(*corner);
            self.create_halfedge(face, vertex)?;
        }
        let count = corners.len();
        for k in 0..count {
            self.link(first.offset(k), first.offset((k + 1) % count))?;
        }
        Ok(face)
    }

    /// Appends every record of `other`, shifting its ids past this mesh's.
    ///
    /// Returns the ids of the appended submeshes in order.
    pub fn append(&mut self, other: &Mesh) -> Vec<SubmeshId> {
        let h = self.halfedges.len();
        let v = self.vertices.len();
        let f = self.faces.len();
        let s = self.surfaces.len();
        let m = self.submeshes.len();

        self.halfedges.extend(other.halfedges.iter().map(|he| Halfedge {
            id: he.id.shifted(h),
            partner: he.partner.shifted(h),
            next: he.next.shifted(h),
            prev: he.prev.shifted(h),
            origin: he.origin.shifted(v),
            face: he.face.shifted(f),
        }));
        self.vertices.extend(other.vertices.iter().map(|vx| Vertex {
            attributes: vx.attributes,
            halfedge: vx.halfedge.shifted(h),
        }));
        self.faces.extend(other.faces.iter().map(|fc| Face {
            halfedge: fc.halfedge.shifted(h),
            normal: fc.normal,
            surface: fc.surface.shifted(s),
        }));
        self.surfaces.extend(other.surfaces.iter().map(|sf| Surface {
            name: sf.name.clone(),
            submesh: sf.submesh.shifted(m),
            normal: sf.normal,
            faces: sf.faces.iter().map(|&id| id.shifted(f)).collect(),
        }));
        self.submeshes.extend(other.submeshes.iter().map(|sm| Submesh {
            name: sm.name.clone(),
            surfaces: sm.surfaces.iter().map(|&id| id.shifted(s)).collect(),
        }));

        (m..self.submeshes.len()).map(SubmeshId::from_index).collect()
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// Gets a halfedge by ID
    pub fn halfedge(&self, id: HalfedgeId) -> TopologyResult<&Halfedge> {
        self.halfedges
            .get(id.index())
            .ok_or(TopologyError::InvalidHalfedge(id))
    }

    /// Gets a mutable halfedge by ID
    pub fn halfedge_mut(&mut self, id: HalfedgeId) -> TopologyResult<&mut Halfedge> {
        self.halfedges
            .get_mut(id.index())
            .ok_or(TopologyError::InvalidHalfedge(id))
    }

    /// Gets a corner-vertex by ID
    pub fn vertex(&self, id: VertexId) -> TopologyResult<&Vertex> {
        self.vertices
            .get(id.index())
            .ok_or(TopologyError::InvalidVertex(id))
    }

    /// Gets a mutable corner-vertex by ID
    pub fn vertex_mut(&mut self, id: VertexId) -> TopologyResult<&mut Vertex> {
        self.vertices
            .get_mut(id.index())
            .ok_or(TopologyError::InvalidVertex(id))
    }

    /// Gets a face by ID
    pub fn face(&self, id: FaceId) -> TopologyResult<&Face> {
        self.faces.get(id.index()).ok_or(TopologyError::InvalidFace(id))
    }

    /// Gets a mutable face by ID
    pub fn face_mut(&mut self, id: FaceId) -> TopologyResult<&mut Face> {
        self.faces
            .get_mut(id.index())
            .ok_or(TopologyError::InvalidFace(id))
    }

    /// Gets a surface by ID
    pub fn surface(&self, id: SurfaceId) -> TopologyResult<&Surface> {
        self.surfaces
            .get(id.index())
            .ok_or(TopologyError::InvalidSurface(id))
    }

    /// Gets a mutable surface by ID
    pub fn surface_mut(&mut self, id: SurfaceId) -> TopologyResult<&mut Surface> {
        self.surfaces
            .get_mut(id.index())
            .ok_or(TopologyError::InvalidSurface(id))
    }

    /// Gets a submesh by ID
    pub fn submesh(&self, id: SubmeshId) -> TopologyResult<&Submesh> {
        self.submeshes
            .get(id.index())
            .ok_or(TopologyError::InvalidSubmesh(id))
    }

    /// Gets a mutable submesh by ID
    pub fn submesh_mut(&mut self, id: SubmeshId) -> TopologyResult<&mut Submesh> {
        self.submeshes
            .get_mut(id.index())
            .ok_or(TopologyError::InvalidSubmesh(id))
    }

    /// Next halfedge around the face of `h`.
    pub fn next(&self, h: HalfedgeId) -> TopologyResult<HalfedgeId> {
        Ok(self.halfedge(h)?.next)
    }

    /// Previous halfedge around the face of `h`.
    pub fn prev(&self, h: HalfedgeId) -> TopologyResult<HalfedgeId> {
        Ok(self.halfedge(h)?.prev)
    }

    /// Partner of `h`, `NONE` when open.
    pub fn partner(&self, h: HalfedgeId) -> TopologyResult<HalfedgeId> {
        Ok(self.halfedge(h)?.partner)
    }

    /// Attributes of the corner where `h` starts.
    pub fn corner(&self, h: HalfedgeId) -> TopologyResult<&Attributes> {
        let origin = self.halfedge(h)?.origin;
        Ok(&self.vertex(origin)?.attributes)
    }

    /// Position of the corner where `h` starts.
    pub fn origin_position(&self, h: HalfedgeId) -> TopologyResult<Vec3> {
        Ok(self.corner(h)?.position)
    }

    /// Mutable attributes of the corner where `h` starts.
    pub fn corner_mut(&mut self, h: HalfedgeId) -> TopologyResult<&mut Attributes> {
        let origin = self.halfedge(h)?.origin;
        Ok(&mut self.vertex_mut(origin)?.attributes)
    }

    /// Halfedges of `face` in ring order, starting at its entry halfedge.
    pub fn face_halfedges(&self, face: FaceId) -> TopologyResult<Vec<HalfedgeId>> {
        let start = self.face(face)?.halfedge;
        let mut ring = Vec::new();
        let mut current = start;
        loop {
            if ring.len() > self.halfedges.len() {
                return Err(TopologyError::BrokenRing {
                    halfedge: start,
                    reason: "face ring does not close",
                });
            }
            ring.push(current);
            current = self.next(current)?;
            if current == start {
                return Ok(ring);
            }
        }
    }

    /// Corner attributes of `face` in ring order.
    pub fn face_corners(&self, face: FaceId) -> TopologyResult<Vec<Attributes>> {
        self.face_halfedges(face)?
            .into_iter()
            .map(|h| self.corner(h).copied())
            .collect()
    }

    /// Corner positions of `face` in ring order.
    pub fn face_positions(&self, face: FaceId) -> TopologyResult<Vec<Vec3>> {
        self.face_halfedges(face)?
            .into_iter()
            .map(|h| self.origin_position(h))
            .collect()
    }

    /// Halfedges without a partner.
    pub fn open_halfedges(&self) -> Vec<HalfedgeId> {
        self.halfedges
            .iter()
            .filter(|he| he.partner.is_none())
            .map(|he| he.id)
            .collect()
    }

    /// Returns true when every halfedge has a partner.
    pub fn is_closed(&self) -> bool {
        self.halfedges.iter().all(|he| he.partner.is_some())
    }

    /// Returns the number of halfedges
    pub fn halfedge_count(&self) -> usize {
        self.halfedges.len()
    }

    /// Returns the number of corner-vertices
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns the number of surfaces
    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Returns the number of submeshes
    pub fn submesh_count(&self) -> usize {
        self.submeshes.len()
    }

    /// Iterates over all halfedges.
    pub fn halfedges(&self) -> impl Iterator<Item = &Halfedge> {
        self.halfedges.iter()
    }

    /// Iterates over all faces with their ids.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, f)| (FaceId::from_index(i), f))
    }

    /// Iterates over all surfaces with their ids.
    pub fn surfaces(&self) -> impl Iterator<Item = (SurfaceId, &Surface)> {
        self.surfaces
            .iter()
            .enumerate()
            .map(|(i, s)| (SurfaceId::from_index(i), s))
    }

    /// Iterates over all submeshes with their ids.
    pub fn submeshes(&self) -> impl Iterator<Item = (SubmeshId, &Submesh)> {
        self.submeshes
            .iter()
            .enumerate()
            .map(|(i, m)| (SubmeshId::from_index(i), m))
    }

    /// Surface of `submesh` named `name`, if any.
    pub fn find_surface(&self, submesh: SubmeshId, name: &str) -> Option<SurfaceId> {
        let submesh = self.submesh(submesh).ok()?;
        submesh
            .surfaces
            .iter()
            .copied()
            .find(|&id| self.surface(id).is_ok_and(|s| s.name == name))
    }
}
