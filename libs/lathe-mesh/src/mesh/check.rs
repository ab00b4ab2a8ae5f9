//! Global consistency pass over a finished mesh.

use super::Mesh;
use crate::core::vec3::positions_coincide;
use crate::core::{FaceId, HalfedgeId, SubmeshId, SurfaceId, VertexId};
use crate::error::{TopologyError, TopologyResult};
use config::constants::EPSILON_TOLERANCE;

impl Mesh {
    /// Validates every half-edge invariant with the default tolerance.
    ///
    /// Builders only wire locally; this is the one place where the whole
    /// structure is verified.
    pub fn check(&self) -> TopologyResult<()> {
        self.check_with_tolerance(EPSILON_TOLERANCE)
    }

    /// Validates every half-edge invariant.
    ///
    /// - `next(prev(h)) == h` and `prev(next(h)) == h`
    /// - `partner(partner(h)) == h`, with partner endpoints meeting within
    ///   `tolerance`
    /// - each corner-vertex is the origin of exactly its own halfedge
    /// - every face ring closes with at least three halfedges
    /// - face, surface and submesh back-references agree with their lists
    pub fn check_with_tolerance(&self, tolerance: f64) -> TopologyResult<()> {
        self.check_halfedges(tolerance)?;
        self.check_vertices()?;
        self.check_faces()?;
        self.check_membership()
    }

    fn check_halfedges(&self, tolerance: f64) -> TopologyResult<()> {
        for (i, he) in self.halfedges.iter().enumerate() {
            let id = HalfedgeId::from_index(i);
            if he.id != id {
                return Err(TopologyError::InvalidHalfedge(he.id));
            }

            let next = self.halfedge(he.next)?;
            if next.prev != id {
                return Err(TopologyError::BrokenRing {
                    halfedge: id,
                    reason: "prev(next(h)) != h",
                });
            }
            if self.halfedge(he.prev)?.next != id {
                return Err(TopologyError::BrokenRing {
                    halfedge: id,
                    reason: "next(prev(h)) != h",
                });
            }
            if next.face != he.face {
                return Err(TopologyError::BrokenRing {
                    halfedge: id,
                    reason: "next(h) belongs to another face",
                });
            }
            self.face(he.face)?;

            let corner = self.vertex(he.origin)?;
            if corner.halfedge != id {
                return Err(TopologyError::CornerMismatch {
                    vertex: he.origin,
                    halfedge: id,
                });
            }

            if he.partner.is_some() {
                let partner = self.halfedge(he.partner)?;
                if partner.partner != id {
                    return Err(TopologyError::AsymmetricPartner {
                        halfedge: id,
                        partner: he.partner,
                    });
                }
                if he.partner == id {
                    return Err(TopologyError::NonManifoldEdge(id));
                }
                let start = self.origin_position(id)?;
                let end = self.origin_position(he.next)?;
                let partner_start = self.origin_position(he.partner)?;
                let partner_end = self.origin_position(partner.next)?;
                if !positions_coincide(start, partner_end, tolerance)
                    || !positions_coincide(end, partner_start, tolerance)
                {
                    return Err(TopologyError::PartnerMismatch {
                        halfedge: id,
                        partner: he.partner,
                    });
                }
            }
        }
        Ok(())
    }

    fn check_vertices(&self) -> TopologyResult<()> {
        for (i, vertex) in self.vertices.iter().enumerate() {
            let id = VertexId::from_index(i);
            if self.halfedge(vertex.halfedge)?.origin != id {
                return Err(TopologyError::CornerMismatch {
                    vertex: id,
                    halfedge: vertex.halfedge,
                });
            }
        }
        Ok(())
    }

    fn check_faces(&self) -> TopologyResult<()> {
        let mut ring_total = 0;
        for i in 0..self.faces.len() {
            let id = FaceId::from_index(i);
            let ring = self.face_halfedges(id)?;
            if ring.len() < 3 {
                return Err(TopologyError::DegenerateFace {
                    face: id,
                    corners: ring.len(),
                });
            }
            for &h in &ring {
                if self.halfedge(h)?.face != id {
                    return Err(TopologyError::BrokenRing {
                        halfedge: h,
                        reason: "ring halfedge names another face",
                    });
                }
            }
            ring_total += ring.len();
        }
        if ring_total != self.halfedges.len() {
            // Every halfedge must sit on exactly one face ring.
            let orphan = self
                .halfedges
                .iter()
                .find(|he| {
                    self.face_halfedges(he.face)
                        .map(|ring| !ring.contains(&he.id))
                        .unwrap_or(true)
                })
                .map_or(HalfedgeId::NONE, |he| he.id);
            return Err(TopologyError::BrokenRing {
                halfedge: orphan,
                reason: "halfedge outside its face ring",
            });
        }
        Ok(())
    }

    fn check_membership(&self) -> TopologyResult<()> {
        let mut face_seen = vec![0usize; self.faces.len()];
        for (i, surface) in self.surfaces.iter().enumerate() {
            let id = SurfaceId::from_index(i);
            self.submesh(surface.submesh)?;
            for &face in &surface.faces {
                if self.face(face)?.surface != id {
                    return Err(TopologyError::SurfaceMismatch(id));
                }
                face_seen[face.index()] += 1;
            }
        }
        if let Some(i) = face_seen.iter().position(|&count| count != 1) {
            return Err(TopologyError::SurfaceMismatch(self.faces[i].surface));
        }

        let mut surface_seen = vec![0usize; self.surfaces.len()];
        for (i, submesh) in self.submeshes.iter().enumerate() {
            let id = SubmeshId::from_index(i);
            for &surface in &submesh.surfaces {
                if self.surface(surface)?.submesh != id {
                    return Err(TopologyError::SurfaceMismatch(surface));
                }
                surface_seen[surface.index()] += 1;
            }
        }
        if let Some(i) = surface_seen.iter().position(|&count| count != 1) {
            return Err(TopologyError::SurfaceMismatch(SurfaceId::from_index(i)));
        }
        Ok(())
    }
}
