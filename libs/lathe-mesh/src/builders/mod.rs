//! # Course Builders
//!
//! A course is the strip of faces between two consecutive rings of a
//! profile. Builders come in two flavours:
//!
//! - `create_*` builds the first course from explicit rings
//! - `connect_*` builds on top of an existing course, reading its upper ring
//!   back from the open upper edges and partnering them in the same call
//!
//! Every builder allocates its faces and halfedges contiguously and in a
//! fixed order, so a [`Course`] handle finds any boundary halfedge by
//! offset. Within a course, neighbouring faces are partnered; on a full
//! turn the last face is also partnered with the first.
//!
//! ## Halfedge Layout
//!
//! ```text
//! Band      face i: [l_i, l_i+1, u_i+1, u_i]    lower, right, upper, left
//! ApexCusp  face i: [l_i, l_i+1, apex]          lower, right, left
//! BaseCusp  face i: [base, u_i+1, u_i]          right, upper, left
//! Antiband  pair i: [l_i, l_i+1, u'_i]          lower, diag, back
//!                   [l_i+1, u'_i+1, u'_i]       fore, upper, diag
//! ```
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::builders::{create_band, Patch};
//! use lathe_mesh::ring::{generate_ring, RingParams};
//! use lathe_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let submesh = mesh.create_submesh("tube");
//! let patch = Patch::smooth(&mut mesh, submesh, "body").unwrap();
//! let lower = generate_ring(&RingParams::new(8, 1.0, 0.0)).unwrap();
//! let upper = generate_ring(&RingParams::new(8, 1.0, 1.0)).unwrap();
//! let course = create_band(&mut mesh, &patch, &lower, &upper).unwrap();
//! assert_eq!(course.face_count(), 8);
//! assert_eq!(mesh.open_halfedges().len(), 16);
//! ```

mod antiband;
mod band;
mod cusp;

pub use antiband::{connect_antiband, create_antiband};
pub use band::{connect_band, create_band};
pub use cusp::{connect_apex_cusp, create_apex_cusp, create_base_cusp};

use crate::core::vec3::newell_normal;
use crate::core::{Attributes, FaceId, HalfedgeId, SubmeshId, SurfaceId, Vec2, Vec3};
use crate::error::{MeshError, MeshResult, TopologyError, TopologyResult};
use crate::extent::TextureSpan;
use crate::mesh::Mesh;
use crate::ring::Ring;
use config::constants::MIN_DIVISIONS;

// =============================================================================
// COURSE HANDLE
// =============================================================================

/// Face layout of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseKind {
    /// One quad per segment between two rings.
    Band,
    /// One triangle per segment from a ring up to a single point.
    ApexCusp,
    /// One triangle per segment from a single point up to a ring.
    BaseCusp,
    /// Two triangles per segment between a ring and a half-step offset ring.
    Antiband,
}

impl CourseKind {
    fn stride(self) -> usize {
        match self {
            CourseKind::Band => 4,
            CourseKind::ApexCusp | CourseKind::BaseCusp => 3,
            CourseKind::Antiband => 6,
        }
    }
}

/// Handle to the contiguous faces and halfedges of one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Course {
    /// Face layout.
    pub kind: CourseKind,
    /// Number of segments around the course.
    pub divisions: usize,
    /// Whether the course closes on itself around the axis.
    pub full_turn: bool,
    /// First face of the course.
    pub first_face: FaceId,
    /// First halfedge of the course.
    pub first_halfedge: HalfedgeId,
}

impl Course {
    /// Number of faces in the course.
    pub fn face_count(&self) -> usize {
        match self.kind {
            CourseKind::Antiband => 2 * self.divisions,
            _ => self.divisions,
        }
    }

    /// Number of halfedges in the course.
    pub fn halfedge_count(&self) -> usize {
        self.divisions * self.kind.stride()
    }

    /// Face `i` in creation order.
    pub fn face(&self, i: usize) -> FaceId {
        self.first_face.offset(i)
    }

    fn halfedge(&self, segment: usize, slot: usize) -> HalfedgeId {
        self.first_halfedge
            .offset(segment * self.kind.stride() + slot)
    }

    /// Returns true when the course has a lower ring.
    pub fn has_lower_ring(&self) -> bool {
        self.kind != CourseKind::BaseCusp
    }

    /// Returns true when the course has an upper ring.
    pub fn has_upper_ring(&self) -> bool {
        self.kind != CourseKind::ApexCusp
    }

    /// Halfedge along the lower ring in segment `i`, running `l_i -> l_i+1`.
    pub fn lower_edge(&self, i: usize) -> Option<HalfedgeId> {
        self.has_lower_ring().then(|| self.halfedge(i, 0))
    }

    /// Halfedge along the upper ring in segment `i`, running `u_i+1 -> u_i`.
    pub fn upper_edge(&self, i: usize) -> Option<HalfedgeId> {
        match self.kind {
            CourseKind::Band => Some(self.halfedge(i, 2)),
            CourseKind::BaseCusp => Some(self.halfedge(i, 1)),
            CourseKind::Antiband => Some(self.halfedge(i, 4)),
            CourseKind::ApexCusp => None,
        }
    }

    /// Seam halfedge on the start side of face 0, running downwards.
    pub fn left_edge(&self) -> HalfedgeId {
        match self.kind {
            CourseKind::Band => self.halfedge(0, 3),
            CourseKind::ApexCusp | CourseKind::BaseCusp | CourseKind::Antiband => {
                self.halfedge(0, 2)
            }
        }
    }

    /// Seam halfedge on the end side of the last face, running upwards.
    pub fn right_edge(&self) -> HalfedgeId {
        let last = self.divisions.saturating_sub(1);
        match self.kind {
            CourseKind::Band | CourseKind::ApexCusp => self.halfedge(last, 1),
            CourseKind::BaseCusp => self.halfedge(last, 0),
            CourseKind::Antiband => self.halfedge(last, 3),
        }
    }

    /// Face directly above lower edge `i` (the face an upper course sits on
    /// when reading this course's upper edge `i`).
    pub fn face_below_upper_edge(&self, i: usize) -> FaceId {
        match self.kind {
            CourseKind::Antiband => self.face(2 * i + 1),
            _ => self.face(i),
        }
    }

    /// Corner attributes of the lower ring, read back from the mesh.
    pub fn lower_corners(&self, mesh: &Mesh) -> MeshResult<Vec<Attributes>> {
        if !self.has_lower_ring() {
            return Err(MeshError::invalid("a base cusp has no lower ring"));
        }
        let n = self.divisions;
        let mut corners = Vec::with_capacity(n + 1);
        for j in 0..n {
            corners.push(*mesh.corner(self.halfedge(j, 0))?);
        }
        let last = mesh.next(self.halfedge(n - 1, 0))?;
        corners.push(*mesh.corner(last)?);
        Ok(corners)
    }

    /// Corner attributes of the upper ring, read back from the mesh.
    pub fn upper_corners(&self, mesh: &Mesh) -> MeshResult<Vec<Attributes>> {
        let n = self.divisions;
        let mut corners = Vec::with_capacity(n + 1);
        for j in 0..n {
            let edge = self
                .upper_edge(j)
                .ok_or_else(|| MeshError::invalid("an apex cusp has no upper ring"))?;
            corners.push(*mesh.corner(mesh.next(edge)?)?);
        }
        let edge = self
            .upper_edge(n - 1)
            .ok_or_else(|| MeshError::invalid("an apex cusp has no upper ring"))?;
        corners.push(*mesh.corner(edge)?);
        Ok(corners)
    }

    /// Position of the single base point of a base cusp.
    pub fn base_position(&self, mesh: &Mesh) -> TopologyResult<Vec3> {
        mesh.origin_position(self.first_halfedge)
    }

    /// Position of the single apex point of an apex cusp.
    pub fn apex_position(&self, mesh: &Mesh) -> TopologyResult<Vec3> {
        mesh.origin_position(self.first_halfedge.offset(2))
    }
}

// =============================================================================
// PATCH
// =============================================================================

/// Decides which surface each new face joins.
///
/// A smooth patch puts every face of every course built with it on one
/// shared surface and keeps the ring's corner normals. A distinct patch
/// gives each face its own surface and replaces the corner normals with the
/// face normal, producing hard edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Patch {
    /// Submesh receiving the surfaces.
    pub submesh: SubmeshId,
    /// Name given to the surfaces.
    pub name: String,
    shared: SurfaceId,
}

impl Patch {
    /// Patch with one shared smooth surface, created immediately.
    pub fn smooth(
        mesh: &mut Mesh,
        submesh: SubmeshId,
        name: impl Into<String>,
    ) -> TopologyResult<Self> {
        let name = name.into();
        let shared = mesh.create_surface(submesh, name.clone())?;
        Ok(Self {
            submesh,
            name,
            shared,
        })
    }

    /// Patch giving every face its own surface.
    pub fn distinct(submesh: SubmeshId, name: impl Into<String>) -> Self {
        Self {
            submesh,
            name: name.into(),
            shared: SurfaceId::NONE,
        }
    }

    /// Returns true when every face gets its own surface.
    pub fn is_distinct(&self) -> bool {
        self.shared.is_none()
    }

    /// The shared surface, `None` for a distinct patch.
    pub fn shared_surface(&self) -> Option<SurfaceId> {
        self.shared.is_some().then_some(self.shared)
    }

    /// Adds one face, applying the patch's surface and normal policy.
    pub(crate) fn emit(
        &self,
        mesh: &mut Mesh,
        corners: &mut [Attributes],
        normal: Vec3,
    ) -> MeshResult<FaceId> {
        let surface = match self.shared_surface() {
            Some(shared) => shared,
            None => {
                for corner in corners.iter_mut() {
                    *corner = corner.with_normal(normal);
                }
                let surface = mesh.create_surface(self.submesh, self.name.clone())?;
                mesh.surface_mut(surface)?.normal = normal;
                surface
            }
        };
        mesh.add_polygon(surface, corners, normal)
    }
}

// =============================================================================
// CUSP POINT
// =============================================================================

/// The single point a cusp course converges to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CuspPoint {
    /// Position of the cusp.
    pub position: Vec3,
    /// Normal used verbatim at every cusp corner.
    pub normal: Vec3,
    /// Texture span of the ring the cusp replaces.
    pub span: TextureSpan,
}

impl CuspPoint {
    /// Corner attributes of the cusp as seen by face `i` of `n`.
    ///
    /// The texture `u` is the midpoint of the face's share of the span.
    pub fn corner(&self, i: usize, n: usize) -> Attributes {
        let u = self.span.lerp((i as f64 + 0.5) / n as f64);
        Attributes::new(self.position, self.normal, Vec2::new(u, self.span.v))
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Unit normal of a polygon from the two edges leaving its first corner,
/// with a Newell fallback when they are parallel.
pub(crate) fn polygon_normal(corners: &[Attributes]) -> Vec3 {
    let p0 = corners[0].position;
    let along = corners[1].position - p0;
    let back = corners[corners.len() - 1].position - p0;
    let normal = along.cross(back);
    if normal.length_squared() > f64::EPSILON * along.length_squared() * back.length_squared() {
        return normal.normalize();
    }
    let positions: Vec<Vec3> = corners.iter().map(|c| c.position).collect();
    newell_normal(&positions).normalize_or_zero()
}

/// Checks a ring against the course size and sweep.
pub(crate) fn check_ring(ring: &Ring, divisions: usize, full_turn: bool) -> MeshResult<()> {
    if ring.divisions() != divisions {
        return Err(MeshError::invalid(format!(
            "ring sizes differ: {} vs {divisions}",
            ring.divisions()
        )));
    }
    if ring.full_turn != full_turn {
        return Err(MeshError::invalid("rings disagree on full turn"));
    }
    Ok(())
}

pub(crate) fn check_divisions(divisions: usize) -> MeshResult<()> {
    if divisions < MIN_DIVISIONS {
        return Err(MeshError::invalid(format!(
            "divisions must be >= {MIN_DIVISIONS}, got {divisions}"
        )));
    }
    Ok(())
}

/// Partners the seam halfedges between consecutive faces of a course.
///
/// `right(i)` is the end-side seam of face `i`, `left(i)` the start-side
/// seam. The last face wraps to the first on a full turn.
pub(crate) fn partner_seams(
    mesh: &mut Mesh,
    divisions: usize,
    full_turn: bool,
    right: impl Fn(usize) -> HalfedgeId,
    left: impl Fn(usize) -> HalfedgeId,
) -> MeshResult<()> {
    for i in 0..divisions - 1 {
        mesh.set_partners(right(i), left(i + 1))?;
    }
    if full_turn {
        mesh.set_partners(right(divisions - 1), left(0))?;
    }
    Ok(())
}

/// Partners the new course's lower edges with the old course's upper edges.
pub(crate) fn stitch_courses(mesh: &mut Mesh, below: &Course, above: &Course) -> MeshResult<()> {
    for i in 0..above.divisions {
        let (Some(lower), Some(upper)) = (above.lower_edge(i), below.upper_edge(i)) else {
            return Err(MeshError::invalid("courses cannot be stacked"));
        };
        mesh.set_partners(lower, upper)?;
    }
    Ok(())
}

/// Reads the old ring for a connect builder and validates its upper edges.
pub(crate) fn read_previous(mesh: &Mesh, prev: &Course) -> MeshResult<Ring> {
    if !prev.has_upper_ring() {
        return Err(MeshError::invalid("cannot build above an apex cusp"));
    }
    for i in 0..prev.divisions {
        if let Some(edge) = prev.upper_edge(i) {
            let partner = mesh.partner(edge)?;
            if partner.is_some() {
                return Err(TopologyError::AlreadyPartnered {
                    halfedge: edge,
                    existing: partner,
                }
                .into());
            }
        }
    }
    Ok(Ring {
        corners: prev.upper_corners(mesh)?,
        full_turn: prev.full_turn,
    })
}

/// Normal of face `i` in a connect builder: reused from the face below when
/// `linear` and non-zero, computed otherwise.
pub(crate) fn course_normal(
    mesh: &Mesh,
    prev: &Course,
    i: usize,
    linear: bool,
    corners: &[Attributes],
) -> MeshResult<Vec3> {
    if linear {
        let below = mesh.face(prev.face_below_upper_edge(i))?.normal;
        if below != Vec3::ZERO {
            return Ok(below);
        }
    }
    Ok(polygon_normal(corners))
}
