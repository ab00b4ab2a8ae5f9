//! # Seal Builders
//!
//! Close the open boundary of a stack of courses with cap surfaces.
//!
//! ## Approach
//!
//! 1. Snapshot the stack into a [`SweepFrame`]: ring positions, pole flags,
//!    full-turn and closed-profile flags
//! 2. Register every open course edge with the [`Stitcher`] under symbolic
//!    corner keys
//! 3. Emit cap polygons as key lists; each new edge is registered too, and
//!    edges whose keys match in reverse are partnered
//!
//! Seams (the two azimuth sides of a partial sweep) and poles (the first
//! and last ring) are closed independently but share one stitcher, so a
//! polar cap and a seam wall meeting at a corner weld to each other.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::builders::{create_band, Patch};
//! use lathe_mesh::extent::{Extent, Termination};
//! use lathe_mesh::ring::{generate_ring, RingParams};
//! use lathe_mesh::seal::{project_to_axis, SealContext};
//! use lathe_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let submesh = mesh.create_submesh("can");
//! let patch = Patch::smooth(&mut mesh, submesh, "body").unwrap();
//! let lower = generate_ring(&RingParams::new(8, 1.0, 0.0)).unwrap();
//! let upper = generate_ring(&RingParams::new(8, 1.0, 1.0)).unwrap();
//! let course = create_band(&mut mesh, &patch, &lower, &upper).unwrap();
//!
//! let mut seal = SealContext::new(&mut mesh, submesh, &[course], false, &project_to_axis).unwrap();
//! let profile = Extent::full().with_ends(Termination::flat(false));
//! seal.seal_cylinder(&mut mesh, &Extent::full(), &profile).unwrap();
//! assert!(mesh.is_closed());
//! ```

mod poles;
mod side;
mod stitch;

pub use side::Side;
pub use stitch::{Key, Stitcher};

use crate::builders::{Course, CourseKind};
use crate::core::vec3::{newell_normal, orthonormal_basis, positions_coincide};
use crate::core::{Attributes, HalfedgeId, SubmeshId, SurfaceId, Vec2, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::EPSILON_TOLERANCE;
use tracing::debug;

// =============================================================================
// CENTER MAPPINGS
// =============================================================================

/// Maps a ring corner to the axis point at the same height.
pub fn project_to_axis(p: Vec3) -> Vec3 {
    Vec3::new(0.0, 0.0, p.z)
}

/// Maps a ring corner to the point of the circle of radius `radius` in the
/// `z = 0` plane at the same azimuth.
pub fn project_to_major_circle(radius: f64) -> impl Fn(Vec3) -> Vec3 {
    move |p: Vec3| {
        let planar = Vec2::new(p.x, p.y);
        let direction = planar.try_normalize().unwrap_or(Vec2::X);
        Vec3::new(direction.x * radius, direction.y * radius, 0.0)
    }
}

// =============================================================================
// SWEEP FRAME
// =============================================================================

/// Positions of every ring of a course stack.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepFrame {
    /// `courses + 1` rings of `divisions + 1` positions each.
    pub rings: Vec<Vec<Vec3>>,
    /// Whether each ring collapses to a single cusp point.
    pub poles: Vec<bool>,
    /// Segments around each ring.
    pub divisions: usize,
    /// Whether the rings close around the axis.
    pub full_turn: bool,
    /// Whether the last ring is the first (a closed tube).
    pub profile_closed: bool,
}

impl SweepFrame {
    /// Reads the ring positions of a stack of courses, bottom first.
    pub fn from_courses(mesh: &Mesh, courses: &[Course], profile_closed: bool) -> MeshResult<Self> {
        let (Some(first), Some(last)) = (courses.first(), courses.last()) else {
            return Err(MeshError::invalid("nothing to seal: no courses"));
        };
        let divisions = first.divisions;
        let full_turn = first.full_turn;
        let mut rings = Vec::with_capacity(courses.len() + 1);
        let mut poles = Vec::with_capacity(courses.len() + 1);

        for (k, course) in courses.iter().enumerate() {
            if course.divisions != divisions || course.full_turn != full_turn {
                return Err(MeshError::invalid("courses disagree on ring size or sweep"));
            }
            if course.kind == CourseKind::BaseCusp && k != 0 {
                return Err(MeshError::invalid("a base cusp must be the first course"));
            }
            if course.kind == CourseKind::ApexCusp && k + 1 != courses.len() {
                return Err(MeshError::invalid("an apex cusp must be the last course"));
            }
            if course.has_lower_ring() {
                rings.push(positions(course.lower_corners(mesh)?));
                poles.push(false);
            } else {
                rings.push(vec![course.base_position(mesh)?; divisions + 1]);
                poles.push(true);
            }
        }
        if last.has_upper_ring() {
            rings.push(positions(last.upper_corners(mesh)?));
            poles.push(false);
        } else {
            rings.push(vec![last.apex_position(mesh)?; divisions + 1]);
            poles.push(true);
        }

        if profile_closed {
            if courses.len() < 3 || poles.iter().any(|&p| p) {
                return Err(MeshError::invalid(
                    "a closed profile needs at least 3 courses and no cusps",
                ));
            }
            let coincide = rings[0]
                .iter()
                .zip(&rings[courses.len()])
                .all(|(a, b)| positions_coincide(*a, *b, EPSILON_TOLERANCE));
            if !coincide {
                return Err(MeshError::invalid(
                    "a closed profile must end on its first ring",
                ));
            }
        }

        Ok(Self {
            rings,
            poles,
            divisions,
            full_turn,
            profile_closed,
        })
    }

    /// Number of courses (the index of the last ring).
    pub fn courses(&self) -> usize {
        self.rings.len() - 1
    }

    /// Normalized key of corner `j` of ring `k`.
    pub fn key(&self, k: usize, j: usize) -> Key {
        let k = if self.profile_closed && k == self.courses() {
            0
        } else {
            k
        };
        if self.poles[k] {
            return Key::Pole(k);
        }
        let j = if self.full_turn && j == self.divisions {
            0
        } else {
            j
        };
        Key::Ring { ring: k, corner: j }
    }

    /// Position of corner `j` of ring `k`.
    pub fn position(&self, k: usize, j: usize) -> Vec3 {
        self.rings[k][j]
    }
}

fn positions(corners: Vec<Attributes>) -> Vec<Vec3> {
    corners.into_iter().map(|c| c.position).collect()
}

// =============================================================================
// SEAL CONTEXT
// =============================================================================

/// Shared state of the seal builders for one course stack.
pub struct SealContext<'a> {
    submesh: SubmeshId,
    frame: SweepFrame,
    center_position: &'a dyn Fn(Vec3) -> Vec3,
    stitcher: Stitcher,
    centers: Vec<Vec3>,
    cap_faces: usize,
}

/// Whether a cap shares one normal or may bend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CapShape {
    /// Planar cap: one shared normal.
    Flat,
    /// Fan to mapped centers: shared normal only when planar.
    Center,
}

impl<'a> SealContext<'a> {
    /// Snapshots `courses` and registers their open edges.
    ///
    /// On a closed profile the last course's upper edges weld to the first
    /// course's lower edges here. `center_position` maps a ring corner to
    /// the hub point used by Center terminations.
    pub fn new(
        mesh: &mut Mesh,
        submesh: SubmeshId,
        courses: &[Course],
        profile_closed: bool,
        center_position: &'a dyn Fn(Vec3) -> Vec3,
    ) -> MeshResult<Self> {
        let frame = SweepFrame::from_courses(mesh, courses, profile_closed)?;
        let mut context = Self {
            submesh,
            frame,
            center_position,
            stitcher: Stitcher::new(),
            centers: Vec::new(),
            cap_faces: 0,
        };
        context.register_courses(mesh, courses)?;
        Ok(context)
    }

    /// The snapshot of the course stack.
    pub fn frame(&self) -> &SweepFrame {
        &self.frame
    }

    /// Number of cap faces emitted so far.
    pub fn cap_faces(&self) -> usize {
        self.cap_faces
    }

    /// Number of registered edges still without a partner.
    pub fn pending_edges(&self) -> usize {
        self.stitcher.pending()
    }

    fn register_courses(&mut self, mesh: &mut Mesh, courses: &[Course]) -> MeshResult<()> {
        let n = self.frame.divisions;
        let top = courses.len();
        for (k, course) in courses.iter().enumerate() {
            if !self.frame.full_turn {
                let (upper, lower) = (self.frame.key(k + 1, 0), self.frame.key(k, 0));
                self.register_open(mesh, upper, lower, course.left_edge())?;
                let (lower, upper) = (self.frame.key(k, n), self.frame.key(k + 1, n));
                self.register_open(mesh, lower, upper, course.right_edge())?;
            }
            for i in 0..n {
                if k == 0 {
                    if let Some(h) = course.lower_edge(i) {
                        let (from, to) = (self.frame.key(0, i), self.frame.key(0, i + 1));
                        self.register_open(mesh, from, to, h)?;
                    }
                }
                if k + 1 == top {
                    if let Some(h) = course.upper_edge(i) {
                        let (from, to) = (self.frame.key(top, i + 1), self.frame.key(top, i));
                        self.register_open(mesh, from, to, h)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn register_open(
        &mut self,
        mesh: &mut Mesh,
        from: Key,
        to: Key,
        halfedge: HalfedgeId,
    ) -> MeshResult<()> {
        if mesh.partner(halfedge)?.is_some() {
            return Ok(());
        }
        self.stitcher.register(mesh, from, to, halfedge)
    }

    /// Key of the hub point for corner `j` of ring `k`.
    ///
    /// Reuses the corner's own key when the corner maps onto itself (a pole
    /// on the axis), and shares keys between coinciding hub points.
    pub(crate) fn center_key(&mut self, k: usize, j: usize) -> Key {
        let point = self.frame.position(k, j);
        let center = (self.center_position)(point);
        if positions_coincide(center, point, EPSILON_TOLERANCE) {
            return self.frame.key(k, j);
        }
        if let Some(i) = self
            .centers
            .iter()
            .position(|c| positions_coincide(*c, center, EPSILON_TOLERANCE))
        {
            return Key::Center(i);
        }
        self.centers.push(center);
        Key::Center(self.centers.len() - 1)
    }

    fn key_position(&self, key: Key) -> Vec3 {
        match key {
            Key::Ring { ring, corner } => self.frame.position(ring, corner),
            Key::Pole(k) => self.frame.position(k, 0),
            Key::Center(i) => self.centers[i],
        }
    }

    /// Emits one cap surface made of `polygons`.
    ///
    /// Consecutive duplicate keys collapse (cyclically), polygons left with
    /// fewer than three corners are dropped, and each polygon is rotated to
    /// start at a hub key. Returns `None` when nothing remains.
    pub(crate) fn emit_cap(
        &mut self,
        mesh: &mut Mesh,
        name: &str,
        polygons: Vec<Vec<Key>>,
        shape: CapShape,
    ) -> MeshResult<Option<SurfaceId>> {
        let polygons: Vec<Vec<Key>> = polygons.into_iter().filter_map(clean_polygon).collect();
        if polygons.is_empty() {
            return Ok(None);
        }
        let points: Vec<Vec<Vec3>> = polygons
            .iter()
            .map(|keys| keys.iter().map(|&key| self.key_position(key)).collect())
            .collect();

        let cap_normal = {
            let mid = &points[points.len() / 2];
            let normal = representative_normal(mid);
            if normal == Vec3::ZERO {
                let all: Vec<Vec3> = points.iter().flatten().copied().collect();
                newell_normal(&all).normalize_or_zero()
            } else {
                normal
            }
        };
        let face_normals: Vec<Vec3> = match shape {
            CapShape::Flat => vec![cap_normal; points.len()],
            CapShape::Center => {
                let own: Vec<Vec3> = points.iter().map(|p| representative_normal(p)).collect();
                let planar = own
                    .iter()
                    .all(|n| n.dot(cap_normal) >= 1.0 - EPSILON_TOLERANCE);
                if planar {
                    vec![cap_normal; points.len()]
                } else {
                    own
                }
            }
        };

        let (tangent, bitangent) = orthonormal_basis(if cap_normal == Vec3::ZERO {
            Vec3::Z
        } else {
            cap_normal
        });
        let mut min = Vec2::splat(f64::INFINITY);
        let mut max = Vec2::splat(f64::NEG_INFINITY);
        for p in points.iter().flatten() {
            let uv = Vec2::new(p.dot(tangent), p.dot(bitangent));
            min = min.min(uv);
            max = max.max(uv);
        }
        let extent = max - min;
        let texcoord = |p: Vec3| {
            let uv = Vec2::new(p.dot(tangent), p.dot(bitangent)) - min;
            Vec2::new(
                if extent.x > 0.0 { uv.x / extent.x } else { 0.5 },
                if extent.y > 0.0 { uv.y / extent.y } else { 0.5 },
            )
        };

        let surface = mesh.create_surface(self.submesh, name)?;
        mesh.surface_mut(surface)?.normal = cap_normal;
        for ((keys, positions), normal) in polygons.iter().zip(&points).zip(&face_normals) {
            let corners: Vec<Attributes> = positions
                .iter()
                .map(|&p| Attributes::new(p, *normal, texcoord(p)))
                .collect();
            let first = HalfedgeId::from_index(mesh.halfedge_count());
            mesh.add_polygon(surface, &corners, *normal)?;
            let count = keys.len();
            for (e, &from) in keys.iter().enumerate() {
                let to = keys[(e + 1) % count];
                self.stitcher.register(mesh, from, to, first.offset(e))?;
            }
            self.cap_faces += 1;
        }
        debug!(
            surface = name,
            faces = polygons.len(),
            pending = self.stitcher.pending(),
            "cap emitted"
        );
        Ok(Some(surface))
    }
}

/// Collapses repeated keys and rotates the polygon to start at a hub.
fn clean_polygon(keys: Vec<Key>) -> Option<Vec<Key>> {
    let mut cleaned: Vec<Key> = Vec::with_capacity(keys.len());
    for key in keys {
        if cleaned.last() != Some(&key) {
            cleaned.push(key);
        }
    }
    while cleaned.len() > 1 && cleaned.first() == cleaned.last() {
        cleaned.pop();
    }
    if cleaned.len() < 3 {
        return None;
    }
    if let Some(hub) = cleaned.iter().position(Key::is_hub) {
        cleaned.rotate_left(hub);
    }
    Some(cleaned)
}

/// Unit normal from the edges at the first corner for triangles and quads,
/// Newell for larger polygons.
fn representative_normal(points: &[Vec3]) -> Vec3 {
    if points.len() <= 4 {
        let along = points[1] - points[0];
        let back = points[points.len() - 1] - points[0];
        let normal = along.cross(back);
        if normal.length_squared()
            > f64::EPSILON * along.length_squared() * back.length_squared()
        {
            return normal.normalize();
        }
    }
    newell_normal(points).normalize_or_zero()
}

#[cfg(test)]
mod tests;
