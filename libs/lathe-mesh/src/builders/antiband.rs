//! Staggered triangle strips between a ring and a half-step offset ring.
//!
//! Segment `i` contributes a downward-pointing triangle under the offset
//! corner `u'_i` followed by an upward-pointing triangle over the lower
//! corner `l_i+1`. Antibands only make sense on a full turn: on a partial
//! sweep the offset ring would overhang both seams.

use super::{
    check_divisions, check_ring, polygon_normal, read_previous, stitch_courses, Course,
    CourseKind, Patch,
};
use crate::core::{FaceId, HalfedgeId};
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::ring::Ring;

/// Builds the first antiband of a profile.
///
/// `upper_offset` must be generated half a segment ahead of `lower`.
pub fn create_antiband(
    mesh: &mut Mesh,
    patch: &Patch,
    lower: &Ring,
    upper_offset: &Ring,
) -> MeshResult<Course> {
    let n = lower.divisions();
    check_divisions(n)?;
    check_full_turn(lower.full_turn)?;
    check_ring(upper_offset, n, true)?;
    build_antiband(mesh, patch, lower, upper_offset)
}

/// Builds an antiband on top of `prev` and partners the two courses.
pub fn connect_antiband(
    mesh: &mut Mesh,
    patch: &Patch,
    prev: &Course,
    upper_offset: &Ring,
) -> MeshResult<Course> {
    check_full_turn(prev.full_turn)?;
    let lower = read_previous(mesh, prev)?;
    check_ring(upper_offset, prev.divisions, true)?;
    let course = build_antiband(mesh, patch, &lower, upper_offset)?;
    stitch_courses(mesh, prev, &course)?;
    Ok(course)
}

fn check_full_turn(full_turn: bool) -> MeshResult<()> {
    if !full_turn {
        return Err(MeshError::unsupported("antibands require a full turn"));
    }
    Ok(())
}

fn build_antiband(
    mesh: &mut Mesh,
    patch: &Patch,
    lower: &Ring,
    upper: &Ring,
) -> MeshResult<Course> {
    let n = lower.divisions();
    let first_face = FaceId::from_index(mesh.face_count());
    let first_halfedge = HalfedgeId::from_index(mesh.halfedge_count());

    for i in 0..n {
        let mut down = [lower.corners[i], lower.corners[i + 1], upper.corners[i]];
        let normal = polygon_normal(&down);
        patch.emit(mesh, &mut down, normal)?;

        let mut up = [lower.corners[i + 1], upper.corners[i + 1], upper.corners[i]];
        let normal = polygon_normal(&up);
        patch.emit(mesh, &mut up, normal)?;
    }

    let course = Course {
        kind: CourseKind::Antiband,
        divisions: n,
        full_turn: true,
        first_face,
        first_halfedge,
    };
    for i in 0..n {
        // Diagonal inside segment i, then the fore edge against segment i + 1.
        mesh.set_partners(course.halfedge(i, 1), course.halfedge(i, 5))?;
        mesh.set_partners(course.halfedge(i, 3), course.halfedge((i + 1) % n, 2))?;
    }
    Ok(course)
}
