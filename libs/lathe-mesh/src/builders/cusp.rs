//! Triangle fans converging to a single cusp point.
//!
//! Each triangle owns its own cusp corner, so the cusp position appears `n`
//! times in the mesh. On a smooth patch the cusp normal is the caller's,
//! used verbatim: at a pole the geometric normal is undefined.

use super::{
    check_divisions, partner_seams, polygon_normal, read_previous, stitch_courses,
    Course, CourseKind, CuspPoint, Patch,
};
use crate::core::{FaceId, HalfedgeId};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::ring::Ring;

/// Builds `n` triangles from `lower` up to `apex`.
///
/// The lower ring stays open, as do the seams on a partial sweep.
pub fn create_apex_cusp(
    mesh: &mut Mesh,
    patch: &Patch,
    lower: &Ring,
    apex: &CuspPoint,
) -> MeshResult<Course> {
    check_divisions(lower.divisions())?;
    build_apex(mesh, patch, lower, apex)
}

/// Builds an apex cusp on top of `prev` and partners the two courses.
pub fn connect_apex_cusp(
    mesh: &mut Mesh,
    patch: &Patch,
    prev: &Course,
    apex: &CuspPoint,
) -> MeshResult<Course> {
    let lower = read_previous(mesh, prev)?;
    let course = build_apex(mesh, patch, &lower, apex)?;
    stitch_courses(mesh, prev, &course)?;
    Ok(course)
}

/// Builds `n` triangles from `base` up to `upper`.
///
/// The upper ring stays open, ready for a `connect_*` builder.
pub fn create_base_cusp(
    mesh: &mut Mesh,
    patch: &Patch,
    base: &CuspPoint,
    upper: &Ring,
) -> MeshResult<Course> {
    let n = upper.divisions();
    check_divisions(n)?;

    let first_face = FaceId::from_index(mesh.face_count());
    let first_halfedge = HalfedgeId::from_index(mesh.halfedge_count());
    for i in 0..n {
        let mut corners = [base.corner(i, n), upper.corners[i + 1], upper.corners[i]];
        let normal = polygon_normal(&corners);
        patch.emit(mesh, &mut corners, normal)?;
    }

    let course = Course {
        kind: CourseKind::BaseCusp,
        divisions: n,
        full_turn: upper.full_turn,
        first_face,
        first_halfedge,
    };
    partner_seams(
        mesh,
        n,
        course.full_turn,
        |i| course.halfedge(i, 0),
        |i| course.halfedge(i, 2),
    )?;
    Ok(course)
}

fn build_apex(
    mesh: &mut Mesh,
    patch: &Patch,
    lower: &Ring,
    apex: &CuspPoint,
) -> MeshResult<Course> {
    let n = lower.divisions();
    let first_face = FaceId::from_index(mesh.face_count());
    let first_halfedge = HalfedgeId::from_index(mesh.halfedge_count());
    for i in 0..n {
        let mut corners = [lower.corners[i], lower.corners[i + 1], apex.corner(i, n)];
        let normal = polygon_normal(&corners);
        patch.emit(mesh, &mut corners, normal)?;
    }

    let course = Course {
        kind: CourseKind::ApexCusp,
        divisions: n,
        full_turn: lower.full_turn,
        first_face,
        first_halfedge,
    };
    partner_seams(
        mesh,
        n,
        course.full_turn,
        |i| course.halfedge(i, 1),
        |i| course.halfedge(i, 2),
    )?;
    Ok(course)
}
