//! Quad bands between two rings.

use super::{
    check_divisions, check_ring, course_normal, partner_seams, polygon_normal, read_previous,
    stitch_courses, Course, CourseKind, Patch,
};
use crate::core::{Attributes, FaceId, HalfedgeId, Vec3};
use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::ring::Ring;

/// Builds the first band of a profile between `lower` and `upper`.
///
/// Creates `n` quads. Neighbouring quads are partnered, the last with the
/// first on a full turn; both rings and the two seams (on a partial sweep)
/// stay open.
pub fn create_band(mesh: &mut Mesh, patch: &Patch, lower: &Ring, upper: &Ring) -> MeshResult<Course> {
    let n = lower.divisions();
    check_divisions(n)?;
    check_ring(upper, n, lower.full_turn)?;
    build_band(mesh, patch, lower, upper, |_, corners| Ok(polygon_normal(corners)))
}

/// Builds a band on top of `prev`, whose upper ring becomes the new lower
/// ring, and partners the two courses.
///
/// With `linear`, each quad reuses the normal of the face directly below
/// when that normal is non-zero, which is exact for straight profiles.
pub fn connect_band(
    mesh: &mut Mesh,
    patch: &Patch,
    prev: &Course,
    upper: &Ring,
    linear: bool,
) -> MeshResult<Course> {
    let lower = read_previous(mesh, prev)?;
    check_ring(upper, prev.divisions, prev.full_turn)?;
    let below_normals = (0..prev.divisions)
        .map(|i| {
            let corners = [
                lower.corners[i],
                lower.corners[i + 1],
                upper.corners[i + 1],
                upper.corners[i],
            ];
            course_normal(mesh, prev, i, linear, &corners)
        })
        .collect::<MeshResult<Vec<_>>>()?;
    let course = build_band(mesh, patch, &lower, upper, |i, _| Ok(below_normals[i]))?;
    stitch_courses(mesh, prev, &course)?;
    Ok(course)
}

fn build_band(
    mesh: &mut Mesh,
    patch: &Patch,
    lower: &Ring,
    upper: &Ring,
    normal_of: impl Fn(usize, &[Attributes]) -> MeshResult<Vec3>,
) -> MeshResult<Course> {
    let n = lower.divisions();
    let first_face = FaceId::from_index(mesh.face_count());
    let first_halfedge = HalfedgeId::from_index(mesh.halfedge_count());

    for i in 0..n {
        let mut corners = [
            lower.corners[i],
            lower.corners[i + 1],
            upper.corners[i + 1],
            upper.corners[i],
        ];
        let normal = normal_of(i, &corners)?;
        patch.emit(mesh, &mut corners, normal)?;
    }

    let course = Course {
        kind: CourseKind::Band,
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
        |i| course.halfedge(i, 3),
    )?;
    Ok(course)
}
