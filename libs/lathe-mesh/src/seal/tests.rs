//! Tests for the seal builders.

use super::*;
use crate::builders::{connect_apex_cusp, connect_band, create_band, CuspPoint, Patch};
use crate::extent::{Extent, Termination, TerminationKind, TextureSpan};
use crate::ring::{generate_ring, Ring, RingParams};
use approx::assert_relative_eq;

const N: usize = 8;

fn ring(radius: f64, z: f64, sweep: (f64, f64)) -> Ring {
    generate_ring(&RingParams::new(N, radius, z).with_azimuth(sweep.0, sweep.1)).unwrap()
}

/// Builds a band stack through `profile` (radius, height) pairs.
fn stack(mesh: &mut Mesh, profile: &[(f64, f64)], sweep: (f64, f64)) -> (SubmeshId, Vec<Course>) {
    let submesh = mesh.create_submesh("test");
    let patch = Patch::smooth(mesh, submesh, "body").unwrap();
    let rings: Vec<Ring> = profile.iter().map(|&(r, z)| ring(r, z, sweep)).collect();
    let mut courses = vec![create_band(mesh, &patch, &rings[0], &rings[1]).unwrap()];
    for upper in &rings[2..] {
        let prev = *courses.last().unwrap();
        courses.push(connect_band(mesh, &patch, &prev, upper, false).unwrap());
    }
    (submesh, courses)
}

const FULL: (f64, f64) = (0.0, 1.0);
const QUARTER: (f64, f64) = (0.0, 0.25);
const CAN: [(f64, f64); 3] = [(1.0, 0.0), (1.0, 1.0), (1.0, 2.0)];

fn seal_can(sweep: (f64, f64), azimuth: &Extent, profile: &Extent) -> MeshResult<Mesh> {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &CAN, sweep);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &project_to_axis)?;
    seal.seal_cylinder(&mut mesh, azimuth, profile)?;
    Ok(mesh)
}

#[test]
fn open_ends_add_no_caps_and_leave_no_seam() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &CAN, FULL);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &project_to_axis).unwrap();
    seal.seal_cylinder(&mut mesh, &Extent::full(), &Extent::full()).unwrap();

    assert_eq!(seal.cap_faces(), 0);
    assert_eq!(mesh.surface_count(), 1);
    // Only the two end rings remain open.
    assert_eq!(mesh.open_halfedges().len(), 2 * N);
    for course in &courses {
        assert!(mesh.partner(course.left_edge()).unwrap().is_some());
        assert!(mesh.partner(course.right_edge()).unwrap().is_some());
    }
    mesh.check().unwrap();
}

#[test]
fn one_flat_end_adds_one_cap_surface() {
    for (banded, faces) in [(false, 1), (true, N)] {
        let profile = Extent::full().with_lower(Termination::flat(banded));
        let mesh = seal_can(FULL, &Extent::full(), &profile).unwrap();
        assert_eq!(mesh.surface_count(), 2);

        let submesh = SubmeshId(0);
        let cap = mesh.find_surface(submesh, "end0").unwrap();
        let record = mesh.surface(cap).unwrap();
        assert_eq!(record.faces.len(), faces);
        assert_relative_eq!(record.normal.z, -1.0, epsilon = 1e-12);
        assert_eq!(mesh.open_halfedges().len(), N);
        mesh.check().unwrap();
    }
}

#[test]
fn flat_ends_close_a_full_turn() {
    let profile = Extent::full().with_ends(Termination::flat(false));
    let mesh = seal_can(FULL, &Extent::full(), &profile).unwrap();
    assert!(mesh.is_closed());
    let top = mesh.find_surface(SubmeshId(0), "end1").unwrap();
    assert_relative_eq!(mesh.surface(top).unwrap().normal.z, 1.0, epsilon = 1e-12);
    mesh.check().unwrap();
}

#[test]
fn cap_texcoords_fill_the_unit_square() {
    let profile = Extent::full().with_ends(Termination::flat(false));
    let mesh = seal_can(FULL, &Extent::full(), &profile).unwrap();
    let cap = mesh.find_surface(SubmeshId(0), "end0").unwrap();
    let face = mesh.surface(cap).unwrap().faces[0];
    let corners = mesh.face_corners(face).unwrap();
    let (mut lo, mut hi) = (Vec2::splat(1.0), Vec2::splat(0.0));
    for corner in &corners {
        lo = lo.min(corner.texcoord);
        hi = hi.max(corner.texcoord);
        assert_relative_eq!(corner.normal.z, -1.0, epsilon = 1e-12);
    }
    assert_relative_eq!(lo.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(hi.x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(lo.y, 0.0, epsilon = 1e-12);
    assert_relative_eq!(hi.y, 1.0, epsilon = 1e-12);
}

#[test]
fn flat_seams_close_a_partial_sweep() {
    for banded in [false, true] {
        let azimuth = Extent::new(0.0, 0.25)
            .with_ends(Termination::flat(banded))
            .with_names("side0", "side1");
        let profile = Extent::full().with_ends(Termination::flat(banded));
        let mesh = seal_can(QUARTER, &azimuth, &profile).unwrap();
        assert!(mesh.is_closed(), "banded = {banded}");

        let wall = mesh.find_surface(SubmeshId(0), "side0").unwrap();
        let expected = if banded { 2 } else { 1 };
        assert_eq!(mesh.surface(wall).unwrap().faces.len(), expected);
        assert!(mesh.find_surface(SubmeshId(0), "side1").is_none());
        mesh.check().unwrap();
    }
}

#[test]
fn center_seams_close_a_partial_sweep() {
    for banded in [false, true] {
        let side = Termination {
            kind: TerminationKind::Center,
            banded,
        };
        let azimuth = Extent::new(0.0, 0.25).with_ends(side);
        let profile = Extent::full().with_ends(Termination::flat(false));
        let mesh = seal_can(QUARTER, &azimuth, &profile).unwrap();
        assert!(mesh.is_closed(), "banded = {banded}");
        mesh.check().unwrap();
    }
}

#[test]
fn center_poles_meet_center_seams() {
    let azimuth = Extent::new(0.0, 0.25).with_ends(Termination::center());
    let profile = Extent::full().with_ends(Termination::center());
    let mesh = seal_can(QUARTER, &azimuth, &profile).unwrap();
    assert!(mesh.is_closed());
    // Five surfaces: body, two seam walls, two polar caps.
    assert_eq!(mesh.surface_count(), 5);
    mesh.check().unwrap();
}

#[test]
fn mixed_seams_are_unsupported() {
    let azimuth = Extent::new(0.0, 0.25)
        .with_lower(Termination::flat(false))
        .with_upper(Termination::center());
    let err = seal_can(QUARTER, &azimuth, &Extent::full()).unwrap_err();
    assert!(matches!(err, MeshError::Unsupported { .. }));

    let azimuth = Extent::new(0.0, 0.25).with_ends(Termination::flat(false));
    let profile = Extent::full().with_lower(Termination::center());
    let err = seal_can(QUARTER, &azimuth, &profile).unwrap_err();
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

#[test]
fn cusp_pole_is_skipped() {
    let mut mesh = Mesh::new();
    let submesh = mesh.create_submesh("cone");
    let patch = Patch::smooth(&mut mesh, submesh, "body").unwrap();
    let band = create_band(&mut mesh, &patch, &ring(1.0, 0.0, FULL), &ring(0.5, 1.0, FULL)).unwrap();
    let apex = CuspPoint {
        position: Vec3::new(0.0, 0.0, 2.0),
        normal: Vec3::Z,
        span: TextureSpan {
            u0: 0.5,
            u1: 0.5,
            v: 0.0,
        },
    };
    let tip = connect_apex_cusp(&mut mesh, &patch, &band, &apex).unwrap();

    let mut seal = SealContext::new(&mut mesh, submesh, &[band, tip], false, &project_to_axis).unwrap();
    assert!(seal.frame().poles[2]);
    let profile = Extent::full().with_ends(Termination::flat(false));
    seal.seal_cylinder(&mut mesh, &Extent::full(), &profile).unwrap();
    assert_eq!(seal.cap_faces(), 1);
    assert!(mesh.is_closed());
    mesh.check().unwrap();
}

#[test]
fn sphere_rejects_center_ends() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &CAN, FULL);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &project_to_axis).unwrap();
    let profile = Extent::full().with_upper(Termination::center());
    let err = seal.seal_sphere(&mut mesh, &Extent::full(), &profile).unwrap_err();
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

const TUBE: [(f64, f64); 4] = [(1.0, 0.0), (2.0, 0.0), (1.5, 1.0), (1.0, 0.0)];

#[test]
fn closed_profile_welds_first_and_last_ring() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &TUBE, FULL);
    let center = project_to_major_circle(1.5);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, true, &center).unwrap();
    assert!(mesh.is_closed());
    assert_eq!(seal.pending_edges(), 0);

    let profile = Extent::full().with_ends(Termination::flat(false));
    seal.seal_torus(&mut mesh, &Extent::full(), &profile).unwrap();
    assert_eq!(seal.cap_faces(), 0);
    mesh.check().unwrap();
}

#[test]
fn closed_profile_with_seams_gets_tube_section_caps() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &TUBE, QUARTER);
    let center = project_to_major_circle(1.5);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, true, &center).unwrap();
    let azimuth = Extent::new(0.0, 0.25).with_ends(Termination {
        kind: TerminationKind::Center,
        banded: false,
    });
    seal.seal_torus(&mut mesh, &azimuth, &Extent::full()).unwrap();
    assert_eq!(seal.cap_faces(), 2);
    assert!(mesh.is_closed());
    mesh.check().unwrap();
}

#[test]
fn open_torus_profile_closes_with_an_annulus() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &TUBE[1..], FULL);
    let center = project_to_major_circle(1.5);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &center).unwrap();
    let profile = Extent::full().with_ends(Termination::flat(false));
    seal.seal_torus(&mut mesh, &Extent::full(), &profile).unwrap();
    let annulus = mesh.find_surface(submesh, "end0").unwrap();
    assert_eq!(mesh.surface(annulus).unwrap().faces.len(), N);
    assert!(mesh.is_closed());
    mesh.check().unwrap();
}

#[test]
fn open_torus_profile_fans_to_the_major_circle() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &TUBE[1..], FULL);
    let center = project_to_major_circle(1.5);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &center).unwrap();
    let profile = Extent::full().with_ends(Termination::center());
    seal.seal_torus(&mut mesh, &Extent::full(), &profile).unwrap();
    assert_eq!(seal.cap_faces(), 2 * N);
    assert!(mesh.is_closed());
    mesh.check().unwrap();

    let profile = Extent::full().with_lower(Termination::flat(false));
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &TUBE[1..], FULL);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &center).unwrap();
    let err = seal.seal_torus(&mut mesh, &Extent::full(), &profile).unwrap_err();
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

#[test]
fn closed_profile_needs_three_courses() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &[(1.0, 0.0), (2.0, 0.0), (1.0, 0.0)], FULL);
    let err = SealContext::new(&mut mesh, submesh, &courses, true, &project_to_axis)
        .err()
        .unwrap();
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
}

#[test]
fn center_keys_share_coinciding_hubs() {
    let mut mesh = Mesh::new();
    let (submesh, courses) = stack(&mut mesh, &CAN, QUARTER);
    let mut seal = SealContext::new(&mut mesh, submesh, &courses, false, &project_to_axis).unwrap();
    let start = seal.center_key(1, 0);
    let end = seal.center_key(1, N);
    assert_eq!(start, end);
    assert_ne!(seal.center_key(0, 0), start);
    assert!(start.is_hub());
}

#[test]
fn clean_polygon_collapses_and_rotates() {
    let a = Key::Ring { ring: 0, corner: 0 };
    let b = Key::Ring { ring: 0, corner: 1 };
    let hub = Key::Center(0);
    assert_eq!(clean_polygon(vec![a, b, hub, hub, a]), Some(vec![hub, a, b]));
    assert_eq!(clean_polygon(vec![a, hub, hub]), None);
}

#[test]
fn major_circle_projection_keeps_azimuth() {
    let center = project_to_major_circle(2.0);
    let p = center(Vec3::new(0.0, 3.0, 0.5));
    assert_relative_eq!(p.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(p.y, 2.0, epsilon = 1e-12);
    assert_relative_eq!(p.z, 0.0, epsilon = 1e-12);
    assert_eq!(project_to_axis(Vec3::new(1.0, 2.0, 3.0)), Vec3::new(0.0, 0.0, 3.0));
}
