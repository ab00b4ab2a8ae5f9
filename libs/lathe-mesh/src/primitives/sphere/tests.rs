use super::*;
use approx::assert_relative_eq;

fn params(divisions: usize, layers: usize) -> SphereParams {
    SphereParams {
        divisions,
        layers,
        ..SphereParams::default()
    }
}

#[test]
fn test_sphere_simple() {
    let mut mesh = Mesh::new();
    let submesh = sphere(&mut mesh, &params(8, 4)).expect("sphere succeeds");
    assert_eq!(mesh.submesh(submesh).expect("submesh").name, "sphere");
    // Two cusp courses of 8 triangles, two bands of 8 quads.
    assert_eq!(mesh.face_count(), 2 * 8 + 2 * 16);
    // Both ends are cusps, so no caps.
    assert_eq!(mesh.surface_count(), 1);
    assert!(mesh.is_closed());
    mesh.check().expect("valid topology");
}

#[test]
fn test_vertices_lie_on_the_sphere() {
    let mut mesh = Mesh::new();
    let p = SphereParams {
        radius: 2.5,
        ..params(12, 6)
    };
    sphere(&mut mesh, &p).expect("sphere succeeds");
    for (face, record) in mesh.faces() {
        let corners = mesh.face_corners(face).expect("corners");
        let mut centroid = Vec3::ZERO;
        for corner in &corners {
            assert_relative_eq!(corner.position.length(), 2.5, epsilon = 1e-12);
            centroid += corner.position;
        }
        assert!(record.normal.dot(centroid) > 0.0);
    }
}

#[test]
fn test_zone_gets_flat_caps() {
    let mut mesh = Mesh::new();
    let p = SphereParams {
        profile: Extent::new(0.25, 0.75).with_ends(Termination::flat(true)),
        ..params(8, 2)
    };
    sphere(&mut mesh, &p).expect("zone succeeds");
    assert!(mesh.is_closed());
    let lower = mesh.find_surface(SubmeshId(0), "end0").expect("lower cap");
    assert_relative_eq!(mesh.surface(lower).expect("surface").normal.z, -1.0, epsilon = 1e-12);
    mesh.check().expect("valid topology");
}

#[test]
fn test_hemisphere_with_wedge_cut() {
    let mut mesh = Mesh::new();
    let p = SphereParams {
        azimuth: Extent::new(0.0, 0.5).with_ends(Termination::center()),
        profile: Extent::new(0.5, 1.0).with_ends(Termination::flat(false)),
        ..params(8, 3)
    };
    sphere(&mut mesh, &p).expect("hemisphere succeeds");
    assert!(mesh.is_closed());
    mesh.check().expect("valid topology");
}

#[test]
fn test_center_ends_are_unsupported() {
    let mut mesh = Mesh::new();
    let p = SphereParams {
        profile: Extent::new(0.2, 0.8).with_ends(Termination::center()),
        ..params(8, 2)
    };
    let err = sphere(&mut mesh, &p).expect_err("center ends fail");
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

#[test]
fn test_center_ends_at_the_poles_are_ignored() {
    let mut mesh = Mesh::new();
    let p = SphereParams {
        profile: Extent::full().with_ends(Termination::center()),
        ..params(8, 4)
    };
    sphere(&mut mesh, &p).expect("poles need no cap");
    assert_eq!(mesh.surface_count(), 1);
    assert!(mesh.is_closed());

    let mut mesh = Mesh::new();
    let p = SphereParams {
        profile: Extent::new(0.5, 1.0).with_ends(Termination::center()),
        ..params(8, 2)
    };
    let err = sphere(&mut mesh, &p).expect_err("the equator end still fails");
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

#[test]
fn test_single_layer_between_poles_fails() {
    let mut mesh = Mesh::new();
    let err = sphere(&mut mesh, &params(8, 1)).expect_err("one layer fails");
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
}
