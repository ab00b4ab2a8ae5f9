use super::*;
use crate::extent::TerminationKind;
use approx::assert_relative_eq;

fn params(divisions: usize) -> CylinderParams {
    CylinderParams {
        divisions,
        ..CylinderParams::default()
    }
}

#[test]
fn test_cylinder_simple() {
    let mut mesh = Mesh::new();
    let submesh = cylinder(&mut mesh, &params(8)).expect("cylinder succeeds");
    assert_eq!(mesh.submesh(submesh).expect("submesh").name, "cylinder");
    // Body: 8 quads -> 16 triangles. Caps: 8-gons -> 6 triangles each.
    assert_eq!(mesh.face_count(), 16 + 2 * 6);
    assert!(mesh.is_closed());
    mesh.check().expect("valid topology");

    let names: Vec<&str> = mesh
        .surfaces()
        .map(|(_, surface)| surface.name.as_str())
        .collect();
    assert_eq!(names, ["body", "end0", "end1"]);
}

#[test]
fn test_body_normals_are_horizontal() {
    let mut mesh = Mesh::new();
    let p = CylinderParams {
        profile: Extent::full(),
        ..params(8)
    };
    cylinder(&mut mesh, &p).expect("cylinder succeeds");
    for (_, face) in mesh.faces() {
        assert_relative_eq!(face.normal.z, 0.0, epsilon = 1e-12);
    }
    assert_eq!(mesh.open_halfedges().len(), 16);
}

#[test]
fn test_cone() {
    let mut mesh = Mesh::new();
    let cone = CylinderParams {
        radius_top: 0.0,
        layers: 3,
        ..params(6)
    };
    cylinder(&mut mesh, &cone).expect("cone succeeds");
    assert!(mesh.is_closed());
    // Only the base is capped.
    assert_eq!(mesh.surface_count(), 2);

    // Every apex corner carries the supplied axial normal.
    let apex = Vec3::new(0.0, 0.0, 1.0);
    let mut apex_corners = 0;
    for (face, _) in mesh.faces() {
        for corner in mesh.face_corners(face).expect("corners") {
            if corner.position == apex {
                assert_eq!(corner.normal, Vec3::Z);
                apex_corners += 1;
            }
        }
    }
    assert_eq!(apex_corners, 6);
    mesh.check().expect("valid topology");
}

#[test]
fn test_inverted_cone() {
    let mut mesh = Mesh::new();
    let cone = CylinderParams {
        radius_bottom: 0.0,
        layers: 2,
        ..params(5)
    };
    cylinder(&mut mesh, &cone).expect("inverted cone succeeds");
    assert!(mesh.is_closed());
    mesh.check().expect("valid topology");
}

#[test]
fn test_staggered_bands() {
    let mut mesh = Mesh::new();
    let p = CylinderParams {
        banding: Banding::Staggered,
        layers: 4,
        ..params(8)
    };
    cylinder(&mut mesh, &p).expect("staggered cylinder succeeds");
    assert!(mesh.is_closed());
    let body = mesh.find_surface(SubmeshId(0), "body").expect("body");
    assert_eq!(mesh.surface(body).expect("surface").faces.len(), 4 * 16);
    mesh.check().expect("valid topology");

    let partial = CylinderParams {
        azimuth: Extent::new(0.0, 0.5),
        ..p
    };
    let err = cylinder(&mut mesh, &partial).expect_err("partial staggered fails");
    assert!(matches!(err, MeshError::Unsupported { .. }));
}

#[test]
fn test_partial_sweep_with_walls() {
    for kind in [TerminationKind::Flat, TerminationKind::Center] {
        let mut mesh = Mesh::new();
        let p = CylinderParams {
            azimuth: Extent::new(0.0, 0.75)
                .with_ends(Termination { kind, banded: false })
                .with_names("side0", "side1"),
            layers: 2,
            ..params(12)
        };
        cylinder(&mut mesh, &p).expect("partial cylinder succeeds");
        assert!(mesh.is_closed(), "{kind:?}");
        assert!(mesh.find_surface(SubmeshId(0), "side0").is_some());
        mesh.check().expect("valid topology");
    }
}

#[test]
fn test_distinct_faces() {
    let mut mesh = Mesh::new();
    let p = CylinderParams {
        distinct: true,
        profile: Extent::full(),
        ..params(4)
    };
    cylinder(&mut mesh, &p).expect("cylinder succeeds");
    assert_eq!(mesh.surface_count(), 4);
    mesh.check().expect("valid topology");
}

#[test]
fn test_invalid_parameters() {
    let mut mesh = Mesh::new();
    for bad in [
        params(2),
        CylinderParams {
            height: 0.0,
            ..params(8)
        },
        CylinderParams {
            radius_bottom: -1.0,
            ..params(8)
        },
        CylinderParams {
            radius_bottom: 0.0,
            radius_top: 0.0,
            ..params(8)
        },
        CylinderParams {
            layers: 0,
            ..params(8)
        },
    ] {
        let err = cylinder(&mut mesh, &bad).expect_err("invalid parameters fail");
        assert!(matches!(err, MeshError::InvalidParameter { .. }));
    }
    // Nothing reached the target mesh.
    assert_eq!(mesh.submesh_count(), 0);
}
