use super::*;
use crate::extent::Termination;
use approx::assert_relative_eq;

fn params(divisions: usize, layers: usize) -> TorusParams {
    TorusParams {
        divisions,
        layers,
        ..TorusParams::default()
    }
}

#[test]
fn test_torus_closes_on_itself() {
    let mut mesh = Mesh::new();
    let submesh = torus(&mut mesh, &params(8, 6)).expect("torus succeeds");
    assert_eq!(mesh.submesh(submesh).expect("submesh").name, "torus");
    assert_eq!(mesh.face_count(), 2 * 8 * 6);
    assert_eq!(mesh.surface_count(), 1);
    assert!(mesh.is_closed());
    mesh.check().expect("valid topology");
}

#[test]
fn test_vertices_lie_on_the_tube() {
    let mut mesh = Mesh::new();
    let p = TorusParams {
        major_radius: 3.0,
        minor_radius: 1.0,
        ..params(12, 8)
    };
    torus(&mut mesh, &p).expect("torus succeeds");
    for (face, _) in mesh.faces() {
        for p in mesh.face_positions(face).expect("positions") {
            let rho = (p.x * p.x + p.y * p.y).sqrt();
            let tube = ((rho - 3.0).powi(2) + p.z * p.z).sqrt();
            assert_relative_eq!(tube, 1.0, epsilon = 1e-12);
        }
    }
}

#[test]
fn test_half_tube_with_annulus() {
    let mut mesh = Mesh::new();
    let p = TorusParams {
        profile: Extent::new(0.0, 0.5).with_ends(Termination::flat(false)),
        ..params(8, 4)
    };
    torus(&mut mesh, &p).expect("half tube succeeds");
    assert!(mesh.is_closed());
    let annulus = mesh.find_surface(SubmeshId(0), "end0").expect("annulus");
    // The annulus lies in z = 0 and faces down.
    assert_relative_eq!(mesh.surface(annulus).expect("surface").normal.z, -1.0, epsilon = 1e-12);
    mesh.check().expect("valid topology");
}

#[test]
fn test_half_tube_with_center_ends() {
    let mut mesh = Mesh::new();
    let p = TorusParams {
        profile: Extent::new(0.0, 0.5).with_ends(Termination::center()),
        ..params(8, 4)
    };
    torus(&mut mesh, &p).expect("half tube succeeds");
    assert!(mesh.is_closed());
    assert!(mesh.find_surface(SubmeshId(0), "end0").is_some());
    assert!(mesh.find_surface(SubmeshId(0), "end1").is_some());
    mesh.check().expect("valid topology");
}

#[test]
fn test_quarter_torus_with_section_caps() {
    let mut mesh = Mesh::new();
    let p = TorusParams {
        azimuth: Extent::new(0.0, 0.25)
            .with_ends(Termination {
                kind: crate::extent::TerminationKind::Center,
                banded: false,
            })
            .with_names("side0", "side1"),
        ..params(6, 8)
    };
    torus(&mut mesh, &p).expect("quarter torus succeeds");
    assert!(mesh.is_closed());
    for name in ["side0", "side1"] {
        let cap = mesh.find_surface(SubmeshId(0), name).expect("section cap");
        // An octagonal tube section triangulates into six triangles.
        assert_eq!(mesh.surface(cap).expect("surface").faces.len(), 6);
    }
    mesh.check().expect("valid topology");
}

#[test]
fn test_invalid_torus() {
    let mut mesh = Mesh::new();
    let fat = TorusParams {
        major_radius: 1.0,
        minor_radius: 1.0,
        ..params(8, 8)
    };
    let err = torus(&mut mesh, &fat).expect_err("self-intersecting torus fails");
    assert!(matches!(err, MeshError::InvalidParameter { .. }));

    let err = torus(&mut mesh, &params(8, 2)).expect_err("two-layer tube fails");
    assert!(matches!(err, MeshError::InvalidParameter { .. }));
    assert_eq!(mesh.submesh_count(), 0);
}
