//! Tests for the vector helpers.

use super::*;
use approx::assert_relative_eq;

#[test]
fn newell_normal_of_triangle_matches_cross_product() {
    let a = Vec3::new(0.0, 0.0, 0.0);
    let b = Vec3::new(2.0, 0.0, 1.0);
    let c = Vec3::new(0.0, 3.0, 0.0);
    let expected = (b - a).cross(c - a);
    let normal = newell_normal(&[a, b, c]);
    assert_relative_eq!(normal.x, expected.x, epsilon = 1e-12);
    assert_relative_eq!(normal.y, expected.y, epsilon = 1e-12);
    assert_relative_eq!(normal.z, expected.z, epsilon = 1e-12);
}

#[test]
fn newell_normal_flips_with_winding() {
    let ccw = [Vec3::ZERO, Vec3::X, Vec3::Y];
    let cw = [Vec3::ZERO, Vec3::Y, Vec3::X];
    assert!(newell_normal(&ccw).z > 0.0);
    assert!(newell_normal(&cw).z < 0.0);
}

#[test]
fn rotate_about_z_keeps_axial_component() {
    let v = rotate_about_z(Vec3::new(1.0, 0.0, 2.5), 0.0, -1.0);
    assert_relative_eq!(v.x, 0.0, epsilon = 1e-15);
    assert_relative_eq!(v.y, -1.0, epsilon = 1e-15);
    assert_eq!(v.z, 2.5);
}

#[test]
fn orthonormal_basis_is_right_handed() {
    for n in [Vec3::X, Vec3::Y, Vec3::Z, Vec3::new(1.0, -2.0, 0.5).normalize()] {
        let (t, b) = orthonormal_basis(n);
        assert_relative_eq!(t.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(b.length(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(t.dot(n), 0.0, epsilon = 1e-12);
        let handed = t.cross(b);
        assert_relative_eq!(handed.dot(n), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn coincidence_scales_with_magnitude() {
    let far = Vec3::new(1.0e6, 0.0, 0.0);
    assert!(positions_coincide(far, far + Vec3::new(1.0e-4, 0.0, 0.0), 1e-9));
    assert!(!positions_coincide(Vec3::ZERO, Vec3::new(1.0e-4, 0.0, 0.0), 1e-9));
}
