//! Thin wrapper around `glam::DVec3` / `glam::DVec2` shared across kernel
//! modules.
//!
//! The helper functions cover the few vector operations the builders need
//! beyond what `glam` provides directly: polygon normals, rotation about the
//! revolution axis and tolerance comparisons.

pub use glam::DVec2 as Vec2;
pub use glam::DVec3 as Vec3;

/// Rotates `v` about the +Z axis by the angle whose cosine and sine are given.
///
/// # Examples
/// ```
/// use lathe_mesh::core::vec3::{rotate_about_z, Vec3};
/// let v = rotate_about_z(Vec3::X, 0.0, 1.0);
/// assert!((v - Vec3::Y).length() < 1e-12);
/// ```
pub fn rotate_about_z(v: Vec3, cos: f64, sin: f64) -> Vec3 {
    Vec3::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos, v.z)
}

/// Newell normal of a polygon, unnormalized.
///
/// The length equals twice the polygon area, so summing the Newell normals of
/// several faces gives their area-weighted normal. Counter-clockwise winding
/// seen from the tip of the returned vector.
///
/// # Examples
/// ```
/// use lathe_mesh::core::vec3::{newell_normal, Vec3};
/// let square = [Vec3::ZERO, Vec3::X, Vec3::new(1.0, 1.0, 0.0), Vec3::Y];
/// assert_eq!(newell_normal(&square), Vec3::new(0.0, 0.0, 2.0));
/// ```
pub fn newell_normal(points: &[Vec3]) -> Vec3 {
    let mut normal = Vec3::ZERO;
    for (i, current) in points.iter().enumerate() {
        let next = points[(i + 1) % points.len()];
        normal.x += (current.y - next.y) * (current.z + next.z);
        normal.y += (current.z - next.z) * (current.x + next.x);
        normal.z += (current.x - next.x) * (current.y + next.y);
    }
    normal
}

/// Returns two unit vectors `(t, b)` such that `(t, b, n)` is a right-handed
/// orthonormal frame. `n` must be normalized.
pub fn orthonormal_basis(n: Vec3) -> (Vec3, Vec3) {
    let seed = if n.x.abs() < 0.9 { Vec3::X } else { Vec3::Y };
    let t = seed.cross(n).normalize();
    let b = n.cross(t);
    (t, b)
}

/// Returns true when two positions coincide within `tolerance`, scaled by
/// their magnitude.
///
/// # Examples
/// ```
/// use lathe_mesh::core::vec3::{positions_coincide, Vec3};
/// assert!(positions_coincide(Vec3::X, Vec3::new(1.0 + 1e-13, 0.0, 0.0), 1e-9));
/// assert!(!positions_coincide(Vec3::X, Vec3::Y, 1e-9));
/// ```
pub fn positions_coincide(a: Vec3, b: Vec3, tolerance: f64) -> bool {
    let scale = 1.0 + a.length().max(b.length());
    (a - b).length() <= tolerance * scale
}

#[cfg(test)]
mod tests;
