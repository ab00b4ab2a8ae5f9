//! Ear-clipping triangulation of polygon faces.
//!
//! Boundary halfedges keep their ids and partners, so the outside of a
//! triangulated face is wired exactly as before. Each diagonal becomes a
//! partnered pair of new halfedges with freshly duplicated corners.

use super::Mesh;
use crate::core::vec3::{newell_normal, orthonormal_basis};
use crate::core::{FaceId, HalfedgeId, Vec2, Vec3};
use crate::error::TopologyResult;
use std::collections::HashMap;

impl Mesh {
    /// Splits every face with more than three corners into triangles.
    ///
    /// The first triangle of a face keeps the original face id; the others
    /// are appended to the same surface with the same normal.
    pub fn triangulate(&mut self) -> TopologyResult<()> {
        let face_total = self.faces.len();
        for i in 0..face_total {
            let face = FaceId::from_index(i);
            let ring = self.face_halfedges(face)?;
            if ring.len() <= 3 {
                continue;
            }
            let positions = self.face_positions(face)?;
            let triangles = ear_clip(&positions);
            self.split_face(face, &ring, &triangles)?;
        }
        Ok(())
    }

    fn split_face(
        &mut self,
        face: FaceId,
        ring: &[HalfedgeId],
        triangles: &[[usize; 3]],
    ) -> TopologyResult<()> {
        let count = ring.len();
        let (surface, normal) = {
            let record = self.face(face)?;
            (record.surface, record.normal)
        };
        let mut diagonals: HashMap<(usize, usize), HalfedgeId> = HashMap::new();

        for (t, triangle) in triangles.iter().enumerate() {
            let target = if t == 0 {
                face
            } else {
                self.create_face(surface, normal)?
            };

            let mut sides = [HalfedgeId::NONE; 3];
            for k in 0..3 {
                let from = triangle[k];
                let to = triangle[(k + 1) % 3];
                sides[k] = if to == (from + 1) % count {
                    let h = ring[from];
                    self.halfedge_mut(h)?.face = target;
                    h
                } else {
                    let corner = *self.corner(ring[from])?;
                    let vertex = self.create_vertex(corner);
                    let h = self.create_halfedge(target, vertex)?;
                    if let Some(&opposite) = diagonals.get(&(to, from)) {
                        self.set_partners(h, opposite)?;
                    }
                    diagonals.insert((from, to), h);
                    h
                };
            }
            for k in 0..3 {
                self.link(sides[k], sides[(k + 1) % 3])?;
            }
            self.face_mut(target)?.halfedge = sides[0];
        }
        Ok(())
    }
}

/// Ear-clips a simple polygon given in ring order.
///
/// Returns triangles as corner indices, each counter-clockwise like the
/// input. Ears that are reflex, collinear or contain another corner are
/// skipped; when no proper ear remains (a degenerate remainder), the
/// least-bad candidate is clipped anyway so every corner is consumed.
pub(crate) fn ear_clip(positions: &[Vec3]) -> Vec<[usize; 3]> {
    let count = positions.len();
    if count < 3 {
        return Vec::new();
    }

    let normal = newell_normal(positions).normalize_or_zero();
    if normal == Vec3::ZERO {
        return (1..count - 1).map(|k| [0, k, k + 1]).collect();
    }
    let (tangent, bitangent) = orthonormal_basis(normal);
    let points: Vec<Vec2> = positions
        .iter()
        .map(|p| Vec2::new(p.dot(tangent), p.dot(bitangent)))
        .collect();

    let scale = points
        .iter()
        .fold(0.0_f64, |acc, p| acc.max(p.x.abs()).max(p.y.abs()))
        .max(1.0);
    let epsilon = 1.0e-12 * scale * scale;

    let mut remaining: Vec<usize> = (0..count).collect();
    let mut triangles = Vec::with_capacity(count - 2);

    while remaining.len() > 3 {
        let len = remaining.len();
        let mut clipped = None;
        let mut fallback = (0, f64::NEG_INFINITY);

        for k in 0..len {
            let a = remaining[(k + len - 1) % len];
            let b = remaining[k];
            let c = remaining[(k + 1) % len];
            let turn = cross(points[a], points[b], points[c]);
            if turn > fallback.1 {
                fallback = (k, turn);
            }
            if turn <= epsilon {
                continue;
            }
            let blocked = remaining.iter().any(|&p| {
                p != a
                    && p != b
                    && p != c
                    && points[p] != points[a]
                    && points[p] != points[b]
                    && points[p] != points[c]
                    && inside_triangle(points[p], points[a], points[b], points[c], epsilon)
            });
            if !blocked {
                clipped = Some(k);
                break;
            }
        }

        let k = clipped.unwrap_or(fallback.0);
        let a = remaining[(k + len - 1) % len];
        let b = remaining[k];
        let c = remaining[(k + 1) % len];
        triangles.push([a, b, c]);
        remaining.remove(k);
    }
    triangles.push([remaining[0], remaining[1], remaining[2]]);
    triangles
}

fn cross(a: Vec2, b: Vec2, c: Vec2) -> f64 {
    (b - a).perp_dot(c - b)
}

fn inside_triangle(p: Vec2, a: Vec2, b: Vec2, c: Vec2, epsilon: f64) -> bool {
    (b - a).perp_dot(p - a) >= -epsilon
        && (c - b).perp_dot(p - b) >= -epsilon
        && (a - c).perp_dot(p - c) >= -epsilon
}
