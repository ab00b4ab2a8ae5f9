//! # Ring Attribute Generator
//!
//! Produces the `n + 1` corner attributes of one ring around the +Z axis.
//! The generator is pure: it never touches a mesh, so rings can be built
//! ahead of the course builders that consume them.
//!
//! ## Symmetric Tables
//!
//! A full turn evaluates sine and cosine only on one octant, quadrant or
//! half-turn and fills the rest by mirroring. Mirrored corners are exact
//! reflections of each other and the axis crossings are exact, so rings
//! built from the same table line up bit for bit.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::ring::{generate_ring, RingParams};
//!
//! let ring = generate_ring(&RingParams::new(8, 2.0, 0.5)).unwrap();
//! assert_eq!(ring.corners.len(), 9);
//! assert_eq!(ring.corners[2].position.x, 0.0);
//! assert_eq!(ring.corners[8].position, ring.corners[0].position);
//! ```

use crate::core::vec3::rotate_about_z;
use crate::core::{Attributes, Vec2, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::TextureSpan;
use config::constants::{EPSILON_TOLERANCE, MIN_DIVISIONS};
use std::f64::consts::{FRAC_1_SQRT_2, TAU};

// =============================================================================
// UNIT CIRCLE TABLES
// =============================================================================

/// `n + 1` points of the unit circle at azimuths `j / n` turns, built by
/// mirroring.
///
/// Directly evaluated up to `n/8` when `n % 8 == 0`, up to `n/4` when
/// `n % 4 == 0`, and up to `n/2` otherwise. The last point equals the first.
///
/// # Examples
/// ```
/// use lathe_mesh::ring::unit_circle_symmetric;
/// let table = unit_circle_symmetric(8);
/// assert_eq!(table[2].x, 0.0);
/// assert_eq!(table[2].y, 1.0);
/// assert_eq!(table[4].x, -1.0);
/// ```
pub fn unit_circle_symmetric(n: usize) -> Vec<Vec2> {
    let mut table = vec![Vec2::ZERO; n + 1];
    if n == 0 {
        table[0] = Vec2::X;
        return table;
    }
    let direct = |j: usize| {
        let (sin, cos) = (TAU * j as f64 / n as f64).sin_cos();
        Vec2::new(cos, sin)
    };

    let half = n / 2;
    let quarter = n / 4;
    if n % 8 == 0 {
        let eighth = n / 8;
        for (j, slot) in table.iter_mut().enumerate().take(eighth) {
            *slot = direct(j);
        }
        table[eighth] = Vec2::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        // Reflect across the diagonal x = y.
        for j in eighth + 1..=quarter {
            let p = table[quarter - j];
            table[j] = Vec2::new(p.y, p.x);
        }
    } else if n % 4 == 0 {
        for (j, slot) in table.iter_mut().enumerate().take(quarter) {
            *slot = direct(j);
        }
        table[quarter] = Vec2::Y;
    } else {
        for (j, slot) in table.iter_mut().enumerate().take(half + 1) {
            *slot = direct(j);
        }
        if n % 2 == 0 {
            table[half] = Vec2::new(-1.0, 0.0);
        }
    }
    table[0] = Vec2::X;

    if n % 4 == 0 {
        // Reflect across the Y axis.
        for j in quarter + 1..=half {
            let p = table[half - j];
            table[j] = Vec2::new(-p.x, p.y);
        }
    }
    // Reflect across the X axis.
    for j in half + 1..n {
        let p = table[n - j];
        table[j] = Vec2::new(p.x, -p.y);
    }
    table[n] = table[0];
    table
}

/// `n + 1` points of the unit circle from `start` to `end` turns, each
/// evaluated directly.
///
/// # Examples
/// ```
/// use lathe_mesh::ring::unit_circle_direct;
/// let table = unit_circle_direct(2, 0.0, 0.5);
/// assert!((table[1].y - 1.0).abs() < 1e-15);
/// ```
pub fn unit_circle_direct(n: usize, start: f64, end: f64) -> Vec<Vec2> {
    (0..=n)
        .map(|j| {
            let t = if n == 0 { 0.0 } else { j as f64 / n as f64 };
            let (sin, cos) = (TAU * (start + (end - start) * t)).sin_cos();
            Vec2::new(cos, sin)
        })
        .collect()
}

// =============================================================================
// RING
// =============================================================================

/// Parameters of one ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingParams {
    /// Number of segments around the ring.
    pub divisions: usize,
    /// Azimuth of the first corner, in turns.
    pub start: f64,
    /// Azimuth of the last corner, in turns.
    pub end: f64,
    /// Distance from the axis.
    pub radius: f64,
    /// Height along the axis.
    pub z: f64,
    /// Corner normal at azimuth 0 (x radial, y tangential, z axial).
    pub normal: Vec3,
    /// Texture coordinates across the ring.
    pub span: TextureSpan,
}

impl RingParams {
    /// Full-turn ring with an outward radial normal and full texture width.
    pub fn new(divisions: usize, radius: f64, z: f64) -> Self {
        Self {
            divisions,
            start: 0.0,
            end: 1.0,
            radius,
            z,
            normal: Vec3::X,
            span: TextureSpan {
                u0: 0.0,
                u1: 1.0,
                v: 0.0,
            },
        }
    }

    /// Sets the azimuth interval.
    #[must_use]
    pub fn with_azimuth(mut self, start: f64, end: f64) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    /// Sets the prototype normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }

    /// Sets the texture span.
    #[must_use]
    pub fn with_span(mut self, span: TextureSpan) -> Self {
        self.span = span;
        self
    }

    /// Returns true when the azimuth interval covers a whole turn.
    pub fn is_full_turn(&self) -> bool {
        ((self.end - self.start) - 1.0).abs() <= EPSILON_TOLERANCE
    }
}

/// Corner attributes of one ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    /// `divisions + 1` corners; on a full turn the last repeats the first
    /// position with `u == u1`.
    pub corners: Vec<Attributes>,
    /// Whether the ring closes on itself.
    pub full_turn: bool,
}

impl Ring {
    /// Number of segments.
    pub fn divisions(&self) -> usize {
        self.corners.len().saturating_sub(1)
    }

    /// Positions of all corners.
    pub fn positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.corners.iter().map(|c| c.position)
    }
}

/// Generates the corners of one ring.
///
/// A full turn uses the symmetric table (rotated when `start != 0`); a
/// partial sweep evaluates every corner directly.
///
/// # Errors
/// `InvalidParameter` when `divisions < 3`, the radius is not positive or
/// the azimuth interval is malformed.
pub fn generate_ring(params: &RingParams) -> MeshResult<Ring> {
    let n = params.divisions;
    if n < MIN_DIVISIONS {
        return Err(MeshError::invalid(format!(
            "ring divisions must be >= {MIN_DIVISIONS}, got {n}"
        )));
    }
    if !(params.radius.is_finite() && params.radius > 0.0) {
        return Err(MeshError::invalid(format!(
            "ring radius must be positive, got {}",
            params.radius
        )));
    }
    let sweep = params.end - params.start;
    if !sweep.is_finite() || sweep <= 0.0 || sweep > 1.0 + EPSILON_TOLERANCE {
        return Err(MeshError::invalid(format!(
            "ring azimuth must increase by at most one turn: {}..{}",
            params.start, params.end
        )));
    }

    let full_turn = params.is_full_turn();
    let table = if full_turn {
        let mut table = unit_circle_symmetric(n);
        if params.start != 0.0 {
            let (sin, cos) = (TAU * params.start).sin_cos();
            let rotation = Vec2::new(cos, sin);
            for p in table.iter_mut() {
                *p = rotation.rotate(*p);
            }
            table[n] = table[0];
        }
        table
    } else {
        unit_circle_direct(n, params.start, params.end)
    };

    let span = params.span;
    let corners = table
        .iter()
        .enumerate()
        .map(|(j, p)| {
            let u = if j == n {
                span.u1
            } else {
                span.lerp(j as f64 / n as f64)
            };
            Attributes::new(
                Vec3::new(params.radius * p.x, params.radius * p.y, params.z),
                rotate_about_z(params.normal, p.x, p.y),
                Vec2::new(u, span.v),
            )
        })
        .collect();

    Ok(Ring { corners, full_turn })
}

#[cfg(test)]
mod tests;
