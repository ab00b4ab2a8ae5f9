//! # Torus Primitive
//!
//! Tori around the +Z axis. The tube profile is swept in turns around the
//! tube's own center circle, starting at the outer equator and rising
//! over the top. A full tube closes on itself and needs no end caps.

use super::{
    body_patch, build_courses, check_alignment, check_divisions, check_positive, finish,
    Banding, Section,
};
use crate::config::KernelConfig;
use crate::core::{SubmeshId, Vec2, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::{texture_span, Extent};
use crate::mesh::Mesh;
use crate::ring::{generate_ring, Ring, RingParams};
use crate::seal::{project_to_major_circle, SealContext};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Smallest course count that can close a tube.
const MIN_CLOSED_LAYERS: usize = 3;

/// Parameters of a torus or torus section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorusParams {
    /// Segments around the main axis.
    pub divisions: usize,
    /// Courses around the tube.
    pub layers: usize,
    /// Distance from the axis to the tube center.
    pub major_radius: f64,
    /// Tube radius; must be below `major_radius`.
    pub minor_radius: f64,
    /// Azimuth interval in turns and the seam terminations.
    pub azimuth: Extent,
    /// Tube interval in turns and the tube end terminations.
    pub profile: Extent,
    /// One surface per face with hard normals.
    pub distinct: bool,
    /// Alignment of texture spans.
    pub texture_alignment: f64,
}

impl Default for TorusParams {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

impl TorusParams {
    /// Closed torus using the division and texture defaults of `config`,
    /// with half as many tube layers as divisions.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            divisions: config.default_divisions,
            layers: config.default_divisions / 2,
            major_radius: 1.0,
            minor_radius: 0.25,
            azimuth: Extent::full().with_names("side0", "side1"),
            profile: Extent::full(),
            distinct: false,
            texture_alignment: config.texture_alignment,
        }
    }
}

/// Builds a torus into `mesh` as a new submesh named `torus`.
///
/// # Errors
/// `InvalidParameter` when the tube does not fit inside the major radius,
/// or a closed tube has fewer than three layers.
pub fn torus(mesh: &mut Mesh, params: &TorusParams) -> MeshResult<SubmeshId> {
    check_divisions(params.divisions)?;
    check_positive("torus minor radius", params.minor_radius)?;
    check_positive("torus major radius", params.major_radius)?;
    if params.major_radius <= params.minor_radius {
        return Err(MeshError::invalid(format!(
            "torus major radius {} must exceed minor radius {}",
            params.major_radius, params.minor_radius
        )));
    }
    params.azimuth.validate()?;
    params.profile.validate()?;
    check_alignment(params.texture_alignment)?;

    let n = params.divisions;
    let layers = params.layers;
    let closed = params.profile.is_full();
    let min_layers = if closed { MIN_CLOSED_LAYERS } else { 1 };
    if layers < min_layers {
        return Err(MeshError::invalid(format!(
            "torus needs at least {min_layers} layers, got {layers}"
        )));
    }

    let mut sections: Vec<Section> = Vec::with_capacity(layers + 1);
    for k in 0..=layers {
        let span = texture_span(k, layers, false, false, params.texture_alignment)?;
        if closed && k == layers {
            // Reuse the first ring so the tube closes exactly.
            let Some(Section::Ring(first)) = sections.first() else {
                return Err(MeshError::invalid("a closed tube must start with a ring"));
            };
            let last = Ring {
                corners: first
                    .corners
                    .iter()
                    .map(|c| c.with_texcoord(Vec2::new(c.texcoord.x, span.v)))
                    .collect(),
                full_turn: first.full_turn,
            };
            sections.push(Section::Ring(last));
            continue;
        }
        let phi = TAU * params.profile.lerp(k as f64 / layers as f64);
        let (sin, cos) = phi.sin_cos();
        let ring = RingParams::new(
            n,
            params.major_radius + params.minor_radius * cos,
            params.minor_radius * sin,
        )
        .with_azimuth(params.azimuth.start, params.azimuth.end)
        .with_normal(Vec3::new(cos, 0.0, sin))
        .with_span(span);
        sections.push(Section::Ring(generate_ring(&ring)?));
    }

    let mut scratch = Mesh::new();
    let submesh = scratch.create_submesh("torus");
    let patch = body_patch(&mut scratch, submesh, params.distinct)?;
    let courses = build_courses(&mut scratch, &patch, &sections, Banding::Quads, false)?;

    let center = project_to_major_circle(params.major_radius);
    let mut seal = SealContext::new(&mut scratch, submesh, &courses, closed, &center)?;
    seal.seal_torus(&mut scratch, &params.azimuth, &params.profile)?;
    finish(mesh, scratch, "torus", n, layers)
}

#[cfg(test)]
mod tests;
