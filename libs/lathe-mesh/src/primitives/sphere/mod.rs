//! # Sphere Primitive
//!
//! Spheres and spherical zones centered at the origin. The profile runs
//! from the south pole (`0`) to the north pole (`1`); a profile that
//! reaches a pole ends in a cusp there instead of a ring.

use super::{
    axis_cusp, body_patch, build_courses, check_alignment, check_divisions, check_layers,
    check_positive, check_profile, finish, near, Banding, Section,
};
use crate::config::KernelConfig;
use crate::core::{SubmeshId, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::{texture_span, Extent, Termination};
use crate::mesh::Mesh;
use crate::ring::{generate_ring, RingParams};
use crate::seal::{project_to_axis, SealContext};
use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_PI_2, PI};

/// Parameters of a sphere or spherical zone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereParams {
    /// Segments around the axis.
    pub divisions: usize,
    /// Courses from the lower to the upper end of the profile.
    pub layers: usize,
    /// Sphere radius.
    pub radius: f64,
    /// Azimuth interval in turns and the seam terminations.
    pub azimuth: Extent,
    /// Latitude interval (`0` south pole, `1` north pole) and the end
    /// terminations used away from the poles.
    pub profile: Extent,
    /// One surface per face with hard normals.
    pub distinct: bool,
    /// Alignment of texture spans narrowed at the poles.
    pub texture_alignment: f64,
}

impl Default for SphereParams {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

impl SphereParams {
    /// Unit sphere using the division and texture defaults of `config`,
    /// with half as many layers as divisions.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            divisions: config.default_divisions,
            layers: config.default_divisions / 2,
            radius: 1.0,
            azimuth: Extent::full().with_names("side0", "side1"),
            profile: Extent::full().with_ends(Termination::flat(false)),
            distinct: false,
            texture_alignment: config.texture_alignment,
        }
    }
}

/// Builds a sphere into `mesh` as a new submesh named `sphere`.
///
/// # Errors
/// `InvalidParameter` for bad dimensions or a single course joining both
/// poles, `Unsupported` for center terminations at the profile ends.
pub fn sphere(mesh: &mut Mesh, params: &SphereParams) -> MeshResult<SubmeshId> {
    check_divisions(params.divisions)?;
    check_layers(params.layers)?;
    check_positive("sphere radius", params.radius)?;
    params.azimuth.validate()?;
    check_profile(&params.profile)?;
    check_alignment(params.texture_alignment)?;

    let n = params.divisions;
    let layers = params.layers;
    let t_of = |k: usize| params.profile.lerp(k as f64 / layers as f64);
    let cusp_lower = near(t_of(0), 0.0);
    let cusp_upper = near(t_of(layers), 1.0);
    if cusp_lower && cusp_upper && layers == 1 {
        return Err(MeshError::invalid(
            "a sphere reaching both poles needs at least 2 layers",
        ));
    }

    let mut sections = Vec::with_capacity(layers + 1);
    for k in 0..=layers {
        let span = texture_span(k, layers, cusp_lower, cusp_upper, params.texture_alignment)?;
        let section = if k == 0 && cusp_lower {
            Section::Cusp(axis_cusp(-params.radius, -Vec3::Z, span))
        } else if k == layers && cusp_upper {
            Section::Cusp(axis_cusp(params.radius, Vec3::Z, span))
        } else {
            let theta = -FRAC_PI_2 + PI * t_of(k);
            let (sin, cos) = theta.sin_cos();
            let ring = RingParams::new(n, params.radius * cos, params.radius * sin)
                .with_azimuth(params.azimuth.start, params.azimuth.end)
                .with_normal(Vec3::new(cos, 0.0, sin))
                .with_span(span);
            Section::Ring(generate_ring(&ring)?)
        };
        sections.push(section);
    }

    let mut scratch = Mesh::new();
    let submesh = scratch.create_submesh("sphere");
    let patch = body_patch(&mut scratch, submesh, params.distinct)?;
    let courses = build_courses(&mut scratch, &patch, &sections, Banding::Quads, false)?;

    let mut seal = SealContext::new(&mut scratch, submesh, &courses, false, &project_to_axis)?;
    seal.seal_sphere(&mut scratch, &params.azimuth, &params.profile)?;
    finish(mesh, scratch, "sphere", n, layers)
}

#[cfg(test)]
mod tests;
