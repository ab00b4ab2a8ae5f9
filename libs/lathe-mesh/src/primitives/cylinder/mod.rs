//! # Cylinder Primitive
//!
//! Cylinders, frusta and cones around the +Z axis, from `z = 0` to
//! `z = height`. A zero radius at either end turns that end into a cusp.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::primitives::cylinder::{cylinder, CylinderParams};
//! use lathe_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let cone = CylinderParams {
//!     radius_top: 0.0,
//!     ..CylinderParams::default()
//! };
//! cylinder(&mut mesh, &cone).unwrap();
//! assert!(mesh.is_closed());
//! ```

use super::{
    axis_cusp, body_patch, build_courses, check_alignment, check_divisions, check_layers,
    check_positive, check_profile, finish, Banding, Section,
};
use crate::config::KernelConfig;
use crate::core::{SubmeshId, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::{texture_span, Extent, Termination};
use crate::mesh::Mesh;
use crate::ring::{generate_ring, RingParams};
use crate::seal::{project_to_axis, SealContext};
use serde::{Deserialize, Serialize};

/// Parameters of a cylinder, frustum or cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderParams {
    /// Segments around the axis.
    pub divisions: usize,
    /// Courses along the height.
    pub layers: usize,
    /// Distance between the two ends.
    pub height: f64,
    /// Radius at `z = 0`; zero for a cusp.
    pub radius_bottom: f64,
    /// Radius at `z = height`; zero for a cusp.
    pub radius_top: f64,
    /// Azimuth interval in turns and the seam terminations.
    pub azimuth: Extent,
    /// Fraction of the height to build and the end terminations.
    pub profile: Extent,
    /// Quads or staggered triangles.
    pub banding: Banding,
    /// One surface per face with hard normals.
    pub distinct: bool,
    /// Alignment of texture spans narrowed by a cusp.
    pub texture_alignment: f64,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

impl CylinderParams {
    /// Unit cylinder using the division, layer and texture defaults of
    /// `config`.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            divisions: config.default_divisions,
            layers: config.default_layers,
            height: 1.0,
            radius_bottom: 1.0,
            radius_top: 1.0,
            azimuth: Extent::full().with_names("side0", "side1"),
            profile: Extent::full().with_ends(Termination::flat(false)),
            banding: Banding::Quads,
            distinct: false,
            texture_alignment: config.texture_alignment,
        }
    }
}

impl CylinderParams {
    fn validate(&self) -> MeshResult<()> {
        check_divisions(self.divisions)?;
        check_layers(self.layers)?;
        check_positive("cylinder height", self.height)?;
        for radius in [self.radius_bottom, self.radius_top] {
            if !(radius.is_finite() && radius >= 0.0) {
                return Err(MeshError::invalid(format!(
                    "cylinder radii must be non-negative, got {radius}"
                )));
            }
        }
        if self.radius_bottom == 0.0 && self.radius_top == 0.0 {
            return Err(MeshError::invalid(
                "cylinder needs at least one non-zero radius",
            ));
        }
        self.azimuth.validate()?;
        check_profile(&self.profile)?;
        check_alignment(self.texture_alignment)?;
        if self.banding == Banding::Staggered && !self.azimuth.is_full() {
            return Err(MeshError::unsupported(
                "staggered banding requires a full turn",
            ));
        }
        Ok(())
    }

    fn radius_at(&self, t: f64) -> f64 {
        self.radius_bottom + (self.radius_top - self.radius_bottom) * t
    }
}

/// Builds a cylinder, frustum or cone into `mesh` as a new submesh named
/// `cylinder`.
///
/// # Errors
/// `InvalidParameter` for bad dimensions, `Unsupported` for staggered
/// banding on a partial sweep or an unsupported termination mix.
pub fn cylinder(mesh: &mut Mesh, params: &CylinderParams) -> MeshResult<SubmeshId> {
    params.validate()?;
    let n = params.divisions;
    let layers = params.layers;

    // Outward normal of the slanted wall at azimuth 0.
    let normal = Vec3::new(
        params.height,
        0.0,
        params.radius_bottom - params.radius_top,
    )
    .normalize();
    let t_of = |k: usize| params.profile.lerp(k as f64 / layers as f64);
    let cusp_lower = params.radius_at(t_of(0)) <= 0.0;
    let cusp_upper = params.radius_at(t_of(layers)) <= 0.0;
    if cusp_lower && cusp_upper {
        return Err(MeshError::invalid("a cylinder profile cannot start and end in a cusp"));
    }

    let mut sections = Vec::with_capacity(layers + 1);
    for k in 0..=layers {
        let t = t_of(k);
        let z = params.height * t;
        let span = texture_span(k, layers, cusp_lower, cusp_upper, params.texture_alignment)?;
        let section = if k == 0 && cusp_lower {
            Section::Cusp(axis_cusp(z, -Vec3::Z, span))
        } else if k == layers && cusp_upper {
            Section::Cusp(axis_cusp(z, Vec3::Z, span))
        } else {
            let offset = match params.banding {
                Banding::Quads => 0.0,
                Banding::Staggered => k as f64 * 0.5 / n as f64,
            };
            let ring = RingParams::new(n, params.radius_at(t), z)
                .with_azimuth(params.azimuth.start + offset, params.azimuth.end + offset)
                .with_normal(normal)
                .with_span(span);
            Section::Ring(generate_ring(&ring)?)
        };
        sections.push(section);
    }

    let mut scratch = Mesh::new();
    let submesh = scratch.create_submesh("cylinder");
    let patch = body_patch(&mut scratch, submesh, params.distinct)?;
    let linear = params.banding == Banding::Quads;
    let courses = build_courses(&mut scratch, &patch, &sections, params.banding, linear)?;

    let mut seal = SealContext::new(&mut scratch, submesh, &courses, false, &project_to_axis)?;
    seal.seal_cylinder(&mut scratch, &params.azimuth, &params.profile)?;
    finish(mesh, scratch, "cylinder", n, layers)
}

#[cfg(test)]
mod tests;
