//! # Helical Cone Primitive
//!
//! A cone whose rings rotate about the axis as they rise, so the lateral
//! edges wind into helices. Radius and height fall linearly from the base
//! ring to an apex cusp; each layer adds an equal share of the twist.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::primitives::helical_cone::{helical_cone, HelicalConeParams};
//! use lathe_mesh::Mesh;
//!
//! let mut mesh = Mesh::new();
//! let params = HelicalConeParams {
//!     layers: 6,
//!     twist: 0.25,
//!     ..HelicalConeParams::default()
//! };
//! helical_cone(&mut mesh, &params).unwrap();
//! assert!(mesh.is_closed());
//! ```

use super::{
    axis_cusp, body_patch, build_courses, check_alignment, check_divisions, check_layers,
    check_positive, finish, Banding, Section,
};
use crate::config::KernelConfig;
use crate::core::{SubmeshId, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::{texture_span, Extent, Termination};
use crate::mesh::Mesh;
use crate::ring::{generate_ring, RingParams};
use crate::seal::{project_to_axis, SealContext};
use serde::{Deserialize, Serialize};

/// Parameters of a helical cone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelicalConeParams {
    /// Segments around the axis.
    pub divisions: usize,
    /// Courses from the base to the apex.
    pub layers: usize,
    /// Height of the apex above the base.
    pub height: f64,
    /// Base radius.
    pub radius: f64,
    /// Rotation of the apex course relative to the base, in turns.
    pub twist: f64,
    /// Azimuth interval of the base ring and the seam terminations.
    pub azimuth: Extent,
    /// Termination of the base (`lower`); the apex is always a cusp.
    pub profile: Extent,
    /// One surface per face with hard normals.
    pub distinct: bool,
    /// Alignment of texture spans narrowed toward the apex.
    pub texture_alignment: f64,
}

impl Default for HelicalConeParams {
    fn default() -> Self {
        Self::from_config(&KernelConfig::default())
    }
}

impl HelicalConeParams {
    /// Half-turn helical cone using the division and texture defaults of
    /// `config`.
    pub fn from_config(config: &KernelConfig) -> Self {
        Self {
            divisions: config.default_divisions,
            layers: 8,
            height: 1.0,
            radius: 1.0,
            twist: 0.5,
            azimuth: Extent::full().with_names("side0", "side1"),
            profile: Extent::full().with_lower(Termination::flat(false)),
            distinct: false,
            texture_alignment: config.texture_alignment,
        }
    }
}

/// Builds a helical cone into `mesh` as a new submesh named
/// `helical_cone`.
///
/// Without twist the courses are coplanar along each segment and the band
/// builders reuse the normal below.
pub fn helical_cone(mesh: &mut Mesh, params: &HelicalConeParams) -> MeshResult<SubmeshId> {
    check_divisions(params.divisions)?;
    check_layers(params.layers)?;
    check_positive("helical cone height", params.height)?;
    check_positive("helical cone radius", params.radius)?;
    if !params.twist.is_finite() {
        return Err(MeshError::invalid(format!(
            "helical cone twist must be finite, got {}",
            params.twist
        )));
    }
    params.azimuth.validate()?;
    check_alignment(params.texture_alignment)?;

    let n = params.divisions;
    let layers = params.layers;
    let normal = Vec3::new(params.height, 0.0, params.radius).normalize();

    let mut sections = Vec::with_capacity(layers + 1);
    for k in 0..layers {
        let t = k as f64 / layers as f64;
        let turn = params.twist * t;
        let span = texture_span(k, layers, false, true, params.texture_alignment)?;
        let ring = RingParams::new(n, params.radius * (1.0 - t), params.height * t)
            .with_azimuth(params.azimuth.start + turn, params.azimuth.end + turn)
            .with_normal(normal)
            .with_span(span);
        sections.push(Section::Ring(generate_ring(&ring)?));
    }
    let span = texture_span(layers, layers, false, true, params.texture_alignment)?;
    sections.push(Section::Cusp(axis_cusp(params.height, Vec3::Z, span)));

    let mut scratch = Mesh::new();
    let submesh = scratch.create_submesh("helical_cone");
    let patch = body_patch(&mut scratch, submesh, params.distinct)?;
    let linear = params.twist == 0.0;
    let courses = build_courses(&mut scratch, &patch, &sections, Banding::Quads, linear)?;

    let mut seal = SealContext::new(&mut scratch, submesh, &courses, false, &project_to_axis)?;
    seal.seal_cylinder(&mut scratch, &params.azimuth, &params.profile)?;
    finish(mesh, scratch, "helical_cone", n, layers)
}
