//! # Primitives
//!
//! Drivers that build one complete revolved solid as a new submesh.
//!
//! ## Pipeline
//!
//! Every driver follows the same steps inside a scratch mesh, so a failure
//! never leaves partial geometry in the caller's mesh:
//!
//! 1. Interpolate one [`Section`] (ring or cusp point) per layer boundary
//! 2. Build the first course with a `create_*` builder and the rest with
//!    `connect_*`
//! 3. Seal seams and poles through a [`SealContext`]
//! 4. Triangulate, recompute normals, `check()` and `append`
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::primitives::{build_all, Primitive};
//! use lathe_mesh::primitives::sphere::SphereParams;
//! use lathe_mesh::primitives::torus::TorusParams;
//!
//! let mesh = build_all(&[
//!     Primitive::Sphere(SphereParams::default()),
//!     Primitive::Torus(TorusParams::default()),
//! ])
//! .unwrap();
//! assert_eq!(mesh.submesh_count(), 2);
//! assert!(mesh.is_closed());
//! ```
//!
//! [`SealContext`]: crate::seal::SealContext

pub mod cylinder;
pub mod helical_cone;
pub mod sphere;
pub mod torus;

pub use cylinder::{cylinder, CylinderParams};
pub use helical_cone::{helical_cone, HelicalConeParams};
pub use sphere::{sphere, SphereParams};
pub use torus::{torus, TorusParams};

use crate::builders::{
    connect_antiband, connect_apex_cusp, connect_band, create_antiband, create_apex_cusp,
    create_band, create_base_cusp, Course, CuspPoint, Patch,
};
use crate::config::KernelConfig;
use crate::core::{SubmeshId, Vec3};
use crate::error::{MeshError, MeshResult};
use crate::extent::{Extent, TextureSpan};
use crate::mesh::Mesh;
use crate::ring::Ring;
use config::constants::{EPSILON_TOLERANCE, MIN_DIVISIONS};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

// =============================================================================
// BATCH BUILDS
// =============================================================================

/// Face layout of the lateral courses of a primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Banding {
    /// One quad per segment.
    #[default]
    Quads,
    /// Two triangles per segment, each ring half a segment ahead of the
    /// one below. Full turns only.
    Staggered,
}

/// Description of one primitive, loadable from configuration data.
///
/// # Examples
/// ```
/// use lathe_mesh::primitives::Primitive;
/// let primitive: Primitive =
///     serde_json::from_str(r#"{ "kind": "sphere", "radius": 2.0 }"#).unwrap();
/// assert_eq!(primitive.name(), "sphere");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Cylinder, frustum or cone.
    Cylinder(CylinderParams),
    /// Sphere or spherical zone.
    Sphere(SphereParams),
    /// Torus or torus section.
    Torus(TorusParams),
    /// Cone whose rings twist as they rise.
    HelicalCone(HelicalConeParams),
}

impl Primitive {
    /// Name given to the primitive's submesh.
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Cylinder(_) => "cylinder",
            Primitive::Sphere(_) => "sphere",
            Primitive::Torus(_) => "torus",
            Primitive::HelicalCone(_) => "helical_cone",
        }
    }

    /// Builds the primitive into `mesh`.
    pub fn build(&self, mesh: &mut Mesh) -> MeshResult<SubmeshId> {
        match self {
            Primitive::Cylinder(params) => cylinder(mesh, params),
            Primitive::Sphere(params) => sphere(mesh, params),
            Primitive::Torus(params) => torus(mesh, params),
            Primitive::HelicalCone(params) => helical_cone(mesh, params),
        }
    }
}

/// Builds every primitive on the rayon pool and merges them in input order.
///
/// Each primitive gets its own mesh; only the final merge touches the
/// combined mesh, sequentially.
pub fn build_all(primitives: &[Primitive]) -> MeshResult<Mesh> {
    build_all_with(primitives, &KernelConfig::default())
}

/// Like [`build_all`], then re-validates the merged mesh with the
/// tolerance of `config`.
pub fn build_all_with(primitives: &[Primitive], config: &KernelConfig) -> MeshResult<Mesh> {
    let parts = primitives
        .par_iter()
        .map(|primitive| {
            let mut part = Mesh::new();
            primitive.build(&mut part)?;
            Ok(part)
        })
        .collect::<MeshResult<Vec<Mesh>>>()?;

    let mut mesh = Mesh::new();
    for part in &parts {
        mesh.append(part);
    }
    mesh.check_with_tolerance(config.tolerance)?;
    info!(
        primitives = parts.len(),
        faces = mesh.face_count(),
        "primitives merged"
    );
    Ok(mesh)
}

// =============================================================================
// SHARED DRIVER STEPS
// =============================================================================

/// One layer boundary of a profile: a full ring or a cusp point.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Section {
    Ring(Ring),
    Cusp(CuspPoint),
}

/// Builds one course between each pair of consecutive sections.
///
/// Cusps are only allowed at either end of the profile. `linear` lets band
/// courses reuse the face normal below.
pub(crate) fn build_courses(
    mesh: &mut Mesh,
    patch: &Patch,
    sections: &[Section],
    banding: Banding,
    linear: bool,
) -> MeshResult<Vec<Course>> {
    if sections.len() < 2 {
        return Err(MeshError::invalid("a profile needs at least two sections"));
    }
    let mut courses: Vec<Course> = Vec::with_capacity(sections.len() - 1);
    for pair in sections.windows(2) {
        let prev = courses.last().copied();
        let course = match (prev, &pair[0], &pair[1]) {
            (_, Section::Cusp(_), Section::Cusp(_)) => {
                return Err(MeshError::invalid("a course cannot join two cusps"))
            }
            (None, Section::Cusp(base), Section::Ring(upper)) => {
                create_base_cusp(mesh, patch, base, upper)?
            }
            (None, Section::Ring(lower), Section::Cusp(apex)) => {
                create_apex_cusp(mesh, patch, lower, apex)?
            }
            (None, Section::Ring(lower), Section::Ring(upper)) => match banding {
                Banding::Quads => create_band(mesh, patch, lower, upper)?,
                Banding::Staggered => create_antiband(mesh, patch, lower, upper)?,
            },
            (Some(_), Section::Cusp(_), _) => {
                return Err(MeshError::invalid("a cusp must end the profile"))
            }
            (Some(prev), Section::Ring(_), Section::Cusp(apex)) => {
                connect_apex_cusp(mesh, patch, &prev, apex)?
            }
            (Some(prev), Section::Ring(_), Section::Ring(upper)) => match banding {
                Banding::Quads => connect_band(mesh, patch, &prev, upper, linear)?,
                Banding::Staggered => connect_antiband(mesh, patch, &prev, upper)?,
            },
        };
        courses.push(course);
    }
    Ok(courses)
}

/// Patch for the lateral surface of a primitive.
pub(crate) fn body_patch(mesh: &mut Mesh, submesh: SubmeshId, distinct: bool) -> MeshResult<Patch> {
    if distinct {
        Ok(Patch::distinct(submesh, "body"))
    } else {
        Ok(Patch::smooth(mesh, submesh, "body")?)
    }
}

/// Triangulates, renormalizes and checks `scratch`, then appends it to
/// `target`.
pub(crate) fn finish(
    target: &mut Mesh,
    mut scratch: Mesh,
    kind: &str,
    divisions: usize,
    layers: usize,
) -> MeshResult<SubmeshId> {
    scratch.triangulate()?;
    scratch.recompute_normals()?;
    scratch.check()?;
    let submesh = target
        .append(&scratch)
        .into_iter()
        .next()
        .ok_or_else(|| MeshError::invalid(format!("{kind} produced no submesh")))?;
    debug!(
        primitive = kind,
        divisions,
        layers,
        faces = scratch.face_count(),
        halfedges = scratch.halfedge_count(),
        "primitive built"
    );
    Ok(submesh)
}

// =============================================================================
// PARAMETER CHECKS
// =============================================================================

pub(crate) fn check_divisions(divisions: usize) -> MeshResult<()> {
    if divisions < MIN_DIVISIONS {
        return Err(MeshError::invalid(format!(
            "divisions must be >= {MIN_DIVISIONS}, got {divisions}"
        )));
    }
    Ok(())
}

pub(crate) fn check_layers(layers: usize) -> MeshResult<()> {
    if layers == 0 {
        return Err(MeshError::invalid("layers must be at least 1"));
    }
    Ok(())
}

pub(crate) fn check_positive(what: &str, value: f64) -> MeshResult<()> {
    if !(value.is_finite() && value > 0.0) {
        return Err(MeshError::invalid(format!(
            "{what} must be positive, got {value}"
        )));
    }
    Ok(())
}

pub(crate) fn check_alignment(alignment: f64) -> MeshResult<()> {
    if !(0.0..=1.0).contains(&alignment) {
        return Err(MeshError::invalid(format!(
            "texture alignment must lie in 0..=1, got {alignment}"
        )));
    }
    Ok(())
}

/// Checks a profile extent given as a fraction of the primitive's profile.
pub(crate) fn check_profile(profile: &Extent) -> MeshResult<()> {
    profile.validate()?;
    if profile.start < -EPSILON_TOLERANCE || profile.end > 1.0 + EPSILON_TOLERANCE {
        return Err(MeshError::invalid(format!(
            "profile must lie within 0..1, got {}..{}",
            profile.start, profile.end
        )));
    }
    Ok(())
}

/// Returns true when `value` is within tolerance of `target`.
pub(crate) fn near(value: f64, target: f64) -> bool {
    (value - target).abs() <= EPSILON_TOLERANCE
}

/// Cusp on the axis at height `z`.
pub(crate) fn axis_cusp(z: f64, normal: Vec3, span: TextureSpan) -> CuspPoint {
    CuspPoint {
        position: Vec3::new(0.0, 0.0, z),
        normal,
        span,
    }
}
