//! Half-edge B-rep kernel for procedurally revolved primitives.
//!
//! This crate builds cylinders, cones, spheres, tori and helical cones as
//! index-based half-edge meshes with per-corner attributes. Construction is
//! layered:
//!
//! - [`ring`] generates one ring of corner attributes from symmetric trig tables
//! - [`builders`] stitch rings into courses of quads or triangles
//! - [`seal`] closes seams and poles according to each [`Termination`]
//! - [`primitives`] drive the above and append finished submeshes
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::{primitives::cylinder::{cylinder, CylinderParams}, Mesh};
//!
//! let mut mesh = Mesh::new();
//! let submesh = cylinder(&mut mesh, &CylinderParams::default()).unwrap();
//! assert!(mesh.check().is_ok());
//! assert_eq!(mesh.submesh(submesh).unwrap().name, "cylinder");
//! ```

pub mod builders;
pub mod config;
pub mod core;
pub mod error;
pub mod export;
pub mod extent;
pub mod mesh;
pub mod primitives;
pub mod ring;
pub mod seal;

pub use crate::config::KernelConfig;
pub use crate::core::{Attributes, FaceId, HalfedgeId, SubmeshId, SurfaceId, Vec2, Vec3, VertexId};
pub use builders::{Course, CourseKind, CuspPoint, Patch};
pub use error::{MeshError, MeshResult, TopologyError, TopologyResult};
pub use export::MeshBuffers;
pub use extent::{texture_span, Extent, Termination, TerminationKind, TextureSpan};
pub use mesh::Mesh;
pub use primitives::{build_all, build_all_with, Primitive};
pub use ring::{generate_ring, Ring, RingParams};
pub use seal::SealContext;
