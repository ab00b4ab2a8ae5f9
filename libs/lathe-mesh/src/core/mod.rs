//! Core value types for the kernel.
//!
//! Includes vector aliases (`Vec3`, `Vec2`), the per-corner attribute bundle
//! and the typed arena ids shared by every other module.

pub mod attributes;
pub mod ids;
pub mod vec3;

pub use attributes::Attributes;
pub use ids::{FaceId, HalfedgeId, SubmeshId, SurfaceId, VertexId};
pub use vec3::{Vec2, Vec3};
