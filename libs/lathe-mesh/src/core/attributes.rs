//! Per-corner attribute bundle.

use super::vec3::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Attributes carried by one face corner.
///
/// The same spatial position appears in several bundles when adjacent faces
/// need different normals or texture coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Attributes {
    /// Position in model space.
    pub position: Vec3,
    /// Unit shading normal.
    pub normal: Vec3,
    /// Texture coordinate (`u` around the axis, `v` along the profile).
    pub texcoord: Vec2,
}

impl Attributes {
    /// Creates an attribute bundle.
    pub fn new(position: Vec3, normal: Vec3, texcoord: Vec2) -> Self {
        Self {
            position,
            normal,
            texcoord,
        }
    }

    /// Copy of this bundle carrying a different normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = normal;
        self
    }

    /// Copy of this bundle carrying a different texture coordinate.
    #[must_use]
    pub fn with_texcoord(mut self, texcoord: Vec2) -> Self {
        self.texcoord = texcoord;
        self
    }
}
