//! Face and surface normal recomputation.

use super::Mesh;
use crate::core::vec3::newell_normal;
use crate::core::{FaceId, Vec3};
use crate::error::TopologyResult;

impl Mesh {
    /// Recomputes face normals from corner positions and surface normals
    /// from the area-weighted sum of their faces.
    ///
    /// Corner normals are left untouched. Degenerate faces get a zero
    /// normal.
    pub fn recompute_normals(&mut self) -> TopologyResult<()> {
        let mut weighted = Vec::with_capacity(self.faces.len());
        for i in 0..self.faces.len() {
            let positions = self.face_positions(FaceId::from_index(i))?;
            weighted.push(newell_normal(&positions));
        }
        for (face, normal) in self.faces.iter_mut().zip(&weighted) {
            face.normal = normal.normalize_or_zero();
        }
        for surface in &mut self.surfaces {
            let sum: Vec3 = surface.faces.iter().map(|f| weighted[f.index()]).sum();
            surface.normal = sum.normalize_or_zero();
        }
        Ok(())
    }
}
