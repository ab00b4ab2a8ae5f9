//! Symbolic corner keys and the weld step that partners cap edges.

use crate::core::HalfedgeId;
use crate::error::{MeshResult, TopologyError};
use crate::mesh::Mesh;
use std::collections::HashMap;

/// Symbolic name of a cap corner.
///
/// Keys are normalized before use: the last ring of a closed profile is
/// ring 0, every corner of a pole ring is the pole, and on a full turn
/// corner `n` is corner 0. Two cap edges meet exactly when their keys
/// match in reverse, so welding never compares positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Corner `corner` of ring `ring`.
    Ring {
        /// Ring index along the profile.
        ring: usize,
        /// Corner index around the ring.
        corner: usize,
    },
    /// The single point of a cusp ring.
    Pole(usize),
    /// A registered center point.
    Center(usize),
}

impl Key {
    /// Returns true for pole and center keys, the natural apex of a fan.
    pub fn is_hub(&self) -> bool {
        matches!(self, Key::Pole(_) | Key::Center(_))
    }
}

/// Pairs directed edges whose keys appear in both directions.
#[derive(Debug, Default)]
pub struct Stitcher {
    pending: HashMap<(Key, Key), HalfedgeId>,
}

impl Stitcher {
    /// Creates an empty stitcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `halfedge` running `from -> to`.
    ///
    /// Partners it immediately when `to -> from` is waiting. Registering
    /// the same directed pair twice is a non-manifold edge.
    pub fn register(
        &mut self,
        mesh: &mut Mesh,
        from: Key,
        to: Key,
        halfedge: HalfedgeId,
    ) -> MeshResult<()> {
        if let Some(opposite) = self.pending.remove(&(to, from)) {
            mesh.set_partners(halfedge, opposite)?;
            return Ok(());
        }
        if self.pending.contains_key(&(from, to)) {
            return Err(TopologyError::NonManifoldEdge(halfedge).into());
        }
        self.pending.insert((from, to), halfedge);
        Ok(())
    }

    /// Number of registered edges still waiting for a partner.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
