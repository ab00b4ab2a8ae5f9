//! Seam caps: the walls closing the two azimuth sides of a partial sweep.

use super::{CapShape, Key, SealContext};
use crate::core::SurfaceId;
use crate::error::{MeshError, MeshResult};
use crate::extent::{Extent, TerminationKind};
use crate::mesh::Mesh;

/// One of the two azimuth seams of a partial sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The seam at the start azimuth (corner 0 of every ring).
    Start,
    /// The seam at the end azimuth (corner `n` of every ring).
    End,
}

impl Side {
    /// Index of this side in an [`Extent`] (0 = start, 1 = end).
    pub fn index(self) -> usize {
        match self {
            Side::Start => 0,
            Side::End => 1,
        }
    }
}

impl SealContext<'_> {
    fn check_seam(&self) -> MeshResult<()> {
        if self.frame.full_turn {
            return Err(MeshError::invalid("a full turn has no seam to close"));
        }
        Ok(())
    }

    /// Joins the two seams with one flat chord face per course.
    pub fn connect_side_flat(&mut self, mesh: &mut Mesh, name: &str) -> MeshResult<Option<SurfaceId>> {
        self.check_seam()?;
        let n = self.frame.divisions;
        let polygons = (0..self.frame.courses())
            .map(|k| {
                vec![
                    self.frame.key(k, 0),
                    self.frame.key(k + 1, 0),
                    self.frame.key(k + 1, n),
                    self.frame.key(k, n),
                ]
            })
            .collect();
        self.emit_cap(mesh, name, polygons, CapShape::Flat)
    }

    /// Joins the two seams with a single flat polygon.
    pub fn close_side_flat(&mut self, mesh: &mut Mesh, name: &str) -> MeshResult<Option<SurfaceId>> {
        self.check_seam()?;
        if self.frame.profile_closed {
            return Err(MeshError::unsupported(
                "a single flat seam polygon cannot close a closed profile",
            ));
        }
        let n = self.frame.divisions;
        let top = self.frame.courses();
        let polygon = (0..=top)
            .map(|k| self.frame.key(k, 0))
            .chain((0..=top).rev().map(|k| self.frame.key(k, n)))
            .collect();
        self.emit_cap(mesh, name, vec![polygon], CapShape::Flat)
    }

    /// Closes one seam with one face per course fanning to the mapped
    /// centers.
    pub fn connect_side_center(
        &mut self,
        mesh: &mut Mesh,
        side: Side,
        name: &str,
    ) -> MeshResult<Option<SurfaceId>> {
        self.check_seam()?;
        let n = self.frame.divisions;
        let mut polygons = Vec::with_capacity(self.frame.courses());
        for k in 0..self.frame.courses() {
            let polygon = match side {
                Side::Start => vec![
                    self.frame.key(k, 0),
                    self.frame.key(k + 1, 0),
                    self.center_key(k + 1, 0),
                    self.center_key(k, 0),
                ],
                Side::End => vec![
                    self.frame.key(k + 1, n),
                    self.frame.key(k, n),
                    self.center_key(k, n),
                    self.center_key(k + 1, n),
                ],
            };
            polygons.push(polygon);
        }
        self.emit_cap(mesh, name, polygons, CapShape::Center)
    }

    /// Closes one seam with a single polygon through the seam corners and
    /// their mapped centers.
    ///
    /// On a closed profile the seam corners alone bound the cap.
    pub fn close_side_center(
        &mut self,
        mesh: &mut Mesh,
        side: Side,
        name: &str,
    ) -> MeshResult<Option<SurfaceId>> {
        self.check_seam()?;
        let n = self.frame.divisions;
        let top = self.frame.courses();
        let polygon: Vec<Key> = match (side, self.frame.profile_closed) {
            (Side::Start, true) => (0..top).map(|k| self.frame.key(k, 0)).collect(),
            (Side::End, true) => (0..top).rev().map(|k| self.frame.key(k, n)).collect(),
            (Side::Start, false) => {
                let mut keys: Vec<Key> = (0..=top).map(|k| self.frame.key(k, 0)).collect();
                for k in (0..=top).rev() {
                    keys.push(self.center_key(k, 0));
                }
                keys
            }
            (Side::End, false) => {
                let mut keys: Vec<Key> = (0..=top).map(|k| self.center_key(k, n)).collect();
                keys.extend((0..=top).rev().map(|k| self.frame.key(k, n)));
                keys
            }
        };
        self.emit_cap(mesh, name, vec![polygon], CapShape::Center)
    }

    /// Closes both seams of a partial sweep according to `azimuth`.
    ///
    /// Flat needs both sides flat and produces chord walls named after the
    /// start side. Center and None sides are handled independently. A full
    /// turn has nothing to close.
    pub fn seal_seams(&mut self, mesh: &mut Mesh, azimuth: &Extent) -> MeshResult<()> {
        if self.frame.full_turn {
            return Ok(());
        }
        let start = azimuth.termination(0);
        let end = azimuth.termination(1);
        match (start.kind, end.kind) {
            (TerminationKind::Flat, TerminationKind::Flat) => {
                if start.banded {
                    self.connect_side_flat(mesh, azimuth.name(0))?;
                } else {
                    self.close_side_flat(mesh, azimuth.name(0))?;
                }
                Ok(())
            }
            (TerminationKind::Flat, _) | (_, TerminationKind::Flat) => Err(MeshError::unsupported(
                "a flat seam needs both sides flat",
            )),
            _ => {
                for side in [Side::Start, Side::End] {
                    let termination = azimuth.termination(side.index());
                    if termination.kind != TerminationKind::Center {
                        continue;
                    }
                    let name = azimuth.name(side.index());
                    if termination.banded {
                        self.connect_side_center(mesh, side, name)?;
                    } else {
                        self.close_side_center(mesh, side, name)?;
                    }
                }
                Ok(())
            }
        }
    }
}
