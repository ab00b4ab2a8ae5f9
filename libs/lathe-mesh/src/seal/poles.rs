//! Polar caps and the per-primitive seal drivers.
//!
//! The lower cap closes ring 0 and the upper cap closes the last ring.
//! Caps are skipped at cusp poles and on a closed profile, where there is
//! no open ring to close. On a partial sweep the cap outline follows the
//! seam: a flat seam leaves a chord edge between the first and last ring
//! corner, any other seam leaves the sector edges out to the mapped center.

use super::{CapShape, Key, SealContext};
use crate::core::SurfaceId;
use crate::error::{MeshError, MeshResult};
use crate::extent::{Extent, Termination, TerminationKind};
use crate::mesh::Mesh;

/// Which end of the profile a polar cap closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pole {
    Lower,
    Upper,
}

impl SealContext<'_> {
    /// Closes the seams and both profile ends of a cylinder or cone.
    pub fn seal_cylinder(&mut self, mesh: &mut Mesh, azimuth: &Extent, profile: &Extent) -> MeshResult<()> {
        self.seal_seams(mesh, azimuth)?;
        self.seal_poles(mesh, azimuth, profile)
    }

    /// Closes the seams and both profile ends of a sphere.
    ///
    /// Center terminations are not supported on a profile end that stops
    /// short of a pole. An end reaching a pole is a cusp and needs no cap,
    /// so its termination is ignored.
    pub fn seal_sphere(&mut self, mesh: &mut Mesh, azimuth: &Extent, profile: &Extent) -> MeshResult<()> {
        let ends = [(profile.lower, 0), (profile.upper, self.frame.courses())];
        if ends
            .iter()
            .any(|(t, k)| t.kind == TerminationKind::Center && !self.frame.poles[*k])
        {
            return Err(MeshError::unsupported(
                "center terminations are not supported on sphere profile ends",
            ));
        }
        self.seal_seams(mesh, azimuth)?;
        self.seal_poles(mesh, azimuth, profile)
    }

    /// Closes the seams and both profile ends of a torus.
    ///
    /// A flat termination joins the two tube ends with a single annulus
    /// surface, so it needs both ends flat. A center termination fans
    /// each end to the major circle.
    pub fn seal_torus(&mut self, mesh: &mut Mesh, azimuth: &Extent, profile: &Extent) -> MeshResult<()> {
        if self.frame.profile_closed {
            return self.seal_seams(mesh, azimuth);
        }
        let flat = [profile.lower, profile.upper].map(|t| t.kind == TerminationKind::Flat);
        match flat {
            [true, true] => {
                let seam = azimuth.termination(0).kind;
                if !self.frame.full_turn && seam != TerminationKind::None {
                    return Err(MeshError::unsupported(
                        "a flat torus end needs a full turn or open seams",
                    ));
                }
                self.seal_seams(mesh, azimuth)?;
                self.close_annulus(mesh, profile.name(0))?;
                Ok(())
            }
            [true, false] | [false, true] => Err(MeshError::unsupported(
                "a flat torus end needs both ends flat",
            )),
            [false, false] => {
                self.seal_seams(mesh, azimuth)?;
                self.seal_poles(mesh, azimuth, profile)
            }
        }
    }

    fn seal_poles(&mut self, mesh: &mut Mesh, azimuth: &Extent, profile: &Extent) -> MeshResult<()> {
        if self.frame.profile_closed {
            return Ok(());
        }
        let chord = !self.frame.full_turn && azimuth.termination(0).kind == TerminationKind::Flat;
        for (pole, termination, name) in [
            (Pole::Lower, profile.lower, profile.name(0)),
            (Pole::Upper, profile.upper, profile.name(1)),
        ] {
            self.seal_pole(mesh, pole, termination, chord, name)?;
        }
        Ok(())
    }

    fn seal_pole(
        &mut self,
        mesh: &mut Mesh,
        pole: Pole,
        termination: Termination,
        chord: bool,
        name: &str,
    ) -> MeshResult<Option<SurfaceId>> {
        let ring = match pole {
            Pole::Lower => 0,
            Pole::Upper => self.frame.courses(),
        };
        if !termination.is_capped() || self.frame.poles[ring] {
            return Ok(None);
        }
        let (polygons, shape) = match (termination.kind, termination.banded, chord) {
            (TerminationKind::Center, _, true) => {
                return Err(MeshError::unsupported(
                    "a center pole cannot meet a flat seam",
                ))
            }
            (TerminationKind::Center, _, false) => (self.pole_fan(pole, ring), CapShape::Center),
            (_, true, true) => (self.pole_chord_fan(pole, ring), CapShape::Flat),
            (_, true, false) => (self.pole_fan(pole, ring), CapShape::Flat),
            (_, false, _) => (vec![self.pole_polygon(pole, ring, chord)], CapShape::Flat),
        };
        self.emit_cap(mesh, name, polygons, shape)
    }

    /// The whole ring as one polygon, with the sector corners on a
    /// partial sweep without a chord.
    fn pole_polygon(&mut self, pole: Pole, k: usize, chord: bool) -> Vec<Key> {
        let n = self.frame.divisions;
        match (pole, self.frame.full_turn, chord) {
            (Pole::Lower, true, _) => (1..=n).rev().map(|j| self.frame.key(k, j)).collect(),
            (Pole::Upper, true, _) => (0..n).map(|j| self.frame.key(k, j)).collect(),
            (Pole::Lower, false, true) => (0..=n).rev().map(|j| self.frame.key(k, j)).collect(),
            (Pole::Upper, false, true) => (0..=n).map(|j| self.frame.key(k, j)).collect(),
            (Pole::Lower, false, false) => {
                let mut keys = vec![self.center_key(k, n)];
                keys.extend((0..=n).rev().map(|j| self.frame.key(k, j)));
                keys.push(self.center_key(k, 0));
                keys
            }
            (Pole::Upper, false, false) => {
                let mut keys = vec![self.center_key(k, 0)];
                keys.extend((0..=n).map(|j| self.frame.key(k, j)));
                keys.push(self.center_key(k, n));
                keys
            }
        }
    }

    /// One face per segment reaching in to the mapped centers.
    fn pole_fan(&mut self, pole: Pole, k: usize) -> Vec<Vec<Key>> {
        let n = self.frame.divisions;
        let mut polygons = Vec::with_capacity(n);
        for j in 0..n {
            let polygon = match pole {
                Pole::Lower => vec![
                    self.frame.key(k, j + 1),
                    self.frame.key(k, j),
                    self.center_key(k, j),
                    self.center_key(k, j + 1),
                ],
                Pole::Upper => vec![
                    self.frame.key(k, j),
                    self.frame.key(k, j + 1),
                    self.center_key(k, j + 1),
                    self.center_key(k, j),
                ],
            };
            polygons.push(polygon);
        }
        polygons
    }

    /// Triangles fanning from the first ring corner, bounded by the chord.
    fn pole_chord_fan(&self, pole: Pole, k: usize) -> Vec<Vec<Key>> {
        let n = self.frame.divisions;
        let hub = self.frame.key(k, 0);
        (1..n)
            .map(|j| match pole {
                Pole::Lower => vec![hub, self.frame.key(k, j + 1), self.frame.key(k, j)],
                Pole::Upper => vec![hub, self.frame.key(k, j), self.frame.key(k, j + 1)],
            })
            .collect()
    }

    /// Joins the first and last ring with one face per segment.
    fn close_annulus(&mut self, mesh: &mut Mesh, name: &str) -> MeshResult<Option<SurfaceId>> {
        let n = self.frame.divisions;
        let top = self.frame.courses();
        let polygons = (0..n)
            .map(|j| {
                vec![
                    self.frame.key(0, j + 1),
                    self.frame.key(0, j),
                    self.frame.key(top, j),
                    self.frame.key(top, j + 1),
                ]
            })
            .collect();
        self.emit_cap(mesh, name, polygons, CapShape::Center)
    }
}
