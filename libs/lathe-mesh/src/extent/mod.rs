//! # Extents and Terminations
//!
//! An [`Extent`] is the parameter interval a primitive sweeps along one
//! direction (azimuth in turns, or a profile fraction) together with the
//! policy for closing each of its two ends.
//!
//! ## Termination Policies
//!
//! - `None`: the end stays open
//! - `Flat`: a planar cap (or chord wall on an azimuth seam)
//! - `Center`: a fan to a caller-mapped center point
//!
//! `banded` splits a cap into one face per course or per ring segment
//! instead of a single polygon.
//!
//! ## Example
//!
//! ```rust
//! use lathe_mesh::extent::{Extent, Termination};
//!
//! let azimuth = Extent::new(0.0, 0.25)
//!     .with_lower(Termination::flat(false))
//!     .with_upper(Termination::flat(false));
//! assert!(azimuth.validate().is_ok());
//! assert!(!azimuth.is_full());
//! ```

use crate::error::{MeshError, MeshResult};
use config::constants::EPSILON_TOLERANCE;
use serde::{Deserialize, Serialize};

// =============================================================================
// TERMINATION
// =============================================================================

/// How an open end of an extent is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminationKind {
    /// Leave the end open.
    #[default]
    None,
    /// Close with a planar cap.
    Flat,
    /// Close with a fan to a mapped center point.
    Center,
}

/// Termination policy for one end of an [`Extent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Termination {
    /// Cap shape.
    pub kind: TerminationKind,
    /// One cap face per course (seams) or per ring segment (poles).
    #[serde(default)]
    pub banded: bool,
}

impl Termination {
    /// An open end.
    pub const fn none() -> Self {
        Self {
            kind: TerminationKind::None,
            banded: false,
        }
    }

    /// A planar cap, optionally split into bands.
    pub const fn flat(banded: bool) -> Self {
        Self {
            kind: TerminationKind::Flat,
            banded,
        }
    }

    /// A fan to the mapped center point.
    pub const fn center() -> Self {
        Self {
            kind: TerminationKind::Center,
            banded: true,
        }
    }

    /// Returns true when this end receives cap geometry.
    pub fn is_capped(&self) -> bool {
        self.kind != TerminationKind::None
    }
}

// =============================================================================
// EXTENT
// =============================================================================

/// Parameter interval with a termination policy and a surface name per end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent<T = f64> {
    /// Start of the interval.
    pub start: T,
    /// End of the interval.
    pub end: T,
    /// Termination at `start`.
    #[serde(default)]
    pub lower: Termination,
    /// Termination at `end`.
    #[serde(default)]
    pub upper: Termination,
    /// Surface names given to the caps at `start` and `end`.
    #[serde(default = "default_names")]
    pub names: [String; 2],
}

fn default_names() -> [String; 2] {
    ["end0".to_string(), "end1".to_string()]
}

impl Extent<f64> {
    /// The full interval `0..1` with open ends.
    pub fn full() -> Self {
        Self::new(0.0, 1.0)
    }

    /// The interval `start..end` with open ends.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start,
            end,
            lower: Termination::none(),
            upper: Termination::none(),
            names: default_names(),
        }
    }

    /// Sets the termination at `start`.
    #[must_use]
    pub fn with_lower(mut self, lower: Termination) -> Self {
        self.lower = lower;
        self
    }

    /// Sets the termination at `end`.
    #[must_use]
    pub fn with_upper(mut self, upper: Termination) -> Self {
        self.upper = upper;
        self
    }

    /// Sets both terminations.
    #[must_use]
    pub fn with_ends(self, termination: Termination) -> Self {
        self.with_lower(termination).with_upper(termination)
    }

    /// Sets the cap surface names.
    #[must_use]
    pub fn with_names(mut self, lower: impl Into<String>, upper: impl Into<String>) -> Self {
        self.names = [lower.into(), upper.into()];
        self
    }

    /// Checks that the interval is finite, increasing and at most one turn.
    pub fn validate(&self) -> MeshResult<()> {
        if !self.start.is_finite() || !self.end.is_finite() {
            return Err(MeshError::invalid(format!(
                "extent bounds must be finite: {}..{}",
                self.start, self.end
            )));
        }
        if self.start >= self.end {
            return Err(MeshError::invalid(format!(
                "extent start must be below end: {}..{}",
                self.start, self.end
            )));
        }
        if self.span() > 1.0 + EPSILON_TOLERANCE {
            return Err(MeshError::invalid(format!(
                "extent spans more than one turn: {}",
                self.span()
            )));
        }
        Ok(())
    }

    /// Length of the interval.
    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    /// Returns true when the interval covers a whole turn.
    pub fn is_full(&self) -> bool {
        (self.span() - 1.0).abs() <= EPSILON_TOLERANCE
    }

    /// Parameter at fraction `t` of the interval.
    pub fn lerp(&self, t: f64) -> f64 {
        self.start + self.span() * t
    }

    /// Termination at end `i` (0 = start, 1 = end).
    pub fn termination(&self, i: usize) -> Termination {
        if i == 0 {
            self.lower
        } else {
            self.upper
        }
    }

    /// Cap surface name at end `i` (0 = start, 1 = end).
    pub fn name(&self, i: usize) -> &str {
        &self.names[i.min(1)]
    }
}

impl Default for Extent<f64> {
    fn default() -> Self {
        Self::full()
    }
}

// =============================================================================
// TEXTURE SPANS
// =============================================================================

/// Horizontal texture span and vertical coordinate of one ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TextureSpan {
    /// Texture `u` at the first corner.
    pub u0: f64,
    /// Texture `u` at the last corner.
    pub u1: f64,
    /// Texture `v` of every corner in the ring.
    pub v: f64,
}

impl TextureSpan {
    /// Width of the span.
    pub fn width(&self) -> f64 {
        self.u1 - self.u0
    }

    /// Texture `u` at fraction `t` across the span.
    pub fn lerp(&self, t: f64) -> f64 {
        self.u0 + self.width() * t
    }
}

/// Texture span of ring `i` of `n` along a profile.
///
/// A cusp at either end narrows the span linearly to zero width there so
/// texels are not stretched around a pole. `alignment` positions the
/// narrowed span inside the full width (`0` left, `0.5` centered, `1`
/// right). `v` runs from 1 at the first ring to 0 at the last.
///
/// # Examples
/// ```
/// use lathe_mesh::extent::texture_span;
/// let span = texture_span(2, 4, false, false, 0.5).unwrap();
/// assert_eq!((span.u0, span.u1, span.v), (0.0, 1.0, 0.5));
///
/// let tip = texture_span(0, 4, true, false, 0.5).unwrap();
/// assert_eq!(tip.u0, tip.u1);
/// ```
pub fn texture_span(
    i: usize,
    n: usize,
    cusp_lower: bool,
    cusp_upper: bool,
    alignment: f64,
) -> MeshResult<TextureSpan> {
    if n == 0 {
        return Err(MeshError::invalid("texture span needs at least one step"));
    }
    if i > n {
        return Err(MeshError::invalid(format!(
            "texture span index {i} exceeds step count {n}"
        )));
    }
    if !(0.0..=1.0).contains(&alignment) {
        return Err(MeshError::invalid(format!(
            "texture alignment must lie in 0..=1: {alignment}"
        )));
    }

    let t = i as f64 / n as f64;
    let width = match (cusp_lower, cusp_upper) {
        (false, false) => 1.0,
        (true, false) => t,
        (false, true) => 1.0 - t,
        (true, true) => 1.0 - (2.0 * t - 1.0).abs(),
    };
    let u0 = alignment * (1.0 - width);
    Ok(TextureSpan {
        u0,
        u1: u0 + width,
        v: 1.0 - t,
    })
}

#[cfg(test)]
mod tests;
