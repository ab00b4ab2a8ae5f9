//! Centralized configuration values shared across the lathe-mesh workspace.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance used by the geometry kernel.
///
/// Scaled by the magnitude of the compared positions when checking that
/// partnered halfedges meet.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// TESSELLATION CONSTANTS
// =============================================================================

/// Smallest azimuthal division count that still encloses an area.
///
/// # Examples
/// ```
/// use config::constants::MIN_DIVISIONS;
/// assert_eq!(MIN_DIVISIONS, 3);
/// ```
pub const MIN_DIVISIONS: usize = 3;

/// Default azimuthal division count for revolved primitives.
///
/// A multiple of eight so the ring generator can use its octant symmetry.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_DIVISIONS;
/// assert_eq!(DEFAULT_DIVISIONS % 8, 0);
/// ```
pub const DEFAULT_DIVISIONS: usize = 32;

/// Default number of courses (ring-to-ring layers) stacked along a profile.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_LAYERS;
/// assert!(DEFAULT_LAYERS >= 1);
/// ```
pub const DEFAULT_LAYERS: usize = 1;

/// Horizontal alignment of a texture span that is narrower than the full
/// texture width. `0.5` centers the span.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_TEXTURE_ALIGNMENT;
/// assert!((0.0..=1.0).contains(&DEFAULT_TEXTURE_ALIGNMENT));
/// ```
pub const DEFAULT_TEXTURE_ALIGNMENT: f64 = 0.5;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// Numeric tolerance propagated into the geometry kernel.
    pub tolerance: f64,
    /// Default azimuthal division count for revolved primitives.
    pub default_divisions: usize,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and default divisions.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 24).expect("valid config");
    /// assert_eq!(cfg.default_divisions, 24);
    /// ```
    pub fn new(tolerance: f64, default_divisions: usize) -> Result<Self, ConfigError> {
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if default_divisions < MIN_DIVISIONS {
            return Err(ConfigError::InvalidDivisions(default_divisions));
        }
        Ok(Self {
            tolerance,
            default_divisions,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_divisions: DEFAULT_DIVISIONS,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the requested division count is too small to form a polygon.
    InvalidDivisions(usize),
    /// Raised when a texture alignment lies outside `0.0..=1.0`.
    InvalidAlignment(f64),
    /// Raised when a layer count is zero.
    InvalidLayers(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive: {value}")
            }
            ConfigError::InvalidDivisions(value) => {
                write!(f, "default_divisions must be >= {MIN_DIVISIONS}: {value}")
            }
            ConfigError::InvalidAlignment(value) => {
                write!(f, "texture alignment must lie in 0..=1: {value}")
            }
            ConfigError::InvalidLayers(value) => {
                write!(f, "layer count must be >= 1: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
