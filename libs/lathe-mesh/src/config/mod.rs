//! Kernel-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so builders and drivers can
//! stay decoupled from literal constants.

use config::constants::{
    ConfigError, GlobalConfig, DEFAULT_DIVISIONS, DEFAULT_LAYERS, DEFAULT_TEXTURE_ALIGNMENT,
    EPSILON_TOLERANCE,
};
use serde::{Deserialize, Serialize};

/// Geometry kernel configuration wrapper.
///
/// # Examples
/// ```
/// use lathe_mesh::config::KernelConfig;
/// let cfg = KernelConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KernelConfig {
    /// Tolerance used when checking that partnered halfedges meet.
    pub tolerance: f64,
    /// Default azimuthal division count for revolved primitives.
    pub default_divisions: usize,
    /// Default number of courses along a profile.
    pub default_layers: usize,
    /// Horizontal alignment of narrowed texture spans (`0.5` centers them).
    pub texture_alignment: f64,
}

impl KernelConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use lathe_mesh::config::KernelConfig;
    /// let cfg = KernelConfig::new(1.0e-8, 48, 2, 0.0).unwrap();
    /// assert_eq!(cfg.default_divisions, 48);
    /// ```
    pub fn new(
        tolerance: f64,
        default_divisions: usize,
        default_layers: usize,
        texture_alignment: f64,
    ) -> Result<Self, KernelConfigError> {
        let global = GlobalConfig::new(tolerance, default_divisions).map_err(KernelConfigError)?;
        if default_layers == 0 {
            return Err(KernelConfigError(ConfigError::InvalidLayers(default_layers)));
        }
        if !(0.0..=1.0).contains(&texture_alignment) {
            return Err(KernelConfigError(ConfigError::InvalidAlignment(
                texture_alignment,
            )));
        }
        Ok(Self {
            tolerance: global.tolerance,
            default_divisions: global.default_divisions,
            default_layers,
            texture_alignment,
        })
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            default_divisions: DEFAULT_DIVISIONS,
            default_layers: DEFAULT_LAYERS,
            texture_alignment: DEFAULT_TEXTURE_ALIGNMENT,
        }
    }
}

/// Error wrapper for invalid kernel configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct KernelConfigError(pub ConfigError);

impl std::fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for KernelConfigError {}
