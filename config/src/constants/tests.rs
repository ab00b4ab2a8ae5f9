//! Tests for the centralized configuration constants.

use super::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn tolerance_is_small_and_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
    assert!(EPSILON_TOLERANCE < 1e-6, "EPSILON_TOLERANCE should be small");
}

// =============================================================================
// TESSELLATION TESTS
// =============================================================================

#[test]
fn default_divisions_allow_octant_symmetry() {
    assert!(DEFAULT_DIVISIONS >= MIN_DIVISIONS);
    assert_eq!(DEFAULT_DIVISIONS % 8, 0);
}

#[test]
fn default_alignment_centers_span() {
    assert_eq!(DEFAULT_TEXTURE_ALIGNMENT, 0.5);
}

// =============================================================================
// GLOBAL CONFIG TESTS
// =============================================================================

/// Ensures default constants are sane and positive.
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.default_divisions >= MIN_DIVISIONS);
}

/// Validates the builder rejects invalid values.
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 24).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 2).unwrap_err(),
        ConfigError::InvalidDivisions(2)
    );
    assert!(GlobalConfig::new(f64::NAN, 24).is_err());
}

#[test]
fn error_messages_name_the_value() {
    let err = ConfigError::InvalidDivisions(2);
    assert_eq!(err.to_string(), "default_divisions must be >= 3: 2");
    let err = ConfigError::InvalidAlignment(1.5);
    assert!(err.to_string().contains("1.5"));
}
