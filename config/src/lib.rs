//! # Config Crate
//!
//! Centralized configuration constants for the lathe-mesh kernel.
//! All tolerances and tessellation defaults are defined here so the
//! geometry crates never scatter literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, DEFAULT_DIVISIONS, MIN_DIVISIONS};
//!
//! let value: f64 = 1e-12;
//! assert!(value.abs() < EPSILON_TOLERANCE);
//!
//! let requested = 2;
//! let divisions = if requested >= MIN_DIVISIONS { requested } else { DEFAULT_DIVISIONS };
//! assert_eq!(divisions, DEFAULT_DIVISIONS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects values that cannot
//!   produce a valid mesh

pub mod constants;
