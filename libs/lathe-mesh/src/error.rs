//! # Error Types
//!
//! Error types for mesh construction. All errors are explicit and provide
//! clear debugging information.
//!
//! ## Error Policy
//!
//! - Preconditions are checked in every build profile, never only in debug
//! - NO fallback geometry when a parameter is invalid
//! - A driver builds into a scratch mesh and only appends on success

use crate::core::{FaceId, HalfedgeId, SubmeshId, SurfaceId, VertexId};
use crate::config::KernelConfigError;
use thiserror::Error;

// =============================================================================
// TOPOLOGY ERRORS
// =============================================================================

/// Violations of the arena or of the half-edge invariants.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TopologyError {
    /// A halfedge id does not name an arena slot.
    #[error("Invalid halfedge reference: {0}")]
    InvalidHalfedge(HalfedgeId),

    /// A vertex id does not name an arena slot.
    #[error("Invalid vertex reference: {0}")]
    InvalidVertex(VertexId),

    /// A face id does not name an arena slot.
    #[error("Invalid face reference: {0}")]
    InvalidFace(FaceId),

    /// A surface id does not name an arena slot.
    #[error("Invalid surface reference: {0}")]
    InvalidSurface(SurfaceId),

    /// A submesh id does not name an arena slot.
    #[error("Invalid submesh reference: {0}")]
    InvalidSubmesh(SubmeshId),

    /// `next`/`prev` do not form a closed ring around a face.
    #[error("Broken face ring at {halfedge}: {reason}")]
    BrokenRing {
        /// Halfedge where the inconsistency was found.
        halfedge: HalfedgeId,
        /// What went wrong.
        reason: &'static str,
    },

    /// `partner(partner(h)) != h`.
    #[error("Asymmetric partners: {halfedge} -> {partner}")]
    AsymmetricPartner {
        /// Halfedge whose partner does not point back.
        halfedge: HalfedgeId,
        /// The partner it names.
        partner: HalfedgeId,
    },

    /// Tried to partner a halfedge that already has a different partner.
    #[error("Halfedge {halfedge} is already partnered with {existing}")]
    AlreadyPartnered {
        /// Halfedge being partnered.
        halfedge: HalfedgeId,
        /// Its current partner.
        existing: HalfedgeId,
    },

    /// Partnered halfedges do not share their endpoints.
    #[error("Partners {halfedge} and {partner} do not meet")]
    PartnerMismatch {
        /// First halfedge.
        halfedge: HalfedgeId,
        /// Its partner.
        partner: HalfedgeId,
    },

    /// A face ring has fewer than three halfedges.
    #[error("Degenerate face {face}: {corners} corners")]
    DegenerateFace {
        /// The offending face.
        face: FaceId,
        /// Number of corners found.
        corners: usize,
    },

    /// Corner-vertex and halfedge do not reference each other.
    #[error("Corner {vertex} is not owned by halfedge {halfedge}")]
    CornerMismatch {
        /// The corner-vertex.
        vertex: VertexId,
        /// The halfedge that names it.
        halfedge: HalfedgeId,
    },

    /// Two cap edges with the same direction and endpoints.
    #[error("Non-manifold edge at {0}")]
    NonManifoldEdge(HalfedgeId),

    /// A face, surface or submesh list disagrees with the back-reference.
    #[error("Surface membership mismatch at {0}")]
    SurfaceMismatch(SurfaceId),
}

/// Result type for topology operations.
pub type TopologyResult<T> = Result<T, TopologyError>;

// =============================================================================
// MESH ERRORS
// =============================================================================

/// Errors that can occur while building a primitive.
///
/// ## Example
///
/// ```rust
/// use lathe_mesh::{primitives::cylinder::{cylinder, CylinderParams}, Mesh, MeshError};
///
/// let mut mesh = Mesh::new();
/// let params = CylinderParams { divisions: 2, ..CylinderParams::default() };
/// match cylinder(&mut mesh, &params) {
///     Err(MeshError::InvalidParameter { message }) => assert!(message.contains("divisions")),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum MeshError {
    /// A construction precondition does not hold.
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// Description of the violated precondition.
        message: String,
    },

    /// The combination of options is intentionally not supported.
    #[error("Unsupported: {message}")]
    Unsupported {
        /// Description of the combination.
        message: String,
    },

    /// The half-edge structure is inconsistent.
    #[error("Topology error: {0}")]
    Topology(#[from] TopologyError),

    /// Invalid kernel configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] KernelConfigError),
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an unsupported combination error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh construction.
pub type MeshResult<T> = Result<T, MeshError>;

// =============================================================================
// TESTS
// =============================================================================
