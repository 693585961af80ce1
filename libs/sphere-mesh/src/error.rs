//! # Mesh Errors
//!
//! Error types for sphere mesh generation.
//!
//! ## Error Policy
//!
//! - Invalid input is rejected before any vertex work begins
//! - No partial output is ever returned alongside an error
//! - Internal invariant violations surface as errors, never panics

use config::constants::ConfigError;
use glam::DVec3;
use thiserror::Error;

/// Errors that can occur during sphere mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// Resolution below the minimum of one.
    #[error("Invalid resolution: {resolution} (minimum: {min})")]
    InvalidResolution {
        /// Requested resolution.
        resolution: i32,
        /// Smallest valid resolution.
        min: i32,
    },

    /// Resolution above the configured limit.
    #[error("Resolution too high: {resolution} (max: {max})")]
    ResolutionTooHigh {
        /// Requested resolution.
        resolution: i32,
        /// Configured limit.
        max: i32,
    },

    /// A zero-length vector reached normalization.
    ///
    /// Cannot happen for the built-in base polyhedra; seeing it means the
    /// subdivision geometry is broken.
    #[error("Degenerate vertex: cannot project {position} onto the unit sphere")]
    DegenerateVertex {
        /// The vector that failed normalization.
        position: DVec3,
    },

    /// Invalid generator configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl MeshError {
    /// Creates an invalid resolution error.
    pub fn invalid_resolution(resolution: i32) -> Self {
        Self::InvalidResolution {
            resolution,
            min: config::constants::MIN_RESOLUTION,
        }
    }

    /// Creates a resolution-too-high error.
    pub fn resolution_too_high(resolution: i32, max: i32) -> Self {
        Self::ResolutionTooHigh { resolution, max }
    }

    /// Creates a degenerate vertex error.
    pub fn degenerate_vertex(position: DVec3) -> Self {
        Self::DegenerateVertex { position }
    }
}

/// Result type alias for mesh generation.
pub type MeshResult<T> = Result<T, MeshError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::invalid_resolution(0);
        assert!(err.to_string().contains("Invalid resolution"));
        assert!(err.to_string().contains('0'));

        let err = MeshError::resolution_too_high(12, 10);
        assert!(err.to_string().contains("12"));
        assert!(err.to_string().contains("10"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: MeshError = ConfigError::InvalidMaxResolution(0).into();
        assert!(matches!(err, MeshError::Config(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MeshError>();
    }
}
