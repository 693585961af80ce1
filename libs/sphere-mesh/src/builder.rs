//! # Sphere Mesh Builder
//!
//! Validates the requested resolution, then dispatches to the selected base
//! polyhedron strategy.
//!
//! ## Pipeline
//!
//! ```text
//! resolution → validate → seed base polyhedron → subdivide (resolution - 1)× → flatten
//! ```

use config::constants::{GlobalConfig, MIN_RESOLUTION};

use crate::error::{MeshError, MeshResult};
use crate::mesh::MeshData;
use crate::primitives::{cube_sphere, icosphere, SphereKind};
use crate::subdivision::SubdivisionState;

/// Generates subdivided unit-sphere meshes of one [`SphereKind`].
///
/// The builder holds only settings. All working state lives inside a single
/// [`generate`](Self::generate) call, so repeated and concurrent calls are
/// independent.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::{SphereKind, SphereMeshBuilder};
///
/// let builder = SphereMeshBuilder::new(SphereKind::Icosphere);
/// let mesh = builder.generate(2).unwrap();
/// assert_eq!(mesh.vertex_count(), 42);
/// assert_eq!(mesh.indices().len(), 240);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SphereMeshBuilder {
    kind: SphereKind,
    config: GlobalConfig,
}

impl SphereMeshBuilder {
    /// Creates a builder with the default limits.
    pub fn new(kind: SphereKind) -> Self {
        Self::with_config(kind, GlobalConfig::default())
    }

    /// Creates a builder with an already validated configuration.
    pub fn with_config(kind: SphereKind, config: GlobalConfig) -> Self {
        Self { kind, config }
    }

    /// Creates a builder from raw limits, validating them first.
    ///
    /// # Example
    ///
    /// ```rust
    /// use sphere_mesh::{MeshError, SphereKind, SphereMeshBuilder};
    ///
    /// let builder = SphereMeshBuilder::try_new(SphereKind::CubeSphere, 1e-9, 6).unwrap();
    /// assert_eq!(builder.config().max_resolution, 6);
    ///
    /// let err = SphereMeshBuilder::try_new(SphereKind::CubeSphere, 0.0, 6).unwrap_err();
    /// assert!(matches!(err, MeshError::Config(_)));
    /// ```
    pub fn try_new(kind: SphereKind, tolerance: f64, max_resolution: i32) -> MeshResult<Self> {
        let config = GlobalConfig::new(tolerance, max_resolution)?;
        Ok(Self::with_config(kind, config))
    }

    /// Returns the base polyhedron strategy.
    #[inline]
    pub fn kind(&self) -> SphereKind {
        self.kind
    }

    /// Returns the generator limits.
    #[inline]
    pub fn config(&self) -> &GlobalConfig {
        &self.config
    }

    /// Generates the sphere mesh at `resolution`.
    ///
    /// Resolution 1 is the base polyhedron; each further level is one
    /// subdivision pass. Invalid resolutions are rejected before any vertex
    /// is created.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidResolution`] if `resolution < 1`
    /// - [`MeshError::ResolutionTooHigh`] if `resolution` exceeds the
    ///   configured maximum
    /// - [`MeshError::DegenerateVertex`] if a vertex cannot be projected
    ///   onto the sphere
    pub fn generate(&self, resolution: i32) -> MeshResult<MeshData> {
        let passes = self.check_resolution(resolution)?;
        let (vertex_capacity, _) = self.kind.expected_counts(resolution).unwrap_or_default();
        let state = SubdivisionState::with_capacity(vertex_capacity, self.config.tolerance);

        let mesh = match self.kind {
            SphereKind::Icosphere => icosphere::build(state, passes)?,
            SphereKind::CubeSphere => cube_sphere::build(state, passes)?,
        };

        log::debug!(
            "generated {} at resolution {resolution}: {} vertices, {} triangles",
            self.kind,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Returns the number of subdivision passes for a valid resolution.
    fn check_resolution(&self, resolution: i32) -> MeshResult<u32> {
        if resolution < MIN_RESOLUTION {
            log::warn!("rejecting {} resolution {resolution}", self.kind);
            return Err(MeshError::invalid_resolution(resolution));
        }
        if resolution > self.config.max_resolution {
            log::warn!(
                "rejecting {} resolution {resolution} above limit {}",
                self.kind,
                self.config.max_resolution
            );
            return Err(MeshError::resolution_too_high(
                resolution,
                self.config.max_resolution,
            ));
        }
        Ok((resolution - MIN_RESOLUTION) as u32)
    }
}
