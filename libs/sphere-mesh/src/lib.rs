//! # Sphere Mesh
//!
//! Deterministic unit-sphere mesh generation for procedural planets.
//! A base polyhedron is subdivided a chosen number of times and every new
//! vertex is projected onto the unit sphere.
//!
//! ## Architecture
//!
//! ```text
//! SphereKind + resolution → SphereMeshBuilder → SubdivisionState → MeshData
//! ```
//!
//! ## Strategies
//!
//! - **Icosphere**: icosahedron, each triangle split into four
//! - **Cube-sphere**: cube, each quad split into four
//!
//! Faces sharing an edge share its midpoint vertex, so the output has no
//! duplicate coincident vertices.
//!
//! ## Usage
//!
//! ```rust
//! use sphere_mesh::{generate_sphere, SphereKind};
//!
//! let mesh = generate_sphere(SphereKind::Icosphere, 4)?;
//! assert_eq!(mesh.vertex_count(), 642);
//! assert_eq!(mesh.triangle_count(), 1280);
//! # Ok::<(), sphere_mesh::MeshError>(())
//! ```

pub mod builder;
pub mod error;
pub mod face;
pub mod mesh;
pub mod primitives;
pub mod subdivision;

pub use builder::SphereMeshBuilder;
pub use error::{MeshError, MeshResult};
pub use mesh::MeshData;
pub use primitives::SphereKind;

/// Generates a unit-sphere mesh with default limits.
///
/// This is the main entry point for one-shot generation.
///
/// # Arguments
///
/// * `kind` - Base polyhedron to subdivide
/// * `resolution` - 1 for the base polyhedron, plus one per subdivision pass
///
/// # Example
///
/// ```rust
/// use sphere_mesh::{generate_sphere, MeshError, SphereKind};
///
/// let mesh = generate_sphere(SphereKind::CubeSphere, 2).unwrap();
/// assert_eq!(mesh.vertex_count(), 26);
///
/// assert!(matches!(
///     generate_sphere(SphereKind::Icosphere, 0),
///     Err(MeshError::InvalidResolution { .. })
/// ));
/// ```
pub fn generate_sphere(kind: SphereKind, resolution: i32) -> MeshResult<MeshData> {
    SphereMeshBuilder::new(kind).generate(resolution)
}
