//! # Mesh Data
//!
//! Output buffers of a sphere generation: parallel positions and normals
//! plus a flat triangle index list.

use config::constants::EPSILON;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh as consumed by a renderer.
///
/// Positions and normals are parallel (`positions[i]` pairs with
/// `normals[i]`); every consecutive index triple is one triangle.
/// Geometry is computed in f64 and exported here as f32 for the GPU.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::{generate_sphere, SphereKind};
///
/// let mesh = generate_sphere(SphereKind::Icosphere, 1).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl MeshData {
    pub(crate) fn from_buffers(
        positions: Vec<Vec3>,
        normals: Vec<Vec3>,
        indices: Vec<u32>,
    ) -> Self {
        debug_assert_eq!(positions.len(), normals.len());
        debug_assert_eq!(indices.len() % 3, 0);
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions, all on the unit sphere.
    #[inline]
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals, parallel to `positions`.
    #[inline]
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Flat triangle index buffer.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterates triangles as index triples.
    pub fn triangles(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.indices.chunks_exact(3).map(|t| [t[0], t[1], t[2]])
    }

    /// Consumes the mesh, returning `(positions, normals, indices)`.
    pub fn into_buffers(self) -> (Vec<Vec3>, Vec<Vec3>, Vec<u32>) {
        (self.positions, self.normals, self.indices)
    }

    /// Exports positions as a flattened `[x, y, z, x, y, z, ...]` array.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten(&self.positions)
    }

    /// Exports normals as a flattened `[nx, ny, nz, ...]` array.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten(&self.normals)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (Vec3, Vec3) {
        let Some((first, rest)) = self.positions.split_first() else {
            return (Vec3::ZERO, Vec3::ZERO);
        };

        rest.iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - Positions and normals have equal length
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if self.positions.len() != self.normals.len() || self.indices.len() % 3 != 0 {
            return false;
        }

        let vertex_count = self.positions.len() as u32;

        self.triangles().all(|[a, b, c]| {
            if a >= vertex_count || b >= vertex_count || c >= vertex_count {
                return false;
            }
            if a == b || b == c || a == c {
                return false;
            }

            let v0 = self.positions[a as usize].as_dvec3();
            let v1 = self.positions[b as usize].as_dvec3();
            let v2 = self.positions[c as usize].as_dvec3();
            (v1 - v0).cross(v2 - v0).length() > EPSILON
        })
    }
}

fn flatten(vectors: &[Vec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(vectors.len() * 3);
    for v in vectors {
        result.extend_from_slice(&v.to_array());
    }
    result
}
