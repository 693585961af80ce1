//! # Icosphere Primitive
//!
//! Unit sphere grown from a regular icosahedron by repeated midpoint
//! subdivision.

use config::constants::GOLDEN_RATIO as T;
use glam::DVec3;

use crate::builder::SphereMeshBuilder;
use crate::error::MeshResult;
use crate::face::Triangle;
use crate::mesh::MeshData;
use crate::primitives::SphereKind;
use crate::subdivision::SubdivisionState;

pub(crate) const BASE_VERTEX_COUNT: usize = 12;
pub(crate) const BASE_FACE_COUNT: usize = 20;

/// Icosahedron corners before projection: cyclic permutations of
/// `(±1, ±φ, 0)`.
pub const ICOSAHEDRON_VERTICES: [[f64; 3]; BASE_VERTEX_COUNT] = [
    [-1.0, T, 0.0],
    [1.0, T, 0.0],
    [-1.0, -T, 0.0],
    [1.0, -T, 0.0],
    [0.0, -1.0, T],
    [0.0, 1.0, T],
    [0.0, -1.0, -T],
    [0.0, 1.0, -T],
    [T, 0.0, -1.0],
    [T, 0.0, 1.0],
    [-T, 0.0, -1.0],
    [-T, 0.0, 1.0],
];

/// The 20 icosahedron faces, counter-clockwise seen from outside.
pub const ICOSAHEDRON_FACES: [[u32; 3]; BASE_FACE_COUNT] = [
    // 5 faces around vertex 0
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    // 5 adjacent faces
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    // 5 faces around vertex 3
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    // 5 adjacent faces
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Creates an icosphere mesh.
///
/// # Arguments
///
/// * `resolution` - 1 for the bare icosahedron, plus one per subdivision pass
///
/// # Returns
///
/// A mesh with `10 * 4^(resolution - 1) + 2` vertices and
/// `20 * 4^(resolution - 1)` triangles.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::primitives::create_icosphere;
///
/// let mesh = create_icosphere(3).unwrap();
/// assert_eq!(mesh.vertex_count(), 162);
/// assert_eq!(mesh.triangle_count(), 320);
/// ```
pub fn create_icosphere(resolution: i32) -> MeshResult<MeshData> {
    SphereMeshBuilder::new(SphereKind::Icosphere).generate(resolution)
}

/// Seeds the icosahedron into an empty state and subdivides it.
pub(crate) fn build(mut state: SubdivisionState, passes: u32) -> MeshResult<MeshData> {
    let faces = seed(&mut state)?;
    let faces = state.refine(faces, passes)?;
    Ok(state.into_mesh(&faces))
}

fn seed(state: &mut SubdivisionState) -> MeshResult<Vec<Triangle>> {
    for corner in ICOSAHEDRON_VERTICES {
        state.add_vertex(DVec3::from_array(corner))?;
    }
    Ok(ICOSAHEDRON_FACES.into_iter().map(Triangle::from).collect())
}
