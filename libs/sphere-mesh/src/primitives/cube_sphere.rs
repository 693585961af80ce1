//! # Cube-Sphere Primitive
//!
//! Unit sphere grown from a cube whose quad faces are split into four quads
//! per pass and projected onto the sphere.

use glam::DVec3;

use crate::builder::SphereMeshBuilder;
use crate::error::MeshResult;
use crate::face::Quad;
use crate::mesh::MeshData;
use crate::primitives::SphereKind;
use crate::subdivision::SubdivisionState;

pub(crate) const BASE_VERTEX_COUNT: usize = 8;
pub(crate) const BASE_FACE_COUNT: usize = 6;

/// Cube corners before projection.
pub const CUBE_VERTICES: [[f64; 3]; BASE_VERTEX_COUNT] = [
    [-1.0, -1.0, -1.0], // 0: left-front-bottom
    [1.0, -1.0, -1.0],  // 1: right-front-bottom
    [1.0, 1.0, -1.0],   // 2: right-back-bottom
    [-1.0, 1.0, -1.0],  // 3: left-back-bottom
    [-1.0, -1.0, 1.0],  // 4: left-front-top
    [1.0, -1.0, 1.0],   // 5: right-front-top
    [1.0, 1.0, 1.0],    // 6: right-back-top
    [-1.0, 1.0, 1.0],   // 7: left-back-top
];

/// The 6 cube faces, counter-clockwise seen from outside.
pub const CUBE_FACES: [[u32; 4]; BASE_FACE_COUNT] = [
    [0, 3, 2, 1], // bottom (z = -1)
    [4, 5, 6, 7], // top (z = +1)
    [0, 1, 5, 4], // front (y = -1)
    [2, 3, 7, 6], // back (y = +1)
    [3, 0, 4, 7], // left (x = -1)
    [1, 2, 6, 5], // right (x = +1)
];

/// Creates a cube-sphere mesh.
///
/// # Arguments
///
/// * `resolution` - 1 for the bare cube, plus one per subdivision pass
///
/// # Returns
///
/// A mesh with `6 * 4^(resolution - 1) + 2` vertices and
/// `12 * 4^(resolution - 1)` triangles.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::primitives::create_cube_sphere;
///
/// let mesh = create_cube_sphere(3).unwrap();
/// assert_eq!(mesh.vertex_count(), 98);
/// assert_eq!(mesh.triangle_count(), 192);
/// ```
pub fn create_cube_sphere(resolution: i32) -> MeshResult<MeshData> {
    SphereMeshBuilder::new(SphereKind::CubeSphere).generate(resolution)
}

/// Seeds the cube into an empty state and subdivides it.
pub(crate) fn build(mut state: SubdivisionState, passes: u32) -> MeshResult<MeshData> {
    let faces = seed(&mut state)?;
    let faces = state.refine(faces, passes)?;
    Ok(state.into_mesh(&faces))
}

fn seed(state: &mut SubdivisionState) -> MeshResult<Vec<Quad>> {
    for corner in CUBE_VERTICES {
        state.add_vertex(DVec3::from_array(corner))?;
    }
    Ok(CUBE_FACES.into_iter().map(Quad::from).collect())
}
