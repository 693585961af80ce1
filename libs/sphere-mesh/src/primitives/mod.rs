//! # Primitives
//!
//! Base polyhedra that are subdivided into unit spheres.

pub mod cube_sphere;
pub mod icosphere;

pub use cube_sphere::create_cube_sphere;
pub use icosphere::create_icosphere;

use std::fmt;

use serde::{Deserialize, Serialize};

use config::constants::{HARD_MAX_RESOLUTION, MIN_RESOLUTION};

/// Base polyhedron a sphere is grown from.
///
/// # Example
///
/// ```rust
/// use sphere_mesh::SphereKind;
///
/// assert_eq!(SphereKind::Icosphere.expected_counts(2), Some((42, 80)));
/// assert_eq!(SphereKind::CubeSphere.expected_counts(2), Some((26, 48)));
/// assert_eq!(SphereKind::Icosphere.expected_counts(0), None);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SphereKind {
    /// Regular icosahedron, split into triangles.
    #[default]
    Icosphere,
    /// Cube, split into quads.
    CubeSphere,
}

impl SphereKind {
    /// Every strategy, in declaration order.
    pub const ALL: [SphereKind; 2] = [SphereKind::Icosphere, SphereKind::CubeSphere];

    /// Returns `(vertices, faces)` of the unsubdivided base polyhedron.
    pub const fn base_counts(self) -> (usize, usize) {
        match self {
            SphereKind::Icosphere => (icosphere::BASE_VERTEX_COUNT, icosphere::BASE_FACE_COUNT),
            SphereKind::CubeSphere => {
                (cube_sphere::BASE_VERTEX_COUNT, cube_sphere::BASE_FACE_COUNT)
            }
        }
    }

    /// Triangles each base face turns into when flattened.
    pub const fn triangles_per_face(self) -> usize {
        match self {
            SphereKind::Icosphere => 1,
            SphereKind::CubeSphere => 2,
        }
    }

    /// Returns `(vertex_count, triangle_count)` of a mesh generated at
    /// `resolution`, or `None` when the resolution is out of range.
    ///
    /// Each pass quadruples the faces. Both base polyhedra are closed genus-0
    /// surfaces, so by Euler's formula the vertex count grows as
    /// `(V0 - 2) * 4^k + 2` for `k = resolution - 1` passes.
    pub fn expected_counts(self, resolution: i32) -> Option<(usize, usize)> {
        if !(MIN_RESOLUTION..=HARD_MAX_RESOLUTION).contains(&resolution) {
            return None;
        }
        let growth = 4usize.checked_pow((resolution - 1) as u32)?;
        let (base_vertices, base_faces) = self.base_counts();

        let vertices = (base_vertices - 2).checked_mul(growth)?.checked_add(2)?;
        let triangles = base_faces
            .checked_mul(self.triangles_per_face())?
            .checked_mul(growth)?;
        Some((vertices, triangles))
    }
}

impl fmt::Display for SphereKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SphereKind::Icosphere => write!(f, "icosphere"),
            SphereKind::CubeSphere => write!(f, "cube-sphere"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_kind_is_icosphere() {
        assert_eq!(SphereKind::default(), SphereKind::Icosphere);
    }

    #[test]
    fn test_expected_counts_base_case() {
        assert_eq!(SphereKind::Icosphere.expected_counts(1), Some((12, 20)));
        assert_eq!(SphereKind::CubeSphere.expected_counts(1), Some((8, 12)));
    }

    #[test]
    fn test_expected_counts_closed_form() {
        for resolution in 1..=8 {
            let growth = 4usize.pow((resolution - 1) as u32);
            assert_eq!(
                SphereKind::Icosphere.expected_counts(resolution),
                Some((10 * growth + 2, 20 * growth))
            );
            assert_eq!(
                SphereKind::CubeSphere.expected_counts(resolution),
                Some((6 * growth + 2, 12 * growth))
            );
        }
    }

    #[test]
    fn test_expected_counts_out_of_range() {
        assert_eq!(SphereKind::Icosphere.expected_counts(0), None);
        assert_eq!(SphereKind::Icosphere.expected_counts(-1), None);
        assert_eq!(
            SphereKind::CubeSphere.expected_counts(HARD_MAX_RESOLUTION + 1),
            None
        );
    }

    #[test]
    fn test_serde_round_trip() {
        for kind in SphereKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(serde_json::from_str::<SphereKind>(&json).unwrap(), kind);
        }
        assert_eq!(
            serde_json::to_string(&SphereKind::CubeSphere).unwrap(),
            "\"CubeSphere\""
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SphereKind::Icosphere.to_string(), "icosphere");
        assert_eq!(SphereKind::CubeSphere.to_string(), "cube-sphere");
    }
}
