//! # Faces
//!
//! Index-based faces of the base polyhedra and the rule each one follows to
//! split into four children during a subdivision pass.

use crate::error::MeshResult;
use crate::subdivision::SubdivisionState;

/// A face that can be split into four smaller faces of the same shape.
///
/// Implementors must emit children with the same winding as the parent so
/// orientation is preserved through any number of passes.
pub trait Face: Copy + Sized {
    /// Number of triangles the face contributes to the index buffer.
    const TRIANGLES: usize;

    /// Splits the face into four children, appending them to `out`.
    fn subdivide(&self, state: &mut SubdivisionState, out: &mut Vec<Self>) -> MeshResult<()>;

    /// Appends the face's triangle indices to a flat index buffer.
    fn write_indices(&self, indices: &mut Vec<u32>);
}

/// Three vertex indices, counter-clockwise seen from outside the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Triangle {
    /// First corner.
    pub a: u32,
    /// Second corner.
    pub b: u32,
    /// Third corner.
    pub c: u32,
}

impl Triangle {
    /// Creates a triangle from three vertex indices.
    pub const fn new(a: u32, b: u32, c: u32) -> Self {
        Self { a, b, c }
    }

    /// Returns the corners in winding order.
    #[inline]
    pub fn indices(&self) -> [u32; 3] {
        [self.a, self.b, self.c]
    }
}

impl From<[u32; 3]> for Triangle {
    fn from([a, b, c]: [u32; 3]) -> Self {
        Self::new(a, b, c)
    }
}

impl Face for Triangle {
    const TRIANGLES: usize = 1;

    /// Midpoint split:
    ///
    /// ```text
    ///          a
    ///         / \
    ///       ab---ca
    ///       / \ / \
    ///      b---bc--c
    /// ```
    fn subdivide(&self, state: &mut SubdivisionState, out: &mut Vec<Self>) -> MeshResult<()> {
        let Self { a, b, c } = *self;
        let ab = state.midpoint(a, b)?;
        let bc = state.midpoint(b, c)?;
        let ca = state.midpoint(c, a)?;

        out.extend_from_slice(&[
            Self::new(a, ab, ca),
            Self::new(b, bc, ab),
            Self::new(c, ca, bc),
            Self::new(ab, bc, ca),
        ]);
        Ok(())
    }

    fn write_indices(&self, indices: &mut Vec<u32>) {
        indices.extend_from_slice(&self.indices());
    }
}

/// Four vertex indices, counter-clockwise seen from outside the sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quad {
    /// First corner.
    pub a: u32,
    /// Second corner.
    pub b: u32,
    /// Third corner.
    pub c: u32,
    /// Fourth corner.
    pub d: u32,
}

impl Quad {
    /// Creates a quad from four vertex indices.
    pub const fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self { a, b, c, d }
    }

    /// Returns the corners in winding order.
    #[inline]
    pub fn indices(&self) -> [u32; 4] {
        [self.a, self.b, self.c, self.d]
    }
}

impl From<[u32; 4]> for Quad {
    fn from([a, b, c, d]: [u32; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl Face for Quad {
    const TRIANGLES: usize = 2;

    /// Edge midpoints plus a face centre:
    ///
    /// ```text
    ///    d---cd---c
    ///    |    |   |
    ///   da----m---bc
    ///    |    |   |
    ///    a---ab---b
    /// ```
    fn subdivide(&self, state: &mut SubdivisionState, out: &mut Vec<Self>) -> MeshResult<()> {
        let Self { a, b, c, d } = *self;
        let ab = state.midpoint(a, b)?;
        let bc = state.midpoint(b, c)?;
        let cd = state.midpoint(c, d)?;
        let da = state.midpoint(d, a)?;
        // Interior to this quad, so never shared
        let m = state.centroid(&[a, b, c, d])?;

        out.extend_from_slice(&[
            Self::new(a, ab, m, da),
            Self::new(b, bc, m, ab),
            Self::new(c, cd, m, bc),
            Self::new(d, da, m, cd),
        ]);
        Ok(())
    }

    fn write_indices(&self, indices: &mut Vec<u32>) {
        let Self { a, b, c, d } = *self;
        indices.extend_from_slice(&[a, b, c, a, c, d]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;

    fn state_with(points: &[DVec3]) -> SubdivisionState {
        let mut state = SubdivisionState::new(config::constants::EPSILON);
        for p in points {
            state.add_vertex(*p).unwrap();
        }
        state
    }

    #[test]
    fn test_triangle_subdivide_emits_four_children() {
        let mut state = state_with(&[DVec3::X, DVec3::Y, DVec3::Z]);
        let mut out = Vec::new();
        Triangle::new(0, 1, 2).subdivide(&mut state, &mut out).unwrap();

        // ab = 3, bc = 4, ca = 5 in creation order
        assert_eq!(
            out,
            vec![
                Triangle::new(0, 3, 5),
                Triangle::new(1, 4, 3),
                Triangle::new(2, 5, 4),
                Triangle::new(3, 4, 5),
            ]
        );
        assert_eq!(state.vertex_count(), 6);
    }

    #[test]
    fn test_triangle_write_indices() {
        let mut indices = Vec::new();
        Triangle::new(4, 5, 6).write_indices(&mut indices);
        assert_eq!(indices, vec![4, 5, 6]);
    }

    #[test]
    fn test_quad_subdivide_emits_four_children() {
        let corners = [
            DVec3::new(-1.0, -1.0, 1.0),
            DVec3::new(1.0, -1.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(-1.0, 1.0, 1.0),
        ];
        let mut state = state_with(&corners);
        let mut out = Vec::new();
        Quad::new(0, 1, 2, 3).subdivide(&mut state, &mut out).unwrap();

        // ab = 4, bc = 5, cd = 6, da = 7, m = 8
        assert_eq!(
            out,
            vec![
                Quad::new(0, 4, 8, 7),
                Quad::new(1, 5, 8, 4),
                Quad::new(2, 6, 8, 5),
                Quad::new(3, 7, 8, 6),
            ]
        );
        // Centre of the +z face projects to the pole
        let centre = state.vertices()[8].position;
        assert!((centre - DVec3::Z).length() < 1e-12);
    }

    #[test]
    fn test_quad_write_indices_fans_from_first_corner() {
        let mut indices = Vec::new();
        Quad::new(0, 1, 2, 3).write_indices(&mut indices);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
