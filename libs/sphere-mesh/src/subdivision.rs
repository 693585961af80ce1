//! # Subdivision State
//!
//! Per-generation working set: the append-only vertex list and the
//! edge-midpoint cache that lets faces sharing an edge share one midpoint
//! vertex.
//!
//! A fresh state is created for every generation. The midpoint cache spans
//! all passes of that generation; edges of different passes never share an
//! index pair.

use std::collections::HashMap;

use glam::{DVec3, Vec3};

use crate::error::{MeshError, MeshResult};
use crate::face::Face;
use crate::mesh::MeshData;

/// A point on the unit sphere with its outward normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// Unit-length position.
    pub position: DVec3,
    /// Outward unit normal, equal to `position`.
    pub normal: DVec3,
}

impl Vertex {
    /// Projects `point` onto the unit sphere.
    ///
    /// The normal of a sphere centred at the origin is its position, so both
    /// fields hold the same unit vector. Fails for vectors shorter than
    /// `tolerance`.
    pub fn on_unit_sphere(point: DVec3, tolerance: f64) -> MeshResult<Self> {
        let length = point.length();
        if length.is_nan() || length < tolerance {
            return Err(MeshError::degenerate_vertex(point));
        }
        let position = point / length;
        Ok(Self {
            position,
            normal: position,
        })
    }
}

/// Vertex list and midpoint cache for one generation.
#[derive(Debug)]
pub struct SubdivisionState {
    vertices: Vec<Vertex>,
    midpoints: HashMap<(u32, u32), u32>,
    tolerance: f64,
}

impl SubdivisionState {
    /// Creates an empty state.
    pub fn new(tolerance: f64) -> Self {
        Self::with_capacity(0, tolerance)
    }

    /// Creates an empty state with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize, tolerance: f64) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            midpoints: HashMap::with_capacity(vertex_capacity),
            tolerance,
        }
    }

    /// Returns the vertices created so far, in index order.
    #[inline]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Returns the number of vertices created so far.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[cfg(test)]
    fn cached_midpoints(&self) -> usize {
        self.midpoints.len()
    }

    /// Normalizes `point` onto the unit sphere, appends it and returns its
    /// index.
    pub fn add_vertex(&mut self, point: DVec3) -> MeshResult<u32> {
        let vertex = Vertex::on_unit_sphere(point, self.tolerance)?;
        let index = self.vertices.len() as u32;
        self.vertices.push(vertex);
        Ok(index)
    }

    /// Returns the index of the midpoint vertex of edge `(p1, p2)`,
    /// creating it on first request.
    ///
    /// The edge is unordered: `(p1, p2)` and `(p2, p1)` resolve to the same
    /// vertex, which is what stitches neighbouring faces together.
    pub fn midpoint(&mut self, p1: u32, p2: u32) -> MeshResult<u32> {
        let key = (p1.min(p2), p1.max(p2));
        if let Some(&index) = self.midpoints.get(&key) {
            return Ok(index);
        }

        let middle = (self.position(p1) + self.position(p2)) * 0.5;
        let index = self.add_vertex(middle)?;
        self.midpoints.insert(key, index);
        Ok(index)
    }

    /// Adds the projected average of `corners` as a new, uncached vertex.
    pub fn centroid(&mut self, corners: &[u32]) -> MeshResult<u32> {
        let sum: DVec3 = corners.iter().map(|&i| self.position(i)).sum();
        self.add_vertex(sum / corners.len() as f64)
    }

    /// Applies `passes` subdivision passes, replacing the face list each time.
    pub fn refine<F: Face>(&mut self, mut faces: Vec<F>, passes: u32) -> MeshResult<Vec<F>> {
        for pass in 1..=passes {
            let mut next = Vec::with_capacity(faces.len() * 4);
            for face in &faces {
                face.subdivide(self, &mut next)?;
            }
            faces = next;

            log::trace!(
                "subdivision pass {pass}/{passes}: {} faces, {} vertices",
                faces.len(),
                self.vertices.len()
            );
        }
        Ok(faces)
    }

    /// Flattens the vertex list and `faces` into output buffers.
    pub fn into_mesh<F: Face>(self, faces: &[F]) -> MeshData {
        let (positions, normals): (Vec<Vec3>, Vec<Vec3>) = self
            .vertices
            .iter()
            .map(|v| (v.position.as_vec3(), v.normal.as_vec3()))
            .unzip();

        let mut indices = Vec::with_capacity(faces.len() * F::TRIANGLES * 3);
        for face in faces {
            face.write_indices(&mut indices);
        }

        MeshData::from_buffers(positions, normals, indices)
    }

    #[inline]
    fn position(&self, index: u32) -> DVec3 {
        self.vertices[index as usize].position
    }
}
