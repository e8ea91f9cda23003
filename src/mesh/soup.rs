// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use crate::{
    error::{HullError, HullResult},
    geometry::point::Point3,
    mesh::edge_map::validate_faces,
    numeric::{
        hull_rational::HullRational,
        scalar::{RefOps, Scalar},
    },
};

/// Immutable input of the hull extraction: vertex positions and triangles
/// indexing them (0-based, three per face).
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleSoup<T: Scalar> {
    pub vertices: Vec<Point3<T>>,
    pub faces: Vec<[usize; 3]>,
}

impl<T: Scalar> TriangleSoup<T> {
    /// Build a soup, rejecting non-finite coordinates, out-of-range indices and
    /// triangles that repeat a vertex.
    pub fn new(vertices: Vec<Point3<T>>, faces: Vec<[usize; 3]>) -> HullResult<Self> {
        for (vertex, p) in vertices.iter().enumerate() {
            if p.to_f64().iter().any(|c| !c.is_finite()) {
                return Err(HullError::NonFiniteCoordinate { vertex });
            }
        }
        validate_faces(&faces, vertices.len())?;
        Ok(Self { vertices, faces })
    }

    pub fn from_f64(positions: &[[f64; 3]], faces: &[[usize; 3]]) -> HullResult<Self> {
        let vertices = positions.iter().map(|&p| Point3::from_vals(p)).collect();
        Self::new(vertices, faces.to_vec())
    }

    /// Build from flat `x y z` coordinates and flat `i j k` indices.
    pub fn from_flat(coords: &[f64], indices: &[usize]) -> HullResult<Self> {
        if coords.len() % 3 != 0 {
            return Err(HullError::CoordinateCountMismatch { len: coords.len() });
        }
        if indices.len() % 3 != 0 {
            return Err(HullError::IndexCountMismatch { len: indices.len() });
        }
        let vertices = coords
            .chunks_exact(3)
            .map(|c| Point3::new(c[0], c[1], c[2]))
            .collect();
        let faces = indices
            .chunks_exact(3)
            .map(|t| [t[0], t[1], t[2]])
            .collect();
        Self::new(vertices, faces)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn face_points(&self, f: usize) -> [&Point3<T>; 3] {
        let [a, b, c] = self.faces[f];
        [&self.vertices[a], &self.vertices[b], &self.vertices[c]]
    }

    pub fn barycenter(&self, f: usize) -> Point3<T>
    where
        for<'a> &'a T: RefOps<T>,
    {
        let [a, b, c] = self.face_points(f);
        Point3::barycenter(a, b, c)
    }

    /// Same soup over exact rational coordinates.
    pub fn to_exact(&self) -> TriangleSoup<HullRational> {
        TriangleSoup {
            vertices: self.vertices.iter().map(|p| p.to_exact()).collect(),
            faces: self.faces.clone(),
        }
    }

    /// Append another soup, shifting its indices past the current vertices.
    /// Returns the index of the first appended face.
    pub fn append(&mut self, other: &TriangleSoup<T>) -> usize {
        let offset = self.vertices.len();
        let first_face = self.faces.len();
        self.vertices.extend(other.vertices.iter().cloned());
        self.faces
            .extend(other.faces.iter().map(|f| f.map(|v| v + offset)));
        first_face
    }
}
