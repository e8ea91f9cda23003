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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::error::{HullError, HullResult};

/// Half-edge id of corner `corner` of `face`. Corner `c` is the directed edge
/// `face[(c+1)%3] -> face[(c+2)%3]`, i.e. the edge opposite vertex `c`.
#[inline(always)]
pub fn half_edge(face: usize, corner: usize) -> usize {
    face * 3 + corner
}

#[inline(always)]
pub fn face_of(he: usize) -> usize {
    he / 3
}

#[inline(always)]
pub fn corner_of(he: usize) -> usize {
    he % 3
}

/// (source, destination) of a half-edge in the stored winding of its face.
#[inline(always)]
pub fn half_edge_endpoints(faces: &[[usize; 3]], he: usize) -> (usize, usize) {
    let f = &faces[face_of(he)];
    let c = corner_of(he);
    (f[(c + 1) % 3], f[(c + 2) % 3])
}

pub fn validate_faces(faces: &[[usize; 3]], vertex_count: usize) -> HullResult<()> {
    for (face, tri) in faces.iter().enumerate() {
        for (i, &vertex) in tri.iter().enumerate() {
            if vertex >= vertex_count {
                return Err(HullError::VertexOutOfRange {
                    face,
                    vertex,
                    vertex_count,
                });
            }
            if tri[(i + 1) % 3] == vertex {
                return Err(HullError::DegenerateFace { face, vertex });
            }
        }
    }
    Ok(())
}

/// Undirected edges of a soup and the half-edges mapping onto each of them.
#[derive(Debug, Clone)]
pub struct UniqueEdgeMap {
    /// Canonical endpoints `[lo, hi]`, `lo < hi`.
    pub edges: Vec<[usize; 2]>,
    /// Undirected edge of every half-edge.
    pub edge_of: Vec<usize>,
    /// Incidence list of every undirected edge, in half-edge id order.
    pub incident: Vec<SmallVec<[usize; 2]>>,
}

impl UniqueEdgeMap {
    pub fn build(faces: &[[usize; 3]], vertex_count: usize) -> HullResult<Self> {
        validate_faces(faces, vertex_count)?;

        let half_edges = faces.len() * 3;
        let mut lookup: AHashMap<(usize, usize), usize> = AHashMap::with_capacity(half_edges / 2);
        let mut edges: Vec<[usize; 2]> = Vec::with_capacity(half_edges / 2);
        let mut incident: Vec<SmallVec<[usize; 2]>> = Vec::with_capacity(half_edges / 2);
        let mut edge_of = Vec::with_capacity(half_edges);

        for he in 0..half_edges {
            let (s, d) = half_edge_endpoints(faces, he);
            let key = if s < d { (s, d) } else { (d, s) };
            let e = *lookup.entry(key).or_insert_with(|| {
                edges.push([key.0, key.1]);
                incident.push(SmallVec::new());
                edges.len() - 1
            });
            incident[e].push(he);
            edge_of.push(e);
        }

        Ok(Self {
            edges,
            edge_of,
            incident,
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn half_edge_count(&self) -> usize {
        self.edge_of.len()
    }

    pub fn valence(&self, e: usize) -> usize {
        self.incident[e].len()
    }

    pub fn max_valence(&self) -> usize {
        self.incident.iter().map(|l| l.len()).max().unwrap_or(0)
    }

    /// Whether the half-edge runs from the lower to the higher vertex index
    /// of its undirected edge.
    pub fn is_canonical(&self, faces: &[[usize; 3]], he: usize) -> bool {
        let (s, _) = half_edge_endpoints(faces, he);
        s == self.edges[self.edge_of[he]][0]
    }

    /// Edges whose valence is not two.
    pub fn non_manifold_edges(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.edges.len()).filter(move |&e| self.incident[e].len() != 2)
    }
}
