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

use smallvec::SmallVec;

use crate::mesh::edge_map::{UniqueEdgeMap, face_of, half_edge};

/// Faces lying across each edge of each face. Non-manifold edges give more
/// than one neighbour per corner, boundary edges none.
#[derive(Debug, Clone)]
pub struct FaceAdjacency {
    across: Vec<[SmallVec<[usize; 2]>; 3]>,
}

impl FaceAdjacency {
    pub fn build(edges: &UniqueEdgeMap, face_count: usize) -> Self {
        let mut across: Vec<[SmallVec<[usize; 2]>; 3]> =
            (0..face_count).map(|_| Default::default()).collect();

        for f in 0..face_count {
            for c in 0..3 {
                let e = edges.edge_of[half_edge(f, c)];
                across[f][c].extend(
                    edges.incident[e]
                        .iter()
                        .map(|&he| face_of(he))
                        .filter(|&g| g != f),
                );
            }
        }

        Self { across }
    }

    pub fn face_count(&self) -> usize {
        self.across.len()
    }

    /// Faces across the edge opposite `corner` of `face`.
    pub fn across(&self, face: usize, corner: usize) -> &[usize] {
        &self.across[face][corner]
    }

    pub fn neighbors(&self, face: usize) -> impl Iterator<Item = usize> + '_ {
        self.across[face].iter().flat_map(|l| l.iter().copied())
    }
}
