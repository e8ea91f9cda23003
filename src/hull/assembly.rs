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
    hull::traversal::ComponentHull,
    mesh::soup::TriangleSoup,
    numeric::scalar::Scalar,
};

/// Per-component diagnostics of an extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentReport {
    /// Faces in the component.
    pub faces: usize,
    /// Faces the traversal resolved.
    pub resolved: usize,
    /// Whether the component's hull survived nesting resolution.
    pub kept: bool,
}

/// Outer hull of a triangle soup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OuterHull {
    /// Hull triangles over the input vertices, outward wound.
    pub faces: Vec<[usize; 3]>,
    /// Input face each hull triangle came from.
    pub birth_faces: Vec<usize>,
    /// Per input face, whether the traversal reversed it, including faces of
    /// discarded components. Unreached faces keep `false`.
    pub flip: Vec<bool>,
    pub components: Vec<ComponentReport>,
}

impl OuterHull {
    /// Concatenates the kept component hulls in component order.
    pub fn assemble(
        face_count: usize,
        hulls: &[ComponentHull],
        oriented: &[Vec<[usize; 3]>],
        keep: &[bool],
    ) -> Self {
        let total: usize = hulls
            .iter()
            .zip(keep)
            .filter(|&(_, &k)| k)
            .map(|(h, _)| h.faces.len())
            .sum();

        let mut out = OuterHull {
            faces: Vec::with_capacity(total),
            birth_faces: Vec::with_capacity(total),
            flip: vec![false; face_count],
            components: Vec::with_capacity(hulls.len()),
        };

        for ((hull, faces), &kept) in hulls.iter().zip(oriented).zip(keep) {
            out.components.push(ComponentReport {
                faces: hull.faces.len() + hull.unreached.len(),
                resolved: hull.faces.len(),
                kept,
            });
            for (&f, &flip) in hull.faces.iter().zip(&hull.flips) {
                out.flip[f] = flip;
            }
            if kept {
                out.faces.extend_from_slice(faces);
                out.birth_faces.extend_from_slice(&hull.faces);
            }
        }

        out
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn kept_components(&self) -> usize {
        self.components.iter().filter(|c| c.kept).count()
    }

    /// Standalone soup holding only the hull: unreferenced vertices are
    /// dropped and indices remapped, keeping vertex order.
    pub fn compact<T: Scalar>(&self, soup: &TriangleSoup<T>) -> TriangleSoup<T> {
        let mut used = vec![false; soup.vertex_count()];
        for &v in self.faces.iter().flatten() {
            used[v] = true;
        }

        let mut remap = vec![usize::MAX; soup.vertex_count()];
        let mut vertices = Vec::new();
        for (v, _) in used.iter().enumerate().filter(|&(_, &u)| u) {
            remap[v] = vertices.len();
            vertices.push(soup.vertices[v].clone());
        }

        TriangleSoup {
            vertices,
            faces: self.faces.iter().map(|f| f.map(|v| remap[v])).collect(),
        }
    }
}
