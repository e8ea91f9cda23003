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

//! Narrow interfaces to the geometric services the traversal relies on.
//!
//! The traversal itself never looks at coordinates: every geometric decision
//! goes through one of these strategies, so exact and floating-point variants
//! can be swapped without touching it.

use crate::{
    geometry::point::Point3,
    mesh::{edge_map::UniqueEdgeMap, soup::TriangleSoup},
    numeric::scalar::Scalar,
};

/// Cyclic order of the half-edges around one undirected edge.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RadialFan {
    pub half_edges: Vec<usize>,
    /// Per entry: does the half-edge run along the canonical direction
    /// (lower to higher vertex index) of the edge.
    pub consistent: Vec<bool>,
}

/// Orders the faces incident to an edge by dihedral angle.
///
/// Must be total and deterministic; exactly coplanar faces still get some
/// fixed order. Entries follow increasing angle about the canonical edge
/// direction (right-hand rule), which is what the traversal's rotation rule
/// assumes.
pub trait RadialOrder<T: Scalar>: Sync {
    fn order(&self, soup: &TriangleSoup<T>, edges: &UniqueEdgeMap, edge: usize) -> RadialFan;
}

/// Starting face of a component's traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seed {
    pub face: usize,
    /// Whether the stored winding must be reversed to face outward.
    pub flip: bool,
}

/// Picks a face guaranteed to lie on the outer hull of a component.
pub trait OuterFacet<T: Scalar>: Sync {
    fn outer_facet(
        &self,
        soup: &TriangleSoup<T>,
        edges: &UniqueEdgeMap,
        faces: &[usize],
    ) -> Option<Seed>;
}

/// Point containment against a closed, consistently oriented,
/// non-self-intersecting surface given as oriented triangles.
pub trait PointInSolid<T: Scalar>: Sync {
    fn inside(&self, soup: &TriangleSoup<T>, surface: &[[usize; 3]], point: &Point3<T>) -> bool;

    fn inside_all(
        &self,
        soup: &TriangleSoup<T>,
        surface: &[[usize; 3]],
        points: &[Point3<T>],
    ) -> Vec<bool> {
        points
            .iter()
            .map(|p| self.inside(soup, surface, p))
            .collect()
    }
}

impl<T: Scalar, O: RadialOrder<T> + ?Sized> RadialOrder<T> for &O {
    fn order(&self, soup: &TriangleSoup<T>, edges: &UniqueEdgeMap, edge: usize) -> RadialFan {
        (**self).order(soup, edges, edge)
    }
}

impl<T: Scalar, O: OuterFacet<T> + ?Sized> OuterFacet<T> for &O {
    fn outer_facet(
        &self,
        soup: &TriangleSoup<T>,
        edges: &UniqueEdgeMap,
        faces: &[usize],
    ) -> Option<Seed> {
        (**self).outer_facet(soup, edges, faces)
    }
}

impl<T: Scalar, O: PointInSolid<T> + ?Sized> PointInSolid<T> for &O {
    fn inside(&self, soup: &TriangleSoup<T>, surface: &[[usize; 3]], point: &Point3<T>) -> bool {
        (**self).inside(soup, surface, point)
    }

    fn inside_all(
        &self,
        soup: &TriangleSoup<T>,
        surface: &[[usize; 3]],
        points: &[Point3<T>],
    ) -> Vec<bool> {
        (**self).inside_all(soup, surface, points)
    }
}
