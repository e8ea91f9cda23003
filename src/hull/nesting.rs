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

use log::trace;

use crate::{
    geometry::{aabb::Aabb, point::Point3},
    hull::oracle::PointInSolid,
    mesh::soup::TriangleSoup,
    numeric::scalar::{RefOps, Scalar},
};

fn hull_bounds<T: Scalar>(soup: &TriangleSoup<T>, hull: &[[usize; 3]]) -> Option<Aabb<T>> {
    Aabb::from_points(hull.iter().flatten().map(|&v| &soup.vertices[v]))
}

/// Decides which component hulls survive: a hull is dropped when a point of
/// it lies inside another surviving hull.
///
/// Components are taken in order; a discarded component is never used as a
/// container again. Only pairs with overlapping bounding boxes are tested,
/// and the sample point is the barycenter of the candidate's first hull face.
pub fn resolve_nesting<T, P>(
    soup: &TriangleSoup<T>,
    hulls: &[Vec<[usize; 3]>],
    oracle: &P,
) -> Vec<bool>
where
    T: Scalar,
    for<'a> &'a T: RefOps<T>,
    P: PointInSolid<T> + ?Sized,
{
    let bounds: Vec<Option<Aabb<T>>> = hulls.iter().map(|h| hull_bounds(soup, h)).collect();
    let mut keep = vec![true; hulls.len()];

    for id in 0..hulls.len() {
        if !keep[id] {
            continue;
        }
        let Some(outer) = &bounds[id] else {
            continue;
        };

        let candidates: Vec<usize> = (0..hulls.len())
            .filter(|&oid| oid != id && keep[oid])
            .filter(|&oid| bounds[oid].as_ref().is_some_and(|b| b.intersects(outer)))
            .collect();
        if candidates.is_empty() {
            continue;
        }

        let samples: Vec<_> = candidates
            .iter()
            .map(|&oid| {
                let [a, b, c] = hulls[oid][0];
                Point3::barycenter(&soup.vertices[a], &soup.vertices[b], &soup.vertices[c])
            })
            .collect();
        let inside = oracle.inside_all(soup, &hulls[id], &samples);

        for (&oid, is_inside) in candidates.iter().zip(inside) {
            if is_inside {
                trace!("component {oid} is nested in component {id}");
                keep[oid] = false;
            }
        }
    }

    keep
}
