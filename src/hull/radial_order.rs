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

//! Radial ordering of the faces around every undirected edge.

use log::debug;
use rayon::prelude::*;

use crate::{
    error::{HullError, HullResult},
    geometry::vector::Vector3,
    hull::oracle::{RadialFan, RadialOrder},
    kernel::predicates::{AxisFrame, compare_keys},
    mesh::{
        edge_map::{UniqueEdgeMap, corner_of, face_of},
        soup::TriangleSoup,
    },
    numeric::{hull_rational::HullRational, scalar::Scalar},
};

/// Incidence list of `edge` with its consistency flags, consistent
/// half-edges first, then by half-edge id. Geometric ties keep this order.
fn tie_ordered_fan<T: Scalar>(
    soup: &TriangleSoup<T>,
    edges: &UniqueEdgeMap,
    edge: usize,
) -> Vec<(usize, bool)> {
    let mut fan: Vec<(usize, bool)> = edges.incident[edge]
        .iter()
        .map(|&he| (he, edges.is_canonical(&soup.faces, he)))
        .collect();
    fan.sort_by_key(|&(he, cons)| (!cons, he));
    fan
}

fn opposite_vertex<T: Scalar>(soup: &TriangleSoup<T>, he: usize) -> usize {
    soup.faces[face_of(he)][corner_of(he)]
}

fn into_fan(entries: impl IntoIterator<Item = (usize, bool)>) -> RadialFan {
    let (half_edges, consistent) = entries.into_iter().unzip();
    RadialFan {
        half_edges,
        consistent,
    }
}

/// Exact dihedral ordering: coordinates are lifted to rationals and every
/// comparison is a sign of a polynomial in them.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactRadialOrder;

impl<T: Scalar> RadialOrder<T> for ExactRadialOrder {
    fn order(&self, soup: &TriangleSoup<T>, edges: &UniqueEdgeMap, edge: usize) -> RadialFan {
        let fan = tie_ordered_fan(soup, edges, edge);
        if fan.len() <= 2 {
            return into_fan(fan);
        }

        let [lo, hi] = edges.edges[edge];
        let s = soup.vertices[lo].to_exact();
        let axis = &soup.vertices[hi].to_exact() - &s;
        let dirs: Vec<Vector3<HullRational>> = fan
            .iter()
            .map(|&(he, _)| &soup.vertices[opposite_vertex(soup, he)].to_exact() - &s)
            .collect();

        // Any direction off the axis serves as the zero angle; the cyclic
        // order does not depend on it.
        let Some(frame) = dirs
            .iter()
            .find_map(|r| AxisFrame::<HullRational>::new(axis.clone(), r))
        else {
            return into_fan(fan);
        };
        let keys: Vec<_> = dirs.iter().map(|d| frame.key(d)).collect();
        let mut idx: Vec<usize> = (0..fan.len()).collect();
        idx.sort_by(|&i, &j| compare_keys::<HullRational>(&keys[i], &keys[j]));

        into_fan(idx.into_iter().map(|i| fan[i]))
    }
}

/// Floating-point dihedral ordering with `atan2`. Cheaper, but nearly
/// coplanar faces may be ordered inconsistently between edges.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatRadialOrder;

impl<T: Scalar> RadialOrder<T> for FloatRadialOrder {
    fn order(&self, soup: &TriangleSoup<T>, edges: &UniqueEdgeMap, edge: usize) -> RadialFan {
        let fan = tie_ordered_fan(soup, edges, edge);
        if fan.len() <= 2 {
            return into_fan(fan);
        }

        let vec = |p: [f64; 3]| Vector3::new(p[0], p[1], p[2]);
        let [lo, hi] = edges.edges[edge];
        let s = vec(soup.vertices[lo].to_f64());
        let axis = vec(soup.vertices[hi].to_f64()).sub(&s);
        let axis_len2 = axis.norm_squared();
        if axis_len2 == 0.0 {
            return into_fan(fan);
        }

        let perp: Vec<Vector3<f64>> = fan
            .iter()
            .map(|&(he, _)| {
                let v = vec(soup.vertices[opposite_vertex(soup, he)].to_f64()).sub(&s);
                v.sub(&axis.scale(&(v.dot(&axis) / axis_len2)))
            })
            .collect();
        let Some(u) = perp.iter().find(|p| p.norm_squared() > 0.0).cloned() else {
            return into_fan(fan);
        };
        let w = axis.cross(&u).scale(&(1.0 / axis_len2.sqrt()));

        let angles: Vec<f64> = perp
            .iter()
            .map(|p| {
                if p.norm_squared() == 0.0 {
                    return -1.0;
                }
                let a = p.dot(&w).atan2(p.dot(&u));
                if a < 0.0 { a + std::f64::consts::TAU } else { a }
            })
            .collect();
        let mut idx: Vec<usize> = (0..fan.len()).collect();
        idx.sort_by(|&i, &j| angles[i].total_cmp(&angles[j]));

        into_fan(idx.into_iter().map(|i| fan[i]))
    }
}

/// Validated radial order of every edge plus the inverse map from a
/// half-edge to its position in its edge's fan.
#[derive(Debug, Clone)]
pub struct RadialTable {
    pub order: Vec<Vec<usize>>,
    pub consistent: Vec<Vec<bool>>,
    pub position: Vec<usize>,
}

impl RadialTable {
    pub fn build<T: Scalar, R: RadialOrder<T>>(
        soup: &TriangleSoup<T>,
        edges: &UniqueEdgeMap,
        oracle: &R,
        parallel: bool,
    ) -> HullResult<Self> {
        let fans: Vec<RadialFan> = if parallel {
            (0..edges.edge_count())
                .into_par_iter()
                .map(|e| oracle.order(soup, edges, e))
                .collect()
        } else {
            (0..edges.edge_count())
                .map(|e| oracle.order(soup, edges, e))
                .collect()
        };

        let mut position = vec![usize::MAX; edges.half_edge_count()];
        let mut order = Vec::with_capacity(fans.len());
        let mut consistent = Vec::with_capacity(fans.len());
        for (e, fan) in fans.into_iter().enumerate() {
            Self::validate(soup, edges, e, &fan, &mut position)?;
            order.push(fan.half_edges);
            consistent.push(fan.consistent);
        }

        debug!(
            "radial order: {} edges, max valence {}",
            order.len(),
            edges.max_valence()
        );
        Ok(Self {
            order,
            consistent,
            position,
        })
    }

    /// Checks that `fan` permutes the incidence list of `edge` with correct
    /// flags, recording positions as it goes.
    fn validate<T: Scalar>(
        soup: &TriangleSoup<T>,
        edges: &UniqueEdgeMap,
        edge: usize,
        fan: &RadialFan,
        position: &mut [usize],
    ) -> HullResult<()> {
        let malformed = |reason: String| HullError::MalformedRadialOrder { edge, reason };

        let expected = edges.valence(edge);
        if fan.half_edges.len() != expected {
            return Err(malformed(format!(
                "{} entries for {} incident half-edges",
                fan.half_edges.len(),
                expected
            )));
        }
        if fan.consistent.len() != expected {
            return Err(malformed(format!(
                "{} consistency flags for {} entries",
                fan.consistent.len(),
                expected
            )));
        }
        for (i, (&he, &cons)) in fan.half_edges.iter().zip(&fan.consistent).enumerate() {
            if he >= edges.half_edge_count() || edges.edge_of[he] != edge {
                return Err(malformed(format!("half-edge {he} is not incident")));
            }
            if position[he] != usize::MAX {
                return Err(malformed(format!("half-edge {he} listed twice")));
            }
            if cons != edges.is_canonical(&soup.faces, he) {
                return Err(malformed(format!("wrong consistency flag for half-edge {he}")));
            }
            position[he] = i;
        }
        Ok(())
    }

    pub fn valence(&self, edge: usize) -> usize {
        self.order[edge].len()
    }
}
