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

//! Outer hull extraction.
//!
//! The pipeline runs in fixed stages: unique edges and their radial order,
//! face adjacency and connected components, one seeded traversal per
//! component, nesting resolution between the component hulls, and assembly.

pub mod assembly;
pub mod nesting;
pub mod oracle;
pub mod outer_facet;
pub mod radial_order;
pub mod traversal;
pub mod winding;

pub use assembly::{ComponentReport, OuterHull};
pub use oracle::{OuterFacet, PointInSolid, RadialFan, RadialOrder, Seed};
pub use outer_facet::ExtremeFacet;
pub use radial_order::{ExactRadialOrder, FloatRadialOrder, RadialTable};
pub use traversal::{ComponentHull, TraversalContext, traverse_component};
pub use winding::WindingNumber;

use log::debug;
use rayon::prelude::*;

use crate::{
    config::HullOptions,
    error::{HullError, HullResult},
    mesh::{Components, FaceAdjacency, TriangleSoup, UniqueEdgeMap},
    numeric::scalar::{RefOps, Scalar},
};

/// Extracts the outer hull of triangle soups, parameterized by the three
/// geometric strategies it depends on.
#[derive(Debug, Clone, Default)]
pub struct HullExtractor<R = ExactRadialOrder, S = ExtremeFacet, P = WindingNumber> {
    radial: R,
    seed: S,
    solid: P,
    options: HullOptions,
}

impl HullExtractor {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R, S, P> HullExtractor<R, S, P> {
    pub fn with_options(mut self, options: HullOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_radial_order<R2>(self, radial: R2) -> HullExtractor<R2, S, P> {
        HullExtractor {
            radial,
            seed: self.seed,
            solid: self.solid,
            options: self.options,
        }
    }

    pub fn with_outer_facet<S2>(self, seed: S2) -> HullExtractor<R, S2, P> {
        HullExtractor {
            radial: self.radial,
            seed,
            solid: self.solid,
            options: self.options,
        }
    }

    pub fn with_point_in_solid<P2>(self, solid: P2) -> HullExtractor<R, S, P2> {
        HullExtractor {
            radial: self.radial,
            seed: self.seed,
            solid,
            options: self.options,
        }
    }

    pub fn options(&self) -> &HullOptions {
        &self.options
    }

    pub fn extract<T>(&self, soup: &TriangleSoup<T>) -> HullResult<OuterHull>
    where
        T: Scalar,
        for<'a> &'a T: RefOps<T>,
        R: RadialOrder<T>,
        S: OuterFacet<T>,
        P: PointInSolid<T>,
    {
        let parallel = self.options.parallel;

        let edges = UniqueEdgeMap::build(&soup.faces, soup.vertex_count())?;
        let radial = RadialTable::build(soup, &edges, &self.radial, parallel)?;
        let adjacency = FaceAdjacency::build(&edges, soup.face_count());
        let components = Components::label(&adjacency);
        debug!(
            "outer hull: {} faces, {} unique edges, {} components",
            soup.face_count(),
            edges.edge_count(),
            components.count()
        );

        let seeds = self.select_seeds(soup, &edges, &components)?;

        let ctx = TraversalContext {
            faces: &soup.faces,
            edges: &edges,
            radial: &radial,
            components: &components,
            policy: self.options.successor,
        };
        let hulls: Vec<ComponentHull> = if parallel {
            seeds
                .par_iter()
                .enumerate()
                .map(|(id, &seed)| traverse_component(&ctx, id, seed))
                .collect()
        } else {
            seeds
                .iter()
                .enumerate()
                .map(|(id, &seed)| traverse_component(&ctx, id, seed))
                .collect()
        };

        for hull in &hulls {
            debug!(
                "component {}: {} of {} faces resolved",
                hull.component,
                hull.faces.len(),
                hull.faces.len() + hull.unreached.len()
            );
            if !self.options.require_full_traversal {
                continue;
            }
            if let Some(&face) = hull.unreached.first() {
                return Err(HullError::UnreachedFaces {
                    component: hull.component,
                    face,
                    unreached: hull.unreached.len(),
                });
            }
        }

        let oriented: Vec<Vec<[usize; 3]>> =
            hulls.iter().map(|h| h.oriented_faces(&soup.faces)).collect();
        let keep = nesting::resolve_nesting(soup, &oriented, &self.solid);
        debug!(
            "nesting: {} of {} components discarded",
            keep.iter().filter(|&&k| !k).count(),
            keep.len()
        );

        let hull = OuterHull::assemble(soup.face_count(), &hulls, &oriented, &keep);
        debug!("outer hull: {} output faces", hull.len());
        Ok(hull)
    }

    fn select_seeds<T>(
        &self,
        soup: &TriangleSoup<T>,
        edges: &UniqueEdgeMap,
        components: &Components,
    ) -> HullResult<Vec<Seed>>
    where
        T: Scalar,
        S: OuterFacet<T>,
    {
        components
            .members
            .iter()
            .enumerate()
            .map(|(component, faces)| {
                let seed = self
                    .seed
                    .outer_facet(soup, edges, faces)
                    .ok_or(HullError::NoOuterFacet { component })?;
                let in_component = seed.face < soup.face_count()
                    && components.component_of(seed.face) == component;
                if !in_component {
                    return Err(HullError::InvalidSeed {
                        component,
                        face: seed.face,
                    });
                }
                Ok(seed)
            })
            .collect()
    }
}

/// Outer hull with the default exact strategies and options.
pub fn outer_hull<T>(soup: &TriangleSoup<T>) -> HullResult<OuterHull>
where
    T: Scalar,
    for<'a> &'a T: RefOps<T>,
{
    HullExtractor::new().extract(soup)
}
