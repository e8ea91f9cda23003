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

mod common;

use std::collections::HashSet;

use common::{CUBE_FACES, box_soup, concat, cube, inverted, weld};
use outer_hull::{
    SuccessorPolicy, TriangleSoup,
    hull::{
        ComponentHull, ExactRadialOrder, ExtremeFacet, OuterFacet, RadialTable, TraversalContext,
        traverse_component,
    },
    mesh::{Components, FaceAdjacency, UniqueEdgeMap},
};

fn walk_all(soup: &TriangleSoup<f64>, policy: SuccessorPolicy) -> Vec<ComponentHull> {
    let edges = UniqueEdgeMap::build(&soup.faces, soup.vertex_count()).unwrap();
    let radial = RadialTable::build(soup, &edges, &ExactRadialOrder, false).unwrap();
    let adjacency = FaceAdjacency::build(&edges, soup.face_count());
    let components = Components::label(&adjacency);
    let ctx = TraversalContext {
        faces: &soup.faces,
        edges: &edges,
        radial: &radial,
        components: &components,
        policy,
    };
    components
        .members
        .iter()
        .enumerate()
        .map(|(id, members)| {
            let seed = ExtremeFacet.outer_facet(soup, &edges, members).unwrap();
            traverse_component(&ctx, id, seed)
        })
        .collect()
}

#[test]
fn cube_is_closed_and_outward() {
    let soup = cube([0.0; 3], 1.0);
    let hulls = walk_all(&soup, SuccessorPolicy::default());
    assert_eq!(hulls.len(), 1);

    let hull = &hulls[0];
    assert_eq!(hull.faces, (0..12).collect::<Vec<_>>());
    assert!(hull.flips.iter().all(|&f| !f));
    assert!(hull.unreached.is_empty());
    assert_eq!(hull.oriented_faces(&soup.faces), CUBE_FACES.to_vec());
}

#[test]
fn every_half_edge_is_visited_once() {
    let soup = weld(&concat(&[
        cube([0.0; 3], 1.0),
        box_soup([1.0, 1.0, 0.0], [2.0, 2.0, 1.0]),
    ]));
    for hull in walk_all(&soup, SuccessorPolicy::default()) {
        assert_eq!(hull.visited.len(), 3 * hull.faces.len());
        let unique: HashSet<usize> = hull.visited.iter().copied().collect();
        assert_eq!(unique.len(), hull.visited.len());
        for he in unique {
            assert!(hull.faces.contains(&(he / 3)));
        }
    }
}

#[test]
fn inverted_cube_is_flipped_everywhere() {
    let soup = inverted(&cube([0.0; 3], 1.0));
    let hull = &walk_all(&soup, SuccessorPolicy::default())[0];
    assert_eq!(hull.faces.len(), 12);
    assert!(hull.flips.iter().all(|&f| f));
    assert_eq!(hull.oriented_faces(&soup.faces), CUBE_FACES.to_vec());
}

#[test]
fn single_inconsistent_face_is_repaired() {
    let mut soup = cube([0.0; 3], 1.0);
    soup.faces[5] = [4, 5, 0];
    let hull = &walk_all(&soup, SuccessorPolicy::default())[0];

    for (&f, &flip) in hull.faces.iter().zip(&hull.flips) {
        assert_eq!(flip, f == 5, "face {f}");
    }
    assert_eq!(hull.oriented_faces(&soup.faces), CUBE_FACES.to_vec());
}

#[test]
fn shared_edge_cubes_under_both_policies() {
    let soup = weld(&concat(&[
        cube([0.0; 3], 1.0),
        box_soup([1.0, 1.0, 0.0], [2.0, 2.0, 1.0]),
    ]));
    for policy in [SuccessorPolicy::FirstUnresolved, SuccessorPolicy::Adjacent] {
        let hulls = walk_all(&soup, policy);
        assert_eq!(hulls.len(), 1);
        assert_eq!(hulls[0].faces.len(), 24, "{policy:?}");
        assert!(hulls[0].flips.iter().all(|&f| !f), "{policy:?}");
    }
}

#[test]
fn coincident_interior_faces_stay_unreached() {
    // Two boxes glued along x = 1: the four triangles of the shared square
    // lie inside the union.
    let soup = weld(&concat(&[
        cube([0.0; 3], 1.0),
        box_soup([1.0, 0.0, 0.0], [2.0, 1.0, 1.0]),
    ]));
    let hull = &walk_all(&soup, SuccessorPolicy::Adjacent)[0];

    assert_eq!(hull.faces.len(), 20);
    assert!(hull.flips.iter().all(|&f| !f));
    // +x side of the first box, -x side of the second.
    assert_eq!(hull.unreached, vec![10, 11, 20, 21]);
}
