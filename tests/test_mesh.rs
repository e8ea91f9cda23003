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

use common::{box_soup, concat, cube, weld};
use outer_hull::{
    HullError, TriangleSoup,
    mesh::{Components, FaceAdjacency, UniqueEdgeMap},
};

fn components(soup: &TriangleSoup<f64>) -> (UniqueEdgeMap, Components) {
    let edges = UniqueEdgeMap::build(&soup.faces, soup.vertex_count()).unwrap();
    let adjacency = FaceAdjacency::build(&edges, soup.face_count());
    (edges, Components::label(&adjacency))
}

#[test]
fn closed_cube_is_manifold() {
    let soup = cube([0.0; 3], 1.0);
    let (edges, comps) = components(&soup);

    assert_eq!(edges.edge_count(), 18);
    assert_eq!(edges.half_edge_count(), 36);
    assert_eq!(edges.non_manifold_edges().count(), 0);
    assert_eq!(edges.max_valence(), 2);
    assert_eq!(comps.count(), 1);
    assert_eq!(comps.members[0], (0..12).collect::<Vec<_>>());
}

#[test]
fn every_half_edge_maps_back_to_its_edge() {
    let soup = cube([0.0; 3], 1.0);
    let (edges, _) = components(&soup);
    for (e, list) in edges.incident.iter().enumerate() {
        let [lo, hi] = edges.edges[e];
        assert!(lo < hi);
        for &he in list {
            assert_eq!(edges.edge_of[he], e);
        }
    }
}

#[test]
fn cubes_sharing_an_edge_form_one_component() {
    let soup = weld(&concat(&[
        cube([0.0; 3], 1.0),
        box_soup([1.0, 1.0, 0.0], [2.0, 2.0, 1.0]),
    ]));
    let (edges, comps) = components(&soup);

    assert_eq!(soup.vertex_count(), 14);
    assert_eq!(edges.edge_count(), 35);
    let fat: Vec<usize> = edges.non_manifold_edges().collect();
    assert_eq!(fat.len(), 1);
    assert_eq!(edges.valence(fat[0]), 4);
    assert_eq!(comps.count(), 1);
}

#[test]
fn disjoint_cubes_are_numbered_by_lowest_face() {
    let soup = concat(&[
        cube([5.0, 0.0, 0.0], 1.0),
        cube([0.0; 3], 1.0),
        cube([0.0, 5.0, 0.0], 1.0),
    ]);
    let (_, comps) = components(&soup);

    assert_eq!(comps.count(), 3);
    assert_eq!(comps.counts(), vec![12, 12, 12]);
    for f in 0..36 {
        assert_eq!(comps.component_of(f), f / 12);
        assert_eq!(comps.local_index[f], f % 12);
    }
}

#[test]
fn adjacency_lists_faces_across_each_corner() {
    let soup = cube([0.0; 3], 1.0);
    let (edges, _) = components(&soup);
    let adjacency = FaceAdjacency::build(&edges, soup.face_count());
    // Face 0 = [0, 2, 1]; corner 0 is the edge 2 -> 1, shared with face 10.
    assert_eq!(adjacency.across(0, 0), &[10]);
    assert_eq!(adjacency.neighbors(0).count(), 3);
}

#[test]
fn invalid_faces_are_rejected() {
    let err = UniqueEdgeMap::build(&[[0, 1, 7]], 3).unwrap_err();
    assert_eq!(
        err,
        HullError::VertexOutOfRange {
            face: 0,
            vertex: 7,
            vertex_count: 3
        }
    );

    let err = UniqueEdgeMap::build(&[[0, 1, 2], [2, 1, 2]], 3).unwrap_err();
    assert!(matches!(err, HullError::DegenerateFace { face: 1, .. }));
}
