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

//! Orientation-propagating walk over one component's outer surface.

use std::collections::VecDeque;

use log::trace;

use crate::{
    config::SuccessorPolicy,
    hull::{oracle::Seed, radial_order::RadialTable},
    mesh::{
        components::Components,
        edge_map::{UniqueEdgeMap, corner_of, face_of, half_edge, half_edge_endpoints},
    },
};

/// Read-only inputs shared by the traversals of all components.
#[derive(Clone, Copy)]
pub struct TraversalContext<'a> {
    pub faces: &'a [[usize; 3]],
    pub edges: &'a UniqueEdgeMap,
    pub radial: &'a RadialTable,
    pub components: &'a Components,
    pub policy: SuccessorPolicy,
}

/// Faces of one component found on its outer hull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentHull {
    pub component: usize,
    /// Resolved faces, increasing.
    pub faces: Vec<usize>,
    /// Orientation of each entry of `faces`.
    pub flips: Vec<bool>,
    /// Half-edges in the order they were marked visited.
    pub visited: Vec<usize>,
    /// Faces of the component the walk never reached.
    pub unreached: Vec<usize>,
}

impl ComponentHull {
    /// Faces in their outward winding.
    pub fn oriented_faces(&self, faces: &[[usize; 3]]) -> Vec<[usize; 3]> {
        self.faces
            .iter()
            .zip(&self.flips)
            .map(|(&f, &flip)| {
                let [a, b, c] = faces[f];
                if flip { [c, b, a] } else { [a, b, c] }
            })
            .collect()
    }
}

/// Per-component walk state, indexed by position in the member list.
struct WalkState<'a> {
    components: &'a Components,
    resolved: Vec<bool>,
    flip: Vec<bool>,
    visited: Vec<bool>,
    visit_order: Vec<usize>,
}

impl<'a> WalkState<'a> {
    fn new(components: &'a Components, component: usize) -> Self {
        let n = components.members[component].len();
        Self {
            components,
            resolved: vec![false; n],
            flip: vec![false; n],
            visited: vec![false; 3 * n],
            visit_order: Vec::with_capacity(3 * n),
        }
    }

    #[inline]
    fn local(&self, face: usize) -> usize {
        self.components.local_index[face]
    }

    #[inline]
    fn local_he(&self, he: usize) -> usize {
        3 * self.local(face_of(he)) + corner_of(he)
    }

    fn is_resolved(&self, face: usize) -> bool {
        self.resolved[self.local(face)]
    }

    fn flip_of(&self, face: usize) -> bool {
        self.flip[self.local(face)]
    }

    fn resolve(&mut self, face: usize, flip: bool) {
        let l = self.local(face);
        self.resolved[l] = true;
        self.flip[l] = flip;
    }

    fn is_visited(&self, he: usize) -> bool {
        self.visited[self.local_he(he)]
    }

    fn visit(&mut self, he: usize) {
        let l = self.local_he(he);
        debug_assert!(!self.visited[l], "half-edge {he} visited twice");
        self.visited[l] = true;
        self.visit_order.push(he);
    }
}

/// Walks the outer surface of `component` starting from `seed`, which must
/// belong to it.
///
/// At every dequeued half-edge the radial fan of its edge is rotated away
/// from the current face (direction set by the half-edge's consistency and
/// the face's orientation) and the walk crosses into the first face not yet
/// resolved. The crossed face inherits the orientation if it traverses the
/// shared edge opposite to the current face, and the reverse otherwise.
pub fn traverse_component(ctx: &TraversalContext<'_>, component: usize, seed: Seed) -> ComponentHull {
    let mut state = WalkState::new(ctx.components, component);
    let mut queue: VecDeque<usize> = VecDeque::new();

    state.resolve(seed.face, seed.flip);
    queue.extend((0..3).map(|c| half_edge(seed.face, c)));

    while let Some(he) = queue.pop_front() {
        if state.is_visited(he) {
            continue;
        }
        state.visit(he);

        let f = face_of(he);
        let flip = state.flip_of(f);
        let e = ctx.edges.edge_of[he];
        let fan = &ctx.radial.order[e];
        let val = fan.len();
        let pos = ctx.radial.position[he];
        let forward = ctx.radial.consistent[e][pos] != flip;

        let next = (1..=ctx.policy.max_steps(val))
            .map(|step| {
                if forward {
                    (pos + step) % val
                } else {
                    (pos + val - step) % val
                }
            })
            .map(|i| fan[i])
            .find(|&n| !state.is_resolved(face_of(n)));
        let Some(nhe) = next else {
            continue;
        };

        // Consistent neighbours run the shared edge the other way.
        let nf = face_of(nhe);
        let (src, _) = half_edge_endpoints(ctx.faces, he);
        let (_, ndst) = half_edge_endpoints(ctx.faces, nhe);
        let nflip = if src == ndst { flip } else { !flip };

        state.resolve(nf, nflip);
        state.visit(nhe);
        trace!("component {component}: {f} -> {nf} across edge {e} (flip {nflip})");

        let nc = corner_of(nhe);
        for k in 1..3 {
            let h = half_edge(nf, (nc + k) % 3);
            if !state.is_visited(h) {
                queue.push_back(h);
            }
        }
    }

    let members = &ctx.components.members[component];
    let mut faces = Vec::new();
    let mut flips = Vec::new();
    let mut unreached = Vec::new();
    for (l, &f) in members.iter().enumerate() {
        if state.resolved[l] {
            faces.push(f);
            flips.push(state.flip[l]);
        } else {
            unreached.push(f);
        }
    }

    ComponentHull {
        component,
        faces,
        flips,
        visited: state.visit_order,
        unreached,
    }
}
