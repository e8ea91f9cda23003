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

//! Error types for outer hull extraction.
//!
//! Every failure is fatal and reported to the caller: input that is not a
//! valid triangle soup, and broken invariants coming from upstream (an
//! inconsistent arrangement or a misbehaving oracle). Degenerate geometry is
//! never an error.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HullError {
    /// Flat index array whose length is not a multiple of three.
    #[error("index array length {len} is not a multiple of 3")]
    IndexCountMismatch { len: usize },

    /// Flat coordinate array whose length is not a multiple of three.
    #[error("coordinate array length {len} is not a multiple of 3")]
    CoordinateCountMismatch { len: usize },

    #[error("vertex {vertex} has a non-finite coordinate")]
    NonFiniteCoordinate { vertex: usize },

    #[error("face {face} references vertex {vertex}, but there are only {vertex_count} vertices")]
    VertexOutOfRange {
        face: usize,
        vertex: usize,
        vertex_count: usize,
    },

    /// A triangle repeating one of its vertex indices.
    #[error("face {face} is degenerate: vertex {vertex} appears more than once")]
    DegenerateFace { face: usize, vertex: usize },

    /// The radial order oracle returned something that is not a cyclic order
    /// of the edge's incidence list.
    #[error("malformed radial order around edge {edge}: {reason}")]
    MalformedRadialOrder { edge: usize, reason: String },

    #[error("outer facet selector returned face {face}, which is not in component {component}")]
    InvalidSeed { component: usize, face: usize },

    #[error("no outer facet could be selected for component {component}")]
    NoOuterFacet { component: usize },

    /// Traversal terminated with faces of the component unresolved. Only
    /// raised when full traversal is required.
    #[error("component {component}: {unreached} faces unreached by traversal (first: face {face})")]
    UnreachedFaces {
        component: usize,
        face: usize,
        unreached: usize,
    },
}

pub type HullResult<T> = Result<T, HullError>;
