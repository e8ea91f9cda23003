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

//! Tunable behaviour of the hull extraction pipeline.

/// How the traversal picks the face to cross into at an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SuccessorPolicy {
    /// Only the fan entry adjacent to the current face is a candidate. If it
    /// is already resolved the edge yields no crossing, so coincident
    /// interior faces are never entered.
    #[default]
    Adjacent,
    /// Walk the radial fan away from the current face for up to valence
    /// steps and take the first face that is not resolved yet. Can enter
    /// interior faces when hull faces coincide.
    FirstUnresolved,
}

impl SuccessorPolicy {
    /// Number of fan steps examined at an edge of the given valence.
    pub fn max_steps(self, valence: usize) -> usize {
        match self {
            SuccessorPolicy::FirstUnresolved => valence,
            SuccessorPolicy::Adjacent => valence.min(1),
        }
    }
}

/// Options for [`HullExtractor`](crate::hull::HullExtractor).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HullOptions {
    pub successor: SuccessorPolicy,
    /// Fail with `UnreachedFaces` instead of dropping faces the traversal
    /// never reaches.
    pub require_full_traversal: bool,
    /// Order edges and traverse components on the rayon pool.
    pub parallel: bool,
}

impl Default for HullOptions {
    fn default() -> Self {
        Self {
            successor: SuccessorPolicy::default(),
            require_full_traversal: false,
            parallel: true,
        }
    }
}

impl HullOptions {
    pub fn with_successor(mut self, successor: SuccessorPolicy) -> Self {
        self.successor = successor;
        self
    }

    pub fn with_full_traversal(mut self, required: bool) -> Self {
        self.require_full_traversal = required;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sequential, strict settings; useful when debugging an arrangement.
    pub fn strict() -> Self {
        Self {
            successor: SuccessorPolicy::Adjacent,
            require_full_traversal: true,
            parallel: false,
        }
    }
}
