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

use std::collections::VecDeque;

use crate::mesh::adjacency::FaceAdjacency;

/// Partition of the faces into edge-connected components.
///
/// Components are numbered in order of their lowest face index and list
/// their faces in increasing order.
#[derive(Debug, Clone)]
pub struct Components {
    pub labels: Vec<usize>,
    pub members: Vec<Vec<usize>>,
    /// Position of every face inside its component's member list.
    pub local_index: Vec<usize>,
}

impl Components {
    pub fn label(adjacency: &FaceAdjacency) -> Self {
        let m = adjacency.face_count();
        let mut labels = vec![usize::MAX; m];
        let mut members: Vec<Vec<usize>> = Vec::new();
        let mut queue = VecDeque::new();

        for start in 0..m {
            if labels[start] != usize::MAX {
                continue;
            }
            let id = members.len();
            let mut faces = Vec::new();
            labels[start] = id;
            queue.push_back(start);
            while let Some(f) = queue.pop_front() {
                faces.push(f);
                for g in adjacency.neighbors(f) {
                    if labels[g] == usize::MAX {
                        labels[g] = id;
                        queue.push_back(g);
                    }
                }
            }
            faces.sort_unstable();
            members.push(faces);
        }

        let mut local_index = vec![0; m];
        for faces in &members {
            for (i, &f) in faces.iter().enumerate() {
                local_index[f] = i;
            }
        }

        Self {
            labels,
            members,
            local_index,
        }
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Number of faces in every component.
    pub fn counts(&self) -> Vec<usize> {
        self.members.iter().map(|m| m.len()).collect()
    }

    pub fn component_of(&self, face: usize) -> usize {
        self.labels[face]
    }
}
