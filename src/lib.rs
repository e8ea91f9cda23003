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

//! Outer hull extraction for triangle soups.
//!
//! Given a soup that is already intersection-free (faces meet only along
//! shared edges and vertices), finds the faces visible from infinity and
//! orients them outward. Edges may be shared by any number of faces;
//! components nested inside other components are dropped.

pub mod config;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod io;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use config::{HullOptions, SuccessorPolicy};
pub use error::{HullError, HullResult};
pub use geometry::Point3;
pub use hull::{HullExtractor, OuterHull, outer_hull};
pub use mesh::TriangleSoup;
pub use numeric::{hull_rational::HullRational, scalar::Scalar};
