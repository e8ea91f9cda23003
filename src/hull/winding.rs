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

use std::f64::consts::PI;

use crate::{
    geometry::{point::Point3, vector::Vector3},
    hull::oracle::PointInSolid,
    mesh::soup::TriangleSoup,
    numeric::scalar::Scalar,
};

/// Containment by generalized winding number.
///
/// Sums the signed solid angles of the surface triangles as seen from the
/// query point. The sum is ±1 inside a closed surface and 0 outside, so any
/// threshold in between separates the two; orientation of the surface does
/// not matter since only the magnitude is tested.
#[derive(Debug, Clone, Copy)]
pub struct WindingNumber {
    pub threshold: f64,
}

impl Default for WindingNumber {
    fn default() -> Self {
        Self { threshold: 0.5 }
    }
}

impl WindingNumber {
    pub fn winding_number<T: Scalar>(
        soup: &TriangleSoup<T>,
        surface: &[[usize; 3]],
        point: &Point3<T>,
    ) -> f64 {
        let p = point.to_f64();
        let rel = |v: usize| {
            let q = soup.vertices[v].to_f64();
            Vector3::new(q[0] - p[0], q[1] - p[1], q[2] - p[2])
        };

        let total: f64 = surface
            .iter()
            .map(|&[a, b, c]| solid_angle(&rel(a), &rel(b), &rel(c)))
            .sum();
        total / (4.0 * PI)
    }
}

/// Signed solid angle of a triangle given relative to the viewpoint
/// (Van Oosterom and Strackee).
fn solid_angle(a: &Vector3<f64>, b: &Vector3<f64>, c: &Vector3<f64>) -> f64 {
    let (la, lb, lc) = (
        a.norm_squared().sqrt(),
        b.norm_squared().sqrt(),
        c.norm_squared().sqrt(),
    );
    let det = a.dot(&b.cross(c));
    let denom = la * lb * lc + a.dot(b) * lc + b.dot(c) * la + c.dot(a) * lb;
    2.0 * det.atan2(denom)
}

impl<T: Scalar> PointInSolid<T> for WindingNumber {
    fn inside(&self, soup: &TriangleSoup<T>, surface: &[[usize; 3]], point: &Point3<T>) -> bool {
        Self::winding_number(soup, surface, point).abs() > self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn tetra() -> TriangleSoup<f64> {
        TriangleSoup::from_f64(
            &[
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [0.0, 1.0, 0.0],
                [0.0, 0.0, 1.0],
            ],
            &[[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]],
        )
        .unwrap()
    }

    #[test]
    fn winding_is_one_inside_zero_outside() {
        let soup = tetra();
        let inside = Point3::new(0.1, 0.1, 0.1);
        let outside = Point3::new(2.0, 2.0, 2.0);
        assert_relative_eq!(
            WindingNumber::winding_number(&soup, &soup.faces, &inside),
            1.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            WindingNumber::winding_number(&soup, &soup.faces, &outside),
            0.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn inverted_surface_still_contains() {
        let soup = tetra();
        let inverted: Vec<[usize; 3]> = soup.faces.iter().map(|&[a, b, c]| [c, b, a]).collect();
        let p = Point3::new(0.2, 0.2, 0.2);
        assert_relative_eq!(
            WindingNumber::winding_number(&soup, &inverted, &p),
            -1.0,
            epsilon = 1e-9
        );
        assert!(WindingNumber::default().inside(&soup, &inverted, &p));
    }

    #[test]
    fn batch_matches_single_queries() {
        let soup = tetra();
        let pts = [Point3::new(0.1, 0.2, 0.1), Point3::new(-1.0, 0.0, 0.0)];
        let oracle = WindingNumber::default();
        assert_eq!(oracle.inside_all(&soup, &soup.faces, &pts), vec![true, false]);
    }
}
