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

use crate::{geometry::point::Point3, numeric::scalar::Scalar};

/// An axis-aligned bounding box in 3D.
#[derive(Clone, Debug, PartialEq)]
pub struct Aabb<T: Scalar> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Aabb<T> {
    pub fn new(min: Point3<T>, max: Point3<T>) -> Self {
        Aabb { min, max }
    }

    pub fn min(&self) -> &Point3<T> {
        &self.min
    }

    /// Access the maximum corner.
    pub fn max(&self) -> &Point3<T> {
        &self.max
    }

    /// Degenerate box around a single point.
    pub fn from_point(p: &Point3<T>) -> Self {
        Aabb::new(p.clone(), p.clone())
    }

    /// Smallest box containing every point, `None` when there are none.
    pub fn from_points<'p, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'p Point3<T>>,
    {
        let mut it = points.into_iter();
        let mut bb = Aabb::from_point(it.next()?);
        for p in it {
            bb.expand(p);
        }
        Some(bb)
    }

    pub fn expand(&mut self, p: &Point3<T>) {
        self.min = Point3 {
            x: min_of(&self.min.x, &p.x),
            y: min_of(&self.min.y, &p.y),
            z: min_of(&self.min.z, &p.z),
        };
        self.max = Point3 {
            x: max_of(&self.max.x, &p.x),
            y: max_of(&self.max.y, &p.y),
            z: max_of(&self.max.z, &p.z),
        };
    }

    pub fn union(&self, other: &Aabb<T>) -> Aabb<T> {
        let mut bb = self.clone();
        bb.expand(&other.min);
        bb.expand(&other.max);
        bb
    }

    /// Does this AABB intersect `other`? Touching boxes intersect.
    pub fn intersects(&self, other: &Aabb<T>) -> bool {
        for i in 0..3 {
            if self.max[i] < other.min[i] {
                return false;
            }
            if other.max[i] < self.min[i] {
                return false;
            }
        }
        true
    }

    pub fn contains(&self, p: &Point3<T>) -> bool {
        (0..3).all(|i| self.min[i] <= p[i] && p[i] <= self.max[i])
    }
}

#[inline(always)]
fn min_of<T: Scalar>(a: &T, b: &T) -> T {
    if b < a { b.clone() } else { a.clone() }
}

#[inline(always)]
fn max_of<T: Scalar>(a: &T, b: &T) -> T {
    if b > a { b.clone() } else { a.clone() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(x: f64, y: f64, z: f64) -> Point3<f64> {
        Point3::new(x, y, z)
    }

    #[test]
    fn touching_boxes_overlap() {
        let a = Aabb::from_points([&p(0.0, 0.0, 0.0), &p(1.0, 1.0, 1.0)]).unwrap();
        let b = Aabb::from_points([&p(1.0, 0.0, 0.0), &p(2.0, 1.0, 1.0)]).unwrap();
        let c = Aabb::from_points([&p(1.5, 0.0, 0.0), &p(2.0, 1.0, 1.0)]).unwrap();
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn union_covers_both() {
        let a = Aabb::from_points([&p(0.0, 0.0, 0.0)]).unwrap();
        let b = Aabb::from_points([&p(-1.0, 2.0, 3.0)]).unwrap();
        let u = a.union(&b);
        assert!(u.contains(&p(-0.5, 1.0, 1.0)));
        assert_eq!(u.min, p(-1.0, 0.0, 0.0));
        assert_eq!(u.max, p(0.0, 2.0, 3.0));
    }

    #[test]
    fn empty_input_has_no_box() {
        let none: [&Point3<f64>; 0] = [];
        assert!(Aabb::from_points(none).is_none());
    }
}
