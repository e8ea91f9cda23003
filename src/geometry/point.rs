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

use std::ops::{Index, Sub};

use crate::{
    geometry::vector::Vector3,
    numeric::{
        hull_rational::HullRational,
        scalar::{RefOps, Scalar},
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Point3<T: Scalar> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    pub fn new<X, Y, Z>(x: X, y: Y, z: Z) -> Self
    where
        X: Into<T>,
        Y: Into<T>,
        Z: Into<T>,
    {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn from_vals(vals: [f64; 3]) -> Self {
        Self::new(vals[0], vals[1], vals[2])
    }

    pub fn coords(&self) -> [&T; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn to_exact(&self) -> Point3<HullRational> {
        Point3 {
            x: self.x.to_exact(),
            y: self.y.to_exact(),
            z: self.z.to_exact(),
        }
    }

    pub fn to_f64(&self) -> [f64; 3] {
        [
            self.x.to_f64().unwrap_or(f64::NAN),
            self.y.to_f64().unwrap_or(f64::NAN),
            self.z.to_f64().unwrap_or(f64::NAN),
        ]
    }

    /// Lexicographic (x, y, z) comparison.
    pub fn lex_cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .partial_cmp(&other.x)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| self.y.partial_cmp(&other.y).unwrap_or(std::cmp::Ordering::Equal))
            .then_with(|| self.z.partial_cmp(&other.z).unwrap_or(std::cmp::Ordering::Equal))
    }

    pub fn as_vector(&self) -> Vector3<T> {
        Vector3::new(self.x.clone(), self.y.clone(), self.z.clone())
    }

    /// Barycenter of a triangle.
    pub fn barycenter(a: &Self, b: &Self, c: &Self) -> Self
    where
        for<'a> &'a T: RefOps<T>,
    {
        let third = T::from_num_den(1, 3);
        Point3 {
            x: &(&(&a.x + &b.x) + &c.x) * &third,
            y: &(&(&a.y + &b.y) + &c.y) * &third,
            z: &(&(&a.z + &b.z) + &c.z) * &third,
        }
    }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;

    fn index(&self, i: usize) -> &T {
        self.coords()[i]
    }
}

impl<'a, 'b, T: Scalar> Sub<&'b Point3<T>> for &'a Point3<T>
where
    for<'x> &'x T: RefOps<T>,
{
    type Output = Vector3<T>;

    fn sub(self, rhs: &'b Point3<T>) -> Vector3<T> {
        Vector3 {
            x: &self.x - &rhs.x,
            y: &self.y - &rhs.y,
            z: &self.z - &rhs.z,
        }
    }
}
