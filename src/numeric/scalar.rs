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

use num_traits::{One, ToPrimitive, Zero};

use crate::numeric::hull_rational::HullRational;

use std::{
    cmp::Ordering,
    fmt::Debug,
    ops::{Add, Div, Mul, Neg, Sub},
};

/// Arithmetic on borrowed scalars, `&a - &b`, producing an owned `T`.
///
/// Generic code asks for `for<'a> &'a T: RefOps<T>` instead of spelling out
/// every operator bound.
pub trait RefOps<T>:
    Sized
    + Add<Self, Output = T>
    + Sub<Self, Output = T>
    + Mul<Self, Output = T>
    + Div<Self, Output = T>
    + Neg<Output = T>
{
}

impl<'a> RefOps<f64> for &'a f64 {}

impl<'a> RefOps<HullRational> for &'a HullRational {}

/// Coordinate field of a triangle soup.
pub trait Scalar:
    Clone
    + Debug
    + PartialEq
    + PartialOrd
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + Zero
    + One
    + ToPrimitive
    + From<i32>
    + From<f64>
    + 'static
{
    fn from_num_den(num: i32, den: i32) -> Self;

    /// Lift into the exact rational field. Lossless for every implementor.
    fn to_exact(&self) -> HullRational;

    /// Sign as an ordering against zero; NaN compares as zero.
    fn sign(&self) -> Ordering {
        self.partial_cmp(&Self::zero()).unwrap_or(Ordering::Equal)
    }

    fn is_positive(&self) -> bool {
        self.sign() == Ordering::Greater
    }

    fn is_negative(&self) -> bool {
        self.sign() == Ordering::Less
    }

    fn min(self, other: Self) -> Self {
        if self < other { self } else { other }
    }

    fn max(self, other: Self) -> Self {
        if self > other { self } else { other }
    }
}

impl Scalar for f64 {
    fn from_num_den(num: i32, den: i32) -> Self {
        num as f64 / den as f64
    }

    fn to_exact(&self) -> HullRational {
        HullRational::from(*self)
    }
}
