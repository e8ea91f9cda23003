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

use std::{
    cmp::Ordering,
    fmt,
    ops::{Add, Div, Mul, Neg, Sub},
};

use num_traits::{One, ToPrimitive, Zero};
use rug::Rational;

use crate::numeric::scalar::Scalar;

/// Exact rational scalar. Every predicate in `kernel` runs on this field.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct HullRational(pub Rational);

impl HullRational {
    pub fn cmp0(&self) -> Ordering {
        self.0.cmp0()
    }
}

macro_rules! impl_rational_op {
    ($trait:ident, $method:ident, $assign:tt) => {
        impl<'a, 'b> $trait<&'b HullRational> for &'a HullRational {
            type Output = HullRational;

            fn $method(self, rhs: &'b HullRational) -> HullRational {
                // in-place API on rug::Rational: result = self op rhs
                let mut result = self.0.clone();
                result $assign &rhs.0;
                HullRational(result)
            }
        }

        impl $trait for HullRational {
            type Output = HullRational;

            fn $method(mut self, rhs: HullRational) -> HullRational {
                self.0 $assign &rhs.0;
                self
            }
        }
    };
}

impl_rational_op!(Add, add, +=);
impl_rational_op!(Sub, sub, -=);
impl_rational_op!(Mul, mul, *=);
impl_rational_op!(Div, div, /=);

impl Neg for HullRational {
    type Output = HullRational;

    fn neg(self) -> HullRational {
        HullRational(-self.0)
    }
}

impl<'a> Neg for &'a HullRational {
    type Output = HullRational;

    fn neg(self) -> HullRational {
        HullRational(-self.0.clone())
    }
}

impl Zero for HullRational {
    fn zero() -> Self {
        HullRational(Rational::new())
    }

    fn is_zero(&self) -> bool {
        self.0.cmp0() == Ordering::Equal
    }
}

impl One for HullRational {
    fn one() -> Self {
        HullRational(Rational::from(1))
    }
}

impl ToPrimitive for HullRational {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.0.to_f64().to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.0.to_f64())
    }
}

impl From<i32> for HullRational {
    fn from(value: i32) -> Self {
        HullRational(Rational::from(value))
    }
}

impl From<f64> for HullRational {
    /// Exact conversion; non-finite input maps to zero; soups reject those
    /// before they reach any predicate.
    fn from(value: f64) -> Self {
        HullRational(Rational::from_f64(value).unwrap_or_default())
    }
}

impl From<Rational> for HullRational {
    fn from(value: Rational) -> Self {
        HullRational(value)
    }
}

impl fmt::Display for HullRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Scalar for HullRational {
    fn from_num_den(num: i32, den: i32) -> Self {
        HullRational(Rational::from((num, den)))
    }

    fn to_exact(&self) -> HullRational {
        self.clone()
    }

    fn sign(&self) -> Ordering {
        self.0.cmp0()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_exact() {
        let third = HullRational::from_num_den(1, 3);
        let sum = &(&third + &third) + &third;
        assert!(sum.is_one());
        assert!((&sum - &HullRational::one()).is_zero());
    }

    #[test]
    fn sign_and_negation() {
        let x = HullRational::from(-2.5);
        assert_eq!(x.sign(), Ordering::Less);
        assert_eq!((-&x).sign(), Ordering::Greater);
        assert_eq!(HullRational::zero().sign(), Ordering::Equal);
    }

    #[test]
    fn non_finite_maps_to_zero() {
        assert!(HullRational::from(f64::NAN).is_zero());
        assert_eq!(HullRational::from(0.5).to_f64(), Some(0.5));
    }
}
