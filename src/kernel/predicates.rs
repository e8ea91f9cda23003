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

use std::cmp::Ordering;

use crate::{
    geometry::vector::Vector3,
    numeric::scalar::{RefOps, Scalar},
};

/// Planar frame perpendicular to an oriented axis.
///
/// Angles are measured counter-clockwise about `axis` (right-hand rule),
/// starting at the reference direction. No division is ever performed, so
/// comparisons are exact on an exact field.
#[derive(Debug, Clone)]
pub struct AxisFrame<T: Scalar> {
    axis: Vector3<T>,
    axis_len2: T,
    u: Vector3<T>,
    w: Vector3<T>,
}

/// Position of a direction in an `AxisFrame`: half-plane class, then planar
/// coordinates. Class 0 is reserved for directions parallel to the axis.
#[derive(Debug, Clone)]
pub struct AngularKey<T: Scalar> {
    class: u8,
    x: T,
    y: T,
}

impl<T: Scalar> AngularKey<T> {
    /// Direction parallel to the axis, with no defined angle.
    pub fn is_parallel(&self) -> bool {
        self.class == 0
    }
}

impl<T: Scalar> AxisFrame<T>
where
    for<'a> &'a T: RefOps<T>,
{
    /// `None` when the axis is degenerate or the reference is parallel to it.
    pub fn new(axis: Vector3<T>, reference: &Vector3<T>) -> Option<Self> {
        if axis.is_zero() {
            return None;
        }
        let axis_len2 = axis.norm_squared();
        let u = project(&axis, &axis_len2, reference);
        if u.is_zero() {
            return None;
        }
        let w = axis.cross(&u);
        Some(Self { axis, axis_len2, u, w })
    }

    pub fn key(&self, v: &Vector3<T>) -> AngularKey<T> {
        let p = project(&self.axis, &self.axis_len2, v);
        let x = p.dot(&self.u);
        let y = p.dot(&self.w);
        let class = if x.is_zero() && y.is_zero() {
            0
        } else if y.is_positive() || (y.is_zero() && x.is_positive()) {
            1
        } else {
            2
        };
        AngularKey { class, x, y }
    }

    pub fn compare(&self, a: &Vector3<T>, b: &Vector3<T>) -> Ordering {
        compare_keys(&self.key(a), &self.key(b))
    }
}

/// Component of `v` perpendicular to `axis`, scaled by `|axis|²`.
fn project<T: Scalar>(axis: &Vector3<T>, axis_len2: &T, v: &Vector3<T>) -> Vector3<T>
where
    for<'a> &'a T: RefOps<T>,
{
    v.scale(axis_len2).sub(&axis.scale(&v.dot(axis)))
}

/// Total order on angular keys: increasing angle in `[0, 2π)`, directions
/// parallel to the axis first.
pub fn compare_keys<T: Scalar>(a: &AngularKey<T>, b: &AngularKey<T>) -> Ordering
where
    for<'x> &'x T: RefOps<T>,
{
    if a.class != b.class {
        return a.class.cmp(&b.class);
    }
    if a.class == 0 {
        return Ordering::Equal;
    }
    let cross = &(&a.x * &b.y) - &(&a.y * &b.x);
    cross.sign().reverse()
}

/// Indices of `dirs` sorted by angle about `axis`, starting at `reference`.
/// Exact ties keep their input order.
pub fn sort_around_axis<T: Scalar>(
    axis: &Vector3<T>,
    reference: &Vector3<T>,
    dirs: &[Vector3<T>],
) -> Option<Vec<usize>>
where
    for<'a> &'a T: RefOps<T>,
{
    let frame = AxisFrame::new(axis.clone(), reference)?;
    let keys: Vec<AngularKey<T>> = dirs.iter().map(|d| frame.key(d)).collect();
    let mut order: Vec<usize> = (0..dirs.len()).collect();
    order.sort_by(|&i, &j| compare_keys(&keys[i], &keys[j]));
    Some(order)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::hull_rational::HullRational;

    fn v(x: f64, y: f64, z: f64) -> Vector3<HullRational> {
        Vector3::new(x.into(), y.into(), z.into())
    }

    #[test]
    fn counter_clockwise_about_z() {
        let axis = v(0.0, 0.0, 1.0);
        let dirs = [
            v(0.0, -1.0, 0.5), // 270°
            v(1.0, 0.0, 0.0),  // 0°
            v(-1.0, 0.0, 2.0), // 180°
            v(0.0, 1.0, -3.0), // 90°
        ];
        let order = sort_around_axis(&axis, &v(1.0, 0.0, 0.0), &dirs).unwrap();
        assert_eq!(order, vec![1, 3, 2, 0]);
    }

    #[test]
    fn reference_rotates_the_start() {
        let axis = v(0.0, 0.0, 1.0);
        let dirs = [v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0), v(-1.0, 0.0, 0.0)];
        let order = sort_around_axis(&axis, &v(0.0, 1.0, 0.0), &dirs).unwrap();
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn coincident_directions_tie() {
        let axis = v(1.0, 1.0, 0.0);
        let frame = AxisFrame::new(axis, &v(0.0, 0.0, 1.0)).unwrap();
        assert_eq!(frame.compare(&v(0.0, 0.0, 2.0), &v(1.0, 1.0, 5.0)), Ordering::Equal);
        assert_eq!(frame.compare(&v(1.0, -1.0, 0.0), &v(-1.0, 1.0, 0.0)), Ordering::Less);
    }

    #[test]
    fn degenerate_frames_are_rejected() {
        assert!(AxisFrame::new(v(0.0, 0.0, 0.0), &v(1.0, 0.0, 0.0)).is_none());
        assert!(AxisFrame::new(v(0.0, 0.0, 1.0), &v(0.0, 0.0, -4.0)).is_none());
    }
}
