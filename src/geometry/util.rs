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

use crate::{
    geometry::{
        point::{Point3, PointOps},
        vector::{Cross3, Vector3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Length of the side opposite `angle_1`, given the side `length_0` opposite
/// `angle_0` in the same triangle.
#[inline(always)]
pub fn triangle_law_of_sines<T: Scalar>(angle_0: T, angle_1: T, length_0: T) -> T {
    length_0 * angle_1.sin() / angle_0.sin()
}

/// Unnormalized normal of triangle `(a, b, c)`, following its winding.
pub fn triangle_normal<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> Vector3<T> {
    a.vector_to(b).cross(&a.vector_to(c))
}

pub fn triangle_area<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>) -> T {
    triangle_normal(a, b, c).norm() / (T::one() + T::one())
}

/// Six times the signed volume of tetrahedron `(a, b, c, d)`.
pub fn tet_volume6<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    a.vector_to(b).cross(&a.vector_to(c)).dot(&a.vector_to(d))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn law_of_sines_right_isoceles() {
        // legs of length 1, hypotenuse opposite the right angle
        let hyp = triangle_law_of_sines(FRAC_PI_4, FRAC_PI_2, 1.0);
        assert!((hyp - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn unit_tet_volume() {
        let a: Point3<f64> = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0);
        assert!((tet_volume6(&a, &b, &c, &d) - 1.0).abs() < 1e-12);
        assert!((tet_volume6(&a, &c, &b, &d) + 1.0).abs() < 1e-12);
        assert!((triangle_area(&a, &b, &c) - 0.5).abs() < 1e-12);
    }
}
