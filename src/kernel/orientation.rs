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

use rug::Rational;

use crate::{
    geometry::{
        point::{Point3, PointOps},
        vector::{Cross3, VectorOps},
    },
    numeric::scalar::Scalar,
};

/// Relative error bound of the floating-point `orient3d` evaluation below.
const ORIENT3D_ERR_BOUND: f64 = 8.0 * f64::EPSILON;

/// Returns `((b - a) x (c - a)) . (d - a)`:
/// - >0 if `d` lies above the plane of the counter-clockwise triangle `abc`
/// - <0 if below
/// - =0 if coplanar
pub fn orient3d<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> T {
    a.vector_to(b).cross(&a.vector_to(c)).dot(&a.vector_to(d))
}

/// Sign of [`orient3d`], decided in `f64` when the result clears the error
/// bound and recomputed with exact rationals otherwise.
pub fn orient3d_sign<T: Scalar>(a: &Point3<T>, b: &Point3<T>, c: &Point3<T>, d: &Point3<T>) -> i8 {
    let p = |q: &Point3<T>| [q[0].as_f64(), q[1].as_f64(), q[2].as_f64()];
    let (a, b, c, d) = (p(a), p(b), p(c), p(d));

    let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let ad = [d[0] - a[0], d[1] - a[1], d[2] - a[2]];

    let m0 = ab[1] * ac[2] - ab[2] * ac[1];
    let m1 = ab[2] * ac[0] - ab[0] * ac[2];
    let m2 = ab[0] * ac[1] - ab[1] * ac[0];
    let det = m0 * ad[0] + m1 * ad[1] + m2 * ad[2];

    let permanent = ((ab[1] * ac[2]).abs() + (ab[2] * ac[1]).abs()) * ad[0].abs()
        + ((ab[2] * ac[0]).abs() + (ab[0] * ac[2]).abs()) * ad[1].abs()
        + ((ab[0] * ac[1]).abs() + (ab[1] * ac[0]).abs()) * ad[2].abs();

    if det.is_finite() && det.abs() > ORIENT3D_ERR_BOUND * permanent {
        return if det > 0.0 { 1 } else { -1 };
    }

    orient3d_exact(&a, &b, &c, &d).unwrap_or_else(|| {
        if det > 0.0 {
            1
        } else if det < 0.0 {
            -1
        } else {
            0
        }
    })
}

/// Exact sign using GMP rationals. `None` if any coordinate is not finite.
fn orient3d_exact(a: &[f64; 3], b: &[f64; 3], c: &[f64; 3], d: &[f64; 3]) -> Option<i8> {
    let q = |p: &[f64; 3]| -> Option<[Rational; 3]> {
        Some([
            Rational::from_f64(p[0])?,
            Rational::from_f64(p[1])?,
            Rational::from_f64(p[2])?,
        ])
    };
    let (a, b, c, d) = (q(a)?, q(b)?, q(c)?, q(d)?);

    let diff = |u: &[Rational; 3], v: &[Rational; 3]| -> [Rational; 3] {
        [
            u[0].clone() - &v[0],
            u[1].clone() - &v[1],
            u[2].clone() - &v[2],
        ]
    };
    let ab = diff(&b, &a);
    let ac = diff(&c, &a);
    let ad = diff(&d, &a);

    let m0 = ab[1].clone() * &ac[2] - ab[2].clone() * &ac[1];
    let m1 = ab[2].clone() * &ac[0] - ab[0].clone() * &ac[2];
    let m2 = ab[0].clone() * &ac[1] - ab[1].clone() * &ac[0];
    let det = m0 * &ad[0] + m1 * &ad[1] + m2 * &ad[2];

    Some(match det.cmp0() {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Less => -1,
        std::cmp::Ordering::Equal => 0,
    })
}

#[cfg(test)]
mod tests {
    use crate::geometry::point::Point3;
    use crate::kernel::orientation::{orient3d, orient3d_sign};

    #[test]
    fn orientation_3d_positive_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, 1.0); // above the abc plane

        assert!(orient3d(&a, &b, &c, &d) > 0.0);
        assert_eq!(orient3d_sign(&a, &b, &c, &d), 1);
    }

    #[test]
    fn orientation_3d_negative_volume() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(0.0, 0.0, -1.0); // below the abc plane

        assert!(orient3d(&a, &b, &c, &d) < 0.0);
        assert_eq!(orient3d_sign(&a, &b, &c, &d), -1);
    }

    #[test]
    fn orientation_3d_coplanar_is_exactly_zero() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 0.0, 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        let d = Point3::new(1.0, 1.0, 0.0); // lies in the same z=0 plane

        assert_eq!(orient3d_sign(&a, &b, &c, &d), 0);
    }

    #[test]
    fn orientation_3d_tilted_plane() {
        // a, b, c, d lie on x + y + z = 1; e sits 2^-40 above it
        let a = Point3::new(0.5, 0.25, 0.25);
        let b = Point3::new(0.25, 0.5, 0.25);
        let c = Point3::new(0.25, 0.25, 0.5);
        let d = Point3::new(0.125, 0.375, 0.5);
        let e = Point3::new(0.125, 0.375, 0.5 + 2f64.powi(-40));

        assert_eq!(orient3d_sign(&a, &b, &c, &d), 0);
        assert_eq!(orient3d_sign(&a, &b, &c, &e), 1);
        assert_eq!(orient3d_sign(&a, &c, &b, &e), -1);
    }
}
