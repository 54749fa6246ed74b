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

use integral_curve::geometry::point::Point3;
use integral_curve::kernel::{coincident, orient3d, orient3d_sign};

#[test]
fn orientation_3d_positive_volume() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let d = Point3::new(0.0, 0.0, 1.0);

    assert!(orient3d(&a, &b, &c, &d) > 0.0);
    assert_eq!(orient3d_sign(&a, &b, &c, &d), 1);
}

#[test]
fn orientation_3d_negative_volume() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let d = Point3::new(0.0, 0.0, -1.0);

    assert!(orient3d(&a, &b, &c, &d) < 0.0);
    assert_eq!(orient3d_sign(&a, &b, &c, &d), -1);
}

#[test]
fn orientation_3d_coplanar_is_exactly_zero() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let d = Point3::new(1.0, 1.0, 0.0);

    assert_eq!(orient3d_sign(&a, &b, &c, &d), 0);
}

#[test]
fn orientation_sign_survives_large_offsets() {
    // far from the origin the height above the plane is a few ulps
    let off = 1.0e8;
    let a = Point3::new(off, off, off);
    let b = Point3::new(off + 1.0, off, off);
    let c = Point3::new(off, off + 1.0, off);
    let above = Point3::new(off + 0.5, off + 0.5, off + 1.0e-7);
    let on = Point3::new(off + 0.5, off + 0.5, off);

    assert_eq!(orient3d_sign(&a, &b, &c, &above), 1);
    assert_eq!(orient3d_sign(&a, &b, &c, &on), 0);
}

#[test]
fn coincident_within_tolerance() {
    let a = Point3::new(1.0, 1.0, 1.0);
    let b = Point3::new(1.0, 1.0, 1.0 + 1.0e-13);
    let c = Point3::new(1.0, 1.0, 1.001);
    assert!(coincident(&a, &b));
    assert!(!coincident(&a, &c));
}
