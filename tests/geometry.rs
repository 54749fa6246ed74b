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

use integral_curve::geometry::{
    point::{Point3, PointOps},
    util::{tet_volume6, triangle_area, triangle_law_of_sines, triangle_normal},
    vector::{Cross3, Vector3, VectorOps},
};

#[test]
fn point_vector_arithmetic() {
    let p = Point3::new(1.0, 2.0, 3.0);
    let q = Point3::new(4.0, 6.0, 3.0);

    let v = p.vector_to(&q);
    assert_eq!(v, Vector3::new(3.0, 4.0, 0.0));
    assert_eq!(v.norm(), 5.0);
    assert_eq!(p.distance_to(&q), 5.0);
    assert_eq!(p.add_vector(&v), q);
    assert_eq!(p.midpoint(&q), Point3::new(2.5, 4.0, 3.0));
}

#[test]
fn normalized_and_angles() {
    let x = Vector3::new(2.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 3.0, 0.0);

    assert_eq!(x.normalized(), Vector3::new(1.0, 0.0, 0.0));
    assert!((x.angle_rad(&y) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    assert!((x.angle_rad(&(-x)) - std::f64::consts::PI).abs() < 1e-12);
    assert_eq!(x.angle_rad(&x), 0.0);

    // a vanishing vector has no direction
    let zero = Vector3::<f64>::zero();
    assert_eq!(zero.normalized(), zero);
    assert_eq!(zero.angle_rad(&x), 0.0);
}

#[test]
fn cross_product_right_handed() {
    let x = Vector3::new(1.0, 0.0, 0.0);
    let y = Vector3::new(0.0, 1.0, 0.0);
    assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    assert_eq!(y.cross(&x), Vector3::new(0.0, 0.0, -1.0));
}

#[test]
fn centroid_of_points() {
    let pts = [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(3.0, 0.0, 0.0),
        Point3::new(0.0, 3.0, 0.0),
    ];
    assert_eq!(Point3::centroid(pts.iter()), Some(Point3::new(1.0, 1.0, 0.0)));
    assert_eq!(Point3::<f64>::centroid(std::iter::empty()), None);
}

#[test]
fn triangle_helpers() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(2.0, 0.0, 0.0);
    let c = Point3::new(0.0, 2.0, 0.0);

    assert_eq!(triangle_normal(&a, &b, &c), Vector3::new(0.0, 0.0, 4.0));
    assert_eq!(triangle_area(&a, &b, &c), 2.0);

    // 30-60-90 triangle: the side opposite 30 degrees is half the hypotenuse
    let side = triangle_law_of_sines(
        std::f64::consts::FRAC_PI_2,
        std::f64::consts::FRAC_PI_6,
        2.0,
    );
    assert!((side - 1.0).abs() < 1e-12);
}

#[test]
fn tet_volume_sign_follows_orientation() {
    let a = Point3::new(0.0, 0.0, 0.0);
    let b = Point3::new(1.0, 0.0, 0.0);
    let c = Point3::new(0.0, 1.0, 0.0);
    let d = Point3::new(0.0, 0.0, 1.0);
    assert_eq!(tet_volume6(&a, &b, &c, &d), 1.0);
    assert_eq!(tet_volume6(&a, &c, &b, &d), -1.0);
}

#[test]
fn works_in_single_precision() {
    let p = Point3::new(0.0f32, 0.0, 0.0);
    let q = Point3::new(0.0f32, 3.0, 4.0);
    assert_eq!(p.distance_to(&q), 5.0f32);
}
