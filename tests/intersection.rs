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
    intersection::ray_triangle_intersection,
    point::Point3,
    vector::{Vector3, VectorOps},
};

fn unit_triangle() -> [Point3<f64>; 3] {
    [
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ]
}

#[test]
fn ray_hits_interior() {
    let [a, b, c] = unit_triangle();
    let o = Point3::new(0.25, 0.25, 1.0);
    let d = Vector3::new(0.0, 0.0, -1.0);

    let hit = ray_triangle_intersection(&o, &d, [&a, &b, &c]).expect("hit");
    assert!((hit.t - 1.0).abs() < 1e-12);
    assert!((hit.point[0] - 0.25).abs() < 1e-12);
    assert!(hit.point[2].abs() < 1e-12);
}

#[test]
fn ray_misses_outside() {
    let [a, b, c] = unit_triangle();
    let o = Point3::new(0.75, 0.75, 1.0);
    let d = Vector3::new(0.0, 0.0, -1.0);
    assert!(ray_triangle_intersection(&o, &d, [&a, &b, &c]).is_none());
}

#[test]
fn ray_pointing_away_misses() {
    let [a, b, c] = unit_triangle();
    let o = Point3::new(0.25, 0.25, 1.0);
    let d = Vector3::new(0.0, 0.0, 1.0);
    assert!(ray_triangle_intersection(&o, &d, [&a, &b, &c]).is_none());
}

#[test]
fn ray_through_edge_and_vertex_hits() {
    let [a, b, c] = unit_triangle();
    let d = Vector3::new(0.0, 0.0, -1.0);

    let on_edge = Point3::new(0.5, 0.0, 2.0);
    let hit = ray_triangle_intersection(&on_edge, &d, [&a, &b, &c]).expect("edge hit");
    assert!((hit.t - 2.0).abs() < 1e-12);

    let on_vertex = Point3::new(1.0, 0.0, 2.0);
    assert!(ray_triangle_intersection(&on_vertex, &d, [&a, &b, &c]).is_some());
}

#[test]
fn ray_from_vertex_hits_at_zero() {
    let [a, b, c] = unit_triangle();
    let d = Vector3::new(1.0, 1.0, 1.0).normalized();

    let hit = ray_triangle_intersection(&a, &d, [&a, &b, &c]).expect("hit at origin");
    assert_eq!(hit.t, 0.0);
    assert_eq!(hit.point, a);
}

#[test]
fn parallel_ray_never_hits() {
    let [a, b, c] = unit_triangle();
    let o = Point3::new(-1.0, 0.25, 0.0);
    let d = Vector3::new(1.0, 0.0, 0.0);
    assert!(ray_triangle_intersection(&o, &d, [&a, &b, &c]).is_none());
}
