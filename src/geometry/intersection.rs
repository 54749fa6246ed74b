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
        util::triangle_normal,
        vector::{Vector3, VectorOps},
    },
    kernel::orient3d_sign,
    numeric::scalar::Scalar,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit<T: Scalar> {
    /// Distance along the (unit) ray direction; never negative.
    pub t: T,
    pub point: Point3<T>,
}

/// Ray–triangle intersection.
///
/// Side tests use the exact `orient3d` sign of the ray line against each
/// triangle edge, so hits on edges and vertices are reported (a ray starting
/// on a vertex of the triangle hits it at `t = 0`). Rays parallel to the
/// triangle plane never hit.
pub fn ray_triangle_intersection<T: Scalar>(
    origin: &Point3<T>,
    dir: &Vector3<T>,
    triangle: [&Point3<T>; 3],
) -> Option<RayHit<T>> {
    let [a, b, c] = triangle;
    let q = origin.add_vector(dir);

    let s_ab = orient3d_sign(origin, &q, a, b);
    let s_bc = orient3d_sign(origin, &q, b, c);
    let s_ca = orient3d_sign(origin, &q, c, a);

    let has_pos = s_ab > 0 || s_bc > 0 || s_ca > 0;
    let has_neg = s_ab < 0 || s_bc < 0 || s_ca < 0;
    if has_pos && has_neg {
        return None; // line passes outside
    }
    if !has_pos && !has_neg {
        return None; // line lies in the triangle plane, or the triangle is degenerate
    }

    let n = triangle_normal(a, b, c);
    let denom = n.dot(dir);
    if denom.abs() <= T::query_tolerance() * n.norm() * dir.norm() {
        return None;
    }

    let t = n.dot(&origin.vector_to(a)) / denom;
    if t < -T::tolerance() {
        return None; // behind the origin
    }
    let t = t.max(T::zero());

    Some(RayHit {
        t,
        point: origin.add_vector(&dir.scale(t)),
    })
}
