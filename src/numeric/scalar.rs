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

use std::fmt::{Debug, Display};

use num_traits::{Float, ToPrimitive};

pub const EPS: f64 = 1e-10;

/// Floating-point coordinate type used by geometry, meshes and the tracer.
///
/// Tolerances live on the type so predicates built on `f32` and `f64` pick
/// thresholds that match their precision.
pub trait Scalar:
    Float + ToPrimitive + Debug + Display + Default + Send + Sync + 'static
{
    /// Distance below which two positions are treated as coincident.
    fn tolerance() -> Self;

    /// Threshold for sign decisions (sines, denominators, dot products).
    fn query_tolerance() -> Self;

    fn tolerance_squared() -> Self {
        let tol = Self::tolerance();
        tol * tol
    }

    /// Lossless widening used when handing values to the exact kernel.
    fn as_f64(&self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }

    fn from_f64(value: f64) -> Self;
}

impl Scalar for f64 {
    fn tolerance() -> Self {
        EPS
    }

    fn query_tolerance() -> Self {
        1e-12
    }

    fn from_f64(value: f64) -> Self {
        value
    }
}

impl Scalar for f32 {
    fn tolerance() -> Self {
        1e-5
    }

    fn query_tolerance() -> Self {
        1e-6
    }

    fn from_f64(value: f64) -> Self {
        value as f32
    }
}
