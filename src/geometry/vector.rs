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
    array::from_fn,
    ops::{Add, Index, Neg, Sub},
};

use crate::{geometry::point::Point, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Scalar, const N: usize>(pub Point<T, N>);

pub trait VectorOps<T: Scalar, const N: usize>: Sized {
    fn dot(&self, other: &Self) -> T;
    fn norm2(&self) -> T;
    fn norm(&self) -> T;
    /// Unit vector; a vector shorter than the tolerance is returned unchanged.
    fn normalized(&self) -> Self;
    fn scale(&self, s: T) -> Self;
    /// Unsigned angle in radians, in `[0, pi]`. Zero when either vector vanishes.
    fn angle_rad(&self, other: &Self) -> T;
}

pub trait Cross3<T: Scalar> {
    fn cross(&self, other: &Self) -> Self;
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    pub fn zero() -> Self {
        Vector(Point::default())
    }

    pub fn is_zero(&self) -> bool {
        self.norm2() <= T::tolerance_squared()
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl<T: Scalar> Vector<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Vector(Point::new(x, y, z))
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.0.coords[i]
    }
}

impl<T: Scalar, const N: usize> VectorOps<T, N> for Vector<T, N> {
    fn dot(&self, other: &Self) -> T {
        (0..N).fold(T::zero(), |acc, i| acc + self[i] * other[i])
    }

    fn norm2(&self) -> T {
        self.dot(self)
    }

    fn norm(&self) -> T {
        self.norm2().sqrt()
    }

    fn normalized(&self) -> Self {
        let n = self.norm();
        if n <= T::tolerance() {
            return *self;
        }
        self.scale(T::one() / n)
    }

    fn scale(&self, s: T) -> Self {
        Vector(Point {
            coords: from_fn(|i| self[i] * s),
        })
    }

    fn angle_rad(&self, other: &Self) -> T {
        let n = self.norm() * other.norm();
        if n <= T::tolerance_squared() {
            return T::zero();
        }
        // clamp: rounding may push the cosine slightly outside [-1, 1]
        let cos = (self.dot(other) / n).max(-T::one()).min(T::one());
        cos.acos()
    }
}

impl<T: Scalar> Cross3<T> for Vector<T, 3> {
    fn cross(&self, other: &Self) -> Self {
        Vector::new(
            self[1] * other[2] - self[2] * other[1],
            self[2] * other[0] - self[0] * other[2],
            self[0] * other[1] - self[1] * other[0],
        )
    }
}

impl<T: Scalar, const N: usize> Add for Vector<T, N> {
    type Output = Vector<T, N>;
    fn add(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(&self.0 + &rhs.0)
    }
}

impl<T: Scalar, const N: usize> Sub for Vector<T, N> {
    type Output = Vector<T, N>;
    fn sub(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(&self.0 - &rhs.0)
    }
}

impl<T: Scalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;
    fn neg(self) -> Self::Output {
        self.scale(-T::one())
    }
}

pub type Vector3<T> = Vector<T, 3>;
