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
    ops::{Add, Index, IndexMut, Sub},
};

use crate::{geometry::vector::Vector, numeric::scalar::Scalar};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point<T: Scalar, const N: usize> {
    pub coords: [T; N],
}

pub trait PointOps<T: Scalar, const N: usize>: Sized {
    fn as_vector(&self) -> Vector<T, N>;
    fn add_vector(&self, v: &Vector<T, N>) -> Self;
    fn vector_to(&self, other: &Self) -> Vector<T, N>;
    fn midpoint(&self, other: &Self) -> Self;
    fn distance_squared_to(&self, other: &Self) -> T;
    fn distance_to(&self, other: &Self) -> T;
}

impl<T: Scalar, const N: usize> Point<T, N> {
    pub fn is_finite(&self) -> bool {
        self.coords.iter().all(|c| c.is_finite())
    }

    /// Average of a set of points; `None` for an empty set.
    pub fn centroid<'a, I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Point<T, N>>,
    {
        let mut acc = [T::zero(); N];
        let mut count = 0usize;
        for p in points {
            for i in 0..N {
                acc[i] = acc[i] + p.coords[i];
            }
            count += 1;
        }
        if count == 0 {
            return None;
        }
        let inv = T::one() / T::from_f64(count as f64);
        Some(Point {
            coords: from_fn(|i| acc[i] * inv),
        })
    }
}

impl<T: Scalar> Point<T, 3> {
    pub fn new(x: T, y: T, z: T) -> Self {
        Point { coords: [x, y, z] }
    }
}

impl<T: Scalar, const N: usize> Default for Point<T, N> {
    fn default() -> Point<T, N> {
        Point {
            coords: [T::zero(); N],
        }
    }
}

impl<T: Scalar, const N: usize> Index<usize> for Point<T, N> {
    type Output = T;
    fn index(&self, i: usize) -> &Self::Output {
        &self.coords[i]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Point<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        &mut self.coords[i]
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Add<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn add(self, rhs: &'b Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] + rhs.coords[i]),
        }
    }
}

impl<'a, 'b, T: Scalar, const N: usize> Sub<&'b Point<T, N>> for &'a Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: &'b Point<T, N>) -> Self::Output {
        Point {
            coords: from_fn(|i| self.coords[i] - rhs.coords[i]),
        }
    }
}

impl<T: Scalar, const N: usize> Sub for Point<T, N> {
    type Output = Point<T, N>;
    fn sub(self, rhs: Point<T, N>) -> Self::Output {
        &self - &rhs
    }
}

impl<T: Scalar, const N: usize> PointOps<T, N> for Point<T, N> {
    fn as_vector(&self) -> Vector<T, N> {
        Vector(*self)
    }

    fn add_vector(&self, v: &Vector<T, N>) -> Self {
        Point {
            coords: from_fn(|i| self.coords[i] + v.0.coords[i]),
        }
    }

    fn vector_to(&self, other: &Self) -> Vector<T, N> {
        (other - self).as_vector()
    }

    fn midpoint(&self, other: &Self) -> Self {
        let two = T::one() + T::one();
        Point {
            coords: from_fn(|i| (self.coords[i] + other.coords[i]) / two),
        }
    }

    fn distance_squared_to(&self, other: &Self) -> T {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .fold(T::zero(), |acc, (a, b)| {
                let d = *a - *b;
                acc + d * d
            })
    }

    fn distance_to(&self, other: &Self) -> T {
        self.distance_squared_to(other).sqrt()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Point<T, N> {
    fn from(coords: [T; N]) -> Self {
        Point { coords }
    }
}

impl<T: Scalar, const N: usize> From<Point<T, N>> for [T; N] {
    fn from(p: Point<T, N>) -> Self {
        p.coords
    }
}

pub type Point3<T> = Point<T, 3>;
