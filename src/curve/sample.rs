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

use crate::{geometry::point::Point3, mesh::ElementRef, numeric::scalar::Scalar};

/// One vertex of a traced polyline.
///
/// `vertex` is set only when `position` is exactly a mesh vertex: the source
/// sample when the trace starts at a vertex, samples rerouted through a shared
/// vertex, and the closing samples at a local maximum. `gate` is the local
/// edge/facet of the previous element the curve left through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSample<T: Scalar> {
    pub position: Point3<T>,
    pub element: ElementRef,
    pub vertex: Option<usize>,
    pub gate: Option<usize>,
}

impl<T: Scalar> CurveSample<T> {
    pub fn new(position: Point3<T>, element: ElementRef) -> Self {
        Self {
            position,
            element,
            vertex: None,
            gate: None,
        }
    }

    pub fn through_gate(position: Point3<T>, element: ElementRef, gate: usize) -> Self {
        Self {
            position,
            element,
            vertex: None,
            gate: Some(gate),
        }
    }

    pub fn at_vertex(position: Point3<T>, element: ElementRef, vertex: usize) -> Self {
        Self {
            position,
            element,
            vertex: Some(vertex),
            gate: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.element.is_boundary()
    }
}
