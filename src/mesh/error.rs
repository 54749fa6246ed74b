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

use thiserror::Error;

/// Errors raised while assembling an indexed mesh or a per-element field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    #[error("element {element} references vertex {vertex}, but the mesh has {num_vertices} vertices")]
    VertexOutOfRange {
        element: usize,
        vertex: usize,
        num_vertices: usize,
    },

    #[error("element {element} lists vertex {vertex} more than once")]
    RepeatedVertex { element: usize, vertex: usize },

    #[error("scalar field has {got} values, expected one per vertex ({expected})")]
    ScalarFieldLength { expected: usize, got: usize },

    #[error("vector field has {got} vectors, expected one per element ({expected})")]
    VectorFieldLength { expected: usize, got: usize },

    #[error("vertex {0} has a non-finite coordinate")]
    NonFiniteVertex(usize),
}
