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

use smallvec::SmallVec;

use crate::{curve::options::ConvergenceCriterion, mesh::MeshTopology, numeric::scalar::Scalar};

/// Whether element `eid` satisfies `criterion`.
pub fn is_converged<T, M>(mesh: &M, eid: usize, criterion: &ConvergenceCriterion<T>) -> bool
where
    T: Scalar,
    M: MeshTopology<T> + ?Sized,
{
    match *criterion {
        ConvergenceCriterion::LocalMax => !local_maxima_of(mesh, eid).is_empty(),
        ConvergenceCriterion::GivenValue(threshold) => mesh.element_min_scalar(eid) > threshold,
        ConvergenceCriterion::GivenVertex(vid) => mesh.element_contains_vertex(eid, vid),
    }
}

/// Local-maximum vertices of `eid`, in local vertex order.
pub fn local_maxima_of<T, M>(mesh: &M, eid: usize) -> SmallVec<[usize; 4]>
where
    T: Scalar,
    M: MeshTopology<T> + ?Sized,
{
    (0..M::ELEMENT_VERTICES)
        .map(|i| mesh.element_vertex_id(eid, i))
        .filter(|&vid| mesh.vertex_is_local_maximum(vid))
        .collect()
}
