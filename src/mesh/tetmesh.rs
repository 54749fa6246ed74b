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

use ahash::AHashMap;
use smallvec::SmallVec;

use crate::{
    geometry::{point::Point3, util::tet_volume6},
    impl_mesh_topology,
    mesh::{ElementRef, MeshError, TET_FACES, VolumeMesh, build_incidence, find_local_maxima},
    numeric::scalar::Scalar,
};

#[inline(always)]
fn facet_key(mut f: [usize; 3]) -> [usize; 3] {
    f.sort_unstable();
    f
}

/// Indexed tetrahedral mesh with a per-vertex scalar field.
#[derive(Debug, Clone)]
pub struct Tetmesh<T: Scalar> {
    vertices: Vec<Point3<T>>,
    elements: Vec<[usize; 4]>,
    scalar: Vec<T>,
    local_maxima: Vec<bool>,
    vertex_elements: Vec<SmallVec<[usize; 8]>>,
    facet_map: AHashMap<[usize; 3], SmallVec<[usize; 2]>>,
}

impl_mesh_topology!(Tetmesh, 4);

impl<T: Scalar> Tetmesh<T> {
    pub fn new(vertices: Vec<Point3<T>>, tets: Vec<[usize; 4]>) -> Result<Self, MeshError> {
        if let Some(vid) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFiniteVertex(vid));
        }
        let vertex_elements = build_incidence(vertices.len(), &tets)?;

        let mut facet_map: AHashMap<[usize; 3], SmallVec<[usize; 2]>> = AHashMap::default();
        for (tid, tet) in tets.iter().enumerate() {
            for face in TET_FACES.iter() {
                facet_map
                    .entry(facet_key([tet[face[0]], tet[face[1]], tet[face[2]]]))
                    .or_default()
                    .push(tid);
            }
        }

        let scalar = vec![T::zero(); vertices.len()];
        let local_maxima = find_local_maxima(&scalar, &tets, &vertex_elements);

        Ok(Self {
            vertices,
            elements: tets,
            scalar,
            local_maxima,
            vertex_elements,
            facet_map,
        })
    }

    /// Replaces the per-vertex scalar field and recomputes local maxima.
    pub fn with_scalar_field(mut self, values: Vec<T>) -> Result<Self, MeshError> {
        if values.len() != self.vertices.len() {
            return Err(MeshError::ScalarFieldLength {
                expected: self.vertices.len(),
                got: values.len(),
            });
        }
        self.local_maxima = find_local_maxima(&values, &self.elements, &self.vertex_elements);
        self.scalar = values;
        Ok(self)
    }

    /// Samples the scalar field from a function of the vertex position.
    pub fn with_scalar_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&Point3<T>) -> T,
    {
        let values: Vec<T> = self.vertices.iter().map(f).collect();
        self.local_maxima = find_local_maxima(&values, &self.elements, &self.vertex_elements);
        self.scalar = values;
        self
    }

    pub fn tets(&self) -> &[[usize; 4]] {
        &self.elements
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn scalar(&self, vid: usize) -> T {
        self.scalar[vid]
    }

    pub fn tet_vertex_ids(&self, tid: usize) -> [usize; 4] {
        self.elements[tid]
    }

    /// Global vertex ids of local facet `facet` of `tid`.
    pub fn tet_facet_vertex_ids(&self, tid: usize, facet: usize) -> [usize; 3] {
        let tet = &self.elements[tid];
        let face = &TET_FACES[facet];
        [tet[face[0]], tet[face[1]], tet[face[2]]]
    }

    /// Six times the signed volume of `tid`; positive for the orientation
    /// [`TET_FACES`] assumes.
    pub fn tet_volume6(&self, tid: usize) -> T {
        let [a, b, c, d] = self.elements[tid];
        tet_volume6(
            &self.vertices[a],
            &self.vertices[b],
            &self.vertices[c],
            &self.vertices[d],
        )
    }

    pub fn is_boundary_facet(&self, tid: usize, facet: usize) -> bool {
        self.adjacent_tet_through_facet(tid, facet).is_boundary()
    }
}

impl<T: Scalar> VolumeMesh<T> for Tetmesh<T> {
    fn adjacent_tet_through_facet(&self, tid: usize, facet: usize) -> ElementRef {
        self.facet_map
            .get(&facet_key(self.tet_facet_vertex_ids(tid, facet)))
            .and_then(|tets| tets.iter().copied().filter(|&other| other != tid).min())
            .into()
    }
}
