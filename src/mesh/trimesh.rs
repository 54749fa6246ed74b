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
    geometry::{point::Point3, util::triangle_normal, vector::Vector3, vector::VectorOps},
    impl_mesh_topology,
    mesh::{ElementRef, MeshError, SurfaceMesh, build_incidence, find_local_maxima},
    numeric::scalar::Scalar,
};

#[inline(always)]
fn edge_key(a: usize, b: usize) -> (usize, usize) {
    if a < b { (a, b) } else { (b, a) }
}

/// Indexed triangle mesh with a per-vertex scalar field.
///
/// Triangles are expected to be consistently wound; normals follow the
/// winding of each triangle.
#[derive(Debug, Clone)]
pub struct Trimesh<T: Scalar> {
    vertices: Vec<Point3<T>>,
    elements: Vec<[usize; 3]>,
    scalar: Vec<T>,
    local_maxima: Vec<bool>,
    vertex_elements: Vec<SmallVec<[usize; 8]>>,
    edge_map: AHashMap<(usize, usize), SmallVec<[usize; 2]>>,
}

impl_mesh_topology!(Trimesh, 3);

impl<T: Scalar> Trimesh<T> {
    pub fn new(vertices: Vec<Point3<T>>, triangles: Vec<[usize; 3]>) -> Result<Self, MeshError> {
        if let Some(vid) = vertices.iter().position(|p| !p.is_finite()) {
            return Err(MeshError::NonFiniteVertex(vid));
        }
        let vertex_elements = build_incidence(vertices.len(), &triangles)?;

        let mut edge_map: AHashMap<(usize, usize), SmallVec<[usize; 2]>> = AHashMap::default();
        for (tid, tri) in triangles.iter().enumerate() {
            for i in 0..3 {
                edge_map
                    .entry(edge_key(tri[i], tri[(i + 1) % 3]))
                    .or_default()
                    .push(tid);
            }
        }

        let scalar = vec![T::zero(); vertices.len()];
        let local_maxima = find_local_maxima(&scalar, &triangles, &vertex_elements);

        Ok(Self {
            vertices,
            elements: triangles,
            scalar,
            local_maxima,
            vertex_elements,
            edge_map,
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

    pub fn triangles(&self) -> &[[usize; 3]] {
        &self.elements
    }

    pub fn vertices(&self) -> &[Point3<T>] {
        &self.vertices
    }

    pub fn scalar(&self, vid: usize) -> T {
        self.scalar[vid]
    }

    pub fn triangle_vertex_ids(&self, tid: usize) -> [usize; 3] {
        self.elements[tid]
    }

    /// Triangles sharing edge `(va, vb)`, in insertion order.
    pub fn edge_triangles(&self, va: usize, vb: usize) -> &[usize] {
        self.edge_map
            .get(&edge_key(va, vb))
            .map(|tris| tris.as_slice())
            .unwrap_or(&[])
    }

    pub fn is_boundary_edge(&self, va: usize, vb: usize) -> bool {
        self.edge_triangles(va, vb).len() == 1
    }
}

impl<T: Scalar> SurfaceMesh<T> for Trimesh<T> {
    fn triangle_normal(&self, tid: usize) -> Vector3<T> {
        let [a, b, c] = self.elements[tid];
        triangle_normal(&self.vertices[a], &self.vertices[b], &self.vertices[c]).normalized()
    }

    fn triangle_adjacent_along(&self, tid: usize, va: usize, vb: usize) -> ElementRef {
        self.edge_triangles(va, vb)
            .iter()
            .copied()
            .filter(|&other| other != tid)
            .min()
            .into()
    }
}
