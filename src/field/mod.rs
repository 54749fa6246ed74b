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
        point::PointOps,
        vector::{Cross3, Vector3, VectorOps},
    },
    mesh::{MeshError, MeshTopology, SurfaceMesh, Tetmesh, Trimesh},
    numeric::scalar::Scalar,
};

/// A direction per mesh element. Vectors are returned as stored; callers
/// normalize before use.
pub trait VectorField<T: Scalar> {
    fn vec_at(&self, eid: usize) -> Vector3<T>;
}

/// Piecewise-constant field stored as one vector per element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementField<T: Scalar> {
    vectors: Vec<Vector3<T>>,
}

impl<T: Scalar> VectorField<T> for ElementField<T> {
    fn vec_at(&self, eid: usize) -> Vector3<T> {
        self.vectors[eid]
    }
}

impl<T: Scalar> ElementField<T> {
    /// One vector per element of `mesh`.
    pub fn from_vectors<M: MeshTopology<T>>(
        mesh: &M,
        vectors: Vec<Vector3<T>>,
    ) -> Result<Self, MeshError> {
        if vectors.len() != mesh.num_elements() {
            return Err(MeshError::VectorFieldLength {
                expected: mesh.num_elements(),
                got: vectors.len(),
            });
        }
        Ok(Self { vectors })
    }

    /// The same vector on every element.
    pub fn uniform<M: MeshTopology<T>>(mesh: &M, v: Vector3<T>) -> Self {
        Self {
            vectors: vec![v; mesh.num_elements()],
        }
    }

    /// Per-triangle gradient of the mesh scalar field.
    pub fn gradient_of_trimesh(mesh: &Trimesh<T>) -> Self {
        let vectors = (0..mesh.num_elements())
            .map(|tid| {
                let ids = mesh.triangle_vertex_ids(tid);
                let p = ids.map(|v| mesh.vertex(v));
                let n = mesh.triangle_normal(tid);
                let double_area = p[0].vector_to(&p[1]).cross(&p[0].vector_to(&p[2])).norm();
                if double_area <= T::tolerance_squared() {
                    return Vector3::zero();
                }
                // edge opposite local vertex i, following the triangle winding
                let opposite = [
                    p[1].vector_to(&p[2]),
                    p[2].vector_to(&p[0]),
                    p[0].vector_to(&p[1]),
                ];
                let mut g = Vector3::zero();
                for i in 0..3 {
                    g = g + n.cross(&opposite[i]).scale(mesh.scalar(ids[i]));
                }
                g.scale(T::one() / double_area)
            })
            .collect();
        Self { vectors }
    }

    /// Per-tetrahedron gradient of the mesh scalar field.
    pub fn gradient_of_tetmesh(mesh: &Tetmesh<T>) -> Self {
        let vectors = (0..mesh.num_elements())
            .map(|tid| {
                let ids = mesh.tet_vertex_ids(tid);
                let p = ids.map(|v| mesh.vertex(v));
                let f = ids.map(|v| mesh.scalar(v));
                let e1 = p[0].vector_to(&p[1]);
                let e2 = p[0].vector_to(&p[2]);
                let e3 = p[0].vector_to(&p[3]);
                let det = e1.dot(&e2.cross(&e3));
                if det.abs() <= T::tolerance_squared() {
                    return Vector3::zero();
                }
                let g = e2.cross(&e3).scale(f[1] - f[0])
                    + e3.cross(&e1).scale(f[2] - f[0])
                    + e1.cross(&e2).scale(f[3] - f[0]);
                g.scale(T::one() / det)
            })
            .collect();
        Self { vectors }
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn vectors(&self) -> &[Vector3<T>] {
        &self.vectors
    }
}
