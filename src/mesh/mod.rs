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

pub mod error;
pub mod tetmesh;
pub mod trimesh;

use std::fmt;

use crate::{
    geometry::{point::Point3, vector::Vector3},
    numeric::scalar::Scalar,
};

pub use error::MeshError;
pub use tetmesh::Tetmesh;
pub use trimesh::Trimesh;

/// Local edge table of a triangle: edge `i` joins local vertices `TRI_EDGES[i]`.
pub const TRI_EDGES: [[usize; 2]; 3] = [[0, 1], [1, 2], [2, 0]];

/// Local facet table of a tetrahedron, outward-facing for a positively
/// oriented element.
pub const TET_FACES: [[usize; 3]; 4] = [[0, 2, 1], [0, 1, 3], [0, 3, 2], [1, 2, 3]];

/// An element index, or the outside of the mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRef {
    Element(usize),
    Boundary,
}

impl ElementRef {
    pub fn id(self) -> Option<usize> {
        match self {
            ElementRef::Element(id) => Some(id),
            ElementRef::Boundary => None,
        }
    }

    pub fn is_boundary(self) -> bool {
        matches!(self, ElementRef::Boundary)
    }
}

impl From<Option<usize>> for ElementRef {
    fn from(id: Option<usize>) -> Self {
        id.map_or(ElementRef::Boundary, ElementRef::Element)
    }
}

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementRef::Element(id) => write!(f, "element {}", id),
            ElementRef::Boundary => write!(f, "boundary"),
        }
    }
}

/// Read-only queries shared by surface and volumetric meshes.
pub trait MeshTopology<T: Scalar> {
    /// 3 for triangles, 4 for tetrahedra.
    const ELEMENT_VERTICES: usize;

    fn num_vertices(&self) -> usize;
    fn num_elements(&self) -> usize;

    fn vertex(&self, vid: usize) -> Point3<T>;

    /// Global id of the `local`-th vertex of element `eid`, in the element's fixed order.
    fn element_vertex_id(&self, eid: usize, local: usize) -> usize;

    /// Elements incident to vertex `vid`, in ascending id order.
    fn adj_vtx2elem(&self, vid: usize) -> &[usize];

    /// Minimum of the scalar field over the element's vertices.
    fn element_min_scalar(&self, eid: usize) -> T;

    fn vertex_is_local_maximum(&self, vid: usize) -> bool;

    fn element_vertex(&self, eid: usize, local: usize) -> Point3<T> {
        self.vertex(self.element_vertex_id(eid, local))
    }

    fn element_contains_vertex(&self, eid: usize, vid: usize) -> bool {
        (0..Self::ELEMENT_VERTICES).any(|i| self.element_vertex_id(eid, i) == vid)
    }

    fn element_centroid(&self, eid: usize) -> Point3<T> {
        let pts: smallvec::SmallVec<[Point3<T>; 4]> = (0..Self::ELEMENT_VERTICES)
            .map(|i| self.element_vertex(eid, i))
            .collect();
        Point3::centroid(pts.iter()).unwrap_or_default()
    }
}

/// Triangle meshes embedded in 3D.
pub trait SurfaceMesh<T: Scalar>: MeshTopology<T> {
    /// Unit outward normal of triangle `tid`.
    fn triangle_normal(&self, tid: usize) -> Vector3<T>;

    /// The other triangle sharing edge `(va, vb)` with `tid`.
    fn triangle_adjacent_along(&self, tid: usize, va: usize, vb: usize) -> ElementRef;
}

/// Tetrahedral meshes.
pub trait VolumeMesh<T: Scalar>: MeshTopology<T> {
    /// The tetrahedron across local facet `facet` (see [`TET_FACES`]) of `tid`.
    fn adjacent_tet_through_facet(&self, tid: usize, facet: usize) -> ElementRef;
}

/// Implements [`MeshTopology`] for an indexed mesh type whose elements are
/// stored as `[usize; $n]` in `self.elements`.
#[macro_export]
macro_rules! impl_mesh_topology {
    ($mesh:ident, $n:expr) => {
        impl<T: $crate::numeric::scalar::Scalar> $crate::mesh::MeshTopology<T> for $mesh<T> {
            const ELEMENT_VERTICES: usize = $n;

            fn num_vertices(&self) -> usize {
                self.vertices.len()
            }

            fn num_elements(&self) -> usize {
                self.elements.len()
            }

            fn vertex(&self, vid: usize) -> $crate::geometry::point::Point3<T> {
                self.vertices[vid]
            }

            fn element_vertex_id(&self, eid: usize, local: usize) -> usize {
                self.elements[eid][local]
            }

            fn adj_vtx2elem(&self, vid: usize) -> &[usize] {
                &self.vertex_elements[vid]
            }

            fn element_min_scalar(&self, eid: usize) -> T {
                self.elements[eid]
                    .iter()
                    .map(|&v| self.scalar[v])
                    .fold(T::infinity(), |acc, s| acc.min(s))
            }

            fn vertex_is_local_maximum(&self, vid: usize) -> bool {
                self.local_maxima[vid]
            }
        }
    };
}

/// Checks element indices and builds vertex → element incidence.
pub(crate) fn build_incidence<const K: usize>(
    num_vertices: usize,
    elements: &[[usize; K]],
) -> Result<Vec<smallvec::SmallVec<[usize; 8]>>, MeshError> {
    let mut incidence = vec![smallvec::SmallVec::new(); num_vertices];
    for (eid, element) in elements.iter().enumerate() {
        for (i, &v) in element.iter().enumerate() {
            if v >= num_vertices {
                return Err(MeshError::VertexOutOfRange {
                    element: eid,
                    vertex: v,
                    num_vertices,
                });
            }
            if element[..i].contains(&v) {
                return Err(MeshError::RepeatedVertex { element: eid, vertex: v });
            }
            incidence[v].push(eid);
        }
    }
    Ok(incidence)
}

/// A vertex is a local maximum when its value is strictly greater than the
/// value of every vertex it shares an element with. Isolated vertices never are.
pub(crate) fn find_local_maxima<T: Scalar, const K: usize>(
    scalar: &[T],
    elements: &[[usize; K]],
    incidence: &[smallvec::SmallVec<[usize; 8]>],
) -> Vec<bool> {
    let mut maxima: Vec<bool> = incidence.iter().map(|elems| !elems.is_empty()).collect();
    for element in elements {
        for &v in element {
            if !maxima[v] {
                continue;
            }
            if element.iter().any(|&w| w != v && scalar[w] >= scalar[v]) {
                maxima[v] = false;
            }
        }
    }
    maxima
}
