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

use integral_curve::geometry::{point::Point3, vector::VectorOps};
use integral_curve::mesh::{
    ElementRef, MeshError, MeshTopology, SurfaceMesh, Tetmesh, Trimesh, VolumeMesh,
};

/// Unit square split along the diagonal (0, 2).
fn square() -> Trimesh<f64> {
    let pts = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    Trimesh::new(pts, vec![[0, 1, 2], [0, 2, 3]]).unwrap()
}

fn two_tets() -> Tetmesh<f64> {
    let pts = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
    ];
    Tetmesh::new(pts, vec![[0, 1, 2, 3], [1, 2, 3, 4]]).unwrap()
}

#[test]
fn trimesh_counts_and_incidence() {
    let mesh = square();
    assert_eq!(mesh.num_vertices(), 4);
    assert_eq!(mesh.num_elements(), 2);
    assert_eq!(mesh.adj_vtx2elem(0), &[0, 1]);
    assert_eq!(mesh.adj_vtx2elem(1), &[0]);
    assert_eq!(mesh.adj_vtx2elem(3), &[1]);
    assert!(mesh.element_contains_vertex(1, 3));
    assert!(!mesh.element_contains_vertex(0, 3));
}

#[test]
fn trimesh_edge_adjacency() {
    let mesh = square();
    assert_eq!(mesh.triangle_adjacent_along(0, 0, 2), ElementRef::Element(1));
    assert_eq!(mesh.triangle_adjacent_along(1, 2, 0), ElementRef::Element(0));
    assert_eq!(mesh.triangle_adjacent_along(0, 0, 1), ElementRef::Boundary);
    assert!(mesh.is_boundary_edge(2, 3));
    assert!(!mesh.is_boundary_edge(2, 0));
}

#[test]
fn trimesh_normals_follow_winding() {
    let mesh = square();
    let n = mesh.triangle_normal(0);
    assert!((n[2] - 1.0).abs() < 1e-12);
    assert!((n.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn trimesh_local_maxima_are_strict() {
    let mesh = square().with_scalar_fn(|p| p[0] + p[1]);
    assert!(mesh.vertex_is_local_maximum(2));
    for v in [0, 1, 3] {
        assert!(!mesh.vertex_is_local_maximum(v));
    }

    // a plateau has no maximum
    let flat = square().with_scalar_field(vec![1.0, 1.0, 1.0, 1.0]).unwrap();
    assert!((0..4).all(|v| !flat.vertex_is_local_maximum(v)));
}

#[test]
fn element_min_scalar_and_centroid() {
    let mesh = square().with_scalar_field(vec![0.0, 1.0, 2.0, 3.0]).unwrap();
    assert_eq!(mesh.element_min_scalar(0), 0.0);
    assert_eq!(mesh.element_min_scalar(1), 0.0);
    let c = mesh.element_centroid(0);
    assert!((c[0] - 2.0 / 3.0).abs() < 1e-12);
    assert!((c[1] - 1.0 / 3.0).abs() < 1e-12);
}

#[test]
fn trimesh_rejects_bad_input() {
    let pts = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(
        Trimesh::new(pts.clone(), vec![[0, 1, 5]]).unwrap_err(),
        MeshError::VertexOutOfRange {
            element: 0,
            vertex: 5,
            num_vertices: 3
        }
    );
    assert_eq!(
        Trimesh::new(pts.clone(), vec![[0, 1, 1]]).unwrap_err(),
        MeshError::RepeatedVertex { element: 0, vertex: 1 }
    );
    let mesh = Trimesh::new(pts, vec![[0, 1, 2]]).unwrap();
    assert_eq!(
        mesh.with_scalar_field(vec![0.0; 2]).unwrap_err(),
        MeshError::ScalarFieldLength { expected: 3, got: 2 }
    );

    let nan = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(f64::NAN, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
    ];
    assert_eq!(
        Trimesh::new(nan, vec![[0, 1, 2]]).unwrap_err(),
        MeshError::NonFiniteVertex(1)
    );
}

#[test]
fn tetmesh_facet_adjacency() {
    let mesh = two_tets();
    assert_eq!(mesh.num_elements(), 2);

    // facet 3 of tet 0 is (1, 2, 3), shared with tet 1
    assert_eq!(mesh.tet_facet_vertex_ids(0, 3), [1, 2, 3]);
    assert_eq!(mesh.adjacent_tet_through_facet(0, 3), ElementRef::Element(1));
    for facet in 0..3 {
        assert!(mesh.is_boundary_facet(0, facet));
    }

    // tet 1 lists the shared facet as local facet 0: (1, 3, 2)
    assert_eq!(mesh.tet_facet_vertex_ids(1, 0), [1, 3, 2]);
    assert_eq!(mesh.adjacent_tet_through_facet(1, 0), ElementRef::Element(0));
}

#[test]
fn tetmesh_volume_and_maxima() {
    let mesh = two_tets().with_scalar_fn(|p| p[0] + p[1] + p[2]);
    assert_eq!(mesh.tet_volume6(0), 1.0);
    assert!(mesh.vertex_is_local_maximum(4));
    assert!(!mesh.vertex_is_local_maximum(3));
    assert_eq!(mesh.adj_vtx2elem(4), &[1]);
    assert_eq!(mesh.adj_vtx2elem(2), &[0, 1]);
}

#[test]
fn tetmesh_rejects_bad_input() {
    let pts = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
    ];
    assert!(matches!(
        Tetmesh::new(pts.clone(), vec![[0, 1, 2, 4]]),
        Err(MeshError::VertexOutOfRange { vertex: 4, .. })
    ));
    assert!(matches!(
        Tetmesh::new(pts, vec![[0, 1, 2, 0]]),
        Err(MeshError::RepeatedVertex { element: 0, vertex: 0 })
    ));
}
