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

use std::marker::PhantomData;

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    curve::{
        Converged, ExitGate, Traverse, convergence,
        error::TraceError,
        options::ConvergenceCriterion,
        ranked_reentry_candidates,
        sample::CurveSample,
        unit_direction,
    },
    field::VectorField,
    geometry::{
        point::{Point3, PointOps},
        util::triangle_law_of_sines,
        vector::{Cross3, Vector3, VectorOps},
    },
    kernel::coincident,
    mesh::{ElementRef, SurfaceMesh, TRI_EDGES},
    numeric::scalar::Scalar,
};

/// Walks a triangle mesh, one triangle per step.
#[derive(Debug)]
pub struct SurfaceWalker<'a, T, M, F>
where
    T: Scalar,
    M: SurfaceMesh<T>,
    F: VectorField<T>,
{
    mesh: &'a M,
    field: &'a F,
    _scalar: PhantomData<T>,
}

impl<'a, T, M, F> SurfaceWalker<'a, T, M, F>
where
    T: Scalar,
    M: SurfaceMesh<T>,
    F: VectorField<T>,
{
    pub fn new(mesh: &'a M, field: &'a F) -> Self {
        Self {
            mesh,
            field,
            _scalar: PhantomData,
        }
    }

    /// Global ids of the endpoints of local edge `edge` of `tid`.
    fn edge_vertex_ids(&self, tid: usize, edge: usize) -> (usize, usize) {
        let [a, b] = TRI_EDGES[edge];
        (
            self.mesh.element_vertex_id(tid, a),
            self.mesh.element_vertex_id(tid, b),
        )
    }

    /// Where the ray from `origin` along `dir` crosses segment `a`-`b`.
    fn edge_crossing(
        origin: &Point3<T>,
        dir: &Vector3<T>,
        a: &Point3<T>,
        b: &Point3<T>,
    ) -> Point3<T> {
        let edge = a.vector_to(b);
        let edge_len = edge.norm();
        let e0 = edge.normalized();

        let angle_origin = origin.vector_to(a).normalized().angle_rad(dir);
        let angle_exit = (-*dir).angle_rad(&(-e0));

        if angle_exit.sin().abs() <= T::query_tolerance() {
            // ray runs along the edge
            return if edge.dot(dir) > T::zero() { *b } else { *a };
        }

        let len = triangle_law_of_sines(angle_exit, angle_origin, origin.distance_to(a));
        a.add_vector(&e0.scale(len.max(T::zero()).min(edge_len)))
    }
}

impl<T, M, F> ExitGate<T> for SurfaceWalker<'_, T, M, F>
where
    T: Scalar,
    M: SurfaceMesh<T>,
    F: VectorField<T>,
{
    type Gate = usize;

    fn find_exit_gate(
        &self,
        tid: usize,
        position: &Point3<T>,
        dir: &Vector3<T>,
    ) -> Result<usize, TraceError> {
        let mut best: Option<(T, usize)> = None;
        for i in 0..3 {
            let p = self.mesh.element_vertex(tid, i);
            if coincident(position, &p) {
                continue;
            }
            let angle = dir.angle_rad(&position.vector_to(&p));
            match best {
                Some((best_angle, _)) if angle >= best_angle => {}
                _ => best = Some((angle, i)),
            }
        }
        let Some((_, vert)) = best else {
            return Err(TraceError::degenerate(tid, "triangle collapsed onto the sample position"));
        };

        let towards = position.vector_to(&self.mesh.element_vertex(tid, vert));
        let side = dir.cross(&towards).dot(&self.mesh.triangle_normal(tid));
        Ok(if side >= T::zero() { (vert + 2) % 3 } else { vert })
    }
}

impl<T, M, F> Traverse<T> for SurfaceWalker<'_, T, M, F>
where
    T: Scalar,
    M: SurfaceMesh<T>,
    F: VectorField<T>,
{
    fn gradient_skins_into(&self, curr: usize, next: &CurveSample<T>) -> Result<bool, TraceError> {
        let Some(next_tid) = next.element.id() else {
            return Ok(false);
        };
        let dir = unit_direction(self.field, next_tid)?;
        let edge = self.find_exit_gate(next_tid, &next.position, &dir)?;
        let (va, vb) = self.edge_vertex_ids(next_tid, edge);
        Ok(self.mesh.triangle_adjacent_along(next_tid, va, vb) == ElementRef::Element(curr))
    }

    fn traverse_element(&self, curr: &CurveSample<T>) -> Result<CurveSample<T>, TraceError> {
        let Some(tid) = curr.element.id() else {
            return Err(TraceError::GeometricDegeneracy {
                element: ElementRef::Boundary,
                reason: "cannot traverse from outside the mesh",
            });
        };
        let dir = unit_direction(self.field, tid)?;
        let exit_edge = self.find_exit_gate(tid, &curr.position, &dir)?;

        let (vid_a, vid_b) = self.edge_vertex_ids(tid, exit_edge);
        let a = self.mesh.vertex(vid_a);
        let b = self.mesh.vertex(vid_b);
        let exit = Self::edge_crossing(&curr.position, &dir, &a, &b);

        let next_elem = self.mesh.triangle_adjacent_along(tid, vid_a, vid_b);
        let next = CurveSample::through_gate(exit, next_elem, exit_edge);
        trace!(element = tid, edge = exit_edge, next = %next_elem, "exit edge");

        let ElementRef::Element(next_tid) = next_elem else {
            return Ok(next);
        };
        if !self.gradient_skins_into(tid, &next)? {
            return Ok(next);
        }

        // reroute through the edge endpoint further along the field
        let vid = if a.vector_to(&b).dot(&dir) > T::zero() { vid_b } else { vid_a };
        let candidates = ranked_reentry_candidates(self.mesh, vid, [tid, next_tid], &dir);
        let Some(&chosen) = candidates.first() else {
            return Err(TraceError::degenerate(tid, "no triangle to re-enter around the shared vertex"));
        };
        debug!(element = tid, skipped = next_tid, vertex = vid, chosen, "rerouted through vertex");

        Ok(CurveSample::at_vertex(
            self.mesh.vertex(vid),
            ElementRef::Element(chosen),
            vid,
        ))
    }
}

impl<T, M, F> Converged<T> for SurfaceWalker<'_, T, M, F>
where
    T: Scalar,
    M: SurfaceMesh<T>,
    F: VectorField<T>,
{
    fn is_converged(&self, eid: usize, criterion: &ConvergenceCriterion<T>) -> bool {
        convergence::is_converged(self.mesh, eid, criterion)
    }

    fn local_maxima_of(&self, eid: usize) -> SmallVec<[usize; 4]> {
        convergence::local_maxima_of(self.mesh, eid)
    }

    fn vertex_position(&self, vid: usize) -> Point3<T> {
        self.mesh.vertex(vid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{field::ElementField, mesh::Trimesh};

    fn square() -> Trimesh<f64> {
        // 3---2
        // | / |
        // 0---1
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 1.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        Trimesh::new(pts, vec![[0, 1, 2], [0, 2, 3]]).unwrap()
    }

    #[test]
    fn exit_edge_follows_direction() {
        let mesh = square();
        let field = ElementField::uniform(&mesh, Vector3::new(1.0, 0.0, 0.0));
        let walker = SurfaceWalker::new(&mesh, &field);

        // from the centroid of [0,1,2] heading +x leaves through edge (1,2)
        let c = Point3::new(2.0 / 3.0, 1.0 / 3.0, 0.0);
        let edge = walker.find_exit_gate(0, &c, &Vector3::new(1.0, 0.0, 0.0)).unwrap();
        assert_eq!(edge, 1);

        // heading -y leaves through edge (0,1)
        let edge = walker.find_exit_gate(0, &c, &Vector3::new(0.0, -1.0, 0.0)).unwrap();
        assert_eq!(edge, 0);
    }

    #[test]
    fn crossing_point_on_edge() {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(1.0, 1.0, 0.0);
        let o = Point3::new(0.5, 0.25, 0.0);
        let x = SurfaceWalker::<f64, Trimesh<f64>, ElementField<f64>>::edge_crossing(
            &o,
            &Vector3::new(1.0, 0.0, 0.0),
            &a,
            &b,
        );
        assert!((x[0] - 1.0).abs() < 1e-12);
        assert!((x[1] - 0.25).abs() < 1e-12);
    }
}
