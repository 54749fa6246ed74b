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
        intersection::ray_triangle_intersection,
        point::{Point3, PointOps},
        vector::{Vector3, VectorOps},
    },
    mesh::{ElementRef, TET_FACES, VolumeMesh},
    numeric::scalar::Scalar,
};

/// Exit facet of a tetrahedron and where the ray meets it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FacetExit<T: Scalar> {
    pub facet: usize,
    pub position: Point3<T>,
}

/// Walks a tetrahedral mesh, one tetrahedron per step.
#[derive(Debug)]
pub struct VolumeWalker<'a, T, M, F>
where
    T: Scalar,
    M: VolumeMesh<T>,
    F: VectorField<T>,
{
    mesh: &'a M,
    field: &'a F,
    _scalar: PhantomData<T>,
}

impl<'a, T, M, F> VolumeWalker<'a, T, M, F>
where
    T: Scalar,
    M: VolumeMesh<T>,
    F: VectorField<T>,
{
    pub fn new(mesh: &'a M, field: &'a F) -> Self {
        Self {
            mesh,
            field,
            _scalar: PhantomData,
        }
    }

    /// Vertex of facet `facet` of `tid` best aligned with `dir` as seen from
    /// `from`; ties keep the lower local index.
    fn facet_vertex_towards(
        &self,
        tid: usize,
        facet: usize,
        from: &Point3<T>,
        dir: &Vector3<T>,
    ) -> usize {
        let [first, rest @ ..] =
            TET_FACES[facet].map(|local| self.mesh.element_vertex_id(tid, local));
        let angle_to = |vid: usize| dir.angle_rad(&from.vector_to(&self.mesh.vertex(vid)));

        let mut best = (angle_to(first), first);
        for vid in rest {
            let angle = angle_to(vid);
            if angle < best.0 {
                best = (angle, vid);
            }
        }
        best.1
    }
}

impl<T, M, F> ExitGate<T> for VolumeWalker<'_, T, M, F>
where
    T: Scalar,
    M: VolumeMesh<T>,
    F: VectorField<T>,
{
    type Gate = FacetExit<T>;

    /// Farthest facet hit by the ray. A ray starting on a facet also hits that
    /// facet at distance zero, so the nearest hit is not the exit.
    fn find_exit_gate(
        &self,
        tid: usize,
        position: &Point3<T>,
        dir: &Vector3<T>,
    ) -> Result<FacetExit<T>, TraceError> {
        let mut exit = None;
        let mut farthest = T::zero();
        for (facet, &face) in TET_FACES.iter().enumerate() {
            let corners = face.map(|local| self.mesh.element_vertex(tid, local));
            let Some(hit) =
                ray_triangle_intersection(position, dir, [&corners[0], &corners[1], &corners[2]])
            else {
                continue;
            };
            let dist = position.distance_to(&hit.point);
            trace!(element = tid, facet, dist = dist.as_f64(), "facet hit");
            if dist >= farthest {
                farthest = dist;
                exit = Some(FacetExit {
                    facet,
                    position: hit.point,
                });
            }
        }
        exit.ok_or(TraceError::degenerate(tid, "ray misses every facet"))
    }
}

impl<T, M, F> Traverse<T> for VolumeWalker<'_, T, M, F>
where
    T: Scalar,
    M: VolumeMesh<T>,
    F: VectorField<T>,
{
    fn gradient_skins_into(&self, curr: usize, next: &CurveSample<T>) -> Result<bool, TraceError> {
        let Some(next_tid) = next.element.id() else {
            return Ok(false);
        };
        let dir = unit_direction(self.field, next_tid)?;
        let exit = self.find_exit_gate(next_tid, &next.position, &dir)?;
        Ok(self.mesh.adjacent_tet_through_facet(next_tid, exit.facet) == ElementRef::Element(curr))
    }

    fn traverse_element(&self, curr: &CurveSample<T>) -> Result<CurveSample<T>, TraceError> {
        let Some(tid) = curr.element.id() else {
            return Err(TraceError::GeometricDegeneracy {
                element: ElementRef::Boundary,
                reason: "cannot traverse from outside the mesh",
            });
        };
        let dir = unit_direction(self.field, tid)?;
        let exit = self.find_exit_gate(tid, &curr.position, &dir)?;

        let next_elem = self.mesh.adjacent_tet_through_facet(tid, exit.facet);
        let next = CurveSample::through_gate(exit.position, next_elem, exit.facet);
        trace!(element = tid, facet = exit.facet, next = %next_elem, "exit facet");

        let ElementRef::Element(next_tid) = next_elem else {
            return Ok(next);
        };
        if !self.gradient_skins_into(tid, &next)? {
            return Ok(next);
        }

        let blended = (self.field.vec_at(tid) + self.field.vec_at(next_tid)).normalized();
        let vid = self.facet_vertex_towards(tid, exit.facet, &exit.position, &blended);
        let pos = self.mesh.vertex(vid);

        for cand in ranked_reentry_candidates(self.mesh, vid, [tid, next_tid], &blended) {
            let cand_dir = unit_direction(self.field, cand)?;
            if self.find_exit_gate(cand, &pos, &cand_dir).is_ok() {
                debug!(
                    element = tid,
                    skipped = next_tid,
                    vertex = vid,
                    chosen = cand,
                    "rerouted through vertex"
                );
                return Ok(CurveSample::at_vertex(pos, ElementRef::Element(cand), vid));
            }
        }
        Err(TraceError::degenerate(tid, "no tetrahedron to re-enter around the shared vertex"))
    }
}

impl<T, M, F> Converged<T> for VolumeWalker<'_, T, M, F>
where
    T: Scalar,
    M: VolumeMesh<T>,
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
    use crate::{field::ElementField, mesh::Tetmesh};

    fn unit_tet() -> Tetmesh<f64> {
        let pts = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ];
        Tetmesh::new(pts, vec![[0, 1, 2, 3]]).unwrap()
    }

    #[test]
    fn exit_facet_from_vertex_is_opposite_facet() {
        let mesh = unit_tet();
        let dir = Vector3::new(1.0, 1.0, 1.0).normalized();
        let field = ElementField::uniform(&mesh, dir);
        let walker = VolumeWalker::new(&mesh, &field);

        // from vertex 0 every facet through it is hit at distance 0; the
        // opposite facet (1,2,3) is the farthest
        let exit = walker.find_exit_gate(0, &Point3::new(0.0, 0.0, 0.0), &dir).unwrap();
        assert_eq!(exit.facet, 3);
        let third = 1.0 / 3.0;
        for i in 0..3 {
            assert!((exit.position[i] - third).abs() < 1e-12);
        }
    }

    #[test]
    fn exit_facet_from_interior() {
        let mesh = unit_tet();
        let dir = Vector3::new(0.0, 0.0, -1.0);
        let field = ElementField::uniform(&mesh, dir);
        let walker = VolumeWalker::new(&mesh, &field);

        let exit = walker
            .find_exit_gate(0, &Point3::new(0.2, 0.2, 0.2), &dir)
            .unwrap();
        // facet (0,2,1) lies in z = 0
        assert_eq!(exit.facet, 0);
        assert!(exit.position[2].abs() < 1e-12);
    }
}
