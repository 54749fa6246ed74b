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

//! Integral curves traced element by element through a piecewise-constant
//! vector field.
//!
//! A trace repeatedly asks a walker for the exit gate of the current element,
//! crosses it, and checks the element it lands in against the stopping
//! criterion. [`SurfaceWalker`] walks triangle meshes, [`VolumeWalker`] walks
//! tetrahedral ones; [`IntegralCurve`] drives either.

pub mod builder;
pub mod convergence;
pub mod error;
pub mod options;
pub mod perturb;
pub mod sample;
pub mod surface;
pub mod volume;

use std::cmp::Ordering;

use smallvec::SmallVec;

use crate::{
    geometry::{
        point::{Point3, PointOps},
        vector::{Vector3, VectorOps},
    },
    field::VectorField,
    mesh::MeshTopology,
    numeric::scalar::Scalar,
};

pub use builder::{IntegralCurve, Termination, TraceStats};
pub use error::TraceError;
pub use options::{ConvergenceCriterion, TraceOptions};
pub use sample::CurveSample;
pub use surface::SurfaceWalker;
pub use volume::VolumeWalker;

/// Selects the gate through which a curve leaves an element.
pub trait ExitGate<T: Scalar> {
    /// Edge index for triangles, facet index plus exit point for tetrahedra.
    type Gate;

    fn find_exit_gate(
        &self,
        eid: usize,
        position: &Point3<T>,
        dir: &Vector3<T>,
    ) -> Result<Self::Gate, TraceError>;
}

/// Crosses one element.
pub trait Traverse<T: Scalar>: ExitGate<T> {
    /// True when stepping from `next` along its own field direction would lead
    /// straight back into `curr`.
    fn gradient_skins_into(&self, curr: usize, next: &CurveSample<T>) -> Result<bool, TraceError>;

    /// Sample where the curve leaves the element of `curr`, rerouted through a
    /// shared vertex when the raw crossing would backtrack.
    fn traverse_element(&self, curr: &CurveSample<T>) -> Result<CurveSample<T>, TraceError>;
}

/// Stopping predicates evaluated on the element a step lands in.
pub trait Converged<T: Scalar> {
    fn is_converged(&self, eid: usize, criterion: &ConvergenceCriterion<T>) -> bool;

    fn local_maxima_of(&self, eid: usize) -> SmallVec<[usize; 4]>;

    fn vertex_position(&self, vid: usize) -> Point3<T>;
}

/// Elements incident to `vid` other than those in `exclude`, best first.
///
/// Ranked by the angle between `dir` and the direction from the vertex to the
/// element centroid; equal angles keep ascending element id. The ranking does
/// not depend on incidence order, so the choice is the same however the mesh
/// lists its elements.
pub(crate) fn ranked_reentry_candidates<T, M>(
    mesh: &M,
    vid: usize,
    exclude: [usize; 2],
    dir: &Vector3<T>,
) -> SmallVec<[usize; 8]>
where
    T: Scalar,
    M: MeshTopology<T>,
{
    let origin = mesh.vertex(vid);
    let mut ranked: SmallVec<[(T, usize); 8]> = mesh
        .adj_vtx2elem(vid)
        .iter()
        .copied()
        .filter(|eid| !exclude.contains(eid))
        .map(|eid| {
            let towards = origin.vector_to(&mesh.element_centroid(eid));
            (dir.angle_rad(&towards), eid)
        })
        .collect();
    ranked.sort_by(|a, b| {
        a.0.partial_cmp(&b.0)
            .unwrap_or(Ordering::Equal)
            .then(a.1.cmp(&b.1))
    });
    ranked.into_iter().map(|(_, eid)| eid).collect()
}

/// Unit field direction of `eid`.
pub(crate) fn unit_direction<T, F>(field: &F, eid: usize) -> Result<Vector3<T>, TraceError>
where
    T: Scalar,
    F: VectorField<T> + ?Sized,
{
    let v = field.vec_at(eid);
    if !v.is_finite() || v.is_zero() {
        return Err(TraceError::degenerate(eid, "field vector vanishes or is not finite"));
    }
    Ok(v.normalized())
}
