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

use tracing::{debug, trace};

use crate::{
    curve::{
        Converged, Traverse,
        error::TraceError,
        options::{ConvergenceCriterion, ResolvedOptions, TraceOptions},
        sample::CurveSample,
        surface::SurfaceWalker,
        volume::VolumeWalker,
    },
    field::VectorField,
    geometry::point::{Point3, PointOps},
    mesh::{ElementRef, SurfaceMesh, VolumeMesh},
    numeric::scalar::Scalar,
};

/// Why a trace stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Termination {
    /// The curve left the mesh; the last sample lies on the border.
    Boundary,
    /// The curve reached an element touching a local maximum; the closing
    /// samples sit on the maximum vertices.
    LocalMax,
    /// The configured value or vertex criterion was met.
    Target,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceStats {
    /// Elements crossed.
    pub steps: usize,
    /// Steps rerouted through a shared vertex.
    pub corrections: usize,
}

/// A polyline following a per-element vector field across a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegralCurve<T: Scalar> {
    samples: Vec<CurveSample<T>>,
    termination: Termination,
    stats: TraceStats,
}

impl<T: Scalar> IntegralCurve<T> {
    /// Traces over a triangle mesh.
    pub fn on_surface<M, F>(mesh: &M, field: &F, options: &TraceOptions<T>) -> Result<Self, TraceError>
    where
        M: SurfaceMesh<T>,
        F: VectorField<T>,
    {
        let resolved = options.resolve(mesh)?;
        make_curve(&SurfaceWalker::new(mesh, field), resolved)
    }

    /// Traces over a tetrahedral mesh.
    pub fn in_volume<M, F>(mesh: &M, field: &F, options: &TraceOptions<T>) -> Result<Self, TraceError>
    where
        M: VolumeMesh<T>,
        F: VectorField<T>,
    {
        let resolved = options.resolve(mesh)?;
        make_curve(&VolumeWalker::new(mesh, field), resolved)
    }

    pub fn samples(&self) -> &[CurveSample<T>] {
        &self.samples
    }

    pub fn positions(&self) -> impl Iterator<Item = Point3<T>> + '_ {
        self.samples.iter().map(|s| s.position)
    }

    /// Number of samples; at least two for any finished trace.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn source(&self) -> Option<&CurveSample<T>> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&CurveSample<T>> {
        self.samples.last()
    }

    /// Sum of the segment lengths.
    pub fn length(&self) -> T {
        self.samples
            .windows(2)
            .fold(T::zero(), |acc, w| acc + w[0].position.distance_to(&w[1].position))
    }

    pub fn termination(&self) -> Termination {
        self.termination
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    pub fn into_samples(self) -> Vec<CurveSample<T>> {
        self.samples
    }
}

/// Runs a walker from the resolved source until the curve leaves the mesh or
/// lands in an element meeting the stopping criterion.
///
/// At least one step is always taken, even when the source element already
/// satisfies the criterion.
#[tracing::instrument(level = "debug", skip_all, fields(source = %opts.source.element, max_steps = opts.max_steps))]
pub(crate) fn make_curve<T, W>(walker: &W, opts: ResolvedOptions<T>) -> Result<IntegralCurve<T>, TraceError>
where
    T: Scalar,
    W: Traverse<T> + Converged<T>,
{
    let mut samples = vec![opts.source];
    let mut stats = TraceStats::default();
    let mut current = opts.source;

    let (last_elem, locmax_reached) = loop {
        if stats.steps >= opts.max_steps {
            debug!(steps = stats.steps, "step limit reached");
            return Err(TraceError::MaxStepsExceeded { steps: stats.steps });
        }

        let next = walker.traverse_element(&current)?;
        stats.steps += 1;
        if next.vertex.is_some() {
            stats.corrections += 1;
        }
        trace!(
            step = stats.steps,
            element = %next.element,
            x = next.position[0].as_f64(),
            y = next.position[1].as_f64(),
            z = next.position[2].as_f64(),
            "step"
        );
        samples.push(next);
        current = next;

        let ElementRef::Element(eid) = next.element else {
            break (ElementRef::Boundary, false);
        };
        let locmax_reached = walker.is_converged(eid, &ConvergenceCriterion::LocalMax);
        let target_reached = walker.is_converged(eid, &opts.criterion);
        if locmax_reached || target_reached {
            break (next.element, locmax_reached);
        }
    };

    let termination = match last_elem {
        ElementRef::Boundary => Termination::Boundary,
        ElementRef::Element(eid) if locmax_reached => {
            for vid in walker.local_maxima_of(eid) {
                samples.push(CurveSample::at_vertex(
                    walker.vertex_position(vid),
                    ElementRef::Element(eid),
                    vid,
                ));
            }
            Termination::LocalMax
        }
        ElementRef::Element(_) => Termination::Target,
    };

    debug!(
        ?termination,
        samples = samples.len(),
        steps = stats.steps,
        corrections = stats.corrections,
        "curve finished"
    );

    Ok(IntegralCurve {
        samples,
        termination,
        stats,
    })
}
