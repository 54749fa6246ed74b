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
    curve::{error::TraceError, sample::CurveSample},
    geometry::point::Point3,
    mesh::{ElementRef, MeshTopology},
    numeric::scalar::Scalar,
};

pub const TAG_LOCAL_MAX: u8 = 0;
pub const TAG_GIVEN_VALUE: u8 = 1;
pub const TAG_GIVEN_VERTEX: u8 = 2;

/// When a trace stops, besides leaving the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConvergenceCriterion<T: Scalar> {
    /// Stop in the first element touching a local maximum of the scalar field.
    LocalMax,
    /// Stop in the first element whose minimum scalar sample exceeds the threshold.
    GivenValue(T),
    /// Stop in the first element containing the target vertex.
    GivenVertex(usize),
}

impl<T: Scalar> ConvergenceCriterion<T> {
    /// Builds a criterion from its numeric tag. `value` is only read for
    /// [`GivenValue`](Self::GivenValue), `vertex` only for
    /// [`GivenVertex`](Self::GivenVertex).
    pub fn from_tag(tag: u8, value: T, vertex: usize) -> Result<Self, TraceError> {
        match tag {
            TAG_LOCAL_MAX => Ok(ConvergenceCriterion::LocalMax),
            TAG_GIVEN_VALUE => Ok(ConvergenceCriterion::GivenValue(value)),
            TAG_GIVEN_VERTEX => Ok(ConvergenceCriterion::GivenVertex(vertex)),
            other => Err(TraceError::InvalidConfiguration(format!(
                "unknown convergence criterion tag {}",
                other
            ))),
        }
    }

    pub fn tag(&self) -> u8 {
        match self {
            ConvergenceCriterion::LocalMax => TAG_LOCAL_MAX,
            ConvergenceCriterion::GivenValue(_) => TAG_GIVEN_VALUE,
            ConvergenceCriterion::GivenVertex(_) => TAG_GIVEN_VERTEX,
        }
    }
}

/// Where a trace starts and when it stops.
///
/// The source position defaults to the source vertex; at least one of the two
/// must be given. Options are checked against the mesh when a trace is built.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceOptions<T: Scalar> {
    pub source_element: usize,
    pub source_vertex: Option<usize>,
    pub source_position: Option<Point3<T>>,
    pub criterion: ConvergenceCriterion<T>,
    /// Upper bound on traversal steps; `None` uses `4 * element_count + 16`.
    pub max_steps: Option<usize>,
}

impl<T: Scalar> TraceOptions<T> {
    pub fn new(source_element: usize, criterion: ConvergenceCriterion<T>) -> Self {
        Self {
            source_element,
            source_vertex: None,
            source_position: None,
            criterion,
            max_steps: None,
        }
    }

    pub fn stop_at_local_max(source_element: usize, source_vertex: usize) -> Self {
        Self::new(source_element, ConvergenceCriterion::LocalMax).with_source_vertex(source_vertex)
    }

    pub fn stop_at_value(source_element: usize, source_vertex: usize, threshold: T) -> Self {
        Self::new(source_element, ConvergenceCriterion::GivenValue(threshold))
            .with_source_vertex(source_vertex)
    }

    pub fn stop_at_vertex(source_element: usize, source_vertex: usize, target: usize) -> Self {
        Self::new(source_element, ConvergenceCriterion::GivenVertex(target))
            .with_source_vertex(source_vertex)
    }

    pub fn with_source_vertex(mut self, vid: usize) -> Self {
        self.source_vertex = Some(vid);
        self
    }

    pub fn with_source_position(mut self, position: Point3<T>) -> Self {
        self.source_position = Some(position);
        self
    }

    pub fn with_criterion(mut self, criterion: ConvergenceCriterion<T>) -> Self {
        self.criterion = criterion;
        self
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Step limit used for a mesh with `num_elements` elements.
    pub fn effective_max_steps(&self, num_elements: usize) -> usize {
        self.max_steps.unwrap_or(4 * num_elements + 16)
    }

    /// The position the trace starts from, if one can be determined.
    pub fn source_point<M: MeshTopology<T>>(&self, mesh: &M) -> Option<Point3<T>> {
        self.source_position.or_else(|| {
            self.source_vertex
                .filter(|&v| v < mesh.num_vertices())
                .map(|v| mesh.vertex(v))
        })
    }

    pub(crate) fn resolve<M: MeshTopology<T>>(
        &self,
        mesh: &M,
    ) -> Result<ResolvedOptions<T>, TraceError> {
        let invalid = |msg: String| Err(TraceError::InvalidConfiguration(msg));

        let ne = mesh.num_elements();
        let nv = mesh.num_vertices();
        if self.source_element >= ne {
            return invalid(format!(
                "source element {} out of range ({} elements)",
                self.source_element, ne
            ));
        }
        if let Some(vid) = self.source_vertex {
            if vid >= nv {
                return invalid(format!("source vertex {} out of range ({} vertices)", vid, nv));
            }
            if !mesh.element_contains_vertex(self.source_element, vid) {
                return invalid(format!(
                    "source vertex {} is not a vertex of element {}",
                    vid, self.source_element
                ));
            }
        }

        let Some(position) = self.source_point(mesh) else {
            return invalid("either a source vertex or a source position is required".into());
        };
        if !position.is_finite() {
            return invalid("source position is not finite".into());
        }

        match self.criterion {
            ConvergenceCriterion::GivenValue(t) if !t.is_finite() => {
                return invalid(format!("threshold {} is not finite", t));
            }
            ConvergenceCriterion::GivenVertex(v) if v >= nv => {
                return invalid(format!("target vertex {} out of range ({} vertices)", v, nv));
            }
            _ => {}
        }

        let max_steps = self.effective_max_steps(ne);
        if max_steps == 0 {
            return invalid("max_steps must be positive".into());
        }

        let element = ElementRef::Element(self.source_element);
        // a source vertex only tags the seed sample when the trace starts exactly on it
        let source = match self.source_vertex {
            Some(vid) if self.source_position.is_none_or(|p| p == mesh.vertex(vid)) => {
                CurveSample::at_vertex(position, element, vid)
            }
            _ => CurveSample::new(position, element),
        };

        Ok(ResolvedOptions {
            source,
            criterion: self.criterion,
            max_steps,
        })
    }
}

/// Options after validation against a particular mesh.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedOptions<T: Scalar> {
    pub source: CurveSample<T>,
    pub criterion: ConvergenceCriterion<T>,
    pub max_steps: usize,
}
