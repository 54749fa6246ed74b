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

use thiserror::Error;

use crate::mesh::ElementRef;

/// Why a trace could not produce a curve.
///
/// Reaching the mesh border is not an error; it ends a curve with
/// [`Termination::Boundary`](crate::curve::Termination::Boundary).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// No exit gate could be found, or a rerouted step found no element to
    /// continue into. Retrying from a perturbed source may succeed.
    #[error("geometric degeneracy at {element}: {reason}")]
    GeometricDegeneracy {
        element: ElementRef,
        reason: &'static str,
    },

    #[error("invalid trace configuration: {0}")]
    InvalidConfiguration(String),

    #[error("trace did not terminate within {steps} steps")]
    MaxStepsExceeded { steps: usize },
}

impl TraceError {
    pub(crate) fn degenerate(eid: usize, reason: &'static str) -> Self {
        TraceError::GeometricDegeneracy {
            element: ElementRef::Element(eid),
            reason,
        }
    }

    pub fn is_degeneracy(&self) -> bool {
        matches!(self, TraceError::GeometricDegeneracy { .. })
    }
}
