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

//! Integral curves of piecewise-constant vector fields over triangle and
//! tetrahedral meshes.
//!
//! ```no_run
//! use integral_curve::{
//!     curve::{IntegralCurve, TraceOptions},
//!     field::ElementField,
//!     geometry::Point3,
//!     mesh::Trimesh,
//! };
//!
//! let mesh = Trimesh::new(
//!     vec![
//!         Point3::new(0.0, 0.0, 0.0),
//!         Point3::new(1.0, 0.0, 0.0),
//!         Point3::new(0.0, 1.0, 0.0),
//!     ],
//!     vec![[0, 1, 2]],
//! )?
//! .with_scalar_fn(|p| p[0]);
//! let field = ElementField::gradient_of_trimesh(&mesh);
//! let curve = IntegralCurve::on_surface(&mesh, &field, &TraceOptions::stop_at_local_max(0, 0))?;
//! println!("{} samples", curve.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod curve;
pub mod field;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod numeric;

pub use curve::{
    ConvergenceCriterion, CurveSample, IntegralCurve, Termination, TraceError, TraceOptions,
    TraceStats,
};
pub use mesh::{ElementRef, MeshError};
pub use numeric::Scalar;
