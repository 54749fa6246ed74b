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

//! Retrying traces that hit a geometric degeneracy from a slightly moved source.

use rand::Rng;
use smallvec::SmallVec;
use tracing::debug;

use crate::{
    curve::{builder::IntegralCurve, error::TraceError, options::TraceOptions},
    field::VectorField,
    geometry::point::{Point3, PointOps},
    geometry::vector::VectorOps,
    mesh::{MeshTopology, SurfaceMesh, VolumeMesh},
    numeric::scalar::Scalar,
};

/// Fraction of the way towards a random interior point used by the first retry.
pub const INITIAL_JITTER: f64 = 1e-3;

/// `options` with the source moved a fraction `strength` of the way towards a
/// random point inside the source element. The moved source carries no vertex.
///
/// Returns `None` when the source element or position cannot be determined.
pub fn jittered_source<T, M, R>(
    mesh: &M,
    options: &TraceOptions<T>,
    rng: &mut R,
    strength: T,
) -> Option<TraceOptions<T>>
where
    T: Scalar,
    M: MeshTopology<T>,
    R: Rng + ?Sized,
{
    let eid = options.source_element;
    if eid >= mesh.num_elements() {
        return None;
    }
    let from = options.source_point(mesh)?;

    // strictly positive barycentric weights keep the target inside the element
    let weights: SmallVec<[T; 4]> = (0..M::ELEMENT_VERTICES)
        .map(|_| T::from_f64(rng.random::<f64>() + f64::EPSILON))
        .collect();
    let total = weights.iter().fold(T::zero(), |acc, &w| acc + w);

    let mut target = [T::zero(); 3];
    for (i, &w) in weights.iter().enumerate() {
        let p = mesh.element_vertex(eid, i);
        for (k, t) in target.iter_mut().enumerate() {
            *t = *t + p[k] * (w / total);
        }
    }
    let target = Point3::from(target);
    let moved = from.add_vector(&from.vector_to(&target).scale(strength));

    Some(TraceOptions {
        source_vertex: None,
        source_position: Some(moved),
        ..options.clone()
    })
}

/// Runs `trace` with `options`, then up to `attempts` more times from jittered
/// sources while it keeps failing with [`TraceError::GeometricDegeneracy`].
/// The jitter doubles with every attempt. Other errors are returned at once.
pub fn retry_with_jitter<T, M, R, G>(
    mesh: &M,
    options: &TraceOptions<T>,
    rng: &mut R,
    attempts: usize,
    mut trace: G,
) -> Result<IntegralCurve<T>, TraceError>
where
    T: Scalar,
    M: MeshTopology<T>,
    R: Rng + ?Sized,
    G: FnMut(&TraceOptions<T>) -> Result<IntegralCurve<T>, TraceError>,
{
    let mut result = trace(options);
    let mut strength = T::from_f64(INITIAL_JITTER);
    for attempt in 1..=attempts {
        match &result {
            Err(err) if err.is_degeneracy() => {
                debug!(attempt, error = %err, "retrying from a jittered source");
            }
            _ => return result,
        }
        let Some(jittered) = jittered_source(mesh, options, rng, strength) else {
            return result;
        };
        result = trace(&jittered);
        strength = (strength + strength).min(T::one());
    }
    result
}

impl<T: Scalar> IntegralCurve<T> {
    /// [`IntegralCurve::on_surface`] with jittered retries on degeneracy.
    pub fn on_surface_with_retries<M, F, R>(
        mesh: &M,
        field: &F,
        options: &TraceOptions<T>,
        rng: &mut R,
        attempts: usize,
    ) -> Result<Self, TraceError>
    where
        M: SurfaceMesh<T>,
        F: VectorField<T>,
        R: Rng + ?Sized,
    {
        retry_with_jitter(mesh, options, rng, attempts, |opts| {
            Self::on_surface(mesh, field, opts)
        })
    }

    /// [`IntegralCurve::in_volume`] with jittered retries on degeneracy.
    pub fn in_volume_with_retries<M, F, R>(
        mesh: &M,
        field: &F,
        options: &TraceOptions<T>,
        rng: &mut R,
        attempts: usize,
    ) -> Result<Self, TraceError>
    where
        M: VolumeMesh<T>,
        F: VectorField<T>,
        R: Rng + ?Sized,
    {
        retry_with_jitter(mesh, options, rng, attempts, |opts| {
            Self::in_volume(mesh, field, opts)
        })
    }
}
