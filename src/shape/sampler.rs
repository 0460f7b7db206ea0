use std::f64::consts::TAU;

use crate::{
    foundation::core::{Point, PointSequence},
    foundation::error::BlobResult,
    random::seeded::{Mulberry32, SeededRandomSource},
    shape::params::ShapeParams,
};

/// Validate `params` and sample the blob outline from a PRNG seeded with `params.seed`.
pub fn generate_points(params: &ShapeParams) -> BlobResult<PointSequence> {
    params.validate()?;
    let mut rng = Mulberry32::new(params.seed);
    Ok(sample_points(params, &mut rng))
}

/// Sample `point_count` points evenly spaced around the circle, each perturbed
/// radially then angularly by one draw from `rng` apiece.
///
/// The draw order is part of the output contract. Radius is not clamped: a
/// negative effective radius mirrors the point through the center.
pub fn sample_points<R>(params: &ShapeParams, rng: &mut R) -> PointSequence
where
    R: SeededRandomSource + ?Sized,
{
    let n = params.point_count;
    let step = TAU / n as f64;
    (0..n)
        .map(|i| {
            let base = i as f64 * step;
            let r = params.radius * (1.0 + (rng.next_f64() * 2.0 - 1.0) * params.variance);
            let angle = base + (rng.next_f64() * 2.0 - 1.0) * params.jitter;
            Point::new(angle.cos() * r, angle.sin() * r)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/shape/sampler.rs"]
mod tests;
