//! Closed uniform Catmull-Rom splines as cubic Bezier segments.
//!
//! Segment `i` runs from `points[i]` to `points[i + 1]` and takes its tangents
//! from the neighbours on either side, all indices wrapping. Control points
//! sit `tension / 6` of the neighbour chord away from each endpoint.

use crate::{
    foundation::core::{BezPath, CubicBez, Point},
    foundation::error::{BlobError, BlobResult},
    foundation::math::fmt_fixed2,
};

/// One cubic per input point, closing the loop back onto `points[0]`.
pub fn closed_cr_cubics(points: &[Point], tension: f64) -> BlobResult<Vec<CubicBez>> {
    check_curve_input(points, tension)?;

    let n = points.len();
    let k = tension / 6.0;
    Ok((0..n)
        .map(|i| {
            let p0 = points[(i + n - 1) % n];
            let p1 = points[i];
            let p2 = points[(i + 1) % n];
            let p3 = points[(i + 2) % n];
            let c1 = p1 + (p2 - p0) * k;
            let c2 = p2 - (p3 - p1) * k;
            CubicBez::new(p1, c1, c2, p2)
        })
        .collect())
}

/// SVG path data (`M x y C ... Z`) for the closed curve, coordinates fixed to two decimals.
pub fn closed_cr_to_bezier(points: &[Point], tension: f64) -> BlobResult<String> {
    let cubics = closed_cr_cubics(points, tension)?;

    let start = points[0];
    let mut d = format!("M {} {}", fmt_fixed2(start.x), fmt_fixed2(start.y));
    for c in &cubics {
        d.push_str(&format!(
            " C {} {} {} {} {} {}",
            fmt_fixed2(c.p1.x),
            fmt_fixed2(c.p1.y),
            fmt_fixed2(c.p2.x),
            fmt_fixed2(c.p2.y),
            fmt_fixed2(c.p3.x),
            fmt_fixed2(c.p3.y),
        ));
    }
    d.push_str(" Z");
    Ok(d)
}

/// The closed curve as unrounded kurbo geometry.
pub fn closed_cr_bezpath(points: &[Point], tension: f64) -> BlobResult<BezPath> {
    let cubics = closed_cr_cubics(points, tension)?;

    let mut path = BezPath::new();
    path.move_to(points[0]);
    for c in cubics {
        path.curve_to(c.p1, c.p2, c.p3);
    }
    path.close_path();
    Ok(path)
}

fn check_curve_input(points: &[Point], tension: f64) -> BlobResult<()> {
    if points.len() < 3 {
        return Err(BlobError::validation(format!(
            "closed curve needs at least 3 points (got {})",
            points.len()
        )));
    }
    if !tension.is_finite() {
        return Err(BlobError::validation("curve tension must be finite"));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/shape/curve.rs"]
mod tests;
