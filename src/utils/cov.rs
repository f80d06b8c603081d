use crate::math::{Matrix, Point, Real};
use crate::num::FromPrimitive;

/// Computes the center and the covariance matrix of a set of points.
///
/// # Panics
///
/// Panics if the input slice is empty.
pub fn center_cov(pts: &[Point<Real>]) -> (Point<Real>, Matrix<Real>) {
    let center = crate::utils::center(pts);
    let mut cov: Matrix<Real> = na::zero();
    let normalizer: Real = 1.0 / Real::from_usize(pts.len()).unwrap_or(1.0);

    for p in pts.iter() {
        let cp = *p - center;
        // NOTE: this is more numerically stable than using cov.syger.
        cov += cp * (cp * normalizer).transpose();
    }

    (center, cov)
}
