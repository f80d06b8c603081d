use crate::math::{Matrix, Point, Real, Vector};

/// The principal axes of a point cloud.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrincipalFrame {
    /// The centroid of the point cloud.
    pub center: Point<Real>,
    /// A rotation matrix whose columns are the principal axes, sorted by decreasing variance.
    ///
    /// The third column is the direction of least variance, i.e., the normal of the best-fit
    /// plane of the point cloud.
    pub axes: Matrix<Real>,
    /// The variance of the point cloud along each principal axis, sorted decreasingly.
    pub variances: Vector<Real>,
}

/// Computes the principal axes of a set of points from the eigen decomposition of their
/// covariance matrix.
///
/// The returned axes always form a right-handed orthonormal basis.
///
/// # Panics
///
/// Panics if `pts` is empty.
pub fn principal_frame(pts: &[Point<Real>]) -> PrincipalFrame {
    let (center, cov) = crate::utils::center_cov(pts);
    let eigen = cov.symmetric_eigen();

    let mut order = [0, 1, 2];
    order.sort_by(|&i, &j| eigen.eigenvalues[j].total_cmp(&eigen.eigenvalues[i]));

    let x = eigen.eigenvectors.column(order[0]).into_owned();
    let y = eigen.eigenvectors.column(order[1]).into_owned();
    let z = x.cross(&y);

    PrincipalFrame {
        center,
        axes: Matrix::from_columns(&[x, y, z]),
        variances: Vector::new(
            eigen.eigenvalues[order[0]].max(0.0),
            eigen.eigenvalues[order[1]].max(0.0),
            eigen.eigenvalues[order[2]].max(0.0),
        ),
    }
}
