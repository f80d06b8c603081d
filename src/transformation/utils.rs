//! Low-level utilities for mesh generation.
//!
//! Circles are generated in the `xz` plane with increasing angles going from `+x` toward `+z`.
//! With that convention, the index helpers below produce triangles whose counter-clockwise
//! winding points outward for a closed solid of revolution around the `y` axis.

use crate::math::{Isometry, Point, Real, DIM};

/// Applies in-place a transformation to an array of points.
pub fn transform(points: &mut [Point<Real>], m: &Isometry<Real>) {
    points.iter_mut().for_each(|p| *p = m * *p);
}

/// Pushes a discretized circle of the `xz` plane, at height `y`, to a buffer.
///
/// The circle has `nsubdiv` vertices, each separated by the angle `dtheta`.
pub fn push_circle(radius: Real, nsubdiv: u32, dtheta: Real, y: Real, out: &mut Vec<Point<Real>>) {
    out.extend((0..nsubdiv).map(|i| {
        let theta = dtheta * i as Real;
        Point::new(theta.cos() * radius, y, theta.sin() * radius)
    }));
}

/// Creates the faces from two circles with the same discretization.
pub fn push_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    push_open_ring_indices(base_lower_circle, base_upper_circle, nsubdiv, out);

    // Close the ring.
    push_rectangle_indices(
        base_upper_circle,
        base_upper_circle + nsubdiv - 1,
        base_lower_circle,
        base_lower_circle + nsubdiv - 1,
        out,
    );
}

/// Creates the faces from two circles with the same discretization, leaving the ring open
/// between the last and the first vertex.
pub fn push_open_ring_indices(
    base_lower_circle: u32,
    base_upper_circle: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    for i in 0..nsubdiv.saturating_sub(1) {
        let bli = base_lower_circle + i;
        let bui = base_upper_circle + i;
        push_rectangle_indices(bui + 1, bui, bli + 1, bli, out);
    }
}

/// Creates the faces from a circle and a point located above it.
///
/// Use [`reverse_clockwising`] on the result if the point is below the circle.
pub fn push_degenerate_top_ring_indices(
    base_circle: u32,
    point: u32,
    nsubdiv: u32,
    out: &mut Vec<[u32; DIM]>,
) {
    for i in 0..nsubdiv.saturating_sub(1) {
        out.push([base_circle + i, point, base_circle + i + 1]);
    }

    out.push([base_circle + nsubdiv - 1, point, base_circle]);
}

/// Pushes indices so that a circle is filled with triangles facing `-y`.
pub fn push_filled_circle_indices(base_circle: u32, nsubdiv: u32, out: &mut Vec<[u32; DIM]>) {
    for i in base_circle + 1..base_circle + nsubdiv - 1 {
        out.push([base_circle, i, i + 1]);
    }
}

/// Given four corner points, pushes to two counter-clockwise triangles to `out`.
///
/// # Arguments:
/// * `ul` - the up-left point.
/// * `dl` - the down-left point.
/// * `dr` - the down-right point.
/// * `ur` - the up-right point.
#[inline]
pub fn push_rectangle_indices(ul: u32, ur: u32, dl: u32, dr: u32, out: &mut Vec<[u32; DIM]>) {
    out.push([ul, dl, dr]);
    out.push([dr, ur, ul]);
}

/// Reverses the winding of every triangle.
#[inline]
pub fn reverse_clockwising(indices: &mut [[u32; DIM]]) {
    indices.iter_mut().for_each(|idx| idx.swap(0, 1));
}
