//! Oriented Bounding Box.

use crate::bounding_volume::{Aabb, BoundingVolume, BoundingVolumeKind, OVERLAP_RELATIVE_MARGIN};
use crate::math::{Isometry, Point, Real, Rotation, Translation, UnitVector, Vector, DIM};

/// Absolute value added to the rotation entries of the separating axis test.
///
/// Avoids missing an overlap when two box edges are nearly parallel and their cross product is
/// close to zero.
const SAT_EPSILON: Real = 1.0e-12;

/// Relative improvement the principal-axes box must achieve over the model-aligned box to be
/// selected.
const PRINCIPAL_BOX_GAIN: Real = 1.0e-6;

/// An Oriented Bounding Box (OBB).
///
/// The box axes are either the principal axes of the bounded points (eigenvectors of their
/// covariance matrix) or the axes of the mesh local frame, whichever gives the smallest box.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Obb {
    /// The position of the box center and the orientation of its axes, in the local frame of
    /// the mesh.
    pub frame: Isometry<Real>,
    /// The half-extents of the box along each of its axes.
    pub half_extents: Vector<Real>,
}

impl Obb {
    /// Creates a new oriented box.
    #[inline]
    pub fn new(frame: Isometry<Real>, half_extents: Vector<Real>) -> Self {
        Self {
            frame,
            half_extents,
        }
    }

    /// The oriented box with the same extents as an axis-aligned box.
    #[inline]
    pub fn from_aabb(aabb: &Aabb) -> Self {
        Self::new(
            Isometry::from(Translation::from(aabb.center().coords)),
            aabb.half_extents(),
        )
    }

    /// Fits a box aligned with the principal axes of the given points.
    ///
    /// # Panics
    ///
    /// Panics if `pts` is empty.
    pub fn principal_axes_box(pts: &[Point<Real>]) -> Self {
        let principal = crate::utils::principal_frame(pts);
        let rot = Rotation::from_rotation_matrix(&na::Rotation3::from_matrix_unchecked(
            principal.axes,
        ));

        let mut mins = Vector::repeat(Real::MAX);
        let mut maxs = Vector::repeat(-Real::MAX);

        for pt in pts {
            let local = rot.inverse_transform_vector(&(pt - principal.center));
            mins = mins.inf(&local);
            maxs = maxs.sup(&local);
        }

        let center = principal.center + rot * ((mins + maxs) / 2.0);
        Self::new(
            Isometry::from_parts(Translation::from(center.coords), rot),
            (maxs - mins) / 2.0,
        )
    }

    /// The `i`-th axis of this box, expressed in the local frame of the mesh.
    #[inline]
    pub fn axis(&self, i: usize) -> UnitVector<Real> {
        self.frame.rotation * Vector::ith_axis(i)
    }

    /// The 8 corners of this box, expressed in the local frame of the mesh.
    pub fn vertices(&self) -> [Point<Real>; 8] {
        let local = Aabb::from_half_extents(Point::origin(), self.half_extents);
        local.vertices().map(|pt| self.frame * pt)
    }

    /// A measure of the box size, proportional to its surface area.
    #[inline]
    pub fn surface_measure(&self) -> Real {
        let he = &self.half_extents;
        he.x * he.y + he.y * he.z + he.z * he.x
    }
}

/// Tests if two oriented boxes are separated by more than `margin` along one of the 15
/// potential separating axes.
///
/// The first box is centered at the origin and aligned with the coordinate axes. `pos12` is the
/// position of the second box relative to the first one.
pub fn obb_obb_separated(
    half_extents1: &Vector<Real>,
    pos12: &Isometry<Real>,
    half_extents2: &Vector<Real>,
    margin: Real,
) -> bool {
    let a = half_extents1;
    let b = half_extents2;
    let r = pos12.rotation.to_rotation_matrix().into_inner();
    let abs_r = r.abs().add_scalar(SAT_EPSILON);
    let t = pos12.translation.vector;

    // Face normals of the first box.
    for i in 0..DIM {
        let ra = a[i];
        let rb = b.dot(&abs_r.row(i).transpose());
        if t[i].abs() > ra + rb + margin {
            return true;
        }
    }

    // Face normals of the second box.
    for j in 0..DIM {
        let ra = a.dot(&abs_r.column(j));
        let rb = b[j];
        if t.dot(&r.column(j)).abs() > ra + rb + margin {
            return true;
        }
    }

    // Edge-edge cross products.
    for i in 0..DIM {
        let (i1, i2) = ((i + 1) % DIM, (i + 2) % DIM);

        for j in 0..DIM {
            let (j1, j2) = ((j + 1) % DIM, (j + 2) % DIM);
            let ra = a[i1] * abs_r[(i2, j)] + a[i2] * abs_r[(i1, j)];
            let rb = b[j1] * abs_r[(i, j2)] + b[j2] * abs_r[(i, j1)];
            let dist = (t[i2] * r[(i1, j)] - t[i1] * r[(i2, j)]).abs();

            if dist > ra + rb + margin {
                return true;
            }
        }
    }

    false
}

impl BoundingVolume for Obb {
    const KIND: BoundingVolumeKind = BoundingVolumeKind::Obb;

    /// Fits the smallest of the principal-axes box and the model-aligned box.
    ///
    /// The model-aligned box wins ties, and any improvement smaller than a relative `1.0e-6`.
    fn from_points(pts: &[Point<Real>]) -> Self {
        let aligned = Obb::from_aabb(&Aabb::from_points(pts));

        if pts.is_empty() {
            return aligned;
        }

        let principal = Obb::principal_axes_box(pts);

        if principal.surface_measure() < aligned.surface_measure() * (1.0 - PRINCIPAL_BOX_GAIN) {
            principal
        } else {
            aligned
        }
    }

    #[inline]
    fn center(&self) -> Point<Real> {
        Point::from(self.frame.translation.vector)
    }

    #[inline]
    fn intersects(&self, pos12: &Isometry<Real>, other: &Obb) -> bool {
        let box_pos12 = self.frame.inv_mul(&(pos12 * other.frame));
        let scale = self
            .half_extents
            .amax()
            .max(other.half_extents.amax())
            .max(box_pos12.translation.vector.amax());
        let margin = OVERLAP_RELATIVE_MARGIN * scale;
        !obb_obb_separated(&self.half_extents, &box_pos12, &other.half_extents, margin)
    }

    fn merged(&self, other: &Obb) -> Obb {
        let [a0, a1, a2, a3, a4, a5, a6, a7] = self.vertices();
        let [b0, b1, b2, b3, b4, b5, b6, b7] = other.vertices();
        Obb::from_points(&[
            a0, a1, a2, a3, a4, a5, a6, a7, b0, b1, b2, b3, b4, b5, b6, b7,
        ])
    }

    #[inline]
    fn loosened(&self, amount: Real) -> Obb {
        assert!(amount >= 0.0, "The loosening margin must be positive.");
        Obb::new(self.frame, self.half_extents.add_scalar(amount))
    }

    #[inline]
    fn contains_local_point(&self, point: &Point<Real>) -> bool {
        let local = self.frame.inverse_transform_point(point);
        (0..DIM).all(|i| local[i].abs() <= self.half_extents[i])
    }

    #[inline]
    fn split_axis(&self) -> UnitVector<Real> {
        self.axis(self.half_extents.imax())
    }
}
