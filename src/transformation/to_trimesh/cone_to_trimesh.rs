use crate::math::{Point, Real};
use crate::shape::Cone;
use crate::transformation::utils;
use std::f64::consts::TAU;

impl Cone {
    /// Discretizes the boundary of this cone as a triangle mesh.
    ///
    /// The apex is the last vertex, located at `+half_height` along `y`.
    pub fn to_trimesh(&self, nsubdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let nsubdiv = nsubdiv.max(3);
        let dtheta = TAU / nsubdiv as Real;
        let mut coords = Vec::with_capacity(nsubdiv as usize + 1);
        let mut indices = Vec::new();

        utils::push_circle(self.radius, nsubdiv, dtheta, -self.half_height, &mut coords);
        coords.push(Point::new(0.0, self.half_height, 0.0));

        utils::push_degenerate_top_ring_indices(0, nsubdiv, nsubdiv, &mut indices);
        utils::push_filled_circle_indices(0, nsubdiv, &mut indices);

        (coords, indices)
    }
}
