use crate::math::{Point, Real};
use crate::shape::Cylinder;
use crate::transformation::utils;
use std::f64::consts::TAU;

impl Cylinder {
    /// Discretizes the boundary of this cylinder as a triangle mesh.
    pub fn to_trimesh(&self, nsubdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let nsubdiv = nsubdiv.max(3);
        let dtheta = TAU / nsubdiv as Real;
        let mut coords = Vec::with_capacity(2 * nsubdiv as usize);
        let mut indices = Vec::new();

        utils::push_circle(self.radius, nsubdiv, dtheta, -self.half_height, &mut coords);
        utils::push_circle(self.radius, nsubdiv, dtheta, self.half_height, &mut coords);

        utils::push_ring_indices(0, nsubdiv, nsubdiv, &mut indices);
        utils::push_filled_circle_indices(0, nsubdiv, &mut indices);
        utils::push_filled_circle_indices(nsubdiv, nsubdiv, &mut indices);

        let len = indices.len();
        let top_start_id = len - (nsubdiv as usize - 2);
        utils::reverse_clockwising(&mut indices[top_start_id..]);

        (coords, indices)
    }
}
