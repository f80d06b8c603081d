use crate::math::{Point, Real};
use crate::shape::Ball;
use crate::transformation::utils;
use std::f64::consts::{PI, TAU};

impl Ball {
    /// Discretizes the boundary of this ball as a triangle mesh.
    ///
    /// The sphere is split into `nphi_subdiv` latitude bands, each made of `ntheta_subdiv`
    /// longitude sectors. Both poles are single vertices.
    pub fn to_trimesh(
        &self,
        ntheta_subdiv: u32,
        nphi_subdiv: u32,
    ) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let ntheta_subdiv = ntheta_subdiv.max(3);
        let nphi_subdiv = nphi_subdiv.max(2);
        let dtheta = TAU / ntheta_subdiv as Real;
        let dphi = PI / nphi_subdiv as Real;

        let mut coords = Vec::with_capacity((ntheta_subdiv * (nphi_subdiv - 1) + 2) as usize);
        let mut idx = Vec::new();

        coords.push(Point::new(0.0, -self.radius, 0.0));

        for k in 1..nphi_subdiv {
            // Polar angle measured from the south pole.
            let phi = dphi * k as Real;
            utils::push_circle(
                self.radius * phi.sin(),
                ntheta_subdiv,
                dtheta,
                -self.radius * phi.cos(),
                &mut coords,
            );
        }

        coords.push(Point::new(0.0, self.radius, 0.0));
        let north = coords.len() as u32 - 1;

        utils::push_degenerate_top_ring_indices(1, 0, ntheta_subdiv, &mut idx);
        utils::reverse_clockwising(&mut idx);

        for k in 0..nphi_subdiv - 2 {
            let lower = 1 + k * ntheta_subdiv;
            utils::push_ring_indices(lower, lower + ntheta_subdiv, ntheta_subdiv, &mut idx);
        }

        let last_ring = 1 + (nphi_subdiv - 2) * ntheta_subdiv;
        utils::push_degenerate_top_ring_indices(last_ring, north, ntheta_subdiv, &mut idx);

        (coords, idx)
    }
}
