use crate::math::{Point, Real};
use crate::shape::Capsule;
use crate::transformation::utils;
use std::f64::consts::{FRAC_PI_2, TAU};

impl Capsule {
    /// Discretizes the boundary of this capsule as a triangle mesh.
    ///
    /// Each hemispherical cap is split into `nphi_subdiv / 2` latitude bands (at least one) and
    /// the cylindrical part joins the two equators with a single band.
    pub fn to_trimesh(
        &self,
        ntheta_subdiv: u32,
        nphi_subdiv: u32,
    ) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let ntheta_subdiv = ntheta_subdiv.max(3);
        let nbands = (nphi_subdiv / 2).max(1);
        let dtheta = TAU / ntheta_subdiv as Real;
        let dphi = FRAC_PI_2 / nbands as Real;

        let mut coords = Vec::with_capacity((2 * nbands * ntheta_subdiv + 2) as usize);
        let mut idx = Vec::new();

        coords.push(Point::new(0.0, -self.half_height - self.radius, 0.0));

        // Bottom hemisphere, from the ring closest to the pole up to the equator.
        for k in 1..=nbands {
            let phi = dphi * k as Real;
            utils::push_circle(
                self.radius * phi.sin(),
                ntheta_subdiv,
                dtheta,
                -self.half_height - self.radius * phi.cos(),
                &mut coords,
            );
        }

        // Top hemisphere, from the equator up to the ring closest to the pole.
        for k in 0..nbands {
            let phi = dphi * k as Real;
            utils::push_circle(
                self.radius * phi.cos(),
                ntheta_subdiv,
                dtheta,
                self.half_height + self.radius * phi.sin(),
                &mut coords,
            );
        }

        coords.push(Point::new(0.0, self.half_height + self.radius, 0.0));
        let north = coords.len() as u32 - 1;
        let nrings = 2 * nbands;

        utils::push_degenerate_top_ring_indices(1, 0, ntheta_subdiv, &mut idx);
        utils::reverse_clockwising(&mut idx);

        for k in 0..nrings - 1 {
            let lower = 1 + k * ntheta_subdiv;
            utils::push_ring_indices(lower, lower + ntheta_subdiv, ntheta_subdiv, &mut idx);
        }

        let last_ring = 1 + (nrings - 1) * ntheta_subdiv;
        utils::push_degenerate_top_ring_indices(last_ring, north, ntheta_subdiv, &mut idx);

        (coords, idx)
    }
}
