use crate::math::{Point, Real, Vector};
use crate::shape::Cuboid;
use crate::transformation::utils;

impl Cuboid {
    /// Discretizes the boundary of this cuboid as a triangle mesh.
    ///
    /// Each face is split into a `nsubdiv × nsubdiv` grid of quads, each made of two triangles.
    /// Vertices are not shared between faces.
    pub fn to_trimesh(&self, nsubdiv: u32) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let nsubdiv = nsubdiv.max(1);
        let nverts_per_side = nsubdiv + 1;
        let mut coords = Vec::with_capacity(6 * (nverts_per_side * nverts_per_side) as usize);
        let mut indices = Vec::with_capacity(6 * 2 * (nsubdiv * nsubdiv) as usize);

        for axis in 0..3 {
            for sign in [-1.0, 1.0] {
                // `u × v` must be the outward normal `sign * e_axis`.
                let (u, v) = if sign > 0.0 {
                    ((axis + 1) % 3, (axis + 2) % 3)
                } else {
                    ((axis + 2) % 3, (axis + 1) % 3)
                };

                let base = coords.len() as u32;
                push_face_grid(self.half_extents, axis, sign, u, v, nsubdiv, &mut coords);

                for j in 0..nsubdiv {
                    for i in 0..nsubdiv {
                        let dl = base + j * nverts_per_side + i;
                        let dr = dl + 1;
                        let ul = dl + nverts_per_side;
                        let ur = ul + 1;
                        utils::push_rectangle_indices(ul, ur, dl, dr, &mut indices);
                    }
                }
            }
        }

        (coords, indices)
    }
}

fn push_face_grid(
    half_extents: Vector<Real>,
    axis: usize,
    sign: Real,
    u: usize,
    v: usize,
    nsubdiv: u32,
    out: &mut Vec<Point<Real>>,
) {
    let step = 2.0 / nsubdiv as Real;

    for j in 0..=nsubdiv {
        for i in 0..=nsubdiv {
            let mut pt = Point::origin();
            pt[axis] = sign * half_extents[axis];
            pt[u] = (-1.0 + step * i as Real) * half_extents[u];
            pt[v] = (-1.0 + step * j as Real) * half_extents[v];
            out.push(pt);
        }
    }
}
