use meshcollide3d::bounding_volume::{Aabb, BoundingVolume, Obb, Obbrss, Rss};
use meshcollide3d::math::{Isometry, Point, Real, Vector};
use meshcollide3d::partitioning::{BvhBuildParams, BvhModel};
use meshcollide3d::query::{self, triangle_triangle_intersection, CollisionRequest};
use meshcollide3d::shape::TriMesh;
use na::{Translation3, UnitQuaternion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

fn random_point(rng: &mut StdRng, center: Vector<Real>, spread: Real) -> Point<Real> {
    let offset = Vector::new(
        rng.gen_range(-spread..spread),
        rng.gen_range(-spread..spread),
        rng.gen_range(-spread..spread),
    );
    Point::from(center + offset)
}

// A soup of small random triangles scattered in the cube [-1, 1]^3.
fn triangle_soup(rng: &mut StdRng, num_triangles: usize) -> TriMesh {
    let mut vertices = Vec::with_capacity(num_triangles * 3);
    let mut indices = Vec::with_capacity(num_triangles);

    while indices.len() < num_triangles {
        let center = random_point(rng, Vector::zeros(), 1.0).coords;
        let tri = [
            random_point(rng, center, 0.3),
            random_point(rng, center, 0.3),
            random_point(rng, center, 0.3),
        ];

        let area = (tri[1] - tri[0]).cross(&(tri[2] - tri[0])).norm() / 2.0;
        if area > 1.0e-3 {
            let base = vertices.len() as u32;
            vertices.extend_from_slice(&tri);
            indices.push([base, base + 1, base + 2]);
        }
    }

    TriMesh::new(vertices, indices).unwrap()
}

fn random_pose(rng: &mut StdRng) -> Isometry<Real> {
    let axisangle = Vector::new(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
    );
    let translation = Translation3::new(
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
        rng.gen_range(-0.5..0.5),
    );
    Isometry::from_parts(translation, UnitQuaternion::new(axisangle))
}

fn check_soundness<BV: BoundingVolume>(seed: u64, max_leaf_size: u32) {
    let mut rng = StdRng::seed_from_u64(seed);
    let params = BvhBuildParams { max_leaf_size };
    let model1 = BvhModel::<BV>::with_params(triangle_soup(&mut rng, 60), params);
    let model2 = BvhModel::<BV>::with_params(triangle_soup(&mut rng, 60), params);
    model1.assert_well_formed();
    model2.assert_well_formed();

    for _ in 0..10 {
        let pos1 = random_pose(&mut rng);
        let pos2 = random_pose(&mut rng);

        // Map every triangle to its leaf.
        let mut leaf_of1 = vec![0; model1.mesh().num_triangles()];
        let mut leaf_of2 = vec![0; model2.mesh().num_triangles()];
        for (model, leaf_of) in [(&model1, &mut leaf_of1), (&model2, &mut leaf_of2)] {
            for (id, node) in model.nodes().iter().enumerate() {
                if node.is_leaf() {
                    for tri in model.node_triangles(id as u32) {
                        leaf_of[*tri as usize] = id as u32;
                    }
                }
            }
        }

        let emitted: HashSet<(u32, u32)> = model1.leaf_pairs(&pos1, &model2, &pos2).collect();
        let request = CollisionRequest::default();
        let mut any_intersection = false;

        for (i, tri1) in model1.mesh().triangles().enumerate() {
            let tri1 = tri1.transformed(&pos1);
            for (j, tri2) in model2.mesh().triangles().enumerate() {
                let tri2 = tri2.transformed(&pos2);
                if triangle_triangle_intersection(&tri1, &tri2, &request.tolerances).is_some() {
                    any_intersection = true;
                    assert!(
                        emitted.contains(&(leaf_of1[i], leaf_of2[j])),
                        "{} pruned the intersecting triangles {} and {}",
                        BV::KIND,
                        i,
                        j
                    );
                }
            }
        }

        let boolean = query::collide(&model1, &pos1, &model2, &pos2, &CollisionRequest::boolean());
        assert_eq!(boolean.intersects(), any_intersection);

        let full = query::collide(&model1, &pos1, &model2, &pos2, &request);
        assert_eq!(full.intersects(), any_intersection);
        assert_eq!(full.contacts().is_empty(), !any_intersection);
        assert_eq!(full.stats().leaf_pairs, emitted.len());
    }
}

#[test]
fn aabb_traversal_never_prunes_intersecting_triangles() {
    check_soundness::<Aabb>(0, 1);
    check_soundness::<Aabb>(1, 4);
}

#[test]
fn obb_traversal_never_prunes_intersecting_triangles() {
    check_soundness::<Obb>(2, 1);
    check_soundness::<Obb>(3, 4);
}

#[test]
fn rss_traversal_never_prunes_intersecting_triangles() {
    check_soundness::<Rss>(4, 1);
    check_soundness::<Rss>(5, 4);
}

#[test]
fn obbrss_traversal_never_prunes_intersecting_triangles() {
    check_soundness::<Obbrss>(6, 1);
    check_soundness::<Obbrss>(7, 4);
}
