use meshcollide3d::bounding_volume::{Aabb, Obbrss};
use meshcollide3d::math::{Isometry, Real, Vector};
use meshcollide3d::partitioning::{AnyBvhModel, BvhModel};
use meshcollide3d::query::{self, CollisionRequest, CollisionResult};
use meshcollide3d::shape::{Capsule, Cuboid, PrimitiveShape};
use meshcollide3d::transformation::{approximate_mesh, TessellationParams};
use std::sync::Arc;
use std::thread;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn hierarchies_are_send_and_sync() {
    assert_send_sync::<BvhModel<Aabb>>();
    assert_send_sync::<BvhModel<Obbrss>>();
    assert_send_sync::<AnyBvhModel>();
    assert_send_sync::<CollisionResult>();
}

#[test]
fn concurrent_queries_match_sequential_ones() {
    let params = TessellationParams::default();
    let cuboid: PrimitiveShape = Cuboid::new(Vector::new(1.0, 0.2, 1.0)).into();
    let capsule: PrimitiveShape = Capsule::new(0.3, 0.2).into();
    let model1 = Arc::new(BvhModel::<Obbrss>::new(
        approximate_mesh(&cuboid, &Isometry::identity(), &params).unwrap(),
    ));
    let model2 = Arc::new(BvhModel::<Obbrss>::new(
        approximate_mesh(&capsule, &Isometry::identity(), &params).unwrap(),
    ));
    let request = CollisionRequest::default();

    let poses: Vec<Isometry<Real>> = (0..8)
        .map(|i| {
            let angle = i as Real * 0.4;
            Isometry::new(Vector::new(0.1 * i as Real, 0.6, 0.0), Vector::z() * angle)
        })
        .collect();

    let sequential: Vec<_> = poses
        .iter()
        .map(|pos2| query::collide(&*model1, &Isometry::identity(), &*model2, pos2, &request))
        .collect();

    let handles: Vec<_> = poses
        .iter()
        .map(|pos2| {
            let model1 = Arc::clone(&model1);
            let model2 = Arc::clone(&model2);
            let pos2 = *pos2;
            thread::spawn(move || {
                query::collide(&*model1, &Isometry::identity(), &*model2, &pos2, &request)
            })
        })
        .collect();

    let concurrent: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(sequential, concurrent);
    assert!(sequential.iter().any(|result| result.intersects()));
    assert!(sequential.iter().any(|result| !result.intersects()));
}
