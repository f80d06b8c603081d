use meshcollide3d::bounding_volume::Obbrss;
use meshcollide3d::math::{Isometry, Point, Real, UnitVector, Vector};
use meshcollide3d::partitioning::BvhModel;
use meshcollide3d::query::{self, filter_redundant_contacts, CollisionRequest, Contact};
use meshcollide3d::shape::{Ball, Cuboid, PrimitiveShape};
use meshcollide3d::transformation::{approximate_mesh, TessellationParams};
use na::UnitQuaternion;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn contact_at(position: Point<Real>) -> Contact {
    Contact::new(position, UnitVector::new_normalize(Vector::z()), 0.0, 0, 0)
}

fn positions(contacts: &[Contact]) -> Vec<Point<Real>> {
    contacts.iter().map(|c| c.position).collect()
}

// The hull order may start elsewhere once the interior points are gone.
fn assert_same_contacts(lhs: &[Contact], rhs: &[Contact]) {
    assert_eq!(lhs.len(), rhs.len());
    assert!(lhs.iter().all(|c| rhs.contains(c)));
}

#[test]
fn filtering_is_idempotent_on_random_planar_sets() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let rot = UnitQuaternion::new(Vector::new(
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
            rng.gen_range(-3.0..3.0),
        ));
        let mut contacts: Vec<_> = (0..50)
            .map(|_| {
                let local = Vector::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0), 0.0);
                contact_at(Point::from(rot * local))
            })
            .collect();

        filter_redundant_contacts(&mut contacts, 1.0e-6);
        assert!(contacts.len() >= 3 && contacts.len() < 50);

        let filtered = contacts.clone();
        filter_redundant_contacts(&mut contacts, 1.0e-6);
        assert_same_contacts(&contacts, &filtered);
    }
}

#[test]
fn filtering_is_idempotent_on_query_results() {
    let params = TessellationParams {
        cuboid_subdivisions: 3,
        ..TessellationParams::default()
    };
    let box_shape: PrimitiveShape = Cuboid::new(Vector::repeat(0.5)).into();
    let ball_shape: PrimitiveShape = Ball::new(0.3).into();
    let model1 = BvhModel::<Obbrss>::new(
        approximate_mesh(&box_shape, &Isometry::identity(), &params).unwrap(),
    );
    let model2 = BvhModel::<Obbrss>::new(
        approximate_mesh(&ball_shape, &Isometry::identity(), &params).unwrap(),
    );

    let pos2 = Isometry::translation(0.1, 0.7, -0.05);
    let request = CollisionRequest::default().with_filtered_contacts(true);
    let result = query::collide(&model1, &Isometry::identity(), &model2, &pos2, &request);
    assert!(result.intersects());

    let mut contacts = result.contacts().to_vec();
    filter_redundant_contacts(&mut contacts, request.filter_tolerance);
    assert_same_contacts(&contacts, result.contacts());
}

#[test]
fn duplicates_are_removed_and_small_sets_kept() {
    let mut contacts = vec![
        contact_at(Point::new(0.0, 0.0, 0.0)),
        contact_at(Point::new(1.0e-8, 0.0, 0.0)),
        contact_at(Point::new(1.0, 0.0, 0.0)),
    ];
    filter_redundant_contacts(&mut contacts, 1.0e-6);
    assert_eq!(
        positions(&contacts),
        vec![Point::new(0.0, 0.0, 0.0), Point::new(1.0, 0.0, 0.0)]
    );

    let mut empty = Vec::new();
    filter_redundant_contacts(&mut empty, 1.0e-6);
    assert!(empty.is_empty());
}
