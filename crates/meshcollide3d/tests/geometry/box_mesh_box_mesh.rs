// Box meshes of half-extents 0.5 and 0.25 with the small box resting on the big box top face.

use meshcollide3d::bounding_volume::{Aabb, BoundingVolume, BoundingVolumeKind, Obb, Obbrss, Rss};
use meshcollide3d::math::{Isometry, Point, Real, Vector};
use meshcollide3d::partitioning::{AnyBvhModel, BvhBuildParams, BvhModel};
use meshcollide3d::query::{self, CollisionError, CollisionRequest, CollisionResult};
use meshcollide3d::shape::{Cuboid, PrimitiveShape};
use meshcollide3d::transformation::{approximate_mesh, build_approximate_mesh, TessellationParams};
use na::{Translation3, UnitQuaternion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_4;

const MARGIN: Real = 1.0e-6;

fn box_model<BV: BoundingVolume>(half_extent: Real) -> BvhModel<BV> {
    let shape: PrimitiveShape = Cuboid::new(Vector::repeat(half_extent)).into();
    let params = TessellationParams::default();
    let mesh = approximate_mesh(&shape, &Isometry::identity(), &params).unwrap();
    BvhModel::new(mesh)
}

fn resting_pose() -> Isometry<Real> {
    Isometry::translation(0.0, 0.75, 0.0)
}

fn rotated_pose() -> Isometry<Real> {
    Isometry::new(Vector::new(0.0, 0.75, 0.0), Vector::x() * FRAC_PI_4)
}

fn collide_boxes<BV: BoundingVolume>(
    pos2: &Isometry<Real>,
    request: &CollisionRequest,
) -> CollisionResult {
    collide_boxes_at::<BV>(1.0, &Isometry::identity(), pos2, request)
}

// Same as `collide_boxes` with both boxes scaled by `scale` and placed at `pos1` and `pos2`.
fn collide_boxes_at<BV: BoundingVolume>(
    scale: Real,
    pos1: &Isometry<Real>,
    pos2: &Isometry<Real>,
    request: &CollisionRequest,
) -> CollisionResult {
    let model1 = box_model::<BV>(0.5 * scale);
    let model2 = box_model::<BV>(0.25 * scale);
    query::collide(&model1, pos1, &model2, pos2, request)
}

fn random_isometry(rng: &mut StdRng) -> Isometry<Real> {
    let translation = Vector::new(
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
        rng.gen_range(-10.0..10.0),
    );
    let axisangle = Vector::new(
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
        rng.gen_range(-3.0..3.0),
    );
    Isometry::from_parts(
        Translation3::from(translation),
        UnitQuaternion::from_scaled_axis(axisangle),
    )
}

fn assert_contacts_within(result: &CollisionResult, mins: Point<Real>, maxs: Point<Real>) {
    for contact in result.contacts() {
        let pt = contact.position;
        for i in 0..3 {
            assert!(
                pt[i] >= mins[i] - MARGIN && pt[i] <= maxs[i] + MARGIN,
                "invalid contact point: {}",
                pt
            );
        }
    }
}

fn leaf_pair_count<BV: BoundingVolume>(pos2: &Isometry<Real>) -> usize {
    let model1 = box_model::<BV>(0.5);
    let model2 = box_model::<BV>(0.25);
    model1.leaf_pairs(&Isometry::identity(), &model2, pos2).count()
}

#[test]
fn face_contact_is_bounded_by_the_small_face() {
    fn check<BV: BoundingVolume>() {
        let request = CollisionRequest::default().with_filtered_contacts(true);
        let result = collide_boxes::<BV>(&resting_pose(), &request);

        assert!(result.intersects(), "{}", BV::KIND);
        assert!(result.contact_count() > 0);
        assert_contacts_within(
            &result,
            Point::new(-0.25, 0.5, -0.25),
            Point::new(0.25, 0.5, 0.25),
        );

        for contact in result.contacts() {
            assert_relative_eq!(contact.normal.into_inner(), Vector::y(), epsilon = 1.0e-9);
            assert_relative_eq!(contact.penetration_depth, 0.0, epsilon = 1.0e-9);
        }
    }

    check::<Aabb>();
    check::<Obb>();
    check::<Rss>();
    check::<Obbrss>();
}

#[test]
fn filtering_reduces_face_contact_to_corners() {
    fn check<BV: BoundingVolume>() {
        let request = CollisionRequest::new(1000, true);
        let request_filter = request.with_filtered_contacts(true);

        let result = collide_boxes::<BV>(&resting_pose(), &request);
        let result_filter = collide_boxes::<BV>(&resting_pose(), &request_filter);

        assert_eq!(result_filter.contact_count(), 4, "{}", BV::KIND);
        assert!(result_filter.contact_count() < result.contact_count());

        for contact in result_filter.contacts() {
            assert_relative_eq!(contact.position.x.abs(), 0.25, epsilon = 1.0e-9);
            assert_relative_eq!(contact.position.y, 0.5, epsilon = 1.0e-9);
            assert_relative_eq!(contact.position.z.abs(), 0.25, epsilon = 1.0e-9);
        }
    }

    check::<Aabb>();
    check::<Obb>();
    check::<Rss>();
    check::<Obbrss>();
}

#[test]
fn face_contact_survives_a_shared_transform() {
    fn check<BV: BoundingVolume>(seed: u64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let request = CollisionRequest::default();

        for _ in 0..100 {
            let g = random_isometry(&mut rng);
            let result = collide_boxes_at::<BV>(1.0, &g, &(g * resting_pose()), &request);

            assert!(result.intersects(), "{}: missed contact at {}", BV::KIND, g);
            assert!(result.contact_count() > 0);

            for contact in result.contacts() {
                let pt = g.inverse_transform_point(&contact.position);
                assert!(pt.x.abs() <= 0.25 + MARGIN && pt.z.abs() <= 0.25 + MARGIN);
                assert_relative_eq!(pt.y, 0.5, epsilon = MARGIN);
            }
        }
    }

    check::<Aabb>(0);
    check::<Obb>(1);
    check::<Rss>(2);
    check::<Obbrss>(3);
}

#[test]
fn overlap_does_not_depend_on_scale() {
    // The small box is centered on the top face of the big box.
    fn check<BV: BoundingVolume>() {
        let request = CollisionRequest::default();
        let identity = Isometry::identity();
        let reference = collide_boxes_at::<BV>(1.0, &identity, &resting_pose_at(0.5), &request);
        assert!(reference.intersects());

        for scale in [1.0e-4, 1.0e-8, 1.0e-12] {
            let pos2 = resting_pose_at(0.5 * scale);
            let result = collide_boxes_at::<BV>(scale, &identity, &pos2, &request);
            assert!(result.intersects(), "{} at scale {}", BV::KIND, scale);
            assert_eq!(result.contact_count(), reference.contact_count());
        }
    }

    fn resting_pose_at(height: Real) -> Isometry<Real> {
        Isometry::translation(0.0, height, 0.0)
    }

    check::<Aabb>();
    check::<Obb>();
    check::<Rss>();
    check::<Obbrss>();
}

#[test]
fn rotated_box_contact_is_bounded() {
    // The small box is turned by 45 degrees around `x`, so one of its edges sinks into the big
    // box and crosses its top face over |z| <= 0.25 * sqrt(2) - 0.25.
    let half_width = 0.25 * Real::sqrt(2.0) - 0.25;

    fn check<BV: BoundingVolume>(half_width: Real) {
        let request = CollisionRequest::default().with_filtered_contacts(true);
        let result = collide_boxes::<BV>(&rotated_pose(), &request);

        assert!(result.intersects(), "{}", BV::KIND);
        assert!(result.contact_count() > 0);
        assert_contacts_within(
            &result,
            Point::new(-0.25, 0.5, -half_width),
            Point::new(0.25, 0.5, half_width),
        );
        assert!(result.contacts().iter().all(|c| c.penetration_depth >= 0.0));
    }

    check::<Aabb>(half_width);
    check::<Obb>(half_width);
    check::<Rss>(half_width);
    check::<Obbrss>(half_width);
}

#[test]
fn rotated_box_reports_penetration_depth() {
    let request = CollisionRequest::default();
    let result = collide_boxes::<Obbrss>(&rotated_pose(), &request);
    let expected = 0.5 - (0.75 - 0.25 * Real::sqrt(2.0));

    let deepest = result
        .contacts()
        .iter()
        .map(|c| c.penetration_depth)
        .fold(0.0, Real::max);
    assert_relative_eq!(deepest, expected, epsilon = 1.0e-9);
}

#[test]
fn separated_boxes_do_not_collide() {
    fn check<BV: BoundingVolume>() {
        let pos2 = Isometry::translation(0.0, 0.76, 0.0);

        for request in [
            CollisionRequest::default(),
            CollisionRequest::default().with_filtered_contacts(true),
            CollisionRequest::boolean(),
        ] {
            let result = collide_boxes::<BV>(&pos2, &request);
            assert!(!result.intersects(), "{}", BV::KIND);
            assert_eq!(result.contact_count(), 0);
        }
    }

    check::<Aabb>();
    check::<Obb>();
    check::<Rss>();
    check::<Obbrss>();

    // The tight volumes already prune the gap without testing any triangle pair.
    let pos2 = Isometry::translation(0.0, 0.76, 0.0);
    let result = collide_boxes::<Obbrss>(&pos2, &CollisionRequest::default());
    assert_eq!(result.stats().triangle_tests, 0);
}

#[test]
fn contained_box_does_not_collide() {
    // Only the boundaries are tested: a mesh strictly inside another one doesn't touch it.
    let result = collide_boxes::<Obb>(&Isometry::identity(), &CollisionRequest::default());
    assert!(!result.intersects());
    assert_eq!(result.contact_count(), 0);
}

#[test]
fn max_contacts_is_respected() {
    for max_contacts in [1, 2, 3, 5] {
        for filter in [false, true] {
            let request = CollisionRequest::new(max_contacts, true).with_filtered_contacts(filter);
            let result = collide_boxes::<Obbrss>(&resting_pose(), &request);
            assert!(result.intersects());
            assert!(result.contact_count() <= max_contacts);
            assert!(result.contact_count() > 0);
        }
    }
}

#[test]
fn early_exit_tests_fewer_triangle_pairs() {
    let exhaustive = collide_boxes::<Obbrss>(&resting_pose(), &CollisionRequest::default());
    let boolean = collide_boxes::<Obbrss>(&resting_pose(), &CollisionRequest::boolean());
    let capped = collide_boxes::<Obbrss>(&resting_pose(), &CollisionRequest::new(1, true));

    assert!(boolean.intersects());
    assert_eq!(boolean.contact_count(), 0);
    assert!(boolean.stats().triangle_tests < exhaustive.stats().triangle_tests);
    assert!(capped.stats().triangle_tests <= exhaustive.stats().triangle_tests);

    let no_contacts = collide_boxes::<Obbrss>(&resting_pose(), &CollisionRequest::new(10, false));
    assert!(no_contacts.intersects());
    assert_eq!(no_contacts.contact_count(), 0);
}

#[test]
fn result_can_be_reused() {
    let model1 = box_model::<Obb>(0.5);
    let model2 = box_model::<Obb>(0.25);
    let request = CollisionRequest::default();
    let mut result = CollisionResult::new();

    let identity = Isometry::identity();
    query::collide_into(&model1, &identity, &model2, &resting_pose(), &request, &mut result);
    assert!(result.intersects());
    let count = result.contact_count();
    assert!(result.contact(count - 1).is_some());
    assert!(result.contact(count).is_none());

    let far = Isometry::translation(3.0, 0.0, 0.0);
    query::collide_into(&model1, &identity, &model2, &far, &request, &mut result);
    assert!(!result.intersects());
    assert_eq!(result.contact_count(), 0);
}

#[test]
fn tighter_volumes_emit_fewer_leaf_pairs() {
    for pos2 in [resting_pose(), rotated_pose()] {
        let aabb = leaf_pair_count::<Aabb>(&pos2);
        let obb = leaf_pair_count::<Obb>(&pos2);
        let obbrss = leaf_pair_count::<Obbrss>(&pos2);
        assert!(obb <= aabb, "{} > {}", obb, aabb);
        assert!(obbrss <= obb, "{} > {}", obbrss, obb);
    }
}

#[test]
fn shapes_collide_through_runtime_selected_hierarchies() {
    let big: PrimitiveShape = Cuboid::new(Vector::repeat(0.5)).into();
    let small: PrimitiveShape = Cuboid::new(Vector::repeat(0.25)).into();
    let params = TessellationParams::default();
    let request = CollisionRequest::default().with_filtered_contacts(true);

    for kind in BoundingVolumeKind::ALL {
        let result = query::collide_shapes(
            &big,
            &Isometry::identity(),
            &small,
            &resting_pose(),
            kind,
            &params,
            &request,
        )
        .unwrap();
        assert!(result.intersects(), "{}", kind);
        assert_contacts_within(
            &result,
            Point::new(-0.25, 0.5, -0.25),
            Point::new(0.25, 0.5, 0.25),
        );
    }

    let identity = Isometry::identity();
    let model1 =
        build_approximate_mesh(&big, &identity, BoundingVolumeKind::Aabb, &params).unwrap();
    let model2 = AnyBvhModel::new(
        approximate_mesh(&small, &Isometry::identity(), &params).unwrap(),
        BoundingVolumeKind::Rss,
        BvhBuildParams::default(),
    );
    let err = model1
        .collide(&Isometry::identity(), &model2, &resting_pose(), &request)
        .unwrap_err();
    assert_eq!(
        err,
        CollisionError::MismatchedVolumeKinds {
            kind1: BoundingVolumeKind::Aabb,
            kind2: BoundingVolumeKind::Rss,
        }
    );
}
