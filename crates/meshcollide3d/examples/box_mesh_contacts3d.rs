extern crate nalgebra as na;

use meshcollide3d::bounding_volume::BoundingVolumeKind;
use meshcollide3d::query::{self, CollisionRequest};
use meshcollide3d::shape::Cuboid;
use meshcollide3d::transformation::TessellationParams;
use na::{Isometry3, Vector3};

fn main() {
    let big = Cuboid::new(Vector3::new(0.5, 0.5, 0.5));
    let small = Cuboid::new(Vector3::new(0.25, 0.25, 0.25));
    let params = TessellationParams::default();

    let big_pos = Isometry3::identity();
    let small_pos_resting = Isometry3::translation(0.0, 0.75, 0.0);
    let small_pos_rotated = Isometry3::new(
        Vector3::new(0.0, 0.75, 0.0),
        Vector3::x() * std::f64::consts::FRAC_PI_4,
    );
    let small_pos_too_far = Isometry3::translation(0.0, 2.0, 0.0);

    let request = CollisionRequest::default();
    let request_filter = request.with_filtered_contacts(true);

    for kind in BoundingVolumeKind::ALL {
        for (name, small_pos) in [
            ("resting", small_pos_resting),
            ("rotated", small_pos_rotated),
            ("too far", small_pos_too_far),
        ] {
            let all = query::collide_shapes(
                &big.into(),
                &big_pos,
                &small.into(),
                &small_pos,
                kind,
                &params,
                &request,
            )
            .unwrap();
            let filtered = query::collide_shapes(
                &big.into(),
                &big_pos,
                &small.into(),
                &small_pos,
                kind,
                &params,
                &request_filter,
            )
            .unwrap();

            println!(
                "{kind} / {name}: intersects = {}, {} contacts, {} after filtering, {} leaf pairs",
                all.intersects(),
                all.contact_count(),
                filtered.contact_count(),
                all.stats().leaf_pairs,
            );

            for contact in filtered.contacts() {
                println!(
                    "    {} (depth {:.4})",
                    contact.position, contact.penetration_depth
                );
            }
        }
    }
}
