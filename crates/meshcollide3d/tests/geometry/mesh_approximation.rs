use meshcollide3d::math::{Isometry, Real, Vector};
use meshcollide3d::query::CollisionError;
use meshcollide3d::shape::{
    Ball, Capsule, Cone, Cuboid, Cylinder, InvalidShapeError, PrimitiveShape,
};
use meshcollide3d::transformation::{approximate_mesh, TessellationParams};
use meshcollide3d::utils::InvalidTransformError;

fn params(angular_subdivisions: u32, polar_subdivisions: u32) -> TessellationParams {
    TessellationParams {
        angular_subdivisions,
        polar_subdivisions,
        ..TessellationParams::default()
    }
}

// Largest distance between a triangle centroid and the sphere of radius `radius`.
fn ball_approximation_error(radius: Real, params: &TessellationParams) -> Real {
    let shape: PrimitiveShape = Ball::new(radius).into();
    let mesh = approximate_mesh(&shape, &Isometry::identity(), params).unwrap();
    mesh.triangles()
        .map(|tri| radius - tri.center().coords.norm())
        .fold(0.0, Real::max)
}

#[test]
fn ball_approximation_error_shrinks_with_density() {
    let coarse = ball_approximation_error(1.0, &params(8, 4));
    let medium = ball_approximation_error(1.0, &params(16, 8));
    let fine = ball_approximation_error(1.0, &params(64, 32));

    assert!(coarse > medium);
    assert!(medium > fine);
    assert!(fine < 1.0e-2);
}

#[test]
fn every_primitive_yields_a_valid_mesh() {
    let shapes: [PrimitiveShape; 5] = [
        Cuboid::new(Vector::new(0.2, 0.4, 0.6)).into(),
        Ball::new(0.5).into(),
        Cylinder::new(0.5, 0.1).into(),
        Cone::new(0.3, 0.3).into(),
        Capsule::new(0.4, 0.2).into(),
    ];
    let pos = Isometry::new(Vector::new(1.0, -2.0, 0.5), Vector::new(0.1, 0.2, 0.3));

    for shape in &shapes {
        for params in [params(3, 2), TessellationParams::default(), params(33, 17)] {
            let mesh = approximate_mesh(shape, &pos, &params).unwrap();
            assert!(!mesh.is_empty());
            assert!(mesh.triangles().all(|tri| tri.area() > 0.0));
        }
    }
}

#[test]
fn triangle_counts_follow_the_tessellation_parameters() {
    let pos = Isometry::identity();
    let cuboid: PrimitiveShape = Cuboid::new(Vector::repeat(1.0)).into();
    let subdivided = TessellationParams {
        cuboid_subdivisions: 4,
        ..TessellationParams::default()
    };
    assert_eq!(
        approximate_mesh(&cuboid, &pos, &TessellationParams::default())
            .unwrap()
            .num_triangles(),
        12
    );
    assert_eq!(
        approximate_mesh(&cuboid, &pos, &subdivided).unwrap().num_triangles(),
        6 * 4 * 4 * 2
    );

    let cone: PrimitiveShape = Cone::new(1.0, 1.0).into();
    assert_eq!(
        approximate_mesh(&cone, &pos, &params(20, 2)).unwrap().num_triangles(),
        20 + 18
    );
}

#[test]
fn invalid_parameters_are_reported() {
    let pos = Isometry::identity();
    let defaults = TessellationParams::default();

    let flat: PrimitiveShape = Cuboid::new(Vector::new(1.0, 0.0, 1.0)).into();
    assert_eq!(
        approximate_mesh(&flat, &pos, &defaults).unwrap_err(),
        CollisionError::InvalidShape(InvalidShapeError::NonPositive {
            parameter: "half_extents.y",
            value: 0.0
        })
    );

    let nan_ball: PrimitiveShape = Ball::new(Real::NAN).into();
    assert!(matches!(
        approximate_mesh(&nan_ball, &pos, &defaults),
        Err(CollisionError::InvalidShape(InvalidShapeError::NonFinite { .. }))
    ));

    let ball: PrimitiveShape = Ball::new(1.0).into();
    assert!(matches!(
        approximate_mesh(&ball, &pos, &params(16, 1)),
        Err(CollisionError::InvalidShape(
            InvalidShapeError::TooFewSubdivisions { min: 2, .. }
        ))
    ));

    let far = Isometry::translation(Real::INFINITY, 0.0, 0.0);
    assert_eq!(
        approximate_mesh(&ball, &far, &defaults).unwrap_err(),
        CollisionError::InvalidTransform(InvalidTransformError::NonFinite)
    );
}
