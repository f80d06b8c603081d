//! Various unsorted geometrical and logical operators.

pub use self::center::center;
pub use self::convex_hull2::convex_hull2_idx;
pub use self::cov::center_cov;
pub use self::isometry_checks::{isometry_from_parts, validate_isometry, InvalidTransformError};
pub use self::principal_frame::{principal_frame, PrincipalFrame};
pub use self::wbasis::orthonormal_basis;

mod center;
mod convex_hull2;
mod cov;
mod isometry_checks;
mod principal_frame;
mod wbasis;
