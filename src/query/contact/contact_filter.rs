use crate::math::{Point, Real};
use crate::query::Contact;
use crate::utils::{convex_hull2_idx, orthonormal_basis, principal_frame};
use na::Point2;

/// Ratio between the two largest variances of a contact set below which it is considered
/// collinear.
const COLLINEARITY_EPSILON: Real = 1.0e-12;

/// Removes redundant contacts from `contacts`.
///
/// Contacts closer than `tolerance` to a previous contact are removed first. Then, if at least
/// three non-collinear contacts remain, they are projected on their best-fit plane and only the
/// vertices of their 2D convex hull are kept, in hull order. Contacts lying on a hull edge are
/// removed too.
///
/// Calling this function on an already filtered set does not remove anything more. A contact
/// set spread over several non-planar regions is reduced as if it was planar.
pub fn filter_redundant_contacts(contacts: &mut Vec<Contact>, tolerance: Real) {
    let tolerance2 = tolerance * tolerance;
    let mut unique: Vec<Contact> = Vec::with_capacity(contacts.len());

    for contact in contacts.drain(..) {
        if !unique
            .iter()
            .any(|c| na::distance_squared(&c.position, &contact.position) <= tolerance2)
        {
            unique.push(contact);
        }
    }

    if unique.len() < 3 {
        *contacts = unique;
        return;
    }

    let positions: Vec<Point<Real>> = unique.iter().map(|c| c.position).collect();
    let frame = principal_frame(&positions);

    if frame.variances.y <= COLLINEARITY_EPSILON * frame.variances.x {
        *contacts = unique;
        return;
    }

    let normal = frame.axes.column(2).into_owned();
    let [u, v] = orthonormal_basis(&normal);
    let projected: Vec<_> = positions
        .iter()
        .map(|pt| {
            let dpt = pt - frame.center;
            Point2::new(dpt.dot(&u), dpt.dot(&v))
        })
        .collect();

    *contacts = convex_hull2_idx(&projected, tolerance)
        .into_iter()
        .map(|i| unique[i])
        .collect();
}
