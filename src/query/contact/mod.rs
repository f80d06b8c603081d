//! Contacts between two triangle meshes, and their accumulation during a query.

pub use self::collision_request::{CollisionRequest, SegmentContacts};
pub use self::collision_result::CollisionResult;
pub use self::contact::Contact;
pub use self::contact_accumulator::ContactAccumulator;
pub use self::contact_filter::filter_redundant_contacts;

mod collision_request;
mod collision_result;
mod contact;
mod contact_accumulator;
mod contact_filter;
