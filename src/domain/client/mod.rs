//! Client domain module.
//!
//! # Module Structure
//!
//! - `aggregate` - Client and ContactDetails
//! - `status` - ClientStatus
//! - `lifecycle` - LifecycleStatusEngine and StatusAssessment
//! - `roster` - list filtering and ordering
//! - `errors` - ClientError

mod aggregate;
mod errors;
mod lifecycle;
mod roster;
mod status;

pub use aggregate::{Client, ContactDetails};
pub use errors::ClientError;
pub use lifecycle::{LifecyclePolicy, LifecycleSignals, LifecycleStatusEngine, StatusAssessment};
pub use roster::filter_and_sort;
pub use status::ClientStatus;
