//! Pricing domain module.
//!
//! Converts the payment structure chosen on a proposal into an immutable
//! payment schedule.
//!
//! # Module Structure
//!
//! - `payment_type` - PaymentType and raw PaymentTerms
//! - `schedule` - PaymentSchedule, ScheduleEntry, Recurrence
//! - `engine` - PricingEngine and its PricingPolicy
//! - `errors` - PricingError

mod engine;
mod errors;
mod payment_type;
mod schedule;

pub use engine::{PricingEngine, PricingPolicy, MAX_INSTALLMENTS, MAX_INTERVAL_DAYS};
pub use errors::PricingError;
pub use payment_type::{PaymentTerms, PaymentType};
pub use schedule::{PaymentSchedule, Recurrence, ScheduleEntry};
