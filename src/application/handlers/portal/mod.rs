//! Client portal handlers.

mod get_catalog;
mod get_engagement;
mod record_open;

pub use get_catalog::{GetPortalCatalogHandler, GetPortalCatalogQuery};
pub use get_engagement::{GetEngagementHandler, GetEngagementQuery};
pub use record_open::{RecordOpenCommand, RecordOpenHandler};
