//! Content domain module - portal resources and who may see them.

mod errors;
mod item;
mod visibility;

pub use errors::PortalError;
pub use item::{ContentCategory, ContentItem, ContentType};
pub use visibility::{PortalCatalog, VisibilityResolver};
