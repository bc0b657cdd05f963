//! Analytics domain module - portal open tracking and engagement figures.

mod aggregator;
mod event;

pub use aggregator::{
    AnalyticsAggregator, EntityEngagement, EntityViews, PortalEngagement, ViewStats,
};
pub use event::{AnalyticsEvent, TrackedEntity};
