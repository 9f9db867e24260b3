//! # Pagesmith Publishing
//!
//! Turns stored pages into published, self-contained HTML.
//!
//! ```text
//! TemplateCatalog ──create_page──▶ PageStore ◀──save_page── EditSession
//!                                     │
//!                                  publish
//!                                     │
//!                       compile ──▶ PublishedArtifact { slug, markup, url }
//! ```
//!
//! The collaborators ([`PageStore`], [`TemplateCatalog`], [`AnalyticsSink`])
//! are traits; the crate ships in-memory and file-backed implementations.

mod analytics;
mod catalog;
mod config;
mod error;
mod page;
mod publisher;
pub mod slug;
mod store;

pub use analytics::{
    AnalyticsEvent, AnalyticsEventType, AnalyticsSink, AnalyticsSummary, DailyCount,
    ElementCount, MemoryAnalytics,
};
pub use catalog::{BuiltinCatalog, TemplateCatalog};
pub use config::{PublishConfig, DEFAULT_APP_URL};
pub use error::{PublishError, PublishResult, StoreError, StoreResult};
pub use page::{NewPage, PageRecord, PageStatus, PageSummary, PublishedArtifact};
pub use publisher::Publisher;
pub use store::{FileStore, MemoryStore, PageStore};
