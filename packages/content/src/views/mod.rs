//! Derived read models over fetched posts.
//!
//! All views work on collections already held in memory; none of them
//! touch the network.

pub mod backoffice;
pub mod dashboard;
pub mod detail;
pub mod feed;
pub mod profile;

pub use backoffice::{
    apply_decision, author_table, by_status, remove_post, status_counts, Decision, ReportCard,
};
pub use dashboard::DashboardStats;
pub use detail::PostDetail;
pub use feed::{build_feed, categories, CategoryFilter, Feed, PostCard, ALL_CATEGORIES};
pub use profile::ProfileSummary;
