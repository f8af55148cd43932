//! API service modules for CrowdTangle endpoints.
//!
//! Each service maps logical operations onto one resource's endpoint paths
//! and decides whether pagination applies.

mod lists;
mod posts;

pub use lists::{AccountsQuery, ListsService};
pub use posts::{PostsQuery, PostsService};
