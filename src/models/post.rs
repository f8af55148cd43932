//! Post models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::account::Account;
use super::enums::Platform;

/// A post returned by the posts endpoints.
///
/// Only the commonly used fields are modelled; everything else the API
/// returns (statistics breakdowns, media, expanded links...) is kept in
/// `extra` as received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// CrowdTangle's id for the post
    #[serde(default)]
    pub id: Option<String>,
    /// The platform's own id for the post
    #[serde(default)]
    pub platform_id: Option<String>,
    /// Platform the post was made on
    #[serde(default)]
    pub platform: Option<Platform>,
    /// Publication time as reported by the API
    #[serde(default)]
    pub date: Option<String>,
    /// Last time CrowdTangle refreshed the post
    #[serde(default)]
    pub updated: Option<String>,
    /// Post type (`link`, `photo`, `native_video`...)
    #[serde(default, rename = "type")]
    pub post_type: Option<String>,
    /// Post text
    #[serde(default)]
    pub message: Option<String>,
    /// Primary link
    #[serde(default)]
    pub link: Option<String>,
    /// Link to the post itself
    #[serde(default)]
    pub post_url: Option<String>,
    /// Subscriber count of the account when the post was made
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    /// Overperforming score
    #[serde(default)]
    pub score: Option<f64>,
    /// Account that made the post
    #[serde(default)]
    pub account: Option<Account>,
    /// Interaction statistics, as received
    #[serde(default)]
    pub statistics: Option<Value>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
