//! Account models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::{AccountType, Platform};
use super::primitives::deserialize_numeric_id;

/// A social media account tracked by CrowdTangle.
///
/// Fields the API adds beyond the ones modelled here are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// CrowdTangle's id for the account
    #[serde(default, deserialize_with = "deserialize_numeric_id")]
    pub id: Option<u64>,
    /// Display name
    #[serde(default)]
    pub name: Option<String>,
    /// Handle or vanity name
    #[serde(default)]
    pub handle: Option<String>,
    /// Platform the account lives on
    #[serde(default)]
    pub platform: Option<Platform>,
    /// The platform's own id for the account
    #[serde(default)]
    pub platform_id: Option<String>,
    /// Kind of account
    #[serde(default)]
    pub account_type: Option<AccountType>,
    /// Followers or page likes
    #[serde(default)]
    pub subscriber_count: Option<u64>,
    /// Link to the account
    #[serde(default)]
    pub url: Option<String>,
    /// Whether the platform marks the account as verified
    #[serde(default)]
    pub verified: Option<bool>,
    /// Profile image URL
    #[serde(default)]
    pub profile_image: Option<String>,
    /// Country most page admins are located in
    #[serde(default)]
    pub page_admin_top_country: Option<String>,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
