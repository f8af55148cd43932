//! List models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::enums::ListType;
use super::primitives::ListId;

/// A list, saved search or saved post list on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// List id
    pub id: ListId,
    /// Display title
    #[serde(default)]
    pub title: Option<String>,
    /// Kind of collection
    #[serde(rename = "type", default)]
    pub list_type: ListType,
    /// Fields not modelled above
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
