//! Identifier newtypes.
//!
//! These wrap the raw identifiers CrowdTangle hands out so list ids and
//! post ids cannot be mixed up at compile time.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Deserialize a numeric id the API may send as an integer or a string.
pub(crate) fn deserialize_numeric_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum IdValue {
        Int(u64),
        String(String),
        Null,
    }

    match IdValue::deserialize(deserializer)? {
        IdValue::Int(i) => Ok(Some(i)),
        IdValue::String(s) => s.trim().parse::<u64>().map(Some).map_err(D::Error::custom),
        IdValue::Null => Ok(None),
    }
}

/// A CrowdTangle list id.
///
/// # Example
///
/// ```
/// use crowdtangle_rs::ListId;
///
/// let list = ListId::new(1234);
/// assert_eq!(list.to_string(), "1234");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ListId(u64);

impl<'de> Deserialize<'de> for ListId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::Error;

        deserialize_numeric_id(deserializer)?
            .map(ListId)
            .ok_or_else(|| D::Error::custom("list id is null"))
    }
}

impl ListId {
    /// Create a new list id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric id.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ListId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A CrowdTangle post id.
///
/// The format depends on the platform the post came from
/// (`{post}_{page}` for Instagram, `{page}_{post}` for Facebook). The id is
/// treated as opaque and never parsed.
///
/// # Example
///
/// ```
/// use crowdtangle_rs::PostId;
///
/// let post = PostId::new("123_456");
/// assert_eq!(post.as_str(), "123_456");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(String);

impl PostId {
    /// Create a new post id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the post id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_id_accepts_number_or_string() {
        let from_int: ListId = serde_json::from_value(json!(1234)).unwrap();
        let from_str: ListId = serde_json::from_value(json!("1234")).unwrap();
        assert_eq!(from_int, ListId::new(1234));
        assert_eq!(from_str, from_int);
        assert_eq!(serde_json::to_value(from_int).unwrap(), json!(1234));

        assert!(serde_json::from_value::<ListId>(json!(null)).is_err());
        assert!(serde_json::from_value::<ListId>(json!("abc")).is_err());
    }
}
