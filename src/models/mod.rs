//! Data models for the CrowdTangle API.
//!
//! - [`primitives`] - Identifier newtypes (`ListId`, `PostId`)
//! - [`query`] - Ordered query parameters
//! - [`enums`] - List types, platforms and query enums
//! - [`list`], [`account`], [`post`] - Response records

pub mod primitives;
pub mod query;
pub mod enums;
pub mod list;
pub mod account;
pub mod post;

pub use primitives::*;
pub use query::*;
pub use enums::*;
pub use list::*;
pub use account::*;
pub use post::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_post_keeps_unknown_fields() {
        let post: Post = serde_json::from_value(json!({
            "id": "7132|3928983720579391",
            "platformId": "7132_3928983720579391",
            "platform": "Facebook",
            "type": "link",
            "score": 2.5,
            "expandedLinks": [{"original": "https://example.com"}],
            "account": {"id": 42, "name": "Example Page", "accountType": "facebook_page"}
        }))
        .unwrap();

        assert_eq!(post.platform, Some(Platform::Facebook));
        assert_eq!(post.post_type.as_deref(), Some("link"));
        assert_eq!(post.account.as_ref().and_then(|a| a.id), Some(42));
        assert!(post.extra.contains_key("expandedLinks"));
        assert!(!post.extra.contains_key("platformId"));
    }

    #[test]
    fn test_list_deserializes() {
        let list: List = serde_json::from_value(json!({
            "id": 1234,
            "title": "Local News",
            "type": "LIST"
        }))
        .unwrap();

        assert_eq!(list.id, ListId::new(1234));
        assert_eq!(list.title.as_deref(), Some("Local News"));
        assert!(list.list_type.has_accounts());
    }

    #[test]
    fn test_list_tolerates_missing_fields() {
        let list: List = serde_json::from_value(json!({
            "id": "99",
            "folder": "Research"
        }))
        .unwrap();

        assert_eq!(list.id, ListId::new(99));
        assert_eq!(list.title, None);
        assert_eq!(list.list_type, ListType::Unknown);
        assert!(!list.list_type.has_accounts());
        assert_eq!(list.extra.get("folder"), Some(&json!("Research")));
    }

    #[test]
    fn test_account_id_as_string_or_missing() {
        let accounts: Vec<Account> = serde_json::from_value(json!([
            {"id": "2", "name": "Quoted"},
            {"id": 3},
            {"name": "No id"}
        ]))
        .unwrap();

        assert_eq!(accounts[0].id, Some(2));
        assert_eq!(accounts[1].id, Some(3));
        assert_eq!(accounts[2].id, None);
        assert_eq!(accounts[2].name.as_deref(), Some("No id"));
    }
}
