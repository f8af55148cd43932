//! Enumeration types for the CrowdTangle API.
//!
//! Response-side enums carry an `Unknown` fallback so new values added by
//! the API do not break deserialization.

use serde::{Deserialize, Serialize};

/// Kind of collection a list represents.
///
/// Only [`ListType::List`] collections have accounts; saved searches and
/// saved post lists are rejected by the API's accounts endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListType {
    /// A list of accounts
    List,
    /// A saved search
    SavedSearch,
    /// A saved list of posts
    SavedPost,
    /// Unknown list type
    #[default]
    #[serde(other)]
    Unknown,
}

impl ListType {
    /// Returns `true` if accounts can be fetched for this list.
    pub fn has_accounts(&self) -> bool {
        matches!(self, ListType::List)
    }
}

/// Platform a post or account belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    /// Facebook pages, groups and profiles
    Facebook,
    /// Instagram profiles
    Instagram,
    /// Reddit subreddits
    Reddit,
    /// Unknown platform
    #[serde(other)]
    Unknown,
}

/// Kind of account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountType {
    /// Facebook page
    FacebookPage,
    /// Facebook group
    FacebookGroup,
    /// Verified Facebook profile
    FacebookProfile,
    /// Instagram profile
    InstagramProfile,
    /// Subreddit
    Subreddit,
    /// Unknown account type
    #[serde(other)]
    Unknown,
}

/// Ordering of results on the posts endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortBy {
    /// Newest first
    Date,
    /// Interaction rate relative to the account's average
    InteractionRate,
    /// Overperformance against the account's baseline
    #[default]
    Overperforming,
    /// Total interactions
    TotalInteractions,
    /// Underperformance against the account's baseline
    Underperforming,
}

impl SortBy {
    /// Wire value of the `sortBy` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Date => "date",
            SortBy::InteractionRate => "interaction_rate",
            SortBy::Overperforming => "overperforming",
            SortBy::TotalInteractions => "total_interactions",
            SortBy::Underperforming => "underperforming",
        }
    }
}

/// Which fields a `searchTerm` is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SearchField {
    /// Post text and text extracted from images
    #[default]
    TextFieldsAndImages,
    /// Also match query strings of links
    IncludeQueryStrings,
    /// Post text only
    TextFieldsOnly,
    /// Account name only
    AccountNameOnly,
    /// Text extracted from images only
    ImageTextOnly,
}

impl SearchField {
    /// Wire value of the `searchField` parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchField::TextFieldsAndImages => "TEXT_FIELDS_AND_IMAGE_TEXT",
            SearchField::IncludeQueryStrings => "INCLUDE_QUERY_STRINGS",
            SearchField::TextFieldsOnly => "TEXT_FIELDS_ONLY",
            SearchField::AccountNameOnly => "ACCOUNT_NAME_ONLY",
            SearchField::ImageTextOnly => "IMAGE_TEXT_ONLY",
        }
    }
}
