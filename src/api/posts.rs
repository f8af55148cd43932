//! Posts service.

use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;

use crate::client::paginated::{collect_pages, PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{ListId, Post, PostId, QueryParams, SearchField, SortBy};
use crate::{Error, Result};

const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Service for searching and fetching posts.
///
/// # Example
///
/// ```no_run
/// use crowdtangle_rs::api::PostsQuery;
/// use crowdtangle_rs::models::SortBy;
///
/// # async fn example(client: crowdtangle_rs::CrowdtangleClient) -> crowdtangle_rs::Result<()> {
/// let query = PostsQuery {
///     search_term: Some("climate".to_string()),
///     sort_by: Some(SortBy::TotalInteractions),
///     ..Default::default()
/// };
///
/// let posts = client.posts().list(query, 300).await?;
/// for post in &posts {
///     println!("{:?}: {:?}", post.date, post.message);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PostsService {
    inner: Arc<ClientInner>,
}

/// Filters for the posts endpoint.
///
/// Unset fields are left out of the request so the API applies its own
/// defaults. For parameters not modelled here, convert into
/// [`QueryParams`] and set them directly.
#[derive(Debug, Default, Clone)]
pub struct PostsQuery {
    /// Restrict to these account handles or platform ids
    pub accounts: Vec<String>,
    /// Restrict to accounts in these lists
    pub list_ids: Vec<ListId>,
    /// Earliest publication time
    pub start_date: Option<NaiveDateTime>,
    /// Latest publication time
    pub end_date: Option<NaiveDateTime>,
    /// Relative window such as `"1 HOUR"` or `"2 DAY"`
    pub timeframe: Option<String>,
    /// Search term
    pub search_term: Option<String>,
    /// Fields the search term is matched against
    pub search_field: Option<SearchField>,
    /// Result ordering
    pub sort_by: Option<SortBy>,
    /// Post types (`photo`, `link`, `native_video`...)
    pub types: Vec<String>,
    /// Two-letter language code
    pub language: Option<String>,
    /// Minimum number of interactions
    pub min_interactions: Option<u64>,
    /// Include per-timestep statistics history
    pub include_history: Option<bool>,
    /// Page size (1 to 100)
    pub count: Option<u32>,
}

impl From<PostsQuery> for QueryParams {
    fn from(query: PostsQuery) -> Self {
        let mut params = QueryParams::new();
        if !query.accounts.is_empty() {
            params.set("accounts", query.accounts.join(","));
        }
        if !query.list_ids.is_empty() {
            let ids: Vec<String> = query.list_ids.iter().map(ToString::to_string).collect();
            params.set("listIds", ids.join(","));
        }
        if let Some(start) = query.start_date {
            params.set("startDate", start.format(DATE_FORMAT));
        }
        if let Some(end) = query.end_date {
            params.set("endDate", end.format(DATE_FORMAT));
        }
        if let Some(timeframe) = query.timeframe {
            params.set("timeframe", timeframe);
        }
        if let Some(term) = query.search_term {
            params.set("searchTerm", term);
        }
        if let Some(field) = query.search_field {
            params.set("searchField", field.as_str());
        }
        if let Some(sort_by) = query.sort_by {
            params.set("sortBy", sort_by.as_str());
        }
        if !query.types.is_empty() {
            params.set("types", query.types.join(","));
        }
        if let Some(language) = query.language {
            params.set("language", language);
        }
        if let Some(min) = query.min_interactions {
            params.set("minInteractions", min);
        }
        if let Some(include) = query.include_history {
            params.set("includeHistory", include);
        }
        if let Some(count) = query.count {
            params.set("count", count);
        }
        params
    }
}

impl PostsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get posts matching the filters, following pages until `max_records`
    /// posts are gathered or the results run out.
    ///
    /// The result can exceed `max_records` by up to one page, since pages
    /// are kept whole.
    pub async fn list(&self, params: impl Into<QueryParams>, max_records: usize) -> Result<Vec<Post>> {
        collect_pages(&self.inner, "posts", "posts", params.into(), max_records).await
    }

    /// Stream posts matching the filters page by page.
    pub fn stream(&self, params: impl Into<QueryParams>) -> PaginatedStream<Post> {
        PaginatedStreamBuilder::<Post>::new(self.inner.clone(), "posts", "posts").build(params.into())
    }

    /// Get a single post.
    ///
    /// Returns `Ok(None)` when the response carries no post.
    pub async fn get(&self, post_id: &PostId) -> Result<Option<Post>> {
        let url = self.inner.resource_url("post", post_id.as_str())?;
        let body = self.inner.request_url(url, &QueryParams::new()).await?;

        match body.pointer("/result/posts/0") {
            None | Some(Value::Null) => Ok(None),
            Some(post) => Post::deserialize(post)
                .map(Some)
                .map_err(|e| Error::UnexpectedResponse(format!("invalid result.posts[0]: {}", e))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_posts_query_to_params() {
        let start = NaiveDate::from_ymd_opt(2021, 3, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let query = PostsQuery {
            list_ids: vec![ListId::new(12), ListId::new(34)],
            start_date: Some(start),
            search_term: Some("vaccine".to_string()),
            sort_by: Some(SortBy::Date),
            types: vec!["photo".to_string(), "link".to_string()],
            count: Some(50),
            ..Default::default()
        };

        let params = QueryParams::from(query);
        assert_eq!(params.get("listIds"), Some("12,34"));
        assert_eq!(params.get("startDate"), Some("2021-03-01T00:00:00"));
        assert_eq!(params.get("searchTerm"), Some("vaccine"));
        assert_eq!(params.get("sortBy"), Some("date"));
        assert_eq!(params.get("types"), Some("photo,link"));
        assert_eq!(params.get("count"), Some("50"));
        assert_eq!(params.get("endDate"), None);
        assert_eq!(params.len(), 6);
    }

    #[test]
    fn test_empty_query_has_no_params() {
        assert!(QueryParams::from(PostsQuery::default()).is_empty());
    }
}
