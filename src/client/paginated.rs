//! Offset pagination over CrowdTangle's list endpoints.
//!
//! Paged endpoints return their items under `result.<collection>` and a
//! `result.pagination.nextPage` link while more data is available. Pages
//! are requested with `count` (at most [`MAX_PAGE_SIZE`]) and `offset`.
//!
//! Two ways of walking the pages are offered: `collect_pages` gathers
//! everything up to a record limit into one `Vec`, and [`PaginatedStream`]
//! yields items lazily as pages arrive.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::future::BoxFuture;
use futures_util::{FutureExt, Stream};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::ClientInner;
use crate::models::QueryParams;
use crate::{Error, Result};

/// Largest `count` the API accepts for a single page.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Record limit used when the caller does not pick one.
pub const DEFAULT_MAX_RECORDS: usize = 1000;

/// Page size for a paged request.
///
/// A caller-supplied `count` is honoured when it is an integer between 1
/// and [`MAX_PAGE_SIZE`]; anything else falls back to
/// `min(MAX_PAGE_SIZE, max_records)`.
///
/// ```
/// use crowdtangle_rs::client::effective_page_size;
/// use crowdtangle_rs::QueryParams;
///
/// assert_eq!(effective_page_size(&QueryParams::new(), 1000), 100);
/// assert_eq!(effective_page_size(&QueryParams::new(), 40), 40);
/// assert_eq!(effective_page_size(&QueryParams::new().with("count", 25), 1000), 25);
/// assert_eq!(effective_page_size(&QueryParams::new().with("count", 500), 1000), 100);
/// ```
pub fn effective_page_size(params: &QueryParams, max_records: usize) -> u32 {
    params
        .get("count")
        .and_then(|count| count.trim().parse::<u32>().ok())
        .filter(|count| (1..=MAX_PAGE_SIZE).contains(count))
        .unwrap_or_else(|| max_records.min(MAX_PAGE_SIZE as usize) as u32)
}

/// One decoded page.
#[derive(Debug)]
pub(crate) struct Page<T> {
    pub(crate) items: Vec<T>,
    pub(crate) has_next: bool,
}

/// Read `result.<key>` from a decoded body into typed records.
pub(crate) fn page_items<T: DeserializeOwned>(body: &Value, key: &str) -> Result<Vec<T>> {
    let items = body
        .get("result")
        .and_then(|result| result.get(key))
        .ok_or_else(|| Error::UnexpectedResponse(format!("missing result.{}", key)))?;

    Vec::<T>::deserialize(items)
        .map_err(|e| Error::UnexpectedResponse(format!("invalid result.{}: {}", key, e)))
}

/// Whether the body advertises another page.
///
/// Any truthy `result.pagination.nextPage` counts: a non-empty string, `true`,
/// a non-zero number or a non-empty array or object.
pub(crate) fn has_next_page(body: &Value) -> bool {
    let next_page = body
        .get("result")
        .and_then(|result| result.get("pagination"))
        .and_then(|pagination| pagination.get("nextPage"));

    match next_page {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty() && s != "0",
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

async fn fetch_page<T: DeserializeOwned>(
    inner: &ClientInner,
    endpoint: &str,
    key: &str,
    params: &QueryParams,
) -> Result<Page<T>> {
    let body = inner.request(endpoint, params).await?;
    Ok(Page {
        items: page_items(&body, key)?,
        has_next: has_next_page(&body),
    })
}

/// Fetch pages until `max_records` items are gathered or the data runs out.
///
/// The first page goes out with the caller's parameters plus the effective
/// `count`. Each following page `k` (the second page being `k = 1`) uses
/// `offset = count * k`.
/// Pages are appended whole, so the result may exceed `max_records` by up
/// to one page. A page that fails aborts the whole call and the pages
/// gathered so far are dropped. A `max_records` of zero returns an empty
/// result without issuing a request.
pub(crate) async fn collect_pages<T: DeserializeOwned>(
    inner: &ClientInner,
    endpoint: &str,
    key: &str,
    mut params: QueryParams,
    max_records: usize,
) -> Result<Vec<T>> {
    if max_records == 0 {
        tracing::debug!(endpoint, "max_records is zero, skipping request");
        return Ok(Vec::new());
    }

    let page_size = effective_page_size(&params, max_records);
    params.set("count", page_size);

    let first = fetch_page::<T>(inner, endpoint, key, &params).await?;
    tracing::debug!(endpoint, items = first.items.len(), "fetched first page");

    let mut items = first.items;
    let mut has_next = first.has_next;
    let mut page_index: u64 = 1;

    while items.len() < max_records && has_next {
        let offset = u64::from(page_size) * page_index;
        params.set("offset", offset);

        let page = fetch_page::<T>(inner, endpoint, key, &params).await?;
        tracing::debug!(endpoint, offset, items = page.items.len(), "fetched page");

        // An empty page that still claims a successor would loop forever.
        if page.items.is_empty() {
            break;
        }

        items.extend(page.items);
        has_next = page.has_next;
        page_index += 1;
    }

    Ok(items)
}

/// A stream that lazily fetches pages from a paged endpoint.
///
/// The stream yields individual items and requests the next page once the
/// current one is drained. It ends after a page without `nextPage`, after an
/// empty page, or after the first error. Use `StreamExt::take` to bound it.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use crowdtangle_rs::QueryParams;
///
/// # async fn example(client: crowdtangle_rs::CrowdtangleClient) -> crowdtangle_rs::Result<()> {
/// let mut posts = client
///     .posts()
///     .stream(QueryParams::new().with("searchTerm", "election"))
///     .take(500);
///
/// while let Some(post) = posts.next().await {
///     let post = post?;
///     println!("{:?}", post.post_url);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Fetches page `k` (counting from 0).
    fetch_page: Box<dyn Fn(u64) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync>,
    /// Items of the current page not yet yielded.
    current_items: std::vec::IntoIter<T>,
    /// Next page index to fetch, `None` once exhausted.
    next_page: Option<u64>,
    /// In-flight page fetch.
    pending_fetch: Option<BoxFuture<'static, Result<Page<T>>>>,
}

impl<T> PaginatedStream<T> {
    fn new<F>(fetch_page: F) -> Self
    where
        F: Fn(u64) -> BoxFuture<'static, Result<Page<T>>> + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            current_items: Vec::new().into_iter(),
            next_page: Some(0),
            pending_fetch: None,
        }
    }
}

impl<T> Stream for PaginatedStream<T> {
    type Item = Result<T>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        loop {
            if let Some(item) = this.current_items.next() {
                return Poll::Ready(Some(Ok(item)));
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.poll_unpin(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        if page.items.is_empty() {
                            this.next_page = None;
                            return Poll::Ready(None);
                        }
                        if !page.has_next {
                            this.next_page = None;
                        }
                        this.current_items = page.items.into_iter();
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.pending_fetch = None;
                        this.next_page = None;
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            match this.next_page {
                Some(page_index) => {
                    this.pending_fetch = Some((this.fetch_page)(page_index));
                    this.next_page = Some(page_index + 1);
                }
                None => return Poll::Ready(None),
            }
        }
    }
}

impl<T> Unpin for PaginatedStream<T> {}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("next_page", &self.next_page)
            .field("pending", &self.pending_fetch.is_some())
            .finish()
    }
}

/// Builder for creating paginated streams over one endpoint.
pub(crate) struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    endpoint: String,
    key: &'static str,
    _marker: std::marker::PhantomData<T>,
}

impl<T: DeserializeOwned + Send + 'static> PaginatedStreamBuilder<T> {
    pub(crate) fn new(inner: Arc<ClientInner>, endpoint: impl Into<String>, key: &'static str) -> Self {
        Self {
            inner,
            endpoint: endpoint.into(),
            key,
            _marker: std::marker::PhantomData,
        }
    }

    /// Build the stream. Page size follows [`effective_page_size`] with no record limit.
    pub(crate) fn build(self, mut params: QueryParams) -> PaginatedStream<T> {
        let page_size = effective_page_size(&params, usize::MAX);
        params.set("count", page_size);

        let inner = self.inner;
        let endpoint = self.endpoint;
        let key = self.key;

        PaginatedStream::new(move |page_index: u64| {
            let inner = inner.clone();
            let endpoint = endpoint.clone();
            let mut params = params.clone();

            Box::pin(async move {
                if page_index > 0 {
                    params.set("offset", u64::from(page_size) * page_index);
                }
                fetch_page::<T>(&inner, &endpoint, key, &params).await
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_size_clamps_to_ceiling() {
        let params = QueryParams::new().with("count", 101);
        assert_eq!(effective_page_size(&params, 1000), 100);
        assert_eq!(effective_page_size(&params, 30), 30);
    }

    #[test]
    fn test_page_size_ignores_invalid_count() {
        for count in ["abc", "0", "-5", "", "12.5"] {
            let params = QueryParams::new().with("count", count);
            assert_eq!(effective_page_size(&params, 1000), 100, "count={:?}", count);
        }
        let params = QueryParams::new().with("count", " 7 ");
        assert_eq!(effective_page_size(&params, 1000), 7);
    }

    #[test]
    fn test_page_size_for_small_limits() {
        assert_eq!(effective_page_size(&QueryParams::new(), 1), 1);
        assert_eq!(effective_page_size(&QueryParams::new(), 0), 0);
        assert_eq!(effective_page_size(&QueryParams::new(), usize::MAX), 100);
    }

    #[test]
    fn test_has_next_page_truthiness() {
        let body = |next: Value| json!({"result": {"pagination": {"nextPage": next}}});

        assert!(has_next_page(&body(json!("https://api.crowdtangle.com/posts?offset=100"))));
        assert!(has_next_page(&body(json!(true))));
        assert!(has_next_page(&body(json!(2))));
        assert!(!has_next_page(&body(json!(""))));
        assert!(!has_next_page(&body(json!("0"))));
        assert!(!has_next_page(&body(json!(0))));
        assert!(!has_next_page(&body(json!(null))));
        assert!(!has_next_page(&body(json!([]))));
        assert!(!has_next_page(&json!({"result": {}})));
        assert!(!has_next_page(&json!({})));
    }

    #[test]
    fn test_page_items() {
        let body = json!({"result": {"posts": [{"id": "a"}, {"id": "b"}]}});
        let items: Vec<Value> = page_items(&body, "posts").unwrap();
        assert_eq!(items.len(), 2);

        let missing = page_items::<Value>(&body, "accounts");
        assert!(matches!(missing, Err(Error::UnexpectedResponse(_))));

        let not_a_list = json!({"result": {"posts": {"id": "a"}}});
        assert!(page_items::<Value>(&not_a_list, "posts").is_err());
    }
}
