//! Lists service.

use std::sync::Arc;

use crate::client::paginated::{collect_pages, page_items, PaginatedStream, PaginatedStreamBuilder};
use crate::client::ClientInner;
use crate::models::{Account, List, ListId, QueryParams};
use crate::Result;

/// Service for the dashboard's lists and the accounts in them.
///
/// # Example
///
/// ```no_run
/// use crowdtangle_rs::{QueryParams, DEFAULT_MAX_RECORDS};
///
/// # async fn example(client: crowdtangle_rs::CrowdtangleClient) -> crowdtangle_rs::Result<()> {
/// for list in client.lists().list().await? {
///     if !list.list_type.has_accounts() {
///         continue;
///     }
///     let accounts = client
///         .lists()
///         .accounts(list.id, QueryParams::new(), DEFAULT_MAX_RECORDS)
///         .await?;
///     println!("{:?}: {} accounts", list.title, accounts.len());
/// }
/// # Ok(())
/// # }
/// ```
pub struct ListsService {
    inner: Arc<ClientInner>,
}

/// Paging options for a list's accounts.
///
/// ```
/// use crowdtangle_rs::api::AccountsQuery;
/// use crowdtangle_rs::QueryParams;
///
/// let params = QueryParams::from(AccountsQuery { count: Some(25), offset: None });
/// assert_eq!(params.to_string(), "count=25");
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct AccountsQuery {
    /// Page size (1 to 100)
    pub count: Option<u32>,
    /// Number of accounts to skip before the first page
    pub offset: Option<usize>,
}

impl From<AccountsQuery> for QueryParams {
    fn from(query: AccountsQuery) -> Self {
        let mut params = QueryParams::new();
        if let Some(count) = query.count {
            params.set("count", count);
        }
        if let Some(offset) = query.offset {
            params.set("offset", offset);
        }
        params
    }
}

impl ListsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Get the lists, saved searches and saved post lists of the dashboard.
    ///
    /// This endpoint is not paged.
    pub async fn list(&self) -> Result<Vec<List>> {
        let body = self.inner.request("lists", &QueryParams::new()).await?;
        page_items(&body, "lists")
    }

    /// Get the accounts of a list, following pages until `max_records`
    /// accounts are gathered or the list is exhausted.
    ///
    /// Only lists of type [`ListType::List`](crate::models::ListType::List)
    /// have accounts; the API rejects saved searches and saved post lists
    /// with [`Error::BadRequest`](crate::Error::BadRequest).
    pub async fn accounts(
        &self,
        list_id: ListId,
        params: impl Into<QueryParams>,
        max_records: usize,
    ) -> Result<Vec<Account>> {
        let endpoint = accounts_endpoint(list_id);
        collect_pages(&self.inner, &endpoint, "accounts", params.into(), max_records).await
    }

    /// Stream the accounts of a list page by page.
    pub fn accounts_stream(
        &self,
        list_id: ListId,
        params: impl Into<QueryParams>,
    ) -> PaginatedStream<Account> {
        PaginatedStreamBuilder::<Account>::new(self.inner.clone(), accounts_endpoint(list_id), "accounts")
            .build(params.into())
    }
}

fn accounts_endpoint(list_id: ListId) -> String {
    format!("lists/{}/accounts", list_id)
}
