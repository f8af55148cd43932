//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use futures_util::future::BoxFuture;
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

use crowdtangle_rs::client::{HttpRequest, HttpResponse, HttpTransport};
use crowdtangle_rs::error::TransportError;
use crowdtangle_rs::{ClientConfig, CrowdtangleClient, RetryConfig};

static INIT: Once = Once::new();

/// Initialize logging for tests
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

type Handler = dyn Fn(&HttpRequest, usize) -> HttpResponse + Send + Sync;

/// In-memory transport answering from a closure and recording every request.
///
/// The closure receives the request and its zero-based call number.
#[derive(Clone)]
pub struct ScriptedTransport {
    handler: Arc<Handler>,
    log: Arc<Mutex<Vec<HttpRequest>>>,
}

impl ScriptedTransport {
    pub fn new(handler: impl Fn(&HttpRequest, usize) -> HttpResponse + Send + Sync + 'static) -> Self {
        Self {
            handler: Arc::new(handler),
            log: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Requests seen so far, in order.
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.log.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.log.lock().unwrap().len()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get<'a>(
        &'a self,
        request: &'a HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportError>> {
        Box::pin(async move {
            let call = {
                let mut log = self.log.lock().unwrap();
                log.push(request.clone());
                log.len() - 1
            };
            Ok((self.handler)(request, call))
        })
    }
}

/// Client over the given transport, retrying without backoff.
pub fn client_with(transport: ScriptedTransport) -> CrowdtangleClient {
    init_logging();
    let config = ClientConfig::default()
        .with_retry(RetryConfig::default().with_initial_backoff(Duration::ZERO));
    CrowdtangleClient::with_token("test-token", transport, config).unwrap()
}

pub fn json_response(status: u16, body: Value) -> HttpResponse {
    HttpResponse {
        status,
        body: serde_json::to_vec(&body).unwrap(),
    }
}

/// Value of a query parameter on a recorded request.
pub fn query_value(request: &HttpRequest, name: &str) -> Option<String> {
    request
        .query
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
}

/// A page of `len` posts numbered from `first`.
pub fn posts_page(first: usize, len: usize, next_page: bool) -> Value {
    let posts: Vec<Value> = (first..first + len)
        .map(|i| json!({"id": format!("post-{}", i), "platform": "Facebook"}))
        .collect();
    page_body("posts", posts, next_page)
}

pub fn page_body(key: &str, items: Vec<Value>, next_page: bool) -> Value {
    let mut result = serde_json::Map::new();
    result.insert(key.to_string(), Value::Array(items));
    if next_page {
        result.insert(
            "pagination".to_string(),
            json!({"nextPage": "https://api.crowdtangle.com/next"}),
        );
    } else {
        result.insert("pagination".to_string(), json!({}));
    }
    json!({"status": 200, "result": result})
}

/// Upstream holding `total` posts, honouring `count` and `offset`.
pub fn posts_upstream(total: usize) -> ScriptedTransport {
    ScriptedTransport::new(move |request, _| {
        let count: usize = query_value(request, "count").unwrap().parse().unwrap();
        let offset: usize = query_value(request, "offset")
            .map(|o| o.parse().unwrap())
            .unwrap_or(0);
        let len = count.min(total.saturating_sub(offset));
        json_response(200, posts_page(offset, len, offset + len < total))
    })
}

/// Upstream that always returns a full page and always claims a next page.
pub fn endless_posts() -> ScriptedTransport {
    ScriptedTransport::new(|request, _| {
        let count: usize = query_value(request, "count").unwrap().parse().unwrap();
        let offset: usize = query_value(request, "offset")
            .map(|o| o.parse().unwrap())
            .unwrap_or(0);
        json_response(200, posts_page(offset, count, true))
    })
}
