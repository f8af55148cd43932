//! Fetch lists and recent posts.
//!
//! This example shows how to authenticate with the CrowdTangle API, walk
//! the dashboard's lists and pull a bounded set of posts.
//!
//! Run with: CROWDTANGLE_API_TOKEN=... cargo run --example fetch_posts -- "search term"

use crowdtangle_rs::api::PostsQuery;
use crowdtangle_rs::models::SortBy;
use crowdtangle_rs::{ClientConfig, CrowdtangleClient, Error, QueryParams, ReqwestTransport};

#[tokio::main]
async fn main() -> crowdtangle_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("CROWDTANGLE_API_TOKEN")
        .map_err(|_| Error::InvalidInput("CROWDTANGLE_API_TOKEN environment variable required".to_string()))?;
    let search_term = std::env::args().nth(1).unwrap_or_else(|| "rust".to_string());

    let config = ClientConfig::default();
    let transport = ReqwestTransport::new(&config)?;
    let client = CrowdtangleClient::with_token(token, transport, config)?;

    let lists = client.lists().list().await?;
    println!("Found {} list(s):", lists.len());

    for list in &lists {
        println!(
            "  - {} [{:?}] ({})",
            list.title.as_deref().unwrap_or("untitled"),
            list.list_type,
            list.id
        );
        if list.list_type.has_accounts() {
            let accounts = client.lists().accounts(list.id, QueryParams::new(), 50).await?;
            println!("    {} account(s)", accounts.len());
        }
    }

    let query = PostsQuery {
        search_term: Some(search_term.clone()),
        sort_by: Some(SortBy::TotalInteractions),
        ..Default::default()
    };

    match client.posts().list(query, 200).await {
        Ok(posts) => {
            println!("\n{} post(s) matching {:?}:", posts.len(), search_term);
            for post in posts.iter().take(10) {
                println!(
                    "  {} {}",
                    post.date.as_deref().unwrap_or("-"),
                    post.post_url.as_deref().unwrap_or("-")
                );
            }
        }
        Err(Error::BadRequest { code, message, .. }) => {
            eprintln!("Search rejected ({:?}): {}", code, message);
        }
        Err(e) => return Err(e),
    }

    Ok(())
}
