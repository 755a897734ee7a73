//! HTTP calls to the blog backend.
//!
//! One function per endpoint, all addressed under a single `/blog/`
//! resource path (the delete path included). Responses for the list fetch
//! go through the one wire-to-client mapping in `common`; mutation
//! responses are not inspected, the caller resynchronizes with a full
//! fetch afterwards.

use common::model::post::{BlogPost, BlogPostWire, DraftWire};
use gloo_net::http::Request;

/// Fetches every post and maps it to the client shape.
pub async fn fetch_posts(base: &str) -> Result<Vec<BlogPost>, gloo_net::Error> {
    let wire: Vec<BlogPostWire> = Request::get(&format!("{base}/blog/"))
        .send()
        .await?
        .json()
        .await?;
    Ok(wire.into_iter().map(BlogPost::from).collect())
}

pub async fn create_post(base: &str, draft: &DraftWire) -> Result<(), gloo_net::Error> {
    Request::post(&format!("{base}/blog/"))
        .json(draft)?
        .send()
        .await?;
    Ok(())
}

pub async fn update_post(base: &str, id: i64, draft: &DraftWire) -> Result<(), gloo_net::Error> {
    Request::put(&format!("{base}/blog/{id}"))
        .json(draft)?
        .send()
        .await?;
    Ok(())
}

pub async fn delete_post(base: &str, id: i64) -> Result<(), gloo_net::Error> {
    Request::delete(&format!("{base}/blog/{id}")).send().await?;
    Ok(())
}
