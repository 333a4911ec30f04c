//! Unit tests for the pic service.


use std::time::Duration;

use wiremock::{MockServer, Request};

use crate::cache::CacheProvider;
use crate::config::ClientConfig;
use crate::models::{Pic, PicId};
use crate::service::{PicCache, PicService};

fn service_with_mock(mock_uri: &str) -> PicService {
    PicService::new(ClientConfig::new(mock_uri), &CacheProvider::new()).unwrap()
}

/// JSON page of pics with the given IDs and a passthrough field each.
fn page_json(ids: &[i64]) -> serde_json::Value {
    let pics: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id,
                "relative_url": format!("pix/{id}.jpg"),
            })
        })
        .collect();
    serde_json::Value::Array(pics)
}

fn ids(pics: &[Pic]) -> Vec<String> {
    pics.iter().map(|pic| pic.id.to_string()).collect()
}

fn start_pic_id(request: &Request) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(key, _)| key == "start_pic_id")
        .map(|(_, value)| value.to_string())
}

/// Polls until the mock server has seen at least `count` requests.
async fn wait_for_requests(server: &MockServer, count: usize) -> Vec<Request> {
    for _ in 0..200 {
        let requests = server.received_requests().await.unwrap_or_default();
        if requests.len() >= count {
            return requests;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for {count} requests");
}

/// Polls until a background task has stored `id` in the pic cache.
async fn wait_until_cached(cache: &PicCache, id: &str) {
    let id = PicId::from(id);
    for _ in 0..200 {
        if cache.contains(&id).await {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("Timed out waiting for pic {id} to be cached");
}

/// Gives detached prefetch tasks a chance to run to completion.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
