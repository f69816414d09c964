//! Local stand-in for the Perenual API.
//!
//! Serves `GET /api/species-list` with a fixed status and body and records the
//! query string of every request it receives.

#![allow(dead_code)]

use axum::{extract::Query, http::StatusCode, routing::get, Router};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub type SeenRequests = Arc<Mutex<Vec<HashMap<String, String>>>>;

pub struct Upstream {
    pub base_url: String,
    pub seen: SeenRequests,
}

impl Upstream {
    pub fn request_count(&self) -> usize {
        self.seen.lock().unwrap().len()
    }
}

/// Start an upstream answering every species-list call with `status` and `body`.
pub async fn spawn_upstream(status: StatusCode, body: impl Into<String>) -> Upstream {
    let body: String = body.into();
    let seen: SeenRequests = Arc::new(Mutex::new(Vec::new()));
    let recorder = Arc::clone(&seen);

    let app = Router::new().route(
        "/api/species-list",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorder = Arc::clone(&recorder);
            let body = body.clone();
            async move {
                recorder.lock().unwrap().push(params);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Upstream {
        base_url: format!("http://{}/api", addr),
        seen,
    }
}

/// A base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/api", addr)
}

/// Species-list envelope holding `names` as minimal plant records (ids from 100).
pub fn envelope(names: &[&str]) -> String {
    let data: Vec<serde_json::Value> = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            serde_json::json!({
                "id": 100 + i,
                "common_name": name,
                "scientific_name": [format!("{} officinalis", name)],
                "other_name": [],
                "cycle": "Perennial",
                "watering": "Frequent",
                "sunlight": ["full shade"],
                "default_image": null
            })
        })
        .collect();

    serde_json::json!({
        "data": data,
        "to": names.len(),
        "per_page": 10,
        "current_page": 1,
        "from": 1,
        "last_page": 1,
        "total": names.len()
    })
    .to_string()
}
