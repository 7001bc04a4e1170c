//! End-to-End Agent Scenarios
//!
//! Exercises the interceptor against an in-memory storage backend and a
//! scripted network: install warm-up, both strategies, both offline
//! fallbacks and the origin gate.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use url::Url;

use offline_agent::cache::{Cache, CacheKey, CacheStorage, CachedResponse, MemoryStorage};
use offline_agent::error::{AgentError, Result};
use offline_agent::models::FetchRequest;
use offline_agent::net::Network;
use offline_agent::{Config, FetchOutcome, Interceptor};

// == Scripted Network ==
/// Network double with fixed responses per URL, an offline switch and a
/// per-URL fetch counter.
#[derive(Default)]
struct ScriptedNetwork {
    responses: Mutex<HashMap<String, CachedResponse>>,
    offline: AtomicBool,
    fetch_counts: Mutex<HashMap<String, usize>>,
}

impl ScriptedNetwork {
    fn new() -> Self {
        Self::default()
    }

    fn respond(&self, url: &str, response: CachedResponse) {
        self.responses
            .lock()
            .unwrap()
            .insert(url.to_string(), response);
    }

    fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    fn fetch_count(&self, url: &str) -> usize {
        self.fetch_counts
            .lock()
            .unwrap()
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    fn total_fetches(&self) -> usize {
        self.fetch_counts.lock().unwrap().values().sum()
    }
}

#[async_trait]
impl Network for ScriptedNetwork {
    async fn fetch(&self, request: &FetchRequest) -> Result<CachedResponse> {
        let url = request.url.to_string();
        *self
            .fetch_counts
            .lock()
            .unwrap()
            .entry(url.clone())
            .or_insert(0) += 1;

        if self.offline.load(Ordering::SeqCst) {
            return Err(AgentError::Network(format!("{}: offline", url)));
        }
        self.responses
            .lock()
            .unwrap()
            .get(&url)
            .cloned()
            .ok_or_else(|| AgentError::Network(format!("{}: connection refused", url)))
    }
}

// == Helpers ==
struct Harness {
    agent: Interceptor,
    storage: Arc<MemoryStorage>,
    network: Arc<ScriptedNetwork>,
}

fn harness() -> Harness {
    let storage = Arc::new(MemoryStorage::new());
    let network = Arc::new(ScriptedNetwork::new());
    let agent = Interceptor::new(&Config::default(), storage.clone(), network.clone())
        .expect("valid default config");
    Harness {
        agent,
        storage,
        network,
    }
}

fn get(raw: &str) -> FetchRequest {
    FetchRequest::get(Url::parse(raw).unwrap())
}

fn key(url: &str) -> CacheKey {
    CacheKey::new("GET", url)
}

async fn open_store(storage: &Arc<MemoryStorage>) -> Arc<dyn Cache> {
    storage.open("freerg-v1").await.unwrap()
}

fn script_manifest(network: &ScriptedNetwork) {
    network.respond("http://localhost:8000/", CachedResponse::ok("HOME"));
    network.respond(
        "http://localhost:8000/static/manifest.webmanifest",
        CachedResponse::ok("{\"name\":\"freerg\"}"),
    );
}

fn response_of(outcome: FetchOutcome) -> CachedResponse {
    match outcome {
        FetchOutcome::Response(response) => response,
        FetchOutcome::Passthrough => panic!("expected an intercepted response"),
    }
}

// == Install ==
#[tokio::test]
async fn install_populates_exactly_the_manifest() {
    let h = harness();
    script_manifest(&h.network);

    h.agent.install().await.unwrap();

    let store = open_store(&h.storage).await;
    let mut urls: Vec<String> = store
        .keys()
        .await
        .unwrap()
        .iter()
        .map(|k| k.url().to_string())
        .collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            "http://localhost:8000/".to_string(),
            "http://localhost:8000/static/manifest.webmanifest".to_string(),
        ]
    );

    // Bodies match what the network returned at install time
    let home = store
        .get(&key("http://localhost:8000/"))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(home.body, Bytes::from("HOME"));
}

#[tokio::test]
async fn install_with_unreachable_entry_fails_whole_warmup() {
    let h = harness();
    // Root responds, the manifest file does not
    h.network
        .respond("http://localhost:8000/", CachedResponse::ok("HOME"));

    let result = h.agent.install().await;
    assert!(matches!(result, Err(AgentError::InstallFailed(_))));
}

// == Origin Gate ==
#[tokio::test]
async fn foreign_origin_is_passed_through() {
    let h = harness();

    let outcome = h
        .agent
        .handle_fetch(&get("https://cdn.example.com/static/lib.js"))
        .await
        .unwrap();

    assert_eq!(outcome, FetchOutcome::Passthrough);
    assert_eq!(h.network.total_fetches(), 0);
    assert!(open_store(&h.storage).await.keys().await.unwrap().is_empty());
}

// == Static Strategy ==
#[tokio::test]
async fn static_hit_is_served_from_cache_without_network() {
    let h = harness();
    let store = open_store(&h.storage).await;
    store
        .put(
            key("http://localhost:8000/static/app.css"),
            CachedResponse::ok("cached css"),
        )
        .await
        .unwrap();

    let outcome = h
        .agent
        .handle_fetch(&get("http://localhost:8000/static/app.css"))
        .await
        .unwrap();

    let response = response_of(outcome);
    assert_eq!(response.body, Bytes::from("cached css"));
    assert_eq!(h.network.total_fetches(), 0);
}

#[tokio::test]
async fn static_miss_serves_network_and_does_not_populate_cache() {
    let h = harness();
    h.network.respond(
        "http://localhost:8000/static/app.css",
        CachedResponse::ok("X"),
    );

    let outcome = h
        .agent
        .handle_fetch(&get("http://localhost:8000/static/app.css"))
        .await
        .unwrap();
    let response = response_of(outcome);
    assert_eq!(response.body, Bytes::from("X"));

    // Deliberate asymmetry with the page strategy: static assets are only
    // ever cached by the install warm-up, never on a fetch miss
    tokio::time::sleep(Duration::from_millis(50)).await;
    let store = open_store(&h.storage).await;
    assert!(store
        .get(&key("http://localhost:8000/static/app.css"))
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn static_miss_with_network_down_fails() {
    let h = harness();
    h.network.set_offline(true);

    let result = h
        .agent
        .handle_fetch(&get("http://localhost:8000/static/app.css"))
        .await;

    assert!(matches!(result, Err(AgentError::Network(_))));
}

// == Page Strategy ==
#[tokio::test]
async fn page_fetch_returns_network_response_and_caches_it() {
    let h = harness();
    h.network.respond(
        "http://localhost:8000/games/123",
        CachedResponse::new(
            200,
            vec![("content-type".to_string(), "text/html".to_string())],
            "<html>game</html>",
        ),
    );

    let request = get("http://localhost:8000/games/123");
    let outcome = h.agent.handle_fetch(&request).await.unwrap();
    let response = response_of(outcome);
    assert_eq!(response.body, Bytes::from("<html>game</html>"));

    // The cache write is detached from the response path
    tokio::time::sleep(Duration::from_millis(50)).await;
    let stored = open_store(&h.storage)
        .await
        .get(&key("http://localhost:8000/games/123"))
        .await
        .unwrap()
        .expect("page cached after successful fetch");
    assert_eq!(stored, response);
}

#[tokio::test]
async fn previously_visited_page_is_served_offline() {
    let h = harness();
    h.network
        .respond("http://localhost:8000/games/123", CachedResponse::ok("game"));

    // Visit once online
    let request = get("http://localhost:8000/games/123");
    h.agent.handle_fetch(&request).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Then go offline and visit again
    h.network.set_offline(true);
    let outcome = h.agent.handle_fetch(&request).await.unwrap();
    let response = response_of(outcome);
    assert_eq!(response.body, Bytes::from("game"));
}

#[tokio::test]
async fn unvisited_page_falls_back_to_root_offline() {
    let h = harness();
    script_manifest(&h.network);
    h.agent.install().await.unwrap();

    h.network.set_offline(true);
    let outcome = h
        .agent
        .handle_fetch(&get("http://localhost:8000/page"))
        .await
        .unwrap();

    let response = response_of(outcome);
    assert_eq!(response.body, Bytes::from("HOME"));
}

#[tokio::test]
async fn offline_with_empty_cache_surfaces_network_error() {
    let h = harness();
    h.network.set_offline(true);

    let result = h
        .agent
        .handle_fetch(&get("http://localhost:8000/page"))
        .await;

    assert!(matches!(result, Err(AgentError::Network(_))));
}

#[tokio::test]
async fn page_refetch_overwrites_cached_copy() {
    let h = harness();
    let request = get("http://localhost:8000/news");

    h.network
        .respond("http://localhost:8000/news", CachedResponse::ok("monday"));
    h.agent.handle_fetch(&request).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    h.network
        .respond("http://localhost:8000/news", CachedResponse::ok("tuesday"));
    h.agent.handle_fetch(&request).await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    // Offline now serves the latest successful fetch
    h.network.set_offline(true);
    let outcome = h.agent.handle_fetch(&request).await.unwrap();
    assert_eq!(response_of(outcome).body, Bytes::from("tuesday"));
}

// == Full Lifecycle ==
#[tokio::test]
async fn install_then_go_offline_keeps_root_and_manifest_available() {
    let h = harness();
    script_manifest(&h.network);
    h.agent.install().await.unwrap();
    h.network.set_offline(true);

    // The root is a page: network-first finds the precached entry
    let outcome = h
        .agent
        .handle_fetch(&get("http://localhost:8000/"))
        .await
        .unwrap();
    assert_eq!(response_of(outcome).body, Bytes::from("HOME"));

    // The manifest file is static: cache-first serves it with no network
    let before = h.network.total_fetches();
    let outcome = h
        .agent
        .handle_fetch(&get("http://localhost:8000/static/manifest.webmanifest"))
        .await
        .unwrap();
    assert_eq!(
        response_of(outcome).body,
        Bytes::from("{\"name\":\"freerg\"}")
    );
    assert_eq!(h.network.total_fetches(), before);
}

#[tokio::test]
async fn static_hit_count_stays_zero_for_precached_asset() {
    let h = harness();
    script_manifest(&h.network);
    h.agent.install().await.unwrap();

    // Still online, but the precached asset must not be refetched
    h.agent
        .handle_fetch(&get("http://localhost:8000/static/manifest.webmanifest"))
        .await
        .unwrap();

    assert_eq!(
        h.network
            .fetch_count("http://localhost:8000/static/manifest.webmanifest"),
        1,
        "only the install fetch should have hit the network"
    );
}
