//! Integration tests for the /check-mx endpoint
//!
//! Runs the real server on an ephemeral port with a scripted resolver.

use async_trait::async_trait;
use mx_record_api::{ApiServer, MxCheckService, MxRecord, MxResolver, ResolutionError};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Resolver answering from a fixed table; unknown domains fail like NXDOMAIN.
struct TableResolver {
    answers: HashMap<String, Vec<MxRecord>>,
    calls: AtomicUsize,
}

impl TableResolver {
    fn new(entries: &[(&str, Vec<MxRecord>)]) -> Arc<Self> {
        Arc::new(Self {
            answers: entries
                .iter()
                .map(|(d, r)| (d.to_string(), r.clone()))
                .collect(),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl MxResolver for TableResolver {
    async fn resolve_mx(&self, domain: &str) -> Result<Vec<MxRecord>, ResolutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .get(domain)
            .cloned()
            .ok_or_else(|| ResolutionError::lookup(domain, "no record found"))
    }
}

async fn start_server(resolver: Arc<TableResolver>) -> (SocketAddr, tokio::task::JoinHandle<()>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let service = Arc::new(MxCheckService::new(resolver));
    let server = ApiServer::new(addr.to_string(), service);
    let handle = tokio::spawn(async move {
        let _ = server.run().await;
    });

    tokio::time::sleep(Duration::from_millis(100)).await;
    (addr, handle)
}

fn sample_resolver() -> Arc<TableResolver> {
    TableResolver::new(&[
        ("example.com", vec![MxRecord::new("ASPMX.L.GOOGLE.com", 1)]),
        (
            "contoso.com",
            vec![MxRecord::new("contoso-com.mail.protection.outlook.com", 0)],
        ),
        ("corp.example", vec![MxRecord::new("mx1.iphmx.com", 10)]),
        (
            "filtered.example",
            vec![MxRecord::new("d42.ess.barracudanetworks.com", 10)],
        ),
        ("empty.example", vec![]),
    ])
}

/// Full request/response contract over a real socket
#[tokio::test]
async fn test_check_mx_end_to_end() {
    let resolver = sample_resolver();
    let (addr, handle) = start_server(resolver.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/check-mx", addr);

    let resp = client
        .post(&url)
        .json(&serde_json::json!({ "domain": "example.com" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        serde_json::json!({
            "domain": "example.com",
            "mx_record": "aspmx.l.google.com",
            "mx_provider": "Google Workspace",
            "mx_security_gateway": false
        })
    );

    let body: serde_json::Value = client
        .post(&url)
        .json(&serde_json::json!({ "domain": "contoso.com" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["mx_provider"], "Microsoft 365");
    assert_eq!(body["mx_security_gateway"], false);

    let body: serde_json::Value = client
        .post(&url)
        .json(&serde_json::json!({ "domain": "filtered.example" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["mx_provider"], "Unknown");
    assert_eq!(body["mx_security_gateway"], true);

    assert_eq!(resolver.calls.load(Ordering::SeqCst), 3);
    handle.abort();
}

/// Client errors and resolver failures map to fixed messages
#[tokio::test]
async fn test_check_mx_error_responses() {
    let resolver = sample_resolver();
    let (addr, handle) = start_server(resolver.clone()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/check-mx", addr);

    let resp = client
        .post(&url)
        .json(&serde_json::json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body, serde_json::json!({ "error": "Domain is required" }));
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);

    for domain in ["does-not-exist.invalid", "empty.example"] {
        let resp = client
            .post(&url)
            .json(&serde_json::json!({ "domain": domain }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), 500, "domain {}", domain);
        let body: serde_json::Value = resp.json().await.unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "Failed to resolve MX records" })
        );
    }

    handle.abort();
}

/// Same domain, same answer, same response
#[tokio::test]
async fn test_check_mx_is_idempotent() {
    let (addr, handle) = start_server(sample_resolver()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/check-mx", addr);

    let mut bodies = Vec::new();
    for _ in 0..2 {
        let body: serde_json::Value = client
            .post(&url)
            .json(&serde_json::json!({ "domain": "corp.example" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        bodies.push(body);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[0]["mx_provider"], "Cisco Email Security");
    assert_eq!(bodies[0]["mx_security_gateway"], true);

    handle.abort();
}

/// Concurrent requests do not interfere with each other
#[tokio::test]
async fn test_concurrent_requests() {
    let (addr, handle) = start_server(sample_resolver()).await;
    let client = reqwest::Client::new();
    let url = format!("http://{}/check-mx", addr);

    let mut tasks = Vec::new();
    for (domain, expected) in [
        ("example.com", "Google Workspace"),
        ("contoso.com", "Microsoft 365"),
        ("corp.example", "Cisco Email Security"),
        ("filtered.example", "Unknown"),
    ] {
        let client = client.clone();
        let url = url.clone();
        tasks.push(tokio::spawn(async move {
            let body: serde_json::Value = client
                .post(&url)
                .json(&serde_json::json!({ "domain": domain }))
                .send()
                .await
                .unwrap()
                .json()
                .await
                .unwrap();
            assert_eq!(body["mx_provider"], expected);
            assert_eq!(body["domain"], domain);
        }));
    }

    for task in tasks {
        task.await.unwrap();
    }

    handle.abort();
}

/// Health probe responds without touching the resolver
#[tokio::test]
async fn test_health_endpoint() {
    let resolver = sample_resolver();
    let (addr, handle) = start_server(resolver.clone()).await;

    let resp = reqwest::get(format!("http://{}/health", addr)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(resolver.calls.load(Ordering::SeqCst), 0);

    handle.abort();
}
