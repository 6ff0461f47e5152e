use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use quote_server::config::ServerConfig;
use quote_server::routes::AppState;
use quote_server::storage::TABLE_NAME;
use quote_server::build_app;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PROVIDER_PATH: &str = "/json/last/USD-BRL";

struct Harness {
    app: Router,
    state: AppState,
    provider: MockServer,
    dir: TempDir,
}

async fn harness() -> Harness {
    let provider = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let config = ServerConfig {
        provider_url: format!("{}{}", provider.uri(), PROVIDER_PATH),
        provider_timeout: Duration::from_millis(300),
        db_path: dir.path().join("cotacao.db"),
        db_timeout: Duration::from_secs(2),
        ..ServerConfig::default()
    };
    let (app, state) = build_app(&config).unwrap();
    Harness {
        app,
        state,
        provider,
        dir,
    }
}

async fn provider_answers(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(PROVIDER_PATH))
        .respond_with(template)
        .mount(server)
        .await;
}

fn provider_body(bid: &str) -> String {
    format!(
        r#"{{"USDBRL":{{"code":"USD","codein":"BRL","name":"Dólar Americano/Real Brasileiro","high":"5.47","low":"5.41","bid":"{}","ask":"5.4331","timestamp":"1718035199"}}}}"#,
        bid
    )
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

#[tokio::test]
async fn serves_and_records_the_provider_bid() {
    let h = harness().await;
    provider_answers(&h.provider, ResponseTemplate::new(200).set_body_string(provider_body("5.43"))).await;

    let (status, content_type, body) = get(&h.app, "/cotacao").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, serde_json::json!({"USDBRL": {"bid": "5.43"}}));

    let rows = h.state.store.recent(10).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].currency.to_string(), "USD");
    assert_eq!(rows[0].bid, "5.43");
}

#[tokio::test]
async fn every_request_appends_one_row() {
    let h = harness().await;
    provider_answers(&h.provider, ResponseTemplate::new(200).set_body_string(provider_body("5.4321"))).await;

    for expected in 1..=3u64 {
        let (status, _, _) = get(&h.app, "/cotacao").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(h.state.store.count().unwrap(), expected);
    }
    assert!(h.state.store.recent(3).unwrap().iter().all(|q| q.bid == "5.4321"));
}

#[tokio::test]
async fn unknown_path_is_not_found_without_side_effects() {
    let h = harness().await;
    provider_answers(&h.provider, ResponseTemplate::new(200).set_body_string(provider_body("5.43"))).await;

    for uri in ["/", "/cotacao/extra", "/quote"] {
        let (status, _, body) = get(&h.app, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert!(body.is_empty());
    }

    assert_eq!(h.state.store.count().unwrap(), 0);
    assert!(h.provider.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn provider_timeout_is_an_empty_internal_error() {
    let h = harness().await;
    provider_answers(
        &h.provider,
        ResponseTemplate::new(200)
            .set_body_string(provider_body("5.43"))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let (status, _, body) = get(&h.app, "/cotacao").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    assert_eq!(h.state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn malformed_provider_payload_is_an_internal_error() {
    let h = harness().await;
    provider_answers(&h.provider, ResponseTemplate::new(200).set_body_string(r#"{"USDBRL":{}}"#)).await;

    let (status, _, body) = get(&h.app, "/cotacao").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());
    assert_eq!(h.state.store.count().unwrap(), 0);
}

#[tokio::test]
async fn database_failure_is_reported_and_server_keeps_serving() {
    let h = harness().await;
    provider_answers(&h.provider, ResponseTemplate::new(200).set_body_string(provider_body("5.43"))).await;
    let outside = rusqlite::Connection::open(h.dir.path().join("cotacao.db")).unwrap();

    outside
        .execute_batch(&format!("DROP TABLE {}", TABLE_NAME))
        .unwrap();
    let (status, _, body) = get(&h.app, "/cotacao").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.is_empty());

    outside
        .execute_batch(&format!(
            "CREATE TABLE {} (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                moeda TEXT NOT NULL,
                cotacao TEXT NOT NULL,
                timestamp DATETIME NOT NULL
            )",
            TABLE_NAME
        ))
        .unwrap();
    let (status, _, _) = get(&h.app, "/cotacao").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(h.state.store.count().unwrap(), 1);
}
