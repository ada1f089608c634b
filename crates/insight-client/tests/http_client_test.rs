//! ApiClient against a local axum server serving recorded responses.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};

use insight_client::ApiClient;
use insight_core::config::ApiConfig;
use insight_core::errors::{ApiError, InsightError};
use insight_core::traits::{IGroupFetcher, IMemberKicker};
use test_fixtures::load_api_response;

#[derive(Clone)]
struct ServerState {
    /// Fixture name served by every endpoint, or an HTTP status to fail with.
    reply: Result<&'static str, StatusCode>,
    /// (path, key, body) of each request received.
    seen: Arc<Mutex<Vec<(String, String, serde_json::Value)>>>,
    delay: Duration,
}

#[derive(serde::Deserialize)]
struct KeyQuery {
    key: String,
}

async fn record(
    path: &str,
    state: &ServerState,
    query: KeyQuery,
    body: serde_json::Value,
) -> Response {
    state
        .seen
        .lock()
        .unwrap()
        .push((path.to_string(), query.key, body));
    tokio::time::sleep(state.delay).await;
    match state.reply {
        Ok(fixture) => (
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            load_api_response(fixture),
        )
            .into_response(),
        Err(status) => status.into_response(),
    }
}

async fn chatroom_info(
    State(state): State<ServerState>,
    Query(query): Query<KeyQuery>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    record("GetChatRoomInfo", &state, query, body).await
}

async fn del_member(
    State(state): State<ServerState>,
    Query(query): Query<KeyQuery>,
    Json(body): Json<serde_json::Value>,
) -> Response {
    record("SendDelDelChatRoomMember", &state, query, body).await
}

async fn start_test_server(
    reply: Result<&'static str, StatusCode>,
    delay: Duration,
) -> (String, ServerState) {
    let state = ServerState {
        reply,
        seen: Arc::new(Mutex::new(Vec::new())),
        delay,
    };
    let app = Router::new()
        .route("/group/GetChatRoomInfo", post(chatroom_info))
        .route("/group/SendDelDelChatRoomMember", post(del_member))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}/"), state)
}

fn client(base_url: &str, timeout_secs: u64) -> ApiClient {
    ApiClient::new(ApiConfig {
        base_url: base_url.to_string(),
        api_key: "secret key".to_string(),
        request_timeout_secs: timeout_secs,
    })
    .unwrap()
}

#[tokio::test]
async fn fetch_posts_group_id_with_key() {
    let (base_url, state) = start_test_server(Ok("get_chatroom_info_ok"), Duration::ZERO).await;
    let snapshot = client(&base_url, 5)
        .fetch_group_snapshot("10001@chatroom")
        .await
        .unwrap();

    assert_eq!(snapshot.group_name, "Chain Group");
    assert_eq!(snapshot.member_count(), 4);

    let seen = state.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    let (path, key, body) = &seen[0];
    assert_eq!(path, "GetChatRoomInfo");
    assert_eq!(key, "secret key");
    assert_eq!(body, &serde_json::json!({"ChatRoomWxIdList": ["10001@chatroom"]}));
}

#[tokio::test]
async fn kick_posts_member_list() {
    let (base_url, state) = start_test_server(Ok("kick_ok"), Duration::ZERO).await;
    let members = vec!["wxid_carol".to_string(), "wxid_dave".to_string()];
    let report = client(&base_url, 5)
        .kick_members("10001@chatroom", &members)
        .await
        .unwrap();
    assert_eq!(report.kicked, members);

    let seen = state.seen.lock().unwrap();
    assert_eq!(seen[0].0, "SendDelDelChatRoomMember");
    assert_eq!(
        seen[0].2,
        serde_json::json!({"ChatRoomName": "10001@chatroom", "UserList": ["wxid_carol", "wxid_dave"]})
    );
}

#[tokio::test]
async fn empty_kick_list_fails_without_a_request() {
    let (base_url, state) = start_test_server(Ok("kick_ok"), Duration::ZERO).await;
    let err = client(&base_url, 5).kick_members("g", &[]).await.unwrap_err();
    assert!(matches!(err, InsightError::KickFailed { .. }));
    assert!(state.seen.lock().unwrap().is_empty());
}

#[tokio::test]
async fn http_error_status_is_reported() {
    let (base_url, _state) =
        start_test_server(Err(StatusCode::INTERNAL_SERVER_ERROR), Duration::ZERO).await;
    let err = client(&base_url, 5).fetch_group_snapshot("g").await.unwrap_err();
    assert!(matches!(err, InsightError::ApiError(ApiError::Status { status: 500 })));
}

#[tokio::test]
async fn envelope_without_data_is_rejected_with_backend_code() {
    let (base_url, _state) =
        start_test_server(Ok("get_chatroom_info_no_data"), Duration::ZERO).await;
    let err = client(&base_url, 5).fetch_group_snapshot("g").await.unwrap_err();
    assert!(matches!(
        err,
        InsightError::ApiError(ApiError::Rejected { code: -2, ref message }) if message == "session expired"
    ));
}

#[tokio::test]
async fn kick_envelope_without_data_is_rejected() {
    let (base_url, _state) =
        start_test_server(Ok("get_chatroom_info_no_data"), Duration::ZERO).await;
    let err = client(&base_url, 5)
        .kick_members("g", &["a".to_string()])
        .await
        .unwrap_err();
    assert!(
        matches!(err, InsightError::KickFailed { ref reason, .. } if reason.contains("session expired")),
        "{err:?}"
    );
}

#[tokio::test]
async fn slow_backend_times_out() {
    let (base_url, _state) =
        start_test_server(Ok("get_chatroom_info_ok"), Duration::from_secs(10)).await;

    let result = tokio::time::timeout(
        Duration::from_secs(5),
        client(&base_url, 1).fetch_group_snapshot("g"),
    )
    .await;

    match result {
        Ok(inner) => assert!(
            matches!(inner, Err(InsightError::ApiError(ApiError::Network { .. }))),
            "expected a network timeout, got: {inner:?}"
        ),
        Err(elapsed) => panic!("client has no request timeout: {elapsed}"),
    }
}

#[tokio::test]
async fn unconfigured_client_refuses_to_send() {
    let client = ApiClient::new(ApiConfig::default()).unwrap();
    let err = client.fetch_group_snapshot("g").await.unwrap_err();
    assert!(matches!(
        err,
        InsightError::ApiError(ApiError::NotConfigured { ref missing }) if missing == "base_url"
    ));
}
