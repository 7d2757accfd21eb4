// Tests for `RestStore` against a wiremock PostgREST stand-in.

use std::time::Duration;

use serde_json::{Value, json};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use invite_codes::{
    config::StoreConfig,
    error::AppError,
    infrastructure::store::{InviteCode, InviteCodeStore, ProfileName, ProfileStore, RestStore},
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, RestStore) {
    let server = MockServer::start().await;
    let config = StoreConfig {
        url: Url::parse(&server.uri()).unwrap(),
        api_key: "test-key".into(),
        timeout: Duration::from_secs(5),
    };
    let store = RestStore::new(&config).unwrap();
    (server, store)
}

// ── Profiles ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_find_profile_name_filters_by_id() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .and(query_param("select", "name"))
        .and(query_param("id", "eq.u1"))
        .and(query_param("limit", "1"))
        .and(header("apikey", "test-key"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{ "name": "Alice" }])))
        .expect(1)
        .mount(&server)
        .await;

    let row = store.find_profile_name("u1").await.unwrap();

    assert_eq!(
        row,
        Some(ProfileName {
            name: Some("Alice".into())
        })
    );
}

#[tokio::test]
async fn test_find_profile_name_empty_result_is_none() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    assert_eq!(store.find_profile_name("missing-id").await.unwrap(), None);
}

#[tokio::test]
async fn test_find_profile_name_reports_postgrest_message() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "code": "PGRST301",
            "details": null,
            "hint": null,
            "message": "JWT expired"
        })))
        .mount(&server)
        .await;

    let err = store.find_profile_name("u1").await.unwrap_err();

    match err {
        AppError::Store(message) => assert_eq!(message, "JWT expired"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_error_body_reports_status() {
    let (server, store) = setup().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/profiles"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = store.find_profile_name("u1").await.unwrap_err();

    assert!(err.to_string().contains("503"), "got: {err}");
}

// ── Invite codes ────────────────────────────────────────────────────

#[tokio::test]
async fn test_insert_invite_codes_posts_single_batch() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/invite_codes"))
        .and(header("prefer", "return=minimal"))
        .and(header("apikey", "test-key"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let batch = vec![
        InviteCode::new("AAAA1111".into()),
        InviteCode::new("BBBB2222".into()),
    ];
    store.insert_invite_codes(&batch).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let body: Value = serde_json::from_slice(&requests[0].body).unwrap();
    let rows = body.as_array().unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["code"], "AAAA1111");
    assert_eq!(rows[0]["is_used"], false);
    assert!(rows[1]["created_at"].is_string());
}

#[tokio::test]
async fn test_insert_invite_codes_surfaces_conflict() {
    let (server, store) = setup().await;

    Mock::given(method("POST"))
        .and(path("/rest/v1/invite_codes"))
        .respond_with(ResponseTemplate::new(409).set_body_json(json!({
            "code": "23505",
            "message": "duplicate key value violates unique constraint \"invite_codes_code_key\""
        })))
        .mount(&server)
        .await;

    let err = store
        .insert_invite_codes(&[InviteCode::new("AAAA1111".into())])
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Store(_)));
    assert!(err.to_string().contains("invite_codes_code_key"));
}
