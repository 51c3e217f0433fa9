//! Tests for the PostgREST client against a mock HTTP server.
//!
//! Verifies credential injection, the filter query parameters, and the
//! empty-row-set conflict mapping of the conditional update.

use assert_matches::assert_matches;
use serde_json::{json, Value};
use thanks_store::{EntryStore, StoreConfig, StoreError, SupabaseStore};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const KEY: &str = "service-role-key";

fn store_for(server: &MockServer) -> SupabaseStore {
    SupabaseStore::new(StoreConfig {
        base_url: Some(server.uri()),
        service_key: Some(KEY.into()),
    })
}

fn row(token: &str, answered_at: Option<&str>) -> Value {
    json!({
        "token": token,
        "created_at": "2026-08-30T12:00:00Z",
        "answered_at": answered_at,
        "email": null,
        "pen_name": null,
        "pen_name_public": null,
        "discovery": null,
        "motive": null,
        "impression": null,
        "note": null,
    })
}

fn answers() -> thanks_core::survey::SurveyAnswers {
    thanks_core::survey::SurveyAnswers {
        motive: "concept".into(),
        impression: "good".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn insert_sends_credentials_and_returns_created_row() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/support_entries"))
        .and(header("apikey", KEY))
        .and(header("authorization", format!("Bearer {KEY}").as_str()))
        .and(header("Prefer", "return=representation"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([row("aabbcc", None)])))
        .expect(1)
        .mount(&server)
        .await;

    let entry = store_for(&server).insert("aabbcc").await.unwrap();
    assert_eq!(entry.token, "aabbcc");
    assert!(entry.answered_at.is_none());
}

#[tokio::test]
async fn insert_without_representation_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/support_entries"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([])))
        .mount(&server)
        .await;

    let err = store_for(&server).insert("aabbcc").await.unwrap_err();
    assert_matches!(err, StoreError::MissingRow);
}

#[tokio::test]
async fn find_filters_by_exact_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/support_entries"))
        .and(query_param("token", "eq.aabbcc"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row("aabbcc", None)])))
        .mount(&server)
        .await;

    let entry = store_for(&server).find_by_token("aabbcc").await.unwrap();
    assert_eq!(entry.unwrap().token, "aabbcc");
}

#[tokio::test]
async fn find_unknown_token_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/support_entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let entry = store_for(&server)
        .find_by_token("nonexistent-token")
        .await
        .unwrap();
    assert!(entry.is_none());
}

#[tokio::test]
async fn list_orders_newest_first_and_caps_the_limit() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/support_entries"))
        .and(query_param("order", "created_at.desc"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([row("a1", None)])))
        .expect(1)
        .mount(&server)
        .await;

    // A requested limit beyond the cap is clamped to 100.
    let entries = store_for(&server).list_recent(1_000).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn conditional_update_carries_the_unanswered_predicate() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/support_entries"))
        .and(query_param("token", "eq.aabbcc"))
        .and(query_param("answered_at", "is.null"))
        .and(header("Prefer", "return=representation"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([row("aabbcc", Some("2026-08-30T12:05:00Z"))])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated = store_for(&server)
        .answer_if_open("aabbcc", &answers())
        .await
        .unwrap();
    assert!(updated.unwrap().answered_at.is_some());
}

#[tokio::test]
async fn empty_update_result_maps_to_conflict_path() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/support_entries"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let updated = store_for(&server)
        .answer_if_open("aabbcc", &answers())
        .await
        .unwrap();
    assert!(updated.is_none(), "zero matched rows means already answered");
}

#[tokio::test]
async fn non_2xx_surfaces_status_and_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/support_entries"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let err = store_for(&server).find_by_token("aabbcc").await.unwrap_err();
    assert_matches!(err, StoreError::Api { status: 500, ref body } if body == "upstream down");
}

#[tokio::test]
async fn missing_credentials_fail_before_any_request() {
    let store = SupabaseStore::new(StoreConfig::default());
    assert!(!store.is_configured());

    let err = store.find_by_token("aabbcc").await.unwrap_err();
    assert_matches!(err, StoreError::Configuration(_));
}
