//! HTTP behavior of the OpenAI provider and the REST document store.

use floralens::{
    CanonicalKey, CompletionRequest, DocumentStore, OpenAiProvider, RestStore, TextCompletion,
};
use mockito::Matcher;
use serde_json::json;
use std::time::Duration;

fn completion_request() -> CompletionRequest {
    CompletionRequest {
        system: "You are an expert flower assistant.".to_string(),
        prompt: "Give a very concise care recommendation.".to_string(),
        max_tokens: 300,
        temperature: 0.2,
    }
}

#[tokio::test]
async fn provider_sends_profile_parameters_and_returns_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "gpt-4o",
            "max_tokens": 300,
            "temperature": 0.2,
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"choices":[{"message":{"content":"Water sparingly."}}]}"#)
        .create_async()
        .await;

    let provider = OpenAiProvider::new(
        Some(server.url()),
        Some("test-key".to_string()),
        "gpt-4o",
        Duration::from_secs(5),
    )
    .unwrap();

    let text = provider.complete(completion_request()).await.unwrap();
    assert_eq!(text, "Water sparingly.");
    mock.assert_async().await;
}

#[tokio::test]
async fn provider_maps_error_status_to_provider_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(429)
        .with_body("rate limited")
        .create_async()
        .await;

    let provider = OpenAiProvider::new(
        Some(server.url()),
        None,
        "gpt-4o",
        Duration::from_secs(5),
    )
    .unwrap();

    let err = provider.complete(completion_request()).await.unwrap_err();
    assert!(matches!(err, floralens::Error::Provider(_)));
}

#[tokio::test]
async fn rest_store_treats_404_as_absent() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flower_details/rose_tulip")
        .with_status(404)
        .create_async()
        .await;

    let store = RestStore::new(server.url(), Duration::from_secs(5)).unwrap();
    let key = CanonicalKey::from("rose_tulip");

    let document = store.get("flower_details", &key).await.unwrap();
    assert!(document.is_none());
}

#[tokio::test]
async fn rest_store_round_trips_documents() {
    let mut server = mockito::Server::new_async().await;
    let put = server
        .mock("PUT", "/flower_recommendations/rose")
        .match_body(Matcher::PartialJson(json!({"text": "Water daily."})))
        .with_status(200)
        .create_async()
        .await;
    server
        .mock("GET", "/flower_recommendations/rose")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"text":"Water daily.","source_labels":["rose"]}"#)
        .create_async()
        .await;

    let store = RestStore::new(server.url(), Duration::from_secs(5)).unwrap();
    let key = CanonicalKey::from("rose");

    store
        .put(
            "flower_recommendations",
            &key,
            json!({"text": "Water daily.", "source_labels": ["rose"]}),
        )
        .await
        .unwrap();
    put.assert_async().await;

    let document = store
        .get("flower_recommendations", &key)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(document["text"], "Water daily.");
}

#[tokio::test]
async fn rest_store_maps_server_errors() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/flower_details/rose")
        .with_status(500)
        .create_async()
        .await;

    let store = RestStore::new(server.url(), Duration::from_secs(5)).unwrap();
    let key = CanonicalKey::from("rose");

    let err = store.get("flower_details", &key).await.unwrap_err();
    assert!(matches!(err, floralens::Error::Store(_)));
}
