mod common;

use axum::http::{Method, StatusCode};
use common::{assert_envelope, seeded_app, send};

#[tokio::test]
async fn test_get_paginated_questions() {
    let app = seeded_app();

    let res = send(&app, Method::GET, "/questions", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["success"], true);
    assert_eq!(res.json["questions"].as_array().unwrap().len(), 10);
    assert_eq!(res.json["total_questions"], 19);
    assert_eq!(res.json["categories"]["1"], "Science");
    assert!(res.json["current_category"].is_null());
}

#[tokio::test]
async fn test_second_page() {
    let app = seeded_app();

    let res = send(&app, Method::GET, "/questions?page=2", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["questions"].as_array().unwrap().len(), 9);
    assert_eq!(res.json["questions"][0]["id"], 11);
}

#[tokio::test]
async fn test_page_beyond_valid_is_404() {
    let app = seeded_app();

    let res = send(&app, Method::GET, "/questions?page=1000", None).await;

    assert_envelope(&res, 404, "resource not found");
}

#[tokio::test]
async fn test_unparseable_page_reads_first_page() {
    let app = seeded_app();

    let res = send(&app, Method::GET, "/questions?page=abc", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["questions"][0]["id"], 1);
}

#[tokio::test]
async fn test_delete_question() {
    let app = seeded_app();

    let res = send(&app, Method::DELETE, "/questions/5", None).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["success"], true);
    assert_eq!(res.json["deleted"], 5);
    assert_eq!(res.json["total_questions"], 18);

    let again = send(&app, Method::DELETE, "/questions/5", None).await;
    assert_envelope(&again, 422, "unprocessable");
}

#[tokio::test]
async fn test_delete_nonexistent_is_422() {
    let app = seeded_app();

    let res = send(&app, Method::DELETE, "/questions/1000", None).await;

    assert_envelope(&res, 422, "unprocessable");
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_404() {
    let app = seeded_app();

    let res = send(&app, Method::DELETE, "/questions/abc", None).await;

    assert_envelope(&res, 404, "resource not found");
}

#[tokio::test]
async fn test_create_question() {
    let app = seeded_app();
    let body = r#"{"question": "What is the capital of Peru?", "answer": "Lima", "category": 3, "difficulty": 2}"#;

    let res = send(&app, Method::POST, "/questions", Some(body)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["success"], true);
    assert_eq!(res.json["created"], 20);
    assert_eq!(res.json["total_questions"], 20);
    assert_eq!(res.json["questions"].as_array().unwrap().len(), 10);
}

#[tokio::test]
async fn test_create_with_string_difficulty_is_422() {
    let app = seeded_app();
    let body = r#"{"question": "Q?", "answer": "A", "category": 1, "difficulty": "hard"}"#;

    let res = send(&app, Method::POST, "/questions", Some(body)).await;

    assert_envelope(&res, 422, "unprocessable");
}

#[tokio::test]
async fn test_create_missing_answer_is_422() {
    let app = seeded_app();
    let body = r#"{"question": "Q?", "category": 1, "difficulty": 1}"#;

    let res = send(&app, Method::POST, "/questions", Some(body)).await;

    assert_envelope(&res, 422, "unprocessable");
}

#[tokio::test]
async fn test_non_json_body_is_400() {
    let app = seeded_app();

    let res = send(&app, Method::POST, "/questions", Some("question=Q&answer=A")).await;

    assert_envelope(&res, 400, "bad request");
}

#[tokio::test]
async fn test_search_world_returns_two() {
    let app = seeded_app();

    let res = send(&app, Method::POST, "/questions", Some(r#"{"searchTerm": "World"}"#)).await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["success"], true);
    assert_eq!(res.json["total_questions"], 2);
    let ids: Vec<i64> = res.json["questions"]
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, common::WORLD_CUP_IDS.to_vec());
}

#[tokio::test]
async fn test_search_without_results() {
    let app = seeded_app();

    let res = send(
        &app,
        Method::POST,
        "/questions",
        Some(r#"{"searchTerm": "blablabla"}"#),
    )
    .await;

    assert_eq!(res.status, StatusCode::OK);
    assert_eq!(res.json["success"], true);
    assert_eq!(res.json["total_questions"], 0);
    assert!(res.json["questions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_search_term_is_treated_as_create() {
    let app = seeded_app();

    let res = send(&app, Method::POST, "/questions", Some(r#"{"searchTerm": "   "}"#)).await;

    assert_envelope(&res, 422, "unprocessable");
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = seeded_app();

    let res = send(&app, Method::POST, "/questions", Some(r#"{"searchTerm": "PENICILLIN"}"#)).await;

    assert_eq!(res.json["total_questions"], 1);
    assert_eq!(res.json["questions"][0]["answer"], "Alexander Fleming");
}
