//! Rating sub-resource integration tests

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{assert_not_found_body, create_author, create_book, send, test_app, test_app_with_pool};

#[tokio::test]
async fn store_creates_a_rating_under_an_author() {
    let app = test_app().await;
    let author_id = create_author(&app, "H. G. Wells").await;

    let (status, _, body) = send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({ "value": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let data = &body["data"];
    assert_eq!(data["value"], json!(5));
    assert!(data["id"].as_i64().expect("id") > 0);
    assert!(data.get("created").is_some());
    assert!(data.get("updated").is_some());
    // The owner reference stays internal
    assert!(data.get("rateable_id").is_none());
    assert!(data.get("rateable_type").is_none());
}

#[tokio::test]
async fn store_fails_for_a_missing_author() {
    let app = test_app().await;
    let (status, _, body) = send(
        &app,
        "POST",
        "/authors/9999/ratings",
        Some(json!({ "value": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_not_found_body(&body);
}

#[tokio::test]
async fn store_validates_the_value_bounds() {
    let app = test_app().await;
    let author_id = create_author(&app, "H. G. Wells").await;

    let (status, _, body) = send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({ "value": 6 })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["value"], json!(["The value must be between 1 and 5."]));
}

#[tokio::test]
async fn store_requires_a_value() {
    let app = test_app().await;
    let author_id = create_author(&app, "H. G. Wells").await;

    let (status, _, body) = send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["value"], json!(["The value field is required."]));
}

#[tokio::test]
async fn destroy_removes_a_rating_once() {
    let app = test_app().await;
    let author_id = create_author(&app, "H. G. Wells").await;

    let (_, _, body) = send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({ "value": 4 })),
    )
    .await;
    let rating_id = body["data"]["id"].as_i64().expect("rating id");

    let (status, _, _) = send(
        &app,
        "DELETE",
        &format!("/authors/{author_id}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Second delete: the rating is gone
    let (status, _, body) = send(
        &app,
        "DELETE",
        &format!("/authors/{author_id}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_not_found_body(&body);
}

#[tokio::test]
async fn destroy_is_scoped_to_the_owning_author() {
    let app = test_app().await;
    let wells = create_author(&app, "H. G. Wells").await;
    let le_guin = create_author(&app, "Ursula K. Le Guin").await;

    let (_, _, body) = send(
        &app,
        "POST",
        &format!("/authors/{wells}/ratings"),
        Some(json!({ "value": 4 })),
    )
    .await;
    let rating_id = body["data"]["id"].as_i64().expect("rating id");

    // The rating belongs to Wells; deleting it through Le Guin must 404
    let (status, _, _) = send(
        &app,
        "DELETE",
        &format!("/authors/{le_guin}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Still deletable through its real owner
    let (status, _, _) = send(
        &app,
        "DELETE",
        &format!("/authors/{wells}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn deleting_an_author_removes_every_rating_they_own() {
    let (app, pool) = test_app_with_pool().await;
    let author_id = create_author(&app, "H. G. Wells").await;
    let book_id = create_book(&app, "The Time Machine", author_id).await;

    send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({ "value": 5 })),
    )
    .await;
    send(
        &app,
        "POST",
        &format!("/books/{book_id}/ratings"),
        Some(json!({ "value": 3 })),
    )
    .await;

    let (status, _, _) = send(&app, "DELETE", &format!("/authors/{author_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Ratings have no read endpoint, so inspect the table directly
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ratings")
        .fetch_one(&pool)
        .await
        .expect("count ratings");
    assert_eq!(remaining, 0);
}

#[tokio::test]
async fn deleting_a_book_removes_only_its_own_ratings() {
    let (app, pool) = test_app_with_pool().await;
    let author_id = create_author(&app, "H. G. Wells").await;
    let book_id = create_book(&app, "The Time Machine", author_id).await;

    send(
        &app,
        "POST",
        &format!("/authors/{author_id}/ratings"),
        Some(json!({ "value": 5 })),
    )
    .await;
    send(
        &app,
        "POST",
        &format!("/books/{book_id}/ratings"),
        Some(json!({ "value": 3 })),
    )
    .await;

    let (status, _, _) = send(&app, "DELETE", &format!("/books/{book_id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let kinds: Vec<String> = sqlx::query_scalar("SELECT rateable_type FROM ratings")
        .fetch_all(&pool)
        .await
        .expect("remaining ratings");
    assert_eq!(kinds, vec!["author".to_string()]);
}

#[tokio::test]
async fn books_carry_ratings_through_the_same_capability() {
    let app = test_app().await;
    let author_id = create_author(&app, "H. G. Wells").await;
    let book_id = create_book(&app, "The Time Machine", author_id).await;

    let (status, _, body) = send(
        &app,
        "POST",
        &format!("/books/{book_id}/ratings"),
        Some(json!({ "value": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let rating_id = body["data"]["id"].as_i64().expect("rating id");

    // An author-scoped delete cannot reach a book's rating
    let (status, _, _) = send(
        &app,
        "DELETE",
        &format!("/authors/{author_id}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _, _) = send(
        &app,
        "DELETE",
        &format!("/books/{book_id}/ratings/{rating_id}"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}
