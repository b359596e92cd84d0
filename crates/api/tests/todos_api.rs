//! HTTP-level integration tests for the `/todos` resource.
//!
//! Covers CRUD, owner isolation, list filtering/ordering/paging, the status
//! actions, and bulk clearing of completed todos.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, create_todo, delete_auth, get, get_auth, patch_auth, patch_json_auth,
    post_json_auth, put_json_auth, signup_and_login,
};
use serde_json::json;
use sqlx::PgPool;

fn titles(list: &serde_json::Value) -> Vec<String> {
    list["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_todos_require_authentication(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/todos").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");

    let response = get_auth(app, "/api/v1/todos", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Create / retrieve
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_detail_with_defaults(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/todos",
        json!({ "title": "Buy milk" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let todo = body_json(response).await["data"].clone();
    assert!(todo["id"].is_i64());
    assert_eq!(todo["title"], "Buy milk");
    assert_eq!(todo["description"], "");
    assert_eq!(todo["status"], "pending");
    assert_eq!(todo["priority"], "medium");
    assert!(todo["due_date"].is_null());
    assert_eq!(todo["owner"], "alice");
    assert!(todo["created_at"].is_string());
    assert!(todo["updated_at"].is_string());

    let id = todo["id"].as_i64().unwrap();
    let response = get_auth(app, &format!("/api/v1/todos/{id}"), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], todo);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_ignores_client_owner_and_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = signup_and_login(app.clone(), "alice").await;
    let _bob = signup_and_login(app.clone(), "bob").await;

    let todo = create_todo(
        app,
        &alice,
        json!({
            "title": "Mine",
            "owner": "bob",
            "id": 424242,
            "created_at": "2000-01-01T00:00:00Z"
        }),
    )
    .await;

    assert_eq!(todo["owner"], "alice");
    assert_ne!(todo["id"], 424242);
    assert!(!todo["created_at"].as_str().unwrap().starts_with("2000"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_invalid_status_is_rejected_and_nothing_stored(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/todos",
        json!({ "title": "Bad", "status": "archived" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["status"][0]
        .as_str()
        .unwrap()
        .contains("archived"));

    let list = body_json(get_auth(app, "/api/v1/todos", &token).await).await;
    assert_eq!(list["total"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_missing_or_blank_title_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    for body in [json!({}), json!({ "title": "   " })] {
        let response = post_json_auth(app.clone(), "/api/v1/todos", body, &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["fields"]["title"].is_array());
    }

    let long = "x".repeat(256);
    let response =
        post_json_auth(app, "/api/v1/todos", json!({ "title": long }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_missing_todo_is_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    let response = get_auth(app, "/api/v1/todos/999999", &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Owner isolation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_other_users_todos_are_invisible(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = signup_and_login(app.clone(), "alice").await;
    let bob = signup_and_login(app.clone(), "bob").await;

    let todo = create_todo(app.clone(), &alice, json!({ "title": "Secret" })).await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    let list = body_json(get_auth(app.clone(), "/api/v1/todos", &bob).await).await;
    assert_eq!(list["total"], 0);
    assert!(list["data"].as_array().unwrap().is_empty());

    let response = get_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let not_yours = body_json(response).await;

    let missing = body_json(get_auth(app.clone(), "/api/v1/todos/999999", &bob).await).await;
    assert_eq!(not_yours["code"], missing["code"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "title": "Mine now" }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_json_auth(app.clone(), &uri, json!({ "status": "cancelled" }), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_auth(app.clone(), &format!("{uri}/mark_completed"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = patch_auth(app.clone(), &format!("{uri}/mark_pending"), &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app.clone(), &uri, &bob).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Alice's todo is unchanged.
    let response = get_auth(app, &uri, &alice).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Secret");
    assert_eq!(json["data"]["status"], "pending");
}

// ---------------------------------------------------------------------------
// Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_requires_title_and_patch_does_not(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(
        app.clone(),
        &token,
        json!({ "title": "Original", "description": "keep", "due_date": "2026-12-24" }),
    )
    .await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "priority": "high" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["title"].is_array());

    let response = put_json_auth(
        app.clone(),
        &uri,
        json!({ "title": "Replaced", "status": "in_progress" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["title"], "Replaced");
    assert_eq!(json["data"]["status"], "in_progress");
    assert_eq!(json["data"]["description"], "keep");

    let response = patch_json_auth(app.clone(), &uri, json!({ "priority": "low" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["priority"], "low");
    assert_eq!(json["data"]["title"], "Replaced");
    assert_eq!(json["data"]["due_date"], "2026-12-24");

    let response = patch_json_auth(app, &uri, json!({ "due_date": null }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["data"]["due_date"].is_null());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_patch_rejects_out_of_set_priority(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(app.clone(), &token, json!({ "title": "t" })).await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    let response = patch_json_auth(app.clone(), &uri, json!({ "priority": "urgent" }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["data"]["priority"], "medium");
}

fn timestamp(value: &serde_json::Value) -> chrono::DateTime<chrono::Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_rewriting_same_values_refreshes_updated_at(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(app.clone(), &token, json!({ "title": "Same" })).await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    let response = put_json_auth(app.clone(), &uri, json!({ "title": "Same" }), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let replaced = body_json(response).await["data"].clone();
    assert_eq!(replaced["title"], "Same");
    assert!(timestamp(&replaced["updated_at"]) > timestamp(&todo["updated_at"]));
    assert_eq!(replaced["created_at"], todo["created_at"]);

    let response = patch_json_auth(app, &uri, json!({}), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let patched = body_json(response).await["data"].clone();
    assert!(timestamp(&patched["updated_at"]) > timestamp(&replaced["updated_at"]));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_wrongly_typed_fields_are_field_errors(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    let response = post_json_auth(
        app.clone(),
        "/api/v1/todos",
        json!({ "title": "Dentist", "due_date": "tomorrow" }),
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["due_date"][0].is_string());

    let response = post_json_auth(app.clone(), "/api/v1/todos", json!({ "title": 123 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["title"].is_array());

    let todo = create_todo(app.clone(), &token, json!({ "title": "t" })).await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);
    let response = patch_json_auth(app.clone(), &uri, json!({ "priority": 5 }), &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(body_json(response).await["fields"]["priority"].is_array());

    let response = get_auth(app.clone(), "/api/v1/todos?limit=abc", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["fields"]["limit"].is_array());

    let list = body_json(get_auth(app, "/api/v1/todos", &token).await).await;
    assert_eq!(list["total"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_explicit_null_on_non_nullable_field_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(
        app.clone(),
        &token,
        json!({ "title": "Keep me", "description": "notes", "priority": "high" }),
    )
    .await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    for field in ["title", "description", "status", "priority"] {
        let response = patch_json_auth(app.clone(), &uri, json!({ field: null }), &token).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{field}");
        let json = body_json(response).await;
        assert_eq!(json["fields"][field][0], "This field may not be null.");
    }

    let json = body_json(get_auth(app, &uri, &token).await).await;
    assert_eq!(json["data"]["title"], "Keep me");
    assert_eq!(json["data"]["description"], "notes");
    assert_eq!(json["data"]["priority"], "high");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_then_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(app.clone(), &token, json!({ "title": "Temp" })).await;
    let uri = format!("/api/v1/todos/{}", todo["id"]);

    let response = delete_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_auth(app.clone(), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(app, &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_uses_list_representation(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    create_todo(app.clone(), &token, json!({ "title": "One", "description": "d" })).await;

    let json = body_json(get_auth(app, "/api/v1/todos", &token).await).await;
    let item = &json["data"][0];
    let mut keys: Vec<&str> = item.as_object().unwrap().keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["due_date", "id", "priority", "status", "title"]);
    assert_eq!(json["total"], 1);
    assert_eq!(json["limit"], 50);
    assert_eq!(json["offset"], 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_new_high_priority_todo_lists_first(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    create_todo(app.clone(), &token, json!({ "title": "Existing" })).await;
    create_todo(app.clone(), &token, json!({ "title": "Later low", "priority": "low" })).await;
    create_todo(
        app.clone(),
        &token,
        json!({ "title": "Buy milk", "priority": "high" }),
    )
    .await;

    let json = body_json(get_auth(app, "/api/v1/todos", &token).await).await;
    assert_eq!(titles(&json), vec!["Buy milk", "Existing", "Later low"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_default_order_puts_undated_last_within_priority(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    create_todo(app.clone(), &token, json!({ "title": "undated" })).await;
    create_todo(
        app.clone(),
        &token,
        json!({ "title": "later", "due_date": "2026-12-01" }),
    )
    .await;
    create_todo(
        app.clone(),
        &token,
        json!({ "title": "sooner", "due_date": "2026-11-01" }),
    )
    .await;

    let json = body_json(get_auth(app, "/api/v1/todos", &token).await).await;
    assert_eq!(titles(&json), vec!["sooner", "later", "undated"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ordering_parameter(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    for (title, priority) in [("m", "medium"), ("h", "high"), ("l", "low")] {
        create_todo(app.clone(), &token, json!({ "title": title, "priority": priority })).await;
    }

    let json = body_json(get_auth(app.clone(), "/api/v1/todos?ordering=priority", &token).await).await;
    assert_eq!(titles(&json), vec!["l", "m", "h"]);

    // Unknown fields are ignored.
    let json = body_json(
        get_auth(app.clone(), "/api/v1/todos?ordering=bogus,-priority", &token).await,
    )
    .await;
    assert_eq!(titles(&json), vec!["h", "m", "l"]);

    // Nothing valid left: default ordering.
    let json = body_json(get_auth(app, "/api/v1/todos?ordering=title", &token).await).await;
    assert_eq!(titles(&json), vec!["h", "m", "l"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_filters_title_and_description(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    create_todo(app.clone(), &token, json!({ "title": "Buy milk" })).await;
    create_todo(
        app.clone(),
        &token,
        json!({ "title": "Errands", "description": "post office, MILK" }),
    )
    .await;
    create_todo(app.clone(), &token, json!({ "title": "Call mom" })).await;

    let json = body_json(get_auth(app.clone(), "/api/v1/todos?search=milk", &token).await).await;
    assert_eq!(json["total"], 2);

    let json =
        body_json(get_auth(app, "/api/v1/todos?search=milk%20post", &token).await).await;
    assert_eq!(titles(&json), vec!["Errands"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_status_and_priority_filters(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    create_todo(
        app.clone(),
        &token,
        json!({ "title": "a", "status": "in_progress", "priority": "high" }),
    )
    .await;
    create_todo(app.clone(), &token, json!({ "title": "b", "status": "in_progress" })).await;
    create_todo(app.clone(), &token, json!({ "title": "c" })).await;

    let json = body_json(
        get_auth(app.clone(), "/api/v1/todos?status=in_progress", &token).await,
    )
    .await;
    assert_eq!(json["total"], 2);

    let json = body_json(
        get_auth(
            app.clone(),
            "/api/v1/todos?status=in_progress&priority=high",
            &token,
        )
        .await,
    )
    .await;
    assert_eq!(titles(&json), vec!["a"]);

    let response = get_auth(app, "/api/v1/todos?status=archived", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination_reports_total(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    for i in 0..5 {
        create_todo(
            app.clone(),
            &token,
            json!({ "title": format!("t{i}"), "due_date": format!("2026-01-0{}", i + 1) }),
        )
        .await;
    }

    let json = body_json(
        get_auth(app.clone(), "/api/v1/todos?limit=2&offset=2", &token).await,
    )
    .await;
    assert_eq!(titles(&json), vec!["t2", "t3"]);
    assert_eq!(json["total"], 5);
    assert_eq!(json["limit"], 2);
    assert_eq!(json["offset"], 2);

    let json = body_json(get_auth(app, "/api/v1/todos?limit=0", &token).await).await;
    assert_eq!(json["limit"], 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_completed_and_pending_views(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    create_todo(app.clone(), &token, json!({ "title": "open" })).await;
    create_todo(app.clone(), &token, json!({ "title": "done", "status": "completed" })).await;
    create_todo(app.clone(), &token, json!({ "title": "dropped", "status": "cancelled" })).await;

    let json = body_json(get_auth(app.clone(), "/api/v1/todos/completed", &token).await).await;
    assert_eq!(titles(&json), vec!["done"]);
    assert!(json["data"][0].get("owner").is_none());

    let json = body_json(get_auth(app.clone(), "/api/v1/todos/pending", &token).await).await;
    assert_eq!(titles(&json), vec!["open"]);

    // The fixed status wins over a conflicting query parameter.
    let json = body_json(
        get_auth(app, "/api/v1/todos/pending?status=completed", &token).await,
    )
    .await;
    assert_eq!(titles(&json), vec!["open"]);
}

// ---------------------------------------------------------------------------
// Status actions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_mark_actions_from_every_status(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;

    for status in ["pending", "in_progress", "completed", "cancelled"] {
        let todo = create_todo(
            app.clone(),
            &token,
            json!({ "title": status, "status": status }),
        )
        .await;
        let uri = format!("/api/v1/todos/{}", todo["id"]);

        let response = patch_auth(app.clone(), &format!("{uri}/mark_completed"), &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "todo marked as completed");
        assert_eq!(json["data"]["status"], "completed");
        assert_eq!(json["data"]["owner"], "alice");

        let response = patch_auth(app.clone(), &format!("{uri}/mark_pending"), &token).await;
        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["status"], "todo marked as pending");
        assert_eq!(json["data"]["status"], "pending");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_repeated_mark_is_a_no_op(pool: PgPool) {
    let app = common::build_test_app(pool);
    let token = signup_and_login(app.clone(), "alice").await;
    let todo = create_todo(app.clone(), &token, json!({ "title": "once" })).await;
    let uri = format!("/api/v1/todos/{}/mark_completed", todo["id"]);

    let first = body_json(patch_auth(app.clone(), &uri, &token).await).await;
    let second = body_json(patch_auth(app, &uri, &token).await).await;

    assert_eq!(first["data"], second["data"]);
    assert_ne!(first["data"]["updated_at"], todo["updated_at"]);
}

// ---------------------------------------------------------------------------
// Bulk clear
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_clear_completed_only_touches_callers_completed(pool: PgPool) {
    let app = common::build_test_app(pool);
    let alice = signup_and_login(app.clone(), "alice").await;
    let bob = signup_and_login(app.clone(), "bob").await;

    for title in ["a1", "a2", "a3"] {
        create_todo(app.clone(), &alice, json!({ "title": title, "status": "completed" })).await;
    }
    create_todo(app.clone(), &alice, json!({ "title": "keep" })).await;
    create_todo(app.clone(), &bob, json!({ "title": "bob's", "status": "completed" })).await;

    let response = delete_auth(app.clone(), "/api/v1/todos/clear_completed", &alice).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["x-deleted-count"], "3");
    assert_eq!(
        response.headers()["x-status-message"],
        "3 completed todos deleted"
    );

    let json = body_json(get_auth(app.clone(), "/api/v1/todos", &alice).await).await;
    assert_eq!(titles(&json), vec!["keep"]);

    let json = body_json(get_auth(app.clone(), "/api/v1/todos/completed", &bob).await).await;
    assert_eq!(titles(&json), vec!["bob's"]);

    // Nothing left to clear: still 204, count 0.
    let response = delete_auth(app, "/api/v1/todos/clear_completed", &alice).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(response.headers()["x-deleted-count"], "0");
}
