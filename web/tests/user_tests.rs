/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use entity::role::Role;
use http::StatusCode;
use jobboard_core::repository::MockUserRepository;
use jobboard_core::types::MUser;
use mockall::predicate::eq;
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};

fn stored_user() -> MUser {
    MUser {
        id: Some(ObjectId::new()),
        username: "testuser".to_string(),
        password: "password123".to_string(),
        role: Role::Free,
    }
}

#[tokio::test]
async fn test_create_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .with(eq("testuser"))
        .returning(|_| Ok(None));
    repo.expect_create().times(1).returning(|mut user| {
        user.id = Some(ObjectId::new());
        Ok(user)
    });

    let server = common::user_server(repo);
    let response = server
        .post("/v1/users")
        .json(&json!({"username": "testuser", "password": "password123", "role": "PREMIUM"}))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["error"], false);
    assert_eq!(body["message"]["username"], "testuser");
    assert_eq!(body["message"]["role"], "PREMIUM");
    assert!(body["message"].get("password").is_none());
}

#[tokio::test]
async fn test_create_duplicate_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user())));
    repo.expect_create().never();

    let server = common::user_server(repo);
    let response = server
        .post("/v1/users")
        .json(&json!({"username": "testuser", "password": "password123", "role": "FREE"}))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&json!({"error": true, "message": "username already exists"}));
}

#[tokio::test]
async fn test_create_user_invalid_role() {
    let server = common::user_server(MockUserRepository::new());
    let response = server
        .post("/v1/users")
        .json(&json!({"username": "testuser", "password": "password123", "role": "ADMIN"}))
        .await;

    response.assert_status_bad_request();
    let body: Value = response.json();
    assert_eq!(body["error"], true);
}

#[tokio::test]
async fn test_get_user_by_username() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .with(eq("testuser"))
        .times(1)
        .returning(|_| Ok(Some(stored_user())));

    let server = common::user_server(repo);
    let response = server
        .get("/v1/users")
        .add_query_param("username", "testuser")
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"]["username"], "testuser");
    assert_eq!(body["message"]["role"], "FREE");
    assert!(body["message"].get("password").is_none());
}

#[tokio::test]
async fn test_get_user_username_wins_over_id() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .times(1)
        .returning(|_| Ok(Some(stored_user())));
    repo.expect_find_by_id().never();

    let server = common::user_server(repo);
    let response = server
        .get("/v1/users")
        .add_query_param("id", "507f1f77bcf86cd799439011")
        .add_query_param("username", "testuser")
        .await;

    response.assert_status_ok();
}

#[tokio::test]
async fn test_get_user_by_id() {
    let user = stored_user();
    let id = user.id.unwrap();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .times(1)
        .returning(move |_| Ok(Some(user.clone())));

    let server = common::user_server(repo);
    let response = server
        .get("/v1/users")
        .add_query_param("id", id.to_hex())
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"]["id"], id.to_hex());
}

#[tokio::test]
async fn test_get_user_malformed_id() {
    let server = common::user_server(MockUserRepository::new());
    let response = server.get("/v1/users").add_query_param("id", "xyz").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": true, "message": "invalid user ID"}));
}

#[tokio::test]
async fn test_get_user_without_query() {
    let server = common::user_server(MockUserRepository::new());
    let response = server.get("/v1/users").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({
        "error": true,
        "message": "Either 'id' or 'username' query parameter is required"
    }));
}

#[tokio::test]
async fn test_get_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let server = common::user_server(repo);
    let response = server
        .get("/v1/users")
        .add_query_param("username", "nobody")
        .await;

    response.assert_status_not_found();
    response.assert_json(&json!({"error": true, "message": "User not found"}));
}

#[tokio::test]
async fn test_update_user_without_password() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user())));
    repo.expect_update_by_id()
        .withf(|_, user| user.password == "password123" && user.role == Role::Premium)
        .times(1)
        .returning(|_, user| Ok(user));

    let server = common::user_server(repo);
    let response = server
        .put("/v1/users")
        .json(&json!({"username": "testuser", "role": "PREMIUM"}))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"]["role"], "PREMIUM");
    assert!(body["message"].get("password").is_none());
}

#[tokio::test]
async fn test_update_missing_user() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username().returning(|_| Ok(None));
    repo.expect_update_by_id().never();

    let server = common::user_server(repo);
    let response = server
        .put("/v1/users")
        .json(&json!({"username": "nobody", "password": "pw", "role": "FREE"}))
        .await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_delete_user() {
    let user = stored_user();
    let id = user.id.unwrap();

    let mut repo = MockUserRepository::new();
    repo.expect_find_by_username()
        .returning(move |_| Ok(Some(user.clone())));
    repo.expect_delete_by_id()
        .with(eq(id))
        .times(1)
        .returning(|_| Ok(true));

    let server = common::user_server(repo);
    let response = server
        .delete("/v1/users")
        .add_query_param("username", "testuser")
        .await;

    response.assert_status(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_delete_user_without_username() {
    let server = common::user_server(MockUserRepository::new());
    let response = server.delete("/v1/users").await;

    response.assert_status_bad_request();
    response.assert_json(&json!({"error": true, "message": "username query parameter is required"}));
}
