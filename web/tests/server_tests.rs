/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

mod common;

use jobboard_core::repository::{MockJobRepository, MockSkillRepository, MockUserRepository};
use serde_json::{Value, json};

#[tokio::test]
async fn test_health() {
    let server = common::create_server(common::create_mock_state(
        MockJobRepository::new(),
        MockUserRepository::new(),
        MockSkillRepository::new(),
    ));

    let response = server.get("/v1/health").await;

    response.assert_status_ok();
    response.assert_json(&json!({"error": false, "message": "200 ALIVE"}));
}

#[tokio::test]
async fn test_unknown_route_returns_json_404() {
    let server = common::job_server(MockJobRepository::new());

    let response = server.get("/v1/unknown").await;

    response.assert_status_not_found();
    let body: Value = response.json();
    assert_eq!(body["error"], true);
    assert_eq!(body["message"], "Not Found");
}

#[test]
fn test_mock_cli_configuration() {
    let cli = common::create_mock_cli();

    assert_eq!(cli.ip, "127.0.0.1");
    assert_eq!(cli.database_name, "jobboard_test");
    assert!(cli.sentry_dsn.is_none());
}
