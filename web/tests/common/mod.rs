/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#![allow(dead_code)]

use axum_test::TestServer;
use jobboard_core::repository::{MockJobRepository, MockSkillRepository, MockUserRepository};
use jobboard_core::types::*;
use std::sync::Arc;

pub fn create_mock_cli() -> Cli {
    Cli {
        log_level: "debug".to_string(),
        log_json: false,
        ip: "127.0.0.1".to_string(),
        port: 3000,
        database_url: Some("mongodb://localhost:27017".to_string()),
        database_url_file: None,
        database_name: "jobboard_test".to_string(),
        job_collection: "jobs".to_string(),
        user_collection: "users".to_string(),
        skill_collection: "skills".to_string(),
        database_timeout: 30,
        database_max_pool_size: 10,
        database_min_pool_size: 1,
        shutdown_timeout: 5,
        report_errors: false,
        sentry_dsn: None,
    }
}

pub fn create_mock_state(
    jobs: MockJobRepository,
    users: MockUserRepository,
    skills: MockSkillRepository,
) -> Arc<ServerState> {
    Arc::new(ServerState::new(
        create_mock_cli(),
        Arc::new(jobs),
        Arc::new(users),
        Arc::new(skills),
    ))
}

pub fn create_server(state: Arc<ServerState>) -> TestServer {
    TestServer::new(web::create_router(state)).unwrap()
}

pub fn job_server(jobs: MockJobRepository) -> TestServer {
    create_server(create_mock_state(
        jobs,
        MockUserRepository::new(),
        MockSkillRepository::new(),
    ))
}

pub fn user_server(users: MockUserRepository) -> TestServer {
    create_server(create_mock_state(
        MockJobRepository::new(),
        users,
        MockSkillRepository::new(),
    ))
}

pub fn skill_server(skills: MockSkillRepository) -> TestServer {
    create_server(create_mock_state(
        MockJobRepository::new(),
        MockUserRepository::new(),
        skills,
    ))
}
