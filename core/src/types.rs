/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::input::{greater_than_zero, port_in_range};
use super::repository::{JobRepository, SkillRepository, UserRepository};
use super::service::{JobService, SkillService, UserService};
use clap::Parser;
use entity::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Parser, Debug, Clone)]
#[command(name = "Job Board", display_name = "Job Board", bin_name = "jobboard-server", author = "Wavelens", version, about, long_about = None)]
pub struct Cli {
    #[arg(long, env = "JOBBOARD_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long, env = "JOBBOARD_LOG_JSON", default_value = "false")]
    pub log_json: bool,
    #[arg(long, env = "JOBBOARD_IP", default_value = "0.0.0.0")]
    pub ip: String,
    #[arg(long, env = "JOBBOARD_PORT", value_parser = port_in_range, default_value_t = 8080)]
    pub port: u16,
    #[arg(long, env = "JOBBOARD_DATABASE_URL")]
    pub database_url: Option<String>,
    #[arg(long, env = "JOBBOARD_DATABASE_URL_FILE")]
    pub database_url_file: Option<String>,
    #[arg(long, env = "JOBBOARD_DATABASE_NAME")]
    pub database_name: String,
    #[arg(long, env = "JOBBOARD_JOB_COLLECTION", default_value = "jobs")]
    pub job_collection: String,
    #[arg(long, env = "JOBBOARD_USER_COLLECTION", default_value = "users")]
    pub user_collection: String,
    #[arg(long, env = "JOBBOARD_SKILL_COLLECTION", default_value = "skills")]
    pub skill_collection: String,
    #[arg(long, env = "JOBBOARD_DATABASE_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "30")]
    pub database_timeout: u64,
    #[arg(long, env = "JOBBOARD_DATABASE_MAX_POOL_SIZE", value_parser = greater_than_zero::<u32>, default_value = "10")]
    pub database_max_pool_size: u32,
    #[arg(long, env = "JOBBOARD_DATABASE_MIN_POOL_SIZE", default_value = "1")]
    pub database_min_pool_size: u32,
    #[arg(long, env = "JOBBOARD_SHUTDOWN_TIMEOUT", value_parser = greater_than_zero::<u64>, default_value = "5")]
    pub shutdown_timeout: u64,
    #[arg(long, env = "JOBBOARD_REPORT_ERRORS", default_value = "false")]
    pub report_errors: bool,
    #[arg(long, env = "JOBBOARD_SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
}

pub struct ServerState {
    pub cli: Cli,
    pub jobs: JobService,
    pub users: UserService,
    pub skills: SkillService,
}

impl ServerState {
    pub fn new(
        cli: Cli,
        jobs: Arc<dyn JobRepository>,
        users: Arc<dyn UserRepository>,
        skills: Arc<dyn SkillRepository>,
    ) -> Self {
        ServerState {
            cli,
            jobs: JobService::new(jobs),
            users: UserService::new(users),
            skills: SkillService::new(skills),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct BaseResponse<T> {
    pub error: bool,
    pub message: T,
}

pub type MJob = job::Model;
pub type MSkill = skill::Model;
pub type MUser = user::Model;
