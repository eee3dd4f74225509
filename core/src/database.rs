/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use anyhow::{Context, Result};
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use std::time::Duration;
use tracing::{info, warn};

use super::consts::APP_NAME;
use super::input::load_secret;
use super::repository::{MongoJobRepository, MongoSkillRepository, MongoUserRepository};
use super::types::*;

pub fn database_url(cli: &Cli) -> Result<String> {
    if let Some(file) = &cli.database_url_file {
        load_secret(file).context("Failed to read database url from file")
    } else if let Some(url) = &cli.database_url {
        Ok(url.clone())
    } else {
        anyhow::bail!("No database url provided")
    }
}

pub async fn connect_db(cli: &Cli) -> Result<Client> {
    let db_url = database_url(cli)?;

    let mut options = ClientOptions::parse(db_url.as_str())
        .await
        .context("Failed to parse database url")?;

    let timeout = Duration::from_secs(cli.database_timeout);
    options.app_name = Some(APP_NAME.to_string());
    options.connect_timeout = Some(timeout);
    options.server_selection_timeout = Some(timeout);
    options.max_pool_size = Some(cli.database_max_pool_size);
    options.min_pool_size = Some(cli.database_min_pool_size);
    options.retry_writes = Some(true);
    options.retry_reads = Some(true);

    let client = Client::with_options(options).context("Failed to create database client")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("Failed to ping database")?;

    info!(database = %cli.database_name, "Connected to database");
    Ok(client)
}

pub struct Repositories {
    pub jobs: MongoJobRepository,
    pub users: MongoUserRepository,
    pub skills: MongoSkillRepository,
}

pub async fn init_repositories(cli: &Cli, db: &Database) -> Result<Repositories> {
    let jobs = MongoJobRepository::new(db.collection::<MJob>(&cli.job_collection));
    let users = MongoUserRepository::new(db.collection::<MUser>(&cli.user_collection));
    let skills = MongoSkillRepository::new(db.collection::<MSkill>(&cli.skill_collection));

    jobs.ensure_indexes()
        .await
        .context("Failed to create job indexes")?;
    users
        .ensure_indexes()
        .await
        .context("Failed to create user indexes")?;
    skills
        .ensure_indexes()
        .await
        .context("Failed to create skill indexes")?;

    info!(
        jobs = %cli.job_collection,
        users = %cli.user_collection,
        skills = %cli.skill_collection,
        "Collections ready"
    );

    Ok(Repositories {
        jobs,
        users,
        skills,
    })
}

pub async fn close_db(client: Client, timeout: Duration) {
    if tokio::time::timeout(timeout, client.shutdown()).await.is_err() {
        warn!("Timed out closing database connections");
    } else {
        info!("Database connections closed");
    }
}
