/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod consts;
pub mod database;
pub mod error;
pub mod input;
pub mod repository;
pub mod service;
pub mod types;


use anyhow::Result;
use database::init_repositories;
use mongodb::Client;
use std::sync::Arc;
use tracing::info;
use types::*;

pub async fn init_state(cli: Cli, client: &Client) -> Result<Arc<ServerState>> {
    info!("Starting Job Board Server on {}:{}", cli.ip, cli.port);

    let db = client.database(&cli.database_name);
    let repositories = init_repositories(&cli, &db).await?;

    Ok(Arc::new(ServerState::new(
        cli,
        Arc::new(repositories.jobs),
        Arc::new(repositories.users),
        Arc::new(repositories.skills),
    )))
}
