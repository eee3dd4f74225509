/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{ServiceError, ServiceResult};
use crate::input::{require, validate_skill_request};
use crate::repository::{RepositoryError, SkillRepository};
use crate::types::MSkill;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct SkillService {
    repo: Arc<dyn SkillRepository>,
}

impl SkillService {
    pub fn new(repo: Arc<dyn SkillRepository>) -> Self {
        SkillService { repo }
    }

    pub async fn get_skills(&self, username: &str) -> ServiceResult<MSkill> {
        require(username, "username").map_err(ServiceError::Validation)?;

        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    pub async fn add_skill(&self, username: &str, skill: &str) -> ServiceResult<()> {
        validate_skill_request(username, skill).map_err(ServiceError::Validation)?;

        // Concurrent first upserts can both insert; the loser retries as an update.
        let modified = match self.repo.add_skill(username, skill).await {
            Err(RepositoryError::DuplicateKey(_)) => {
                debug!(username, skill, "Retrying skill upsert after duplicate key");
                self.repo.add_skill(username, skill).await?
            }
            result => result?,
        };

        debug!(username, skill, modified, "Added skill");
        Ok(())
    }

    pub async fn remove_skill(&self, username: &str, skill: &str) -> ServiceResult<()> {
        validate_skill_request(username, skill).map_err(ServiceError::Validation)?;

        if self.repo.find_by_username(username).await?.is_none() {
            return Err(ServiceError::not_found("User"));
        }

        let modified = self.repo.remove_skill(username, skill).await?;
        debug!(username, skill, modified, "Removed skill");
        Ok(())
    }

    pub async fn delete_skills(&self, username: &str) -> ServiceResult<()> {
        require(username, "username").map_err(ServiceError::Validation)?;

        if self.repo.find_by_username(username).await?.is_none() {
            return Err(ServiceError::not_found("User"));
        }

        if !self.repo.delete_by_username(username).await? {
            return Err(ServiceError::not_found("User"));
        }

        info!(username, "Deleted skills for user");
        Ok(())
    }
}
