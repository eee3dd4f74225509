/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RepositoryError, RepositoryResult};
use crate::consts::SKILL_USERNAME_INDEX;
use crate::types::MSkill;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use tracing::debug;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<MSkill>>;
    /// Set-union, creating the document on the first skill; returns whether
    /// the document changed.
    async fn add_skill(&self, username: &str, skill: &str) -> RepositoryResult<bool>;
    /// Pulls every occurrence; returns whether the document changed.
    async fn remove_skill(&self, username: &str, skill: &str) -> RepositoryResult<bool>;
    async fn delete_by_username(&self, username: &str) -> RepositoryResult<bool>;
}

pub struct MongoSkillRepository {
    collection: Collection<MSkill>,
}

impl MongoSkillRepository {
    pub fn new(collection: Collection<MSkill>) -> Self {
        MongoSkillRepository { collection }
    }

    fn error(&self, err: mongodb::error::Error) -> RepositoryError {
        RepositoryError::from_mongo(self.collection.name(), err)
    }

    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(SKILL_USERNAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(username_index)
            .await
            .map_err(|e| self.error(e))?;

        debug!(collection = self.collection.name(), "Skill indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl SkillRepository for MongoSkillRepository {
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<MSkill>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| self.error(e))
    }

    async fn add_skill(&self, username: &str, skill: &str) -> RepositoryResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "username": username },
                doc! { "$addToSet": { "skills": skill } },
            )
            .upsert(true)
            .await
            .map_err(|e| self.error(e))?;

        debug!(
            username,
            skill,
            matched = result.matched_count,
            modified = result.modified_count,
            upserted = result.upserted_id.is_some(),
            "Added skill"
        );
        Ok(result.modified_count > 0 || result.upserted_id.is_some())
    }

    async fn remove_skill(&self, username: &str, skill: &str) -> RepositoryResult<bool> {
        let result = self
            .collection
            .update_one(
                doc! { "username": username },
                doc! { "$pull": { "skills": skill } },
            )
            .await
            .map_err(|e| self.error(e))?;

        debug!(
            username,
            skill,
            matched = result.matched_count,
            modified = result.modified_count,
            "Removed skill"
        );
        Ok(result.modified_count > 0)
    }

    async fn delete_by_username(&self, username: &str) -> RepositoryResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "username": username })
            .await
            .map_err(|e| self.error(e))?;

        debug!(username, deleted = result.deleted_count, "Deleted skill document");
        Ok(result.deleted_count > 0)
    }
}
