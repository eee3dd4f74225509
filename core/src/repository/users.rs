/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RepositoryError, RepositoryResult};
use crate::consts::USER_USERNAME_INDEX;
use crate::types::MUser;
use async_trait::async_trait;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use tracing::debug;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, user: MUser) -> RepositoryResult<MUser>;
    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<MUser>>;
    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<MUser>>;
    async fn update_by_id(&self, id: ObjectId, user: MUser) -> RepositoryResult<MUser>;
    async fn delete_by_id(&self, id: ObjectId) -> RepositoryResult<bool>;
}

pub struct MongoUserRepository {
    collection: Collection<MUser>,
}

impl MongoUserRepository {
    pub fn new(collection: Collection<MUser>) -> Self {
        MongoUserRepository { collection }
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
                    .name(USER_USERNAME_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_index(username_index)
            .await
            .map_err(|e| self.error(e))?;

        debug!(collection = self.collection.name(), "User indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn create(&self, mut user: MUser) -> RepositoryResult<MUser> {
        debug!(username = %user.username, "Inserting user");

        let result = self
            .collection
            .insert_one(&user)
            .await
            .map_err(|e| self.error(e))?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }

    async fn find_by_id(&self, id: ObjectId) -> RepositoryResult<Option<MUser>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await
            .map_err(|e| self.error(e))
    }

    async fn find_by_username(&self, username: &str) -> RepositoryResult<Option<MUser>> {
        self.collection
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| self.error(e))
    }

    async fn update_by_id(&self, id: ObjectId, user: MUser) -> RepositoryResult<MUser> {
        let result = self
            .collection
            .replace_one(doc! { "_id": id }, &user)
            .await
            .map_err(|e| self.error(e))?;

        debug!(
            %id,
            matched = result.matched_count,
            modified = result.modified_count,
            "Replaced user"
        );
        Ok(user)
    }

    async fn delete_by_id(&self, id: ObjectId) -> RepositoryResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "_id": id })
            .await
            .map_err(|e| self.error(e))?;

        debug!(%id, deleted = result.deleted_count, "Deleted user");
        Ok(result.deleted_count > 0)
    }
}
