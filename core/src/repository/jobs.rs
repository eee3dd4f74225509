/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::{RepositoryError, RepositoryResult};
use crate::consts::{JOB_EXPIRY_INDEX, JOB_URL_INDEX};
use crate::types::MJob;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::IndexOptions;
use mongodb::{Collection, IndexModel};
use std::time::Duration;
use tracing::debug;

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait JobRepository: Send + Sync {
    async fn create(&self, job: MJob) -> RepositoryResult<MJob>;
    async fn find_all(&self) -> RepositoryResult<Vec<MJob>>;
    async fn find_by_url(&self, url: &str) -> RepositoryResult<Option<MJob>>;
    /// Full replacement; returns whether a document matched `url`.
    async fn update_by_url(&self, url: &str, job: MJob) -> RepositoryResult<bool>;
    async fn delete_by_url(&self, url: &str) -> RepositoryResult<bool>;
}

pub struct MongoJobRepository {
    collection: Collection<MJob>,
}

impl MongoJobRepository {
    pub fn new(collection: Collection<MJob>) -> Self {
        MongoJobRepository { collection }
    }

    fn error(&self, err: mongodb::error::Error) -> RepositoryError {
        RepositoryError::from_mongo(self.collection.name(), err)
    }

    /// Unique index on `url` and the TTL index that purges expired listings.
    pub async fn ensure_indexes(&self) -> RepositoryResult<()> {
        let url_index = IndexModel::builder()
            .keys(doc! { "url": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name(JOB_URL_INDEX.to_string())
                    .build(),
            )
            .build();

        let expiry_index = IndexModel::builder()
            .keys(doc! { "expiresAt": 1 })
            .options(
                IndexOptions::builder()
                    .expire_after(Duration::from_secs(0))
                    .name(JOB_EXPIRY_INDEX.to_string())
                    .build(),
            )
            .build();

        self.collection
            .create_indexes([url_index, expiry_index])
            .await
            .map_err(|e| self.error(e))?;

        debug!(collection = self.collection.name(), "Job indexes ensured");
        Ok(())
    }
}

#[async_trait]
impl JobRepository for MongoJobRepository {
    async fn create(&self, mut job: MJob) -> RepositoryResult<MJob> {
        debug!(url = %job.url, "Inserting job");

        let result = self
            .collection
            .insert_one(&job)
            .await
            .map_err(|e| self.error(e))?;

        job.id = result.inserted_id.as_object_id();
        Ok(job)
    }

    async fn find_all(&self) -> RepositoryResult<Vec<MJob>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| self.error(e))?;

        let jobs: Vec<MJob> = cursor.try_collect().await.map_err(|e| self.error(e))?;

        debug!(count = jobs.len(), "Retrieved jobs");
        Ok(jobs)
    }

    async fn find_by_url(&self, url: &str) -> RepositoryResult<Option<MJob>> {
        self.collection
            .find_one(doc! { "url": url })
            .await
            .map_err(|e| self.error(e))
    }

    async fn update_by_url(&self, url: &str, job: MJob) -> RepositoryResult<bool> {
        let result = self
            .collection
            .replace_one(doc! { "url": url }, &job)
            .await
            .map_err(|e| self.error(e))?;

        debug!(
            url,
            matched = result.matched_count,
            modified = result.modified_count,
            "Replaced job"
        );
        Ok(result.matched_count > 0)
    }

    async fn delete_by_url(&self, url: &str) -> RepositoryResult<bool> {
        let result = self
            .collection
            .delete_one(doc! { "url": url })
            .await
            .map_err(|e| self.error(e))?;

        debug!(url, deleted = result.deleted_count, "Deleted job");
        Ok(result.deleted_count > 0)
    }
}
