/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::consts::JOB_TTL;
use crate::error::{ServiceError, ServiceResult};
use crate::input::{require, validate_job};
use crate::repository::{JobRepository, RepositoryError, RepositoryResult};
use crate::types::MJob;
use chrono::{DateTime, Utc};
use mongodb::bson;
use std::sync::Arc;
use tracing::{debug, info, warn};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UpsertOutcome {
    Created,
    Updated,
    Unchanged,
}

pub fn expiry_from(now: DateTime<Utc>) -> bson::DateTime {
    bson::DateTime::from_millis((now + *JOB_TTL).timestamp_millis())
}

#[derive(Clone)]
pub struct JobService {
    repo: Arc<dyn JobRepository>,
}

impl JobService {
    pub fn new(repo: Arc<dyn JobRepository>) -> Self {
        JobService { repo }
    }

    /// Inserts a listing with an unseen URL, replaces one whose content
    /// changed and leaves an identical one untouched. Writes refresh the expiry.
    pub async fn create_or_update(&self, job: MJob) -> ServiceResult<UpsertOutcome> {
        validate_job(&job).map_err(ServiceError::Validation)?;

        if let Some(existing) = self.repo.find_by_url(&job.url).await? {
            return self.merge(existing, job).await;
        }

        let url = job.url.clone();
        match self.insert(job.clone()).await {
            Err(RepositoryError::DuplicateKey(_)) => {
                debug!(url = %url, "Job inserted concurrently, merging");
                match self.repo.find_by_url(&url).await? {
                    Some(existing) => self.merge(existing, job).await,
                    None => Err(ServiceError::already_exists("Job")),
                }
            }
            result => Ok(result?),
        }
    }

    async fn insert(&self, job: MJob) -> RepositoryResult<UpsertOutcome> {
        let job = MJob {
            id: None,
            expires_at: Some(expiry_from(Utc::now())),
            ..job
        };

        let job = self.repo.create(job).await?;
        info!(url = %job.url, "Job created");
        Ok(UpsertOutcome::Created)
    }

    async fn merge(&self, existing: MJob, job: MJob) -> ServiceResult<UpsertOutcome> {
        if existing.same_listing(&job) {
            debug!(url = %job.url, "Job unchanged");
            return Ok(UpsertOutcome::Unchanged);
        }

        let job = MJob {
            id: existing.id,
            expires_at: Some(expiry_from(Utc::now())),
            ..job
        };

        if !self.repo.update_by_url(&existing.url, job.clone()).await? {
            debug!(url = %existing.url, "Job expired before replacement, inserting");
            return Ok(self.insert(job).await?);
        }

        info!(url = %existing.url, "Job updated");
        Ok(UpsertOutcome::Updated)
    }

    pub async fn find_all(&self) -> ServiceResult<Vec<MJob>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn update_existing(&self, job: MJob) -> ServiceResult<MJob> {
        validate_job(&job).map_err(ServiceError::Validation)?;

        let Some(existing) = self.repo.find_by_url(&job.url).await? else {
            warn!(url = %job.url, "Job to update not found");
            return Err(ServiceError::not_found("Job"));
        };

        let job = MJob {
            id: existing.id,
            expires_at: Some(expiry_from(Utc::now())),
            ..job
        };

        if !self.repo.update_by_url(&existing.url, job.clone()).await? {
            warn!(url = %existing.url, "Job expired before update");
            return Err(ServiceError::not_found("Job"));
        }

        Ok(job)
    }

    pub async fn delete_existing(&self, url: &str) -> ServiceResult<()> {
        require(url, "url").map_err(ServiceError::Validation)?;

        if self.repo.find_by_url(url).await?.is_none() {
            warn!(url, "Job to delete not found");
            return Err(ServiceError::not_found("Job"));
        }

        if !self.repo.delete_by_url(url).await? {
            return Err(ServiceError::not_found("Job"));
        }

        info!(url, "Job deleted");
        Ok(())
    }
}
