/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Single-document MongoDB operations, one repository per collection.

pub mod jobs;
pub mod skills;
pub mod users;

pub use jobs::{JobRepository, MongoJobRepository};
pub use skills::{MongoSkillRepository, SkillRepository};
pub use users::{MongoUserRepository, UserRepository};

#[cfg(any(test, feature = "mock"))]
pub use jobs::MockJobRepository;
#[cfg(any(test, feature = "mock"))]
pub use skills::MockSkillRepository;
#[cfg(any(test, feature = "mock"))]
pub use users::MockUserRepository;

use crate::consts::DUPLICATE_KEY_CODE;
use mongodb::error::{Error as MongoError, ErrorKind, WriteError, WriteFailure};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("duplicate key in collection `{0}`")]
    DuplicateKey(String),
    #[error("Database error: {0}")]
    Database(#[source] MongoError),
}

impl RepositoryError {
    pub fn from_mongo(collection: &str, err: MongoError) -> Self {
        if is_duplicate_key(&err) {
            RepositoryError::DuplicateKey(collection.to_string())
        } else {
            RepositoryError::Database(err)
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

pub fn is_duplicate_key(err: &MongoError) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(WriteError { code, .. })) if *code == DUPLICATE_KEY_CODE
    )
}
