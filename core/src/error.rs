/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::repository::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Not Found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Repository error: {0}")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::DuplicateKey(_) => ServiceError::Conflict(err.to_string()),
            err => ServiceError::Repository(err),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

// Helper functions for common error scenarios
impl ServiceError {
    pub fn already_exists(resource: &str) -> Self {
        ServiceError::Conflict(format!("{} already exists", resource))
    }

    pub fn not_found(resource: &str) -> Self {
        ServiceError::NotFound(format!("{} not found", resource))
    }

    /// Message safe to return to a client; repository details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::Validation(msg)
            | ServiceError::NotFound(msg)
            | ServiceError::Conflict(msg) => msg.clone(),
            ServiceError::Repository(_) => "Database error".to_string(),
        }
    }
}
