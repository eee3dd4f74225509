/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{ServiceError, ServiceResult};
use crate::input::{parse_object_id, require, validate_new_user, validate_role};
use crate::repository::UserRepository;
use crate::types::MUser;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct UserService {
    repo: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        UserService { repo }
    }

    pub async fn create_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> ServiceResult<MUser> {
        let role = validate_new_user(username, password, role).map_err(ServiceError::Validation)?;

        if self.repo.find_by_username(username).await?.is_some() {
            warn!(username, "Username already exists");
            return Err(ServiceError::already_exists("username"));
        }

        let user = MUser {
            id: None,
            username: username.to_string(),
            password: password.to_string(),
            role,
        };

        let user = self.repo.create(user).await?;
        info!(username, "User created");
        Ok(user)
    }

    pub async fn get_user_by_id(&self, id: &str) -> ServiceResult<MUser> {
        let id = parse_object_id(id, "user ID").map_err(ServiceError::Validation)?;

        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    pub async fn get_user_by_username(&self, username: &str) -> ServiceResult<MUser> {
        require(username, "username").map_err(ServiceError::Validation)?;

        self.repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))
    }

    /// Replaces role and password of an existing user. A blank password keeps
    /// the stored one; the returned user never carries a password.
    pub async fn update_user(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> ServiceResult<MUser> {
        require(username, "username").map_err(ServiceError::Validation)?;
        let role = validate_role(role).map_err(ServiceError::Validation)?;

        let existing = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        let id = existing.id.ok_or_else(|| ServiceError::not_found("User"))?;

        let password = if password.trim().is_empty() {
            existing.password
        } else {
            password.to_string()
        };

        let user = MUser {
            id: Some(id),
            username: username.to_string(),
            password,
            role,
        };

        let mut user = self.repo.update_by_id(id, user).await?;
        user.password.clear();

        info!(username, "User updated");
        Ok(user)
    }

    pub async fn delete_user(&self, username: &str) -> ServiceResult<()> {
        require(username, "username").map_err(ServiceError::Validation)?;

        let existing = self
            .repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User"))?;
        let id = existing.id.ok_or_else(|| ServiceError::not_found("User"))?;

        if !self.repo.delete_by_id(id).await? {
            return Err(ServiceError::not_found("User"));
        }

        info!(username, "User deleted");
        Ok(())
    }
}
