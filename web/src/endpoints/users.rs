/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use entity::role::Role;
use jobboard_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub username: String,
    pub password: Option<String>,
    #[serde(default)]
    pub role: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UserQuery {
    pub id: Option<String>,
    pub username: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub role: Role,
}

impl From<MUser> for UserResponse {
    fn from(user: MUser) -> Self {
        UserResponse {
            id: user.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: user.username,
            role: user.role,
        }
    }
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<CreateUserRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<UserResponse>>)> {
    let Json(body) = body?;

    let user = state
        .users
        .create_user(&body.username, &body.password, &body.role)
        .await?;

    let res = BaseResponse {
        error: false,
        message: user.into(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn get(
    state: State<Arc<ServerState>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<UserResponse>>> {
    let Query(query) = query?;

    let user = match (query.username, query.id) {
        (Some(username), _) => state.users.get_user_by_username(&username).await?,
        (None, Some(id)) => state.users.get_user_by_id(&id).await?,
        (None, None) => {
            return Err(WebError::BadRequest(
                "Either 'id' or 'username' query parameter is required".to_string(),
            ));
        }
    };

    let res = BaseResponse {
        error: false,
        message: user.into(),
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    body: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<UserResponse>>> {
    let Json(body) = body?;

    let user = state
        .users
        .update_user(
            &body.username,
            body.password.as_deref().unwrap_or_default(),
            &body.role,
        )
        .await?;

    let res = BaseResponse {
        error: false,
        message: user.into(),
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    query: Result<Query<UserQuery>, QueryRejection>,
) -> WebResult<StatusCode> {
    let Query(query) = query?;
    let username = query
        .username
        .ok_or_else(|| WebError::missing_query("username"))?;

    state.users.delete_user(&username).await?;

    Ok(StatusCode::NO_CONTENT)
}
