/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::{WebError, WebResult};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Json, Query, State};
use axum::http::StatusCode;
use jobboard_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug)]
pub struct SkillRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub skill: String,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct UsernameQuery {
    pub username: Option<String>,
}

impl UsernameQuery {
    fn require(self) -> WebResult<String> {
        self.username
            .ok_or_else(|| WebError::missing_query("username"))
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SkillResponse {
    pub id: String,
    pub username: String,
    pub skills: Vec<String>,
}

impl From<MSkill> for SkillResponse {
    fn from(skill: MSkill) -> Self {
        SkillResponse {
            id: skill.id.map(|id| id.to_hex()).unwrap_or_default(),
            username: skill.username,
            skills: skill.skills,
        }
    }
}

pub async fn get(
    state: State<Arc<ServerState>>,
    query: Result<Query<UsernameQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<SkillResponse>>> {
    let Query(query) = query?;
    let username = query.require()?;

    let skills = state.skills.get_skills(&username).await?;

    let res = BaseResponse {
        error: false,
        message: skills.into(),
    };

    Ok(Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<SkillRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    state.skills.add_skill(&body.username, &body.skill).await?;

    let res = BaseResponse {
        error: false,
        message: "Skill added successfully".to_string(),
    };

    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    body: Result<Json<SkillRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = body?;

    state
        .skills
        .remove_skill(&body.username, &body.skill)
        .await?;

    let res = BaseResponse {
        error: false,
        message: "Skill removed successfully".to_string(),
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    query: Result<Query<UsernameQuery>, QueryRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Query(query) = query?;
    let username = query.require()?;

    state.skills.delete_skills(&username).await?;

    let res = BaseResponse {
        error: false,
        message: "User skills deleted successfully".to_string(),
    };

    Ok(Json(res))
}
