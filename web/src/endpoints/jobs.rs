/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use crate::error::WebResult;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, State};
use axum::http::StatusCode;
use chrono::{DateTime, SecondsFormat};
use entity::job::BrazilianFriendly;
use jobboard_core::service::UpsertOutcome;
use jobboard_core::types::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
#[serde(default, rename_all = "camelCase")]
pub struct JobRequest {
    pub title: String,
    pub updated_at: String,
    pub employment_type: String,
    pub published_date: String,
    pub application_deadline: String,
    pub compensation_tier_summary: String,
    pub workplace_type: String,
    pub office_location: String,
    pub is_brazilian_friendly: BrazilianFriendly,
    pub company: String,
    pub url: String,
    pub seniority_level: String,
    pub field: String,
}

impl From<JobRequest> for MJob {
    fn from(req: JobRequest) -> Self {
        MJob {
            id: None,
            title: req.title,
            updated_at: req.updated_at,
            employment_type: req.employment_type,
            published_date: req.published_date,
            application_deadline: req.application_deadline,
            compensation_tier_summary: req.compensation_tier_summary,
            workplace_type: req.workplace_type,
            office_location: req.office_location,
            is_brazilian_friendly: req.is_brazilian_friendly,
            company: req.company,
            url: req.url,
            seniority_level: req.seniority_level,
            field: req.field,
            expires_at: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    pub id: String,
    #[serde(flatten)]
    pub job: JobRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<String>,
}

impl From<MJob> for JobResponse {
    fn from(job: MJob) -> Self {
        let id = job.id.map(|id| id.to_hex()).unwrap_or_default();
        let expires_at = job
            .expires_at
            .and_then(|t| DateTime::from_timestamp_millis(t.timestamp_millis()))
            .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true));

        JobResponse {
            id,
            expires_at,
            job: JobRequest {
                title: job.title,
                updated_at: job.updated_at,
                employment_type: job.employment_type,
                published_date: job.published_date,
                application_deadline: job.application_deadline,
                compensation_tier_summary: job.compensation_tier_summary,
                workplace_type: job.workplace_type,
                office_location: job.office_location,
                is_brazilian_friendly: job.is_brazilian_friendly,
                company: job.company,
                url: job.url,
                seniority_level: job.seniority_level,
                field: job.field,
            },
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteJobRequest {
    #[serde(default)]
    pub url: String,
}

fn message(status: StatusCode, text: &str) -> (StatusCode, Json<BaseResponse<String>>) {
    let res = BaseResponse {
        error: false,
        message: text.to_string(),
    };

    (status, Json(res))
}

pub async fn post(
    state: State<Arc<ServerState>>,
    body: Result<Json<JobRequest>, JsonRejection>,
) -> WebResult<(StatusCode, Json<BaseResponse<String>>)> {
    let Json(body) = body?;

    let res = match state.jobs.create_or_update(body.into()).await? {
        UpsertOutcome::Created => message(StatusCode::CREATED, "Job created successfully."),
        UpsertOutcome::Updated => message(
            StatusCode::OK,
            "Job already exists, updated with new information and extended expiration.",
        ),
        UpsertOutcome::Unchanged => {
            message(StatusCode::CONFLICT, "Job already exists, unchanged.")
        }
    };

    Ok(res)
}

pub async fn get(state: State<Arc<ServerState>>) -> WebResult<Json<BaseResponse<Vec<JobResponse>>>> {
    let jobs = state.jobs.find_all().await?;

    let res = BaseResponse {
        error: false,
        message: jobs.into_iter().map(JobResponse::from).collect(),
    };

    Ok(Json(res))
}

pub async fn put(
    state: State<Arc<ServerState>>,
    body: Result<Json<JobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = body?;

    state.jobs.update_existing(body.into()).await?;

    let res = BaseResponse {
        error: false,
        message: "Job updated successfully".to_string(),
    };

    Ok(Json(res))
}

pub async fn delete(
    state: State<Arc<ServerState>>,
    body: Result<Json<DeleteJobRequest>, JsonRejection>,
) -> WebResult<Json<BaseResponse<String>>> {
    let Json(body) = body?;

    state.jobs.delete_existing(&body.url).await?;

    let res = BaseResponse {
        error: false,
        message: "Job deleted successfully".to_string(),
    };

    Ok(Json(res))
}
