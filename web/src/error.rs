/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use jobboard_core::error::ServiceError;
use jobboard_core::repository::RepositoryError;
use jobboard_core::types::BaseResponse;
use std::fmt;

#[derive(Debug)]
pub enum WebError {
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Validation(String),
    Repository(RepositoryError),
    JsonParsing(JsonRejection),
    QueryParsing(QueryRejection),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WebError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            WebError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            WebError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            WebError::Validation(msg) => write!(f, "Validation error: {}", msg),
            WebError::Repository(err) => write!(f, "Database error: {}", err),
            WebError::JsonParsing(err) => write!(f, "JSON parsing error: {}", err),
            WebError::QueryParsing(err) => write!(f, "Query parsing error: {}", err),
        }
    }
}

impl std::error::Error for WebError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WebError::Repository(err) => Some(err),
            WebError::JsonParsing(err) => Some(err),
            WebError::QueryParsing(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ServiceError> for WebError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Validation(msg) => WebError::Validation(msg),
            ServiceError::NotFound(msg) => WebError::NotFound(msg),
            ServiceError::Conflict(msg) => WebError::Conflict(msg),
            ServiceError::Repository(err) => WebError::Repository(err),
        }
    }
}

impl From<JsonRejection> for WebError {
    fn from(err: JsonRejection) -> Self {
        WebError::JsonParsing(err)
    }
}

impl From<QueryRejection> for WebError {
    fn from(err: QueryRejection) -> Self {
        WebError::QueryParsing(err)
    }
}

impl WebError {
    pub fn status(&self) -> StatusCode {
        match self {
            WebError::BadRequest(_)
            | WebError::Validation(_)
            | WebError::JsonParsing(_)
            | WebError::QueryParsing(_) => StatusCode::BAD_REQUEST,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::Conflict(_) => StatusCode::CONFLICT,
            WebError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn missing_query(name: &str) -> Self {
        WebError::BadRequest(format!("{} query parameter is required", name))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match self {
            WebError::BadRequest(msg)
            | WebError::NotFound(msg)
            | WebError::Conflict(msg)
            | WebError::Validation(msg) => msg,
            WebError::Repository(err) => {
                tracing::error!("Database error: {}", err);
                "Database error".to_string()
            }
            WebError::JsonParsing(err) => format!("Invalid JSON: {}", err.body_text()),
            WebError::QueryParsing(err) => format!("Invalid query: {}", err.body_text()),
        };

        let body = Json(BaseResponse {
            error: true,
            message: error_message,
        });

        (status, body).into_response()
    }
}

pub type WebResult<T> = Result<T, WebError>;
