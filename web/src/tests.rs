/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

#[cfg(test)]
mod tests {
    use crate::endpoints::jobs::{JobRequest, JobResponse};
    use crate::error::WebError;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use jobboard_core::error::ServiceError;
    use jobboard_core::repository::RepositoryError;
    use jobboard_core::types::MJob;
    use mongodb::bson;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_service_error_status_mapping() {
        let cases = [
            (ServiceError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ServiceError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                ServiceError::from(RepositoryError::DuplicateKey("users".into())),
                StatusCode::CONFLICT,
            ),
        ];

        for (err, status) in cases {
            assert_eq!(WebError::from(err).status(), status);
        }
    }

    #[test]
    fn test_error_response_status() {
        let response = WebError::BadRequest("missing".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = WebError::missing_query("username").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_missing_query_message() {
        match WebError::missing_query("username") {
            WebError::BadRequest(msg) => assert_eq!(msg, "username query parameter is required"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_job_request_ignores_client_id_and_expiry() {
        let req: JobRequest = serde_json::from_value(serde_json::json!({
            "_id": "507f1f77bcf86cd799439011",
            "title": "Engineer",
            "url": "https://example.com/1",
            "expiresAt": "2030-01-01T00:00:00Z",
            "isBrazilianFriendly": {"isFriendly": true, "reason": "Remote"}
        }))
        .unwrap();

        let job: MJob = req.into();
        assert!(job.id.is_none());
        assert!(job.expires_at.is_none());
        assert_eq!(job.title, "Engineer");
        assert!(job.is_brazilian_friendly.is_friendly);
    }

    #[test]
    fn test_job_response_shape() {
        let id = ObjectId::new();
        let job = MJob {
            id: Some(id),
            title: "Engineer".to_string(),
            url: "https://example.com/1".to_string(),
            seniority_level: "Senior".to_string(),
            expires_at: Some(bson::DateTime::from_millis(1_700_000_000_000)),
            ..Default::default()
        };

        let json = serde_json::to_value(JobResponse::from(job)).unwrap();

        assert_eq!(json["id"], id.to_hex());
        assert_eq!(json["title"], "Engineer");
        assert_eq!(json["seniorityLevel"], "Senior");
        assert_eq!(json["expiresAt"], "2023-11-14T22:13:20.000Z");
        assert_eq!(json["isBrazilianFriendly"]["isFriendly"], false);
        assert!(json.get("_id").is_none());
    }
}
