// Copyright 2025 RustFS Team
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use snafu::Snafu;

use crate::proxy::models::auth::ErrorResponse;
use crate::tmdb;

/// Gateway API error type
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// Any failure of the outbound TMDB call. The upstream status is not
    /// mirrored, callers always see a 500.
    #[snafu(display("{}", source))]
    UpstreamCallFailed { source: tmdb::Error },

    #[snafu(display("{}", message))]
    BadRequest { message: String },
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::UpstreamCallFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Error::BadRequest { .. } => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Result type for gateway handlers
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_upstream_failure_is_500_with_error_field() {
        let response = Error::UpstreamCallFailed {
            source: tmdb::Error::MissingApiKey,
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"error": "TMDB API key is not configured"})
        );
    }

    #[test]
    fn test_bad_request_status() {
        let response = Error::BadRequest {
            message: "expected value at line 1 column 1".to_string(),
        }
        .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
