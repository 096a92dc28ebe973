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
    body::Bytes,
    extract::State,
    http::{HeaderValue, header},
    response::IntoResponse,
};
use snafu::ResultExt;

use crate::proxy::{
    error::{self, Result},
    extract::ForwardedJson,
    models::auth::{LoginCredentials, SessionRequest},
    state::AppState,
};
use crate::tmdb;

/// Issue a new TMDB request token
pub async fn issue_request_token(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let body = relay(state.tmdb.new_request_token().await)?;
    Ok(passthrough(body))
}

/// Validate a request token with username and password
///
/// The credentials go to TMDB untouched; nothing is checked locally.
pub async fn validate_login(
    State(state): State<AppState>,
    ForwardedJson(credentials): ForwardedJson<LoginCredentials>,
) -> Result<impl IntoResponse> {
    let body = relay(state.tmdb.validate_with_login(&credentials).await)?;
    Ok(passthrough(body))
}

/// Exchange a validated request token for a session id
pub async fn create_session(
    State(state): State<AppState>,
    ForwardedJson(request): ForwardedJson<SessionRequest>,
) -> Result<impl IntoResponse> {
    let body = relay(state.tmdb.new_session(&request).await)?;
    Ok(passthrough(body))
}

fn relay(result: std::result::Result<Bytes, tmdb::Error>) -> Result<Bytes> {
    result
        .inspect_err(|e| tracing::warn!("TMDB call failed: {}", e))
        .context(error::UpstreamCallFailedSnafu)
}

/// Upstream body, byte for byte, as a 200 JSON response
fn passthrough(body: Bytes) -> impl IntoResponse {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
}
