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
    Router,
    routing::{get, post},
};

use crate::proxy::{handlers, state::AppState};

/// TMDB authentication routes, nested under `/api/tmdb`
pub fn tmdb_auth_routes() -> Router<AppState> {
    Router::new()
        .route("/request-token", get(handlers::auth::issue_request_token))
        .route("/login", post(handlers::auth::validate_login))
        .route("/session", post(handlers::auth::create_session))
}

/// Probes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/healthz", get(handlers::health::health_check))
}
