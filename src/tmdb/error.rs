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

use reqwest::StatusCode;
use snafu::Snafu;
use std::error::Error as StdError;

/// Everything that can go wrong while talking to TMDB.
///
/// Display strings end up verbatim in the `{error}` payload returned to the
/// browser, so none of them may contain the request URL.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("TMDB API key is not configured"))]
    MissingApiKey,

    #[snafu(display("failed to build HTTP client: {}", source))]
    Build { source: reqwest::Error },

    #[snafu(display("{}", error_chain(source)))]
    Request { source: reqwest::Error },

    #[snafu(display(
        "Request failed with status code {}{}",
        status.as_u16(),
        status_message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
    ))]
    Status {
        status: StatusCode,
        status_message: Option<String>,
    },

    #[snafu(display("Invalid JSON in upstream response: {}", source))]
    MalformedBody { source: serde_json::Error },
}

/// Flattens an error and its sources into `outer: inner: root`.
fn error_chain(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = StdError::source(err);
    while let Some(cause) = source {
        let cause_message = cause.to_string();
        if !message.ends_with(&cause_message) {
            message.push_str(": ");
            message.push_str(&cause_message);
        }
        source = cause.source();
    }
    message
}
