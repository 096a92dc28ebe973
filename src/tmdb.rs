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

//! Client for the TMDB v3 authentication endpoints.

use bytes::Bytes;
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::Serialize;
use serde::de::IgnoredAny;
use snafu::{OptionExt, ResultExt};
use std::sync::Arc;
use strum::Display;
use tracing::debug;

use crate::config::{ApiKey, Config};

pub mod error;

pub use error::Error;

const API_KEY_PARAM: &str = "api_key";

/// TMDB authentication endpoints, relative to the API base URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum AuthEndpoint {
    #[strum(to_string = "authentication/token/new")]
    NewToken,

    #[strum(to_string = "authentication/token/validate_with_login")]
    ValidateWithLogin,

    #[strum(to_string = "authentication/session/new")]
    NewSession,
}

/// Error body TMDB attaches to rejected calls
#[derive(Deserialize)]
struct StatusBody {
    status_message: Option<String>,
}

#[derive(Clone, Debug)]
pub struct TmdbClient {
    http: Client,
    base_url: Arc<str>,
    api_key: Option<ApiKey>,
}

impl TmdbClient {
    pub fn new(config: &Config) -> Result<Self, Error> {
        // No timeout: the call lasts as long as TMDB takes to answer.
        let http = Client::builder().build().context(error::BuildSnafu)?;

        Ok(Self {
            http,
            base_url: Arc::from(config.base_url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    /// `GET authentication/token/new`
    pub async fn new_request_token(&self) -> Result<Bytes, Error> {
        let request = self.http.get(self.url(AuthEndpoint::NewToken));
        self.send(AuthEndpoint::NewToken, request).await
    }

    /// `POST authentication/token/validate_with_login`
    pub async fn validate_with_login<B>(&self, credentials: &B) -> Result<Bytes, Error>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.url(AuthEndpoint::ValidateWithLogin))
            .json(credentials);
        self.send(AuthEndpoint::ValidateWithLogin, request).await
    }

    /// `POST authentication/session/new`
    pub async fn new_session<B>(&self, body: &B) -> Result<Bytes, Error>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .http
            .post(self.url(AuthEndpoint::NewSession))
            .json(body);
        self.send(AuthEndpoint::NewSession, request).await
    }

    fn url(&self, endpoint: AuthEndpoint) -> String {
        format!("{}/{}", self.base_url, endpoint)
    }

    /// Attaches the API key, performs the call and returns the raw body of a
    /// successful JSON response.
    async fn send(&self, endpoint: AuthEndpoint, request: RequestBuilder) -> Result<Bytes, Error> {
        let api_key = self.api_key.as_ref().context(error::MissingApiKeySnafu)?;

        debug!("calling TMDB {}", endpoint);

        let response = request
            .query(&[(API_KEY_PARAM, api_key.expose())])
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context(error::RequestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let status_message = response
                .bytes()
                .await
                .ok()
                .and_then(|body| serde_json::from_slice::<StatusBody>(&body).ok())
                .and_then(|body| body.status_message);

            return error::StatusSnafu {
                status,
                status_message,
            }
            .fail();
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest::Error::without_url)
            .context(error::RequestSnafu)?;

        serde_json::from_slice::<IgnoredAny>(&body).context(error::MalformedBodySnafu)?;

        Ok(body)
    }
}
