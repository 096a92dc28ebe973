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

use std::fmt;

pub const DEFAULT_PORT: u16 = 5000;
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Gateway configuration, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Listen port, bound on all interfaces
    pub port: u16,
    /// TMDB API key. The gateway still starts without one, every upstream call
    /// then fails.
    pub api_key: Option<ApiKey>,
    /// Upstream base URL, without trailing slash
    pub base_url: String,
}

impl Config {
    pub fn new(port: u16, api_key: Option<String>) -> Self {
        Self {
            port,
            api_key: api_key.filter(|k| !k.is_empty()).map(ApiKey::new),
            base_url: TMDB_BASE_URL.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_PORT, None)
    }
}

/// TMDB API key that never shows up in logs or debug output.
#[derive(Clone)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw value, only for attaching to the outbound request.
    #[inline]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey([REDACTED])")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}
