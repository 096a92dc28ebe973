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

use crate::config::Config;
use crate::tmdb::TmdbClient;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod proxy;
pub mod tmdb;


shadow_rs::shadow!(build);

/// `--version --verbose` style build description
pub const LONG_VERSION: &str = const_str::concat!(
    build::PKG_VERSION,
    " (",
    build::SHORT_COMMIT,
    " ",
    build::BUILD_TIME,
    ")"
);

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();
}

pub async fn run(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    proxy::run(config).await
}

/// Request one token from TMDB with the configured key and return the raw
/// response body.
pub async fn check(config: &Config) -> Result<String, tmdb::Error> {
    let client = TmdbClient::new(config)?;
    let body = client.new_request_token().await?;

    Ok(String::from_utf8_lossy(&body).into_owned())
}
