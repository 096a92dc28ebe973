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
    extract::{FromRequest, Request},
    http::{HeaderMap, header},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::proxy::error::Error;

/// JSON body that is forwarded upstream as-is.
///
/// Unlike `axum::Json`, a request without a JSON content type, with an empty
/// body or with a JSON array yields `T::default()` instead of a rejection,
/// leaving it to TMDB to refuse the call. Bare scalars are rejected.
#[derive(Debug)]
pub struct ForwardedJson<T>(pub T);

impl<S, T> FromRequest<S> for ForwardedJson<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::BadRequest {
                message: e.body_text(),
            })?;

        if !is_json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        let value: Value = serde_json::from_slice(&bytes).map_err(|e| Error::BadRequest {
            message: format!("Invalid JSON in request body: {}", e),
        })?;

        match value {
            // fields are picked by name only, never by position
            Value::Object(_) => serde_json::from_value(value)
                .map(Self)
                .map_err(|e| Error::BadRequest {
                    message: format!("Invalid JSON in request body: {}", e),
                }),
            Value::Array(_) => Ok(Self(T::default())),
            _ => Err(Error::BadRequest {
                message: "Request body must be a JSON object or array".to_string(),
            }),
        }
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
