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

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// Fields are kept as raw JSON values and are all optional: whatever the
// browser sent is what TMDB receives, a missing field stays missing.

/// Login validation request
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoginCredentials {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub password: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub request_token: Option<Value>,
}

/// Session creation request
#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SessionRequest {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub request_token: Option<Value>,
}

/// Keeps an explicit `null` as `Some(Value::Null)` so it is forwarded too.
fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Error payload
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_are_not_forwarded() {
        let credentials: LoginCredentials =
            serde_json::from_value(json!({"username": "u"})).unwrap();
        assert_eq!(
            serde_json::to_value(&credentials).unwrap(),
            json!({"username": "u"})
        );

        let session: SessionRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(serde_json::to_value(&session).unwrap(), json!({}));
    }

    #[test]
    fn test_unknown_fields_are_dropped() {
        let session: SessionRequest =
            serde_json::from_value(json!({"request_token": "abc123", "extra": 1})).unwrap();
        assert_eq!(
            serde_json::to_value(&session).unwrap(),
            json!({"request_token": "abc123"})
        );
    }

    #[test]
    fn test_values_are_forwarded_as_received() {
        let credentials: LoginCredentials = serde_json::from_value(
            json!({"username": 42, "password": null, "request_token": "abc123"}),
        )
        .unwrap();
        assert_eq!(
            serde_json::to_value(&credentials).unwrap(),
            json!({"username": 42, "password": null, "request_token": "abc123"})
        );
    }
}
