// Copyright 2025 Cinegate Contributors
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

//! Shared envelope pieces.
//!
//! The upstream reports application failures inside the response envelope,
//! possibly with HTTP 200: `data` is null or absent and `errors` carries
//! structured entries. Callers decide success by checking `data`, never the
//! status code.

use serde::{Deserialize, Serialize};

/// One upstream error entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    pub detail: ErrorDetail,
}

/// Error detail: the upstream emits either a message string or a bare flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorDetail {
    Text(String),
    Flag(bool),
}

/// Identifier that the upstream serializes as either a string or a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    Text(String),
    Number(i64),
}

impl std::fmt::Display for IdValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdValue::Text(s) => f.write_str(s),
            IdValue::Number(n) => write!(f, "{n}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_detail_accepts_string_or_bool() {
        let text: ApiError = serde_json::from_str(r#"{"code": 1, "detail": "bad login"}"#).unwrap();
        assert_eq!(text.code, Some(1));
        assert!(matches!(text.detail, ErrorDetail::Text(ref s) if s == "bad login"));

        let flag: ApiError = serde_json::from_str(r#"{"detail": false}"#).unwrap();
        assert_eq!(flag.code, None);
        assert!(matches!(flag.detail, ErrorDetail::Flag(false)));
    }

    #[test]
    fn id_value_accepts_both_encodings() {
        let text: IdValue = serde_json::from_str(r#""0136""#).unwrap();
        assert_eq!(text.to_string(), "0136");
        let number: IdValue = serde_json::from_str("136").unwrap();
        assert_eq!(number.to_string(), "136");
    }
}
