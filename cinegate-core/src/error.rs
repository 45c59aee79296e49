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

//! Gateway error taxonomy.
//!
//! Two failure kinds propagate to the caller as `Err`:
//! - transport failures (connect, timeout, TLS),
//! - schema decode failures (missing required field, wrong type).
//!
//! Upstream application errors are not represented here: the upstream may
//! answer HTTP 200 with an `errors` array in the envelope, so those are
//! carried inside the decoded response types and the caller checks whether
//! `data` is present. No failure kind is retried or recovered locally.

use thiserror::Error;

/// Errors produced by the gateway.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The HTTP round trip itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body did not match the operation's declared schema.
    /// `detail` is serde's message, which names the offending field.
    #[error("invalid response for {operation}: {detail}")]
    Decode { operation: &'static str, detail: String },
}

impl GatewayError {
    /// Wrap a serde decode failure for `operation`.
    pub fn decode(operation: &'static str, err: serde_json::Error) -> Self {
        Self::Decode {
            operation,
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_error_names_operation_and_field() {
        let err = serde_json::from_str::<std::collections::HashMap<String, u32>>("[]")
            .expect_err("type mismatch");
        let wrapped = GatewayError::decode("get_movie_list", err);
        let message = wrapped.to_string();
        assert!(message.contains("get_movie_list"), "{message}");
    }
}
