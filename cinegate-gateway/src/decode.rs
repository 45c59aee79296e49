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

//! Response decoding.
//!
//! The body is parsed as JSON and checked against the operation's declared
//! type: required fields must be present with the right type, unknown
//! fields are ignored, optional fields stay absent. A violation surfaces
//! as [`GatewayError::Decode`] naming the operation and the offending
//! field; values are never coerced or defaulted.

use cinegate_core::GatewayError;
use serde::de::DeserializeOwned;

/// Decode `body` as the response type of `operation`.
pub fn decode<T: DeserializeOwned>(
    operation: &'static str,
    body: &str,
) -> Result<T, GatewayError> {
    serde_json::from_str(body).map_err(|e| GatewayError::decode(operation, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegate_core::models::{MovieScheduleResponse, SeatMapResponse};

    #[test]
    fn schedule_with_empty_cinema_list_decodes() {
        let body = r#"{"data":[{"date":"14032025","locations":[{"city_id":"1","name":"Hanoi","cinemas":[]}]}]}"#;
        let parsed: MovieScheduleResponse = decode("get_movie_schedules", body).unwrap();
        assert!(parsed.data[0].locations[0].cinemas.is_empty());
    }

    #[test]
    fn missing_required_field_is_a_decode_error() {
        // locations entry without city_id
        let body = r#"{"data":[{"date":"14032025","locations":[{"name":"Hanoi","cinemas":[]}]}]}"#;
        let err = decode::<MovieScheduleResponse>("get_movie_schedules", body).unwrap_err();
        match err {
            GatewayError::Decode { operation, detail } => {
                assert_eq!(operation, "get_movie_schedules");
                assert!(detail.contains("city_id"), "{detail}");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn error_envelope_is_not_a_decode_error() {
        let body = r#"{"data":null,"errors":[{"code":1,"detail":"bad login"}]}"#;
        let parsed: SeatMapResponse = decode("get_seatmap", body).unwrap();
        assert!(parsed.data.is_none());
        assert!(parsed.errors.is_some());
    }

    #[test]
    fn non_json_body_is_a_decode_error() {
        let err = decode::<SeatMapResponse>("get_seatmap", "<html>gateway timeout</html>");
        assert!(err.is_err());
    }
}
