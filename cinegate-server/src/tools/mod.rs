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

//! Tool implementations.
//!
//! Each tool wraps one gateway operation: deserialize the (already
//! schema-validated) arguments, issue the single upstream call, and return
//! the decoded response as JSON content. Tools hold no state; tokens and
//! identifiers obtained from `login` are passed back in by the caller.

pub mod auth;
pub mod booking;
pub mod catalog;
pub mod registry;
pub mod schedule;

pub use registry::{McpTool, RegistrationError, ToolError, ToolRegistry, ToolResult};

use cinegate_gateway::Gateway;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Register every exposed tool on `registry`.
pub fn register_all(
    registry: &ToolRegistry,
    gateway: Arc<Gateway>,
) -> Result<(), RegistrationError> {
    registry.register(Arc::new(catalog::CinemaListTool::new(gateway.clone())))?;
    registry.register(Arc::new(catalog::MovieListTool::new(gateway.clone())))?;
    registry.register(Arc::new(schedule::MovieSchedulesTool::new(gateway.clone())))?;
    registry.register(Arc::new(schedule::CinemaSchedulesTool::new(gateway.clone())))?;
    registry.register(Arc::new(auth::LoginTool::new(gateway.clone())))?;
    registry.register(Arc::new(auth::ProfileTool::new(gateway.clone())))?;
    registry.register(Arc::new(booking::SeatMapTool::new(gateway.clone())))?;
    registry.register(Arc::new(booking::ConcessionInfoTool::new(gateway.clone())))?;
    registry.register(Arc::new(booking::AddTicketsTool::new(gateway.clone())))?;
    registry.register(Arc::new(booking::BookOrderTool::new(gateway)))?;
    Ok(())
}

/// Deserialize validated tool arguments into their typed form.
pub(crate) fn parse_args<T: DeserializeOwned>(params: Value) -> Result<T, ToolError> {
    serde_json::from_value(params).map_err(|e| ToolError::InvalidParams(e.to_string()))
}

/// Serialize a decoded upstream response into tool content.
pub(crate) fn json_content<T: serde::Serialize>(value: &T) -> Value {
    serde_json::to_value(value).expect("decoded responses serialize cleanly")
}

/// JSON-Schema fragment for identifiers the upstream emits as either
/// strings or integers.
pub(crate) fn string_or_int(description: &str) -> Value {
    serde_json::json!({
        "type": ["string", "integer"],
        "description": description
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegate_core::GatewayConfig;

    fn test_gateway() -> Arc<Gateway> {
        let config = GatewayConfig {
            base_url: "http://127.0.0.1:9".to_string(),
            user_agent: "test-agent".to_string(),
            device_id: "test-device/1.0".to_string(),
            secret_key: "test-secret".to_string(),
            request_timeout_secs: 1,
        };
        Arc::new(Gateway::new(config).unwrap())
    }

    #[test]
    fn all_ten_tools_register() {
        let registry = ToolRegistry::new();
        register_all(&registry, test_gateway()).unwrap();

        let names: Vec<String> = registry.list().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "add_tickets",
                "book_order_by_compound",
                "get_cinema_list",
                "get_cinema_schedules",
                "get_info_concession",
                "get_movie_list",
                "get_movie_schedules",
                "get_profile",
                "get_seatmap",
                "login",
            ]
        );
    }

    #[test]
    fn every_tool_schema_is_an_object_schema() {
        let registry = ToolRegistry::new();
        register_all(&registry, test_gateway()).unwrap();
        for tool in registry.list() {
            assert_eq!(tool.input_schema["type"], "object", "{}", tool.name);
        }
    }

    #[tokio::test]
    async fn schedule_args_reject_wrong_types() {
        let registry = ToolRegistry::new();
        register_all(&registry, test_gateway()).unwrap();
        let err = registry
            .execute(
                "get_movie_schedules",
                serde_json::json!({"sku": true, "date": "14032025"}),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_surfaces_gateway_error() {
        let registry = ToolRegistry::new();
        register_all(&registry, test_gateway()).unwrap();
        let err = registry
            .execute("get_cinema_list", serde_json::json!({}))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Gateway(_)));
    }
}
