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

//! JSON-RPC method dispatch.
//!
//! Upstream failures (transport, schema decode) surface as tool results
//! with `isError: true`, not as JSON-RPC errors; the protocol-level error
//! space is reserved for malformed requests and unknown methods/tools.

use crate::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcError,
    JsonRpcRequest, JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolContent,
    ToolsCapability, MCP_PROTOCOL_VERSION,
};
use crate::tools::{ToolError, ToolRegistry};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

pub struct McpHandler {
    registry: Arc<ToolRegistry>,
}

impl McpHandler {
    pub fn new(registry: Arc<ToolRegistry>) -> Self {
        Self { registry }
    }

    /// Dispatch one request. Returns `None` for notifications, which get
    /// no response on the wire.
    pub async fn handle(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        let id = request.id.clone();
        debug!(method = %request.method, "handling request");

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request.params, id),
            "notifications/initialized" => return None,
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(request.params, id).await,
            method => {
                warn!(method, "unknown method");
                JsonRpcResponse::error(id, JsonRpcError::method_not_found(method))
            }
        };
        Some(response)
    }

    fn handle_initialize(&self, params: Option<Value>, id: crate::protocol::JsonRpcId) -> JsonRpcResponse {
        let params: InitializeParams = match params
            .ok_or_else(|| "missing initialize params".to_string())
            .and_then(|p| serde_json::from_value(p).map_err(|e| e.to_string()))
        {
            Ok(params) => params,
            Err(message) => {
                return JsonRpcResponse::error(id, JsonRpcError::invalid_params(message))
            }
        };
        debug!(
            client = %params.client_info.name,
            version = %params.client_info.version,
            protocol = %params.protocol_version,
            "client initialized"
        );

        let result = InitializeResult {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: "cinegate".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    fn handle_tools_list(&self, id: crate::protocol::JsonRpcId) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.registry.list(),
            next_cursor: None,
        };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }

    async fn handle_tools_call(
        &self,
        params: Option<Value>,
        id: crate::protocol::JsonRpcId,
    ) -> JsonRpcResponse {
        let params: CallToolParams = match params
            .ok_or_else(|| "missing tools/call params".to_string())
            .and_then(|p| serde_json::from_value(p).map_err(|e| e.to_string()))
        {
            Ok(params) => params,
            Err(message) => {
                return JsonRpcResponse::error(id, JsonRpcError::invalid_params(message))
            }
        };

        let arguments = Value::Object(params.arguments.into_iter().collect());
        let result = match self.registry.execute(&params.name, arguments).await {
            Ok(result) => CallToolResult {
                content: vec![ToolContent::Text {
                    text: result.content.to_string(),
                }],
                is_error: result.is_error.then_some(true),
            },
            Err(ToolError::NotFound(name)) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::method_not_found(&format!("tools/call:{name}")),
                )
            }
            Err(ToolError::InvalidParams(message)) => {
                return JsonRpcResponse::error(id, JsonRpcError::invalid_params(message))
            }
            Err(ToolError::Gateway(e)) => {
                warn!(tool = %params.name, error = %e, "upstream call failed");
                CallToolResult {
                    content: vec![ToolContent::Text {
                        text: e.to_string(),
                    }],
                    is_error: Some(true),
                }
            }
        };
        JsonRpcResponse::success(id, serde_json::to_value(result).unwrap())
    }
}
