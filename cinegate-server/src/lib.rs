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

//! MCP server exposing the cinema booking API as tools over stdio.

pub mod handlers;
pub mod protocol;
pub mod tools;
pub mod transport;

use crate::handlers::McpHandler;
use crate::protocol::{JsonRpcError, JsonRpcId, JsonRpcResponse};
use crate::transport::{McpTransport, StdioTransport, TransportError};
use anyhow::Context;
use cinegate_core::GatewayConfig;
use cinegate_gateway::Gateway;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Install the tracing subscriber. Logs go to stderr; stdout carries the
/// JSON-RPC stream and must stay clean.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cinegate=info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Build the handler stack and serve MCP over stdio until the client
/// closes the pipe.
pub async fn run_server(config: GatewayConfig) -> anyhow::Result<()> {
    config.validate().context("invalid gateway configuration")?;
    info!(base_url = %config.base_url, "starting cinegate MCP server");

    let gateway = Arc::new(Gateway::new(config).context("building upstream HTTP client")?);
    let registry = Arc::new(tools::ToolRegistry::new());
    tools::register_all(&registry, gateway).context("registering tools")?;
    let handler = McpHandler::new(registry);

    serve(&handler, StdioTransport::new()).await
}

/// Request loop over any transport.
pub async fn serve<T: McpTransport>(handler: &McpHandler, mut transport: T) -> anyhow::Result<()> {
    loop {
        match transport.recv().await {
            Ok(Some(request)) => {
                if let Some(response) = handler.handle(request).await {
                    transport.send(response).await?;
                }
            }
            Ok(None) => {
                info!("client closed the connection");
                return Ok(());
            }
            // A malformed line is a client bug, not a reason to exit.
            Err(TransportError::Json(e)) => {
                let response = JsonRpcResponse::error(
                    JsonRpcId::Null,
                    JsonRpcError::parse_error(e.to_string()),
                );
                transport.send(response).await?;
            }
            Err(e) => {
                error!(error = %e, "transport failure");
                return Err(e.into());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{JsonRpcRequest, JSONRPC_VERSION};
    use crate::tools::{McpTool, ToolError, ToolRegistry, ToolResult};
    use crate::transport::BufferTransport;
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use tokio::sync::mpsc;

    struct PingPongTool;

    #[async_trait]
    impl McpTool for PingPongTool {
        fn name(&self) -> &str {
            "pingpong"
        }

        fn description(&self) -> &str {
            "Returns pong"
        }

        fn input_schema(&self) -> Value {
            json!({"type": "object", "properties": {}, "additionalProperties": false})
        }

        async fn execute(&self, _params: Value) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::ok(json!({"pong": true})))
        }
    }

    #[tokio::test]
    async fn serve_answers_requests_and_stops_on_eof() {
        let registry = Arc::new(ToolRegistry::new());
        registry.register(Arc::new(PingPongTool)).unwrap();
        let handler = McpHandler::new(registry);

        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(4);
        let transport = BufferTransport::new(req_rx, resp_tx);

        req_tx
            .send(JsonRpcRequest {
                jsonrpc: JSONRPC_VERSION.to_string(),
                method: "tools/call".to_string(),
                params: Some(json!({"name": "pingpong", "arguments": {}})),
                id: JsonRpcId::Number(1),
            })
            .await
            .unwrap();
        drop(req_tx);

        serve(&handler, transport).await.unwrap();

        let response = resp_rx.recv().await.unwrap();
        let result = response.result.unwrap();
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("pong"));
        assert!(resp_rx.recv().await.is_none());
    }

    #[tokio::test]
    async fn notifications_produce_no_output() {
        let registry = Arc::new(ToolRegistry::new());
        let handler = McpHandler::new(registry);

        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(4);
        let transport = BufferTransport::new(req_rx, resp_tx);

        req_tx
            .send(JsonRpcRequest {
                jsonrpc: JSONRPC_VERSION.to_string(),
                method: "notifications/initialized".to_string(),
                params: None,
                id: JsonRpcId::Null,
            })
            .await
            .unwrap();
        drop(req_tx);

        serve(&handler, transport).await.unwrap();
        assert!(resp_rx.recv().await.is_none());
    }
}
