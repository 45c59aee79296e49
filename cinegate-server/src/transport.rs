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

//! MCP transport abstraction.
//!
//! The stdio transport frames JSON-RPC messages as newline-delimited JSON:
//! one message per line on stdin, one response per line on stdout. Logging
//! must therefore never touch stdout; the server writes logs to stderr.

use crate::protocol::{JsonRpcRequest, JsonRpcResponse};
use std::io;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, BufWriter};
use tokio::sync::mpsc;

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Channel closed")]
    ChannelClosed,
}

/// Transport abstraction for MCP JSON-RPC messages.
#[async_trait::async_trait]
pub trait McpTransport: Send {
    /// Receive the next JSON-RPC request; `Ok(None)` on end of stream.
    async fn recv(&mut self) -> Result<Option<JsonRpcRequest>, TransportError>;
    /// Send a JSON-RPC response.
    async fn send(&mut self, response: JsonRpcResponse) -> Result<(), TransportError>;
}

/// Stdio transport with newline-delimited JSON framing.
pub struct StdioTransport {
    reader: BufReader<tokio::io::Stdin>,
    writer: BufWriter<tokio::io::Stdout>,
    line: String,
}

impl StdioTransport {
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: BufWriter::new(tokio::io::stdout()),
            line: String::new(),
        }
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl McpTransport for StdioTransport {
    async fn recv(&mut self) -> Result<Option<JsonRpcRequest>, TransportError> {
        loop {
            self.line.clear();
            let read = self.reader.read_line(&mut self.line).await?;
            if read == 0 {
                return Ok(None); // EOF, client closed the pipe
            }
            if self.line.trim().is_empty() {
                continue;
            }
            let request = serde_json::from_str(self.line.trim())?;
            return Ok(Some(request));
        }
    }

    async fn send(&mut self, response: JsonRpcResponse) -> Result<(), TransportError> {
        let payload = serde_json::to_vec(&response)?;
        self.writer.write_all(&payload).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;
        Ok(())
    }
}

/// Channel-backed transport for tests and in-process use.
pub struct BufferTransport {
    input: mpsc::Receiver<JsonRpcRequest>,
    output: mpsc::Sender<JsonRpcResponse>,
}

impl BufferTransport {
    pub fn new(
        input: mpsc::Receiver<JsonRpcRequest>,
        output: mpsc::Sender<JsonRpcResponse>,
    ) -> Self {
        Self { input, output }
    }
}

#[async_trait::async_trait]
impl McpTransport for BufferTransport {
    async fn recv(&mut self) -> Result<Option<JsonRpcRequest>, TransportError> {
        Ok(self.input.recv().await)
    }

    async fn send(&mut self, response: JsonRpcResponse) -> Result<(), TransportError> {
        self.output
            .send(response)
            .await
            .map_err(|_| TransportError::ChannelClosed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::{JsonRpcId, JsonRpcResponse};

    #[tokio::test]
    async fn buffer_transport_round_trips() {
        let (req_tx, req_rx) = mpsc::channel(4);
        let (resp_tx, mut resp_rx) = mpsc::channel(4);
        let mut transport = BufferTransport::new(req_rx, resp_tx);

        req_tx
            .send(JsonRpcRequest {
                jsonrpc: "2.0".to_string(),
                method: "ping".to_string(),
                params: None,
                id: JsonRpcId::Number(1),
            })
            .await
            .unwrap();

        let request = transport.recv().await.unwrap().unwrap();
        assert_eq!(request.method, "ping");

        transport
            .send(JsonRpcResponse::success(
                JsonRpcId::Number(1),
                serde_json::json!({}),
            ))
            .await
            .unwrap();
        let response = resp_rx.recv().await.unwrap();
        assert!(response.result.is_some());
    }

    #[tokio::test]
    async fn buffer_transport_reports_eof() {
        let (req_tx, req_rx) = mpsc::channel::<JsonRpcRequest>(1);
        let (resp_tx, _resp_rx) = mpsc::channel(1);
        let mut transport = BufferTransport::new(req_rx, resp_tx);
        drop(req_tx);
        assert!(transport.recv().await.unwrap().is_none());
    }
}
