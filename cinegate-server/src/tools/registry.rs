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

//! Tool registry with JSON-Schema input validation.
//!
//! Each tool declares a schema for its arguments; the registry compiles
//! the schema at registration time and rejects invalid arguments before
//! the tool executes. Business constraints (seat availability, date
//! ranges) are deliberately not validated here — only argument shape.

use crate::protocol::Tool;
use async_trait::async_trait;
use cinegate_core::GatewayError;
use dashmap::DashMap;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Tool execution result. `is_error` marks upstream error envelopes
/// (HTTP succeeded, `data` absent) so the host can surface the failure.
#[derive(Debug, Clone)]
pub struct ToolResult {
    pub content: Value,
    pub is_error: bool,
}

impl ToolResult {
    pub fn ok(content: Value) -> Self {
        Self {
            content,
            is_error: false,
        }
    }

    pub fn upstream_error(content: Value) -> Self {
        Self {
            content,
            is_error: true,
        }
    }
}

/// Trait for MCP tools.
#[async_trait]
pub trait McpTool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn input_schema(&self) -> Value;

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError>;
}

/// Registry for MCP tools.
pub struct ToolRegistry {
    tools: DashMap<String, Arc<dyn McpTool>>,
    validators: DashMap<String, JSONSchema>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: DashMap::new(),
            validators: DashMap::new(),
        }
    }

    pub fn register(&self, tool: Arc<dyn McpTool>) -> Result<(), RegistrationError> {
        let name = tool.name().to_string();
        if self.tools.contains_key(&name) {
            return Err(RegistrationError::DuplicateName(name));
        }

        let schema = tool.input_schema();
        let validator = JSONSchema::options()
            .compile(&schema)
            .map_err(|e| RegistrationError::Schema(e.to_string()))?;
        self.validators.insert(name.clone(), validator);
        self.tools.insert(name, tool);
        Ok(())
    }

    /// Tool descriptors for `tools/list`.
    pub fn list(&self) -> Vec<Tool> {
        let mut tools: Vec<Tool> = self
            .tools
            .iter()
            .map(|entry| {
                let tool = entry.value();
                Tool {
                    name: tool.name().to_string(),
                    description: Some(tool.description().to_string()),
                    input_schema: tool.input_schema(),
                }
            })
            .collect();
        tools.sort_by(|a, b| a.name.cmp(&b.name));
        tools
    }

    pub async fn execute(&self, name: &str, params: Value) -> Result<ToolResult, ToolError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| ToolError::NotFound(name.to_string()))?
            .clone();
        let invalid = {
            let validator = self
                .validators
                .get(name)
                .ok_or_else(|| ToolError::NotFound(name.to_string()))?;
            validator.validate(&params).err().map(|errors| {
                errors.map(|e| e.to_string()).collect::<Vec<_>>().join("; ")
            })
        };
        if let Some(message) = invalid {
            return Err(ToolError::InvalidParams(message));
        }

        tool.execute(params).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Tool not found: {0}")]
    NotFound(String),
    #[error("Invalid tool params: {0}")]
    InvalidParams(String),
    /// Transport or schema-decode failure from the upstream gateway.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("Duplicate tool name: {0}")]
    DuplicateName(String),
    #[error("Invalid schema: {0}")]
    Schema(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct EchoTool;

    #[async_trait]
    impl McpTool for EchoTool {
        fn name(&self) -> &str {
            "echo"
        }

        fn description(&self) -> &str {
            "Echo the message argument"
        }

        fn input_schema(&self) -> Value {
            json!({
                "type": "object",
                "properties": {
                    "message": {"type": "string"}
                },
                "required": ["message"]
            })
        }

        async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
            Ok(ToolResult::ok(json!({"echo": params["message"]})))
        }
    }

    #[tokio::test]
    async fn valid_params_execute() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool)).unwrap();
        let result = registry
            .execute("echo", json!({"message": "hi"}))
            .await
            .unwrap();
        assert_eq!(result.content["echo"], "hi");
        assert!(!result.is_error);
    }

    #[tokio::test]
    async fn schema_violation_is_rejected_before_execution() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool)).unwrap();
        let err = registry.execute("echo", json!({"message": 7})).await.unwrap_err();
        assert!(matches!(err, ToolError::InvalidParams(_)));

        let err = registry.execute("echo", json!({})).await.unwrap_err();
        match err {
            ToolError::InvalidParams(message) => {
                assert!(message.contains("message"), "{message}")
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let registry = ToolRegistry::new();
        let err = registry.execute("nope", json!({})).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound(_)));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let registry = ToolRegistry::new();
        registry.register(Arc::new(EchoTool)).unwrap();
        let err = registry.register(Arc::new(EchoTool)).unwrap_err();
        assert!(matches!(err, RegistrationError::DuplicateName(_)));
    }
}
