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

//! Authentication tools.
//!
//! `login` returns the access token and customer identifiers; the caller
//! must thread them into every later authenticated tool call. Nothing is
//! persisted between calls.

use super::{json_content, parse_args, string_or_int, McpTool, ToolError, ToolResult};
use async_trait::async_trait;
use cinegate_core::models::IdValue;
use cinegate_gateway::Gateway;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct LoginTool {
    gateway: Arc<Gateway>,
}

impl LoginTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct LoginArgs {
    email: String,
    password: String,
}

#[async_trait]
impl McpTool for LoginTool {
    fn name(&self) -> &str {
        "login"
    }

    fn description(&self) -> &str {
        "Authenticate a customer account; returns the access token and customer ids needed by booking tools"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "email": {"type": "string", "description": "Account email"},
                "password": {"type": "string", "description": "Account password"},
            },
            "required": ["email", "password"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: LoginArgs = parse_args(params)?;
        let response = self.gateway.login(&args.email, &args.password).await?;
        // Upstream reports bad credentials via the errors envelope, often
        // with HTTP 200; success is "data present".
        let has_data = response.data.is_some();
        let content = json_content(&response);
        Ok(if has_data {
            ToolResult::ok(content)
        } else {
            ToolResult::upstream_error(content)
        })
    }
}

pub struct ProfileTool {
    gateway: Arc<Gateway>,
}

impl ProfileTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ProfileArgs {
    profile_id: IdValue,
    access_token: String,
}

#[async_trait]
impl McpTool for ProfileTool {
    fn name(&self) -> &str {
        "get_profile"
    }

    fn description(&self) -> &str {
        "Customer profile information (requires the access token from login)"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "profile_id": string_or_int("Customer profile id (login data entity_id)"),
                "access_token": {"type": "string", "description": "Access token from login"},
            },
            "required": ["profile_id", "access_token"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: ProfileArgs = parse_args(params)?;
        let response = self
            .gateway
            .profile(&args.profile_id.to_string(), &args.access_token)
            .await?;
        Ok(ToolResult::ok(response))
    }
}
