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

//! Catalog tools: cinema list and movie list.

use super::{json_content, McpTool, ToolError, ToolResult};
use async_trait::async_trait;
use cinegate_gateway::Gateway;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct CinemaListTool {
    gateway: Arc<Gateway>,
}

impl CinemaListTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl McpTool for CinemaListTool {
    fn name(&self) -> &str {
        "get_cinema_list"
    }

    fn description(&self) -> &str {
        "List all cinema locations grouped by city, with name, address, coordinates and special features"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        })
    }

    async fn execute(&self, _params: Value) -> Result<ToolResult, ToolError> {
        let response = self.gateway.cinema_list().await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}

pub struct MovieListTool {
    gateway: Arc<Gateway>,
}

impl MovieListTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl McpTool for MovieListTool {
    fn name(&self) -> &str {
        "get_movie_list"
    }

    fn description(&self) -> &str {
        "List movies currently showing, with SKU, rating and booking availability"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {},
            "additionalProperties": false
        })
    }

    async fn execute(&self, _params: Value) -> Result<ToolResult, ToolError> {
        let response = self.gateway.movie_list().await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}
