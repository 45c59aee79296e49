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

//! Schedule tools. Dates are DDMMYYYY and pass through to the upstream
//! verbatim.

use super::{json_content, parse_args, string_or_int, McpTool, ToolError, ToolResult};
use async_trait::async_trait;
use cinegate_core::models::IdValue;
use cinegate_gateway::Gateway;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

pub struct MovieSchedulesTool {
    gateway: Arc<Gateway>,
}

impl MovieSchedulesTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct MovieSchedulesArgs {
    sku: IdValue,
    date: IdValue,
}

#[async_trait]
impl McpTool for MovieSchedulesTool {
    fn name(&self) -> &str {
        "get_movie_schedules"
    }

    fn description(&self) -> &str {
        "Schedules for one movie on a given date (date format DDMMYYYY, e.g. 14032025)"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "sku": string_or_int("Movie SKU identifier, e.g. 25002900"),
                "date": string_or_int("Date in DDMMYYYY format, e.g. 14032025"),
            },
            "required": ["sku", "date"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: MovieSchedulesArgs = parse_args(params)?;
        let response = self
            .gateway
            .movie_schedules(&args.sku.to_string(), &args.date.to_string())
            .await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}

pub struct CinemaSchedulesTool {
    gateway: Arc<Gateway>,
}

impl CinemaSchedulesTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct CinemaSchedulesArgs {
    cinema_id: IdValue,
    date: IdValue,
}

#[async_trait]
impl McpTool for CinemaSchedulesTool {
    fn name(&self) -> &str {
        "get_cinema_schedules"
    }

    fn description(&self) -> &str {
        "All movie schedules at one cinema on a given date (date format DDMMYYYY)"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "cinema_id": string_or_int("Cinema location identifier"),
                "date": string_or_int("Date in DDMMYYYY format, e.g. 14032025"),
            },
            "required": ["cinema_id", "date"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: CinemaSchedulesArgs = parse_args(params)?;
        let response = self
            .gateway
            .cinema_schedules(&args.cinema_id.to_string(), &args.date.to_string())
            .await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}
