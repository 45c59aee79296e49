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

//! Cinegate Core
//!
//! Configuration, error taxonomy, request signing, and the upstream record
//! types shared by the gateway and the MCP server.

pub mod config;
pub mod error;
pub mod models;
pub mod sign;

pub use config::GatewayConfig;
pub use error::GatewayError;
pub use sign::sign;
