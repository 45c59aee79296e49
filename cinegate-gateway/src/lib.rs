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

//! Cinegate Gateway
//!
//! Schema-validated request/response gateway to the upstream cinema API.
//! Each operation builds one fixed-shape HTTP request, issues it, decodes
//! the JSON body into the operation's declared type, and returns it. No
//! retries, no caching, no state between invocations.

pub mod client;
pub mod decode;
pub mod request;

pub use client::Gateway;
pub use decode::decode;
pub use request::{AddTicketsRequest, BookOrderRequest, ConcessionRequest, Form, SeatMapRequest};
