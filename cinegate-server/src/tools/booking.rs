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

//! Booking-flow tools: seat map, concessions, cart, and order booking.
//!
//! Ticket payloads keep the upstream's exact field names (PascalCase in
//! the ticket lines); the date formats differ per operation and are
//! forwarded verbatim (seat map YYYYMMDD, cart/booking DD/MM/YYYY).

use super::{json_content, parse_args, string_or_int, McpTool, ToolError, ToolResult};
use async_trait::async_trait;
use cinegate_core::models::{IdValue, InfoCompound, TicketRequest};
use cinegate_gateway::{
    AddTicketsRequest, BookOrderRequest, ConcessionRequest, Gateway, SeatMapRequest,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

/// JSON-Schema for one caller-built ticket line.
fn ticket_schema() -> Value {
    json!({
        "type": "array",
        "description": "Ticket lines with upstream field names preserved",
        "items": {
            "type": "object",
            "properties": {
                "TicketTypeCode": {"type": "string"},
                "Qty": {"type": "integer"},
                "PriceInCents": {"type": "string"},
                "OptionalAreaCatSequence": {"type": "string"},
                "OptionalAreaCatCode": {"type": "integer"},
                "Title": {"type": "string"},
                "TTypeCode": {"type": "string"},
                "total": {"type": "integer"},
                "combo": {"type": "integer"},
                "Seat": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "label": {"type": "string"},
                            "number": {"type": "string"},
                            "col": {"type": "integer"},
                            "row": {"type": "integer"},
                            "id": {"type": "integer"}
                        },
                        "required": ["label", "number", "col", "row", "id"]
                    }
                }
            },
            "required": [
                "TicketTypeCode", "Qty", "PriceInCents", "OptionalAreaCatSequence",
                "OptionalAreaCatCode", "Title", "TTypeCode", "total", "combo", "Seat"
            ]
        }
    })
}

/// JSON-Schema for the compound payment info. All members optional;
/// omitted members take the upstream's empty encodings.
fn info_compound_schema() -> Value {
    json!({
        "type": "object",
        "description": "Compound payment info: discounts, vouchers, points, gift cards, combos",
        "properties": {
            "info_admission_cards": {"type": "string"},
            "info_discounts": {"type": "object"},
            "info_vouchers": {"type": "array"},
            "info_points": {"type": "string"},
            "info_gift_cards": {"type": "string"},
            "info_gift_cards_new": {"type": "string"},
            "info_combo": {"type": "object"},
            "info_partner_ship": {"type": "string"}
        },
        "additionalProperties": false
    })
}

pub struct SeatMapTool {
    gateway: Arc<Gateway>,
}

impl SeatMapTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct SeatMapArgs {
    cinema_id: IdValue,
    customer_id: IdValue,
    u_token: String,
    date: IdValue,
    session_id: IdValue,
}

#[async_trait]
impl McpTool for SeatMapTool {
    fn name(&self) -> &str {
        "get_seatmap"
    }

    fn description(&self) -> &str {
        "Seat map for a session, including availability and pricing. Slots without seat fields are aisles or gaps, not seats"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "cinema_id": string_or_int("Cinema location identifier"),
                "customer_id": string_or_int("Customer id from login (entity_id)"),
                "u_token": {"type": "string", "description": "Access token from login"},
                "date": string_or_int("Session date in YYYYMMDD format"),
                "session_id": string_or_int("Session identifier"),
            },
            "required": ["cinema_id", "customer_id", "u_token", "date", "session_id"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: SeatMapArgs = parse_args(params)?;
        let response = self
            .gateway
            .seat_map(&SeatMapRequest {
                cinema_id: args.cinema_id.to_string(),
                customer_id: args.customer_id.to_string(),
                u_token: args.u_token,
                date: args.date.to_string(),
                session_id: args.session_id.to_string(),
            })
            .await?;
        let has_data = response.data.is_some();
        let content = json_content(&response);
        Ok(if has_data {
            ToolResult::ok(content)
        } else {
            ToolResult::upstream_error(content)
        })
    }
}

pub struct ConcessionInfoTool {
    gateway: Arc<Gateway>,
}

impl ConcessionInfoTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct ConcessionArgs {
    session_id: IdValue,
    product: IdValue,
    ticket: Vec<TicketRequest>,
    customer_id: IdValue,
    theater_id: String,
    session_date: String,
}

#[async_trait]
impl McpTool for ConcessionInfoTool {
    fn name(&self) -> &str {
        "get_info_concession"
    }

    fn description(&self) -> &str {
        "Concession combos available for a session, with pricing and remaining stock"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": string_or_int("Session identifier"),
                "product": string_or_int("Product (movie) identifier"),
                "ticket": ticket_schema(),
                "customer_id": string_or_int("Customer id from login (entity_id)"),
                "theater_id": {"type": "string", "description": "Theater (cinema) identifier"},
                "session_date": {"type": "string", "description": "Session date in DD/MM/YYYY format"},
            },
            "required": ["session_id", "product", "ticket", "customer_id", "theater_id", "session_date"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: ConcessionArgs = parse_args(params)?;
        let response = self
            .gateway
            .concession_info(&ConcessionRequest {
                session_id: args.session_id.to_string(),
                product: args.product.to_string(),
                ticket: args.ticket,
                customer_id: args.customer_id.to_string(),
                theater_id: args.theater_id,
                session_date: args.session_date,
            })
            .await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}

pub struct AddTicketsTool {
    gateway: Arc<Gateway>,
}

impl AddTicketsTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct AddTicketsArgs {
    session_id: IdValue,
    session_time: String,
    product: IdValue,
    ticket: Vec<TicketRequest>,
    session_showing_type: String,
    #[serde(default)]
    info_compound: InfoCompound,
    theater_name: String,
    is_u22: bool,
    session_date: String,
    movie_format: String,
    theater_cinema: String,
    customer_id: IdValue,
    theater_id: String,
    u_token: String,
}

#[async_trait]
impl McpTool for AddTicketsTool {
    fn name(&self) -> &str {
        "add_tickets"
    }

    fn description(&self) -> &str {
        "Add tickets to a cart for a session; returns the cart id and payment options"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "session_id": string_or_int("Session identifier"),
                "session_time": {"type": "string", "description": "Session time, HH:MM"},
                "product": string_or_int("Product (movie) identifier"),
                "ticket": ticket_schema(),
                "session_showing_type": {"type": "string", "description": "Showing type code, e.g. \"03\""},
                "info_compound": info_compound_schema(),
                "theater_name": {"type": "string", "description": "Full theater name, e.g. \"CGV Vincom Royal City\""},
                "is_u22": {"type": "boolean", "description": "Whether the customer is under 22"},
                "session_date": {"type": "string", "description": "Session date in DD/MM/YYYY format"},
                "movie_format": {"type": "string", "description": "Movie format description"},
                "theater_cinema": {"type": "string", "description": "Cinema room name, e.g. \"Cinema 5\""},
                "customer_id": string_or_int("Customer id from login (entity_id)"),
                "theater_id": {"type": "string", "description": "Theater (cinema) identifier"},
                "u_token": {"type": "string", "description": "Access token from login"},
            },
            "required": [
                "session_id", "session_time", "product", "ticket", "session_showing_type",
                "theater_name", "is_u22", "session_date", "movie_format", "theater_cinema",
                "customer_id", "theater_id", "u_token"
            ],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: AddTicketsArgs = parse_args(params)?;
        let response = self
            .gateway
            .add_tickets(&AddTicketsRequest {
                session_id: args.session_id.to_string(),
                session_time: args.session_time,
                product: args.product.to_string(),
                ticket: args.ticket,
                session_showing_type: args.session_showing_type,
                info_compound: args.info_compound,
                theater_name: args.theater_name,
                is_u22: args.is_u22,
                session_date: args.session_date,
                movie_format: args.movie_format,
                theater_cinema: args.theater_cinema,
                customer_id: args.customer_id.to_string(),
                theater_id: args.theater_id,
                u_token: args.u_token,
            })
            .await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}

pub struct BookOrderTool {
    gateway: Arc<Gateway>,
}

impl BookOrderTool {
    pub fn new(gateway: Arc<Gateway>) -> Self {
        Self { gateway }
    }
}

#[derive(Debug, Deserialize)]
struct BookOrderArgs {
    cart_id: String,
    payment_method: String,
    #[serde(default)]
    info_compound: InfoCompound,
    u_token: String,
}

#[async_trait]
impl McpTool for BookOrderTool {
    fn name(&self) -> &str {
        "book_order_by_compound"
    }

    fn description(&self) -> &str {
        "Book a cart with compound payment info; for VNPay the result includes the payment URL"
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "cart_id": {"type": "string", "description": "Cart id from add_tickets"},
                "payment_method": {"type": "string", "description": "Payment method code, e.g. \"vnpay\""},
                "info_compound": info_compound_schema(),
                "u_token": {"type": "string", "description": "Access token from login"},
            },
            "required": ["cart_id", "payment_method", "u_token"],
            "additionalProperties": false
        })
    }

    async fn execute(&self, params: Value) -> Result<ToolResult, ToolError> {
        let args: BookOrderArgs = parse_args(params)?;
        let response = self
            .gateway
            .book_order(&BookOrderRequest {
                cart_id: args.cart_id,
                payment_method: args.payment_method,
                info_compound: args.info_compound,
                u_token: args.u_token,
            })
            .await?;
        Ok(ToolResult::ok(json_content(&response)))
    }
}
