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

//! Cart, concession, and booking records.
//!
//! Ticket payloads are constructed by the caller and forwarded as-is; the
//! gateway's obligation is field-name and encoding fidelity, not business
//! validation. The ticket request keeps the upstream's PascalCase field
//! names on the wire.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One selected seat inside a ticket request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatPick {
    /// Row label, e.g. "H".
    pub label: String,
    /// Seat area number/sequence, e.g. "00900701".
    pub number: String,
    pub col: i64,
    pub row: i64,
    pub id: i64,
}

/// Caller-built ticket line, serialized with the upstream's exact casing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketRequest {
    #[serde(rename = "TicketTypeCode")]
    pub ticket_type_code: String,
    #[serde(rename = "Qty")]
    pub qty: i64,
    #[serde(rename = "PriceInCents")]
    pub price_in_cents: String,
    #[serde(rename = "OptionalAreaCatSequence")]
    pub optional_area_cat_sequence: String,
    #[serde(rename = "OptionalAreaCatCode")]
    pub optional_area_cat_code: i64,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "TTypeCode")]
    pub ttype_code: String,
    pub total: i64,
    pub combo: i64,
    #[serde(rename = "Seat")]
    pub seat: Vec<SeatPick>,
}

/// Compound payment info forwarded into cart and booking calls.
///
/// Fields default to their upstream "empty" encodings for construction
/// convenience; they are still sent explicitly on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfoCompound {
    #[serde(default)]
    pub info_admission_cards: String,
    #[serde(default)]
    pub info_discounts: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub info_vouchers: Vec<serde_json::Value>,
    #[serde(default)]
    pub info_points: String,
    #[serde(default)]
    pub info_gift_cards: String,
    #[serde(default)]
    pub info_gift_cards_new: String,
    #[serde(default)]
    pub info_combo: serde_json::Map<String, serde_json::Value>,
    #[serde(default)]
    pub info_partner_ship: String,
}

/// Concession combo offered for a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcessionItem {
    pub id: String,
    pub name: String,
    pub short_desc: String,
    pub desc: String,
    pub icon: String,
    pub background: String,
    pub price: i64,
    pub qty: i64,
    pub o_price: i64,
    pub ticket: i64,
    pub tprice: i64,
    #[serde(rename = "type")]
    pub kind: i64,
    pub remaining_concession: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcessionData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
    pub concession: Vec<ConcessionItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConcessionResponse {
    pub data: ConcessionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerPaymentMethod {
    pub code: String,
    pub payment_method: String,
    pub name: String,
    pub require_input_code: bool,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub partner_code: String,
    pub allow_card: String,
    pub require_input_code: bool,
    pub payment_method: Vec<PartnerPaymentMethod>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerShip {
    pub id: String,
    pub name: String,
    pub items: Vec<PartnerItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub name: String,
    pub icon: String,
    pub sort: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraDataTicket {
    pub price: String,
    pub qty: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraDataConcession {
    #[serde(rename = "type")]
    pub kind: String,
    pub price: i64,
    pub qty: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraData {
    pub is_discounted: bool,
    pub site_code: String,
    pub site_name: String,
    pub screen_name: String,
    pub screen_code: String,
    pub session_time: String,
    pub session_date: String,
    pub movie_name: String,
    pub movie_format: String,
    pub ticket: HashMap<String, ExtraDataTicket>,
    pub concession: HashMap<String, ExtraDataConcession>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoPayment {
    pub marketing_promo: Vec<serde_json::Value>,
    pub info_partner_ship: Vec<PartnerShip>,
    pub info_payment_gateway: HashMap<String, String>,
}

/// Result of adding tickets to a cart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTicketResponse {
    pub data: HashMap<String, serde_json::Value>,
    pub cart_id: String,
    pub billing: Vec<serde_json::Value>,
    pub info_payment: InfoPayment,
    pub extra_data: ExtraData,
    pub payment_methods: Vec<PaymentMethod>,
    pub zalopay: String,
    pub airpay: String,
    pub max_percent_point: i64,
}

/// VNPay redirect details, present when paying via VNPay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VnpayInfo {
    pub url: String,
    #[serde(rename = "Tmn_code")]
    pub tmn_code: String,
}

/// Result of booking an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookOrderResponse {
    pub data: HashMap<String, serde_json::Value>,
    pub order_id: String,
    pub payment_method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info_vnpay: Option<VnpayInfo>,
    pub is_gerp: bool,
}
