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

//! Form body construction.
//!
//! The upstream parses POST bodies by exact form-field name, including
//! bracket notation for nested structure (`session[id]`, `theater[id]`).
//! Field names here frequently differ from the parameter names
//! (`theater_name` becomes `theater[theatre]`), and the mapping must be
//! reproduced field for field. Builders are pure functions returning
//! ordered key/value pairs so the exact wire mapping is unit testable.
//!
//! Nested values have no native form encoding: the `ticket` list is
//! JSON-encoded into its single field, and `info_compound` is flattened
//! into `info_compound[<field>]` keys with map/list members JSON-encoded.
//! Dates pass through exactly as supplied; the upstream mandates different
//! formats per endpoint (DDMMYYYY, YYYYMMDD, DD/MM/YYYY) and the gateway
//! never normalizes them.

use cinegate_core::models::{InfoCompound, TicketRequest};
use cinegate_core::{sign, GatewayConfig};

/// Ordered form fields.
pub type Form = Vec<(String, String)>;

fn push(form: &mut Form, key: &str, value: impl Into<String>) {
    form.push((key.to_string(), value.into()));
}

/// Parameters for the seat-map operation.
#[derive(Debug, Clone)]
pub struct SeatMapRequest {
    pub cinema_id: String,
    pub customer_id: String,
    pub u_token: String,
    /// Session date, format YYYYMMDD.
    pub date: String,
    pub session_id: String,
}

/// Parameters for the concession-info operation.
#[derive(Debug, Clone)]
pub struct ConcessionRequest {
    pub session_id: String,
    pub product: String,
    pub ticket: Vec<TicketRequest>,
    pub customer_id: String,
    pub theater_id: String,
    /// Session date, format DD/MM/YYYY.
    pub session_date: String,
}

/// Parameters for the add-tickets operation.
#[derive(Debug, Clone)]
pub struct AddTicketsRequest {
    pub session_id: String,
    /// Session time, HH:MM.
    pub session_time: String,
    pub product: String,
    pub ticket: Vec<TicketRequest>,
    pub session_showing_type: String,
    pub info_compound: InfoCompound,
    /// Full theater name, sent as `theater[theatre]`.
    pub theater_name: String,
    pub is_u22: bool,
    /// Session date, format DD/MM/YYYY.
    pub session_date: String,
    pub movie_format: String,
    /// Cinema room name, sent as `theater[cinema]`.
    pub theater_cinema: String,
    pub customer_id: String,
    pub theater_id: String,
    pub u_token: String,
}

/// Parameters for the book-order operation.
#[derive(Debug, Clone)]
pub struct BookOrderRequest {
    pub cart_id: String,
    pub payment_method: String,
    pub info_compound: InfoCompound,
    pub u_token: String,
}

/// Login body. Signature message is `email + password`, in that order.
pub fn login_form(config: &GatewayConfig, email: &str, password: &str) -> Form {
    let signature = sign(
        &config.device_id,
        &config.secret_key,
        &format!("{email}{password}"),
    );
    let mut form = Form::new();
    push(&mut form, "password", password);
    push(&mut form, "auto", "0");
    push(&mut form, "signature", signature);
    push(&mut form, "email", email);
    form
}

/// Seat-map body. Signature message is `cinema_id + session_id +
/// customer_id`, in that order.
pub fn seatmap_form(config: &GatewayConfig, req: &SeatMapRequest) -> Form {
    let signature = sign(
        &config.device_id,
        &config.secret_key,
        &format!("{}{}{}", req.cinema_id, req.session_id, req.customer_id),
    );
    let mut form = Form::new();
    push(&mut form, "cinema_id", req.cinema_id.as_str());
    push(&mut form, "customer_id", req.customer_id.as_str());
    push(&mut form, "date", req.date.as_str());
    push(&mut form, "session_id", req.session_id.as_str());
    push(&mut form, "signature", signature);
    form
}

/// Concession-info body. Unauthenticated, no signature.
pub fn concession_form(req: &ConcessionRequest) -> Form {
    let mut form = Form::new();
    push(&mut form, "session[id]", req.session_id.as_str());
    push(&mut form, "product", req.product.as_str());
    push(&mut form, "ticket", encode_json(&req.ticket));
    push(&mut form, "customer_id", req.customer_id.as_str());
    push(&mut form, "theater[id]", req.theater_id.as_str());
    push(&mut form, "session[date]", req.session_date.as_str());
    form
}

/// Add-tickets body. `is_u22` is coerced to `0`/`1` on the wire.
pub fn add_tickets_form(req: &AddTicketsRequest) -> Form {
    let mut form = Form::new();
    push(&mut form, "session[time]", req.session_time.as_str());
    push(&mut form, "product", req.product.as_str());
    push(&mut form, "ticket", encode_json(&req.ticket));
    push(
        &mut form,
        "session[showing_type]",
        req.session_showing_type.as_str(),
    );
    append_info_compound(&mut form, &req.info_compound);
    push(&mut form, "theater[theatre]", req.theater_name.as_str());
    push(&mut form, "is_u22", if req.is_u22 { "1" } else { "0" });
    push(&mut form, "session[date]", req.session_date.as_str());
    push(&mut form, "session[id]", req.session_id.as_str());
    push(&mut form, "movie_format", req.movie_format.as_str());
    push(&mut form, "theater[cinema]", req.theater_cinema.as_str());
    push(&mut form, "customer_id", req.customer_id.as_str());
    push(&mut form, "theater[id]", req.theater_id.as_str());
    form
}

/// Book-order body. Signature message is `cart_id + payment_method`, in
/// that order.
pub fn book_order_form(config: &GatewayConfig, req: &BookOrderRequest) -> Form {
    let signature = sign(
        &config.device_id,
        &config.secret_key,
        &format!("{}{}", req.cart_id, req.payment_method),
    );
    let mut form = Form::new();
    push(&mut form, "cart_id", req.cart_id.as_str());
    push(&mut form, "payment[method]", req.payment_method.as_str());
    push(&mut form, "signature", signature);
    append_info_compound(&mut form, &req.info_compound);
    form
}

/// Flatten the compound info structure into `info_compound[<field>]` keys.
/// Map- and list-valued members are JSON-encoded into their field.
fn append_info_compound(form: &mut Form, info: &InfoCompound) {
    push(
        form,
        "info_compound[info_admission_cards]",
        info.info_admission_cards.as_str(),
    );
    push(
        form,
        "info_compound[info_discounts]",
        encode_json(&info.info_discounts),
    );
    push(
        form,
        "info_compound[info_vouchers]",
        encode_json(&info.info_vouchers),
    );
    push(form, "info_compound[info_points]", info.info_points.as_str());
    push(
        form,
        "info_compound[info_gift_cards]",
        info.info_gift_cards.as_str(),
    );
    push(
        form,
        "info_compound[info_gift_cards_new]",
        info.info_gift_cards_new.as_str(),
    );
    push(form, "info_compound[info_combo]", encode_json(&info.info_combo));
    push(
        form,
        "info_compound[info_partner_ship]",
        info.info_partner_ship.as_str(),
    );
}

fn encode_json<T: serde::Serialize>(value: &T) -> String {
    // Only plain in-memory structures with string keys pass through here.
    serde_json::to_string(value).expect("form value serialization cannot fail")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cinegate_core::sign;
    use serde_json::json;

    fn test_config() -> GatewayConfig {
        GatewayConfig {
            base_url: "https://upstream.test/en".to_string(),
            user_agent: "test-agent".to_string(),
            device_id: "test-device/1.0".to_string(),
            secret_key: "test-secret".to_string(),
            request_timeout_secs: 5,
        }
    }

    fn field<'a>(form: &'a Form, key: &str) -> &'a str {
        &form
            .iter()
            .find(|(k, _)| k == key)
            .unwrap_or_else(|| panic!("missing field {key}"))
            .1
    }

    #[test]
    fn login_signs_email_then_password() {
        let config = test_config();
        let form = login_form(&config, "alice@example.com", "passw0rd");
        assert_eq!(field(&form, "auto"), "0");
        assert_eq!(field(&form, "email"), "alice@example.com");
        assert_eq!(field(&form, "password"), "passw0rd");
        assert_eq!(
            field(&form, "signature"),
            sign("test-device/1.0", "test-secret", "alice@example.compassw0rd")
        );
    }

    #[test]
    fn seatmap_signature_order_is_cinema_session_customer() {
        let config = test_config();
        let req = SeatMapRequest {
            cinema_id: "0136".to_string(),
            customer_id: "987".to_string(),
            u_token: "tok".to_string(),
            date: "20250314".to_string(),
            session_id: "12345".to_string(),
        };
        let form = seatmap_form(&config, &req);
        assert_eq!(field(&form, "date"), "20250314");
        assert_eq!(
            field(&form, "signature"),
            sign("test-device/1.0", "test-secret", "013612345987")
        );
    }

    #[test]
    fn book_order_signs_cart_then_payment_method() {
        let config = test_config();
        let req = BookOrderRequest {
            cart_id: "abc".to_string(),
            payment_method: "vnpay".to_string(),
            info_compound: InfoCompound::default(),
            u_token: "tok".to_string(),
        };
        let form = book_order_form(&config, &req);
        assert_eq!(field(&form, "cart_id"), "abc");
        assert_eq!(field(&form, "payment[method]"), "vnpay");
        // Literal concatenation "abcvnpay", device prefix applied by sign().
        assert_eq!(
            field(&form, "signature"),
            sign("test-device/1.0", "test-secret", "abcvnpay")
        );
    }

    #[test]
    fn concession_uses_bracketed_field_names() {
        let req = ConcessionRequest {
            session_id: "12345".to_string(),
            product: "5211".to_string(),
            ticket: vec![],
            customer_id: "987".to_string(),
            theater_id: "0136".to_string(),
            session_date: "14/03/2025".to_string(),
        };
        let form = concession_form(&req);
        assert_eq!(field(&form, "session[id]"), "12345");
        assert_eq!(field(&form, "theater[id]"), "0136");
        assert_eq!(field(&form, "session[date]"), "14/03/2025");
        assert_eq!(field(&form, "ticket"), "[]");
    }

    #[test]
    fn add_tickets_maps_internal_names_to_wire_names() {
        let req = AddTicketsRequest {
            session_id: "12345".to_string(),
            session_time: "14:00".to_string(),
            product: "5211".to_string(),
            ticket: vec![],
            session_showing_type: "03".to_string(),
            info_compound: InfoCompound::default(),
            theater_name: "CGV Vincom Royal City".to_string(),
            is_u22: true,
            session_date: "14/03/2025".to_string(),
            movie_format: "2D Phu De Viet".to_string(),
            theater_cinema: "Cinema 5".to_string(),
            customer_id: "987".to_string(),
            theater_id: "0136".to_string(),
            u_token: "tok".to_string(),
        };
        let form = add_tickets_form(&req);
        assert_eq!(field(&form, "session[time]"), "14:00");
        assert_eq!(field(&form, "session[showing_type]"), "03");
        assert_eq!(field(&form, "theater[theatre]"), "CGV Vincom Royal City");
        assert_eq!(field(&form, "theater[cinema]"), "Cinema 5");
        assert_eq!(field(&form, "theater[id]"), "0136");
        assert_eq!(field(&form, "is_u22"), "1");
        // No un-bracketed leakage of internal parameter names.
        assert!(!form.iter().any(|(k, _)| k == "theater_name"));
        assert!(!form.iter().any(|(k, _)| k == "session_id"));
    }

    #[test]
    fn is_u22_false_is_zero() {
        let req = AddTicketsRequest {
            session_id: String::new(),
            session_time: String::new(),
            product: String::new(),
            ticket: vec![],
            session_showing_type: String::new(),
            info_compound: InfoCompound::default(),
            theater_name: String::new(),
            is_u22: false,
            session_date: String::new(),
            movie_format: String::new(),
            theater_cinema: String::new(),
            customer_id: String::new(),
            theater_id: String::new(),
            u_token: String::new(),
        };
        assert_eq!(field(&add_tickets_form(&req), "is_u22"), "0");
    }

    #[test]
    fn info_compound_flattens_with_json_members() {
        let mut info = InfoCompound::default();
        info.info_combo.insert("103793".to_string(), json!(1));
        info.info_points = "0".to_string();
        let req = BookOrderRequest {
            cart_id: "abc".to_string(),
            payment_method: "vnpay".to_string(),
            info_compound: info,
            u_token: "tok".to_string(),
        };
        let form = book_order_form(&test_config(), &req);
        assert_eq!(field(&form, "info_compound[info_combo]"), r#"{"103793":1}"#);
        assert_eq!(field(&form, "info_compound[info_vouchers]"), "[]");
        assert_eq!(field(&form, "info_compound[info_discounts]"), "{}");
        assert_eq!(field(&form, "info_compound[info_points]"), "0");
    }

    #[test]
    fn ticket_list_is_json_encoded_with_upstream_casing() {
        use cinegate_core::models::{SeatPick, TicketRequest};
        let req = ConcessionRequest {
            session_id: "1".to_string(),
            product: "2".to_string(),
            ticket: vec![TicketRequest {
                ticket_type_code: "0001".to_string(),
                qty: 1,
                price_in_cents: "85000".to_string(),
                optional_area_cat_sequence: "1".to_string(),
                optional_area_cat_code: 1,
                title: "ADULT".to_string(),
                ttype_code: "0001".to_string(),
                total: 1,
                combo: 0,
                seat: vec![SeatPick {
                    label: "H".to_string(),
                    number: "00900701".to_string(),
                    col: 7,
                    row: 8,
                    id: 1207,
                }],
            }],
            customer_id: "3".to_string(),
            theater_id: "4".to_string(),
            session_date: "14/03/2025".to_string(),
        };
        let encoded = field(&concession_form(&req), "ticket").to_string();
        assert!(encoded.contains(r#""TicketTypeCode":"0001""#), "{encoded}");
        assert!(encoded.contains(r#""Seat":[{"label":"H""#), "{encoded}");
    }
}
