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

//! Seat map records.
//!
//! Every seat field is optional: the upstream omits fields entirely for
//! non-sellable slots (aisles, gaps), and that absence is the signal
//! consumers use to skip the slot. Nothing here may be defaulted to an
//! empty string or zero.

use super::envelope::ApiError;
use serde::{Deserialize, Serialize};

/// One slot in a seat row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seat_type_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areacode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areanumber: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areacat_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_type_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ttype_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub areacat_intseq: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub combo: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub couple_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_price: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_u22: Option<i64>,
}

impl Seat {
    /// Whether this slot is a real seat. The upstream marks aisles and gaps
    /// by omitting the identifier entirely.
    pub fn is_sellable_slot(&self) -> bool {
        self.id.is_some()
    }
}

/// A labeled row of seat slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatRow {
    pub label: String,
    pub seats: Vec<Seat>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeatMapResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SeatRow>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,
}
