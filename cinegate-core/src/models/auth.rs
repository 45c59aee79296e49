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

//! Login records.
//!
//! The login result carries the access token and customer identifiers that
//! the caller must thread into every later authenticated call. Nothing is
//! persisted or refreshed here; token lifetime is entirely the caller's
//! problem.

use super::envelope::ApiError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberCard {
    pub card_name: String,
    pub card_number: String,
    pub card_type: String,
    pub card_info: String,
    pub is_clicked: i64,
    pub remaining_ticket: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginData {
    pub access_token: String,
    pub entity_id: String,
    pub member_id: String,
    pub member_card_number: String,
    pub member_level: String,
    pub total_spend_in_year: i64,
    pub total_spend_last_year: String,
    pub current_year: String,
    pub reference_site: Option<String>,
    pub fav_region_id: String,
    pub info_available_point: i64,
    pub info_expiring_point: i64,
    pub info_expected_point: i64,
    pub info_total_saving_point: i64,
    pub info_total_spend_point: i64,
    pub usersessionid: String,
    pub fullname: String,
    pub telephone: String,
    pub email: String,
    pub referral_code: String,
    pub gender: String,
    pub info_grades: Vec<serde_json::Value>,
    pub avatar: String,
    pub is_u22: i64,
    pub remain_refund: i64,
    pub u22_url: String,
    pub info_member_cards: Vec<MemberCard>,
    pub partnercard_goto: String,
    pub partnercard_title: String,
    pub partnercard_icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<LoginData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ApiError>>,
}
