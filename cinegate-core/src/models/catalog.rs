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

//! Catalog records: the cinema list and the currently-showing movie list.

use serde::{Deserialize, Serialize};

/// Special offer attached to a cinema site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Special {
    pub title: String,
    pub id: i64,
    pub code: String,
    pub small_image: String,
    pub main_image: String,
}

/// Cinema record as returned by the cinema-list endpoint.
///
/// Distinct from [`super::schedule::ScheduleCinema`]: the list endpoint
/// carries address and specials, the schedule endpoints do not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaSite {
    pub id: String,
    pub code: String,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub address: String,
    pub is_gerp: bool,
    pub specials: Vec<Special>,
}

/// Cinemas grouped by city.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityGroup {
    pub name: String,
    pub cinemas: Vec<CinemaSite>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaListResponse {
    pub data: Vec<CityGroup>,
}

/// Movie record from the sneak-show listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieItem {
    pub id: String,
    pub sku: String,
    pub category_id: i64,
    pub category: String,
    pub name: String,
    pub thumbnail: String,
    pub movie_trailer: Option<String>,
    pub movie_event: String,
    pub rating_code: String,
    pub rating_icon: String,
    pub codes: String,
    pub is_booking: bool,
    pub is_sneakshow: bool,
    pub is_new: bool,
    pub position: i64,
    pub movie_endtime: i64,
    pub release_date: Option<String>,
    pub is_gerp: bool,
    pub showing_date: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub data: Vec<MovieItem>,
}
