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

//! Schedule trees.
//!
//! Two endpoint-specific shapes share the session/language leaves:
//! movie schedules nest schedule -> location -> cinema -> language ->
//! session, while cinema schedules nest schedule -> movie -> language ->
//! session. Both are read-only trees; empty branches (a location with zero
//! cinemas, a day with zero sessions) are valid data, not errors.

use super::envelope::IdValue;
use serde::{Deserialize, Serialize};

/// A single showing. `remaining_seats` may be zero; callers treat zero as
/// unavailable, the gateway does not enforce it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub id: i64,
    pub cinema_id: String,
    pub time: String,
    pub cinox_endtime: String,
    pub room: String,
    pub theater: String,
    pub is_booking: bool,
    pub code: String,
    pub remaining_seats: i64,
    pub sub_type: String,
    pub showing_date_time: String,
    pub showing_type: String,
}

/// Language/format grouping of sessions (e.g. subtitled 2D).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    pub name_color: String,
    pub code: String,
    pub cinema_type: String,
    pub service_link: String,
    pub sessions: Vec<Session>,
}

/// Cinema node inside a movie-schedule tree. The id arrives as either a
/// string or a number depending on the upstream code path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleCinema {
    pub id: IdValue,
    pub name: String,
    pub latitude: String,
    pub longitude: String,
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub city_id: String,
    pub name: String,
    pub cinemas: Vec<ScheduleCinema>,
}

/// One day of schedules for a movie across locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSchedule {
    pub date: String,
    pub locations: Vec<Location>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieScheduleResponse {
    pub data: Vec<MovieSchedule>,
}

/// Movie node inside a cinema-schedule tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledMovie {
    pub id: String,
    pub thumbnail: String,
    pub sku: String,
    pub name: String,
    pub movie_endtime: i64,
    pub rating_code: String,
    pub rating_icon: String,
    pub languages: Vec<Language>,
}

/// One day of schedules at a cinema across movies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaSchedule {
    pub date: String,
    pub movies: Vec<ScheduledMovie>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CinemaScheduleResponse {
    pub data: Vec<CinemaSchedule>,
}
