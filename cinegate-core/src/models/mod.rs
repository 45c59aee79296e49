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

//! Upstream record types, one family per operation.
//!
//! Every type here is a flat, externally defined shape decoded from the
//! upstream JSON on each call. Required fields are plain typed fields and
//! fail the decode when missing or mistyped; optional fields are `Option`
//! and are never defaulted, because absence carries meaning (a seat slot
//! with no fields is not a sellable seat). Unknown upstream fields are
//! ignored for forward compatibility.
//!
//! The upstream reuses concept names across endpoints with diverging
//! shapes (two cinema records, two schedule trees). Those stay separate
//! named types per endpoint; they are not guaranteed compatible and are
//! never unified.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod envelope;
pub mod schedule;
pub mod seatmap;

pub use auth::{LoginData, LoginResponse, MemberCard};
pub use cart::{
    AddTicketResponse, BookOrderResponse, ConcessionData, ConcessionItem, ConcessionResponse,
    ExtraData, ExtraDataConcession, ExtraDataTicket, InfoCompound, InfoPayment, PartnerItem,
    PartnerPaymentMethod, PartnerShip, PaymentMethod, SeatPick, TicketRequest, VnpayInfo,
};
pub use catalog::{CinemaListResponse, CinemaSite, CityGroup, MovieItem, MovieListResponse, Special};
pub use envelope::{ApiError, ErrorDetail, IdValue};
pub use schedule::{
    CinemaSchedule, CinemaScheduleResponse, Language, Location, MovieSchedule,
    MovieScheduleResponse, ScheduleCinema, ScheduledMovie, Session,
};
pub use seatmap::{Seat, SeatMapResponse, SeatRow};
