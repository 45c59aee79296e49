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

//! The upstream HTTP gateway.
//!
//! One method per exposed operation; each issues exactly one outbound
//! request and awaits exactly one response. Every request carries the
//! configured User-Agent and `X-Device` headers; authenticated operations
//! add the caller-supplied token as `U-Token`. POST bodies are form
//! URL-encoded. The connection pool inside `reqwest::Client` is a
//! performance detail only; no correctness depends on it.

use crate::decode::decode;
use crate::request::{
    add_tickets_form, book_order_form, concession_form, login_form, seatmap_form,
    AddTicketsRequest, BookOrderRequest, ConcessionRequest, Form, SeatMapRequest,
};
use cinegate_core::models::{
    AddTicketResponse, BookOrderResponse, CinemaListResponse, CinemaScheduleResponse,
    ConcessionResponse, LoginResponse, MovieListResponse, MovieScheduleResponse, SeatMapResponse,
};
use cinegate_core::{GatewayConfig, GatewayError};
use reqwest::header::{CONTENT_TYPE, USER_AGENT};
use std::time::Duration;
use tracing::debug;

const X_DEVICE: &str = "X-Device";
const U_TOKEN: &str = "U-Token";
const FORM_URLENCODED: &str = "application/x-www-form-urlencoded";

/// Gateway to the upstream cinema API.
pub struct Gateway {
    http: reqwest::Client,
    config: GatewayConfig,
}

impl Gateway {
    /// Build a gateway from validated configuration.
    pub fn new(config: GatewayConfig) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url, path)
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        debug!(path, "GET upstream");
        self.http
            .get(self.url(path))
            .header(USER_AGENT, &self.config.user_agent)
            .header(X_DEVICE, &self.config.device_id)
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        debug!(path, "POST upstream");
        self.http
            .post(self.url(path))
            .header(USER_AGENT, &self.config.user_agent)
            .header(X_DEVICE, &self.config.device_id)
            .header(CONTENT_TYPE, FORM_URLENCODED)
    }

    async fn fetch<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        request: reqwest::RequestBuilder,
    ) -> Result<T, GatewayError> {
        let body = request.send().await?.text().await?;
        decode(operation, &body)
    }

    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        operation: &'static str,
        path: &str,
        form: Form,
        u_token: Option<&str>,
    ) -> Result<T, GatewayError> {
        let mut request = self.post(path).form(&form);
        if let Some(token) = u_token {
            request = request.header(U_TOKEN, token);
        }
        let body = request.send().await?.text().await?;
        decode(operation, &body)
    }

    /// List cinema locations grouped by city.
    pub async fn cinema_list(&self) -> Result<CinemaListResponse, GatewayError> {
        self.fetch("get_cinema_list", self.get("/api/cinema/list")).await
    }

    /// List movies currently showing.
    pub async fn movie_list(&self) -> Result<MovieListResponse, GatewayError> {
        self.fetch("get_movie_list", self.get("/api/movie/listSneakShow"))
            .await
    }

    /// Schedules for one movie on one date. `date` is DDMMYYYY, passed
    /// through verbatim.
    pub async fn movie_schedules(
        &self,
        sku: &str,
        date: &str,
    ) -> Result<MovieScheduleResponse, GatewayError> {
        let path = format!("/cinemas/catalog_mobile/movieSchedules/sku/{sku}/date/{date}");
        self.fetch("get_movie_schedules", self.get(&path)).await
    }

    /// Schedules for one cinema on one date. `date` is DDMMYYYY.
    pub async fn cinema_schedules(
        &self,
        cinema_id: &str,
        date: &str,
    ) -> Result<CinemaScheduleResponse, GatewayError> {
        let path = format!("/cinemas/catalog_mobile/siteschedules/id/{cinema_id}/date/{date}");
        self.fetch("get_cinema_schedules", self.get(&path)).await
    }

    /// Authenticate a customer. The returned token is the caller's to
    /// carry; nothing is stored here.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, GatewayError> {
        let form = login_form(&self.config, email, password);
        self.post_form("login", "/api/customer/login", form, None).await
    }

    /// Seat map for a session. Authenticated; `date` is YYYYMMDD.
    pub async fn seat_map(&self, req: &SeatMapRequest) -> Result<SeatMapResponse, GatewayError> {
        let form = seatmap_form(&self.config, req);
        self.post_form("get_seatmap", "/api/ticket/seatmap", form, Some(&req.u_token))
            .await
    }

    /// Concession combos available for a session.
    pub async fn concession_info(
        &self,
        req: &ConcessionRequest,
    ) -> Result<ConcessionResponse, GatewayError> {
        let form = concession_form(req);
        self.post_form("get_info_concession", "/api/ticket/getInfoConcession", form, None)
            .await
    }

    /// Add tickets to a cart. Authenticated.
    pub async fn add_tickets(
        &self,
        req: &AddTicketsRequest,
    ) -> Result<AddTicketResponse, GatewayError> {
        let form = add_tickets_form(req);
        self.post_form("add_tickets", "/api/ticket/addTickets", form, Some(&req.u_token))
            .await
    }

    /// Book a cart with compound payment info. Authenticated.
    pub async fn book_order(
        &self,
        req: &BookOrderRequest,
    ) -> Result<BookOrderResponse, GatewayError> {
        let form = book_order_form(&self.config, req);
        self.post_form(
            "book_order_by_compound",
            "/api/ticket/bookOrderByCompound",
            form,
            Some(&req.u_token),
        )
        .await
    }

    /// Customer profile. Authenticated; upstream shape is undeclared, so
    /// the payload is returned as raw JSON.
    pub async fn profile(
        &self,
        profile_id: &str,
        access_token: &str,
    ) -> Result<serde_json::Value, GatewayError> {
        let path = format!("/api/customer/profile/id/{profile_id}");
        let request = self.get(&path).header(U_TOKEN, access_token);
        self.fetch("get_profile", request).await
    }
}
