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

//! Request signature generation.
//!
//! Mutating upstream calls (login, seat map, booking) carry a `signature`
//! form field: the base64-encoded HMAC-SHA256 of the device identifier
//! followed by a call-specific message, keyed with the shared secret.
//!
//! The message is a plain concatenation of call-specific identifiers with
//! no delimiter, and the concatenation order per call site is fixed by the
//! upstream API (e.g. `email + password` for login, `cart_id +
//! payment_method` for booking). The device identifier always comes first;
//! swapping the order produces a signature upstream rejects.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the upstream request signature for `message`.
///
/// `signature = base64(HMAC-SHA256(key = secret_key, msg = device_id || message))`
pub fn sign(device_id: &str, secret_key: &str, message: &str) -> String {
    // new_from_slice only fails for unusable key lengths, which cannot
    // happen for HMAC (any length is valid).
    let mut mac = HmacSha256::new_from_slice(secret_key.as_bytes())
        .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length"));
    mac.update(device_id.as_bytes());
    mac.update(message.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}
