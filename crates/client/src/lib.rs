// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! HTTP client for the wedding guestbook API
//!
//! [`GuestbookClient`] performs the raw API calls, [`GuestbookView`] holds the state an
//! invitation page renders: the list of wishes, the attendance counters and the RSVP form.

use reqwest::Client;
use url::Url;

pub mod api;
mod view;

pub use api::v1::{ApiError, HttpError, Result};
pub use view::{GuestbookView, RsvpForm};

/// A client of the guestbook service
#[derive(Debug, Clone)]
pub struct GuestbookClient {
    /// Reusable reqwest connection pool
    pub http_client: Client,
    /// Base URL of the guestbook service, e.g. `http://localhost:8080`
    pub base_url: Url,
}

impl GuestbookClient {
    /// Creates a new client for the service reachable at `base_url`
    pub fn new(base_url: Url) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a new client which uses the given reqwest client for its requests
    pub fn with_client(http_client: Client, base_url: Url) -> Self {
        Self {
            http_client,
            base_url,
        }
    }
}
