// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use super::{parse_json_response, Result};
use crate::GuestbookClient;
use types::api::v1::rsvp::{GetRsvpsResponse, PostRsvpBody, PostRsvpResponse};

impl GuestbookClient {
    /// Calls *GET /api/rsvp*
    pub async fn list_rsvps(&self) -> Result<GetRsvpsResponse> {
        let url = self.url("/api/rsvp")?;
        let response = self.http_client.get(url).send().await?;

        parse_json_response(response).await
    }

    /// Calls *POST /api/rsvp*
    pub async fn create_rsvp(&self, body: &PostRsvpBody) -> Result<PostRsvpResponse> {
        let url = self.url("/api/rsvp")?;
        let response = self.http_client.post(url).json(body).send().await?;

        parse_json_response(response).await
    }
}
