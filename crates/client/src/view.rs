// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::GuestbookClient;
use types::api::v1::rsvp::{PostRsvpBody, RsvpResource};
use types::core::RsvpStatus;

/// The RSVP form as filled in by a guest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpForm {
    pub name: String,
    pub message: String,
    pub status: RsvpStatus,
}

impl RsvpForm {
    fn to_body(&self) -> PostRsvpBody {
        PostRsvpBody::new(self.name.clone(), self.message.clone(), self.status)
    }
}

/// State of the guestbook section of an invitation page
///
/// Failed requests are logged and never surface to the caller, the view keeps showing
/// whatever it loaded last.
#[derive(Debug, Clone)]
pub struct GuestbookView {
    client: GuestbookClient,

    /// All wishes, newest first
    pub wishes: Vec<RsvpResource>,
    /// Number of attending guests
    pub hadir: u64,
    /// Number of guests not attending
    pub tidak_hadir: u64,

    pub form: RsvpForm,
}

impl GuestbookView {
    pub fn new(client: GuestbookClient) -> Self {
        Self {
            client,
            wishes: Vec::new(),
            hadir: 0,
            tidak_hadir: 0,
            form: RsvpForm::default(),
        }
    }

    /// Reloads the wishes and counters
    pub async fn refresh(&mut self) {
        match self.client.list_rsvps().await {
            Ok(response) => {
                self.wishes = response.wishes;
                self.hadir = response.hadir;
                self.tidak_hadir = response.tidak_hadir;
            }
            Err(e) => log::error!("Failed to load guestbook, {}", e),
        }
    }

    /// Sends the form, resets it and reloads the guestbook
    ///
    /// The form is reset even if sending failed.
    pub async fn submit(&mut self) {
        let body = self.form.to_body();

        if let Err(e) = self.client.create_rsvp(&body).await {
            log::error!("Failed to submit RSVP, {}", e);
        }

        self.form = RsvpForm::default();

        self.refresh().await;
    }
}
