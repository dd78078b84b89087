// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Bodies of the `/rsvp` endpoints.

use chrono::{DateTime, Utc};

use crate::{
    core::{GuestId, RsvpId, RsvpStatus},
    imports::*,
};

/// Body of a `POST /rsvp` request
///
/// All fields are optional on the wire so that missing values can be reported
/// as incomplete data instead of a malformed request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct PostRsvpBody {
    /// Name of the guest
    #[validate(required, length(min = 1))]
    pub name: Option<String>,

    /// Congratulatory message of the guest
    #[validate(required, length(min = 1))]
    pub message: Option<String>,

    /// Attendance response, `attending` when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl PostRsvpBody {
    /// Create a complete request body
    pub fn new(name: impl Into<String>, message: impl Into<String>, status: RsvpStatus) -> Self {
        Self {
            name: Some(name.into()),
            message: Some(message.into()),
            status: Some(status.to_string()),
        }
    }

    /// The requested attendance status
    ///
    /// Falls back to [`RsvpStatus::Attending`] if no status was given and fails for
    /// values that are no known status.
    pub fn status(&self) -> Result<RsvpStatus, strum::ParseError> {
        self.status
            .as_deref()
            .map_or(Ok(RsvpStatus::default()), |status| status.parse())
    }
}

/// Body of a successful `POST /rsvp` response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct PostRsvpResponse {
    /// Always `true` for a stored RSVP
    pub success: bool,
}

impl PostRsvpResponse {
    /// The acknowledgment for a stored RSVP
    pub const fn success() -> Self {
        Self { success: true }
    }
}

/// Public part of a guest, embedded into each guestbook entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GuestResource {
    /// Id of the guest
    pub id: GuestId,
    /// Name of the guest
    pub name: String,
}

/// A single guestbook entry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RsvpResource {
    /// Id of the RSVP
    pub id: RsvpId,
    /// Id of the guest who submitted the RSVP
    pub guest_id: GuestId,
    /// Name of the guest who submitted the RSVP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Congratulatory message
    pub message: String,
    /// Attendance response
    pub status: RsvpStatus,
    /// Time the RSVP was stored
    pub created_at: DateTime<Utc>,
    /// The guest who submitted the RSVP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest: Option<GuestResource>,
}

/// Body of a `GET /rsvp` response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetRsvpsResponse {
    /// All entries of the guestbook, newest first
    pub wishes: Vec<RsvpResource>,
    /// Number of attending guests
    pub hadir: u64,
    /// Number of guests that will not attend
    pub tidak_hadir: u64,
}
