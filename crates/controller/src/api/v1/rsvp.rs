// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! The guestbook of the invitation
//!
//! Guests leave their name, a message and whether they will attend. All entries are
//! listed publicly together with the number of attending and absent guests.

use super::response::{ApiError, CODE_INVALID_STATUS};
use actix_web::web::{Data, Json};
use actix_web::{get, post};
use database::Db;
use db_storage::rsvps::{NewGuestWithRsvp, Rsvp, RsvpWithGuest};
use types::api::v1::rsvp::{
    GetRsvpsResponse, GuestResource, PostRsvpBody, PostRsvpResponse, RsvpResource,
};
use types::core::AttendanceCounts;
use validator::Validate;

/// API Endpoint *GET /rsvp*
///
/// Returns all guestbook entries, newest first, along with the attendance counts.
#[get("/rsvp")]
pub async fn get_rsvps(db: Data<Db>) -> Result<Json<GetRsvpsResponse>, ApiError> {
    let rsvps = crate::block(move || -> database::Result<Vec<RsvpWithGuest>> {
        let mut conn = db.get_conn()?;

        Rsvp::get_all_with_guest(&mut conn)
    })
    .await??;

    let counts = AttendanceCounts::tally(rsvps.iter().map(|(rsvp, _)| &rsvp.status));

    Ok(Json(GetRsvpsResponse {
        wishes: rsvps.into_iter().map(rsvp_resource).collect(),
        hadir: counts.attending,
        tidak_hadir: counts.not_attending,
    }))
}

/// API Endpoint *POST /rsvp*
///
/// Stores a new guest together with their RSVP. Requires a non-empty `name` and `message`,
/// the `status` falls back to `attending` when omitted.
///
/// The stored entry is not returned, clients fetch it through [`get_rsvps`].
#[post("/rsvp")]
pub async fn post_rsvp(
    db: Data<Db>,
    body: Json<PostRsvpBody>,
) -> Result<Json<PostRsvpResponse>, ApiError> {
    let body = body.into_inner();

    if let Err(e) = body.validate() {
        log::debug!("Rejected incomplete RSVP, {}", e);
        return Err(e.into());
    }

    let status = body.status().map_err(|_| {
        ApiError::bad_request()
            .with_code(CODE_INVALID_STATUS)
            .with_message("Status must be either `attending` or `not_attending`")
    })?;

    let PostRsvpBody {
        name: Some(name),
        message: Some(message),
        ..
    } = body
    else {
        return Err(ApiError::incomplete_data());
    };

    let new_rsvp = NewGuestWithRsvp {
        name,
        status,
        message,
    };

    crate::block(move || -> database::Result<_> {
        let mut conn = db.get_conn()?;

        new_rsvp.insert(&mut conn)
    })
    .await??;

    Ok(Json(PostRsvpResponse::success()))
}

fn rsvp_resource((rsvp, guest): RsvpWithGuest) -> RsvpResource {
    RsvpResource {
        id: rsvp.id,
        guest_id: rsvp.guest_id,
        name: Some(guest.name.clone()),
        message: rsvp.message,
        status: rsvp.status,
        created_at: rsvp.created_at,
        guest: Some(GuestResource {
            id: guest.id,
            name: guest.name,
        }),
    }
}
