// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use anyhow::Result;
use client::ApiError;
use pretty_assertions::assert_eq;
use serial_test::serial;
use types::api::v1::rsvp::{PostRsvpBody, PostRsvpResponse};
use types::core::RsvpStatus;

mod common;

/// Test basic API functionality
///
/// Submits RSVPs through the HTTP API and reads them back, checking the counters and the
/// order of the listed wishes.
#[actix_rt::test]
#[serial]
#[ignore = "requires a running postgres instance"]
async fn basic_sequence() -> Result<()> {
    common::setup_logging()?;

    // database will clean up when this gets dropped
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let (client, server) = common::run_server(db_ctx.db.clone())?;

    log::info!("listing the empty guestbook...");
    let empty = client.list_rsvps().await?;
    assert!(empty.wishes.is_empty());
    assert_eq!((empty.hadir, empty.tidak_hadir), (0, 0));

    log::info!("submitting a complete RSVP...");
    let body = PostRsvpBody::new("Budi", "Selamat!", RsvpStatus::Attending);
    assert_eq!(client.create_rsvp(&body).await?, PostRsvpResponse::success());

    let list = client.list_rsvps().await?;
    assert_eq!(list.hadir, 1);
    assert_eq!(list.tidak_hadir, 0);
    assert_eq!(list.wishes.len(), 1);
    assert_eq!(list.wishes[0].message, "Selamat!");
    assert_eq!(list.wishes[0].status, RsvpStatus::Attending);
    assert_eq!(list.wishes[0].guest.as_ref().map(|g| g.name.as_str()), Some("Budi"));

    log::info!("submitting without a status...");
    let body = PostRsvpBody {
        name: Some("Sari".into()),
        message: Some("Semoga bahagia".into()),
        status: None,
    };
    client.create_rsvp(&body).await?;

    log::info!("submitting a declined RSVP...");
    let body = PostRsvpBody::new("Andi", "Maaf tidak bisa hadir", RsvpStatus::NotAttending);
    client.create_rsvp(&body).await?;

    let list = client.list_rsvps().await?;
    assert_eq!(list.hadir, 2);
    assert_eq!(list.tidak_hadir, 1);
    assert!(list.hadir + list.tidak_hadir <= list.wishes.len() as u64);

    let names: Vec<_> = list
        .wishes
        .iter()
        .filter_map(|wish| wish.name.as_deref())
        .collect();
    assert_eq!(names, ["Andi", "Sari", "Budi"]);
    assert!(list
        .wishes
        .windows(2)
        .all(|pair| pair[0].created_at >= pair[1].created_at));

    log::info!("submitting an incomplete RSVP...");
    let body = PostRsvpBody::new("Rina", "", RsvpStatus::Attending);
    match client.create_rsvp(&body).await {
        Err(ApiError::NonSuccess(e)) => assert_eq!(e.status.as_u16(), 400),
        other => panic!("expected a client error, got {other:?}"),
    }

    let unchanged = client.list_rsvps().await?;
    assert_eq!(unchanged, list);

    server.stop(true).await;

    Ok(())
}
