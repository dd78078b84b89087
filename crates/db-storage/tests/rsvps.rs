// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use diesel::dsl::sql;
use diesel::sql_types::BigInt;
use diesel::RunQueryDsl;
use guestbook_db_storage::guests::Guest;
use guestbook_db_storage::rsvps::{NewGuestWithRsvp, NewRsvp, Rsvp, RsvpWithGuest};
use pretty_assertions::assert_eq;
use serial_test::serial;
use types::core::{AttendanceCounts, RsvpStatus};

#[tokio::test]
#[serial]
#[ignore = "requires a running postgres instance"]
async fn insert_creates_guest_and_rsvp() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    let (rsvp, guest) = db_ctx
        .create_test_rsvp("Budi", "Selamat!", RsvpStatus::Attending)
        .unwrap();

    assert_eq!(guest.name, "Budi");
    assert_eq!(rsvp.guest_id, guest.id);
    assert_eq!(rsvp.message, "Selamat!");
    assert_eq!(rsvp.status, RsvpStatus::Attending);

    let stored_guest = Guest::get(&mut conn, guest.id).unwrap();
    assert_eq!(stored_guest.name, "Budi");

    let stored_rsvp = Rsvp::get_for_guest(&mut conn, guest.id).unwrap();
    assert_eq!(stored_rsvp.id, rsvp.id);
    assert_eq!(stored_rsvp.created_at, rsvp.created_at);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running postgres instance"]
async fn list_is_newest_first_and_stable() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    db_ctx
        .create_test_rsvp("Ani", "Bahagia selalu", RsvpStatus::Attending)
        .unwrap();
    db_ctx
        .create_test_rsvp("Citra", "Maaf tidak bisa datang", RsvpStatus::NotAttending)
        .unwrap();
    db_ctx
        .create_test_rsvp("Dewi", "Selamat menempuh hidup baru", RsvpStatus::Attending)
        .unwrap();

    let all = Rsvp::get_all_with_guest(&mut conn).unwrap();
    let names: Vec<_> = all.iter().map(|(_, guest)| guest.name.as_str()).collect();
    assert_eq!(names, ["Dewi", "Citra", "Ani"]);

    for pair in all.windows(2) {
        assert!(pair[0].0.created_at >= pair[1].0.created_at);
    }

    let counts = AttendanceCounts::tally(all.iter().map(|(rsvp, _)| &rsvp.status));
    assert_eq!(counts.attending, 2);
    assert_eq!(counts.not_attending, 1);

    let again = Rsvp::get_all_with_guest(&mut conn).unwrap();
    let ids = |list: &[RsvpWithGuest]| list.iter().map(|(rsvp, _)| rsvp.id).collect::<Vec<_>>();
    assert_eq!(ids(&all), ids(&again));
}

#[tokio::test]
#[serial]
#[ignore = "requires a running postgres instance"]
async fn guest_owns_single_rsvp() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    let (_, guest) = db_ctx
        .create_test_rsvp("Eka", "Semoga langgeng", RsvpStatus::Attending)
        .unwrap();

    // A guest owns at most one RSVP
    let result = NewRsvp {
        guest_id: guest.id,
        status: RsvpStatus::NotAttending,
        message: "Second answer".into(),
    }
    .insert(&mut conn);
    assert!(result.is_err());

    assert_eq!(Rsvp::get_all_with_guest(&mut conn).unwrap().len(), 1);
}

#[tokio::test]
#[serial]
#[ignore = "requires a running postgres instance"]
async fn failed_rsvp_insert_discards_guest() {
    let db_ctx = test_util::database::DatabaseContext::new(true).await;
    let mut conn = db_ctx.db.get_conn().unwrap();

    // Make every RSVP insert fail after the guest row was written
    diesel::sql_query(
        "CREATE FUNCTION reject_rsvp() RETURNS trigger AS $$ \
         BEGIN RAISE EXCEPTION 'rsvp rejected'; END; \
         $$ LANGUAGE plpgsql",
    )
    .execute(&mut conn)
    .unwrap();
    diesel::sql_query(
        "CREATE TRIGGER reject_rsvp BEFORE INSERT ON rsvps \
         FOR EACH ROW EXECUTE FUNCTION reject_rsvp()",
    )
    .execute(&mut conn)
    .unwrap();

    let result = NewGuestWithRsvp {
        name: "Fajar".into(),
        status: RsvpStatus::Attending,
        message: "Selamat!".into(),
    }
    .insert(&mut conn);
    assert!(result.is_err());

    let guests = diesel::select(sql::<BigInt>("(SELECT count(*) FROM guests)"))
        .get_result::<i64>(&mut conn)
        .unwrap();
    assert_eq!(guests, 0);
    assert!(Rsvp::get_all_with_guest(&mut conn).unwrap().is_empty());
}
