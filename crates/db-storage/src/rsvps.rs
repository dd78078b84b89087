// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::guests::{Guest, NewGuest};
use crate::schema::{guests, rsvps};
use chrono::{DateTime, Utc};
use database::{DatabaseError, DbConnection, Result};
use diesel::{
    Associations, Connection, ExpressionMethods, Identifiable, Insertable, QueryDsl, Queryable,
    RunQueryDsl,
};
use types::core::{GuestId, RsvpId, RsvpStatus};

/// Diesel rsvp struct
///
/// Represents an RSVP in the database
#[derive(Debug, Clone, Queryable, Identifiable, Associations)]
#[diesel(table_name = rsvps)]
#[diesel(belongs_to(Guest, foreign_key = guest_id))]
pub struct Rsvp {
    pub id: RsvpId,
    pub guest_id: GuestId,
    pub status: RsvpStatus,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

pub type RsvpWithGuest = (Rsvp, Guest);

impl Rsvp {
    /// Returns all RSVPs along with the guest that submitted them
    ///
    /// The newest RSVP comes first. RSVPs created at the same instant are ordered by
    /// descending id, so the order is stable between calls.
    #[tracing::instrument(err, skip_all)]
    pub fn get_all_with_guest(conn: &mut DbConnection) -> Result<Vec<RsvpWithGuest>> {
        let query = rsvps::table
            .inner_join(guests::table)
            .order((rsvps::created_at.desc(), rsvps::id.desc()));

        let rsvps_with_guest = query.load::<(Rsvp, Guest)>(conn)?;

        Ok(rsvps_with_guest)
    }

    /// Returns the RSVP submitted by the given guest
    #[tracing::instrument(err, skip_all)]
    pub fn get_for_guest(conn: &mut DbConnection, guest_id: GuestId) -> Result<Rsvp> {
        let query = rsvps::table.filter(rsvps::guest_id.eq(guest_id));

        let rsvp = query.first(conn)?;

        Ok(rsvp)
    }
}

/// Diesel insertable rsvp struct
///
/// Represents fields that have to be provided on rsvp insertion.
#[derive(Debug, Insertable)]
#[diesel(table_name = rsvps)]
pub struct NewRsvp {
    pub guest_id: GuestId,
    pub status: RsvpStatus,
    pub message: String,
}

impl NewRsvp {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Rsvp> {
        let query = diesel::insert_into(rsvps::table).values(self);

        let rsvp = query.get_result(conn)?;

        Ok(rsvp)
    }
}

/// A guest together with the RSVP they submitted
///
/// Both rows are written in a single transaction, either both exist afterwards or none.
#[derive(Debug)]
pub struct NewGuestWithRsvp {
    pub name: String,
    pub status: RsvpStatus,
    pub message: String,
}

impl NewGuestWithRsvp {
    #[tracing::instrument(err, skip_all, fields(status = %self.status))]
    pub fn insert(self, conn: &mut DbConnection) -> Result<RsvpWithGuest> {
        let NewGuestWithRsvp {
            name,
            status,
            message,
        } = self;

        conn.transaction::<_, DatabaseError, _>(|conn| {
            let guest = NewGuest { name }.insert(conn)?;

            let rsvp = NewRsvp {
                guest_id: guest.id,
                status,
                message,
            }
            .insert(conn)?;

            Ok((rsvp, guest))
        })
    }
}
