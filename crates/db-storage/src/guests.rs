// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::schema::guests;
use database::{DbConnection, Result};
use diesel::{ExpressionMethods, Identifiable, Insertable, QueryDsl, Queryable, RunQueryDsl};
use types::core::GuestId;

/// Diesel guest struct
///
/// Represents a guest in the database
#[derive(Debug, Clone, Queryable, Identifiable)]
#[diesel(table_name = guests)]
pub struct Guest {
    pub id: GuestId,
    pub name: String,
}

impl Guest {
    /// Get the guest with the given id
    #[tracing::instrument(err, skip_all)]
    pub fn get(conn: &mut DbConnection, guest_id: GuestId) -> Result<Guest> {
        let query = guests::table.filter(guests::id.eq(guest_id));

        let guest = query.first(conn)?;

        Ok(guest)
    }
}

/// Diesel insertable guest struct
///
/// Represents fields that have to be provided on guest insertion.
#[derive(Debug, Insertable)]
#[diesel(table_name = guests)]
pub struct NewGuest {
    pub name: String,
}

impl NewGuest {
    #[tracing::instrument(err, skip_all)]
    pub fn insert(self, conn: &mut DbConnection) -> Result<Guest> {
        let query = diesel::insert_into(guests::table).values(self);

        let guest = query.get_result(conn)?;

        Ok(guest)
    }
}
