// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use barrel::backend::Pg;
use barrel::{types, Migration};

pub fn migration() -> String {
    let mut migr = Migration::new();

    migr.create_table("guests", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column("name", types::text());
    });

    migr.create_table("rsvps", |table| {
        table.add_column("id", types::custom("BIGSERIAL").primary(true));
        table.add_column(
            "guest_id",
            types::custom("BIGINT REFERENCES guests(id)").unique(true),
        );
        table.add_column(
            "status",
            types::custom("VARCHAR(32) CHECK (status IN ('attending', 'not_attending'))"),
        );
        table.add_column("message", types::text());
        table.add_column("created_at", types::custom("TIMESTAMPTZ DEFAULT now()"));
    });

    migr.inject_custom("CREATE INDEX rsvps_created_at_idx ON rsvps (created_at DESC, id DESC)");

    migr.make::<Pg>()
}
