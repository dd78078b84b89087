// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

crate::diesel_newtype! {
    /// The identifier of a single RSVP entry in the guestbook
    #[derive(Copy)]
    RsvpId(i64) => diesel::sql_types::BigInt
}
