// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

crate::diesel_newtype! {
    /// The identifier of a guest that submitted an RSVP
    #[derive(Copy)]
    GuestId(i64) => diesel::sql_types::BigInt
}
