// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Version 1 of the guestbook web API, served below `/api`.

pub mod rsvp;
