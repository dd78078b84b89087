// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! REST API v1
//!
//! The latest version is served below `/api`.
//!
//! Current Endpoints. See their respective function:
//! - `/rsvp` ([GET](rsvp::get_rsvps), [POST](rsvp::post_rsvp))

pub mod response;
pub mod rsvp;
