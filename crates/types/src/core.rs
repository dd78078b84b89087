// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! This module contains the core types of the guestbook.
//!
//! All core types are simple types (e.g. newtypes of primitive or other simple types),
//! and typically used by other types in this crate.

mod attendance;
mod guest_id;
mod rsvp_id;
mod rsvp_status;

pub use attendance::AttendanceCounts;
pub use guest_id::GuestId;
pub use rsvp_id::RsvpId;
pub use rsvp_status::RsvpStatus;
