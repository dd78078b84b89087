// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

#![allow(clippy::extra_unused_lifetimes)]

//! Contains the database ORM and database migrations for the guestbook
//! Builds upon guestbook-database
//!
//! Every table has a module with a model for reading rows and a `New*` struct
//! which inserts rows through its `insert` method.

mod schema;

pub mod guests;
pub mod migrations;
pub mod rsvps;
