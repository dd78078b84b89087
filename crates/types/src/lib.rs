// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

//! Data types for the wedding guestbook.
//!
//! This crate contains the data types that are shared between the guestbook
//! storage, the HTTP API and its clients.
//!
//! # Features
//!
//! ## `default`
//!
//! This is the "easy" way to use this crate, unless you need the database
//! mappings, then you should use the `backend` feature instead.
//!
//! Depends on:
//! - `frontend`
//!
//! ## `backend`
//!
//! Set the `backend` feature for using the types in the controller or the
//! storage layer.
//!
//! Depends on:
//! - `diesel`
//! - `serde`
//!
//! ## `frontend`
//!
//! Set the `frontend` feature for using the types in a client. Because
//! the `default` feature depends on this, you probably don't need to set it
//! explicitly, unless you have set `default-features = false`.
//!
//! ## `diesel`
//!
//! Adds [Diesel](https://diesel.rs/) type mappings to the identifier newtypes
//! and the RSVP status, so they can be stored in a database through the ORM.
//!
//! Depends on:
//! - `serde`
//!
//! ## `serde`
//!
//! Derives [`serde::Serialize`] and [`serde::Deserialize`] for all types that are
//! exchanged through the web API, and enables the [`api`] module.

#![deny(
    bad_style,
    improper_ctypes,
    missing_debug_implementations,
    missing_docs,
    no_mangle_generic_items,
    non_shorthand_field_patterns,
    overflowing_literals,
    path_statements,
    patterns_in_fns_without_body,
    trivial_casts,
    trivial_numeric_casts,
    unconditional_recursion,
    unsafe_code,
    unused,
    unused_allocation,
    unused_comparisons,
    unused_extern_crates,
    unused_import_braces,
    unused_parens,
    while_true
)]

mod macros;

#[cfg(feature = "serde")]
pub mod api;
pub mod core;

#[allow(unused_imports)]
mod imports {
    #[cfg(feature = "diesel")]
    pub use diesel::{
        deserialize::{FromSql, FromSqlRow},
        expression::AsExpression,
        pg::Pg,
        serialize::ToSql,
    };

    #[cfg(feature = "serde")]
    pub use {
        serde::{Deserialize, Serialize},
        validator::Validate,
    };
}
