// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use strum::{AsRefStr, Display, EnumIter, EnumString};

use crate::imports::*;

/// The attendance response a guest gave with their RSVP.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
)]
#[cfg_attr(
    feature = "serde",
    derive(Deserialize, Serialize),
    serde(rename_all = "snake_case")
)]
#[cfg_attr(
    feature = "diesel",
    derive(AsExpression, FromSqlRow),
    diesel(sql_type = diesel::sql_types::Text)
)]
#[strum(serialize_all = "snake_case")]
pub enum RsvpStatus {
    /// The guest will attend the wedding.
    ///
    /// This is what a submission without an explicit status is recorded as.
    #[default]
    Attending,

    /// The guest will not attend the wedding.
    NotAttending,
}

impl RsvpStatus {
    /// Returns `true` if the guest will attend.
    pub fn is_attending(&self) -> bool {
        matches!(self, Self::Attending)
    }
}

#[cfg(feature = "diesel")]
mod diesel_traits {
    use super::*;

    use std::{
        io::Write,
        str::{from_utf8, FromStr},
    };

    use diesel::{
        deserialize,
        pg::PgValue,
        serialize::{self, IsNull, Output},
        sql_types::Text,
    };

    impl ToSql<Text, Pg> for RsvpStatus {
        fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
            write!(out, "{}", self)?;
            Ok(IsNull::No)
        }
    }

    impl FromSql<Text, Pg> for RsvpStatus {
        fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
            let s = from_utf8(bytes.as_bytes())?;

            Ok(Self::from_str(s)?)
        }
    }
}
