// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

/// Allows to create one or more typed ids
///
/// Defines the type and implements a variety of traits for it. The diesel mappings
/// are only generated when the `diesel` feature is enabled, the serde derives only
/// with the `serde` feature.
#[macro_export]
macro_rules! diesel_newtype {
    ($($(#[$meta:meta])* $name:ident($to_wrap:ty) => $sql_type:ty),+) => {
        $(
            #[derive(
                Debug,
                Clone,
                PartialEq,
                Eq,
                PartialOrd,
                Ord,
                Hash,
            )]
            #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
            #[cfg_attr(
                feature = "diesel",
                derive(diesel::AsExpression, diesel::FromSqlRow),
                diesel(sql_type = $sql_type)
            )]
            $(#[$meta])*
            pub struct $name($to_wrap);

            impl $name {
                /// Wrap a value into this type.
                pub const fn from(inner: $to_wrap) -> Self {
                    Self(inner)
                }

                /// Get a reference to the inner type.
                pub fn inner(&self) -> &$to_wrap {
                    &self.0
                }

                /// Destructure this type and extract the inner value.
                pub fn into_inner(self) -> $to_wrap {
                    self.0
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    self.0.fmt(f)
                }
            }

            impl ::std::str::FromStr for $name {
                type Err = <$to_wrap as ::std::str::FromStr>::Err;

                fn from_str(s: &str) -> Result<Self, Self::Err> {
                    s.parse().map(Self)
                }
            }

            #[cfg(feature = "diesel")]
            impl diesel::serialize::ToSql<$sql_type, diesel::pg::Pg> for $name {
                fn to_sql<'b>(
                    &'b self,
                    out: &mut diesel::serialize::Output<'b, '_, diesel::pg::Pg>,
                ) -> diesel::serialize::Result {
                    <$to_wrap as diesel::serialize::ToSql<$sql_type, diesel::pg::Pg>>::to_sql(&self.0, out)
                }
            }

            #[cfg(feature = "diesel")]
            impl diesel::deserialize::FromSql<$sql_type, diesel::pg::Pg> for $name {
                fn from_sql(bytes: diesel::pg::PgValue<'_>) -> diesel::deserialize::Result<Self> {
                    <$to_wrap as diesel::deserialize::FromSql<$sql_type, diesel::pg::Pg>>::from_sql(bytes)
                        .map(Self)
                }
            }
        )+
    };
}
