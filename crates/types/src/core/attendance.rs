// SPDX-FileCopyrightText: OpenTalk GmbH <mail@opentalk.eu>
//
// SPDX-License-Identifier: EUPL-1.2

use crate::core::RsvpStatus;

/// Number of guests per attendance response
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceCounts {
    /// Guests that will attend
    pub attending: u64,
    /// Guests that will not attend
    pub not_attending: u64,
}

impl AttendanceCounts {
    /// Count the attendance responses of the given statuses.
    pub fn tally<'a, I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = &'a RsvpStatus>,
    {
        statuses
            .into_iter()
            .fold(Self::default(), |mut counts, status| {
                match status {
                    RsvpStatus::Attending => counts.attending += 1,
                    RsvpStatus::NotAttending => counts.not_attending += 1,
                }
                counts
            })
    }

    /// Total number of counted responses
    pub fn total(&self) -> u64 {
        self.attending + self.not_attending
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty() {
        assert_eq!(
            AttendanceCounts::tally(std::iter::empty()),
            AttendanceCounts {
                attending: 0,
                not_attending: 0
            }
        );
    }

    #[test]
    fn mixed() {
        let statuses = [
            RsvpStatus::Attending,
            RsvpStatus::NotAttending,
            RsvpStatus::Attending,
            RsvpStatus::Attending,
        ];

        let counts = AttendanceCounts::tally(&statuses);

        assert_eq!(counts.attending, 3);
        assert_eq!(counts.not_attending, 1);
        assert_eq!(counts.total(), statuses.len() as u64);
    }
}
