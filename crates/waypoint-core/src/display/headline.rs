//! One-line trip summary shown at the top of the trip screen.

use std::fmt;

use jiff::tz::TimeZone;

use crate::models::Trip;

/// Destinations longer than this are truncated with an ellipsis.
pub const MAX_HEADLINE_DESTINATION: usize = 14;

/// "Florianópolis from 07 to 12 of Mar." style headline.
pub struct TripHeadline<'a> {
    pub trip: &'a Trip,
    pub tz: &'a TimeZone,
}

impl<'a> TripHeadline<'a> {
    pub fn new(trip: &'a Trip, tz: &'a TimeZone) -> Self {
        Self { trip, tz }
    }

    /// The destination, cut to [`MAX_HEADLINE_DESTINATION`] characters.
    pub fn destination(&self) -> String {
        let destination = &self.trip.destination;
        if destination.chars().count() > MAX_HEADLINE_DESTINATION {
            let cut: String = destination.chars().take(MAX_HEADLINE_DESTINATION).collect();
            format!("{cut}...")
        } else {
            destination.clone()
        }
    }
}

impl fmt::Display for TripHeadline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let starts = self.trip.starts_at.to_zoned(self.tz.clone());
        let ends = self.trip.ends_at.to_zoned(self.tz.clone());
        write!(
            f,
            "{} from {} to {} of {}.",
            self.destination(),
            starts.strftime("%d"),
            ends.strftime("%d"),
            starts.strftime("%b")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(destination: &str) -> Trip {
        Trip {
            id: 1,
            destination: destination.to_string(),
            starts_at: "2030-03-07T12:00:00Z".parse().expect("timestamp"),
            ends_at: "2030-03-12T12:00:00Z".parse().expect("timestamp"),
            is_confirmed: true,
            created_at: "2030-01-01T12:00:00Z".parse().expect("timestamp"),
        }
    }

    #[test]
    fn test_short_destination() {
        let trip = trip("Lisboa");
        let tz = TimeZone::UTC;
        assert_eq!(
            TripHeadline::new(&trip, &tz).to_string(),
            "Lisboa from 07 to 12 of Mar."
        );
    }

    #[test]
    fn test_long_destination_is_truncated() {
        let trip = trip("Florianópolis, Santa Catarina");
        let tz = TimeZone::UTC;
        let headline = TripHeadline::new(&trip, &tz);
        assert_eq!(headline.destination(), "Florianópolis,...");
        assert!(headline.to_string().starts_with("Florianópolis,... from 07"));
    }

    #[test]
    fn test_exactly_fourteen_chars_is_kept() {
        let trip = trip("Rio de Janeiro");
        let tz = TimeZone::UTC;
        assert_eq!(TripHeadline::new(&trip, &tz).destination(), "Rio de Janeiro");
    }
}
