//! Calendar-day rules for trips and their activities.
//!
//! Trip dates are stored as instants, but users reason in calendar days of
//! their own time zone: a trip starting "today" at 08:00 is valid even when
//! the request arrives at 10:00. Every check here converts to civil dates in
//! the planner's [`TimeZone`] before comparing.

use jiff::{civil::Date, tz::TimeZone, Timestamp};

use crate::{
    error::{Result, TripError},
    models::{Activity, DayActivities, Trip},
};

/// Calendar day of `instant` in `tz`.
pub fn local_date(instant: Timestamp, tz: &TimeZone) -> Date {
    instant.to_zoned(tz.clone()).date()
}

/// Today's calendar day in `tz`.
pub fn today(tz: &TimeZone) -> Date {
    local_date(Timestamp::now(), tz)
}

/// Checks that a trip neither starts in the past nor ends before it starts.
///
/// # Errors
///
/// * `starts_at` - the start day is before `today`
/// * `ends_at` - the end day is before the start day
pub fn ensure_trip_window(
    starts_at: Timestamp,
    ends_at: Timestamp,
    today: Date,
    tz: &TimeZone,
) -> Result<()> {
    let start_day = local_date(starts_at, tz);
    let end_day = local_date(ends_at, tz);

    if start_day < today {
        return Err(TripError::invalid_input("starts_at").with_reason("Invalid trip start date."));
    }

    if end_day < start_day {
        return Err(TripError::invalid_input("ends_at").with_reason("Invalid trip end date."));
    }

    Ok(())
}

/// Checks that an activity falls between the trip's start and end instants.
pub fn ensure_activity_window(occurs_at: Timestamp, trip: &Trip) -> Result<()> {
    if occurs_at < trip.starts_at || occurs_at > trip.ends_at {
        return Err(TripError::invalid_input("occurs_at").with_reason("Invalid activity date."));
    }

    Ok(())
}

/// Instants spanning whole days in `tz`: 00:00:00 on `first` to 23:59:59 on
/// `last`.
pub fn whole_days(first: Date, last: Date, tz: &TimeZone) -> Result<(Timestamp, Timestamp)> {
    let starts_at = first
        .to_zoned(tz.clone())
        .map_err(|e| TripError::invalid_input("starts_at").with_reason(e.to_string()))?
        .timestamp();
    let ends_at = last
        .at(23, 59, 59, 0)
        .to_zoned(tz.clone())
        .map_err(|e| TripError::invalid_input("ends_at").with_reason(e.to_string()))?
        .timestamp();

    Ok((starts_at, ends_at))
}

/// Every calendar day the trip touches, first and last day included.
pub fn trip_days(trip: &Trip, tz: &TimeZone) -> Vec<Date> {
    let first = local_date(trip.starts_at, tz);
    let last = local_date(trip.ends_at, tz);

    let mut days = Vec::new();
    let mut day = first;
    while day <= last {
        days.push(day);
        match day.tomorrow() {
            Ok(next) => day = next,
            Err(_) => break,
        }
    }
    days
}

/// Buckets activities into the trip's days, each bucket ordered by time.
///
/// Days without activities are kept so a client can render an empty day;
/// activities outside the trip's days are dropped.
pub fn group_by_day(trip: &Trip, mut activities: Vec<Activity>, tz: &TimeZone) -> Vec<DayActivities> {
    activities.sort_by_key(|activity| (activity.occurs_at, activity.id));

    trip_days(trip, tz)
        .into_iter()
        .map(|date| DayActivities {
            date,
            activities: activities
                .iter()
                .filter(|activity| local_date(activity.occurs_at, tz) == date)
                .cloned()
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    fn ts(s: &str) -> Timestamp {
        s.parse().expect("valid timestamp")
    }

    fn trip(starts_at: &str, ends_at: &str) -> Trip {
        Trip {
            id: 1,
            destination: "Lisboa".to_string(),
            starts_at: ts(starts_at),
            ends_at: ts(ends_at),
            is_confirmed: false,
            created_at: ts("2030-01-01T00:00:00Z"),
        }
    }

    fn activity(id: u64, occurs_at: &str) -> Activity {
        Activity {
            id,
            trip_id: 1,
            title: format!("Activity {id}"),
            occurs_at: ts(occurs_at),
        }
    }

    #[test]
    fn test_whole_days_in_offset_zone() {
        let tz = TimeZone::fixed(jiff::tz::offset(-3));
        let (starts_at, ends_at) =
            whole_days(date(2030, 3, 10), date(2030, 3, 12), &tz).expect("valid days");

        assert_eq!(starts_at, ts("2030-03-10T03:00:00Z"));
        assert_eq!(ends_at, ts("2030-03-13T02:59:59Z"));
    }

    #[test]
    fn test_trip_window_accepts_today() {
        let today = date(2030, 3, 10);
        let result = ensure_trip_window(
            ts("2030-03-10T00:30:00Z"),
            ts("2030-03-12T00:00:00Z"),
            today,
            &TimeZone::UTC,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_trip_window_rejects_past_start() {
        let today = date(2030, 3, 10);
        let err = ensure_trip_window(
            ts("2030-03-09T23:00:00Z"),
            ts("2030-03-12T00:00:00Z"),
            today,
            &TimeZone::UTC,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid trip start date.");
    }

    #[test]
    fn test_trip_window_accepts_same_day_end_before_start_time() {
        // Same calendar day, end instant earlier than start instant
        let result = ensure_trip_window(
            ts("2030-03-10T18:00:00Z"),
            ts("2030-03-10T09:00:00Z"),
            date(2030, 3, 1),
            &TimeZone::UTC,
        );
        assert!(result.is_ok());
    }

    #[test]
    fn test_trip_window_rejects_end_before_start() {
        let err = ensure_trip_window(
            ts("2030-03-10T00:00:00Z"),
            ts("2030-03-09T00:00:00Z"),
            date(2030, 3, 1),
            &TimeZone::UTC,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid trip end date.");
    }

    #[test]
    fn test_trip_window_uses_time_zone_days() {
        // 02:00 UTC on the 10th is still the 9th in São Paulo (UTC-3)
        let tz = TimeZone::fixed(jiff::tz::offset(-3));
        let err = ensure_trip_window(
            ts("2030-03-10T02:00:00Z"),
            ts("2030-03-12T00:00:00Z"),
            date(2030, 3, 10),
            &tz,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid trip start date.");
    }

    #[test]
    fn test_activity_window_bounds_are_inclusive() {
        let trip = trip("2030-03-10T08:00:00Z", "2030-03-12T20:00:00Z");
        assert!(ensure_activity_window(ts("2030-03-10T08:00:00Z"), &trip).is_ok());
        assert!(ensure_activity_window(ts("2030-03-12T20:00:00Z"), &trip).is_ok());
        assert!(ensure_activity_window(ts("2030-03-10T07:59:59Z"), &trip).is_err());
        assert!(ensure_activity_window(ts("2030-03-12T20:00:01Z"), &trip).is_err());
    }

    #[test]
    fn test_trip_days_inclusive() {
        let trip = trip("2030-03-10T20:00:00Z", "2030-03-12T08:00:00Z");
        assert_eq!(
            trip_days(&trip, &TimeZone::UTC),
            vec![date(2030, 3, 10), date(2030, 3, 11), date(2030, 3, 12)]
        );
    }

    #[test]
    fn test_trip_days_single_day() {
        let trip = trip("2030-03-10T08:00:00Z", "2030-03-10T20:00:00Z");
        assert_eq!(trip_days(&trip, &TimeZone::UTC), vec![date(2030, 3, 10)]);
    }

    #[test]
    fn test_group_by_day_orders_and_keeps_empty_days() {
        let trip = trip("2030-03-10T08:00:00Z", "2030-03-12T20:00:00Z");
        let activities = vec![
            activity(1, "2030-03-12T10:00:00Z"),
            activity(2, "2030-03-10T18:00:00Z"),
            activity(3, "2030-03-10T09:00:00Z"),
        ];

        let days = group_by_day(&trip, activities, &TimeZone::UTC);

        assert_eq!(days.len(), 3);
        assert_eq!(days[0].date, date(2030, 3, 10));
        let first_ids: Vec<u64> = days[0].activities.iter().map(|a| a.id).collect();
        assert_eq!(first_ids, vec![3, 2]);
        assert!(days[1].activities.is_empty());
        assert_eq!(days[2].activities[0].id, 1);
    }
}
