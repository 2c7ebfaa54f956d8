//! Calendar date-range selection.
//!
//! A range is picked with successive taps on single days. [`DateSelection`]
//! keeps the two ends ordered no matter in which order the days arrive, and
//! [`CalendarBounds`] restricts which days may be tapped at all.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TripError};

/// A start/end pair of calendar days, built one selected day at a time.
///
/// When both ends are set, `starts_at <= ends_at` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateSelection {
    starts_at: Option<Date>,
    ends_at: Option<Date>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a complete selection from two days given in any order.
    pub fn between(a: Date, b: Date) -> Self {
        Self::new().with_selected(a).with_selected(b)
    }

    /// Returns the selection after tapping `day`.
    ///
    /// - nothing selected: `day` becomes the start;
    /// - a full range selected: start over from `day`;
    /// - `day` on or before the start: `day` becomes the start and the old
    ///   start becomes the end;
    /// - otherwise `day` becomes the end.
    #[must_use]
    pub fn with_selected(self, day: Date) -> Self {
        match (self.starts_at, self.ends_at) {
            (None, _) | (Some(_), Some(_)) => Self {
                starts_at: Some(day),
                ends_at: None,
            },
            (Some(start), None) if day <= start => Self {
                starts_at: Some(day),
                ends_at: Some(start),
            },
            (Some(start), None) => Self {
                starts_at: Some(start),
                ends_at: Some(day),
            },
        }
    }

    /// Taps `day` in place.
    pub fn select(&mut self, day: Date) {
        *self = self.with_selected(day);
    }

    /// Clears both ends.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn starts_at(&self) -> Option<Date> {
        self.starts_at
    }

    pub fn ends_at(&self) -> Option<Date> {
        self.ends_at
    }

    /// Both ends, once the range is complete.
    pub fn range(&self) -> Option<(Date, Date)> {
        self.starts_at.zip(self.ends_at)
    }

    pub fn is_complete(&self) -> bool {
        self.range().is_some()
    }

    /// Every day to highlight: the whole range, or just the start while the
    /// range is incomplete.
    pub fn marked_dates(&self) -> Vec<Date> {
        let (first, last) = match (self.starts_at, self.ends_at) {
            (Some(start), Some(end)) => (start, end),
            (Some(start), None) => (start, start),
            (None, _) => return Vec::new(),
        };

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

    /// Human-readable range, e.g. "07 to 12 of March"; empty until complete.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((start, end)) = self.range() else {
            return Ok(());
        };

        if start.year() == end.year() && start.month() == end.month() {
            write!(
                f,
                "{} to {} of {}",
                start.strftime("%d"),
                end.strftime("%d"),
                end.strftime("%B")
            )
        } else {
            write!(
                f,
                "{} to {}",
                start.strftime("%d of %B"),
                end.strftime("%d of %B")
            )
        }
    }
}

/// Inclusive window of selectable days. An unset bound is open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CalendarBounds {
    pub min: Option<Date>,
    pub max: Option<Date>,
}

impl CalendarBounds {
    /// Days from `min` onwards.
    pub fn from(min: Date) -> Self {
        Self {
            min: Some(min),
            max: None,
        }
    }

    /// Days from `min` to `max`, both included.
    pub fn between(min: Date, max: Date) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub fn contains(&self, day: Date) -> bool {
        self.min.is_none_or(|min| day >= min) && self.max.is_none_or(|max| day <= max)
    }

    /// Rejects days outside the window, naming `field` in the error.
    pub fn check(&self, field: &str, day: Date) -> Result<()> {
        if self.contains(day) {
            Ok(())
        } else {
            Err(TripError::invalid_input(field)
                .with_reason(format!("{day} is outside the selectable dates")))
        }
    }
}
