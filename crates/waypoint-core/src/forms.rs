//! Client-side forms: the trip creation wizard and the activity/link drafts.
//!
//! These hold what a user has typed so far and turn it into validated
//! request parameters. They are deliberately stricter about completeness than
//! the service ("fill in all fields") and leave the business rules (trip
//! window, activity window) to [`crate::params`].

use jiff::{civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};

use crate::{
    calendar::{CalendarBounds, DateSelection},
    error::{Result, TripError},
    models::Trip,
    params::{CreateActivity, CreateLink, CreateTrip},
    schedule, validate,
    validate::MIN_TITLE_CHARS,
};

/// Screens of the trip creation wizard, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStep {
    /// Destination and dates
    TripDetails,
    /// Guest emails and final confirmation
    AddEmail,
}

/// Two-step trip creation form.
///
/// Destination and dates can only change on [`WizardStep::TripDetails`];
/// guests can only be added on [`WizardStep::AddEmail`]. Going back keeps the
/// guest list.
#[derive(Debug, Clone)]
pub struct TripWizard {
    step: WizardStep,
    destination: String,
    dates: DateSelection,
    bounds: CalendarBounds,
    emails: Vec<String>,
    tz: TimeZone,
}

impl TripWizard {
    /// Starts a wizard where days before `today` cannot be selected.
    pub fn new(today: Date, tz: TimeZone) -> Self {
        Self {
            step: WizardStep::TripDetails,
            destination: String::new(),
            dates: DateSelection::new(),
            bounds: CalendarBounds::from(today),
            emails: Vec::new(),
            tz,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn dates(&self) -> &DateSelection {
        &self.dates
    }

    pub fn emails(&self) -> &[String] {
        &self.emails
    }

    fn require_step(&self, step: WizardStep, field: &str) -> Result<()> {
        if self.step == step {
            Ok(())
        } else {
            Err(TripError::invalid_input(field)
                .with_reason(format!("{field} cannot be changed at this step")))
        }
    }

    pub fn set_destination(&mut self, destination: impl Into<String>) -> Result<()> {
        self.require_step(WizardStep::TripDetails, "destination")?;
        self.destination = destination.into();
        Ok(())
    }

    /// Taps a day on the calendar.
    pub fn select_day(&mut self, day: Date) -> Result<()> {
        self.require_step(WizardStep::TripDetails, "dates")?;
        self.bounds.check("dates", day)?;
        self.dates.select(day);
        Ok(())
    }

    /// Advances from trip details to guest emails.
    ///
    /// # Errors
    ///
    /// * the destination is blank or the date range is incomplete
    /// * the destination is shorter than 4 characters
    /// * the wizard is already on its last step
    pub fn next(&mut self) -> Result<WizardStep> {
        if self.step == WizardStep::AddEmail {
            return Err(TripError::invalid_input("step")
                .with_reason("Already on the last step; confirm the trip instead"));
        }

        if self.destination.trim().is_empty() || !self.dates.is_complete() {
            return Err(
                TripError::invalid_input("trip").with_reason("Fill in all trip information")
            );
        }

        validate::min_chars("destination", self.destination.trim(), MIN_TITLE_CHARS)?;

        self.step = WizardStep::AddEmail;
        Ok(self.step)
    }

    /// Returns to trip details to change location or dates.
    pub fn back(&mut self) {
        self.step = WizardStep::TripDetails;
    }

    /// Adds a guest email, rejecting invalid addresses and duplicates.
    pub fn add_email(&mut self, email: &str) -> Result<()> {
        self.require_step(WizardStep::AddEmail, "emails_to_invite")?;

        let email = email.trim();
        validate::email("emails_to_invite", email)?;

        if self
            .emails
            .iter()
            .any(|existing| existing.eq_ignore_ascii_case(email))
        {
            return Err(TripError::invalid_input("emails_to_invite")
                .with_reason(format!("{email} was already added")));
        }

        self.emails.push(email.to_string());
        Ok(())
    }

    /// Removes a guest email. Returns whether it was present.
    pub fn remove_email(&mut self, email: &str) -> bool {
        let before = self.emails.len();
        self.emails
            .retain(|existing| !existing.eq_ignore_ascii_case(email.trim()));
        self.emails.len() != before
    }

    /// Produces the trip creation request.
    ///
    /// The trip spans whole days: from 00:00:00 on the first day to 23:59:59
    /// on the last day, in the wizard's time zone.
    pub fn finish(&self, owner_name: &str, owner_email: &str) -> Result<CreateTrip> {
        self.require_step(WizardStep::AddEmail, "step")?;

        if owner_name.trim().is_empty() || owner_email.trim().is_empty() {
            return Err(TripError::invalid_input("owner").with_reason("Fill in all fields"));
        }
        validate::email("owner_email", owner_email.trim())?;

        let (first, last) = self.dates.range().ok_or_else(|| {
            TripError::invalid_input("trip").with_reason("Fill in all trip information")
        })?;

        let (starts_at, ends_at) = schedule::whole_days(first, last, &self.tz)?;

        Ok(CreateTrip {
            destination: self.destination.trim().to_string(),
            starts_at,
            ends_at,
            emails_to_invite: self.emails.clone(),
            owner_name: owner_name.trim().to_string(),
            owner_email: owner_email.trim().to_string(),
        })
    }
}

/// Activity form: a title, a calendar day and an hour typed as text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDraft {
    pub title: String,
    pub date: Option<Date>,
    pub hour: String,
}

impl ActivityDraft {
    /// Days the activity date picker offers for `trip`: from today to the
    /// trip's last day.
    pub fn bounds(trip: &Trip, today: Date, tz: &TimeZone) -> CalendarBounds {
        CalendarBounds::between(today, schedule::local_date(trip.ends_at, tz))
    }

    /// Parses the hour field. Dots and commas typed on numeric keypads are
    /// ignored.
    pub fn parsed_hour(&self) -> Result<i8> {
        let cleaned: String = self
            .hour
            .trim()
            .chars()
            .filter(|c| *c != '.' && *c != ',')
            .collect();

        match cleaned.parse::<i8>() {
            Ok(hour) if (0..=23).contains(&hour) => Ok(hour),
            _ => Err(TripError::invalid_input("hour")
                .with_reason(format!("Invalid hour: {}", self.hour))),
        }
    }

    /// Produces the activity creation request for `trip_id`.
    pub fn into_params(self, trip_id: u64, tz: &TimeZone) -> Result<CreateActivity> {
        let date = match self.date {
            Some(date) if !self.title.trim().is_empty() && !self.hour.trim().is_empty() => date,
            _ => {
                return Err(TripError::invalid_input("activity").with_reason("Fill in all fields"))
            }
        };

        let hour = self.parsed_hour()?;
        let occurs_at = date
            .at(hour, 0, 0, 0)
            .to_zoned(tz.clone())
            .map_err(|e| TripError::invalid_input("occurs_at").with_reason(e.to_string()))?
            .timestamp();

        Ok(CreateActivity {
            trip_id,
            title: self.title.trim().to_string(),
            occurs_at,
        })
    }
}

/// Link form: a title and a URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkDraft {
    pub title: String,
    pub url: String,
}

impl LinkDraft {
    /// Produces the link creation request for `trip_id`.
    pub fn into_params(self, trip_id: u64) -> Result<CreateLink> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(TripError::invalid_input("title").with_reason("Enter a title for the link"));
        }

        let url = self.url.trim();
        if !validate::is_url(url) {
            return Err(TripError::invalid_input("url").with_reason("Invalid link"));
        }

        Ok(CreateLink {
            trip_id,
            title: title.to_string(),
            url: url.to_string(),
        })
    }
}
