//! Outgoing email: message composition and the delivery seam.
//!
//! The planner composes complete messages and hands them to a [`Mailer`].
//! [`LogMailer`] writes them to the log, which is the default for local
//! runs; [`MemoryMailer`] keeps them for inspection in tests.

use std::sync::{Mutex, PoisonError};

use jiff::tz::TimeZone;
use log::info;
use serde::{Deserialize, Serialize};

use crate::{
    error::Result,
    models::{Participant, Trip},
};

/// Display name used in the `From` header.
pub const SENDER_NAME: &str = "plann.er team";
/// Address used in the `From` header.
pub const SENDER_ADDRESS: &str = "hello@plann.er";

/// A fully composed email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    pub from_name: String,
    pub from_address: String,
    pub to_name: Option<String>,
    pub to_address: String,
    pub subject: String,
    pub html: String,
}

impl MailMessage {
    fn from_team(to_name: Option<String>, to_address: &str, subject: String, html: String) -> Self {
        Self {
            from_name: SENDER_NAME.to_string(),
            from_address: SENDER_ADDRESS.to_string(),
            to_name,
            to_address: to_address.to_string(),
            subject,
            html,
        }
    }

    /// Message asking a trip's owner to confirm the trip.
    pub fn trip_confirmation(
        trip: &Trip,
        owner: &Participant,
        confirmation_link: &str,
        tz: &TimeZone,
    ) -> Self {
        let starts = day_and_month(trip.starts_at, tz);
        let ends = day_and_month(trip.ends_at, tz);

        let subject = format!("Confirm your trip to {} on {starts}", trip.destination);
        let html = format!(
            concat!(
                "<div style=\"font-family: sans-serif; font-size: 16px; line-height: 1.6;\">\n",
                "  <p>You requested a trip to <strong>{destination}</strong> from {starts} to {ends}.</p>\n",
                "  <p>To confirm your trip, click the link below:</p>\n",
                "  <p><a href=\"{link}\">Confirm trip</a></p>\n",
                "  <p>If you don't know what this email is about, just ignore it.</p>\n",
                "</div>"
            ),
            destination = escape_html(&trip.destination),
            starts = starts,
            ends = ends,
            link = escape_html(confirmation_link),
        );

        Self::from_team(owner.name.clone(), &owner.email, subject, html)
    }

    /// Message inviting a guest to confirm their attendance.
    pub fn trip_invitation(
        trip: &Trip,
        guest: &Participant,
        confirmation_link: &str,
        tz: &TimeZone,
    ) -> Self {
        let starts = day_and_month(trip.starts_at, tz);
        let ends = day_and_month(trip.ends_at, tz);

        let subject = format!("You were invited to a trip to {} on {starts}", trip.destination);
        let html = format!(
            concat!(
                "<div style=\"font-family: sans-serif; font-size: 16px; line-height: 1.6;\">\n",
                "  <p>You were invited to join a trip to <strong>{destination}</strong> from {starts} to {ends}.</p>\n",
                "  <p>To confirm your presence, click the link below:</p>\n",
                "  <p><a href=\"{link}\">Confirm attendance</a></p>\n",
                "  <p>If you don't know what this email is about, just ignore it.</p>\n",
                "</div>"
            ),
            destination = escape_html(&trip.destination),
            starts = starts,
            ends = ends,
            link = escape_html(confirmation_link),
        );

        Self::from_team(guest.name.clone(), &guest.email, subject, html)
    }
}

/// "7 of March" in `tz`.
fn day_and_month(instant: jiff::Timestamp, tz: &TimeZone) -> String {
    instant.to_zoned(tz.clone()).strftime("%-d of %B").to_string()
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Delivers composed messages.
pub trait Mailer: Send + Sync {
    /// Sends one message.
    ///
    /// # Errors
    ///
    /// Returns [`TripError::Mail`](crate::TripError::Mail) when delivery fails.
    fn send(&self, message: &MailMessage) -> Result<()>;
}

/// Mailer that writes every message to the log instead of delivering it.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl Mailer for LogMailer {
    fn send(&self, message: &MailMessage) -> Result<()> {
        info!(
            "Mail to {} <{}>: {}",
            message.to_name.as_deref().unwrap_or(""),
            message.to_address,
            message.subject
        );
        log::debug!("Mail body:\n{}", message.html);
        Ok(())
    }
}

/// Mailer that keeps every message in memory.
#[derive(Debug, Default)]
pub struct MemoryMailer {
    sent: Mutex<Vec<MailMessage>>,
}

impl MemoryMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far, oldest first.
    pub fn sent(&self) -> Vec<MailMessage> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Mailer for MemoryMailer {
    fn send(&self, message: &MailMessage) -> Result<()> {
        self.sent
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(message.clone());
        Ok(())
    }
}
