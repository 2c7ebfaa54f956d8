//! Field-level validation shared by request parameters and client forms.

use crate::error::{Result, TripError};

/// Minimum length of destinations and activity/link titles.
pub const MIN_TITLE_CHARS: usize = 4;

/// Returns true when `value` looks like a deliverable email address.
///
/// Accepts `local@domain.tld` shapes: exactly one `@`, a non-empty local
/// part, and a dotted domain whose labels are all non-empty. Whitespace is
/// never allowed.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    if local.is_empty() || domain.contains('@') || !domain.contains('.') {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty() && !label.starts_with('-') && !label.ends_with('-')
    })
}

/// Returns true when `value` is an absolute http(s) URL with a host.
pub fn is_url(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((scheme, rest)) = value.split_once("://") else {
        return false;
    };

    if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
        return false;
    }

    let host = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default()
        .rsplit('@')
        .next()
        .unwrap_or_default();
    let host = host.split(':').next().unwrap_or_default();

    !host.is_empty()
}

/// Requires `value` to be a valid email address.
pub fn email(field: &str, value: &str) -> Result<()> {
    if is_email(value) {
        Ok(())
    } else {
        Err(TripError::invalid_input(field).with_reason(format!("Invalid email: {value}")))
    }
}

/// Requires `value` to be a valid http(s) URL.
pub fn url(field: &str, value: &str) -> Result<()> {
    if is_url(value) {
        Ok(())
    } else {
        Err(TripError::invalid_input(field).with_reason(format!("Invalid URL: {value}")))
    }
}

/// Requires `value` to have at least `min` characters once surrounding
/// whitespace is trimmed.
pub fn min_chars(field: &str, value: &str, min: usize) -> Result<()> {
    if value.trim().chars().count() >= min {
        Ok(())
    } else {
        Err(TripError::invalid_input(field)
            .with_reason(format!("{field} must contain at least {min} characters")))
    }
}
