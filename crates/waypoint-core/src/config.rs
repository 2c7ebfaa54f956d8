//! Base URLs used to build the links embedded in emails and redirects.

use serde::{Deserialize, Serialize};

/// Default address of the REST API.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3333";
/// Default address of the web front end.
pub const DEFAULT_WEB_BASE_URL: &str = "http://localhost:3000";

/// Where the API and the web front end are reachable.
///
/// Confirmation links in emails point at the API; after confirming, the API
/// redirects the browser to the trip page on the web front end.
///
/// ```rust
/// use waypoint_core::config::LinkConfig;
///
/// let links = LinkConfig::new("https://api.example.com/", "https://example.com");
/// assert_eq!(links.trip_confirmation_url(3), "https://api.example.com/trips/3/confirm");
/// assert_eq!(links.trip_page_url(3), "https://example.com/trips/3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub api_base_url: String,
    pub web_base_url: String,
}

impl LinkConfig {
    /// Trailing slashes are dropped so paths can be appended directly.
    pub fn new(api_base_url: impl Into<String>, web_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: trim_base(api_base_url.into()),
            web_base_url: trim_base(web_base_url.into()),
        }
    }

    /// Link mailed to a trip's owner.
    pub fn trip_confirmation_url(&self, trip_id: u64) -> String {
        format!("{}/trips/{trip_id}/confirm", self.api_base_url)
    }

    /// Link mailed to an invited guest.
    pub fn participant_confirmation_url(&self, participant_id: u64) -> String {
        format!("{}/participants/{participant_id}/confirm", self.api_base_url)
    }

    /// Trip page on the web front end.
    pub fn trip_page_url(&self, trip_id: u64) -> String {
        format!("{}/trips/{trip_id}", self.web_base_url)
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL, DEFAULT_WEB_BASE_URL)
    }
}

fn trim_base(mut url: String) -> String {
    while url.ends_with('/') {
        url.pop();
    }
    url
}
