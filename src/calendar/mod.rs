// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Look up this week's Torah reading from a remote calendar service.
//!
//! This has nothing to do with sunsets; it's fetched alongside the schedules
//! and any failure here only affects the reading slot.

mod error;

pub use error::CalendarError;

use log::{debug, trace};
use serde::Deserialize;

use crate::{
    constants::{CALENDAR_BASE_URL, READING_CATEGORY},
    solar::Location,
};

#[derive(Debug, Deserialize)]
struct CalendarResponse {
    #[serde(default)]
    items: Vec<CalendarItem>,
}

#[derive(Debug, Deserialize)]
struct CalendarItem {
    #[serde(default)]
    category: Option<String>,

    /// The name in Hebrew script.
    #[serde(default)]
    hebrew: Option<String>,

    #[serde(default)]
    title: Option<String>,
}

/// The calendar service URL for `location`, with havdalah `havdalah_minutes`
/// after sunset.
pub fn calendar_url(location: &Location, havdalah_minutes: i64) -> String {
    format!(
        "{CALENDAR_BASE_URL}?cfg=json&geo=pos&latitude={}&longitude={}&m={havdalah_minutes}",
        location.latitude, location.longitude
    )
}

/// Get the reading's display name out of a calendar service response body.
/// The Hebrew name is preferred over the title.
pub fn parse_reading(body: &str) -> Result<String, CalendarError> {
    let response: CalendarResponse = serde_json::from_str(body)?;
    let item = response
        .items
        .into_iter()
        .find(|i| i.category.as_deref() == Some(READING_CATEGORY))
        .ok_or(CalendarError::NoReading)?;

    [item.hebrew, item.title]
        .into_iter()
        .flatten()
        .map(|s| s.trim().to_string())
        .find(|s| !s.is_empty())
        .ok_or(CalendarError::UnnamedReading)
}

pub struct CalendarClient {
    client: reqwest::Client,
    url: String,
}

impl CalendarClient {
    pub fn new(url: String) -> Result<CalendarClient, CalendarError> {
        let client = reqwest::Client::builder()
            .user_agent(format!("shul_zmanim/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CalendarError::Client)?;
        Ok(CalendarClient { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Make one request for the week's reading. Nothing is retried.
    pub async fn fetch_reading(&self) -> Result<String, CalendarError> {
        debug!("Requesting the week's reading from {}", self.url);
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CalendarError::Status(status));
        }

        let body = response.text().await?;
        trace!("Calendar response: {body}");
        let reading = parse_reading(&body)?;
        debug!("This week's reading: {reading}");
        Ok(reading)
    }
}
