//
//  starr
//  api/sonarr/calendar.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Calendar of upcoming and recent episodes.
//!
//! The JSON calendar lives under the API; the iCal feed lives under `feed/`
//! and is returned as raw text.

use chrono::{DateTime, Utc};

use super::{Episode, Sonarr};
use crate::api::client::{Apier, ApierExt};
use crate::api::common::Result;
use crate::api::request::{Params, Request};

const BP_CALENDAR: &str = "v3/calendar";
const BP_CALENDAR_FEED: &str = "feed/v3/calendar/sonarr.ics";

/// Window and options of a calendar query.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub unmonitored: bool,
    pub include_series: bool,
    pub include_episode_file: bool,
    pub include_episode_images: bool,
}

impl Calendar {
    /// Monitored episodes airing between `start` and `end`.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            unmonitored: false,
            include_series: false,
            include_episode_file: false,
            include_episode_images: false,
        }
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_time("start", self.start)
            .set_time("end", self.end)
            .set_bool("unmonitored", self.unmonitored)
            .set_bool("includeSeries", self.include_series)
            .set_bool("includeEpisodeFile", self.include_episode_file)
            .set_bool("includeEpisodeImages", self.include_episode_images);
        params
    }
}

/// Options of the iCal feed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarFeed {
    pub past_days: Option<u32>,
    pub future_days: Option<u32>,
    /// Only series with one of these tags.
    pub tags: Vec<i64>,
    pub unmonitored: bool,
    pub premieres_only: bool,
    pub as_all_day: bool,
}

impl CalendarFeed {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(days) = self.past_days {
            params.set("pastDays", days);
        }
        if let Some(days) = self.future_days {
            params.set("futureDays", days);
        }
        if !self.tags.is_empty() {
            let tags: Vec<String> = self.tags.iter().map(i64::to_string).collect();
            params.set("tags", tags.join(","));
        }
        params
            .set_bool("unmonitored", self.unmonitored)
            .set_bool("premieresOnly", self.premieres_only)
            .set_bool("asAllDay", self.as_all_day);
        params
    }
}

impl Sonarr {
    pub async fn get_calendar(&self, calendar: &Calendar) -> Result<Vec<Episode>> {
        let req = Request::new(BP_CALENDAR).with_query(calendar.to_params());
        self.api.get_into(req).await
    }

    /// Fetches the iCal feed as text.
    pub async fn get_calendar_feed(&self, feed: &CalendarFeed) -> Result<String> {
        let req = Request::new(BP_CALENDAR_FEED).with_query(feed.to_params());
        Ok(self.api.get(req).await?.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_calendar_params() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 8, 0, 0, 0).unwrap();
        let mut calendar = Calendar::between(start, end);
        calendar.include_series = true;

        let params = calendar.to_params();
        assert_eq!(params.get("start"), Some("2024-01-01T00:00:00.000Z"));
        assert_eq!(params.get("includeSeries"), Some("true"));
        assert_eq!(params.get("unmonitored"), Some("false"));
    }

    #[test]
    fn test_feed_params() {
        let feed = CalendarFeed {
            future_days: Some(14),
            tags: vec![1, 4],
            ..Default::default()
        };
        let params = feed.to_params();
        assert_eq!(params.get("futureDays"), Some("14"));
        assert_eq!(params.get("tags"), Some("1,4"));
        assert!(!params.contains("pastDays"));
    }
}
