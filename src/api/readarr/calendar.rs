//
//  starr
//  api/readarr/calendar.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Calendar of upcoming and recent book releases.

use chrono::{DateTime, Utc};

use super::{Book, Readarr};
use crate::api::client::ApierExt;
use crate::api::common::Result;
use crate::api::request::{Params, Request};

const BP_CALENDAR: &str = "v1/calendar";

/// Window and options of a calendar query.
#[derive(Debug, Clone, PartialEq)]
pub struct Calendar {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub unmonitored: bool,
    pub include_author: bool,
}

impl Calendar {
    /// Monitored books released between `start` and `end`.
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end,
            unmonitored: false,
            include_author: false,
        }
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        params
            .set_time("start", self.start)
            .set_time("end", self.end)
            .set_bool("unmonitored", self.unmonitored)
            .set_bool("includeAuthor", self.include_author);
        params
    }
}

impl Readarr {
    pub async fn get_calendar(&self, calendar: &Calendar) -> Result<Vec<Book>> {
        let req = Request::new(BP_CALENDAR).with_query(calendar.to_params());
        self.api.get_into(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_calendar_params() {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let params = Calendar::between(start, end).to_params();
        assert_eq!(params.get("start"), Some("2024-05-01T12:30:00.000Z"));
        assert_eq!(params.get("includeAuthor"), Some("false"));
    }
}
