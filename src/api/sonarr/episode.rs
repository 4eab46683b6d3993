//
//  starr
//  api/sonarr/episode.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Episodes and season monitoring.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{MonitorType, Season, Series, Sonarr};
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Result};
use crate::api::request::Request;

const BP_EPISODE: &str = "v3/episode";
const BP_SEASON_PASS: &str = "v3/seasonpass";

/// A single episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Episode {
    pub id: i64,
    pub series_id: i64,
    pub tvdb_id: i64,
    pub episode_file_id: i64,
    pub season_number: i64,
    pub episode_number: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub absolute_episode_number: Option<i64>,
    pub title: String,
    /// Local air date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub air_date: Option<String>,
    pub air_date_utc: Option<DateTime<Utc>>,
    pub runtime: i64,
    pub overview: String,
    pub has_file: bool,
    pub monitored: bool,
    pub unverified_scene_numbering: bool,
    pub images: Vec<Image>,
    /// Present when requested with `includeSeries`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Box<Series>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct EpisodeMonitor<'a> {
    episode_ids: &'a [i64],
    monitored: bool,
}

/// Season pass update: per-series monitoring of whole seasons.
///
/// # Example
///
/// ```rust
/// use starr::api::sonarr::{MonitorType, SeasonPass};
///
/// let pass = SeasonPass::new(MonitorType::Future).series(12, &[(1, false), (2, true)]);
/// let json = serde_json::to_value(&pass).unwrap();
/// assert_eq!(json["monitoringOptions"]["monitor"], "future");
/// assert_eq!(json["series"][0]["seasons"][1]["seasonNumber"], 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPass {
    pub series: Vec<SeasonPassSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitoring_options: Option<MonitoringOptions>,
}

/// One series inside a [`SeasonPass`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonPassSeries {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitored: Option<bool>,
    pub seasons: Vec<Season>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoringOptions {
    pub monitor: MonitorType,
}

impl SeasonPass {
    pub fn new(monitor: MonitorType) -> Self {
        Self {
            series: Vec::new(),
            monitoring_options: Some(MonitoringOptions { monitor }),
        }
    }

    /// Adds a series with `(season number, monitored)` pairs.
    pub fn series(mut self, id: i64, seasons: &[(i64, bool)]) -> Self {
        self.series.push(SeasonPassSeries {
            id,
            monitored: None,
            seasons: seasons
                .iter()
                .map(|&(season_number, monitored)| Season {
                    season_number,
                    monitored,
                    statistics: None,
                })
                .collect(),
        });
        self
    }
}

impl Sonarr {
    /// Lists the episodes of a series, optionally of one season.
    pub async fn get_series_episodes(&self, series_id: i64, season: Option<i64>) -> Result<Vec<Episode>> {
        let mut req = Request::new(BP_EPISODE).with_param("seriesId", series_id);
        if let Some(season) = season {
            req = req.with_param("seasonNumber", season);
        }
        self.api.get_into(req).await
    }

    pub async fn get_episode_by_id(&self, id: i64) -> Result<Episode> {
        self.api
            .get_into(Request::new(format!("{BP_EPISODE}/{id}")))
            .await
    }

    /// Sets the monitored flag of several episodes at once.
    pub async fn monitor_episodes(&self, episode_ids: &[i64], monitored: bool) -> Result<Vec<Episode>> {
        let body = EpisodeMonitor {
            episode_ids,
            monitored,
        };
        let req = Request::new(format!("{BP_EPISODE}/monitor")).with_json(&body)?;
        self.api.put_into(req).await
    }

    /// Applies a season pass. The service answers with no useful body.
    pub async fn update_season_pass(&self, pass: &SeasonPass) -> Result<()> {
        let req = Request::new(BP_SEASON_PASS).with_json(pass)?;
        self.api.post(req).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_episode_decodes_with_series() {
        let json = r#"{
            "id": 55, "seriesId": 2, "seasonNumber": 1, "episodeNumber": 3,
            "title": "Open Wide, O Earth", "airDate": "2019-05-20",
            "airDateUtc": "2019-05-20T20:00:00Z", "hasFile": true, "monitored": true,
            "series": {"id": 2, "title": "Chernobyl"}
        }"#;
        let episode: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(episode.episode_number, 3);
        assert_eq!(episode.series.unwrap().title, "Chernobyl");
    }

    #[test]
    fn test_monitor_body() {
        let body = EpisodeMonitor {
            episode_ids: &[1, 2],
            monitored: false,
        };
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"episodeIds":[1,2],"monitored":false}"#
        );
    }
}
