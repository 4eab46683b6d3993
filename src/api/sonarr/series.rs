//
//  starr
//  api/sonarr/series.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Series resources.
//!
//! # Endpoints
//!
//! | Method | URI | Wrapper |
//! |--------|-----|---------|
//! | GET | `v3/series` | [`Sonarr::get_series`] |
//! | GET | `v3/series/{id}` | [`Sonarr::get_series_by_id`] |
//! | GET | `v3/series/lookup` | [`Sonarr::lookup_series`] |
//! | POST | `v3/series` | [`Sonarr::add_series`] |
//! | PUT | `v3/series/{id}` | [`Sonarr::update_series`] |
//! | DELETE | `v3/series/{id}` | [`Sonarr::delete_series`] |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Sonarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Language, Ratings, Result};
use crate::api::request::Request;

const BP_SERIES: &str = "v3/series";

/// Airing status of a series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesStatus {
    Continuing,
    Ended,
    Upcoming,
    Deleted,
    #[default]
    #[serde(other)]
    Unknown,
}

/// How episodes of a series are numbered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SeriesType {
    #[default]
    Standard,
    Daily,
    Anime,
}

/// Which episodes to monitor when adding a series or using the season pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonitorType {
    #[default]
    Unknown,
    All,
    Future,
    Missing,
    Existing,
    FirstSeason,
    LastSeason,
    LatestSeason,
    Pilot,
    Recent,
    MonitorSpecials,
    UnmonitorSpecials,
    None,
    Skip,
}

/// A TV series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Series {
    pub id: i64,
    pub title: String,
    pub alternate_titles: Vec<AlternateTitle>,
    pub sort_title: String,
    pub status: SeriesStatus,
    pub ended: bool,
    pub overview: String,
    pub previous_airing: Option<DateTime<Utc>>,
    pub next_airing: Option<DateTime<Utc>>,
    pub network: String,
    pub air_time: String,
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<Language>,
    pub seasons: Vec<Season>,
    pub year: i64,
    pub path: String,
    pub quality_profile_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_profile_id: Option<i64>,
    pub season_folder: bool,
    pub monitored: bool,
    pub monitor_new_items: String,
    pub use_scene_numbering: bool,
    pub runtime: i64,
    pub tvdb_id: i64,
    pub tv_rage_id: i64,
    pub tv_maze_id: i64,
    pub first_aired: Option<DateTime<Utc>>,
    pub last_aired: Option<DateTime<Utc>>,
    pub series_type: SeriesType,
    pub clean_title: String,
    pub imdb_id: String,
    pub title_slug: String,
    pub root_folder_path: String,
    pub certification: String,
    pub genres: Vec<String>,
    pub tags: Vec<i64>,
    pub added: Option<DateTime<Utc>>,
    pub ratings: Ratings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SeriesStatistics>,
}

/// An alternate or scene title.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlternateTitle {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_season_number: Option<i64>,
}

/// One season of a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Season {
    pub season_number: i64,
    pub monitored: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<SeasonStatistics>,
}

/// File and episode counts for a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeriesStatistics {
    pub season_count: i64,
    pub episode_file_count: i64,
    pub episode_count: i64,
    pub total_episode_count: i64,
    pub size_on_disk: i64,
    pub percent_of_episodes: f64,
    pub release_groups: Vec<String>,
}

/// File and episode counts for a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeasonStatistics {
    pub previous_airing: Option<DateTime<Utc>>,
    pub next_airing: Option<DateTime<Utc>>,
    pub episode_file_count: i64,
    pub episode_count: i64,
    pub total_episode_count: i64,
    pub size_on_disk: i64,
    pub percent_of_episodes: f64,
}

/// A series to add.
///
/// Build it from a [`Sonarr::lookup_series`] result, then pick the profile,
/// root folder and monitoring options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddSeriesInput {
    pub tvdb_id: i64,
    pub title: String,
    pub title_slug: String,
    pub quality_profile_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_profile_id: Option<i64>,
    pub root_folder_path: String,
    pub monitored: bool,
    pub season_folder: bool,
    pub series_type: SeriesType,
    pub seasons: Vec<Season>,
    pub images: Vec<Image>,
    pub tags: Vec<i64>,
    pub add_options: AddSeriesOptions,
}

impl From<&Series> for AddSeriesInput {
    fn from(series: &Series) -> Self {
        Self {
            tvdb_id: series.tvdb_id,
            title: series.title.clone(),
            title_slug: series.title_slug.clone(),
            quality_profile_id: series.quality_profile_id,
            language_profile_id: series.language_profile_id,
            root_folder_path: series.root_folder_path.clone(),
            monitored: series.monitored,
            season_folder: series.season_folder,
            series_type: series.series_type,
            seasons: series.seasons.clone(),
            images: series.images.clone(),
            tags: series.tags.clone(),
            add_options: AddSeriesOptions::default(),
        }
    }
}

/// What Sonarr should do right after adding a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddSeriesOptions {
    pub search_for_missing_episodes: bool,
    pub search_for_cutoff_unmet_episodes: bool,
    pub ignore_episodes_with_files: bool,
    pub ignore_episodes_without_files: bool,
    pub monitor: MonitorType,
}

impl Sonarr {
    /// Lists series, optionally only the one with `tvdb_id`.
    pub async fn get_series(&self, tvdb_id: Option<i64>) -> Result<Vec<Series>> {
        let mut req = Request::new(BP_SERIES);
        if let Some(tvdb_id) = tvdb_id {
            req = req.with_param("tvdbId", tvdb_id);
        }
        self.api.get_into(req).await
    }

    pub async fn get_series_by_id(&self, id: i64) -> Result<Series> {
        self.api
            .get_into(Request::new(format!("{BP_SERIES}/{id}")))
            .await
    }

    /// Searches the metadata source. `term` may be a title or `tvdb:<id>`.
    pub async fn lookup_series(&self, term: &str) -> Result<Vec<Series>> {
        let req = Request::new(format!("{BP_SERIES}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    pub async fn add_series(&self, series: &AddSeriesInput) -> Result<Series> {
        let req = Request::new(BP_SERIES).with_json(series)?;
        self.api.post_into(req).await
    }

    /// Updates a series. With `move_files`, a changed path moves the files on
    /// disk too.
    pub async fn update_series(&self, series: &Series, move_files: bool) -> Result<Series> {
        let req = Request::new(format!("{BP_SERIES}/{}", series.id))
            .with_param("moveFiles", move_files)
            .with_json(series)?;
        self.api.put_into(req).await
    }

    /// Deletes a series, optionally with its files and a list exclusion.
    pub async fn delete_series(
        &self,
        id: i64,
        delete_files: bool,
        add_import_list_exclusion: bool,
    ) -> Result<()> {
        let req = Request::new(format!("{BP_SERIES}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportListExclusion", add_import_list_exclusion);
        self.api.delete_any(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_decodes() {
        let json = r#"{
            "id": 2, "title": "Chernobyl", "status": "ended", "ended": true,
            "seriesType": "standard", "tvdbId": 360893, "year": 2019,
            "seasons": [{"seasonNumber": 1, "monitored": true}],
            "firstAired": "2019-05-06T00:00:00Z",
            "ratings": {"votes": 100, "value": 9.3},
            "statistics": {"seasonCount": 1, "episodeFileCount": 5, "percentOfEpisodes": 100.0}
        }"#;
        let series: Series = serde_json::from_str(json).unwrap();
        assert_eq!(series.id, 2);
        assert_eq!(series.status, SeriesStatus::Ended);
        assert_eq!(series.seasons.len(), 1);
        assert_eq!(series.statistics.unwrap().episode_file_count, 5);
        assert!(series.first_aired.is_some());
    }

    #[test]
    fn test_unknown_status() {
        let series: Series = serde_json::from_str(r#"{"status": "tba"}"#).unwrap();
        assert_eq!(series.status, SeriesStatus::Unknown);
    }

    #[test]
    fn test_add_input_from_lookup() {
        let found = Series {
            tvdb_id: 81189,
            title: "Breaking Bad".into(),
            title_slug: "breaking-bad".into(),
            series_type: SeriesType::Standard,
            ..Default::default()
        };
        let mut input = AddSeriesInput::from(&found);
        input.add_options.monitor = MonitorType::FirstSeason;

        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["tvdbId"], 81189);
        assert_eq!(json["addOptions"]["monitor"], "firstSeason");
        assert!(json.get("languageProfileId").is_none());
    }
}
