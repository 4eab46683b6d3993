//
//  starr
//  api/lidarr/artist.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Artist resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Lidarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Ratings, Result};
use crate::api::request::Request;

const BP_ARTIST: &str = "v1/artist";

/// An artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Artist {
    pub id: i64,
    pub status: String,
    pub ended: bool,
    pub artist_name: String,
    pub foreign_artist_id: String,
    pub tadb_id: i64,
    pub discogs_id: i64,
    pub overview: String,
    pub artist_type: String,
    pub disambiguation: String,
    pub images: Vec<Image>,
    pub path: String,
    pub quality_profile_id: i64,
    pub metadata_profile_id: i64,
    pub monitored: bool,
    pub monitor_new_items: String,
    pub root_folder_path: String,
    pub genres: Vec<String>,
    pub clean_name: String,
    pub sort_name: String,
    pub tags: Vec<i64>,
    pub added: Option<DateTime<Utc>>,
    pub ratings: Ratings,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ArtistStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddArtistOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ArtistStatistics {
    pub album_count: i64,
    pub track_file_count: i64,
    pub track_count: i64,
    pub total_track_count: i64,
    pub size_on_disk: i64,
    pub percent_of_tracks: f64,
}

/// What Lidarr should do right after adding an artist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddArtistOptions {
    /// `all`, `future`, `missing`, `existing`, `first`, `latest` or `none`.
    pub monitor: String,
    pub monitored: bool,
    pub search_for_missing_albums: bool,
}

impl Lidarr {
    /// Lists artists, optionally only the one with MusicBrainz ID `mb_id`.
    pub async fn get_artist(&self, mb_id: Option<&str>) -> Result<Vec<Artist>> {
        let mut req = Request::new(BP_ARTIST);
        if let Some(mb_id) = mb_id {
            req = req.with_param("mbId", mb_id);
        }
        self.api.get_into(req).await
    }

    pub async fn get_artist_by_id(&self, id: i64) -> Result<Artist> {
        self.api
            .get_into(Request::new(format!("{BP_ARTIST}/{id}")))
            .await
    }

    /// Searches the metadata source. `term` may be a name or `lidarr:<mbid>`.
    pub async fn lookup_artist(&self, term: &str) -> Result<Vec<Artist>> {
        let req = Request::new(format!("{BP_ARTIST}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    /// Adds an artist. Set `add_options` to control monitoring and searching.
    pub async fn add_artist(&self, artist: &Artist) -> Result<Artist> {
        let req = Request::new(BP_ARTIST)
            .with_param("moveFiles", true)
            .with_json(artist)?;
        self.api.post_into(req).await
    }

    pub async fn update_artist(&self, artist: &Artist, move_files: bool) -> Result<Artist> {
        let req = Request::new(format!("{BP_ARTIST}/{}", artist.id))
            .with_param("moveFiles", move_files)
            .with_json(artist)?;
        self.api.put_into(req).await
    }

    pub async fn delete_artist(&self, id: i64, delete_files: bool, add_import_list_exclusion: bool) -> Result<()> {
        let req = Request::new(format!("{BP_ARTIST}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportListExclusion", add_import_list_exclusion);
        self.api.delete_any(req).await
    }
}
