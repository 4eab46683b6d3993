//
//  starr
//  api/lidarr/album.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Album resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Artist, Lidarr};
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Ratings, Result};
use crate::api::request::{Params, Request};

const BP_ALBUM: &str = "v1/album";

/// An album.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Album {
    pub id: i64,
    pub title: String,
    pub disambiguation: String,
    pub overview: String,
    pub artist_id: i64,
    pub foreign_album_id: String,
    pub monitored: bool,
    pub any_release_ok: bool,
    pub profile_id: i64,
    pub duration: i64,
    pub album_type: String,
    pub secondary_types: Vec<String>,
    pub medium_count: i64,
    pub ratings: Ratings,
    pub release_date: Option<DateTime<Utc>>,
    pub genres: Vec<String>,
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<AlbumStatistics>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumStatistics {
    pub track_file_count: i64,
    pub track_count: i64,
    pub total_track_count: i64,
    pub size_on_disk: i64,
    pub percent_of_tracks: f64,
}

/// Filters for [`Lidarr::get_albums`]. Empty fields are not sent.
#[derive(Debug, Clone, Default)]
pub struct AlbumFilter {
    pub artist_id: Option<i64>,
    pub foreign_album_id: Option<String>,
    pub album_ids: Vec<i64>,
    pub include_all_artist_albums: bool,
}

impl AlbumFilter {
    pub fn artist(artist_id: i64) -> Self {
        Self {
            artist_id: Some(artist_id),
            ..Self::default()
        }
    }

    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(id) = self.artist_id {
            params.set("artistId", id);
        }
        if let Some(id) = &self.foreign_album_id {
            params.set("foreignAlbumId", id);
        }
        params.add_all("albumIds", &self.album_ids);
        if self.include_all_artist_albums {
            params.set_bool("includeAllArtistAlbums", true);
        }
        params
    }
}

impl Lidarr {
    /// Lists albums matching `filter`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use starr::api::lidarr::{AlbumFilter, Lidarr};
    /// # async fn run(lidarr: Lidarr) -> starr::Result<()> {
    /// let albums = lidarr.get_albums(&AlbumFilter::artist(12)).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_albums(&self, filter: &AlbumFilter) -> Result<Vec<Album>> {
        let req = Request::new(BP_ALBUM).with_query(filter.to_params());
        self.api.get_into(req).await
    }

    pub async fn get_album_by_id(&self, id: i64) -> Result<Album> {
        self.api
            .get_into(Request::new(format!("{BP_ALBUM}/{id}")))
            .await
    }

    pub async fn lookup_album(&self, term: &str) -> Result<Vec<Album>> {
        let req = Request::new(format!("{BP_ALBUM}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    pub async fn update_album(&self, album: &Album, move_files: bool) -> Result<Album> {
        let req = Request::new(format!("{BP_ALBUM}/{}", album.id))
            .with_param("moveFiles", move_files)
            .with_json(album)?;
        self.api.put_into(req).await
    }

    pub async fn delete_album(&self, id: i64, delete_files: bool, add_import_list_exclusion: bool) -> Result<()> {
        let req = Request::new(format!("{BP_ALBUM}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportListExclusion", add_import_list_exclusion);
        self.api.delete_any(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_album_filter_params() {
        let filter = AlbumFilter {
            artist_id: Some(3),
            album_ids: vec![7, 9],
            ..AlbumFilter::default()
        };
        assert_eq!(filter.to_params().encode(), "albumIds=7&albumIds=9&artistId=3");
    }

    #[test]
    fn test_empty_filter_sends_nothing() {
        assert!(AlbumFilter::default().to_params().is_empty());
    }
}
