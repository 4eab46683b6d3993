//
//  starr
//  api/radarr/movie.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Movie resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Radarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Language, Ratings, Result};
use crate::api::request::Request;

const BP_MOVIE: &str = "v3/movie";

/// Release status of a movie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MovieStatus {
    Tba,
    Announced,
    InCinemas,
    Released,
    Deleted,
    #[default]
    #[serde(other)]
    Unknown,
}

/// When a movie counts as available for download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MinimumAvailability {
    Tba,
    Announced,
    InCinemas,
    #[default]
    Released,
    Deleted,
}

/// A movie.
///
/// Radarr rates movies from several sources, so `ratings` is keyed by source
/// (`imdb`, `tmdb`, `metacritic`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_language: Option<Language>,
    pub sort_title: String,
    pub size_on_disk: i64,
    pub status: MovieStatus,
    pub overview: String,
    pub in_cinemas: Option<DateTime<Utc>>,
    pub physical_release: Option<DateTime<Utc>>,
    pub digital_release: Option<DateTime<Utc>>,
    pub images: Vec<Image>,
    pub website: String,
    pub year: i64,
    pub has_file: bool,
    pub you_tube_trailer_id: String,
    pub studio: String,
    pub path: String,
    pub quality_profile_id: i64,
    pub monitored: bool,
    pub minimum_availability: MinimumAvailability,
    pub is_available: bool,
    pub folder_name: String,
    pub runtime: i64,
    pub clean_title: String,
    pub imdb_id: String,
    pub tmdb_id: i64,
    pub title_slug: String,
    pub root_folder_path: String,
    pub certification: String,
    pub genres: Vec<String>,
    pub tags: Vec<i64>,
    pub added: Option<DateTime<Utc>>,
    pub ratings: std::collections::BTreeMap<String, Ratings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddMovieOptions>,
}

/// What Radarr should do right after adding a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddMovieOptions {
    pub search_for_movie: bool,
    /// `movieOnly`, `movieAndCollection` or `none`.
    pub monitor: String,
    pub add_method: String,
}

/// A movie to add.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddMovieInput {
    pub tmdb_id: i64,
    pub title: String,
    pub title_slug: String,
    pub year: i64,
    pub quality_profile_id: i64,
    pub root_folder_path: String,
    pub minimum_availability: MinimumAvailability,
    pub monitored: bool,
    pub images: Vec<Image>,
    pub tags: Vec<i64>,
    pub add_options: AddMovieOptions,
}

impl From<&Movie> for AddMovieInput {
    fn from(movie: &Movie) -> Self {
        Self {
            tmdb_id: movie.tmdb_id,
            title: movie.title.clone(),
            title_slug: movie.title_slug.clone(),
            year: movie.year,
            quality_profile_id: movie.quality_profile_id,
            root_folder_path: movie.root_folder_path.clone(),
            minimum_availability: movie.minimum_availability,
            monitored: movie.monitored,
            images: movie.images.clone(),
            tags: movie.tags.clone(),
            add_options: AddMovieOptions::default(),
        }
    }
}

impl Radarr {
    /// Lists movies, optionally only the one with `tmdb_id`.
    pub async fn get_movie(&self, tmdb_id: Option<i64>) -> Result<Vec<Movie>> {
        let mut req = Request::new(BP_MOVIE);
        if let Some(tmdb_id) = tmdb_id {
            req = req.with_param("tmdbId", tmdb_id);
        }
        self.api.get_into(req).await
    }

    pub async fn get_movie_by_id(&self, id: i64) -> Result<Movie> {
        self.api
            .get_into(Request::new(format!("{BP_MOVIE}/{id}")))
            .await
    }

    /// Searches the metadata source. `term` may be a title, `tmdb:<id>` or `imdb:<id>`.
    pub async fn lookup_movie(&self, term: &str) -> Result<Vec<Movie>> {
        let req = Request::new(format!("{BP_MOVIE}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    pub async fn add_movie(&self, movie: &AddMovieInput) -> Result<Movie> {
        let req = Request::new(BP_MOVIE).with_json(movie)?;
        self.api.post_into(req).await
    }

    /// Updates a movie. With `move_files`, a changed path moves the files too.
    pub async fn update_movie(&self, movie: &Movie, move_files: bool) -> Result<Movie> {
        let req = Request::new(format!("{BP_MOVIE}/{}", movie.id))
            .with_param("moveFiles", move_files)
            .with_json(movie)?;
        self.api.put_into(req).await
    }

    pub async fn delete_movie(&self, id: i64, delete_files: bool, add_import_exclusion: bool) -> Result<()> {
        let req = Request::new(format!("{BP_MOVIE}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportExclusion", add_import_exclusion);
        self.api.delete_any(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_decodes() {
        let json = r#"{
            "id": 1, "title": "The Matrix", "year": 1999, "tmdbId": 603,
            "status": "released", "minimumAvailability": "inCinemas",
            "ratings": {"imdb": {"votes": 2000000, "value": 8.7}, "tmdb": {"votes": 24000, "value": 8.2}},
            "inCinemas": "1999-03-30T00:00:00Z"
        }"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.status, MovieStatus::Released);
        assert_eq!(movie.minimum_availability, MinimumAvailability::InCinemas);
        assert_eq!(movie.ratings["imdb"].value, 8.7);
    }
}
