//
//  starr
//  api/readarr/author.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Author resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Readarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Image, Ratings, Result};
use crate::api::request::Request;

const BP_AUTHOR: &str = "v1/author";

/// An author.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Author {
    pub id: i64,
    pub author_metadata_id: i64,
    pub status: String,
    pub ended: bool,
    pub author_name: String,
    pub author_name_last_first: String,
    pub foreign_author_id: String,
    pub title_slug: String,
    pub overview: String,
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
    pub statistics: Option<AuthorStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_options: Option<AddAuthorOptions>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuthorStatistics {
    pub book_file_count: i64,
    pub book_count: i64,
    pub available_book_count: i64,
    pub total_book_count: i64,
    pub size_on_disk: i64,
    pub percent_of_books: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AddAuthorOptions {
    pub monitor: String,
    pub monitored: bool,
    pub search_for_missing_books: bool,
}

impl Readarr {
    /// Lists authors, optionally only the one with GoodReads ID `gr_id`.
    pub async fn get_author(&self, gr_id: Option<&str>) -> Result<Vec<Author>> {
        let mut req = Request::new(BP_AUTHOR);
        if let Some(gr_id) = gr_id {
            req = req.with_param("grId", gr_id);
        }
        self.api.get_into(req).await
    }

    pub async fn get_author_by_id(&self, id: i64) -> Result<Author> {
        self.api
            .get_into(Request::new(format!("{BP_AUTHOR}/{id}")))
            .await
    }

    pub async fn lookup_author(&self, term: &str) -> Result<Vec<Author>> {
        let req = Request::new(format!("{BP_AUTHOR}/lookup")).with_param("term", term);
        self.api.get_into(req).await
    }

    pub async fn add_author(&self, author: &Author) -> Result<Author> {
        let req = Request::new(BP_AUTHOR).with_json(author)?;
        self.api.post_into(req).await
    }

    pub async fn update_author(&self, author: &Author, move_files: bool) -> Result<Author> {
        let req = Request::new(format!("{BP_AUTHOR}/{}", author.id))
            .with_param("moveFiles", move_files)
            .with_json(author)?;
        self.api.put_into(req).await
    }

    pub async fn delete_author(&self, id: i64, delete_files: bool, add_import_list_exclusion: bool) -> Result<()> {
        let req = Request::new(format!("{BP_AUTHOR}/{id}"))
            .with_param("deleteFiles", delete_files)
            .with_param("addImportListExclusion", add_import_list_exclusion);
        self.api.delete_any(req).await
    }
}
