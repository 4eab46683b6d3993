//
//  starr
//  api/readarr/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Metadata profiles, naming and media management.

use serde::{Deserialize, Serialize};

use super::Readarr;
use crate::api::client::ApierExt;
use crate::api::common::Result;
use crate::api::request::Request;
use crate::api::servarr::MediaManagement;

const BP_METADATA_PROFILE: &str = "v1/metadataprofile";
const BP_NAMING: &str = "v1/config/naming";
const BP_MEDIA_MANAGEMENT: &str = "v1/config/mediamanagement";

/// Filters deciding which of an author's books Readarr tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataProfile {
    pub id: i64,
    pub name: String,
    pub min_popularity: f64,
    pub skip_missing_date: bool,
    pub skip_missing_isbn: bool,
    pub skip_parts_and_sets: bool,
    pub skip_series_secondary: bool,
    /// Comma separated ISO 639-3 codes.
    pub allowed_languages: String,
    pub min_pages: i64,
    pub ignored: String,
}

/// Book file and author folder naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Naming {
    pub id: i64,
    pub rename_books: bool,
    pub replace_illegal_characters: bool,
    pub colon_replacement_format: i64,
    pub standard_book_format: String,
    pub author_folder_format: String,
    pub include_author_name: bool,
    pub include_book_title: bool,
    pub include_quality: bool,
    pub replace_spaces: bool,
}

impl Readarr {
    pub async fn get_metadata_profiles(&self) -> Result<Vec<MetadataProfile>> {
        self.api.get_into(Request::new(BP_METADATA_PROFILE)).await
    }

    pub async fn get_metadata_profile(&self, id: i64) -> Result<MetadataProfile> {
        self.api
            .get_into(Request::new(format!("{BP_METADATA_PROFILE}/{id}")))
            .await
    }

    pub async fn add_metadata_profile(&self, profile: &MetadataProfile) -> Result<MetadataProfile> {
        let req = Request::new(BP_METADATA_PROFILE).with_json(profile)?;
        self.api.post_into(req).await
    }

    pub async fn update_metadata_profile(&self, profile: &MetadataProfile) -> Result<MetadataProfile> {
        let req = Request::new(format!("{BP_METADATA_PROFILE}/{}", profile.id)).with_json(profile)?;
        self.api.put_into(req).await
    }

    pub async fn get_naming(&self) -> Result<Naming> {
        self.api.get_into(Request::new(BP_NAMING)).await
    }

    pub async fn update_naming(&self, naming: &Naming) -> Result<Naming> {
        let req = Request::new(BP_NAMING).with_json(naming)?;
        self.api.put_into(req).await
    }

    pub async fn get_media_management(&self) -> Result<MediaManagement> {
        self.api.get_into(Request::new(BP_MEDIA_MANAGEMENT)).await
    }

    pub async fn update_media_management(&self, config: &MediaManagement) -> Result<MediaManagement> {
        let req = Request::new(BP_MEDIA_MANAGEMENT).with_json(config)?;
        self.api.put_into(req).await
    }
}
