//
//  starr
//  api/sonarr/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Naming and media management settings.

use serde::{Deserialize, Serialize};

use super::Sonarr;
use crate::api::client::ApierExt;
use crate::api::common::Result;
use crate::api::request::Request;
use crate::api::servarr::MediaManagement;

const BP_NAMING: &str = "v3/config/naming";
const BP_MEDIA_MANAGEMENT: &str = "v3/config/mediamanagement";

/// Episode file and folder naming.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Naming {
    pub id: i64,
    pub rename_episodes: bool,
    pub replace_illegal_characters: bool,
    pub colon_replacement_format: i64,
    pub custom_colon_replacement_format: String,
    pub multi_episode_style: i64,
    pub standard_episode_format: String,
    pub daily_episode_format: String,
    pub anime_episode_format: String,
    pub series_folder_format: String,
    pub season_folder_format: String,
    pub specials_folder_format: String,
}

impl Sonarr {
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
