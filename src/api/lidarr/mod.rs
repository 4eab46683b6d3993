//
//  starr
//  api/lidarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lidarr API v1.
//!
//! Typed wrappers for Lidarr, the music manager: artists, albums, metadata
//! profiles, history and queue. Configuration endpoints come from
//! [`Servarr`] and [`MediaServarr`].

pub mod activity;
pub mod album;
pub mod artist;

pub use activity::*;
pub use album::*;
pub use artist::*;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::client::{Apier, ApierExt, Config};
use crate::api::common::{App, Result};
use crate::api::request::Request;
use crate::api::servarr::{MediaServarr, Servarr};

/// API version segment of every Lidarr URI.
pub const API_VERSION: &str = "v1";

const BP_METADATA_PROFILE: &str = "v1/metadataprofile";

/// A Lidarr client.
#[derive(Clone)]
pub struct Lidarr {
    api: Arc<dyn Apier>,
}

impl Lidarr {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_api(config.build()?))
    }

    pub fn with_api(api: impl Apier + 'static) -> Self {
        Self { api: Arc::new(api) }
    }

    pub async fn get_metadata_profiles(&self) -> Result<Vec<MetadataProfile>> {
        self.api.get_into(Request::new(BP_METADATA_PROFILE)).await
    }

    pub async fn get_metadata_profile(&self, id: i64) -> Result<MetadataProfile> {
        self.api
            .get_into(Request::new(format!("{BP_METADATA_PROFILE}/{id}")))
            .await
    }
}

impl Servarr for Lidarr {
    fn api(&self) -> &dyn Apier {
        self.api.as_ref()
    }

    fn app(&self) -> App {
        App::Lidarr
    }
}

impl MediaServarr for Lidarr {}

impl fmt::Debug for Lidarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lidarr").finish_non_exhaustive()
    }
}

/// Which album types and release statuses to track.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataProfile {
    pub id: i64,
    pub name: String,
    pub primary_album_types: Vec<AlbumTypeItem>,
    pub secondary_album_types: Vec<AlbumTypeItem>,
    pub release_statuses: Vec<ReleaseStatusItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlbumTypeItem {
    pub album_type: NamedId,
    pub allowed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseStatusItem {
    pub release_status: NamedId,
    pub allowed: bool,
}

/// An `{id, name}` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NamedId {
    pub id: i64,
    pub name: String,
}
