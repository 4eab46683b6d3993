//
//  starr
//  api/servarr/folders.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Root folders and remote path mappings.

use serde::{Deserialize, Serialize};

/// A library root folder.
///
/// Lidarr and Readarr attach default profiles to their root folders; those
/// fields are absent on Sonarr and Radarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RootFolder {
    pub id: i64,
    pub path: String,
    pub accessible: bool,
    /// Bytes.
    pub free_space: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_metadata_profile_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_quality_profile_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_tags: Option<Vec<i64>>,
    #[serde(skip_serializing)]
    pub unmapped_folders: Vec<UnmappedFolder>,
}

/// A folder under a root that no library item claims.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UnmappedFolder {
    pub name: String,
    pub path: String,
    pub relative_path: String,
}

/// Maps a path as a download client reports it to the local path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemotePathMapping {
    pub id: i64,
    pub host: String,
    pub remote_path: String,
    pub local_path: String,
}
