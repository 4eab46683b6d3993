//
//  starr
//  api/sonarr/import.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Manual import and import lists.
//!
//! A manual import is two steps: list what Sonarr would do with the files in
//! a folder ([`Sonarr::get_manual_import`]), then send the chosen files back
//! as a `ManualImport` command ([`Sonarr::manual_import`]).

use serde::{Deserialize, Serialize};

use super::{Episode, Series, Sonarr};
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Error, Language, QualityModel, Result};
use crate::api::request::{Params, Request};
use crate::api::servarr::{
    add_provider, update_provider, CommandRequest, CommandResponse, ImportListInput,
    ImportListOutput, Servarr,
};

const BP_MANUAL_IMPORT: &str = "v3/manualimport";
const BP_IMPORT_LIST: &str = "v3/importlist";

/// How imported files are moved into the library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ImportMode {
    #[default]
    Auto,
    Move,
    Copy,
}

/// Which folder or download to scan for a manual import.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManualImportParams {
    pub folder: Option<String>,
    pub download_id: Option<String>,
    pub series_id: Option<i64>,
    pub season_number: Option<i64>,
    pub filter_existing_files: bool,
}

impl ManualImportParams {
    fn to_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(folder) = &self.folder {
            params.set("folder", folder);
        }
        if let Some(download_id) = &self.download_id {
            params.set("downloadId", download_id);
        }
        if let Some(series_id) = self.series_id {
            params.set("seriesId", series_id);
        }
        if let Some(season) = self.season_number {
            params.set("seasonNumber", season);
        }
        params.set_bool("filterExistingFiles", self.filter_existing_files);
        params
    }
}

/// A file Sonarr found, with its guess at what it is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualImportOutput {
    pub id: i64,
    pub path: String,
    pub relative_path: String,
    pub folder_name: String,
    pub name: String,
    /// Bytes.
    pub size: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season_number: Option<i64>,
    pub episodes: Vec<Episode>,
    pub release_group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub languages: Vec<Language>,
    pub quality_weight: i64,
    pub download_id: String,
    pub rejections: Vec<Rejection>,
}

/// Why a file would not be imported.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Rejection {
    pub reason: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// A file to import, as sent in the `ManualImport` command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ManualImportInput {
    pub path: String,
    pub series_id: i64,
    pub season_number: i64,
    pub episode_ids: Vec<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub languages: Vec<Language>,
    pub release_group: String,
    pub download_id: String,
}

impl From<&ManualImportOutput> for ManualImportInput {
    fn from(found: &ManualImportOutput) -> Self {
        Self {
            path: found.path.clone(),
            series_id: found.series.as_ref().map(|s| s.id).unwrap_or_default(),
            season_number: found.season_number.unwrap_or_default(),
            episode_ids: found.episodes.iter().map(|e| e.id).collect(),
            quality: found.quality.clone(),
            languages: found.languages.clone(),
            release_group: found.release_group.clone(),
            download_id: found.download_id.clone(),
        }
    }
}

impl Sonarr {
    /// Lists the importable files of a folder or download.
    pub async fn get_manual_import(&self, params: &ManualImportParams) -> Result<Vec<ManualImportOutput>> {
        let req = Request::new(BP_MANUAL_IMPORT).with_query(params.to_params());
        self.api.get_into(req).await
    }

    /// Starts a `ManualImport` command for `files`.
    pub async fn manual_import(&self, files: &[ManualImportInput], mode: ImportMode) -> Result<CommandResponse> {
        let files = serde_json::to_value(files).map_err(Error::Encode)?;
        let mode = serde_json::to_value(mode).map_err(Error::Encode)?;
        let command = CommandRequest::new("ManualImport")
            .arg("files", files)
            .arg("importMode", mode);
        self.send_command(&command).await
    }

    pub async fn get_import_lists(&self) -> Result<Vec<ImportListOutput>> {
        self.api.get_into(Request::new(BP_IMPORT_LIST)).await
    }

    pub async fn get_import_list(&self, id: i64) -> Result<ImportListOutput> {
        self.api
            .get_into(Request::new(format!("{BP_IMPORT_LIST}/{id}")))
            .await
    }

    pub async fn add_import_list(&self, list: &ImportListInput) -> Result<ImportListOutput> {
        add_provider(self.api.as_ref(), BP_IMPORT_LIST.to_string(), list).await
    }

    pub async fn update_import_list(&self, list: &ImportListInput, force: bool) -> Result<ImportListOutput> {
        let uri = format!("{BP_IMPORT_LIST}/{}", list.id);
        update_provider(self.api.as_ref(), uri, list, force).await
    }

    pub async fn delete_import_list(&self, id: i64) -> Result<()> {
        self.api
            .delete_any(Request::new(format!("{BP_IMPORT_LIST}/{id}")))
            .await
    }
}
