//
//  starr
//  api/sonarr/activity.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! History, queue and blocklist.
//!
//! Each list has a single-page call taking a [`PageReq`] and an aggregate
//! call taking a record cap and page size, which drains pages with
//! [`get_all_pages`](crate::api::servarr::get_all_pages).
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::common::{PageReq, SortDirection};
//! use starr::api::sonarr::Sonarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let sonarr = Sonarr::new(Config::new("http://localhost:8989", "key"))?;
//!
//! // Exactly one page, oldest first.
//! let page = sonarr
//!     .get_history_page(&PageReq::new(1, 20).sort_by("date", SortDirection::Ascending))
//!     .await?;
//!
//! // Whole queue, 50 per request.
//! let queue = sonarr.get_queue(0, 50).await?;
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Sonarr;
use crate::api::client::Apier;
use crate::api::common::{Language, Page, PageReq, Protocol, QualityModel, Result, StatusMessage};
use crate::api::request::Request;
use crate::api::servarr::{get_all_pages, get_page, QueueDeleteOpts};

const BP_HISTORY: &str = "v3/history";
const BP_QUEUE: &str = "v3/queue";
const BP_BLOCKLIST: &str = "v3/blocklist";

/// What a history record describes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HistoryEventType {
    Grabbed,
    SeriesFolderImported,
    DownloadFolderImported,
    DownloadFailed,
    EpisodeFileDeleted,
    EpisodeFileRenamed,
    DownloadIgnored,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub id: i64,
    pub episode_id: i64,
    pub series_id: i64,
    pub source_title: String,
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub quality_cutoff_not_met: bool,
    pub date: Option<DateTime<Utc>>,
    pub download_id: String,
    pub event_type: HistoryEventType,
    /// Event-specific details such as indexer, release group or reason.
    pub data: Map<String, Value>,
}

/// One item in the download queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueRecord {
    pub id: i64,
    pub series_id: i64,
    pub episode_id: i64,
    pub season_number: i64,
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    /// Bytes.
    pub size: f64,
    pub title: String,
    /// Bytes left to download.
    pub sizeleft: f64,
    pub timeleft: Option<String>,
    pub estimated_completion_time: Option<DateTime<Utc>>,
    pub added: Option<DateTime<Utc>>,
    pub status: String,
    pub tracked_download_status: String,
    pub tracked_download_state: String,
    pub status_messages: Vec<StatusMessage>,
    pub error_message: String,
    pub download_id: String,
    pub protocol: Protocol,
    pub download_client: String,
    pub indexer: String,
    pub output_path: String,
    pub episode_has_file: bool,
}

/// A blocklisted release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlocklistRecord {
    pub id: i64,
    pub series_id: i64,
    pub episode_ids: Vec<i64>,
    pub source_title: String,
    pub languages: Vec<Language>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub date: Option<DateTime<Utc>>,
    pub protocol: Protocol,
    pub indexer: String,
    pub message: String,
}

fn history_defaults(req: &PageReq) -> PageReq {
    let mut req = req.clone();
    req.check_set("sortKey", "date");
    req
}

fn queue_defaults(req: &PageReq) -> PageReq {
    let mut req = req.clone();
    req.check_set("sortKey", "timeleft")
        .check_set("includeUnknownSeriesItems", "true");
    req
}

fn blocklist_defaults(req: &PageReq) -> PageReq {
    let mut req = req.clone();
    req.check_set("sortKey", "date");
    req
}

impl Sonarr {
    /// Fetches one page of history, newest first unless sorted otherwise.
    pub async fn get_history_page(&self, req: &PageReq) -> Result<Page<HistoryRecord>> {
        get_page(self.api.as_ref(), BP_HISTORY, history_defaults(req)).await
    }

    /// Fetches up to `records` history entries (0 for all), `per_page` at a time.
    pub async fn get_history(&self, records: usize, per_page: usize) -> Result<Page<HistoryRecord>> {
        let base = history_defaults(&PageReq::default());
        get_all_pages(self.api.as_ref(), BP_HISTORY, &base, records, per_page).await
    }

    pub async fn get_queue_page(&self, req: &PageReq) -> Result<Page<QueueRecord>> {
        get_page(self.api.as_ref(), BP_QUEUE, queue_defaults(req)).await
    }

    /// Fetches up to `records` queue items (0 for all), `per_page` at a time.
    pub async fn get_queue(&self, records: usize, per_page: usize) -> Result<Page<QueueRecord>> {
        let base = queue_defaults(&PageReq::default());
        get_all_pages(self.api.as_ref(), BP_QUEUE, &base, records, per_page).await
    }

    /// Removes an item from the queue.
    pub async fn delete_queue(&self, id: i64, opts: &QueueDeleteOpts) -> Result<()> {
        let req = Request::new(format!("{BP_QUEUE}/{id}")).with_query(opts.to_params());
        self.api.delete_any(req).await
    }

    pub async fn get_blocklist_page(&self, req: &PageReq) -> Result<Page<BlocklistRecord>> {
        get_page(self.api.as_ref(), BP_BLOCKLIST, blocklist_defaults(req)).await
    }

    /// Fetches up to `records` blocklist entries (0 for all), `per_page` at a time.
    pub async fn get_blocklist(&self, records: usize, per_page: usize) -> Result<Page<BlocklistRecord>> {
        let base = blocklist_defaults(&PageReq::default());
        get_all_pages(self.api.as_ref(), BP_BLOCKLIST, &base, records, per_page).await
    }

    pub async fn delete_blocklist(&self, id: i64) -> Result<()> {
        self.api
            .delete_any(Request::new(format!("{BP_BLOCKLIST}/{id}")))
            .await
    }
}
