//
//  starr
//  api/readarr/activity.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! History, queue and blocklist.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Readarr;
use crate::api::client::Apier;
use crate::api::common::{Page, PageReq, Protocol, QualityModel, Result, StatusMessage};
use crate::api::request::Request;
use crate::api::servarr::{get_all_pages, get_page, QueueDeleteOpts};

const BP_HISTORY: &str = "v1/history";
const BP_QUEUE: &str = "v1/queue";
const BP_BLOCKLIST: &str = "v1/blocklist";

/// One history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub id: i64,
    pub author_id: i64,
    pub book_id: i64,
    pub source_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub quality_cutoff_not_met: bool,
    pub date: Option<DateTime<Utc>>,
    pub download_id: String,
    /// `grabbed`, `bookFileImported`, `downloadFailed`, ...
    pub event_type: String,
    pub data: Map<String, Value>,
}

/// One item in the download queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueueRecord {
    pub id: i64,
    pub author_id: i64,
    pub book_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<QualityModel>,
    pub size: f64,
    pub title: String,
    pub sizeleft: f64,
    pub timeleft: Option<String>,
    pub estimated_completion_time: Option<DateTime<Utc>>,
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
    pub download_forced: bool,
}

/// A blocklisted release.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlocklistRecord {
    pub id: i64,
    pub author_id: i64,
    pub book_ids: Vec<i64>,
    pub source_title: String,
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
        .check_set("includeUnknownAuthorItems", "true");
    req
}

fn blocklist_defaults(req: &PageReq) -> PageReq {
    let mut req = req.clone();
    req.check_set("sortKey", "date");
    req
}

impl Readarr {
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

    pub async fn get_queue(&self, records: usize, per_page: usize) -> Result<Page<QueueRecord>> {
        let base = queue_defaults(&PageReq::default());
        get_all_pages(self.api.as_ref(), BP_QUEUE, &base, records, per_page).await
    }

    pub async fn delete_queue(&self, id: i64, opts: &QueueDeleteOpts) -> Result<()> {
        let req = Request::new(format!("{BP_QUEUE}/{id}")).with_query(opts.to_params());
        self.api.delete_any(req).await
    }

    pub async fn get_blocklist_page(&self, req: &PageReq) -> Result<Page<BlocklistRecord>> {
        get_page(self.api.as_ref(), BP_BLOCKLIST, blocklist_defaults(req)).await
    }

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
