//
//  starr
//  api/prowlarr/history.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Search and grab history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Prowlarr;
use crate::api::common::{Page, PageReq, Result};
use crate::api::servarr::{get_all_pages, get_page};

const BP_HISTORY: &str = "v1/history";

/// One history entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HistoryRecord {
    pub id: i64,
    pub indexer_id: i64,
    pub date: Option<DateTime<Utc>>,
    pub download_id: String,
    pub successful: bool,
    /// `releaseGrabbed`, `indexerQuery`, `indexerRss`, `indexerAuth` or `indexerInfo`.
    pub event_type: String,
    /// Query, elapsed time, host and similar details.
    pub data: Map<String, Value>,
}

fn history_defaults(req: &PageReq) -> PageReq {
    let mut req = req.clone();
    req.check_set("sortKey", "date");
    req
}

impl Prowlarr {
    pub async fn get_history_page(&self, req: &PageReq) -> Result<Page<HistoryRecord>> {
        get_page(self.api.as_ref(), BP_HISTORY, history_defaults(req)).await
    }

    /// Fetches up to `records` history entries (0 for all), `per_page` at a time.
    pub async fn get_history(&self, records: usize, per_page: usize) -> Result<Page<HistoryRecord>> {
        let base = history_defaults(&PageReq::default());
        get_all_pages(self.api.as_ref(), BP_HISTORY, &base, records, per_page).await
    }
}
