//
//  starr
//  cli/activity.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! History, queue and blocklist commands
//!
//! These work across every service by reading records as untyped JSON, so
//! one command covers the five different record shapes.
//!
//! ## Examples
//!
//! ```bash
//! # Last 20 history events of the default instance
//! starr history --records 20
//!
//! # Whole queue of the "movies" instance as JSON
//! starr queue -i movies --records 0 --json
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use serde_json::Value;

use crate::api::common::{App, Page, PageReq, SortDirection, DEFAULT_PAGE_SIZE};
use crate::api::servarr::get_all_pages;
use crate::output::{format_size, format_status, json_cell, truncate, OutputFormat, OutputWriter, TableBuilder};

use super::{Connection, GlobalOptions};

/// Which list to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    History,
    Queue,
    Blocklist,
}

impl ActivityKind {
    fn resource(&self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Queue => "queue",
            Self::Blocklist => "blocklist",
        }
    }

    fn default_sort_key(&self) -> &'static str {
        match self {
            Self::Queue => "timeleft",
            Self::History | Self::Blocklist => "date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl From<SortOrder> for SortDirection {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => SortDirection::Ascending,
            SortOrder::Desc => SortDirection::Descending,
        }
    }
}

/// List options shared by history, queue and blocklist
#[derive(Args, Debug)]
pub struct ActivityCommand {
    /// Maximum number of records (0 for all)
    #[arg(long, short = 'n', default_value_t = 50)]
    pub records: usize,

    /// Records requested per page
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub per_page: usize,

    /// Field to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort order
    #[arg(long, value_enum)]
    pub order: Option<SortOrder>,
}

/// Query parameter that makes the queue include items not matched to the library.
fn unknown_items_param(app: App) -> Option<&'static str> {
    match app {
        App::Sonarr => Some("includeUnknownSeriesItems"),
        App::Radarr => Some("includeUnknownMovieItems"),
        App::Lidarr => Some("includeUnknownArtistItems"),
        App::Readarr => Some("includeUnknownAuthorItems"),
        App::Prowlarr => None,
    }
}

impl ActivityCommand {
    pub async fn run(&self, kind: ActivityKind, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        let conn = Connection::open(global, None)?;
        let app = conn.app();

        if app == App::Prowlarr && kind != ActivityKind::History {
            bail!("Prowlarr has no {}", kind.resource());
        }

        let base = self.base_request(kind, app);
        let uri = format!("{}/{}", app.api_version(), kind.resource());
        let client = conn.client()?;
        let page: Page<Value> = get_all_pages(&client, &uri, &base, self.records, self.per_page)
            .await
            .with_context(|| format!("Failed to fetch {} of '{}'", kind.resource(), conn.name))?;

        if writer.is_json() {
            return crate::output::write_json(&page);
        }
        print_records(kind, &page, writer.color_enabled());
        Ok(())
    }

    fn base_request(&self, kind: ActivityKind, app: App) -> PageReq {
        let mut req = PageReq::default();
        if let Some(sort) = &self.sort {
            req = req.sort_by(sort.clone(), self.order.map(Into::into).unwrap_or_default());
        } else if let Some(order) = self.order {
            req = req.sort_by(kind.default_sort_key(), order.into());
        }
        req.check_set("sortKey", kind.default_sort_key());
        if kind == ActivityKind::Queue {
            if let Some(param) = unknown_items_param(app) {
                req.check_set(param, "true");
            }
        }
        req
    }
}

fn print_records(kind: ActivityKind, page: &Page<Value>, color: bool) {
    let table = TableBuilder::new().color(color);
    let table = match kind {
        ActivityKind::History => table
            .headers(["ID", "Date", "Event", "Title", "Quality"])
            .rows(page.records.iter().map(|r| {
                vec![
                    json_cell(r, "/id"),
                    json_cell(r, "/date"),
                    format_status(&json_cell(r, "/eventType"), color),
                    truncate(&json_cell(r, "/sourceTitle"), 60),
                    json_cell(r, "/quality/quality/name"),
                ]
            })),
        ActivityKind::Queue => table
            .headers(["ID", "Title", "Status", "Size", "Left", "ETA", "Client"])
            .rows(page.records.iter().map(|r| {
                let size = r.get("size").and_then(Value::as_f64).unwrap_or_default();
                let left = r.get("sizeleft").and_then(Value::as_f64).unwrap_or_default();
                vec![
                    json_cell(r, "/id"),
                    truncate(&json_cell(r, "/title"), 60),
                    format_status(&json_cell(r, "/status"), color),
                    format_size(size),
                    format_size(left),
                    json_cell(r, "/timeleft"),
                    json_cell(r, "/downloadClient"),
                ]
            })),
        ActivityKind::Blocklist => table
            .headers(["ID", "Date", "Title", "Indexer", "Message"])
            .rows(page.records.iter().map(|r| {
                vec![
                    json_cell(r, "/id"),
                    json_cell(r, "/date"),
                    truncate(&json_cell(r, "/sourceTitle"), 60),
                    json_cell(r, "/indexer"),
                    truncate(&json_cell(r, "/message"), 40),
                ]
            })),
    };
    table.print();
    println!("{} of {} records", page.records.len(), page.total_records);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(sort: Option<&str>, order: Option<SortOrder>) -> ActivityCommand {
        ActivityCommand {
            records: 10,
            per_page: 5,
            sort: sort.map(str::to_string),
            order,
        }
    }

    #[test]
    fn test_queue_defaults_per_app() {
        let params = command(None, None).base_request(ActivityKind::Queue, App::Radarr).to_params();
        assert_eq!(params.get("sortKey"), Some("timeleft"));
        assert_eq!(params.get("includeUnknownMovieItems"), Some("true"));
    }

    #[test]
    fn test_explicit_sort_wins() {
        let params = command(Some("title"), Some(SortOrder::Asc))
            .base_request(ActivityKind::History, App::Sonarr)
            .to_params();
        assert_eq!(params.get("sortKey"), Some("title"));
        assert_eq!(params.get("sortDirection"), Some("ascending"));
    }

    #[test]
    fn test_order_alone_keeps_default_key() {
        let params = command(None, Some(SortOrder::Desc))
            .base_request(ActivityKind::Blocklist, App::Lidarr)
            .to_params();
        assert_eq!(params.get("sortKey"), Some("date"));
        assert_eq!(params.get("sortDirection"), Some("descending"));
    }
}
