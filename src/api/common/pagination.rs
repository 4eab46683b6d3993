//
//  starr
//  api/common/pagination.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Pagination Types for Servarr List Endpoints
//!
//! History, queue and blocklist endpoints return one page at a time. This
//! module provides the request side ([`PageReq`]), the response side
//! ([`Page`]), and [`collect_pages`], which drains an endpoint into a single
//! list under a caller cap.
//!
//! # Overview
//!
//! | Item | Purpose |
//! |------|---------|
//! | [`PageReq`] | Page number, size, sort and filter, rendered to query parameters |
//! | [`Page`] | One page of records plus the server's total |
//! | [`collect_pages`] | Fetches pages 1, 2, ... until the cap, the total, or an empty page |
//! | [`initial_page_size`] / [`adjust_page_size`] | Page size selection for the aggregator |
//!
//! # Example
//!
//! ```rust
//! use starr::api::common::{collect_pages, Page};
//!
//! # tokio_test::block_on(async {
//! let all = collect_pages(0, 10, |req| async move {
//!     let start = (req.page - 1) * req.page_size;
//!     let records: Vec<usize> = (start..(start + req.page_size).min(25)).collect();
//!     Ok::<_, starr::Error>(Page { total_records: 25, records, ..Default::default() })
//! })
//! .await?;
//!
//! assert_eq!(all.records.len(), 25);
//! # Ok::<(), starr::Error>(())
//! # });
//! ```
//!
//! # Notes
//!
//! - An empty page always ends the drain, whatever the reported total says
//! - When the final page is shrunk to the remaining need, the service computes
//!   its offset from the smaller size, so that page may repeat records seen
//!   on the previous one

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::Result;
use crate::api::request::Params;

/// Page size used when the caller does not pick one.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Largest page size the aggregator will request.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Sort order of a paged request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Let the service decide.
    #[default]
    Default,
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Request for one page of a list endpoint.
///
/// Unset fields are left out of the rendered query, except `page`, which
/// defaults to 1. Extra parameters ride along in [`PageReq::params`] and never
/// override the typed fields.
///
/// # Example
///
/// ```rust
/// use starr::api::common::{PageReq, SortDirection};
///
/// let mut req = PageReq::new(2, 50).sort_by("date", SortDirection::Descending);
/// req.check_set("sortKey", "title");
/// req.check_set("eventType", "3");
///
/// assert_eq!(
///     req.to_params().encode(),
///     "eventType=3&page=2&pageSize=50&sortDirection=descending&sortKey=date"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageReq {
    /// 1-based page number; 0 means the first page.
    pub page: usize,
    /// Records per page; 0 leaves it to the service.
    pub page_size: usize,
    pub sort_key: Option<String>,
    pub sort_dir: SortDirection,
    pub filter_key: Option<String>,
    pub filter_value: Option<String>,
    /// Extra endpoint-specific parameters.
    pub params: Params,
}

impl PageReq {
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page,
            page_size,
            ..Default::default()
        }
    }

    /// Sets the sort key and direction.
    pub fn sort_by(mut self, key: impl Into<String>, dir: SortDirection) -> Self {
        self.sort_key = Some(key.into());
        self.sort_dir = dir;
        self
    }

    /// Sets the filter key and value.
    pub fn filter(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter_key = Some(key.into());
        self.filter_value = Some(value.into());
        self
    }

    /// Returns `true` when `key` already has a value.
    pub fn has(&self, key: &str) -> bool {
        match key {
            "page" => self.page > 0,
            "pageSize" => self.page_size > 0,
            "sortKey" => self.sort_key.is_some(),
            "sortDirection" => self.sort_dir != SortDirection::Default,
            "filterKey" => self.filter_key.is_some(),
            "filterValue" => self.filter_value.is_some(),
            other => self.params.contains(other),
        }
    }

    /// Sets `key` only if the caller has not already set it.
    ///
    /// Wrappers use this to apply endpoint defaults without clobbering
    /// caller choices.
    pub fn check_set(&mut self, key: &str, value: impl ToString) -> &mut Self {
        if self.has(key) {
            return self;
        }
        let value = value.to_string();
        match key {
            "page" | "pageSize" => {
                let n = value.parse().unwrap_or_default();
                if key == "page" {
                    self.page = n;
                } else {
                    self.page_size = n;
                }
            }
            "sortKey" => self.sort_key = Some(value),
            "sortDirection" => {
                self.sort_dir = match value.as_str() {
                    "ascending" => SortDirection::Ascending,
                    "descending" => SortDirection::Descending,
                    _ => SortDirection::Default,
                }
            }
            "filterKey" => self.filter_key = Some(value),
            "filterValue" => self.filter_value = Some(value),
            other => {
                self.params.set(other, value);
            }
        }
        self
    }

    /// Renders the request as query parameters.
    pub fn to_params(&self) -> Params {
        let mut out = Params::new();
        out.set("page", self.page.max(1));
        if self.page_size > 0 {
            out.set("pageSize", self.page_size);
        }
        if let Some(key) = &self.sort_key {
            out.set("sortKey", key);
        }
        if self.sort_dir != SortDirection::Default {
            out.set("sortDirection", self.sort_dir.as_str());
        }
        if let (Some(key), Some(value)) = (&self.filter_key, &self.filter_value) {
            out.set("filterKey", key);
            out.set("filterValue", value);
        }
        for (key, value) in self.params.iter() {
            if !self.has_typed(key) {
                out.add(key, value);
            }
        }
        out
    }

    fn has_typed(&self, key: &str) -> bool {
        matches!(
            key,
            "page" | "pageSize" | "sortKey" | "sortDirection" | "filterKey" | "filterValue"
        ) && (key == "page" || self.has(key))
    }
}

/// One page of records from a list endpoint.
///
/// Also returned by [`collect_pages`], where it holds the whole drained list
/// and the metadata of the last page fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub page: usize,
    #[serde(default)]
    pub page_size: usize,
    #[serde(default)]
    pub sort_key: String,
    #[serde(default)]
    pub sort_direction: SortDirection,
    #[serde(default)]
    pub total_records: usize,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            page: 0,
            page_size: 0,
            sort_key: String::new(),
            sort_direction: SortDirection::Default,
            total_records: 0,
            records: Vec::new(),
        }
    }
}

/// Picks the first page size for a drain.
///
/// `per_page` is used when it is between 1 and [`MAX_PAGE_SIZE`], otherwise
/// [`DEFAULT_PAGE_SIZE`]. A positive `records` cap smaller than that wins.
pub fn initial_page_size(records: usize, per_page: usize) -> usize {
    let size = if per_page == 0 || per_page > MAX_PAGE_SIZE {
        DEFAULT_PAGE_SIZE
    } else {
        per_page
    };

    if records > 0 && records < size {
        records
    } else {
        size
    }
}

/// Shrinks the page size toward what is still needed.
///
/// The need is `records - collected` under a positive cap, else
/// `total - collected`. Never returns less than 1.
pub fn adjust_page_size(records: usize, total: usize, collected: usize, per_page: usize) -> usize {
    let need = if records > 0 {
        records.saturating_sub(collected)
    } else {
        total.saturating_sub(collected)
    };
    need.min(per_page).max(1)
}

/// Drains a paged endpoint into one list.
///
/// Calls `fetch` for ascending pages, one at a time, appending each page's
/// records. The page size shrinks toward what is still needed only when the
/// records already fetched end on a page boundary of the smaller size; the
/// page number is then recomputed so no record is fetched twice. Otherwise
/// the size is kept and the surplus is truncated. Stops when the service total is reached, when a positive
/// `records` cap is reached, or when a page comes back empty. The result
/// carries the total and sort metadata of the last page and never holds more
/// than `records` entries when a cap is given.
///
/// # Parameters
///
/// * `records` - Maximum records to return; 0 means everything
/// * `per_page` - Requested page size; 0 means [`DEFAULT_PAGE_SIZE`]
/// * `fetch` - Fetches one page
///
/// # Errors
///
/// The first error from `fetch` is returned and the partial list discarded.
pub async fn collect_pages<T, F, Fut>(records: usize, per_page: usize, mut fetch: F) -> Result<Page<T>>
where
    F: FnMut(PageReq) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut size = initial_page_size(records, per_page);
    let mut collected: Vec<T> = Vec::new();
    let mut page = 1;

    loop {
        tracing::trace!("fetching page {} at size {}", page, size);
        let current = fetch(PageReq::new(page, size)).await?;
        let empty = current.records.is_empty();
        collected.extend(current.records);

        if collected.len() >= current.total_records
            || (records > 0 && collected.len() >= records)
            || empty
        {
            if records > 0 {
                collected.truncate(records);
            }
            return Ok(Page {
                page: 1,
                page_size: collected.len(),
                sort_key: current.sort_key,
                sort_direction: current.sort_direction,
                total_records: current.total_records,
                records: collected,
            });
        }

        // Servarr serves page `p` from offset `(p - 1) * pageSize`, so a new
        // size only applies where everything fetched so far ends on one of
        // its page boundaries.
        let next = adjust_page_size(records, current.total_records, collected.len(), size);
        if next != size && collected.len() == page * size && collected.len() % next == 0 {
            page = collected.len() / next + 1;
            size = next;
        } else {
            page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::Error;
    use std::cell::RefCell;

    /// Serves `total` sequential integers, recording each request.
    fn serve(
        total: usize,
        calls: &RefCell<Vec<(usize, usize)>>,
        req: PageReq,
    ) -> std::future::Ready<Result<Page<usize>>> {
        calls.borrow_mut().push((req.page, req.page_size));
        let start = (req.page - 1) * req.page_size;
        let end = (start + req.page_size).min(total);
        let records = if start < total { (start..end).collect() } else { Vec::new() };
        std::future::ready(Ok(Page {
            page: req.page,
            page_size: req.page_size,
            sort_key: format!("page{}", req.page),
            sort_direction: SortDirection::Descending,
            total_records: total,
            records,
        }))
    }

    #[test]
    fn test_initial_page_size() {
        assert_eq!(initial_page_size(0, 0), 100);
        assert_eq!(initial_page_size(0, 1001), 100);
        assert_eq!(initial_page_size(0, 1000), 1000);
        assert_eq!(initial_page_size(0, 25), 25);
        assert_eq!(initial_page_size(30, 0), 30);
        assert_eq!(initial_page_size(500, 50), 50);
    }

    #[test]
    fn test_adjust_page_size() {
        assert_eq!(adjust_page_size(0, 37, 30, 10), 7);
        assert_eq!(adjust_page_size(0, 37, 10, 10), 10);
        assert_eq!(adjust_page_size(150, 250, 100, 100), 50);
        assert_eq!(adjust_page_size(10, 250, 10, 100), 1);
        assert_eq!(adjust_page_size(0, 5, 9, 10), 1);
    }

    #[test]
    fn test_full_drain_keeps_unaligned_page_size() {
        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(0, 10, |req| serve(37, &calls, req))).unwrap();

        assert_eq!(*calls.borrow(), vec![(1, 10), (2, 10), (3, 10), (4, 10)]);
        assert_eq!(all.records, (0..37).collect::<Vec<_>>());
        assert_eq!(all.total_records, 37);
    }

    #[test]
    fn test_full_drain_shrinks_on_page_boundary() {
        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(0, 10, |req| serve(25, &calls, req))).unwrap();

        assert_eq!(*calls.borrow(), vec![(1, 10), (2, 10), (5, 5)]);
        assert_eq!(all.records, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_cap_stops_early_and_copies_last_metadata() {
        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(150, 0, |req| serve(250, &calls, req))).unwrap();

        assert_eq!(*calls.borrow(), vec![(1, 100), (3, 50)]);
        assert_eq!(all.records, (0..150).collect::<Vec<_>>());
        assert_eq!(all.sort_key, "page3");
        assert_eq!(all.sort_direction, SortDirection::Descending);
        assert_eq!(all.total_records, 250);
    }

    #[test]
    fn test_cap_with_unaligned_remainder_truncates() {
        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(25, 10, |req| serve(250, &calls, req))).unwrap();

        assert_eq!(*calls.borrow(), vec![(1, 10), (2, 10), (5, 5)]);
        assert_eq!(all.records, (0..25).collect::<Vec<_>>());

        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(27, 10, |req| serve(250, &calls, req))).unwrap();

        assert_eq!(*calls.borrow(), vec![(1, 10), (2, 10), (3, 10)]);
        assert_eq!(all.records, (0..27).collect::<Vec<_>>());
    }

    #[test]
    fn test_cap_equal_to_page_size_is_one_fetch() {
        let calls = RefCell::new(Vec::new());
        let all = tokio_test::block_on(collect_pages(100, 0, |req| serve(250, &calls, req))).unwrap();

        assert_eq!(calls.borrow().len(), 1);
        assert_eq!(all.records, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn test_over_delivery_is_truncated() {
        let all = tokio_test::block_on(collect_pages(5, 0, |_req| {
            std::future::ready(Ok(Page {
                total_records: 100,
                records: (0..20).collect::<Vec<usize>>(),
                ..Default::default()
            }))
        }))
        .unwrap();
        assert_eq!(all.records.len(), 5);
    }

    #[test]
    fn test_empty_page_ends_drain() {
        let calls = RefCell::new(0);
        let all = tokio_test::block_on(collect_pages(0, 10, |req| {
            *calls.borrow_mut() += 1;
            let records: Vec<usize> = if req.page == 1 { (0..10).collect() } else { Vec::new() };
            std::future::ready(Ok(Page {
                total_records: 500,
                records,
                ..Default::default()
            }))
        }))
        .unwrap();

        assert_eq!(*calls.borrow(), 2);
        assert_eq!(all.records.len(), 10);
    }

    #[test]
    fn test_fetch_error_propagates() {
        let result = tokio_test::block_on(collect_pages::<usize, _, _>(0, 10, |req| {
            std::future::ready(if req.page == 1 {
                Ok(Page {
                    total_records: 30,
                    records: (0..10).collect(),
                    ..Default::default()
                })
            } else {
                Err(Error::InvalidArgument("boom".into()))
            })
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_page_req_params() {
        let req = PageReq::default();
        assert_eq!(req.to_params().encode(), "page=1");

        let req = PageReq::new(3, 25)
            .sort_by("date", SortDirection::Ascending)
            .filter("eventType", "grabbed");
        assert_eq!(
            req.to_params().encode(),
            "filterKey=eventType&filterValue=grabbed&page=3&pageSize=25&sortDirection=ascending&sortKey=date"
        );
    }

    #[test]
    fn test_check_set_keeps_caller_values() {
        let mut req = PageReq::new(1, 10);
        req.check_set("pageSize", 50)
            .check_set("sortKey", "date")
            .check_set("sortDirection", "descending")
            .check_set("includeSeries", "true");
        req.check_set("sortKey", "title");

        assert_eq!(req.page_size, 10);
        assert_eq!(req.sort_key.as_deref(), Some("date"));
        assert_eq!(req.sort_dir, SortDirection::Descending);
        assert_eq!(req.to_params().get("includeSeries"), Some("true"));
    }

    #[test]
    fn test_page_decodes_camel_case() {
        let json = r#"{
            "page": 2, "pageSize": 10, "sortKey": "date",
            "sortDirection": "descending", "totalRecords": 11,
            "records": [7]
        }"#;
        let page: Page<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_records, 11);
        assert_eq!(page.sort_direction, SortDirection::Descending);
        assert_eq!(page.records, vec![7]);
    }
}
