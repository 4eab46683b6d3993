//
//  starr
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Servarr API Client Layer
//!
//! Typed async access to the REST APIs of the Servarr family.
//!
//! ## Supported Services
//!
//! | Service | API | Module |
//! |---------|-----|--------|
//! | Sonarr | `v3` | [`sonarr`] |
//! | Radarr | `v3` | [`radarr`] |
//! | Lidarr | `v1` | [`lidarr`] |
//! | Readarr | `v1` | [`readarr`] |
//! | Prowlarr | `v1` | [`prowlarr`] |
//!
//! ## Architecture
//!
//! - [`client`]: [`Config`], the [`Apier`] transport trait and its reqwest implementation
//! - [`request`]: [`Request`] descriptors and ordered query [`Params`]
//! - [`logging`]: Optional request/response logging middleware
//! - [`common`]: Errors, pagination, field values, the resource copier and shared types
//! - [`servarr`]: Endpoints every service shares, as the [`servarr::Servarr`] and
//!   [`servarr::MediaServarr`] traits
//!
//! ## Usage
//!
//! ```rust,no_run
//! use starr::api::servarr::Servarr;
//! use starr::api::sonarr::Sonarr;
//! use starr::api::Config;
//! use std::time::Duration;
//!
//! # async fn run() -> starr::Result<()> {
//! let config = Config::new("http://localhost:8989/", "0123456789abcdef")
//!     .timeout(Duration::from_secs(10));
//! let sonarr = Sonarr::new(config)?;
//!
//! let status = sonarr.get_system_status().await?;
//! println!("{} {}", status.app_name, status.version);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result`]. A non-2xx answer becomes
//! [`Error::Response`] carrying the status code and body:
//!
//! ```rust,no_run
//! # use starr::api::sonarr::Sonarr;
//! # async fn run(sonarr: Sonarr) -> starr::Result<()> {
//! match sonarr.get_series_by_id(999).await {
//!     Err(err) if err.is_not_found() => println!("no such series"),
//!     other => println!("{:?}", other?.title),
//! }
//! # Ok(())
//! # }
//! ```

/// Configuration, transport trait and the default HTTP client.
pub mod client;

/// Shared types: errors, pagination, dynamic fields and copying.
pub mod common;

/// Request/response logging middleware.
pub mod logging;

/// Request descriptors and query parameters.
pub mod request;

/// Endpoints shared by every service.
pub mod servarr;

pub mod lidarr;
pub mod prowlarr;
pub mod radarr;
pub mod readarr;
pub mod sonarr;

pub use client::{Apier, ApierExt, Client, Config, Response};
pub use common::{Error, ErrorKind, Result};
pub use logging::LoggingMiddleware;
pub use request::{Params, Request};
