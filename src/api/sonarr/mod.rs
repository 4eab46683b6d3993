//
//  starr
//  api/sonarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Sonarr API v3.
//!
//! Typed wrappers for Sonarr, the TV series manager. Shared configuration
//! endpoints (tags, indexers, download clients, profiles, ...) come from the
//! [`Servarr`] and [`MediaServarr`] traits; this module adds the TV-specific
//! resources.
//!
//! # Module Organization
//!
//! - [`series`] - Series list, lookup, add, update and delete
//! - [`episode`] - Episodes, episode monitoring and the season pass
//! - [`calendar`] - Upcoming episodes as JSON or as an iCal feed
//! - [`profiles`] - Language and release profiles
//! - [`settings`] - Naming and media management
//! - [`import`] - Manual import and import lists
//! - [`activity`] - History, queue and blocklist
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::sonarr::Sonarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let sonarr = Sonarr::new(Config::new("http://localhost:8989", "0123456789abcdef"))?;
//!
//! for series in sonarr.get_series(None).await? {
//!     println!("{} ({})", series.title, series.year);
//! }
//!
//! // Last 500 history records, fetched 100 at a time.
//! let history = sonarr.get_history(500, 100).await?;
//! println!("{} of {} records", history.records.len(), history.total_records);
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod calendar;
pub mod episode;
pub mod import;
pub mod profiles;
pub mod series;
pub mod settings;

pub use activity::*;
pub use calendar::*;
pub use episode::*;
pub use import::*;
pub use profiles::*;
pub use series::*;
pub use settings::*;

use std::fmt;
use std::sync::Arc;

use crate::api::client::{Apier, Config};
use crate::api::common::{App, Result};
use crate::api::servarr::{MediaServarr, Servarr};

/// API version segment of every Sonarr URI.
pub const API_VERSION: &str = "v3";

/// A Sonarr client.
///
/// Cheap to clone; clones share the transport.
#[derive(Clone)]
pub struct Sonarr {
    api: Arc<dyn Apier>,
}

impl Sonarr {
    /// Builds a client from a connection configuration.
    ///
    /// # Errors
    ///
    /// Returns the error of [`Config::build`].
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_api(config.build()?))
    }

    /// Wraps an existing transport, such as a test double.
    pub fn with_api(api: impl Apier + 'static) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl Servarr for Sonarr {
    fn api(&self) -> &dyn Apier {
        self.api.as_ref()
    }

    fn app(&self) -> App {
        App::Sonarr
    }
}

impl MediaServarr for Sonarr {}

impl fmt::Debug for Sonarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sonarr").finish_non_exhaustive()
    }
}
