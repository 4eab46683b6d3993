//
//  starr
//  api/readarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Readarr API v1.
//!
//! Typed wrappers for Readarr, the book manager.
//!
//! # Module Organization
//!
//! - [`author`] - Authors
//! - [`book`] - Books and editions
//! - [`calendar`] - Upcoming releases
//! - [`settings`] - Metadata profiles, naming and media management
//! - [`activity`] - History, queue and blocklist
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::readarr::Readarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let readarr = Readarr::new(Config::new("http://localhost:8787", "key"))?;
//! for author in readarr.get_author(None).await? {
//!     println!("{}", author.author_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod author;
pub mod book;
pub mod calendar;
pub mod settings;

pub use activity::*;
pub use author::*;
pub use book::*;
pub use calendar::*;
pub use settings::*;

use std::fmt;
use std::sync::Arc;

use crate::api::client::{Apier, Config};
use crate::api::common::{App, Result};
use crate::api::servarr::{MediaServarr, Servarr};

/// API version segment of every Readarr URI.
pub const API_VERSION: &str = "v1";

/// A Readarr client.
#[derive(Clone)]
pub struct Readarr {
    api: Arc<dyn Apier>,
}

impl Readarr {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_api(config.build()?))
    }

    pub fn with_api(api: impl Apier + 'static) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl Servarr for Readarr {
    fn api(&self) -> &dyn Apier {
        self.api.as_ref()
    }

    fn app(&self) -> App {
        App::Readarr
    }
}

impl MediaServarr for Readarr {}

impl fmt::Debug for Readarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Readarr").finish_non_exhaustive()
    }
}
