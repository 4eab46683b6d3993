//
//  starr
//  api/prowlarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Prowlarr API v1.
//!
//! Prowlarr manages indexers for the other services and pushes them to
//! connected applications. It has no media library, so it implements
//! [`Servarr`] but not [`MediaServarr`](crate::api::servarr::MediaServarr),
//! and its indexers use their own schema ([`IndexerOutput`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::prowlarr::Prowlarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let prowlarr = Prowlarr::new(Config::new("http://localhost:9696", "key"))?;
//! for indexer in prowlarr.get_indexers().await? {
//!     println!("{} ({:?})", indexer.name, indexer.protocol);
//! }
//! # Ok(())
//! # }
//! ```

pub mod applications;
pub mod history;
pub mod indexer;

pub use applications::*;
pub use history::*;
pub use indexer::*;

use std::fmt;
use std::sync::Arc;

use crate::api::client::{Apier, Config};
use crate::api::common::{App, Result};
use crate::api::servarr::Servarr;

/// API version segment of every Prowlarr URI.
pub const API_VERSION: &str = "v1";

/// A Prowlarr client.
#[derive(Clone)]
pub struct Prowlarr {
    api: Arc<dyn Apier>,
}

impl Prowlarr {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_api(config.build()?))
    }

    pub fn with_api(api: impl Apier + 'static) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl Servarr for Prowlarr {
    fn api(&self) -> &dyn Apier {
        self.api.as_ref()
    }

    fn app(&self) -> App {
        App::Prowlarr
    }
}

impl fmt::Debug for Prowlarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prowlarr").finish_non_exhaustive()
    }
}
