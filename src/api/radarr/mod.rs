//
//  starr
//  api/radarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Radarr API v3.
//!
//! Typed wrappers for Radarr, the movie manager: movies, history and queue.
//! Configuration endpoints come from [`Servarr`] and [`MediaServarr`].
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::radarr::Radarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let radarr = Radarr::new(Config::new("http://localhost:7878", "key"))?;
//! let found = radarr.lookup_movie("tmdb:603").await?;
//! println!("{:?}", found.first().map(|m| &m.title));
//! # Ok(())
//! # }
//! ```

pub mod activity;
pub mod movie;

pub use activity::*;
pub use movie::*;

use std::fmt;
use std::sync::Arc;

use crate::api::client::{Apier, Config};
use crate::api::common::{App, Result};
use crate::api::servarr::{MediaServarr, Servarr};

/// API version segment of every Radarr URI.
pub const API_VERSION: &str = "v3";

/// A Radarr client.
#[derive(Clone)]
pub struct Radarr {
    api: Arc<dyn Apier>,
}

impl Radarr {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self::with_api(config.build()?))
    }

    pub fn with_api(api: impl Apier + 'static) -> Self {
        Self { api: Arc::new(api) }
    }
}

impl Servarr for Radarr {
    fn api(&self) -> &dyn Apier {
        self.api.as_ref()
    }

    fn app(&self) -> App {
        App::Radarr
    }
}

impl MediaServarr for Radarr {}

impl fmt::Debug for Radarr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Radarr").finish_non_exhaustive()
    }
}
