//
//  starr
//  config/instances.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Instance Configuration Module
//!
//! One entry per running service: which app it is, where it lives and the
//! key to talk to it.
//!
//! ## Usage
//!
//! ```rust
//! use starr::api::common::App;
//! use starr::config::{normalize_url, InstanceConfig};
//!
//! assert_eq!(normalize_url("localhost:8989/"), "http://localhost:8989");
//!
//! let instance = InstanceConfig::new(App::Sonarr, "localhost:8989", "key");
//! assert_eq!(instance.url, "http://localhost:8989");
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::LogConfig;
use crate::api::client::Config as ClientConfig;
use crate::api::common::App;
use crate::api::logging::LoggingMiddleware;

/// A configured service instance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InstanceConfig {
    /// Which service this is.
    pub app: App,

    /// Base URL, including any URL base path.
    pub url: String,

    pub api_key: String,

    /// Request timeout. Unset means the library default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Verify TLS certificates.
    #[serde(default = "default_valid_ssl")]
    pub valid_ssl: bool,
}

fn default_valid_ssl() -> bool {
    true
}

impl InstanceConfig {
    pub fn new(app: App, url: &str, api_key: impl Into<String>) -> Self {
        Self {
            app,
            url: normalize_url(url),
            api_key: api_key.into(),
            timeout_secs: None,
            valid_ssl: true,
        }
    }

    /// Builds the client configuration for this instance.
    ///
    /// With `verbose`, requests are logged through [`LoggingMiddleware`]
    /// using the `[log]` settings.
    pub fn client_config(&self, log: &LogConfig, verbose: bool) -> ClientConfig {
        let mut config = ClientConfig::new(&self.url, self.api_key.clone()).valid_ssl(self.valid_ssl);
        if let Some(secs) = self.timeout_secs {
            config = config.timeout(Duration::from_secs(secs));
        }
        if verbose {
            config = config.logging(LoggingMiddleware::new(log.max_body));
        }
        config
    }
}

/// The port each service listens on out of the box.
pub fn default_port(app: App) -> u16 {
    match app {
        App::Sonarr => 8989,
        App::Radarr => 7878,
        App::Lidarr => 8686,
        App::Readarr => 8787,
        App::Prowlarr => 9696,
    }
}

/// Normalizes a base URL for storage.
///
/// Adds `http://` when no scheme is given and drops trailing slashes.
pub fn normalize_url(url: &str) -> String {
    let url = url.trim().trim_end_matches('/');
    if url.starts_with("http://") || url.starts_with("https://") {
        url.to_string()
    } else {
        format!("http://{url}")
    }
}
