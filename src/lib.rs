//
//  starr
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # starr
//!
//! A typed client library for the Servarr family of media managers, and the
//! `starr` command-line tool built on it.
//!
//! ## Overview
//!
//! Sonarr, Radarr, Lidarr, Readarr and Prowlarr share one HTTP conventions
//! layer: an `X-Api-Key` header, JSON bodies under `/api/<version>/`, and a
//! common paging envelope. This crate implements that layer once and adds
//! typed wrappers for each service on top.
//!
//! ## Features
//!
//! - **One transport, five services**: URL building, auth header and error
//!   mapping shared by every wrapper
//! - **Paging**: single pages or aggregated lists with a record cap
//! - **Provider copying**: move indexers and other providers between services
//! - **Pluggable**: swap the transport by implementing [`api::Apier`]
//! - **Observable**: `tracing` events and an optional logging middleware
//!
//! ## Module Structure
//!
//! - [`api`]: The SDK (transport, shared types, per-service wrappers)
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: The CLI's instance registry
//! - [`output`]: Table and JSON output for the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use starr::api::radarr::Radarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let radarr = Radarr::new(Config::new("http://localhost:7878", "key"))?;
//! let queue = radarr.get_queue(0, 100).await?;
//! println!("{} downloads queued", queue.records.len());
//! # Ok(())
//! # }
//! ```

/// The Servarr SDK.
pub mod api;

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Configuration file management.
///
/// The CLI keeps named service instances in a TOML file stored in the
/// platform-specific config location:
/// - Linux: `~/.config/starr/config.toml`
/// - macOS: `~/Library/Application Support/starr/config.toml`
/// - Windows: `%APPDATA%\starr\config.toml`
pub mod config;

/// Output formatting for the CLI (table and JSON).
pub mod output;

pub use api::common::{Error, ErrorKind, Result};

/// Re-export of the main CLI struct.
pub use cli::Cli;

/// Application name constant.
///
/// Used for display purposes and the configuration directory.
pub const APP_NAME: &str = "starr";

/// Library version, derived from Cargo.toml at compile time.
///
/// Sent in the `User-Agent` header of every request.
///
/// # Example
///
/// ```rust
/// println!("starr {}", starr::VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `4-7`: Authentication-related issues
/// - `8-15`: Resource-related issues
/// - `32+`: External service issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// An unspecified error occurred. Check stderr for details.
    pub const ERROR: i32 = 1;

    /// Invalid arguments, configuration or instance name.
    pub const USAGE: i32 = 2;

    /// The service rejected the API key (401 or 403).
    pub const AUTH_ERROR: i32 = 4;

    /// The requested resource does not exist (404).
    pub const NOT_FOUND: i32 = 8;

    /// The service could not be reached or answered with a 5xx.
    pub const SERVICE_ERROR: i32 = 32;
}
