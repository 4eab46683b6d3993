//
//  starr
//  api/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Common API Types for every Servarr service
//!
//! This module provides the shared types used across the Sonarr, Radarr,
//! Lidarr, Readarr and Prowlarr wrappers. It includes the error taxonomy,
//! the service enumeration, and small data structures that appear in the
//! payloads of several services.
//!
//! # Overview
//!
//! - [`Error`] - Unified error type for all SDK operations
//! - [`ErrorKind`] - Comparable error category for branching without string matching
//! - [`ResponseError`] - Details of a non-2xx response
//! - [`App`] - The five Servarr services and their API versions
//! - Pagination types (re-exported from [`pagination`])
//! - The cross-service copier (re-exported from [`copy`])
//! - Dynamic provider fields (re-exported from [`fields`])
//!
//! # Example
//!
//! ```rust
//! use starr::api::common::{Error, ErrorKind};
//!
//! fn handle<T>(result: Result<T, Error>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(e) if e.is_not_found() => println!("Nothing there"),
//!         Err(e) if e.kind() == ErrorKind::InvalidStatusCode => println!("Server said no: {e}"),
//!         Err(e) => println!("Error: {e}"),
//!     }
//! }
//! ```

use std::fmt;
use std::str::FromStr;

use reqwest::{Method, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod copy;
mod fields;
mod pagination;

pub use copy::*;
pub use fields::*;
pub use pagination::*;

/// Result alias used by every SDK operation.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all Servarr SDK operations.
///
/// # Variants
///
/// | Variant | Kind | Origin |
/// |---------|------|--------|
/// | `InvalidArgument` | [`ErrorKind::InvalidArgument`] | Bad inputs caught before sending |
/// | `NotAReference` | [`ErrorKind::InvalidArgument`] | Copier operand is not a JSON object |
/// | `RequestConstruction` | [`ErrorKind::RequestConstruction`] | The HTTP request could not be assembled |
/// | `Transport` | [`ErrorKind::Transport`] | Network, DNS, TLS or timeout failures |
/// | `Response` | [`ErrorKind::InvalidStatusCode`] | Any status outside 200-299 |
/// | `Decode` | [`ErrorKind::Decode`] | 2xx body that is not the expected JSON |
/// | `Encode` | [`ErrorKind::Encode`] | Caller input that cannot be serialized |
/// | `FieldType` | [`ErrorKind::FieldType`] | Wrong variant requested from a [`FieldValue`] |
///
/// # Notes
///
/// - Use [`Error::kind`] to compare errors by category
/// - Use [`Error::status`] to inspect the HTTP status of response errors
#[derive(Error, Debug)]
pub enum Error {
    /// Inputs were rejected before anything was sent.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A copier operand serialized to something other than a JSON object.
    #[error("must provide a reference to a non-nil value")]
    NotAReference,

    /// The underlying HTTP request could not be built.
    #[error("request construction error: {0}")]
    RequestConstruction(String),

    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// The service answered with a status outside 200-299.
    #[error(transparent)]
    Response(Box<ResponseError>),

    /// The service answered 2xx but the body did not decode.
    #[error("decoding response from {url}: {source}")]
    Decode {
        /// The URL whose body failed to decode.
        url: String,
        /// The underlying decoder error.
        #[source]
        source: serde_json::Error,
    },

    /// Caller input could not be serialized to JSON.
    #[error("encoding request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A dynamic field held a different variant than the one requested.
    #[error("field value is {found}, not {expected}")]
    FieldType {
        /// The variant the caller asked for.
        expected: &'static str,
        /// The variant actually stored.
        found: &'static str,
    },
}

/// Comparable category of an [`Error`].
///
/// Two errors compare equal by kind even when their details differ, e.g. a
/// 404 and a 500 are both [`ErrorKind::InvalidStatusCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidArgument,
    RequestConstruction,
    Transport,
    InvalidStatusCode,
    Decode,
    Encode,
    FieldType,
}

impl Error {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) | Self::NotAReference => ErrorKind::InvalidArgument,
            Self::RequestConstruction(_) => ErrorKind::RequestConstruction,
            Self::Transport(_) => ErrorKind::Transport,
            Self::Response(_) => ErrorKind::InvalidStatusCode,
            Self::Decode { .. } => ErrorKind::Decode,
            Self::Encode(_) => ErrorKind::Encode,
            Self::FieldType { .. } => ErrorKind::FieldType,
        }
    }

    /// Returns `true` if this is a non-2xx response error.
    pub fn is_response_error(&self) -> bool {
        matches!(self, Self::Response(_))
    }

    /// Returns the HTTP status of a response error.
    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(|r| r.status)
    }

    /// Returns the response details when this is a response error.
    pub fn response(&self) -> Option<&ResponseError> {
        match self {
            Self::Response(r) => Some(r),
            _ => None,
        }
    }

    /// Returns `true` when the service answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }
}

impl From<ResponseError> for Error {
    fn from(err: ResponseError) -> Self {
        Self::Response(Box::new(err))
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(err: reqwest_middleware::Error) -> Self {
        match err {
            reqwest_middleware::Error::Reqwest(e) if e.is_builder() => {
                Self::RequestConstruction(e.to_string())
            }
            other => Self::Transport(other),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_middleware::Error::Reqwest(err).into()
    }
}

/// A non-2xx response from a Servarr service.
///
/// Carries everything needed to diagnose the failure: the status code, the
/// method and full URL that were requested, and the raw response body.
#[derive(Debug, Clone)]
pub struct ResponseError {
    /// The HTTP status returned by the service.
    pub status: StatusCode,
    /// The HTTP method of the failed request.
    pub method: Method,
    /// The full URL that was requested, query included.
    pub url: String,
    /// The response body, kept for diagnostics.
    pub body: String,
}

impl ResponseError {
    /// Extracts a human readable message from the response body.
    ///
    /// Servarr services return errors in two shapes:
    ///
    /// ```json
    /// {"message": "NotFound", "description": "..."}
    /// ```
    ///
    /// and, for validation failures, an array:
    ///
    /// ```json
    /// [{"propertyName": "Path", "errorMessage": "Path is already configured"}]
    /// ```
    ///
    /// Falls back to `None` when the body matches neither shape.
    pub fn message(&self) -> Option<String> {
        let json = serde_json::from_str::<serde_json::Value>(&self.body).ok()?;

        if let Some(message) = json.get("message").and_then(|m| m.as_str()) {
            return Some(message.to_string());
        }

        let failures: Vec<String> = json
            .as_array()?
            .iter()
            .filter_map(|f| {
                let msg = f.get("errorMessage")?.as_str()?;
                match f.get("propertyName").and_then(|p| p.as_str()) {
                    Some(prop) if !prop.is_empty() => Some(format!("{prop}: {msg}")),
                    _ => Some(msg.to_string()),
                }
            })
            .collect();

        if failures.is_empty() {
            None
        } else {
            Some(failures.join("; "))
        }
    }
}

impl fmt::Display for ResponseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid status code: {} {} {}", self.status, self.method, self.url)?;
        match self.message() {
            Some(message) => write!(f, ": {message}"),
            None if !self.body.is_empty() => write!(f, ": {}", self.body),
            None => Ok(()),
        }
    }
}

impl std::error::Error for ResponseError {}

/// The Servarr services this SDK talks to.
///
/// Each service pins the API version its wrappers embed in every URI.
///
/// # Example
///
/// ```rust
/// use starr::api::common::App;
///
/// let app: App = "Readarr".parse().unwrap();
/// assert_eq!(app.api_version(), "v1");
/// assert_eq!(app.to_string(), "readarr");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum App {
    Sonarr,
    Radarr,
    Lidarr,
    Readarr,
    Prowlarr,
}

impl App {
    /// All services, in display order.
    pub const ALL: [App; 5] = [
        App::Sonarr,
        App::Radarr,
        App::Lidarr,
        App::Readarr,
        App::Prowlarr,
    ];

    /// The API version segment used by this service's endpoints.
    pub fn api_version(&self) -> &'static str {
        match self {
            Self::Sonarr | Self::Radarr => "v3",
            Self::Lidarr | Self::Readarr | Self::Prowlarr => "v1",
        }
    }

    /// Lowercase service name, as used in feed URLs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sonarr => "sonarr",
            Self::Radarr => "radarr",
            Self::Lidarr => "lidarr",
            Self::Readarr => "readarr",
            Self::Prowlarr => "prowlarr",
        }
    }
}

impl fmt::Display for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for App {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        App::ALL
            .into_iter()
            .find(|app| app.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown service: {s}")))
    }
}

/// A cover, poster, banner or fanart image attached to a media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub cover_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

/// Community rating of a media item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratings {
    #[serde(default)]
    pub votes: i64,
    #[serde(default)]
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity: Option<f64>,
}

/// A quality and its revision, as attached to files, history and queue records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityModel {
    pub quality: Quality,
    #[serde(default)]
    pub revision: Revision,
}

/// A single named quality such as `HDTV-720p`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quality {
    pub id: i64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<i64>,
}

/// Release revision information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    #[serde(default)]
    pub version: i64,
    #[serde(default)]
    pub real: i64,
    #[serde(default)]
    pub is_repack: bool,
}

/// Release protocol of a download.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    #[default]
    Unknown,
    Usenet,
    Torrent,
}

/// A spoken language, as attached to media, files and releases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Language {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// A status message attached to queue records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub messages: Vec<String>,
}
