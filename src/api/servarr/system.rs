//
//  starr
//  api/servarr/system.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System status, tags and commands.
//!
//! These payloads have the same shape on every Servarr service, Prowlarr
//! included.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Output of `system/status`.
///
/// # Example
///
/// ```rust
/// use starr::api::servarr::SystemStatus;
///
/// let json = r#"{"appName":"Sonarr","version":"4.0.0.700","isDocker":true}"#;
/// let status: SystemStatus = serde_json::from_str(json).unwrap();
/// assert_eq!(status.app_name, "Sonarr");
/// assert!(status.is_docker);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SystemStatus {
    pub app_name: String,
    pub instance_name: String,
    pub version: String,
    pub build_time: Option<DateTime<Utc>>,
    pub start_time: Option<DateTime<Utc>>,
    pub is_debug: bool,
    pub is_production: bool,
    pub is_admin: bool,
    pub is_user_interactive: bool,
    pub startup_path: String,
    pub app_data: String,
    pub os_name: String,
    pub os_version: String,
    pub is_net_core: bool,
    pub is_linux: bool,
    pub is_osx: bool,
    pub is_windows: bool,
    pub is_docker: bool,
    pub mode: String,
    pub branch: String,
    pub authentication: String,
    pub database_type: String,
    pub database_version: String,
    pub migration_version: i64,
    pub url_base: String,
    pub runtime_version: String,
    pub runtime_name: String,
    pub package_version: String,
    pub package_author: String,
    pub package_update_mechanism: String,
}

/// A tag, used to link series, indexers, clients and profiles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(default)]
    pub id: i64,
    pub label: String,
}

impl Tag {
    /// A new tag to add; the service assigns the ID.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: 0,
            label: label.into(),
        }
    }
}

/// Lifecycle state of a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CommandStatus {
    #[default]
    Queued,
    Started,
    Completed,
    Failed,
    Aborted,
    Cancelled,
    Orphaned,
    #[serde(other)]
    Unknown,
}

impl CommandStatus {
    /// Returns `true` once the command will not change state again.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Queued | Self::Started)
    }
}

/// A command to start, such as `RefreshSeries` or `MissingEpisodeSearch`.
///
/// Command arguments differ per command and service, so they are carried as
/// named JSON values next to the name.
///
/// # Example
///
/// ```rust
/// use starr::api::servarr::CommandRequest;
///
/// let cmd = CommandRequest::new("SeriesSearch").arg("seriesId", 12);
/// assert_eq!(
///     serde_json::to_string(&cmd).unwrap(),
///     r#"{"name":"SeriesSearch","seriesId":12}"#
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandRequest {
    pub name: String,
    #[serde(flatten)]
    pub args: Map<String, Value>,
}

impl CommandRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Map::new(),
        }
    }

    /// Adds a named argument.
    pub fn arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }
}

/// The state of a queued or running command.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommandResponse {
    pub id: i64,
    pub name: String,
    pub command_name: String,
    pub message: Option<String>,
    pub priority: String,
    pub status: CommandStatus,
    pub queued: Option<DateTime<Utc>>,
    pub started: Option<DateTime<Utc>>,
    pub ended: Option<DateTime<Utc>>,
    pub state_change_time: Option<DateTime<Utc>>,
    pub last_execution_time: Option<DateTime<Utc>>,
    pub duration: Option<String>,
    pub trigger: String,
    pub send_updates_to_client: bool,
    pub update_scheduled_task: bool,
    /// The command body as the service echoes it back.
    pub body: Map<String, Value>,
}
