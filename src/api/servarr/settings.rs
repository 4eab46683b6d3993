//
//  starr
//  api/servarr/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Settings payloads and query options used by several services.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::request::Params;

/// The `config/mediamanagement` document.
///
/// The options every media service has are typed. The rest are kept in
/// [`MediaManagement::other`] so a get-modify-update cycle sends back what it
/// received.
///
/// # Example
///
/// ```rust
/// use starr::api::servarr::MediaManagement;
///
/// let json = r#"{"id":1,"recycleBin":"/trash","episodeTitleRequired":"always"}"#;
/// let mut config: MediaManagement = serde_json::from_str(json).unwrap();
/// config.recycle_bin_cleanup_days = 7;
///
/// let sent = serde_json::to_value(&config).unwrap();
/// assert_eq!(sent["episodeTitleRequired"], "always");
/// assert_eq!(sent["recycleBinCleanupDays"], 7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MediaManagement {
    pub id: i64,
    pub recycle_bin: String,
    pub recycle_bin_cleanup_days: i64,
    pub download_propers_and_repacks: String,
    pub delete_empty_folders: bool,
    pub file_date: String,
    pub rescan_after_refresh: String,
    pub set_permissions_linux: bool,
    pub chmod_folder: String,
    pub chown_group: String,
    pub skip_free_space_check_when_importing: bool,
    /// Megabytes.
    pub minimum_free_space_when_importing: i64,
    pub copy_using_hardlinks: bool,
    pub import_extra_files: bool,
    pub extra_file_extensions: String,
    pub enable_media_info: bool,
    /// Service-specific options.
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// What to do with a download when removing it from the queue.
///
/// Unset options are left to the service's defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueDeleteOpts {
    /// Also remove the download from the download client.
    pub remove_from_client: Option<bool>,
    /// Add the release to the blocklist.
    pub blocklist: Option<bool>,
    /// Do not search for a replacement after blocklisting.
    pub skip_redownload: Option<bool>,
    /// Move the download to the client's post-import category.
    pub change_category: Option<bool>,
}

impl QueueDeleteOpts {
    pub fn to_params(&self) -> Params {
        let mut params = Params::new();
        let options = [
            ("removeFromClient", self.remove_from_client),
            ("blocklist", self.blocklist),
            ("skipRedownload", self.skip_redownload),
            ("changeCategory", self.change_category),
        ];
        for (key, value) in options {
            if let Some(value) = value {
                params.set_bool(key, value);
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_delete_params() {
        assert!(QueueDeleteOpts::default().to_params().is_empty());

        let opts = QueueDeleteOpts {
            remove_from_client: Some(true),
            blocklist: Some(false),
            ..Default::default()
        };
        assert_eq!(opts.to_params().encode(), "blocklist=false&removeFromClient=true");
    }

    #[test]
    fn test_media_management_keeps_unknown_options() {
        let json = r#"{"id": 1, "autoUnmonitorPreviouslyDownloadedMovies": true, "deleteEmptyFolders": true}"#;
        let config: MediaManagement = serde_json::from_str(json).unwrap();
        assert!(config.delete_empty_folders);
        assert_eq!(config.other["autoUnmonitorPreviouslyDownloadedMovies"], true);

        let back = serde_json::to_value(&config).unwrap();
        assert_eq!(back["autoUnmonitorPreviouslyDownloadedMovies"], true);
    }
}
