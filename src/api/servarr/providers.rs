//
//  starr
//  api/servarr/providers.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Provider resources: indexers, download clients, notifications and
//! import lists.
//!
//! Every provider pairs a fixed header (name, implementation, tags, ...) with
//! implementation-specific `fields`. Each has an input type, which is what
//! add and update send, and an output type, which is what the service
//! returns. Outputs carry the UI metadata of each field.
//!
//! # Copying between services
//!
//! Indexer inputs and outputs implement [`Identified`], so an output from one
//! service can be turned into an input for another with
//! [`copy_indexer`](crate::api::common::copy_indexer).

use serde::{Deserialize, Serialize};

use crate::api::common::{FieldInput, FieldOutput, Identified, Protocol};

macro_rules! identified {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl Identified for $ty {
                fn id_mut(&mut self) -> &mut i64 {
                    &mut self.id
                }

                fn tags_mut(&mut self) -> &mut Vec<i64> {
                    &mut self.tags
                }
            }
        )+
    };
}

/// An indexer as sent on add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexerInput {
    pub enable_automatic_search: bool,
    pub enable_interactive_search: bool,
    pub enable_rss: bool,
    pub download_client_id: i64,
    pub priority: i64,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// An indexer as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexerOutput {
    pub enable_automatic_search: bool,
    pub enable_interactive_search: bool,
    pub enable_rss: bool,
    pub supports_rss: bool,
    pub supports_search: bool,
    pub download_client_id: i64,
    pub priority: i64,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

/// A download client as sent on add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadClientInput {
    pub enable: bool,
    pub remove_completed_downloads: bool,
    pub remove_failed_downloads: bool,
    pub priority: i64,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// A download client as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DownloadClientOutput {
    pub enable: bool,
    pub remove_completed_downloads: bool,
    pub remove_failed_downloads: bool,
    pub priority: i64,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

/// A notification connection as sent on add and update.
///
/// Only the triggers every media service shares are typed; service-specific
/// triggers keep their server-side value when omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationInput {
    pub on_grab: bool,
    pub on_download: bool,
    pub on_upgrade: bool,
    pub on_rename: bool,
    pub on_health_issue: bool,
    pub on_health_restored: bool,
    pub on_application_update: bool,
    pub on_manual_interaction_required: bool,
    pub include_health_warnings: bool,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// A notification connection as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationOutput {
    pub on_grab: bool,
    pub on_download: bool,
    pub on_upgrade: bool,
    pub on_rename: bool,
    pub on_health_issue: bool,
    pub on_health_restored: bool,
    pub on_application_update: bool,
    pub on_manual_interaction_required: bool,
    pub include_health_warnings: bool,
    pub supports_on_grab: bool,
    pub supports_on_download: bool,
    pub supports_on_upgrade: bool,
    pub supports_on_rename: bool,
    pub supports_on_health_issue: bool,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub link: String,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

/// An import list as sent on add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportListInput {
    pub enable_automatic_add: bool,
    pub search_for_missing_episodes: bool,
    pub should_monitor: String,
    pub monitor_new_items: String,
    pub root_folder_path: String,
    pub quality_profile_id: i64,
    pub series_type: String,
    pub season_folder: bool,
    pub list_type: String,
    pub list_order: i64,
    pub min_refresh_interval: String,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// An import list as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImportListOutput {
    pub enable_automatic_add: bool,
    pub search_for_missing_episodes: bool,
    pub should_monitor: String,
    pub monitor_new_items: String,
    pub root_folder_path: String,
    pub quality_profile_id: i64,
    pub series_type: String,
    pub season_folder: bool,
    pub list_type: String,
    pub list_order: i64,
    pub min_refresh_interval: String,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

identified!(
    IndexerInput,
    IndexerOutput,
    DownloadClientInput,
    DownloadClientOutput,
    NotificationInput,
    NotificationOutput,
    ImportListInput,
    ImportListOutput,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::{copy_indexer, FieldValue};

    #[test]
    fn test_indexer_output_decodes() {
        let json = r#"{
            "enableRss": true, "enableAutomaticSearch": true, "enableInteractiveSearch": false,
            "supportsRss": true, "supportsSearch": true, "protocol": "usenet",
            "priority": 25, "downloadClientId": 0, "name": "NZBgeek",
            "fields": [
                {"order": 0, "name": "baseUrl", "label": "URL", "value": "https://api.nzbgeek.info", "type": "textbox", "advanced": false},
                {"order": 4, "name": "categories", "value": [5030, 5040], "type": "select"}
            ],
            "implementationName": "Newznab", "implementation": "Newznab",
            "configContract": "NewznabSettings", "infoLink": "https://wiki", "tags": [3], "id": 7
        }"#;
        let out: IndexerOutput = serde_json::from_str(json).unwrap();
        assert_eq!(out.id, 7);
        assert_eq!(out.protocol, Protocol::Usenet);
        assert_eq!(out.fields.len(), 2);
        assert_eq!(out.fields[1].field_type.as_deref(), Some("select"));
        assert_eq!(
            out.fields[1].value.as_ref().unwrap().as_i64_list().unwrap(),
            vec![5030, 5040]
        );
    }

    #[test]
    fn test_output_copies_into_input() {
        let output = IndexerOutput {
            id: 9,
            name: "Jackett".into(),
            priority: 10,
            tags: vec![1],
            implementation: "Torznab".into(),
            fields: vec![FieldOutput {
                name: "apiKey".into(),
                label: Some("API Key".into()),
                value: Some(FieldValue::from("secret")),
                ..Default::default()
            }],
            ..Default::default()
        };
        let mut input = IndexerInput::default();
        copy_indexer(&output, &mut input, false).unwrap();

        assert_eq!(input.id, 0);
        assert!(input.tags.is_empty());
        assert_eq!(input.implementation, "Torznab");
        assert_eq!(input.fields, vec![FieldInput::new("apiKey", "secret")]);
    }

    #[test]
    fn test_download_client_id_wire_name() {
        let input = IndexerInput {
            download_client_id: 15,
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["downloadClientId"], 15);
    }
}
