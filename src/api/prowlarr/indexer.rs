//
//  starr
//  api/prowlarr/indexer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Prowlarr indexers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Prowlarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{FieldInput, FieldOutput, Identified, Protocol, Result};
use crate::api::request::Request;
use crate::api::servarr::{add_provider, update_provider};

const BP_INDEXER: &str = "v1/indexer";

/// An indexer as sent on add and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexerInput {
    pub enable: bool,
    pub redirect: bool,
    pub priority: i64,
    pub app_profile_id: i64,
    pub id: i64,
    pub name: String,
    pub config_contract: String,
    pub implementation: String,
    pub protocol: Protocol,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldInput>,
}

/// An indexer as returned by Prowlarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct IndexerOutput {
    pub enable: bool,
    pub redirect: bool,
    pub supports_rss: bool,
    pub supports_search: bool,
    pub supports_redirect: bool,
    pub priority: i64,
    pub app_profile_id: i64,
    pub id: i64,
    pub name: String,
    pub sort_name: String,
    pub definition_name: String,
    pub description: String,
    pub language: String,
    pub encoding: String,
    /// `public`, `semiPrivate` or `private`.
    pub privacy: String,
    pub indexer_urls: Vec<String>,
    pub legacy_urls: Vec<String>,
    pub config_contract: String,
    pub implementation: String,
    pub implementation_name: String,
    pub info_link: String,
    pub protocol: Protocol,
    pub added: Option<DateTime<Utc>>,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

impl Identified for IndexerInput {
    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn tags_mut(&mut self) -> &mut Vec<i64> {
        &mut self.tags
    }
}

impl Identified for IndexerOutput {
    fn id_mut(&mut self) -> &mut i64 {
        &mut self.id
    }

    fn tags_mut(&mut self) -> &mut Vec<i64> {
        &mut self.tags
    }
}

impl Prowlarr {
    pub async fn get_indexers(&self) -> Result<Vec<IndexerOutput>> {
        self.api.get_into(Request::new(BP_INDEXER)).await
    }

    pub async fn get_indexer(&self, id: i64) -> Result<IndexerOutput> {
        self.api
            .get_into(Request::new(format!("{BP_INDEXER}/{id}")))
            .await
    }

    /// Adds an indexer with `forceSave=true`, skipping Prowlarr's connection test.
    pub async fn add_indexer(&self, indexer: &IndexerInput) -> Result<IndexerOutput> {
        add_provider(self.api.as_ref(), BP_INDEXER.to_string(), indexer).await
    }

    pub async fn update_indexer(&self, indexer: &IndexerInput, force: bool) -> Result<IndexerOutput> {
        let uri = format!("{BP_INDEXER}/{}", indexer.id);
        update_provider(self.api.as_ref(), uri, indexer, force).await
    }

    pub async fn delete_indexer(&self, id: i64) -> Result<()> {
        self.api
            .delete_any(Request::new(format!("{BP_INDEXER}/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::common::copy_indexer;

    #[test]
    fn test_output_copies_into_input() {
        let json = r#"{
            "id": 8, "name": "Nyaa", "enable": true, "priority": 25,
            "appProfileId": 1, "protocol": "torrent", "privacy": "public",
            "implementation": "Cardigann", "configContract": "CardigannSettings",
            "tags": [2], "indexerUrls": ["https://nyaa.si/"],
            "fields": [{"order": 0, "name": "definitionFile", "value": "nyaasi"}]
        }"#;
        let output: IndexerOutput = serde_json::from_str(json).unwrap();
        let mut input = IndexerInput::default();
        copy_indexer(&output, &mut input, false).unwrap();

        assert_eq!(input.id, 0);
        assert!(input.tags.is_empty());
        assert_eq!(input.name, "Nyaa");
        assert_eq!(input.app_profile_id, 1);
        assert_eq!(input.protocol, Protocol::Torrent);
        assert_eq!(input.fields[0].name, "definitionFile");
    }
}
