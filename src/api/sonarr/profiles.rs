//
//  starr
//  api/sonarr/profiles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Language and release profiles.

use serde::{Deserialize, Deserializer, Serialize};

use super::Sonarr;
use crate::api::client::{Apier, ApierExt};
use crate::api::common::{Language, Result};
use crate::api::request::Request;

const BP_LANGUAGE_PROFILE: &str = "v3/languageprofile";
const BP_RELEASE_PROFILE: &str = "v3/releaseprofile";

/// Allowed languages and the upgrade cutoff (Sonarr v3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageProfile {
    pub id: i64,
    pub name: String,
    pub upgrade_allowed: bool,
    pub cutoff: Language,
    pub languages: Vec<LanguageItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageItem {
    pub language: Language,
    pub allowed: bool,
}

/// Release title terms to require or reject.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReleaseProfile {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    #[serde(deserialize_with = "terms")]
    pub required: Vec<String>,
    #[serde(deserialize_with = "terms")]
    pub ignored: Vec<String>,
    /// 0 applies to every indexer.
    pub indexer_id: i64,
    pub tags: Vec<i64>,
}

/// Older Sonarr sends terms as one comma-separated string; newer as a list.
fn terms<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Terms {
        List(Vec<String>),
        Joined(String),
    }

    Ok(match Option::<Terms>::deserialize(deserializer)? {
        Some(Terms::List(list)) => list,
        Some(Terms::Joined(joined)) => joined
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect(),
        None => Vec::new(),
    })
}

impl Sonarr {
    pub async fn get_language_profiles(&self) -> Result<Vec<LanguageProfile>> {
        self.api.get_into(Request::new(BP_LANGUAGE_PROFILE)).await
    }

    pub async fn get_language_profile(&self, id: i64) -> Result<LanguageProfile> {
        self.api
            .get_into(Request::new(format!("{BP_LANGUAGE_PROFILE}/{id}")))
            .await
    }

    pub async fn add_language_profile(&self, profile: &LanguageProfile) -> Result<LanguageProfile> {
        let req = Request::new(BP_LANGUAGE_PROFILE).with_json(profile)?;
        self.api.post_into(req).await
    }

    pub async fn update_language_profile(&self, profile: &LanguageProfile) -> Result<LanguageProfile> {
        let req = Request::new(format!("{BP_LANGUAGE_PROFILE}/{}", profile.id)).with_json(profile)?;
        self.api.put_into(req).await
    }

    pub async fn delete_language_profile(&self, id: i64) -> Result<()> {
        self.api
            .delete_any(Request::new(format!("{BP_LANGUAGE_PROFILE}/{id}")))
            .await
    }

    pub async fn get_release_profiles(&self) -> Result<Vec<ReleaseProfile>> {
        self.api.get_into(Request::new(BP_RELEASE_PROFILE)).await
    }

    pub async fn get_release_profile(&self, id: i64) -> Result<ReleaseProfile> {
        self.api
            .get_into(Request::new(format!("{BP_RELEASE_PROFILE}/{id}")))
            .await
    }

    pub async fn add_release_profile(&self, profile: &ReleaseProfile) -> Result<ReleaseProfile> {
        let req = Request::new(BP_RELEASE_PROFILE).with_json(profile)?;
        self.api.post_into(req).await
    }

    pub async fn update_release_profile(&self, profile: &ReleaseProfile) -> Result<ReleaseProfile> {
        let req = Request::new(format!("{BP_RELEASE_PROFILE}/{}", profile.id)).with_json(profile)?;
        self.api.put_into(req).await
    }

    pub async fn delete_release_profile(&self, id: i64) -> Result<()> {
        self.api
            .delete_any(Request::new(format!("{BP_RELEASE_PROFILE}/{id}")))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_profile_terms_both_shapes() {
        let list: ReleaseProfile =
            serde_json::from_str(r#"{"id":1,"required":["x265","HEVC"],"ignored":[]}"#).unwrap();
        assert_eq!(list.required, vec!["x265", "HEVC"]);

        let joined: ReleaseProfile =
            serde_json::from_str(r#"{"id":2,"required":"x265, HEVC","ignored":null}"#).unwrap();
        assert_eq!(joined.required, vec!["x265", "HEVC"]);
        assert!(joined.ignored.is_empty());
    }

    #[test]
    fn test_language_profile_decodes() {
        let json = r#"{"id":1,"name":"English","upgradeAllowed":false,
            "cutoff":{"id":1,"name":"English"},
            "languages":[{"language":{"id":1,"name":"English"},"allowed":true}]}"#;
        let profile: LanguageProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.cutoff.name, "English");
        assert!(profile.languages[0].allowed);
    }
}
