//
//  starr
//  api/servarr/profiles.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Quality and delay profiles.

use serde::{Deserialize, Serialize};

use crate::api::common::{Protocol, Quality};

/// A quality profile: the allowed qualities, their order, and the cutoff.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityProfile {
    pub id: i64,
    pub name: String,
    pub upgrade_allowed: bool,
    /// Quality (or group) ID at which upgrades stop.
    pub cutoff: i64,
    pub items: Vec<QualityProfileItem>,
    pub min_format_score: i64,
    pub cutoff_format_score: i64,
    pub format_items: Vec<FormatItem>,
}

impl QualityProfile {
    /// Names of the allowed qualities, groups flattened.
    pub fn allowed_qualities(&self) -> Vec<&str> {
        fn walk<'a>(items: &'a [QualityProfileItem], out: &mut Vec<&'a str>) {
            for item in items {
                if !item.allowed {
                    continue;
                }
                if let Some(quality) = &item.quality {
                    out.push(&quality.name);
                }
                walk(&item.items, out);
            }
        }

        let mut out = Vec::new();
        walk(&self.items, &mut out);
        out
    }
}

/// One row of a quality profile: a single quality or a named group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QualityProfileItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<Quality>,
    pub items: Vec<QualityProfileItem>,
    pub allowed: bool,
}

/// Custom format score inside a quality profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatItem {
    pub format: i64,
    pub name: String,
    pub score: i64,
}

/// A delay profile: how long to wait for a better release per protocol.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DelayProfile {
    pub id: i64,
    pub enable_usenet: bool,
    pub enable_torrent: bool,
    pub preferred_protocol: Protocol,
    /// Minutes.
    pub usenet_delay: i64,
    /// Minutes.
    pub torrent_delay: i64,
    pub bypass_if_highest_quality: bool,
    pub bypass_if_above_custom_format_score: bool,
    pub minimum_custom_format_score: i64,
    pub order: i64,
    pub tags: Vec<i64>,
}
