//
//  starr
//  api/prowlarr/applications.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connected applications (the services Prowlarr syncs indexers to).

use serde::{Deserialize, Serialize};

use super::Prowlarr;
use crate::api::client::ApierExt;
use crate::api::common::{FieldOutput, Result};
use crate::api::request::Request;

const BP_APPLICATIONS: &str = "v1/applications";

/// An application as returned by Prowlarr.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: i64,
    pub name: String,
    /// `disabled`, `addOnly`, `fullSync`.
    pub sync_level: String,
    pub implementation: String,
    pub implementation_name: String,
    pub config_contract: String,
    pub info_link: String,
    pub tags: Vec<i64>,
    pub fields: Vec<FieldOutput>,
}

impl Prowlarr {
    pub async fn get_applications(&self) -> Result<Vec<Application>> {
        self.api.get_into(Request::new(BP_APPLICATIONS)).await
    }
}
