//
//  starr
//  api/servarr/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Endpoints shared across the Servarr family.
//!
//! Sonarr, Radarr, Lidarr and Readarr grew from the same code base and still
//! share most of their configuration API. Those endpoints are written once,
//! as provided methods on two traits, and each service client only supplies
//! its transport and [`App`].
//!
//! # Overview
//!
//! | Trait | Implemented by | Endpoints |
//! |-------|----------------|-----------|
//! | [`Servarr`] | all five services | system status, tags, commands |
//! | [`MediaServarr`] | Sonarr, Radarr, Lidarr, Readarr | indexers, download clients, notifications, root folders, remote path mappings, delay and quality profiles |
//!
//! # Example
//!
//! ```rust,no_run
//! use starr::api::servarr::{MediaServarr, Servarr};
//! use starr::api::sonarr::Sonarr;
//! use starr::api::Config;
//!
//! # async fn run() -> starr::Result<()> {
//! let sonarr = Sonarr::new(Config::new("http://localhost:8989", "key"))?;
//! println!("{}", sonarr.get_system_status().await?.version);
//!
//! for folder in sonarr.get_root_folders().await? {
//!     println!("{} ({} bytes free)", folder.path, folder.free_space);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Notes
//!
//! - Add and update of providers always send `forceSave`, which skips the
//!   service's connection test when `true`
//! - Every URI carries the service's API version, e.g. `v3/tag` on Sonarr and
//!   `v1/tag` on Lidarr

mod folders;
mod profiles;
mod providers;
mod settings;
mod system;

pub use folders::*;
pub use profiles::*;
pub use providers::*;
pub use settings::*;
pub use system::*;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::client::{Apier, ApierExt};
use crate::api::common::{collect_pages, App, Page, PageReq, Result};
use crate::api::request::Request;

/// Fetches one page of a paged endpoint.
pub async fn get_page<T>(api: &dyn Apier, uri: &str, req: PageReq) -> Result<Page<T>>
where
    T: DeserializeOwned + Send,
{
    api.get_into(Request::new(uri).with_query(req.to_params()))
        .await
}

/// Drains a paged endpoint with [`collect_pages`].
///
/// Sort, filter and extra parameters of `base` are sent with every page; its
/// page number and size are replaced by the aggregator's.
pub async fn get_all_pages<T>(
    api: &dyn Apier,
    uri: &str,
    base: &PageReq,
    records: usize,
    per_page: usize,
) -> Result<Page<T>>
where
    T: DeserializeOwned + Send,
{
    collect_pages(records, per_page, |req| {
        let mut page = base.clone();
        page.page = req.page;
        page.page_size = req.page_size;
        get_page(api, uri, page)
    })
    .await
}

/// POSTs a provider with `forceSave=true`.
pub(crate) async fn add_provider<I, O>(api: &dyn Apier, uri: String, input: &I) -> Result<O>
where
    I: Serialize + Sync + ?Sized,
    O: DeserializeOwned + Send,
{
    let req = Request::new(uri)
        .with_param("forceSave", true)
        .with_json(input)?;
    api.post_into(req).await
}

/// PUTs a provider to `uri/{id}` with the given `forceSave`.
pub(crate) async fn update_provider<I, O>(
    api: &dyn Apier,
    uri: String,
    input: &I,
    force: bool,
) -> Result<O>
where
    I: Serialize + Sync + ?Sized,
    O: DeserializeOwned + Send,
{
    let req = Request::new(uri)
        .with_param("forceSave", force)
        .with_json(input)?;
    api.put_into(req).await
}

/// Endpoints every Servarr service exposes.
#[async_trait]
pub trait Servarr: Send + Sync {
    /// The transport calls go through.
    fn api(&self) -> &dyn Apier;

    /// Which service this client talks to.
    fn app(&self) -> App;

    /// Prefixes `resource` with the service's API version.
    fn path(&self, resource: &str) -> String {
        format!("{}/{}", self.app().api_version(), resource)
    }

    async fn get_system_status(&self) -> Result<SystemStatus> {
        self.api()
            .get_into(Request::new(self.path("system/status")))
            .await
    }

    async fn get_tags(&self) -> Result<Vec<Tag>> {
        self.api().get_into(Request::new(self.path("tag"))).await
    }

    async fn get_tag(&self, id: i64) -> Result<Tag> {
        self.api()
            .get_into(Request::new(self.path(&format!("tag/{id}"))))
            .await
    }

    /// Creates a tag and returns it with its new ID.
    async fn add_tag(&self, tag: &Tag) -> Result<Tag> {
        let req = Request::new(self.path("tag")).with_json(tag)?;
        self.api().post_into(req).await
    }

    async fn update_tag(&self, tag: &Tag) -> Result<Tag> {
        let req = Request::new(self.path(&format!("tag/{}", tag.id))).with_json(tag)?;
        self.api().put_into(req).await
    }

    async fn delete_tag(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("tag/{id}"))))
            .await
    }

    /// Queues a command and returns its initial state.
    async fn send_command(&self, command: &CommandRequest) -> Result<CommandResponse> {
        let req = Request::new(self.path("command")).with_json(command)?;
        self.api().post_into(req).await
    }

    async fn get_command_status(&self, id: i64) -> Result<CommandResponse> {
        self.api()
            .get_into(Request::new(self.path(&format!("command/{id}"))))
            .await
    }

    /// Lists queued and recently finished commands.
    async fn get_commands(&self) -> Result<Vec<CommandResponse>> {
        self.api().get_into(Request::new(self.path("command"))).await
    }
}

/// Configuration endpoints shared by the four media services.
#[async_trait]
pub trait MediaServarr: Servarr {
    async fn get_indexers(&self) -> Result<Vec<IndexerOutput>> {
        self.api().get_into(Request::new(self.path("indexer"))).await
    }

    async fn get_indexer(&self, id: i64) -> Result<IndexerOutput> {
        self.api()
            .get_into(Request::new(self.path(&format!("indexer/{id}"))))
            .await
    }

    async fn add_indexer(&self, indexer: &IndexerInput) -> Result<IndexerOutput> {
        add_provider(self.api(), self.path("indexer"), indexer).await
    }

    /// Updates an indexer. `force` saves even if the connection test fails.
    async fn update_indexer(&self, indexer: &IndexerInput, force: bool) -> Result<IndexerOutput> {
        let uri = self.path(&format!("indexer/{}", indexer.id));
        update_provider(self.api(), uri, indexer, force).await
    }

    async fn delete_indexer(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("indexer/{id}"))))
            .await
    }

    async fn get_download_clients(&self) -> Result<Vec<DownloadClientOutput>> {
        self.api()
            .get_into(Request::new(self.path("downloadclient")))
            .await
    }

    async fn get_download_client(&self, id: i64) -> Result<DownloadClientOutput> {
        self.api()
            .get_into(Request::new(self.path(&format!("downloadclient/{id}"))))
            .await
    }

    async fn add_download_client(&self, client: &DownloadClientInput) -> Result<DownloadClientOutput> {
        add_provider(self.api(), self.path("downloadclient"), client).await
    }

    async fn update_download_client(
        &self,
        client: &DownloadClientInput,
        force: bool,
    ) -> Result<DownloadClientOutput> {
        let uri = self.path(&format!("downloadclient/{}", client.id));
        update_provider(self.api(), uri, client, force).await
    }

    async fn delete_download_client(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("downloadclient/{id}"))))
            .await
    }

    async fn get_notifications(&self) -> Result<Vec<NotificationOutput>> {
        self.api()
            .get_into(Request::new(self.path("notification")))
            .await
    }

    async fn get_notification(&self, id: i64) -> Result<NotificationOutput> {
        self.api()
            .get_into(Request::new(self.path(&format!("notification/{id}"))))
            .await
    }

    async fn add_notification(&self, notification: &NotificationInput) -> Result<NotificationOutput> {
        add_provider(self.api(), self.path("notification"), notification).await
    }

    async fn update_notification(
        &self,
        notification: &NotificationInput,
        force: bool,
    ) -> Result<NotificationOutput> {
        let uri = self.path(&format!("notification/{}", notification.id));
        update_provider(self.api(), uri, notification, force).await
    }

    async fn delete_notification(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("notification/{id}"))))
            .await
    }

    async fn get_root_folders(&self) -> Result<Vec<RootFolder>> {
        self.api().get_into(Request::new(self.path("rootfolder"))).await
    }

    async fn get_root_folder(&self, id: i64) -> Result<RootFolder> {
        self.api()
            .get_into(Request::new(self.path(&format!("rootfolder/{id}"))))
            .await
    }

    async fn add_root_folder(&self, folder: &RootFolder) -> Result<RootFolder> {
        let req = Request::new(self.path("rootfolder")).with_json(folder)?;
        self.api().post_into(req).await
    }

    async fn delete_root_folder(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("rootfolder/{id}"))))
            .await
    }

    async fn get_remote_path_mappings(&self) -> Result<Vec<RemotePathMapping>> {
        self.api()
            .get_into(Request::new(self.path("remotepathmapping")))
            .await
    }

    async fn get_remote_path_mapping(&self, id: i64) -> Result<RemotePathMapping> {
        self.api()
            .get_into(Request::new(self.path(&format!("remotepathmapping/{id}"))))
            .await
    }

    async fn add_remote_path_mapping(&self, mapping: &RemotePathMapping) -> Result<RemotePathMapping> {
        let req = Request::new(self.path("remotepathmapping")).with_json(mapping)?;
        self.api().post_into(req).await
    }

    async fn update_remote_path_mapping(&self, mapping: &RemotePathMapping) -> Result<RemotePathMapping> {
        let req = Request::new(self.path(&format!("remotepathmapping/{}", mapping.id)))
            .with_json(mapping)?;
        self.api().put_into(req).await
    }

    async fn delete_remote_path_mapping(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("remotepathmapping/{id}"))))
            .await
    }

    async fn get_delay_profiles(&self) -> Result<Vec<DelayProfile>> {
        self.api().get_into(Request::new(self.path("delayprofile"))).await
    }

    async fn get_delay_profile(&self, id: i64) -> Result<DelayProfile> {
        self.api()
            .get_into(Request::new(self.path(&format!("delayprofile/{id}"))))
            .await
    }

    async fn add_delay_profile(&self, profile: &DelayProfile) -> Result<DelayProfile> {
        let req = Request::new(self.path("delayprofile")).with_json(profile)?;
        self.api().post_into(req).await
    }

    async fn update_delay_profile(&self, profile: &DelayProfile) -> Result<DelayProfile> {
        let req = Request::new(self.path(&format!("delayprofile/{}", profile.id)))
            .with_json(profile)?;
        self.api().put_into(req).await
    }

    async fn delete_delay_profile(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("delayprofile/{id}"))))
            .await
    }

    async fn get_quality_profiles(&self) -> Result<Vec<QualityProfile>> {
        self.api()
            .get_into(Request::new(self.path("qualityprofile")))
            .await
    }

    async fn get_quality_profile(&self, id: i64) -> Result<QualityProfile> {
        self.api()
            .get_into(Request::new(self.path(&format!("qualityprofile/{id}"))))
            .await
    }

    async fn add_quality_profile(&self, profile: &QualityProfile) -> Result<QualityProfile> {
        let req = Request::new(self.path("qualityprofile")).with_json(profile)?;
        self.api().post_into(req).await
    }

    async fn update_quality_profile(&self, profile: &QualityProfile) -> Result<QualityProfile> {
        let req = Request::new(self.path(&format!("qualityprofile/{}", profile.id)))
            .with_json(profile)?;
        self.api().put_into(req).await
    }

    async fn delete_quality_profile(&self, id: i64) -> Result<()> {
        self.api()
            .delete_any(Request::new(self.path(&format!("qualityprofile/{id}"))))
            .await
    }
}
