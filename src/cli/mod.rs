//
//  starr
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod activity;
mod api;
mod config;
mod indexers;
mod status;

pub use activity::{ActivityCommand, ActivityKind};
pub use api::ApiCommand;
pub use config::ConfigCommand;
pub use indexers::IndexersCommand;
pub use status::{StatusCommand, TagsCommand};

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::api::common::App;
use crate::api::lidarr::Lidarr;
use crate::api::prowlarr::Prowlarr;
use crate::api::radarr::Radarr;
use crate::api::readarr::Readarr;
use crate::api::servarr::{MediaServarr, Servarr};
use crate::api::sonarr::Sonarr;
use crate::api::Client;
use crate::config::{Config, InstanceConfig};

/// starr - Talk to Sonarr, Radarr, Lidarr, Readarr and Prowlarr
#[derive(Parser, Debug)]
#[command(
    name = "starr",
    version,
    about = "Work with Servarr applications from the command line",
    long_about = "starr talks to Sonarr, Radarr, Lidarr, Readarr and Prowlarr over their REST APIs.\n\n\
                  Register instances with 'starr config add', then query them by name.",
    propagate_version = true,
    after_help = "Use 'starr <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Configured instance to talk to
    #[arg(long, short = 'i', global = true, env = "STARR_INSTANCE")]
    pub instance: Option<String>,

    /// Path of the configuration file
    #[arg(long, global = true, env = "STARR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Log every request and response (shown with STARR_DEBUG=debug)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show system status of an instance
    Status(StatusCommand),

    /// List tags
    Tags(TagsCommand),

    /// Show history
    History(ActivityCommand),

    /// Show the download queue
    Queue(ActivityCommand),

    /// Show blocklisted releases
    Blocklist(ActivityCommand),

    /// List or copy indexers
    #[command(visible_alias = "idx")]
    Indexers(IndexersCommand),

    /// Make API requests
    Api(ApiCommand),

    /// Manage CLI configuration and instances
    Config(ConfigCommand),

    /// Print version information
    Version,
}

impl GlobalOptions {
    pub fn load_config(&self) -> Result<Config> {
        Config::load(self.config.as_deref())
    }

    /// Loads the configuration and resolves `--instance` (or `name` when given).
    pub fn resolve(&self, name: Option<&str>) -> Result<(String, InstanceConfig, Config)> {
        let config = self.load_config()?;
        let (name, instance) = config.instance(name.or(self.instance.as_deref()))?;
        let (name, instance) = (name.to_string(), instance.clone());
        Ok((name, instance, config))
    }
}

/// A connection to a configured instance.
pub struct Connection {
    pub name: String,
    pub instance: InstanceConfig,
    config: Config,
    verbose: bool,
}

impl Connection {
    pub fn open(global: &GlobalOptions, name: Option<&str>) -> Result<Self> {
        let (name, instance, config) = global.resolve(name)?;
        Ok(Self {
            name,
            instance,
            config,
            verbose: global.verbose,
        })
    }

    pub fn app(&self) -> App {
        self.instance.app
    }

    /// A raw transport for the instance.
    pub fn client(&self) -> Result<Client> {
        self.instance
            .client_config(&self.config.log, self.verbose)
            .build()
            .with_context(|| format!("Invalid settings for instance '{}'", self.name))
    }

    /// The typed client for the instance's service.
    pub fn servarr(&self) -> Result<Box<dyn Servarr>> {
        let client = self.client()?;
        let service: Box<dyn Servarr> = match self.app() {
            App::Sonarr => Box::new(Sonarr::with_api(client)),
            App::Radarr => Box::new(Radarr::with_api(client)),
            App::Lidarr => Box::new(Lidarr::with_api(client)),
            App::Readarr => Box::new(Readarr::with_api(client)),
            App::Prowlarr => Box::new(Prowlarr::with_api(client)),
        };
        Ok(service)
    }

    /// The typed client for a media service. `None` for Prowlarr.
    pub fn media(&self) -> Result<Option<Box<dyn MediaServarr>>> {
        let client = self.client()?;
        let service: Box<dyn MediaServarr> = match self.app() {
            App::Sonarr => Box::new(Sonarr::with_api(client)),
            App::Radarr => Box::new(Radarr::with_api(client)),
            App::Lidarr => Box::new(Lidarr::with_api(client)),
            App::Readarr => Box::new(Readarr::with_api(client)),
            App::Prowlarr => return Ok(None),
        };
        Ok(Some(service))
    }
}
