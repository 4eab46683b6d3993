//
//  starr
//  cli/status.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! System status and tag commands

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::api::servarr::{Servarr, SystemStatus, Tag};
use crate::output::{format_status, print_field, OutputFormat, OutputWriter, TableBuilder, TableOutput};

use super::{Connection, GlobalOptions};

/// Show system status
#[derive(Args, Debug)]
pub struct StatusCommand {
    /// Check every configured instance
    #[arg(long, short = 'a')]
    pub all: bool,
}

/// List tags of an instance
#[derive(Args, Debug)]
pub struct TagsCommand {}

#[derive(Serialize)]
struct InstanceStatus {
    instance: String,
    app: String,
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    status: Option<SystemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl TableOutput for InstanceStatus {
    fn print_table(&self, color: bool) {
        print_field("Instance", &self.instance, color);
        print_field("App", &self.app, color);
        print_field("URL", &self.url, color);
        match (&self.status, &self.error) {
            (Some(status), _) => {
                print_field("Version", &status.version, color);
                print_field("Branch", &status.branch, color);
                print_field("OS", &format!("{} {}", status.os_name, status.os_version), color);
                print_field("Docker", if status.is_docker { "yes" } else { "no" }, color);
                if let Some(started) = status.start_time {
                    print_field("Started", &started.to_rfc3339(), color);
                }
            }
            (None, Some(error)) => {
                print_field("Status", &format_status("error", color), color);
                println!("  {error}");
            }
            (None, None) => {}
        }
    }
}

impl TableOutput for [InstanceStatus] {
    fn print_table(&self, color: bool) {
        let rows = self.iter().map(|s| {
            let (version, state) = match (&s.status, &s.error) {
                (Some(status), _) => (status.version.clone(), format_status("ok", color)),
                (None, Some(_)) => (String::new(), format_status("error", color)),
                (None, None) => (String::new(), String::new()),
            };
            vec![s.instance.clone(), s.app.clone(), s.url.clone(), version, state]
        });
        TableBuilder::new()
            .color(color)
            .headers(["Instance", "App", "URL", "Version", "Status"])
            .rows(rows)
            .print();
    }
}

async fn check(conn: &Connection) -> InstanceStatus {
    let status = match conn.servarr() {
        Ok(service) => service.get_system_status().await.map_err(anyhow::Error::from),
        Err(err) => Err(err),
    };
    let (status, error) = match status {
        Ok(status) => (Some(status), None),
        Err(err) => (None, Some(format!("{err:#}"))),
    };
    InstanceStatus {
        instance: conn.name.clone(),
        app: conn.app().to_string(),
        url: conn.instance.url.clone(),
        status,
        error,
    }
}

impl StatusCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));

        if !self.all {
            let conn = Connection::open(global, None)?;
            let status = conn
                .servarr()?
                .get_system_status()
                .await
                .with_context(|| format!("Failed to reach instance '{}'", conn.name))?;
            let result = InstanceStatus {
                instance: conn.name.clone(),
                app: conn.app().to_string(),
                url: conn.instance.url.clone(),
                status: Some(status),
                error: None,
            };
            return writer.write(&result);
        }

        let config = global.load_config()?;
        let mut results = Vec::with_capacity(config.instances.len());
        for name in config.instances.keys() {
            let conn = Connection::open(global, Some(name))?;
            results.push(check(&conn).await);
        }
        writer.write(results.as_slice())
    }
}

impl TableOutput for [Tag] {
    fn print_table(&self, color: bool) {
        let rows = self.iter().map(|t| vec![t.id.to_string(), t.label.clone()]);
        TableBuilder::new()
            .color(color)
            .headers(["ID", "Label"])
            .rows(rows)
            .print();
    }
}

impl TagsCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(OutputFormat::from_flag(global.json));
        let conn = Connection::open(global, None)?;
        let tags = conn
            .servarr()?
            .get_tags()
            .await
            .with_context(|| format!("Failed to list tags of '{}'", conn.name))?;
        writer.write(tags.as_slice())
    }
}
